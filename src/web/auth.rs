use axum::{
    Form,
    extract::{Request, State, rejection::FormRejection},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;
use tower_sessions::Session;

use super::{AppState, WebError, forms::LoginForm, observability::RequestSpan, views};
use crate::services::AuthError;

/// Session key holding the logged-in username.
pub const SESSION_USER_KEY: &str = "user";

/// Shown for every failed login, whatever the reason.
pub const INVALID_LOGIN: &str = "Ongeldige gebruikersnaam of wachtwoord";

/// Username of the logged-in user, inserted by [`auth_middleware`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

/// `302 Found` to `location`.
pub fn found(location: &str) -> Response {
    let mut response = StatusCode::FOUND.into_response();
    if let Ok(value) = HeaderValue::from_str(location) {
        response.headers_mut().insert(header::LOCATION, value);
    }
    response
}

// ============================================================================
// Middleware
// ============================================================================

/// Lets the request through when the session carries a username; anything
/// else is redirected to the login page.
///
/// The username is trusted for the lifetime of the session and is not looked
/// up again on every request.
pub async fn auth_middleware(session: Session, mut request: Request, next: Next) -> Response {
    match session.get::<String>(SESSION_USER_KEY).await {
        Ok(Some(user)) => {
            if let Some(RequestSpan(span)) = request.extensions().get::<RequestSpan>() {
                span.record("user_id", user.as_str());
            }
            request.extensions_mut().insert(CurrentUser(user));
            next.run(request).await
        }
        Ok(None) => found("/login"),
        Err(e) => {
            tracing::warn!("Unreadable session, sending to login: {e}");
            found("/login")
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /login
pub async fn login_form() -> Html<String> {
    Html(views::login_page(None))
}

/// POST /login
pub async fn login(
    State(state): State<Arc<AppState>>,
    session: Session,
    form: Result<Form<LoginForm>, FormRejection>,
) -> Result<Response, WebError> {
    let Ok(Form(form)) = form else {
        return Ok(invalid_login());
    };

    let username = match state
        .auth_service()
        .login(&form.username, &form.password)
        .await
    {
        Ok(username) => username,
        Err(AuthError::InvalidCredentials | AuthError::UserNotFound(_)) => {
            return Ok(invalid_login());
        }
        Err(e) => return Err(e.into()),
    };

    // New id on login so a pre-login session id cannot be reused.
    session
        .cycle_id()
        .await
        .map_err(|e| WebError::internal(format!("Failed to rotate session: {e}")))?;
    session
        .insert(SESSION_USER_KEY, &username)
        .await
        .map_err(|e| WebError::internal(format!("Failed to create session: {e}")))?;

    Ok(found("/"))
}

/// GET /logout
pub async fn logout(session: Session) -> Response {
    if let Err(e) = session.flush().await {
        tracing::warn!("Failed to flush session on logout: {e}");
    }
    found("/login")
}

fn invalid_login() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Html(views::login_page(Some(INVALID_LOGIN))),
    )
        .into_response()
}
