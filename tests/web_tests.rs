use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;
use urenstaat::config::Config;
use urenstaat::state::SharedState;

const ADMIN_PASSWORD: &str = "correct horse battery";

fn test_config() -> Config {
    let db_path = std::env::temp_dir().join(format!("urenstaat-web-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_url = format!("sqlite:{}", db_path.display());
    config.server.secure_cookies = false;
    config.security.argon2_memory_cost_kib = 1024;
    config.security.argon2_time_cost = 1;
    config
}

async fn spawn_app() -> Router {
    let shared = SharedState::new(test_config())
        .await
        .expect("Failed to create shared state");
    shared
        .auth_service
        .bootstrap_admin("admin", Some(ADMIN_PASSWORD))
        .await
        .expect("Failed to create admin");

    let state = urenstaat::web::create_app_state(Arc::new(shared), None);
    urenstaat::web::router(state)
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn post_form(uri: &str, cookie: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}

fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(post_form(
            "/login",
            None,
            "username=admin&password=correct+horse+battery",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/");
    session_cookie(&response).expect("login should set a session cookie")
}

#[tokio::test]
async fn test_protected_pages_redirect_to_login() {
    let app = spawn_app().await;

    for uri in [
        "/",
        "/werknemers",
        "/uren",
        "/factuur",
        "/factuur_resultaat?werknemer_id=1&periode=2024-01",
        "/factuur/1/2024-01",
        "/metrics",
    ] {
        let response = app.clone().oneshot(get(uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FOUND, "{uri}");
        assert_eq!(location(&response), "/login", "{uri}");
    }

    let response = app
        .clone()
        .oneshot(post_form("/werknemers", None, "naam=Jan&uursalaris=20"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_login_page_and_health_are_public() {
    let app = spawn_app().await;

    let response = app.clone().oneshot(get("/login", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("name=\"username\""));
    assert!(html.contains("name=\"password\""));

    let response = app.clone().oneshot(get("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn test_login_grants_access() {
    let app = spawn_app().await;
    let cookie = login(&app).await;

    let response = app.clone().oneshot(get("/", Some(&cookie))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Ingelogd als admin"));
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let app = spawn_app().await;

    for body in [
        "username=admin&password=wrong",
        "username=nobody&password=correct+horse+battery",
        "username=&password=",
    ] {
        let response = app
            .clone()
            .oneshot(post_form("/login", None, body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{body}");
        assert!(session_cookie(&response).is_none(), "{body}");
        let html = body_text(response).await;
        assert!(html.contains("Ongeldige gebruikersnaam of wachtwoord"));
    }
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = spawn_app().await;
    let cookie = login(&app).await;

    let response = app
        .clone()
        .oneshot(get("/logout", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/login");

    let response = app
        .clone()
        .oneshot(get("/werknemers", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/login");
}

#[tokio::test]
async fn test_invoice_flow() {
    let app = spawn_app().await;
    let cookie = login(&app).await;

    let response = app
        .clone()
        .oneshot(post_form(
            "/werknemers",
            Some(&cookie),
            "naam=Jan+Jansen&adres=Kerkstraat+1&uursalaris=20",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/werknemers");

    for hours in ["10", "5"] {
        let response = app
            .clone()
            .oneshot(post_form(
                "/uren",
                Some(&cookie),
                &format!("werknemer_id=1&periode=2024-01&aantal_uren={hours}"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/uren");
    }

    let response = app
        .clone()
        .oneshot(get("/werknemers", Some(&cookie)))
        .await
        .unwrap();
    let html = body_text(response).await;
    assert!(html.contains("Jan Jansen"));
    assert!(html.contains("€ 20,00"));

    let response = app
        .clone()
        .oneshot(get("/factuur", Some(&cookie)))
        .await
        .unwrap();
    let html = body_text(response).await;
    assert!(html.contains("<option value=\"2024-01\">2024-01</option>"));

    let response = app
        .clone()
        .oneshot(get(
            "/factuur_resultaat?werknemer_id=1&periode=2024-01",
            Some(&cookie),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/factuur/1/2024-01");

    let response = app
        .clone()
        .oneshot(get("/factuur/1/2024-01", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("15,00"));
    assert!(html.contains("€ 300,00"));
    assert!(html.contains("Kerkstraat 1"));

    let response = app
        .clone()
        .oneshot(get("/factuur/1/2099-12", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("€ 0,00"));
}

#[tokio::test]
async fn test_invoice_redirect_encodes_period() {
    let app = spawn_app().await;
    let cookie = login(&app).await;

    let response = app
        .clone()
        .oneshot(get(
            "/factuur_resultaat?werknemer_id=3&periode=week%201%2F2",
            Some(&cookie),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), "/factuur/3/week%201%2F2");
}

#[tokio::test]
async fn test_invoice_for_period_with_slash_and_space() {
    let app = spawn_app().await;
    let cookie = login(&app).await;

    let response = app
        .clone()
        .oneshot(post_form(
            "/werknemers",
            Some(&cookie),
            "naam=Jan&uursalaris=12,5",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    for hours in ["6", "2"] {
        let response = app
            .clone()
            .oneshot(post_form(
                "/uren",
                Some(&cookie),
                &format!("werknemer_id=1&periode=week+1%2F2&aantal_uren={hours}"),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let response = app
        .clone()
        .oneshot(get("/factuur/1/week%201%2F2", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Periode: week 1/2"));
    assert!(html.contains("8,00"));
    assert!(html.contains("€ 100,00"));
}

#[tokio::test]
async fn test_unknown_employee_invoice_is_not_found() {
    let app = spawn_app().await;
    let cookie = login(&app).await;

    let response = app
        .clone()
        .oneshot(get("/factuur/42/2024-01", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_input_is_rejected() {
    let app = spawn_app().await;
    let cookie = login(&app).await;

    for (uri, body) in [
        ("/werknemers", "naam=&uursalaris=20"),
        ("/werknemers", "naam=Jan&uursalaris=twintig"),
        ("/werknemers", "naam=Jan&uursalaris=-5"),
        ("/uren", "werknemer_id=abc&periode=2024-01&aantal_uren=8"),
        ("/uren", "werknemer_id=1&periode=&aantal_uren=8"),
    ] {
        let response = app
            .clone()
            .oneshot(post_form(uri, Some(&cookie), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri} {body}");
    }

    let response = app
        .clone()
        .oneshot(get("/factuur/abc/2024-01", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_hours_for_unknown_employee_are_not_stored() {
    let app = spawn_app().await;
    let cookie = login(&app).await;

    let response = app
        .clone()
        .oneshot(post_form(
            "/uren",
            Some(&cookie),
            "werknemer_id=7&periode=2024-01&aantal_uren=8",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .clone()
        .oneshot(get("/factuur", Some(&cookie)))
        .await
        .unwrap();
    let html = body_text(response).await;
    assert!(html.contains("Er zijn nog geen uren geregistreerd"));
}

#[tokio::test]
async fn test_responses_carry_security_headers() {
    let app = spawn_app().await;

    let response = app.clone().oneshot(get("/login", None)).await.unwrap();
    let headers = response.headers();

    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
}
