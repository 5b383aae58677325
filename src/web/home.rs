use axum::{Extension, response::Html};

use super::{auth::CurrentUser, views};

/// GET /
pub async fn home(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Html<String> {
    Html(views::home_page(&user))
}
