use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use urenstaat::config::Config;
use urenstaat::state::SharedState;

/// Collects every value written to a `user_id` span field.
#[derive(Clone, Default)]
struct UserIds(Arc<Mutex<Vec<String>>>);

impl Visit for UserIds {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "user_id" {
            self.0.lock().unwrap().push(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "user_id" {
            self.0.lock().unwrap().push(format!("{value:?}"));
        }
    }
}

impl<S: Subscriber> Layer<S> for UserIds {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        attrs.record(&mut self.clone());
    }

    fn on_record(&self, _id: &Id, values: &Record<'_>, _ctx: Context<'_, S>) {
        values.record(&mut self.clone());
    }
}

// Every level is enabled, so the tower-http span is the current one while
// the auth gate runs.
#[tokio::test]
async fn test_user_id_recorded_on_request_span_at_debug_level() {
    let user_ids = UserIds::default();
    let _guard = tracing_subscriber::registry()
        .with(user_ids.clone())
        .set_default();

    let db_path =
        std::env::temp_dir().join(format!("urenstaat-trace-{}.db", uuid::Uuid::new_v4()));
    let mut config = Config::default();
    config.general.database_url = format!("sqlite:{}", db_path.display());
    config.server.secure_cookies = false;
    config.security.argon2_memory_cost_kib = 1024;
    config.security.argon2_time_cost = 1;

    let shared = SharedState::new(config).await.unwrap();
    shared
        .auth_service
        .bootstrap_admin("admin", Some("correct horse battery"))
        .await
        .unwrap();
    let app = urenstaat::web::router(urenstaat::web::create_app_state(Arc::new(shared), None));

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("username=admin&password=correct+horse+battery"))
                .unwrap(),
        )
        .await
        .unwrap();
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/werknemers")
                .header(header::COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    assert_eq!(*user_ids.0.lock().unwrap(), vec!["admin".to_string()]);
}
