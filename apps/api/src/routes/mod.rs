pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::session::handlers as session_handlers;
use crate::state::AppState;
use crate::strategy::handlers as strategy_handlers;
use crate::web;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(web::index_handler))
        .route("/health", get(health::health_handler))
        // Session lifecycle
        .route(
            "/api/v1/session",
            post(session_handlers::handle_create_session),
        )
        .route(
            "/api/v1/session/:id",
            get(session_handlers::handle_get_session)
                .delete(session_handlers::handle_reset_session),
        )
        .route(
            "/api/v1/session/:id/key",
            post(session_handlers::handle_set_api_key),
        )
        // Strategy generation
        .route("/api/v1/strategy", post(strategy_handlers::handle_analyze))
        .route(
            "/api/v1/strategy/:session_id/download",
            get(strategy_handlers::handle_download),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::config::Config;
    use crate::llm_client::GeminiClient;
    use crate::session::SessionStore;

    fn test_app() -> Router {
        build_router(AppState {
            config: Config {
                gemini_api_key: None,
                port: 8080,
                rust_log: "info".to_string(),
            },
            sessions: SessionStore::new(),
            generator: Arc::new(GeminiClient::new()),
        })
    }

    #[tokio::test]
    async fn test_health_route_responds_ok() {
        let response = test_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_index_serves_the_page() {
        let response = test_app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_unknown_session_returns_json_error_envelope() {
        let response = test_app()
            .oneshot(
                Request::get(format!("/api/v1/session/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
