//! # Router
//!
//! Route table and shared state for the API.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use mercado_db::Database;

use crate::config::ApiConfig;
use crate::handlers::{meta, producto};

/// Shared application state, cloned into every handler.
///
/// Passed through axum's `State` extractor - there is no process-wide
/// singleton. `Database` clones are cheap (reference-counted pool).
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub config: ApiConfig,
}

/// Builds the application router.
///
/// CORS is wide open by contract: all origins, methods and headers, with
/// pre-flight requests answered 200. `TraceLayer` logs one span per
/// request.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(meta::index))
        .route("/health", get(meta::health))
        .route("/init", get(meta::init))
        .route("/productos", get(producto::listar).post(producto::crear))
        .route(
            "/productos/{id}",
            get(producto::obtener)
                .put(producto::actualizar)
                .delete(producto::eliminar),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    /// State over a lazy pool pointed at nothing: handlers that validate
    /// before querying never touch it, so these tests need no database.
    fn test_state() -> AppState {
        let config = ApiConfig {
            port: 0,
            db_host: "localhost".to_string(),
            db_port: 1,
            db_user: "test".to_string(),
            db_password: "test".to_string(),
            db_name: "test".to_string(),
            environment: "test".to_string(),
            deployment: "test".to_string(),
        };
        AppState {
            db: Database::connect(&config.db_config()),
            config,
        }
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_index_returns_directory() {
        let app = app(test_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["mensaje"], "API de Productos");
        assert_eq!(json["endpoints"]["productos"]["crear"], "POST /productos");
    }

    #[tokio::test]
    async fn test_crear_without_nombre_is_400() {
        let app = app(test_state());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/productos")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"precio":9.99}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Los campos nombre y precio son obligatorios");
    }

    #[tokio::test]
    async fn test_crear_without_precio_is_400() {
        let app = app(test_state());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/productos")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"nombre":"Widget"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Los campos nombre y precio son obligatorios");
    }

    #[tokio::test]
    async fn test_crear_with_empty_nombre_is_400() {
        let app = app(test_state());

        let request = Request::builder()
            .method(Method::POST)
            .uri("/productos")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"nombre":"","precio":9.99}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_preflight_answered_ok() {
        let app = app(test_state());

        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/productos")
            .header(header::ORIGIN, "https://example.com")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn test_cors_header_on_simple_request() {
        let app = app(test_state());

        let request = Request::builder()
            .uri("/")
            .header(header::ORIGIN, "https://example.com")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let app = app(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/no-such-route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
