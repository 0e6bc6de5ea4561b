//! Application state and router assembly
//!
//! The state owns the notes service, which owns the repository handle. It is
//! built once at startup and cloned into every request.

use crate::database::Repository;
use crate::routes;
use crate::services::NotesService;
use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub notes_service: NotesService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        let repo = Repository::new(pool);
        Self {
            notes_service: NotesService::new(repo),
        }
    }
}

/// CORS policy: any origin unless an explicit list is configured.
fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let Some(origins) = origins else {
        return CorsLayer::permissive();
    };

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Build the full router with tracing and CORS layers.
///
/// Note content has no size cap, so axum's default body limit is lifted.
pub fn build_router(state: AppState, cors_origins: Option<&[String]>) -> Router {
    routes::api_router()
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::create_memory_pool;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt; // for `oneshot`

    async fn preflight(app: Router, origin: &str) -> axum::response::Response {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/notes")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    #[tokio::test]
    async fn test_permissive_cors_by_default() {
        let pool = create_memory_pool().await.unwrap();
        let app = build_router(AppState::new(pool), None);

        let response = preflight(app, "http://anywhere.test").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn test_cors_origin_list() {
        let pool = create_memory_pool().await.unwrap();
        let origins = vec!["http://localhost:5173".to_string()];
        let app = build_router(AppState::new(pool), Some(&origins));

        let allowed = preflight(app.clone(), "http://localhost:5173").await;
        assert_eq!(
            allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );

        let denied = preflight(app, "http://evil.test").await;
        assert!(denied
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let pool = create_memory_pool().await.unwrap();
        let app = build_router(AppState::new(pool), None);

        let request = Request::builder()
            .uri("/api/unknown")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
