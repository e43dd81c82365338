//! HTTP adapters - axum router, handlers, and middleware.
//!
//! `app_router` assembles the whole application: the list pages behind the
//! session middleware, a liveness probe, and the tower-http stack.

pub mod lists;
pub mod middleware;

use std::time::Duration;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use tower_http::{compression::CompressionLayer, timeout::TimeoutLayer, trace::TraceLayer};

pub use lists::{list_routes, TodoAppState};

use lists::handlers::not_found;
pub use middleware::{session_middleware, CurrentSession, SessionCookie, SessionLayerState};

/// Build the complete application router.
///
/// Layers, outermost first: request tracing, timeout, gzip compression,
/// then session resolution for every page route. `/health` and the
/// not-found fallback sit outside the session middleware, so probes and
/// stray paths never create sessions.
pub fn app_router(
    state: TodoAppState,
    cookie: SessionCookie,
    request_timeout: Duration,
) -> Router {
    let session_state = SessionLayerState {
        store: state.session_store.clone(),
        cookie,
    };

    let pages = list_routes().layer(from_fn_with_state(session_state, session_middleware));

    Router::new()
        .route("/health", get(health))
        .merge(pages)
        .fallback(not_found)
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}

/// GET /health - Liveness probe
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::render::HtmlRenderer;
    use crate::adapters::session_store::InMemorySessionStore;
    use crate::ports::SessionStore;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_skips_session_creation() {
        let store = Arc::new(InMemorySessionStore::new(60));
        let app = app_router(
            TodoAppState::new(store.clone(), Arc::new(HtmlRenderer::new())),
            SessionCookie::new("sid", false),
            Duration::from_secs(5),
        );

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        assert_eq!(store.count().await.unwrap(), 0);
    }
}
