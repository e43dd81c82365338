//! Session cookie middleware and extractor for axum.
//!
//! This module provides:
//! - `session_middleware` - Layer that resolves the session cookie, creating
//!   a fresh session when the cookie is missing, malformed, or expired
//! - `CurrentSession` - Extractor that hands the resolved session id to handlers
//!
//! ```text
//! Request → session_middleware → injects CurrentSession into extensions
//!                                         ↓
//!                                 Handler → CurrentSession extractor
//!                                         ↓
//! Response ← Set-Cookie appended when the session is new
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::domain::foundation::SessionId;
use crate::ports::SessionStore;

/// Middleware state: where sessions live and how the cookie is written.
#[derive(Clone)]
pub struct SessionLayerState {
    pub store: Arc<dyn SessionStore>,
    pub cookie: SessionCookie,
}

/// Session cookie settings.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    pub name: String,
    pub secure: bool,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, secure: bool) -> Self {
        Self {
            name: name.into(),
            secure,
        }
    }

    /// Builds the `Set-Cookie` value for a session.
    pub fn header_value(&self, id: &SessionId) -> String {
        let mut value = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", self.name, id);
        if self.secure {
            value.push_str("; Secure");
        }
        value
    }

    /// Finds this cookie in the request headers and parses it as a session id.
    ///
    /// Browsers may send several `Cookie` headers; all are searched.
    pub fn read(&self, headers: &HeaderMap) -> Option<SessionId> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.name)
            .and_then(|(_, value)| value.trim().parse().ok())
    }
}

/// The session resolved for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentSession {
    pub id: SessionId,
    pub is_new: bool,
}

/// Resolves the session for every request.
///
/// 1. Reads the session id from the configured cookie
/// 2. Looks it up in the `SessionStore` port (which refreshes its idle timer)
/// 3. Creates a new session when there is no live match
/// 4. Injects `CurrentSession` into request extensions
/// 5. Appends `Set-Cookie` to the response for new sessions
pub async fn session_middleware(
    State(state): State<SessionLayerState>,
    mut request: Request,
    next: Next,
) -> Response {
    let existing = match state.cookie.read(request.headers()) {
        Some(id) => match state.store.find(&id).await {
            Ok(found) => found.map(|_| id),
            Err(e) => {
                tracing::error!(error = %e, "Session lookup failed");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        },
        None => None,
    };

    let current = match existing {
        Some(id) => CurrentSession { id, is_new: false },
        None => match state.store.create().await {
            Ok(handle) => CurrentSession {
                id: *handle.lock().await.id(),
                is_new: true,
            },
            Err(e) => {
                tracing::error!(error = %e, "Session creation failed");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        },
    };

    request.extensions_mut().insert(current);
    let mut response = next.run(request).await;

    if current.is_new {
        match HeaderValue::from_str(&state.cookie.header_value(&current.id)) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => tracing::error!(error = %e, "Invalid session cookie header"),
        }
    }

    response
}

/// Extractor for the session resolved by `session_middleware`.
///
/// Rejects with 500 if the middleware is not installed on the route.
#[async_trait]
impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = SessionRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentSession>()
            .copied()
            .ok_or(SessionRejection::MissingMiddleware)
    }
}

/// Rejection for `CurrentSession`.
#[derive(Debug, Clone, Copy)]
pub enum SessionRejection {
    MissingMiddleware,
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        match self {
            SessionRejection::MissingMiddleware => {
                tracing::error!("CurrentSession used without session_middleware");
                (StatusCode::INTERNAL_SERVER_ERROR, "Session unavailable").into_response()
            }
        }
    }
}
