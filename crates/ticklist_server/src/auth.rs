//! The access gate.
//!
//! Every route, static assets included, sits behind a single shared
//! basic-auth credential. There are no accounts, no sessions and no
//! expiry: one secret admits the whole deployment.
//!
//! The gate is a predicate over the raw `Authorization` header value, so
//! the policy can be swapped without touching request handling.

use axum::extract::{Request, State};
use axum::http::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::handler::AppState;

/// Policy deciding whether a request may pass the gate.
///
/// Implementations receive the raw `Authorization` header value, if one
/// was sent, and answer yes or no. A no becomes a 401 response carrying
/// the [`challenge`](AccessGate::challenge) header.
pub trait AccessGate: Send + Sync {
    /// Returns `true` if the given `Authorization` header value is
    /// acceptable.
    fn allows(&self, authorization: Option<&str>) -> bool;

    /// Returns the `WWW-Authenticate` value sent with a rejection.
    fn challenge(&self) -> String;
}

/// Gate that admits exactly one shared basic-auth credential.
///
/// The expected `Basic <base64>` header value is precomputed once, and
/// each request is checked with a whole-value comparison. A missing
/// header, another scheme, stray whitespace or a different credential
/// all miss.
pub struct SharedCredential {
    expected: String,
    realm: String,
}

impl SharedCredential {
    /// Creates a gate admitting `username:password`.
    #[must_use]
    pub fn new(username: &str, password: &str, realm: impl Into<String>) -> Self {
        let encoded = BASE64.encode(format!("{username}:{password}"));
        Self {
            expected: format!("Basic {encoded}"),
            realm: realm.into(),
        }
    }
}

impl AccessGate for SharedCredential {
    fn allows(&self, authorization: Option<&str>) -> bool {
        authorization == Some(self.expected.as_str())
    }

    fn challenge(&self) -> String {
        format!("Basic realm=\"{}\"", self.realm)
    }
}

/// Middleware enforcing the gate on every request.
///
/// A rejected request never reaches a handler and no data operation is
/// performed for it.
pub(crate) async fn require_credential(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let authorization = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if state.gate.allows(authorization) {
        return next.run(request).await;
    }

    tracing::debug!(path = %request.uri().path(), "request rejected at the gate");
    let mut response = (StatusCode::UNAUTHORIZED, "authentication required").into_response();
    if let Ok(value) = HeaderValue::from_str(&state.gate.challenge()) {
        response.headers_mut().insert(WWW_AUTHENTICATE, value);
    }
    response
}
