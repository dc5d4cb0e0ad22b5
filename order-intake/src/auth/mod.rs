//! Capability check for the store status endpoints
//!
//! The caller presents a credential in the `x-api-key` header. What counts as
//! a valid credential is decided by a [`CredentialCheck`], so the shared-secret
//! comparison can be swapped for something stronger without touching the
//! store status logic.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use http::request::Parts;

/// Header carrying the shared secret
pub const API_KEY_HEADER: &str = "x-api-key";

pub trait CredentialCheck: Send + Sync {
    /// True when `presented` grants access
    fn authorize(&self, presented: Option<&str>) -> bool;
}

/// Exact equality against one configured secret
pub struct SharedSecret {
    secret: String,
}

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl CredentialCheck for SharedSecret {
    fn authorize(&self, presented: Option<&str>) -> bool {
        presented.is_some_and(|key| !key.is_empty() && key == self.secret)
    }
}

/// Credential presented with a request, if any
#[derive(Debug, Clone, Default)]
pub struct PresentedKey(pub Option<String>);

impl PresentedKey {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S: Send + Sync> FromRequestParts<S> for PresentedKey {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let key = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        Ok(Self(key))
    }
}
