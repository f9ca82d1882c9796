// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use std::sync::Arc;

/// Digest of the configured admin bearer token.
#[derive(Clone, Debug)]
pub struct AdminToken(blake3::Hash);

impl AdminToken {
    pub fn new(token: &str) -> Self {
        Self(blake3::hash(token.as_bytes()))
    }

    /// Constant-time comparison via `blake3::Hash` equality.
    pub fn matches(&self, presented: &str) -> bool {
        self.0 == blake3::hash(presented.as_bytes())
    }
}

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// `None` leaves the admin routes open.
    pub admin_token: Option<AdminToken>,
}
