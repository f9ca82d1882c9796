// src/presentation/http/extractors.rs
use crate::{application::error::ApplicationError, presentation::http::state::HttpState};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Guard for admin routes. Passes when no admin token is configured, otherwise
/// requires a matching `Authorization: Bearer` header.
#[derive(Debug, Clone, Copy)]
pub struct AdminAuthorized;

impl<S> FromRequestParts<S> for AdminAuthorized
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::infrastructure(
                    "application state missing",
                ))
            })?;

        let Some(expected) = app_state.admin_token.as_ref() else {
            return Ok(Self);
        };

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        if expected.matches(header.token()) {
            Ok(Self)
        } else {
            tracing::warn!(path = %parts.uri.path(), "rejected admin request with invalid token");
            Err(HttpError::from_error(ApplicationError::unauthorized(
                "invalid admin token",
            )))
        }
    }
}
