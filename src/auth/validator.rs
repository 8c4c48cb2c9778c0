use crate::search::types::ErrorBody;
use anyhow::Result;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{StatusCode, header};
use axum::Json;
use std::sync::Arc;

/// The authenticated caller of a request, as produced by a `TokenValidator`.
#[derive(Debug, Clone)]
pub struct Identity {
    pub subject: String,
}

/// Narrow seam to the token validation collaborator.
pub trait TokenValidator: Send + Sync {
    fn validate(&self, token: &str) -> Result<Identity>;
}

/// Shared-secret bearer validation.
///
/// Without a configured secret any non-empty token passes, which is the mode
/// used behind a gateway that already validated the caller. With a secret,
/// the token must match it exactly.
pub struct SharedSecretValidator {
    secret: Option<String>,
}

impl SharedSecretValidator {
    pub fn new(secret: Option<String>) -> Self {
        Self { secret }
    }
}

impl TokenValidator for SharedSecretValidator {
    fn validate(&self, token: &str) -> Result<Identity> {
        if token.is_empty() {
            return Err(anyhow::anyhow!("empty bearer token"));
        }
        if let Some(secret) = &self.secret
            && token != secret
        {
            return Err(anyhow::anyhow!("token rejected"));
        }
        Ok(Identity {
            subject: token.to_string(),
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorBody>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(validator) = parts.extensions.get::<Arc<dyn TokenValidator>>() else {
            tracing::error!("token validator extension is not configured");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "token validator not configured".to_string(),
                }),
            ));
        };

        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| unauthorized("missing authorization header"))?;
        let token = header_value.strip_prefix("Bearer ").unwrap_or("").trim();

        validator
            .validate(token)
            .map_err(|e| unauthorized(&e.to_string()))
    }
}

fn unauthorized(reason: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorBody {
            error: reason.to_string(),
        }),
    )
}
