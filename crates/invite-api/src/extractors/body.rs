//! Body extractor accepting JSON or URL-encoded forms.

use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::ApiError;

/// Message returned when a body cannot be parsed.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// Deserializes the body according to its `Content-Type`.
///
/// JSON (`application/json`, `application/*+json`) and
/// `application/x-www-form-urlencoded` bodies are parsed; an empty body or
/// any other content type yields `T::default()`, so handlers see missing
/// fields rather than a content-type error.
#[derive(Debug, Clone, Default)]
pub struct JsonOrForm<T>(pub T);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyType {
    Json,
    FormUrlEncoded,
    Other,
}

impl BodyType {
    fn from_content_type(content_type: Option<&str>) -> Self {
        let Some(content_type) = content_type else {
            return Self::Other;
        };
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if essence == "application/json"
            || (essence.starts_with("application/") && essence.ends_with("+json"))
        {
            Self::Json
        } else if essence == "application/x-www-form-urlencoded" {
            Self::FormUrlEncoded
        } else {
            Self::Other
        }
    }
}

/// Why a body could not be deserialized.
#[derive(Debug, Error)]
pub enum BodyDeserializeError {
    /// Malformed JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed form body.
    #[error("Form parse error: {0}")]
    Form(#[from] serde_urlencoded::de::Error),
}

fn parse<T>(kind: BodyType, bytes: &Bytes) -> Result<T, BodyDeserializeError>
where
    T: DeserializeOwned + Default,
{
    if bytes.is_empty() {
        return Ok(T::default());
    }

    Ok(match kind {
        BodyType::Json => serde_json::from_slice(bytes)?,
        BodyType::FormUrlEncoded => serde_urlencoded::from_bytes(bytes)?,
        BodyType::Other => T::default(),
    })
}

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let kind = BodyType::from_content_type(
            req.headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
        );

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            let status = rejection.status();
            if status == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::new(status, "Request body too large")
            } else {
                ApiError::new(status, rejection.body_text())
            }
        })?;

        parse(kind, &bytes).map(JsonOrForm).map_err(|e| {
            tracing::debug!(error = %e, "Failed to parse request body");
            ApiError::bad_request(INVALID_BODY_MESSAGE)
        })
    }
}
