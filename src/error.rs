use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::extract::ExtractError;

/// Everything that can go wrong while handling one webhook delivery. All
/// variants are local to the request; none terminate the process.
#[derive(Debug, Error)]
pub enum SmsWebhookError {
    #[error(transparent)]
    MalformedRequest(#[from] ExtractError),
    #[error("Missing required fields")]
    MissingFields,
    #[error("Input length exceeded")]
    FieldTooLong,
    #[error("Failed to save message")]
    Persistence(#[from] sqlx::Error),
}

impl IntoResponse for SmsWebhookError {
    fn into_response(self) -> Response {
        let status = match self {
            SmsWebhookError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };

        (status, self.to_string()).into_response()
    }
}
