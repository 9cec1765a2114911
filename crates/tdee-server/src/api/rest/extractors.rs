//! Custom extractors
//!
//! Provides custom request extractors with better error handling.

use crate::error::ServerError;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use tracing::debug;

/// JSON extractor that reports body problems in the API's error shape
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => {
                // Parser detail names internal types, so it only goes to the log
                debug!("Rejected request body: {}", rejection.body_text());

                let error_message = match rejection {
                    JsonRejection::JsonSyntaxError(_) => "Malformed JSON in request body",
                    JsonRejection::JsonDataError(_) => "Request body has an unexpected shape",
                    JsonRejection::MissingJsonContentType(_) => {
                        "Missing 'Content-Type: application/json' header"
                    }
                    _ => "Failed to read request body",
                };

                Err(ServerError::InvalidRequest(error_message.to_string()))
            }
        }
    }
}
