//! HTTP error response mapping.

use std::marker::PhantomData;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use homebase_domain::error::{HomebaseError, ValidationError};

use crate::dto::Envelope;

/// Why a request failed.
#[derive(Debug)]
pub enum Failure {
    /// The body was not valid JSON for the route.
    Decode(JsonRejection),
    /// The path segment could not be extracted (e.g. invalid percent-encoding).
    Path(PathRejection),
    /// The application layer rejected or could not serve the request.
    Domain(HomebaseError),
}

/// Maps a [`Failure`] to an HTTP response whose body is the failure form of
/// the route's envelope `E`.
///
/// Not found answers `404`. Malformed input and storage faults answer `400`.
pub struct ApiError<E> {
    failure: Failure,
    envelope: PhantomData<fn() -> E>,
}

impl<E> ApiError<E> {
    fn new(failure: Failure) -> Self {
        Self {
            failure,
            envelope: PhantomData,
        }
    }
}

impl<E> std::fmt::Debug for ApiError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.failure.fmt(f)
    }
}

impl<E> From<JsonRejection> for ApiError<E> {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(Failure::Decode(rejection))
    }
}

impl<E> From<PathRejection> for ApiError<E> {
    fn from(rejection: PathRejection) -> Self {
        Self::new(Failure::Path(rejection))
    }
}

impl<E> From<HomebaseError> for ApiError<E> {
    fn from(err: HomebaseError) -> Self {
        Self::new(Failure::Domain(err))
    }
}

impl<E> From<ValidationError> for ApiError<E> {
    fn from(err: ValidationError) -> Self {
        Self::new(Failure::Domain(err.into()))
    }
}

impl<E: Envelope> IntoResponse for ApiError<E> {
    fn into_response(self) -> Response {
        let (status, message) = match &self.failure {
            Failure::Decode(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            Failure::Path(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            Failure::Domain(HomebaseError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Failure::Domain(HomebaseError::NotFound(err)) => {
                (StatusCode::NOT_FOUND, err.to_string())
            }
            Failure::Domain(err @ HomebaseError::Storage(_)) => {
                tracing::error!(error = %err, "storage error");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
        };

        (status, Json(E::failure(message))).into_response()
    }
}
