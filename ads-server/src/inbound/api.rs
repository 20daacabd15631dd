/*
   Module `api` defines how inbound results are rendered on the wire: successes carry a JSON
   body, failures carry a bare status code. Error detail goes to the log stream, never to the
   caller.
*/

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::models::{CreateAdError, GetAdError};

use super::handlers::ParseCreateAdHttpRequestError;

/// A successful response: a status code and a JSON body.
#[derive(Debug, Clone)]
pub(super) struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

/// A failed response. Callers only ever see the status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum ApiError {
    BadRequest(String),
    InternalServerError(String),
}

impl From<ParseCreateAdHttpRequestError> for ApiError {
    fn from(e: ParseCreateAdHttpRequestError) -> Self {
        Self::BadRequest(e.to_string())
    }
}

impl From<CreateAdError> for ApiError {
    fn from(e: CreateAdError) -> Self {
        match e {
            CreateAdError::Unknown(cause) => Self::InternalServerError(format!("{cause:#}")),
        }
    }
}

impl From<GetAdError> for ApiError {
    fn from(e: GetAdError) -> Self {
        match e {
            GetAdError::Unknown(cause) => Self::InternalServerError(format!("{cause:#}")),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(detail) => {
                tracing::debug!("rejected request: {}", detail);
                StatusCode::BAD_REQUEST.into_response()
            }
            ApiError::InternalServerError(detail) => {
                tracing::error!("storage failure: {}", detail);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
