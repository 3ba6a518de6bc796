use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

use rs_ngram_core::AnalysisError;

/// JSON body sent for every failed request.
#[derive(Serialize)]
struct ErrorBody {
	error: String,
}

/// Transport-level wrapper around `AnalysisError`.
///
/// Input problems become `400 Bad Request`, everything else
/// `500 Internal Server Error`, always with a `{"error": "..."}` body.
#[derive(Debug)]
pub struct ApiError(pub AnalysisError);

impl From<AnalysisError> for ApiError {
	fn from(err: AnalysisError) -> Self {
		Self(err)
	}
}

impl fmt::Display for ApiError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		if self.0.is_client_error() {
			StatusCode::BAD_REQUEST
		} else {
			StatusCode::INTERNAL_SERVER_ERROR
		}
	}

	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code()).json(ErrorBody { error: self.to_string() })
	}
}
