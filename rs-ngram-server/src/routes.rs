use std::time::Instant;

use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;

use rs_ngram_core::{AnalysisError, AnalysisResult, Analyzer};

use crate::error::ApiError;

/// Routes advertised by `/` and by the 404 handler.
const HEALTH_PATH: &str = "/api/health";
const ANALYZE_PATH: &str = "/api/analyze";

/// Body of `POST /api/analyze`.
#[derive(Deserialize)]
pub struct AnalyzeRequest {
	text: Option<String>,
}

impl AnalyzeRequest {
	/// Checks the text is present and not blank.
	fn text(&self) -> Result<&str, AnalysisError> {
		match self.text.as_deref() {
			None => Err(AnalysisError::InputMissing),
			Some(t) if t.trim().is_empty() => Err(AnalysisError::InputEmpty),
			Some(t) => Ok(t),
		}
	}
}

/// Analysis result plus the request's processing time.
#[derive(Serialize)]
struct AnalyzeResponse {
	#[serde(flatten)]
	result: AnalysisResult,
	latency_ms: f64,
}

/// HTTP GET endpoint `/`
///
/// Describes the service and its endpoints.
#[get("/")]
async fn root() -> impl Responder {
	HttpResponse::Ok().json(json!({
		"message": "N-Gram Analysis API",
		"status": "running",
		"endpoints": {
			"health": HEALTH_PATH,
			"analyze": ANALYZE_PATH
		}
	}))
}

/// HTTP GET endpoint `/api/health`
///
/// Liveness check, does not touch the analyzer.
#[get("/health")]
async fn health() -> impl Responder {
	HttpResponse::Ok().json(json!({
		"status": "healthy",
		"message": "N-Gram Analysis API is running"
	}))
}

/// HTTP POST endpoint `/api/analyze`
///
/// Runs the n-gram analysis on the `text` field of the JSON body.
/// Returns the full result, or a single `{"error": ...}` object.
#[post("/analyze")]
async fn analyze(analyzer: web::Data<Analyzer>, body: web::Json<AnalyzeRequest>) -> Result<HttpResponse, ApiError> {
	let start = Instant::now();

	let text = body.text().inspect_err(|e| warn!("rejected analyze request: {e}"))?;
	let result = analyzer.analyze(text).map_err(|e| {
		if e.is_client_error() {
			warn!("rejected analyze request: {e}");
		} else {
			error!("analysis failed: {e}");
		}
		ApiError(e)
	})?;

	let latency_ms = (start.elapsed().as_secs_f64() * 1000.0 * 100.0).round() / 100.0;
	info!(
		"analyzed {} tokens ({} unique) in {latency_ms} ms",
		result.total_tokens, result.unique_tokens
	);

	Ok(HttpResponse::Ok().json(AnalyzeResponse { result, latency_ms }))
}

/// Catch-all for unmatched routes.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
	warn!("no route for {} {}", req.method(), req.path());
	HttpResponse::NotFound().json(json!({
		"error": "Endpoint not found",
		"message": "The requested URL was not found on the server.",
		"available_endpoints": [HEALTH_PATH, ANALYZE_PATH]
	}))
}

/// Maps malformed or missing JSON bodies to `InputMissing`.
pub fn json_config() -> web::JsonConfig {
	web::JsonConfig::default().error_handler(|err, _req| {
		warn!("invalid analyze payload: {err}");
		ApiError(AnalysisError::InputMissing).into()
	})
}

/// Registers every route of the API.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.app_data(json_config())
		.service(root)
		.service(web::scope("/api").service(health).service(analyze));
}

#[cfg(test)]
mod tests {
	use actix_web::http::StatusCode;
	use actix_web::{test, App};
	use serde_json::Value;

	use super::*;

	macro_rules! app {
		() => {
			test::init_service(
				App::new()
					.app_data(web::Data::new(Analyzer::default()))
					.configure(configure)
					.default_service(web::to(not_found)),
			)
			.await
		};
	}

	#[actix_web::test]
	async fn health_is_independent_of_the_analyzer() {
		let app = app!();
		let req = test::TestRequest::get().uri("/api/health").to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body["status"], "healthy");
	}

	#[actix_web::test]
	async fn root_lists_endpoints() {
		let app = app!();
		let req = test::TestRequest::get().uri("/").to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body["endpoints"]["analyze"], "/api/analyze");
	}

	#[actix_web::test]
	async fn analyze_returns_statistics() {
		let app = app!();
		let req = test::TestRequest::post()
			.uri("/api/analyze")
			.set_json(json!({ "text": "The quick brown fox jumps over the lazy dog" }))
			.to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);

		let body: Value = test::read_body_json(resp).await;
		assert_eq!(body["total_tokens"], 9);
		assert_eq!(body["unique_tokens"], 8);
		assert_eq!(body["stop_words"], 2);
		assert_eq!(body["ngrams"]["unigrams"][0]["token"], "\"the\"");
		assert_eq!(body["ngrams"]["unigrams"][0]["id"], 1);
		assert_eq!(body["ngrams"]["4-grams"].as_array().map(Vec::len), Some(6));
		assert!(body["latency_ms"].is_number());
		assert!(body["perplexity"].is_number());
	}

	#[actix_web::test]
	async fn single_token_perplexity_is_null() {
		let app = app!();
		let req = test::TestRequest::post()
			.uri("/api/analyze")
			.set_json(json!({ "text": "again again again" }))
			.to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body["entropy"], 0.0);
		assert!(body["perplexity"].is_null());
	}

	#[actix_web::test]
	async fn missing_text_is_a_client_error() {
		let app = app!();
		let req = test::TestRequest::post().uri("/api/analyze").set_json(json!({})).to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
		let body: Value = test::read_body_json(resp).await;
		assert_eq!(body["error"], "Text is required");
	}

	#[actix_web::test]
	async fn malformed_body_is_a_client_error() {
		let app = app!();
		let req = test::TestRequest::post()
			.uri("/api/analyze")
			.insert_header(("content-type", "application/json"))
			.set_payload("{not json")
			.to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn blank_text_is_a_client_error() {
		let app = app!();
		let req = test::TestRequest::post()
			.uri("/api/analyze")
			.set_json(json!({ "text": "   " }))
			.to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
		let body: Value = test::read_body_json(resp).await;
		assert_eq!(body["error"], "Text cannot be empty");
	}

	#[actix_web::test]
	async fn punctuation_only_is_a_client_error() {
		let app = app!();
		let req = test::TestRequest::post()
			.uri("/api/analyze")
			.set_json(json!({ "text": "!!! ??? ..." }))
			.to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
		let body: Value = test::read_body_json(resp).await;
		assert_eq!(body["error"], "No valid tokens found in text");
	}

	#[actix_web::test]
	async fn unknown_route_is_not_found() {
		let app = app!();
		let req = test::TestRequest::get().uri("/api/nope").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::NOT_FOUND);
		let body: Value = test::read_body_json(resp).await;
		assert_eq!(body["error"], "Endpoint not found");
	}
}
