use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use log::info;

use rs_ngram_core::Analyzer;

use crate::config::ServerConfig;

/// Environment-driven server settings.
mod config;

/// `ResponseError` mapping of analysis failures.
mod error;

/// HTTP handlers and route registration.
mod routes;

/// CORS policy of the API: any origin, simple methods, JSON bodies.
fn cors() -> Cors {
	Cors::default()
		.allow_any_origin()
		.allowed_methods(vec!["GET", "POST", "OPTIONS"])
		.allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
		.max_age(3600)
}

/// Main entry point for the server.
///
/// Loads the configuration, then starts an Actix-web HTTP server exposing
/// `/`, `/api/health` and `/api/analyze`.
///
/// # Notes
/// - The analyzer is stateless: each worker gets a copy and requests never
///   share mutable data.
/// - Log verbosity defaults to `info` and follows `RUST_LOG`.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = ServerConfig::load()?;
	let analyzer = web::Data::new(Analyzer::default());

	info!("Starting N-Gram Analysis API server...");
	info!("API will be available at http://{}:{} ({} workers)", config.host, config.port, config.workers);

	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(cors())
			.app_data(analyzer.clone())
			.configure(routes::configure)
			.default_service(web::to(routes::not_found))
	})
		.workers(config.workers)
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
