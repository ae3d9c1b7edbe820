use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, http::StatusCode, middleware::Logger, web};
use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, error, info, warn};
use serde::Deserialize;

use markov_gen_core::MarkovError;
use markov_gen_core::corpus::{Author, CorpusLibrary};
use markov_gen_core::model::{
	DEFAULT_ITERATIONS, DEFAULT_ORDER, DEFAULT_START_TEXT, Generation, GenerationRequest,
};

/// Serves Markov chain text generated from author corpora.
#[derive(Parser, Debug)]
#[command(name = "markov-gen-server", version)]
struct Args {
	/// [o]rder used when a request does not set `o`.
	#[arg(short, long, env = "MARKOV_ORDER", default_value_t = DEFAULT_ORDER as i64, allow_negative_numbers = true)]
	order: i64,

	/// [i]terations used when a request does not set `i`.
	#[arg(short, long, env = "MARKOV_ITERATIONS", default_value_t = DEFAULT_ITERATIONS as i64, allow_negative_numbers = true)]
	iterations: i64,

	/// Start text used when a request does not set `s`.
	#[arg(short, long, env = "MARKOV_START_TEXT", default_value = DEFAULT_START_TEXT)]
	start_text: String,

	/// [p]ort the HTTP server listens on.
	#[arg(short, long, env = "MARKOV_PORT", default_value_t = 8080)]
	port: u16,

	#[arg(long, env = "MARKOV_HOST", default_value = "127.0.0.1")]
	host: String,

	/// Folder holding the authors' books.
	#[arg(long, env = "MARKOV_DATA_DIR", default_value = "data")]
	data_dir: PathBuf,
}

/// Read-only state shared by every worker.
struct AppState {
	library: CorpusLibrary,
	defaults: GenerationRequest,
}

/// Query parameters of `/markov/{author}`.
///
/// Numbers are kept as raw strings: a value that does not parse falls back
/// to the server default instead of failing the request. A repeated key keeps
/// its first value, unknown keys are ignored.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(from = "Vec<(String, String)>")]
struct MarkovParams {
	o: Option<String>,
	i: Option<String>,
	s: Option<String>,
}

impl From<Vec<(String, String)>> for MarkovParams {
	fn from(pairs: Vec<(String, String)>) -> Self {
		let mut params = Self::default();
		for (key, value) in pairs {
			let slot = match key.as_str() {
				"o" => &mut params.o,
				"i" => &mut params.i,
				"s" => &mut params.s,
				_ => continue,
			};
			slot.get_or_insert(value);
		}
		params
	}
}

impl MarkovParams {
	/// Builds this request's own parameters on top of the server defaults.
	///
	/// # Errors
	/// Fails if a parsed order is not positive or a parsed iteration budget
	/// is negative.
	fn resolve(&self, defaults: &GenerationRequest) -> Result<GenerationRequest, MarkovError> {
		let order = parse_or(self.o.as_deref(), defaults.order().get());
		let iterations = parse_or(self.i.as_deref(), defaults.iterations());
		let start_text = self.s.as_deref().unwrap_or(defaults.start_text());
		GenerationRequest::from_raw(order, iterations, start_text)
	}
}

fn parse_or(raw: Option<&str>, default: usize) -> i64 {
	raw.and_then(|value| value.parse::<i64>().ok())
		.unwrap_or_else(|| i64::try_from(default).unwrap_or(i64::MAX))
}

/// Two-line plain text error page.
fn error_page(status: StatusCode) -> HttpResponse {
	let reason = match status {
		StatusCode::NOT_FOUND => "Page not found",
		StatusCode::BAD_REQUEST => "Bad request",
		_ => "Internal server error",
	};
	HttpResponse::build(status)
		.content_type("text/plain; charset=utf-8")
		.body(format!("Error {}\n{reason}", status.as_u16()))
}

async fn not_found() -> HttpResponse {
	error_page(StatusCode::NOT_FOUND)
}

#[get("/")]
async fn home() -> impl Responder {
	HttpResponse::Ok().content_type("text/plain; charset=utf-8").body("Welcome!")
}

/// HTTP GET endpoint `/markov/{author}`
///
/// Learns the author's book and returns text generated from it. `o`, `i`
/// and `s` override order, iterations and start text for this request only.
#[get("/markov/{author}")]
async fn markov(state: web::Data<AppState>, path: web::Path<String>, query: web::Query<MarkovParams>) -> HttpResponse {
	let author = match path.parse::<Author>() {
		Ok(author) => author,
		Err(e) => {
			debug!("{e}");
			return error_page(StatusCode::NOT_FOUND);
		}
	};

	let request = match query.resolve(&state.defaults) {
		Ok(request) => request,
		Err(e) => {
			debug!("rejected request for {author}: {e}");
			return error_page(StatusCode::BAD_REQUEST);
		}
	};

	// Loading and generation are blocking: keep them off the async workers
	let library = state.library.clone();
	let result = web::block(move || -> Result<Generation, MarkovError> {
		let corpus = library.load(author)?;
		Ok(request.run(&corpus))
	})
	.await;

	match result {
		Ok(Ok(generation)) => {
			debug!("{author}: appended {} characters ({:?})", generation.appended(), generation.stop());
			HttpResponse::Ok()
				.content_type("text/plain; charset=utf-8")
				.body(generation.into_text())
		}
		Ok(Err(e)) if e.is_not_found() => {
			warn!("{e}");
			error_page(StatusCode::NOT_FOUND)
		}
		Ok(Err(e)) => {
			error!("{e}");
			error_page(StatusCode::INTERNAL_SERVER_ERROR)
		}
		Err(e) => {
			error!("generation task failed: {e}");
			error_page(StatusCode::INTERNAL_SERVER_ERROR)
		}
	}
}

fn routes(cfg: &mut web::ServiceConfig) {
	let query_config = web::QueryConfig::default().error_handler(|err, _| {
		debug!("malformed query: {err}");
		InternalError::from_response(err, error_page(StatusCode::BAD_REQUEST)).into()
	});

	cfg.app_data(query_config)
		.service(home)
		.service(markov)
		.default_service(web::to(not_found));
}

/// Main entry point for the server.
///
/// Validates the default parameters, then starts an Actix-web HTTP server.
/// Workers only share read-only state; every request builds its own
/// `GenerationRequest`.
#[actix_web::main]
async fn main() -> Result<()> {
	env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

	let args = Args::parse();
	let defaults = GenerationRequest::from_raw(args.order, args.iterations, args.start_text.as_str())
		.context("invalid default generation parameters")?;
	let state = web::Data::new(AppState {
		library: CorpusLibrary::new(&args.data_dir),
		defaults,
	});

	info!(
		"serving {} from {} on {}:{}",
		Author::ALL.map(Author::name).join(", "),
		args.data_dir.display(),
		args.host,
		args.port
	);

	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET"]))
			.app_data(state.clone())
			.configure(routes)
	})
		.bind((args.host.as_str(), args.port))
		.with_context(|| format!("cannot bind {}:{}", args.host, args.port))?
		.run()
		.await
		.context("server stopped with an error")
}
