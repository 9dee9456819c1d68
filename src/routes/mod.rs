use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::http::header;
use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::models::config::ServerConfig;

pub mod bores;

/// Body returned with 400 responses to create/update requests.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Text and category are required";
/// Body returned with 404 responses for a single bore.
pub const BORE_NOT_FOUND_MESSAGE: &str = "Bore item not found";
/// Body returned with 500 responses.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// JSON body carrying only a human readable message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

pub fn message(message: &'static str) -> MessageResponse {
    MessageResponse { message }
}

pub fn internal_error() -> HttpResponse {
    HttpResponse::InternalServerError()
        .content_type("text/plain; charset=utf-8")
        .body(INTERNAL_ERROR_MESSAGE)
}

/// JSON extractor settings that report unreadable bodies as missing fields.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected JSON body: {err}");
        InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(message(REQUIRED_FIELDS_MESSAGE)),
        )
        .into()
    })
}

/// Path extractor settings that report unparsable ids as unknown bores.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected path: {err}");
        InternalError::from_response(
            err,
            HttpResponse::NotFound().json(message(BORE_NOT_FOUND_MESSAGE)),
        )
        .into()
    })
}

/// Register the catalog endpoints on an application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(bores::create_thing)
        .service(bores::random_thing)
        .service(bores::list_things)
        .service(bores::update_thing)
        .service(bores::delete_thing);
}

/// Cross-origin policy for the configured client origins.
pub fn cors(server_config: &ServerConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600);

    if server_config.allowed_origins.is_empty() {
        return cors.allow_any_origin();
    }

    server_config
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
