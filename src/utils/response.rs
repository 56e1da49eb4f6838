use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use log::info;
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub msg: String,
}

pub fn write_error(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: message.into(),
    })
}

pub fn write_message(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(MessageResponse { msg: message.into() })
}

pub fn store_error_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::Persistence { .. } | StoreError::Decode { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub fn write_store_error(err: &StoreError) -> HttpResponse {
    write_error(store_error_status(err), err.to_string())
}

/// Body extractor settings: any parse failure becomes `400 {"error": ...}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        info!("Rejected request body: {}", err);
        let response = write_error(StatusCode::BAD_REQUEST, err.to_string());
        InternalError::from_response(err, response).into()
    })
}

/// Query-string extractor settings, rendered like body errors.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        info!("Rejected query string: {}", err);
        let response = write_error(StatusCode::BAD_REQUEST, err.to_string());
        InternalError::from_response(err, response).into()
    })
}

/// Parses the `{id}` path segment, rendering a `400` response on failure.
pub fn parse_id(raw: &str) -> Result<i64, HttpResponse> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(write_error(StatusCode::BAD_REQUEST, "id is not indicated"));
    }

    raw.parse::<i64>()
        .map_err(|_| write_error(StatusCode::BAD_REQUEST, format!("invalid id: {}", raw)))
}
