//! HTTP endpoint handlers
//!
//! Each handler validates its input, runs a short sequence of service calls
//! and returns JSON. Identity parameters arrive unauthenticated and are
//! trusted verbatim.

use actix_web::http::Method;
use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

pub mod chats;
pub mod messages;
pub mod uploads;

pub use chats::list_chats;
pub use messages::{get_messages, send_message};
pub use uploads::upload_file;

use crate::error::AppError;

/// Identity assumed when the caller does not name one.
pub(crate) fn default_identity() -> i32 {
    1
}

/// Catch-all for verbs a route does not support.
pub async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}

/// Bare OPTIONS answered with an empty 200; the CORS middleware has already
/// short-circuited real preflights before routing.
pub async fn options_ok() -> HttpResponse {
    HttpResponse::Ok().finish()
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .json(crate::openapi::ApiDoc::openapi())
}

/// Route table shared by the server binary and the test harness.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/openapi.json", web::get().to(openapi_json))
        .service(
            web::resource("/chats")
                .route(web::get().to(list_chats))
                .route(web::method(Method::OPTIONS).to(options_ok))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::resource("/messages")
                .route(web::get().to(get_messages))
                .route(web::post().to(send_message))
                .route(web::method(Method::OPTIONS).to(options_ok))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::resource("/upload")
                .route(web::post().to(upload_file))
                .route(web::method(Method::OPTIONS).to(options_ok))
                .default_service(web::route().to(method_not_allowed)),
        );
}
