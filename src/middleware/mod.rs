//! Actix middleware for chat-service
//!
//! - request_id: tags requests/responses with an id for log correlation
//! - cors: permissive CORS shared by the server and the test harness
//! - Request logging: handled by actix_web::middleware::Logger

pub mod cors;
pub mod request_id;

pub use cors::build_cors;
pub use request_id::{RequestId, RequestIdMiddleware};
