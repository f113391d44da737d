use actix_cors::Cors;

/// Permissive CORS for the public chat endpoints.
///
/// Wildcard origin, GET/POST plus preflight, and the two headers the web
/// client sends. Preflight responses are cacheable for 24 hours.
pub fn build_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec!["Content-Type", "X-User-Id"])
        .max_age(86400)
}
