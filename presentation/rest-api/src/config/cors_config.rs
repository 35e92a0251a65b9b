use poem::middleware::Cors;
use std::env;

/// Headers browsers may send on a deletion request.
pub const ALLOWED_HEADERS: [&str; 4] = ["authorization", "x-client-info", "apikey", "content-type"];

/// Initialize CORS middleware for cross-origin requests
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins, or `*`
///   for any origin (default: "*")
///
/// Configuration:
/// - Methods: POST, OPTIONS
/// - Headers: authorization, x-client-info, apikey, content-type
///
pub fn init_cors() -> Cors {
    let allowed_origins = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_else(|_| "*".to_string());
    build_cors(&allowed_origins)
}

pub fn build_cors(allowed_origins: &str) -> Cors {
    let cors = Cors::new()
        .allow_methods(vec!["POST", "OPTIONS"])
        .allow_headers(ALLOWED_HEADERS.to_vec());

    let origins = parse_origins(allowed_origins);
    if origins.is_empty() {
        return cors;
    }
    let origins: Vec<&str> = origins.iter().map(String::as_str).collect();
    cors.allow_origins(origins)
}

/// An empty result means any origin is accepted.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.iter().any(|origin| origin == "*") {
        return Vec::new();
    }
    origins
}
