use actix_cors::Cors;
use actix_web::http::header;

/// Origins used when `CORS_ALLOWED_ORIGINS` yields nothing usable.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];

/// Parse a comma-separated origin list, keeping only `http(s)://` entries
/// and dropping empty and `null` items. Falls back to
/// [`DEFAULT_ALLOWED_ORIGINS`] when nothing survives.
pub fn parse_allowed_origins(raw: &str) -> Vec<String> {
    let allowed: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if allowed.is_empty() {
        DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        allowed
    }
}

/// Build the CORS middleware. The API is read-only, so only `GET` and
/// preflight `OPTIONS` are allowed.
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .expose_headers(vec![
            header::HeaderName::from_static("x-request-id"),
            header::HeaderName::from_static("x-trace-id"),
        ])
        .max_age(3600);

    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
