use actix_web::error::ResponseError;
use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::errors::ErrorCode;
use crate::trace_ctx;

/// RFC 7807 body returned for every error.
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Method not allowed: {detail}")]
    MethodNotAllowed { allow: &'static str, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound { code, .. } => *code,
            AppError::MethodNotAllowed { .. } => ErrorCode::MethodNotAllowed,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::MethodNotAllowed { detail, .. } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn not_found(detail: String) -> Self {
        Self::NotFound {
            code: ErrorCode::NotFound,
            detail,
        }
    }

    /// `allow` is the literal value of the `Allow` response header.
    pub fn method_not_allowed(allow: &'static str, detail: String) -> Self {
        Self::MethodNotAllowed { allow, detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn problem_details(&self, trace_id: String) -> ProblemDetails {
        let code = self.code().as_str();
        ProblemDetails {
            type_: format!("https://weather-station.local/errors/{code}"),
            title: Self::humanize_code(code),
            status: self.status().as_u16(),
            detail: self.detail(),
            code: code.to_string(),
            trace_id,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let trace_id = trace_ctx::trace_id();
        let problem_details = self.problem_details(trace_id.clone());

        let mut builder = HttpResponse::build(self.status());
        builder.insert_header(("x-trace-id", trace_id));
        if let AppError::MethodNotAllowed { allow, .. } = self {
            builder.insert_header((header::ALLOW, *allow));
        }

        // `.json()` would force application/json, so serialize by hand.
        match serde_json::to_string(&problem_details) {
            Ok(body) => builder
                .content_type("application/problem+json")
                .body(body),
            Err(e) => {
                error!(error = %e, code = %problem_details.code, message = "problem_details_serialization_failed");
                builder.finish()
            }
        }
    }
}
