#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::HeaderName;
use actix_web::test;
use serde_json::Value;

pub mod proptest_prelude;

pub const WELCOME_BODY: &str = r#"{"message":"Welcome to the Weather Station Data Processor API"}"#;

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    api_test_support::logging::init();
}

/// Read a header as a string, panicking with a useful message when missing.
pub fn header_str<B>(resp: &ServiceResponse<B>, name: &'static str) -> String {
    resp.headers()
        .get(HeaderName::from_static(name))
        .unwrap_or_else(|| panic!("{name} header should be present"))
        .to_str()
        .unwrap_or_else(|_| panic!("{name} header should be valid UTF-8"))
        .to_string()
}

/// Read and parse a JSON body.
pub async fn read_json<B: MessageBody>(resp: ServiceResponse<B>) -> Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "body should be JSON, got: {}",
            String::from_utf8_lossy(&body)
        )
    })
}
