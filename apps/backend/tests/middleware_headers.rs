mod common;

use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_SECURITY_POLICY, ORIGIN, X_CONTENT_TYPE_OPTIONS,
    X_FRAME_OPTIONS,
};
use actix_web::http::StatusCode;
use actix_web::test;
use weather_api::test_support::create_test_app;

#[actix_web::test]
async fn every_response_carries_a_request_id() {
    let app = create_test_app().await;

    for uri in ["/", "/openapi.json", "/missing"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        let request_id = common::header_str(&resp, "x-request-id");
        assert!(
            uuid_like(&request_id),
            "{uri}: x-request-id should be a UUID, got {request_id}"
        );
    }
}

#[actix_web::test]
async fn security_headers_are_applied() {
    let app = create_test_app().await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    let headers = resp.headers();

    assert_eq!(headers.get(X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
    assert_eq!(headers.get(X_FRAME_OPTIONS).unwrap(), "DENY");
    assert_eq!(
        headers.get(CONTENT_SECURITY_POLICY).unwrap(),
        "default-src 'none'; frame-ancestors 'none'"
    );
}

#[actix_web::test]
async fn allowed_origin_gets_cors_header() {
    let app = create_test_app().await;

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header((ORIGIN, "http://localhost:3000"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
}

fn uuid_like(s: &str) -> bool {
    let parts: Vec<&str> = s.split('-').collect();
    parts.iter().map(|p| p.len()).collect::<Vec<_>>() == [8, 4, 4, 4, 12]
        && parts
            .iter()
            .all(|p| p.chars().all(|c| c.is_ascii_hexdigit()))
}
