// Property: nothing outside the registered routes answers 200.

mod common;

use actix_web::http::StatusCode;
use actix_web::rt::System;
use actix_web::test as actix_test;
use proptest::prelude::*;
use weather_api::test_support::create_test_app;

use common::proptest_prelude::proptest_prelude_config;

const REGISTERED: &[&str] = &["/", "/openapi.json"];

/// One to three lowercase path segments, excluding the registered routes by
/// construction: every generated path has a `-x` suffix on its last segment.
fn unregistered_path() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_]{1,12}", 1..=3)
        .prop_map(|segments| format!("/{}-x", segments.join("/")))
}

fn status_for(path: &str, post: bool) -> StatusCode {
    let path = path.to_string();
    System::new().block_on(async move {
        let app = create_test_app().await;
        let req = if post {
            actix_test::TestRequest::post().uri(&path).to_request()
        } else {
            actix_test::TestRequest::get().uri(&path).to_request()
        };
        actix_test::call_service(&app, req).await.status()
    })
}

proptest! {
    #![proptest_config(proptest_prelude_config())]

    #[test]
    fn unregistered_paths_are_not_found(path in unregistered_path(), post in any::<bool>()) {
        prop_assert!(!REGISTERED.contains(&path.as_str()));
        prop_assert_eq!(status_for(&path, post), StatusCode::NOT_FOUND);
    }
}

#[test]
fn registered_paths_answer_get() {
    for path in REGISTERED {
        assert_eq!(status_for(path, false), StatusCode::OK, "GET {path}");
    }
}
