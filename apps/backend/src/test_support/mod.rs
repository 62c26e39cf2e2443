//! Helpers for building the application under `actix_web::test`.

pub mod app_builder;

pub use app_builder::create_test_app;
