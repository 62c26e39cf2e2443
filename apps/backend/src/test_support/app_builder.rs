//! Initialize the production app (routes and middleware) as an Actix test
//! service, without binding a socket.

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web};

use crate::middleware::cors::DEFAULT_ALLOWED_ORIGINS;
use crate::server::build_app;
use crate::state::app_state::AppState;

/// The production app with default state and the default CORS origins.
pub async fn create_test_app() -> impl Service<
    actix_http::Request,
    Response = ServiceResponse<impl MessageBody>,
    Error = actix_web::Error,
> {
    let origins: Vec<String> = DEFAULT_ALLOWED_ORIGINS
        .iter()
        .map(|s| s.to_string())
        .collect();

    test::init_service(build_app(web::Data::new(AppState::default()), &origins)).await
}
