use actix_web::dev::HttpServiceFactory;
use actix_web::{web, FromRequest, Handler, Responder};

pub mod fallback;
pub mod openapi;
pub mod root;

/// Register every route. Shared by the server and the test app builder.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root::configure_routes)
        .configure(openapi::configure_routes);
}

/// A resource answering only `GET`; any other method gets a 405 problem
/// response with `Allow: GET`.
pub fn get_only<F, Args>(path: &str, handler: F) -> impl HttpServiceFactory
where
    F: Handler<Args>,
    Args: FromRequest + 'static,
    F::Output: Responder + 'static,
{
    web::resource(path)
        .route(web::get().to(handler))
        .default_service(web::to(fallback::get_only_method_not_allowed))
}
