//! HTTP server assembly and lifecycle.
//!
//! The service is either stopped or listening: [`bind`] moves it to
//! listening once every socket is bound, and [`serve`] returns after a
//! shutdown signal (SIGINT/SIGTERM, or a [`ServerHandle`] stop) has drained
//! in-flight requests.

use std::net::SocketAddr;

use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::config::Config;
use crate::middleware::{
    cors_middleware, RequestTrace, SecurityHeaders, StructuredLogger, TraceSpan,
};
use crate::routes;
use crate::state::app_state::AppState;

/// Build the application with production routes and middleware.
///
/// `RequestTrace` is outermost so the trace id exists before `TraceSpan` and
/// `StructuredLogger` read it.
pub fn build_app(
    state: web::Data<AppState>,
    cors_allowed_origins: &[String],
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(SecurityHeaders)
        .wrap(cors_middleware(cors_allowed_origins))
        .wrap(StructuredLogger)
        .wrap(TraceSpan)
        .wrap(RequestTrace)
        .app_data(state)
        .configure(routes::configure)
        .default_service(web::to(routes::fallback::not_found))
}

/// A server whose sockets are bound but which is not yet being polled.
pub struct BoundServer {
    pub server: Server,
    pub addrs: Vec<SocketAddr>,
}

impl BoundServer {
    pub fn handle(&self) -> ServerHandle {
        self.server.handle()
    }
}

/// Bind the configured address and start the worker pool.
pub fn bind(config: &Config, state: AppState) -> std::io::Result<BoundServer> {
    let data = web::Data::new(state);
    let origins = config.cors_allowed_origins.clone();

    let http = HttpServer::new(move || build_app(data.clone(), &origins))
        .workers(config.workers)
        .shutdown_timeout(config.shutdown_timeout_secs)
        .bind(config.bind_addr())?;

    let addrs = http.addrs();
    info!(
        addrs = ?addrs,
        workers = config.workers,
        message = "server_listening"
    );

    Ok(BoundServer {
        server: http.run(),
        addrs,
    })
}

/// Drive the server until it stops.
pub async fn serve(bound: BoundServer) -> std::io::Result<()> {
    let result = bound.server.await;
    info!(message = "server_stopped");
    result
}
