use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
}

/// `GET /`: the static welcome message.
pub async fn root(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(WelcomeResponse {
        message: app_state.service.welcome_message,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(super::get_only("/", root));
}
