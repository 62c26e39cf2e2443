//! Machine-readable API description, exposing the service title and version.

use std::collections::BTreeMap;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::app_state::{AppState, ServiceInfo};

pub const OPENAPI_VERSION: &str = "3.1.0";

#[derive(Debug, Serialize)]
pub struct OpenApiDocument {
    pub openapi: &'static str,
    pub info: Info,
    pub paths: BTreeMap<&'static str, Value>,
}

#[derive(Debug, Serialize)]
pub struct Info {
    pub title: &'static str,
    pub version: &'static str,
}

impl OpenApiDocument {
    pub fn describe(service: &ServiceInfo) -> Self {
        let mut paths = BTreeMap::new();
        paths.insert(
            "/",
            json!({
                "get": {
                    "summary": "Read Root",
                    "operationId": "read_root",
                    "responses": {
                        "200": {
                            "description": "Successful Response",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "required": ["message"],
                                        "properties": {
                                            "message": { "type": "string" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }),
        );

        Self {
            openapi: OPENAPI_VERSION,
            info: Info {
                title: service.title,
                version: service.version,
            },
            paths,
        }
    }
}

async fn openapi(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(OpenApiDocument::describe(&app_state.service)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(super::get_only("/openapi.json", openapi));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_carries_title_and_root_path() {
        let doc = serde_json::to_value(OpenApiDocument::describe(&ServiceInfo::default())).unwrap();

        assert_eq!(doc["openapi"], OPENAPI_VERSION);
        assert_eq!(doc["info"]["title"], "Weather Station Data Processor API");
        assert_eq!(doc["info"]["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(
            doc["paths"]["/"]["get"]["responses"]["200"]["content"]["application/json"]["schema"]
                ["required"][0],
            "message"
        );
    }
}
