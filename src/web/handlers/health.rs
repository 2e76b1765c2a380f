use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

#[get("/healthz")]
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(healthz);
}
