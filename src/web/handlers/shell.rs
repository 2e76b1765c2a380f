use actix_web::{HttpResponse, Responder, get, web};

use crate::web::helpers::render;
use crate::web::state::AppState;
use crate::web::templates::ShellTemplate;

const SITE_TITLE: &str = "Силис - Центр якутского языка";
const ADMIN_TITLE: &str = "Силис - Панель администратора";

fn shell(state: &AppState, title: &str) -> HttpResponse {
    render(ShellTemplate {
        title,
        backend_url: &state.config.backend_url,
    })
}

#[get("/")]
pub async fn index(state: web::Data<AppState>) -> impl Responder {
    shell(&state, SITE_TITLE)
}

#[get("/admin")]
pub async fn admin(state: web::Data<AppState>) -> impl Responder {
    shell(&state, ADMIN_TITLE)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(admin);
}
