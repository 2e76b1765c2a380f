mod web;

use actix_web::web::Data;
use actix_web::{App, HttpServer};

use silis_site::config::SiteConfig;
use web::middleware::SecurityHeaders;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match SiteConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let bind_addr = config.bind_addr.clone();
    log::info!(
        "serving {} on {bind_addr}, backend {}",
        config.site_root.display(),
        config.backend_url
    );

    let state = Data::new(web::AppState { config });

    HttpServer::new(move || {
        App::new()
            .wrap(SecurityHeaders::new(&state.config.backend_url))
            .app_data(state.clone())
            .configure(web::handlers::configure(&state.config.site_root))
    })
    .bind(bind_addr)?
    .run()
    .await
}
