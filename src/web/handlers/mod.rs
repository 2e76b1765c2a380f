pub mod health;
pub mod shell;

use std::path::Path;

use actix_files::Files;
use actix_web::web;

/// Registers the shell pages, the health check and the asset directories
/// under `site_root`.
pub fn configure(site_root: &Path) -> impl FnOnce(&mut web::ServiceConfig) + use<> {
    let pkg = site_root.join("pkg");
    let assets = site_root.join("static");

    move |cfg| {
        shell::configure(cfg);
        health::configure(cfg);
        cfg.service(Files::new("/pkg", pkg).prefer_utf8(true))
            .service(Files::new("/static", assets).prefer_utf8(true));
    }
}
