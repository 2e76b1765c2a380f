use silis_site::config::SiteConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: SiteConfig,
}
