pub mod browser;
pub mod components;
pub mod pages;
pub mod sections;
mod site_data;

pub use site_data::{SiteData, use_site_data};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::api::ApiClient;
use components::ErrorAlert;
use pages::{AdminPage, LandingPage, NotFound};

/// Main application component with routing
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = browser::backend_origin()
        .ok_or_else(|| "backend origin is unknown".to_string())
        .and_then(|origin| ApiClient::new(&origin).map_err(|e| e.to_string()));

    let api = match api {
        Ok(api) => api,
        Err(e) => {
            log::error!("cannot reach the content backend: {e}");
            return view! {
                <div class="container mx-auto px-4 py-20">
                    <ErrorAlert message="Сайт временно недоступен"/>
                </div>
            }
            .into_any();
        }
    };

    let site = SiteData::new(api);
    site.load();
    provide_context(site);

    view! {
        <Stylesheet id="leptos" href="/pkg/silis-site.css"/>
        <Title text="Силис - Центр якутского языка"/>
        <Meta name="description" content="Курсы якутского языка и лингвистическое сопровождение для семей и организаций"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=LandingPage/>
                    <Route path=path!("/admin") view=AdminPage/>
                </Routes>
            </main>
        </Router>
    }
    .into_any()
}
