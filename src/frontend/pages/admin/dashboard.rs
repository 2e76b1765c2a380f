use leptos::prelude::*;

use super::{AdminCtx, view_liveness};
use crate::api::AdminClient;
use crate::services::editors::Dashboard;

#[component]
pub fn DashboardTab(ctx: AdminCtx, client: AdminClient) -> impl IntoView {
    let dashboard = Dashboard::new(client, view_liveness());
    let state = RwSignal::new(dashboard.state());

    ctx.run(
        {
            let dashboard = dashboard.clone();
            async move { dashboard.fetch().await }
        },
        move |_| {
            state.try_set(dashboard.state());
        },
    );

    let card = move |label: &'static str, value: fn(&crate::models::AdminStats) -> u64| {
        view! {
            <div class="bg-white rounded-lg shadow-sm p-6">
                <p class="text-sm text-[#AAAAAA] mb-2">{label}</p>
                <p class="text-3xl font-bold text-[#0E3F2B]">
                    {move || {
                        if state.with(|s| s.loading) {
                            "…".to_string()
                        } else {
                            state.with(|s| value(&s.stats)).to_string()
                        }
                    }}
                </p>
            </div>
        }
    };

    view! {
        <div>
            {move || state.with(|s| s.error.clone()).map(|e| view! { <p class="text-red-600 mb-4">{e}</p> })}
            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                {card("Всего новостей", |s| s.total_news)}
                {card("Опубликовано", |s| s.published_news)}
                {card("Всего заявок", |s| s.total_contact_submissions)}
                {card("Заявок за неделю", |s| s.recent_submissions)}
            </div>
        </div>
    }
}
