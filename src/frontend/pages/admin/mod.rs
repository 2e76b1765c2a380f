//! `/admin`: login gate and the tabbed management panel.

mod contacts;
mod dashboard;
mod login;
mod news;
mod packages;
mod submissions;

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::AdminClient;
use crate::common::ApiError;
use crate::frontend::components::ErrorAlert;
use crate::frontend::{browser, use_site_data};
use crate::services::{AdminSession, Liveness};

use contacts::ContactsTab;
use dashboard::DashboardTab;
use login::AdminLogin;
use news::NewsTab;
use packages::PackagesTab;
use submissions::SubmissionsTab;

/// Session handle shared by the panel's tabs.
#[derive(Clone, Copy)]
pub(super) struct AdminCtx {
    session: StoredValue<AdminSession>,
    logged_in: RwSignal<bool>,
}

impl AdminCtx {
    fn client(&self) -> Option<AdminClient> {
        self.session.try_with_value(AdminSession::client).flatten()
    }

    /// Runs `task` in the background and hands its result to `done`.
    /// A 401/403 ends the session and drops the panel.
    pub(super) fn run<T: 'static>(
        self,
        task: impl Future<Output = Result<T, ApiError>> + 'static,
        done: impl FnOnce(&Result<T, ApiError>) + 'static,
    ) {
        spawn_local(async move {
            let result = task.await;
            done(&result);
            if let Err(e) = &result {
                self.expire_if_unauthorized(e);
            }
        });
    }

    fn expire_if_unauthorized(&self, err: &ApiError) {
        let expired = self
            .session
            .try_with_value(|s| s.expire_if_unauthorized(err))
            .unwrap_or(false);
        if expired {
            log::info!("admin token rejected, returning to login");
            self.logged_in.try_set(false);
        }
    }

    fn logout(&self) {
        if let Some(Err(e)) = self.session.try_with_value(AdminSession::logout) {
            log::error!("failed to clear admin session: {e}");
        }
        self.logged_in.set(false);
    }
}

/// Liveness flag that is shut down when the calling view is torn down.
pub(super) fn view_liveness() -> Liveness {
    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.shut_down()
    });
    liveness
}

/// Shows `alert` as a blocking browser alert, if set.
pub(super) fn show_alert(alert: Option<String>) {
    if let Some(message) = alert {
        browser::alert(&message);
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let Some(site) = use_site_data() else {
        return view! { <ErrorAlert message="Панель недоступна"/> }.into_any();
    };

    let session = AdminSession::restore(site.api().clone(), browser::session_store());
    let logged_in = RwSignal::new(session.is_logged_in());
    let ctx = AdminCtx {
        session: StoredValue::new(session.clone()),
        logged_in,
    };

    if logged_in.get_untracked() {
        spawn_local(async move {
            match session.verify().await {
                Ok(valid) => {
                    logged_in.try_set(valid);
                }
                Err(e) => log::warn!("could not verify the stored admin session: {e}"),
            }
        });
    }

    view! {
        <Show
            when=move || logged_in.get()
            fallback=move || view! { <AdminLogin ctx=ctx/> }
        >
            <AdminPanel ctx=ctx/>
        </Show>
    }
    .into_any()
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Dashboard,
    News,
    Submissions,
    Packages,
    Contacts,
}

impl Tab {
    const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::News,
        Tab::Submissions,
        Tab::Packages,
        Tab::Contacts,
    ];

    fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Панель управления",
            Tab::News => "Новости",
            Tab::Submissions => "Заявки",
            Tab::Packages => "Пакеты",
            Tab::Contacts => "Контакты",
        }
    }
}

#[component]
fn AdminPanel(ctx: AdminCtx) -> impl IntoView {
    let Some(client) = ctx.client() else {
        return ().into_any();
    };
    let client = StoredValue::new(client);
    let tab = RwSignal::new(Tab::Dashboard);

    let body = move || {
        let client = client.get_value();
        match tab.get() {
            Tab::Dashboard => view! { <DashboardTab ctx=ctx client=client/> }.into_any(),
            Tab::News => view! { <NewsTab ctx=ctx client=client/> }.into_any(),
            Tab::Submissions => view! { <SubmissionsTab ctx=ctx client=client/> }.into_any(),
            Tab::Packages => view! { <PackagesTab ctx=ctx client=client/> }.into_any(),
            Tab::Contacts => view! { <ContactsTab ctx=ctx client=client/> }.into_any(),
        }
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white shadow-sm">
                <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                    <h1 class="text-2xl font-bold text-[#0E3F2B]">"Панель администратора"</h1>
                    <div class="flex items-center gap-4">
                        <a href="/" class="text-[#333333] hover:text-[#0E3F2B]">"На сайт"</a>
                        <button
                            class="bg-red-600 text-white px-4 py-2 rounded-lg hover:bg-red-700"
                            on:click=move |_| ctx.logout()
                        >
                            "Выйти"
                        </button>
                    </div>
                </div>
            </header>
            <div class="container mx-auto px-4 py-8">
                <nav class="flex flex-wrap gap-2 mb-8">
                    {Tab::ALL
                        .into_iter()
                        .map(|t| view! {
                            <button
                                class=move || {
                                    if tab.get() == t {
                                        "px-4 py-2 rounded-lg font-medium bg-[#0E3F2B] text-white"
                                    } else {
                                        "px-4 py-2 rounded-lg font-medium bg-white text-[#333333] hover:bg-gray-100"
                                    }
                                }
                                on:click=move |_| tab.set(t)
                            >
                                {t.label()}
                            </button>
                        })
                        .collect_view()}
                </nav>
                {body}
            </div>
        </div>
    }
    .into_any()
}
