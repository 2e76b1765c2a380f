use leptos::prelude::*;

use super::NAV_ITEMS;
use crate::frontend::use_site_data;
use crate::models::Contacts;

#[component]
pub fn Footer() -> impl IntoView {
    let contacts = use_site_data()
        .map(|site| site.contacts())
        .unwrap_or_else(|| Signal::stored(Contacts::default()));

    view! {
        <footer class="bg-[#0E3F2B] text-white">
            <div class="container mx-auto px-4 py-12 grid md:grid-cols-3 gap-8">
                <div>
                    <p class="text-2xl font-bold mb-2">"Силис"</p>
                    <p class="text-white/70">"Центр якутского языка"</p>
                </div>
                <nav class="flex flex-col gap-2">
                    {NAV_ITEMS
                        .iter()
                        .map(|(label, href)| view! { <a href=*href class="text-white/80 hover:text-white">{*label}</a> })
                        .collect_view()}
                    <a href="#kp-form" class="text-white/80 hover:text-white">"Получить КП"</a>
                </nav>
                <div class="flex flex-col gap-2 text-white/80">
                    {move || contacts.with(|c| c.phones.first().cloned()).map(|phone| {
                        let href = Contacts::tel_href(&phone);
                        view! { <a href=href class="hover:text-white">{phone}</a> }
                    })}
                    {move || {
                        let email = contacts.with(|c| c.email.clone());
                        view! { <a href=format!("mailto:{email}") class="hover:text-white">{email.clone()}</a> }
                    }}
                    <p>{move || contacts.with(|c| c.address.clone())}</p>
                </div>
            </div>
            <p class="text-center text-xs text-white/50 pb-6">"© Силис. Все права защищены."</p>
        </footer>
    }
}
