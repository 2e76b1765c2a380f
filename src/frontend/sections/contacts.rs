use leptos::prelude::*;

use crate::frontend::use_site_data;
use crate::models::Contacts;

#[component]
pub fn ContactsSection() -> impl IntoView {
    let (contacts, loading) = match use_site_data() {
        Some(site) => (site.contacts(), site.loading()),
        None => (Signal::stored(Contacts::default()), Signal::stored(false)),
    };

    let body = move || {
        if loading.get() {
            return view! {
                <div class="animate-pulse space-y-4">
                    <div class="h-5 bg-gray-200 rounded w-1/3"></div>
                    <div class="h-5 bg-gray-200 rounded w-1/2"></div>
                    <div class="h-5 bg-gray-200 rounded w-2/3"></div>
                </div>
            }
            .into_any();
        }

        let c = contacts.get();
        view! {
            <div class="grid md:grid-cols-2 gap-12">
                <div class="space-y-8">
                    <div>
                        <h3 class="text-lg font-semibold text-[#0E3F2B] mb-2">"Телефоны"</h3>
                        {c.phones
                            .iter()
                            .map(|phone| view! {
                                <a href=Contacts::tel_href(phone) class="block text-[#333333] hover:text-[#0E3F2B]">
                                    {phone.clone()}
                                </a>
                            })
                            .collect_view()}
                    </div>
                    <div>
                        <h3 class="text-lg font-semibold text-[#0E3F2B] mb-2">"Email"</h3>
                        <a href=format!("mailto:{}", c.email) class="text-[#333333] hover:text-[#0E3F2B]">
                            {c.email.clone()}
                        </a>
                    </div>
                    <div>
                        <h3 class="text-lg font-semibold text-[#0E3F2B] mb-2">"Адрес"</h3>
                        <p class="text-[#333333]">{c.address.clone()}</p>
                    </div>
                </div>
                <div class="space-y-8">
                    <div>
                        <h3 class="text-lg font-semibold text-[#0E3F2B] mb-2">"Мы в соцсетях"</h3>
                        <SocialLinks contacts=c.clone()/>
                    </div>
                    <div>
                        <h3 class="text-lg font-semibold text-[#0E3F2B] mb-2">"Режим работы"</h3>
                        <p class="text-[#333333]">"Понедельник - Пятница: 9:00 - 20:00"</p>
                        <p class="text-[#333333]">"Суббота: 10:00 - 16:00"</p>
                        <p class="text-[#333333]">"Воскресенье: Выходной"</p>
                    </div>
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <section id="contacts" class="py-20 bg-[#EDE6D6]/30">
            <div class="container mx-auto px-4">
                <h2 class="text-4xl md:text-5xl font-bold text-[#0E3F2B] text-center mb-16">"Контакты"</h2>
                {body}
            </div>
        </section>
    }
}

/// Links for the filled-in social accounts; empty ones are skipped.
#[component]
fn SocialLinks(contacts: Contacts) -> impl IntoView {
    let social = contacts.social;
    let instagram = (!social.instagram.is_empty())
        .then(|| format!("https://instagram.com/{}", social.instagram.trim_start_matches('@')));
    let links = [
        ("Instagram", instagram),
        ("Telegram", Some(social.telegram).filter(|s| !s.is_empty())),
        ("ВКонтакте", Some(social.vk).filter(|s| !s.is_empty())),
    ];

    view! {
        <div class="flex gap-4">
            {links
                .into_iter()
                .filter_map(|(label, href)| href.map(|href| (label, href)))
                .map(|(label, href)| view! {
                    <a href=href target="_blank" rel="noopener" class="text-[#0E3F2B] hover:text-[#7DB68C] font-medium">
                        {label}
                    </a>
                })
                .collect_view()}
        </div>
    }
}
