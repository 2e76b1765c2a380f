use leptos::prelude::*;

/// Anchor targets on the landing page.
pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("Услуги", "#services"),
    ("О нас", "#about"),
    ("Пакеты", "#packages"),
    ("Новости", "#news"),
    ("Контакты", "#contacts"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let links = move |extra: &'static str| {
        NAV_ITEMS
            .iter()
            .map(|(label, href)| {
                view! {
                    <a
                        href=*href
                        on:click=move |_| set_menu_open.set(false)
                        class=format!("text-[#333333] hover:text-[#0E3F2B] transition-colors font-medium {extra}")
                    >
                        {*label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 backdrop-blur-md bg-white/95 shadow-lg">
            <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                <a href="/" class="flex items-center gap-3">
                    <img src="/static/logo.png" alt="Центр якутского языка Силис" class="w-12 h-12"/>
                    <div>
                        <p class="text-xl font-bold text-[#0E3F2B]">"Силис"</p>
                        <p class="text-sm text-[#AAAAAA]">"Центр якутского языка"</p>
                    </div>
                </a>
                <nav class="hidden md:flex items-center gap-8">{links("")}</nav>
                <a href="#kp-form" class="hidden md:inline-flex bg-[#0E3F2B] text-white px-6 py-3 rounded-lg hover:bg-[#7DB68C] transition-all font-medium shadow-lg">
                    "Получить КП"
                </a>
                <button
                    class="md:hidden p-2 text-[#0E3F2B] text-2xl"
                    aria-label="Меню"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <nav class="md:hidden container mx-auto px-4 py-4 border-t border-[#EDE6D6] flex flex-col gap-4">
                    {links("py-2")}
                </nav>
            </Show>
        </header>
    }
}
