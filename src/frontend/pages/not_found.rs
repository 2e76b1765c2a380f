use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center px-6 bg-gradient-to-b from-white to-[#EDE6D6]/30">
            <div class="text-center">
                <h1 class="text-8xl md:text-9xl font-bold text-[#0E3F2B] mb-4">"404"</h1>
                <p class="text-2xl font-semibold text-[#333333] mb-2">"Страница не найдена"</p>
                <p class="text-[#AAAAAA] mb-8 max-w-md">
                    "Возможно, страница была перемещена или удалена."
                </p>
                <a href="/" class="bg-[#0E3F2B] text-white px-6 py-3 rounded-lg hover:bg-[#7DB68C]">
                    "На главную"
                </a>
            </div>
        </div>
    }
}
