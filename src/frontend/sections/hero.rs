use leptos::prelude::*;

use crate::frontend::components::{Button, ButtonVariant};

const BENEFITS: [&str; 3] = [
    "Профессиональная лингвистическая адаптация",
    "Эффективная работа в Республике Саха (Якутия)",
    "Уважение к культурным традициям",
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="about" class="relative min-h-screen flex items-center justify-center bg-gradient-to-b from-white to-[#EDE6D6]/30">
            <div class="container mx-auto px-4 py-20 max-w-4xl text-center">
                <h1 class="text-5xl md:text-7xl font-bold text-[#0E3F2B] mb-6 leading-tight">
                    "Говорите на якутском"
                    <span class="block text-[#7DB68C]">"с уверенностью"</span>
                </h1>
                <p class="text-xl md:text-2xl text-[#333333] mb-8">
                    "Комплексная лингвистическая адаптация для эффективной работы в Республике Саха (Якутия)"
                </p>
                <div class="flex flex-col md:flex-row items-center justify-center gap-4 md:gap-8 mb-12">
                    {BENEFITS
                        .iter()
                        .map(|b| view! {
                            <p class="flex items-center gap-2 text-[#333333] font-medium">
                                <span class="text-[#7DB68C]">"✓"</span>
                                {*b}
                            </p>
                        })
                        .collect_view()}
                </div>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-6">
                    <Button href="#kp-form">"Получить КП →"</Button>
                    <Button href="#contacts" variant=ButtonVariant::Outline>"Задать вопрос"</Button>
                </div>
            </div>
        </section>
    }
}
