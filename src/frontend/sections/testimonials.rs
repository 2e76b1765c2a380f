use leptos::prelude::*;

struct Testimonial {
    name: &'static str,
    role: &'static str,
    text: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Айталина",
        role: "Мама ученика",
        text: "Сын с удовольствием ходит на занятия и уже говорит с бабушкой на якутском.",
    },
    Testimonial {
        name: "Николай",
        role: "Руководитель отдела",
        text: "Сотрудники за три месяца освоили деловое общение. Рекомендуем коллегам.",
    },
    Testimonial {
        name: "Сардана",
        role: "Студентка",
        text: "Гибкий график и внимательные преподаватели. Частные занятия дали быстрый результат.",
    },
];

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section class="py-20 bg-gradient-to-b from-[#EDE6D6]/30 to-white">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-[#0E3F2B] mb-6">"Отзывы наших клиентов"</h2>
                    <p class="text-xl text-[#333333] max-w-3xl mx-auto">
                        "Узнайте, что говорят о нас родители и представители организаций"
                    </p>
                </div>
                <div class="grid md:grid-cols-3 gap-8">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| view! {
                            <figure class="relative bg-white rounded-2xl p-8 shadow-lg">
                                <span class="absolute -top-4 -left-4 bg-[#7DB68C] w-12 h-12 rounded-full flex items-center justify-center text-white text-2xl">
                                    "“"
                                </span>
                                <p class="text-[#FFB800] mb-4">"★★★★★"</p>
                                <blockquote class="text-[#333333] italic mb-6">{t.text}</blockquote>
                                <figcaption>
                                    <p class="font-semibold text-[#0E3F2B]">{t.name}</p>
                                    <p class="text-sm text-[#AAAAAA]">{t.role}</p>
                                </figcaption>
                            </figure>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
