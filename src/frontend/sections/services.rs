use leptos::prelude::*;

use crate::frontend::components::ServiceCard;

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section id="services" class="py-20 bg-gradient-to-b from-white to-[#EDE6D6]/30">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-[#0E3F2B] mb-6">"Наши услуги"</h2>
                    <p class="text-xl text-[#333333] max-w-3xl mx-auto">
                        "Комплексное лингвистическое сопровождение для успешной работы на якутском языке"
                    </p>
                </div>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    <ServiceCard
                        icon="📄"
                        title="Перевод документов"
                        desc="Официальные и деловые тексты на якутском и русском языках."
                        features=&["Нормативные акты", "Деловая переписка", "Вывески и навигация"]
                    />
                    <ServiceCard
                        icon="💬"
                        title="Обучение языку"
                        desc="Курсы для детей, взрослых и сотрудников организаций."
                        features=&["Группы и частные занятия", "Разговорная практика", "Онлайн-формат"]
                    />
                    <ServiceCard
                        icon="🎤"
                        title="Озвучивание"
                        desc="Дикторская озвучка рекламы, видео и объявлений."
                        features=&["Носители языка", "Студийная запись", "Сжатые сроки"]
                    />
                    <ServiceCard
                        icon="❤"
                        title="Культурная адаптация"
                        desc="Помогаем говорить с жителями республики на одном языке."
                        features=&["Консультации", "Проверка текстов", "Мероприятия"]
                    />
                </div>
            </div>
        </section>
    }
}
