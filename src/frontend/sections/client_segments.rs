use leptos::prelude::*;

use crate::models::PackageSegment;

struct Segment {
    kind: PackageSegment,
    icon: &'static str,
    title: &'static str,
    pains: [&'static str; 4],
    solutions: [&'static str; 4],
    outcome: &'static str,
    background: &'static str,
}

const SEGMENTS: [Segment; 2] = [
    Segment {
        kind: PackageSegment::B2c,
        icon: "❤",
        title: "Для детей и родителей",
        pains: [
            "Трудности с сохранением языка в семье",
            "Непонимание школьных материалов на якутском",
            "Нехватка уверенности у детей при общении",
            "Барьеры в коммуникации с педагогами",
        ],
        solutions: [
            "Адаптация учебных материалов для детей",
            "Обучение родителей основам языка",
            "Поддержка культурной идентичности",
            "Мостик между семьей и школой",
        ],
        outcome: "Ваши дети уверенно говорят и понимают, родители получают ясные инструкции",
        background: "bg-gradient-to-br from-[#EDE6D6] to-white",
    },
    Segment {
        kind: PackageSegment::B2b,
        icon: "🏢",
        title: "Для компаний и органов власти",
        pains: [
            "Ошибки в официальных переводах документов",
            "Непонимание культурных нюансов в бизнесе",
            "Формальная коммуникация вызывает недоверие",
            "Потеря клиентов из-за языковых барьеров",
        ],
        solutions: [
            "Корректный перевод деловых документов",
            "Создание специализированных глоссариев",
            "Деловые тренинги и семинары",
            "Сопровождение переговоров и встреч",
        ],
        outcome: "Точные переводы, эффективные коммуникации, уважение к культурным нормам",
        background: "bg-gradient-to-br from-white to-[#EDE6D6]",
    },
];

#[component]
pub fn ClientSegments() -> impl IntoView {
    view! {
        <section id="segments" class="py-20">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-[#0E3F2B] mb-6">"Наши клиенты"</h2>
                    <p class="text-xl text-[#333333] max-w-3xl mx-auto">
                        "Мы работаем с разными сегментами, понимая уникальные потребности каждого"
                    </p>
                </div>
                <div class="grid md:grid-cols-2 gap-12 max-w-7xl mx-auto">
                    {SEGMENTS
                        .iter()
                        .map(|s| view! {
                            <div
                                class=format!("{} rounded-2xl p-8 shadow-lg", s.background)
                                data-segment=s.kind.as_str()
                            >
                                <div class="flex items-start space-x-4 mb-6">
                                    <span class="bg-[#0E3F2B] p-3 rounded-xl text-white text-2xl">{s.icon}</span>
                                    <h3 class="text-2xl font-bold text-[#0E3F2B]">{s.title}</h3>
                                </div>
                                <h4 class="font-semibold text-[#333333] mb-3">"Проблемы клиентов:"</h4>
                                <ul class="space-y-2 mb-6">
                                    {s.pains
                                        .iter()
                                        .map(|p| view! {
                                            <li class="text-[#333333]">
                                                <span class="text-[#AAAAAA] mr-2">"•"</span>
                                                {*p}
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                                <h4 class="font-semibold text-[#333333] mb-3">"Наши решения:"</h4>
                                <ul class="space-y-2 mb-6">
                                    {s.solutions
                                        .iter()
                                        .map(|p| view! {
                                            <li class="text-[#333333]">
                                                <span class="text-[#7DB68C] mr-2">"✓"</span>
                                                {*p}
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                                <div class="bg-white/50 p-4 rounded-xl border-l-4 border-[#0E3F2B]">
                                    <h4 class="font-semibold text-[#0E3F2B] mb-2">"Результат:"</h4>
                                    <p class="text-[#333333] font-medium">{s.outcome}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_card_per_package_segment() {
        let kinds: Vec<_> = SEGMENTS.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![PackageSegment::B2c, PackageSegment::B2b]);
    }
}
