use leptos::prelude::*;

struct FaqItem {
    question: &'static str,
    answer: &'static str,
}

const FAQ_ITEMS: [FaqItem; 5] = [
    FaqItem {
        question: "С какого возраста можно начать занятия?",
        answer: "Принимаем детей с 5 лет. Для малышей занятия проходят в игровой форме вместе с родителями.",
    },
    FaqItem {
        question: "Нужно ли знать якутский язык, чтобы записаться?",
        answer: "Нет. Перед началом проводим бесплатное пробное занятие и подбираем группу по уровню.",
    },
    FaqItem {
        question: "Можно ли заниматься онлайн?",
        answer: "Да, вебинары и частные занятия доступны онлайн из любой точки мира.",
    },
    FaqItem {
        question: "Сколько времени занимает перевод документов?",
        answer: "Обычный срок от одного до трех рабочих дней. Срочные переводы выполняем в день обращения.",
    },
    FaqItem {
        question: "Работаете ли вы с организациями по договору?",
        answer: "Да, заключаем договоры с компаниями и органами власти и предоставляем закрывающие документы.",
    },
];

#[component]
fn FaqEntry(item: &'static FaqItem) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <div class="bg-white rounded-2xl shadow-lg overflow-hidden">
            <button
                class="w-full px-8 py-6 text-left flex items-center justify-between hover:bg-[#EDE6D6]/30"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <h3 class="text-lg font-semibold text-[#0E3F2B] pr-4">{item.question}</h3>
                <span class="text-[#7DB68C]">{move || if open.get() { "▲" } else { "▼" }}</span>
            </button>
            <Show when=move || open.get()>
                <div class="px-8 pb-6">
                    <p class="border-t border-[#EDE6D6] pt-4 text-[#333333] leading-relaxed">
                        {item.answer}
                    </p>
                </div>
            </Show>
        </div>
    }
}

/// Questions fold independently; any number may be open at once.
#[component]
pub fn Faq() -> impl IntoView {
    view! {
        <section id="faq" class="py-20 bg-gradient-to-b from-white to-[#EDE6D6]/30">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-[#0E3F2B] mb-6">"Часто задаваемые вопросы"</h2>
                    <p class="text-xl text-[#333333] max-w-3xl mx-auto">
                        "Ответы на популярные вопросы о наших услугах"
                    </p>
                </div>
                <div class="max-w-4xl mx-auto space-y-4">
                    {FAQ_ITEMS.iter().map(|item| view! { <FaqEntry item=item/> }).collect_view()}
                </div>
                <div class="text-center mt-16">
                    <p class="text-[#333333] mb-6">"Не нашли ответ на свой вопрос?"</p>
                    <a href="#contacts" class="text-[#0E3F2B] hover:text-[#7DB68C] font-semibold text-lg">
                        "Задайте его нам напрямую →"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn questions_are_distinct_and_answered() {
        let questions: HashSet<_> = FAQ_ITEMS.iter().map(|i| i.question).collect();
        assert_eq!(questions.len(), FAQ_ITEMS.len());
        assert!(FAQ_ITEMS.iter().all(|i| !i.answer.trim().is_empty()));
    }
}
