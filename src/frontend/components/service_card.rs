use leptos::prelude::*;

#[component]
pub fn ServiceCard(
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
    features: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div class="group bg-white rounded-2xl p-6 shadow-lg hover:shadow-xl
                    transition-all duration-300 hover:-translate-y-1">
            <span class="bg-[#0E3F2B] w-16 h-16 rounded-xl flex items-center justify-center mb-6 mx-auto text-3xl
                         group-hover:scale-110 transition-transform duration-300">
                {icon}
            </span>
            <h3 class="text-xl font-bold text-[#0E3F2B] text-center mb-4">{title}</h3>
            <p class="text-[#333333] text-center mb-6 leading-relaxed">{desc}</p>
            <ul class="space-y-3 text-sm text-[#333333]">
                {features
                    .iter()
                    .map(|f| view! { <li class="flex items-start gap-2"><span class="text-[#7DB68C]">"•"</span>{*f}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
