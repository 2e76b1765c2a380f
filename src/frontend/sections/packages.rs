use leptos::prelude::*;

use crate::frontend::use_site_data;
use crate::models::{Package, PackageSegment, Packages};

#[component]
pub fn PackagesSection() -> impl IntoView {
    let (packages, loading) = match use_site_data() {
        Some(site) => (site.packages(), site.loading()),
        None => (Signal::stored(Packages::default()), Signal::stored(false)),
    };

    let segment_view = move |segment: PackageSegment| {
        view! {
            <div class="mb-16">
                <h3 class="text-2xl font-bold text-[#0E3F2B] text-center mb-8">{segment.title()}</h3>
                <div class="grid md:grid-cols-3 gap-8">
                    {move || {
                        if loading.get() {
                            return (0..3).map(|_| view! { <PackageSkeleton/> }).collect_view().into_any();
                        }
                        packages
                            .with(|p| p.segment(segment).to_vec())
                            .into_iter()
                            .map(|package| view! { <PackageCard package=package/> })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </div>
        }
    };

    view! {
        <section id="packages" class="py-20 bg-white">
            <div class="container mx-auto px-4">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold text-[#0E3F2B] mb-6">"Пакеты услуг"</h2>
                    <p class="text-xl text-[#333333] max-w-3xl mx-auto">
                        "Выберите формат, который подходит именно вам"
                    </p>
                </div>
                {segment_view(PackageSegment::B2c)}
                {segment_view(PackageSegment::B2b)}
            </div>
        </section>
    }
}

#[component]
fn PackageCard(package: Package) -> impl IntoView {
    let border = if package.popular {
        "border-2 border-[#7DB68C] scale-105"
    } else {
        "border border-[#EDE6D6]"
    };

    view! {
        <div class=format!("relative bg-white rounded-2xl p-8 shadow-lg {border}")>
            {package.popular.then(|| view! {
                <span class="absolute -top-4 left-1/2 -translate-x-1/2 bg-[#7DB68C] text-white text-sm px-4 py-1 rounded-full">
                    "Популярный"
                </span>
            })}
            <h4 class="text-2xl font-bold text-[#0E3F2B] mb-2">{package.name}</h4>
            <p class="text-[#333333] mb-6">{package.description}</p>
            <ul class="space-y-3 mb-8">
                {package
                    .features
                    .into_iter()
                    .map(|f| view! { <li class="flex items-start gap-2 text-[#333333]"><span class="text-[#7DB68C]">"✓"</span>{f}</li> })
                    .collect_view()}
            </ul>
            {package.free_lesson.unwrap_or(false).then(|| view! {
                <p class="mb-4 text-sm font-semibold text-[#0E3F2B]">"1 урок FREE"</p>
            })}
            <a href="#kp-form" class="block text-center bg-[#0E3F2B] text-white px-6 py-3 rounded-lg hover:bg-[#7DB68C] transition-all">
                "Выбрать"
            </a>
        </div>
    }
}

#[component]
fn PackageSkeleton() -> impl IntoView {
    view! {
        <div class="animate-pulse bg-white rounded-2xl p-8 shadow-lg border border-[#EDE6D6]">
            <div class="h-6 bg-gray-200 rounded w-1/2 mb-4"></div>
            <div class="h-4 bg-gray-200 rounded w-3/4 mb-6"></div>
            <div class="space-y-3">
                <div class="h-3 bg-gray-200 rounded"></div>
                <div class="h-3 bg-gray-200 rounded"></div>
                <div class="h-3 bg-gray-200 rounded w-2/3"></div>
            </div>
        </div>
    }
}
