use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::frontend::use_site_data;
use crate::models::NewsArticle;
use crate::services::{Liveness, NewsFeed};

#[component]
pub fn NewsSection() -> impl IntoView {
    let feed = RwSignal::new(NewsFeed::default());
    let loading = RwSignal::new(true);

    let liveness = Liveness::new();
    on_cleanup({
        let liveness = liveness.clone();
        move || liveness.shut_down()
    });

    match use_site_data() {
        Some(site) => {
            let api = site.api().clone();
            spawn_local(async move {
                if let Some(fetched) = liveness.guard(NewsFeed::fetch(&api)).await {
                    feed.set(fetched);
                    loading.set(false);
                }
            });
        }
        None => loading.set(false),
    }

    let cards = move || {
        if loading.get() {
            return (0..3)
                .map(|_| view! {
                    <div class="animate-pulse bg-white rounded-2xl p-6 shadow-lg">
                        <div class="h-4 bg-gray-200 rounded w-1/4 mb-4"></div>
                        <div class="h-6 bg-gray-200 rounded w-3/4 mb-4"></div>
                        <div class="h-4 bg-gray-200 rounded"></div>
                    </div>
                })
                .collect_view()
                .into_any();
        }

        feed.with(|f| f.visible().to_vec())
            .into_iter()
            .map(|article| {
                let id = article.id.clone();
                view! {
                    <NewsCard
                        article=article
                        on_open=move |_| feed.update(|f| f.select(Some(&id)))
                    />
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section id="news" class="py-20 bg-gradient-to-b from-white to-[#EDE6D6]/30">
            <div class="container mx-auto px-4">
                <h2 class="text-4xl md:text-5xl font-bold text-[#0E3F2B] text-center mb-16">"Новости"</h2>
                <Show
                    when=move || loading.get() || feed.with(|f| !f.articles.is_empty())
                    fallback=|| view! { <p class="text-center text-[#AAAAAA]">"Новостей пока нет"</p> }
                >
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div>
                </Show>
                <Show when=move || feed.with(NewsFeed::has_more)>
                    <div class="text-center mt-12">
                        <button
                            class="border-2 border-[#0E3F2B] text-[#0E3F2B] px-8 py-3 rounded-lg hover:bg-[#0E3F2B] hover:text-white"
                            on:click=move |_| feed.update(NewsFeed::toggle_expanded)
                        >
                            {move || if feed.with(|f| f.expanded) { "Свернуть" } else { "Все новости" }}
                        </button>
                    </div>
                </Show>
            </div>
            {move || feed.with(|f| f.selected_article().cloned()).map(|article| view! {
                <NewsModal article=article on_close=move |_| feed.update(|f| f.select(None))/>
            })}
        </section>
    }
}

#[component]
fn NewsCard(article: NewsArticle, on_open: impl Fn(leptos::ev::MouseEvent) + 'static) -> impl IntoView {
    let date = article.display_date();
    view! {
        <article class="bg-white rounded-2xl p-6 shadow-lg hover:shadow-xl transition-all cursor-pointer" on:click=on_open>
            <p class="text-sm text-[#7DB68C] mb-2">{date}</p>
            <h3 class="text-xl font-bold text-[#0E3F2B] mb-3">{article.title}</h3>
            <p class="text-[#333333] line-clamp-3">{article.excerpt}</p>
            <p class="mt-4 text-[#0E3F2B] font-medium">"Читать далее →"</p>
        </article>
    }
}

#[component]
fn NewsModal(article: NewsArticle, on_close: impl Fn(leptos::ev::MouseEvent) + 'static) -> impl IntoView {
    let date = article.display_date();
    view! {
        <div class="fixed inset-0 z-50 bg-black/50 flex items-center justify-center p-4">
            <div class="bg-white rounded-2xl max-w-3xl w-full max-h-[90vh] overflow-y-auto p-8 relative">
                <button class="absolute top-4 right-4 text-2xl text-[#AAAAAA] hover:text-[#333333]" aria-label="Закрыть" on:click=on_close>
                    "✕"
                </button>
                <p class="text-sm text-[#7DB68C] mb-2">{date}</p>
                <h3 class="text-3xl font-bold text-[#0E3F2B] mb-6">{article.title}</h3>
                <div class="text-[#333333] whitespace-pre-line leading-relaxed">{article.content}</div>
            </div>
        </div>
    }
}
