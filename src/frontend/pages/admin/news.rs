use chrono::NaiveDate;
use leptos::prelude::*;

use super::{AdminCtx, show_alert, view_liveness};
use crate::api::AdminClient;
use crate::frontend::browser;
use crate::frontend::components::{Button, TextArea, TextInput};
use crate::models::{NewsArticle, NewsDraft};
use crate::services::editors::{NEWS_DELETE_CONFIRM, NewsEditor};

#[component]
pub fn NewsTab(ctx: AdminCtx, client: AdminClient) -> impl IntoView {
    let editor = NewsEditor::new(client, view_liveness());
    let state = RwSignal::new(editor.state());
    let editor = StoredValue::new(editor);

    let sync = move || {
        if let Some(next) = editor.try_with_value(NewsEditor::state) {
            state.try_set(next);
        }
    };
    let finish = move || {
        let alert = editor.try_with_value(NewsEditor::take_alert).flatten();
        sync();
        show_alert(alert);
    };

    let fetch = move || {
        let Some(e) = editor.try_get_value() else {
            return;
        };
        ctx.run(async move { e.fetch().await }, move |_| sync());
    };
    fetch();

    let edit = move |f: fn(&mut NewsDraft, String)| {
        Callback::new(move |value: String| {
            editor.with_value(|e| e.update_form(|d| f(d, value)));
            sync();
        })
    };
    let draft_field = move |get: fn(&NewsDraft) -> String| {
        Signal::derive(move || {
            state.with(|s| s.form.as_ref().map(|form| get(&form.draft)).unwrap_or_default())
        })
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(e) = editor.try_get_value() else {
            return;
        };
        state.update(|s| s.saving = true);
        ctx.run(async move { e.submit().await }, move |_| finish());
    };

    let on_delete = Callback::new(move |id: String| {
        let Some(e) = editor.try_get_value() else {
            return;
        };
        ctx.run(
            async move { e.delete(&id, |_| browser::confirm(NEWS_DELETE_CONFIRM)).await },
            move |_| finish(),
        );
    });
    let on_edit = Callback::new(move |id: String| {
        editor.with_value(|e| e.open_edit(&id));
        sync();
    });

    let rows = move || {
        if state.with(|s| s.loading && s.items.is_empty()) {
            return view! { <p class="text-[#AAAAAA]">"Загрузка..."</p> }.into_any();
        }
        let items = state.with(|s| s.items.clone());
        if items.is_empty() {
            return view! { <p class="text-center py-12 text-[#AAAAAA]">"Новостей пока нет"</p> }
                .into_any();
        }
        items
            .into_iter()
            .map(|article| view! { <NewsRow article=article on_edit=on_edit on_delete=on_delete/> })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="bg-white rounded-lg shadow-sm p-6">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-bold text-[#0E3F2B]">"Управление новостями"</h2>
                <button
                    class="bg-[#0E3F2B] text-white px-4 py-2 rounded-lg hover:bg-[#7DB68C]"
                    on:click=move |_| {
                        editor.with_value(NewsEditor::open_create);
                        sync();
                    }
                >
                    "+ Добавить новость"
                </button>
            </div>
            {move || state.with(|s| s.error.clone()).map(|e| view! { <p class="text-red-600 mb-4">{e}</p> })}
            <div class="space-y-4">{rows}</div>

            <Show when=move || state.with(|s| s.form.is_some())>
                <div class="fixed inset-0 z-50 bg-black/50 flex items-center justify-center p-4">
                    <form on:submit=on_save class="bg-white rounded-2xl max-w-2xl w-full max-h-[90vh] overflow-y-auto p-8 space-y-4">
                        <h3 class="text-xl font-bold text-[#0E3F2B]">
                            {move || {
                                if state.with(|s| s.form.as_ref().is_some_and(|f| f.editing.is_some())) {
                                    "Редактировать новость"
                                } else {
                                    "Новая новость"
                                }
                            }}
                        </h3>
                        <TextInput
                            label="Заголовок"
                            name="title"
                            placeholder="Введите заголовок новости"
                            required=true
                            value=draft_field(|d| d.title.clone())
                            on_input=edit(|d, v| d.title = v)
                        />
                        <TextArea
                            label="Краткое описание"
                            name="excerpt"
                            rows=2
                            placeholder="Краткое описание для карточки"
                            value=draft_field(|d| d.excerpt.clone())
                            on_input=edit(|d, v| d.excerpt = v)
                        />
                        <TextArea
                            label="Текст"
                            name="content"
                            rows=8
                            placeholder="Полный текст новости"
                            value=draft_field(|d| d.content.clone())
                            on_input=edit(|d, v| d.content = v)
                        />
                        <TextInput
                            label="Дата"
                            name="date"
                            input_type="date"
                            value=draft_field(|d| d.date.format("%Y-%m-%d").to_string())
                            on_input=edit(|d, v| {
                                if let Ok(date) = NaiveDate::parse_from_str(&v, "%Y-%m-%d") {
                                    d.date = date;
                                }
                            })
                        />
                        <label class="flex items-center gap-2 text-[#333333]">
                            <input
                                type="checkbox"
                                prop:checked=move || state.with(|s| s.form.as_ref().is_some_and(|f| f.draft.published))
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    editor.with_value(|e| e.update_form(|d| d.published = checked));
                                    sync();
                                }
                            />
                            "Опубликовать"
                        </label>
                        <div class="flex justify-end gap-3 pt-4">
                            <button
                                type="button"
                                class="px-6 py-3 rounded-lg border border-gray-300 text-[#333333]"
                                on:click=move |_| {
                                    editor.with_value(NewsEditor::close_form);
                                    sync();
                                }
                            >
                                "Отмена"
                            </button>
                            <Button loading=Signal::derive(move || state.with(|s| s.saving)) loading_text="Сохранение...">
                                "Сохранить"
                            </Button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn NewsRow(
    article: NewsArticle,
    #[prop(into)] on_edit: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let edit_id = article.id.clone();
    let delete_id = article.id.clone();
    let date = article.display_date();

    view! {
        <div class="border border-gray-200 rounded-lg p-4 flex items-start justify-between gap-4">
            <div class="flex-1">
                <div class="flex items-center gap-3 mb-1">
                    <h3 class="font-semibold text-gray-900">{article.title}</h3>
                    {if article.published {
                        view! { <span class="bg-[#7DB68C] text-white text-xs px-2 py-1 rounded">"Опубликовано"</span> }.into_any()
                    } else {
                        view! { <span class="bg-gray-200 text-gray-600 text-xs px-2 py-1 rounded">"Черновик"</span> }.into_any()
                    }}
                </div>
                <p class="text-sm text-[#AAAAAA] mb-2">{date}</p>
                <p class="text-sm text-gray-600">{article.excerpt}</p>
            </div>
            <div class="flex gap-2">
                <button
                    type="button"
                    class="px-4 py-2 rounded-lg border-2 border-[#0E3F2B] text-[#0E3F2B] hover:bg-[#0E3F2B] hover:text-white"
                    on:click=move |_| on_edit.run(edit_id.clone())
                >
                    "Изменить"
                </button>
                <button
                    type="button"
                    class="px-4 py-2 rounded-lg bg-red-600 text-white hover:bg-red-700"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    "Удалить"
                </button>
            </div>
        </div>
    }
}
