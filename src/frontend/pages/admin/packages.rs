use leptos::prelude::*;

use super::{AdminCtx, show_alert, view_liveness};
use crate::api::AdminClient;
use crate::frontend::components::Button;
use crate::models::{Package, PackageSegment};
use crate::services::editors::PackagesEditor;

const INPUT: &str = "w-full px-3 py-2 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-[#7DB68C]";

#[component]
pub fn PackagesTab(ctx: AdminCtx, client: AdminClient) -> impl IntoView {
    let editor = PackagesEditor::new(client, view_liveness());
    let state = RwSignal::new(editor.state());
    let editor = StoredValue::new(editor);

    let sync = move || {
        if let Some(next) = editor.try_with_value(PackagesEditor::state) {
            state.try_set(next);
        }
    };
    // Runs a synchronous form edit and refreshes the view.
    let apply = move |f: &dyn Fn(&PackagesEditor)| {
        editor.with_value(|e| f(e));
        sync();
    };

    if let Some(e) = editor.try_get_value() {
        ctx.run(async move { e.fetch().await }, move |_| sync());
    }

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(e) = editor.try_get_value() else {
            return;
        };
        state.update(|s| s.saving = true);
        ctx.run(async move { e.submit().await }, move |_| {
            let alert = editor.try_with_value(PackagesEditor::take_alert).flatten();
            sync();
            show_alert(alert);
        });
    };

    let segment_column = move |segment: PackageSegment| {
        view! {
            <div>
                <div class="flex items-center justify-between mb-4">
                    <h3 class="text-lg font-semibold text-gray-900">{segment.title()}</h3>
                    <button
                        class="bg-[#0E3F2B] text-white px-4 py-2 rounded-lg hover:bg-[#7DB68C]"
                        on:click=move |_| apply(&|e| e.open_segment(segment))
                    >
                        "Редактировать"
                    </button>
                </div>
                <div class="space-y-4">
                    {move || {
                        state
                            .with(|s| s.packages.segment(segment).to_vec())
                            .into_iter()
                            .map(|p| view! { <PackageSummary package=p/> })
                            .collect_view()
                    }}
                </div>
            </div>
        }
    };

    let form_rows = move || {
        let items = state.with(|s| s.form.as_ref().map(|f| f.items.clone()).unwrap_or_default());
        items
            .into_iter()
            .enumerate()
            .map(|(index, package)| {
                let features = package
                    .features
                    .iter()
                    .enumerate()
                    .map(|(fi, feature)| view! {
                        <div class="flex gap-2">
                            <input
                                class=INPUT
                                prop:value=feature.clone()
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    apply(&|e| e.update_package(index, |p| {
                                        if let Some(slot) = p.features.get_mut(fi) {
                                            *slot = value.clone();
                                        }
                                    }));
                                }
                            />
                            <button
                                type="button"
                                class="px-3 text-red-600"
                                on:click=move |_| apply(&|e| e.remove_feature(index, fi))
                            >
                                "✕"
                            </button>
                        </div>
                    })
                    .collect_view();

                view! {
                    <fieldset class="border border-gray-200 rounded-lg p-4 space-y-3">
                        <div class="flex justify-between items-center">
                            <span class="text-sm text-[#AAAAAA]">{format!("#{}", package.id)}</span>
                            <button
                                type="button"
                                class="text-red-600 text-sm"
                                on:click=move |_| apply(&|e| e.remove_package(index))
                            >
                                "Удалить пакет"
                            </button>
                        </div>
                        <input
                            class=INPUT
                            placeholder="Название"
                            prop:value=package.name.clone()
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                apply(&|e| e.update_package(index, |p| p.name = value.clone()));
                            }
                        />
                        <textarea
                            class=INPUT
                            rows=2
                            placeholder="Описание"
                            prop:value=package.description.clone()
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                apply(&|e| e.update_package(index, |p| p.description = value.clone()));
                            }
                        ></textarea>
                        <div class="space-y-2">{features}</div>
                        <button
                            type="button"
                            class="text-sm text-[#0E3F2B]"
                            on:click=move |_| apply(&|e| e.add_feature(index))
                        >
                            "+ Добавить пункт"
                        </button>
                        <div class="flex gap-6 text-sm">
                            <label class="flex items-center gap-2">
                                <input
                                    type="checkbox"
                                    prop:checked=package.popular
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        apply(&|e| e.update_package(index, |p| p.popular = checked));
                                    }
                                />
                                "Популярный"
                            </label>
                            <label class="flex items-center gap-2">
                                <input
                                    type="checkbox"
                                    prop:checked=package.free_lesson.unwrap_or(false)
                                    on:change=move |ev| {
                                        let checked = event_target_checked(&ev);
                                        apply(&|e| e.update_package(index, |p| p.free_lesson = Some(checked)));
                                    }
                                />
                                "1 урок FREE"
                            </label>
                        </div>
                    </fieldset>
                }
            })
            .collect_view()
    };

    view! {
        <div class="bg-white rounded-lg shadow-sm p-6">
            <h2 class="text-2xl font-bold text-[#0E3F2B] mb-6">"Управление пакетами услуг"</h2>
            {move || state.with(|s| s.error.clone()).map(|e| view! { <p class="text-red-600 mb-4">{e}</p> })}
            <div class="grid md:grid-cols-2 gap-8">
                {segment_column(PackageSegment::B2c)}
                {segment_column(PackageSegment::B2b)}
            </div>

            <Show when=move || state.with(|s| s.form.is_some())>
                <div class="fixed inset-0 z-50 bg-black/50 flex items-center justify-center p-4">
                    <form on:submit=on_save class="bg-white rounded-2xl max-w-3xl w-full max-h-[90vh] overflow-y-auto p-8 space-y-4">
                        <h3 class="text-xl font-bold text-[#0E3F2B]">
                            {move || state.with(|s| s.form.as_ref().map(|f| f.segment.title()).unwrap_or_default())}
                        </h3>
                        {form_rows}
                        <button
                            type="button"
                            class="text-[#0E3F2B] font-medium"
                            on:click=move |_| apply(&PackagesEditor::add_package)
                        >
                            "+ Добавить пакет"
                        </button>
                        <div class="flex justify-end gap-3 pt-4">
                            <button
                                type="button"
                                class="px-6 py-3 rounded-lg border border-gray-300 text-[#333333]"
                                on:click=move |_| apply(&PackagesEditor::close_form)
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
fn PackageSummary(package: Package) -> impl IntoView {
    view! {
        <div class="border border-gray-200 rounded-lg p-4">
            <div class="flex items-start justify-between mb-2">
                <h4 class="font-semibold text-gray-900">{package.name}</h4>
                <div class="flex gap-2">
                    {package.popular.then(|| view! {
                        <span class="bg-[#7DB68C] text-white text-xs px-2 py-1 rounded">"Популярный"</span>
                    })}
                    {package.free_lesson.unwrap_or(false).then(|| view! {
                        <span class="bg-[#0E3F2B] text-white text-xs px-2 py-1 rounded">"1 урок FREE"</span>
                    })}
                </div>
            </div>
            <p class="text-gray-600 text-sm mb-2">{package.description}</p>
            <ul class="text-sm text-gray-600">
                {package
                    .features
                    .into_iter()
                    .map(|f| view! { <li class="flex items-start"><span class="text-[#7DB68C] mr-2">"•"</span>{f}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
