use leptos::prelude::*;

use super::{AdminCtx, show_alert, view_liveness};
use crate::api::AdminClient;
use crate::frontend::components::{Button, TextInput};
use crate::models::{Contacts, Social};
use crate::services::editors::ContactsEditor;

#[component]
pub fn ContactsTab(ctx: AdminCtx, client: AdminClient) -> impl IntoView {
    let editor = ContactsEditor::new(client, view_liveness());
    let state = RwSignal::new(editor.state());
    let editor = StoredValue::new(editor);

    let sync = move || {
        if let Some(next) = editor.try_with_value(ContactsEditor::state) {
            state.try_set(next);
        }
    };

    if let Some(e) = editor.try_get_value() {
        ctx.run(async move { e.fetch().await }, move |_| sync());
    }

    let form_field = move |get: fn(&Contacts) -> String| {
        Signal::derive(move || state.with(|s| s.form.as_ref().map(get).unwrap_or_default()))
    };
    let edit = move |set: fn(&mut Contacts, String)| {
        Callback::new(move |value: String| {
            editor.with_value(|e| e.update_form(|c| set(c, value)));
            sync();
        })
    };
    let edit_social = move |set: fn(&mut Social, String)| {
        Callback::new(move |value: String| {
            editor.with_value(|e| e.update_form(|c| set(&mut c.social, value)));
            sync();
        })
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(e) = editor.try_get_value() else {
            return;
        };
        state.update(|s| s.saving = true);
        ctx.run(async move { e.submit().await }, move |_| {
            let alert = editor.try_with_value(ContactsEditor::take_alert).flatten();
            sync();
            show_alert(alert);
        });
    };

    let phone_rows = move || {
        let phones = state.with(|s| s.form.as_ref().map(|f| f.phones.clone()).unwrap_or_default());
        phones
            .into_iter()
            .enumerate()
            .map(|(index, phone)| view! {
                <div class="flex gap-2">
                    <input
                        class="flex-1 px-3 py-2 rounded-lg border border-gray-300"
                        type="tel"
                        prop:value=phone
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            editor.with_value(|e| e.update_form(|c| {
                                if let Some(slot) = c.phones.get_mut(index) {
                                    *slot = value;
                                }
                            }));
                            sync();
                        }
                    />
                    <button
                        type="button"
                        class="px-3 text-red-600"
                        on:click=move |_| {
                            editor.with_value(|e| e.remove_phone(index));
                            sync();
                        }
                    >
                        "✕"
                    </button>
                </div>
            })
            .collect_view()
    };

    let overview = move || {
        let c = state.with(|s| s.contacts.clone());
        view! {
            <dl class="grid md:grid-cols-2 gap-6">
                <div>
                    <dt class="text-sm font-medium text-gray-700 mb-1">"Email"</dt>
                    <dd class="text-gray-900">{c.email}</dd>
                </div>
                <div>
                    <dt class="text-sm font-medium text-gray-700 mb-1">"Телефоны"</dt>
                    {c.phones.into_iter().map(|p| view! { <dd class="text-gray-900">{p}</dd> }).collect_view()}
                </div>
                <div>
                    <dt class="text-sm font-medium text-gray-700 mb-1">"Адрес"</dt>
                    <dd class="text-gray-900">{c.address}</dd>
                </div>
                <div>
                    <dt class="text-sm font-medium text-gray-700 mb-1">"Соцсети"</dt>
                    <dd class="text-gray-900">{format!("Instagram: {}", c.social.instagram)}</dd>
                    <dd class="text-gray-900">{format!("Telegram: {}", c.social.telegram)}</dd>
                    <dd class="text-gray-900">{format!("VK: {}", c.social.vk)}</dd>
                </div>
            </dl>
        }
    };

    view! {
        <div class="bg-white rounded-lg shadow-sm p-6">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-bold text-[#0E3F2B]">"Управление контактами"</h2>
                <button
                    class="bg-[#0E3F2B] text-white px-4 py-2 rounded-lg hover:bg-[#7DB68C]"
                    on:click=move |_| {
                        editor.with_value(ContactsEditor::open_form);
                        sync();
                    }
                >
                    "Редактировать"
                </button>
            </div>
            {move || state.with(|s| s.error.clone()).map(|e| view! { <p class="text-red-600 mb-4">{e}</p> })}
            {overview}

            <Show when=move || state.with(|s| s.form.is_some())>
                <div class="fixed inset-0 z-50 bg-black/50 flex items-center justify-center p-4">
                    <form on:submit=on_save class="bg-white rounded-2xl max-w-2xl w-full max-h-[90vh] overflow-y-auto p-8 space-y-4">
                        <h3 class="text-xl font-bold text-[#0E3F2B]">"Редактировать контакты"</h3>
                        <TextInput
                            label="Email"
                            name="email"
                            input_type="email"
                            value=form_field(|c| c.email.clone())
                            on_input=edit(|c, v| c.email = v)
                        />
                        <div class="space-y-2">
                            <p class="text-sm font-medium text-[#333333]">"Телефоны"</p>
                            {phone_rows}
                            <button
                                type="button"
                                class="text-sm text-[#0E3F2B]"
                                on:click=move |_| {
                                    editor.with_value(ContactsEditor::add_phone);
                                    sync();
                                }
                            >
                                "+ Добавить телефон"
                            </button>
                        </div>
                        <TextInput
                            label="Адрес"
                            name="address"
                            value=form_field(|c| c.address.clone())
                            on_input=edit(|c, v| c.address = v)
                        />
                        <TextInput
                            label="Instagram"
                            name="instagram"
                            value=form_field(|c| c.social.instagram.clone())
                            on_input=edit_social(|s, v| s.instagram = v)
                        />
                        <TextInput
                            label="Telegram"
                            name="telegram"
                            value=form_field(|c| c.social.telegram.clone())
                            on_input=edit_social(|s, v| s.telegram = v)
                        />
                        <TextInput
                            label="VK"
                            name="vk"
                            value=form_field(|c| c.social.vk.clone())
                            on_input=edit_social(|s, v| s.vk = v)
                        />
                        <div class="flex justify-end gap-3 pt-4">
                            <button
                                type="button"
                                class="px-6 py-3 rounded-lg border border-gray-300 text-[#333333]"
                                on:click=move |_| {
                                    editor.with_value(ContactsEditor::close_form);
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
