//! Controlled form fields. Each one mirrors a `Signal<String>` and reports
//! edits through `on_input`; the caller owns the value.

use leptos::prelude::*;

const FIELD_CLASSES: &str = "w-full px-4 py-3 rounded-lg bg-white border border-[#EDE6D6] text-[#333333] placeholder-[#AAAAAA] focus:outline-none focus:ring-2 focus:ring-[#7DB68C] focus:border-transparent transition-all";

/// Label, control and optional hint stacked vertically.
#[component]
fn Field(
    id: String,
    label: String,
    required: bool,
    hint: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div>
            <label for=id class="block text-sm font-medium text-[#333333] mb-2">
                {label}
                {required.then_some(" *")}
            </label>
            {children()}
            {(!hint.is_empty()).then(|| view! { <p class="mt-1 text-xs text-[#AAAAAA]">{hint}</p> })}
        </div>
    }
}

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(into, default = "text".to_string())] input_type: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] hint: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <Field id=name.clone() label=label required=required hint=hint>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                class=FIELD_CLASSES
            />
        </Field>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = 4)] rows: u32,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <Field id=name.clone() label=label required=false hint=String::new()>
            <textarea
                id=name.clone()
                name=name
                rows=rows
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                class=FIELD_CLASSES
            ></textarea>
        </Field>
    }
}

#[component]
pub fn EmailInput(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="email"
            placeholder="your@email.com"
            input_type="email"
            required=true
            value=value
            on_input=on_input
        />
    }
}

#[component]
pub fn PasswordInput(
    #[prop(into)] label: String,
    #[prop(optional, into)] hint: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <TextInput
            label=label
            name="password"
            placeholder="Введите пароль"
            input_type="password"
            required=true
            hint=hint
            value=value
            on_input=on_input
        />
    }
}
