use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::frontend::components::{
    Button, EmailInput, ErrorAlert, SuccessAlert, TextArea, TextInput,
};
use crate::frontend::use_site_data;
use crate::services::ContactForm;

/// The "get an offer" form.
#[component]
pub fn ContactFormSection() -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let api = use_site_data().map(|site| site.api().clone());

    let field = move |get: fn(&ContactForm) -> &String| {
        Signal::derive(move || form.with(|f| get(f).clone()))
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(request) = form.try_update(ContactForm::begin).flatten() else {
            return;
        };
        let Some(api) = api.clone() else {
            log::error!("contact form has no backend client");
            return;
        };

        spawn_local(async move {
            let result = api.submit_contact_form(&request).await;
            form.try_update(|f| f.finish(result));
        });
    };

    view! {
        <section id="kp-form" class="py-20 bg-white">
            <div class="container mx-auto px-4 max-w-2xl">
                <div class="text-center mb-12">
                    <h2 class="text-4xl md:text-5xl font-bold text-[#0E3F2B] mb-6">"Получить КП"</h2>
                    <p class="text-xl text-[#333333]">
                        "Оставьте заявку, и мы подготовим коммерческое предложение"
                    </p>
                </div>

                {move || form.with(|f| f.banner.clone()).map(|banner| {
                    if banner.is_success() {
                        view! { <SuccessAlert message=banner.message().to_string()/> }.into_any()
                    } else {
                        view! { <ErrorAlert message=banner.message().to_string()/> }.into_any()
                    }
                })}

                <form on:submit=on_submit class="space-y-5 bg-[#EDE6D6]/30 rounded-2xl p-8">
                    <TextInput
                        label="Имя"
                        name="name"
                        placeholder="Введите ваше имя"
                        required=true
                        value=field(|f| &f.name)
                        on_input=Callback::new(move |v: String| form.update(|f| f.name = v))
                    />
                    <TextInput
                        label="Телефон"
                        name="phone"
                        placeholder="+7 (___) ___-__-__"
                        input_type="tel"
                        required=true
                        value=field(|f| &f.phone)
                        on_input=Callback::new(move |v: String| form.update(|f| f.phone = v))
                    />
                    <EmailInput
                        label="Email"
                        value=field(|f| &f.email)
                        on_input=Callback::new(move |v: String| form.update(|f| f.email = v))
                    />
                    <TextInput
                        label="Организация"
                        name="organization"
                        placeholder="Название организации"
                        value=field(|f| &f.organization)
                        on_input=Callback::new(move |v: String| form.update(|f| f.organization = v))
                    />
                    <TextArea
                        label="Комментарий"
                        name="comment"
                        placeholder="Расскажите подробнее о ваших потребностях..."
                        value=field(|f| &f.comment)
                        on_input=Callback::new(move |v: String| form.update(|f| f.comment = v))
                    />
                    <label class="flex items-start gap-3 text-sm text-[#333333]">
                        <input
                            type="checkbox"
                            class="mt-1"
                            prop:checked=move || form.with(|f| f.agree)
                            on:change=move |ev| form.update(|f| f.agree = event_target_checked(&ev))
                        />
                        "Я согласен на обработку персональных данных"
                    </label>
                    <Button
                        loading=Signal::derive(move || form.with(|f| f.submitting))
                        loading_text="Отправляем..."
                    >
                        "Получить КП"
                    </Button>
                </form>
            </div>
        </section>
    }
}
