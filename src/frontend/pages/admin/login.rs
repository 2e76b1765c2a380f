use leptos::prelude::*;
use leptos::task::spawn_local;

use super::AdminCtx;
use crate::frontend::components::{Button, ErrorAlert, PasswordInput};

#[component]
pub fn AdminLogin(ctx: AdminCtx) -> impl IntoView {
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let Some(session) = ctx.session.try_get_value() else {
            return;
        };
        let password = password.get_untracked();

        set_pending.set(true);
        set_error.set(None);
        spawn_local(async move {
            let result = session.login(&password).await;
            set_pending.try_set(false);
            match result {
                Ok(_) => {
                    ctx.logged_in.try_set(true);
                }
                Err(e) => {
                    set_error.try_set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-6 py-12 bg-gradient-to-b from-white to-[#EDE6D6]/50">
            <div class="w-full max-w-md">
                <div class="bg-white border border-[#EDE6D6] rounded-2xl p-8 shadow-xl">
                    <div class="text-center mb-8">
                        <h1 class="text-2xl font-bold text-[#0E3F2B]">"Панель администратора"</h1>
                        <p class="text-[#AAAAAA] mt-2">"Центр якутского языка Силис"</p>
                    </div>

                    {move || error.get().map(|message| view! { <ErrorAlert message=message/> })}

                    <form on:submit=on_submit class="space-y-5">
                        <PasswordInput
                            label="Пароль"
                            value=password
                            on_input=Callback::new(move |v: String| set_password.set(v))
                        />
                        <Button loading=pending loading_text="Вход...">
                            "Войти в систему"
                        </Button>
                    </form>
                </div>

                <a href="/" class="block text-center text-[#AAAAAA] hover:text-[#333333] mt-6 text-sm transition-colors">
                    "← Вернуться на сайт"
                </a>
            </div>
        </div>
    }
}
