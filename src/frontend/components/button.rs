use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Danger,
}

/// Form button with a spinner while `loading` is set. Pass `href` to get a
/// styled link instead.
#[component]
pub fn Button(
    children: Children,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(into, default = Signal::stored(false))] loading: Signal<bool>,
    #[prop(optional, into)] loading_text: String,
    #[prop(optional, into)] button_type: String,
    #[prop(optional, into)] href: String,
) -> impl IntoView {
    let base_classes = "inline-flex items-center justify-center px-6 py-3 font-semibold rounded-lg transition-all duration-300 focus:outline-none focus:ring-2 focus:ring-offset-2";

    let variant_classes = match variant {
        ButtonVariant::Primary => "bg-[#0E3F2B] text-white hover:bg-[#7DB68C] shadow-lg hover:shadow-xl focus:ring-[#7DB68C]",
        ButtonVariant::Outline => "border-2 border-[#0E3F2B] text-[#0E3F2B] hover:bg-[#0E3F2B] hover:text-white focus:ring-[#0E3F2B]",
        ButtonVariant::Danger => "bg-red-600 text-white hover:bg-red-700 focus:ring-red-500",
    };

    let classes = format!(
        "{} {} disabled:opacity-50 disabled:cursor-not-allowed",
        base_classes, variant_classes
    );

    if !href.is_empty() {
        return view! {
            <a href=href class=classes>
                {children()}
            </a>
        }
        .into_any();
    }

    let loading_text = if loading_text.is_empty() {
        "Загрузка...".to_string()
    } else {
        loading_text
    };

    let button_type = if button_type.is_empty() {
        "submit".to_string()
    } else {
        button_type
    };

    let label = children();

    view! {
        <button type=button_type class=classes disabled=move || loading.get()>
            <span
                class="flex items-center justify-center gap-2"
                class:hidden=move || !loading.get()
            >
                <span class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                {loading_text}
            </span>
            <span class:hidden=move || loading.get()>{label}</span>
        </button>
    }
    .into_any()
}
