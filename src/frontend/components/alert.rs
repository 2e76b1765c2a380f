use leptos::prelude::*;

#[derive(Clone, Copy, Default, PartialEq)]
pub enum AlertVariant {
    #[default]
    Success,
    Error,
}

impl AlertVariant {
    fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
        }
    }

    fn palette(self) -> &'static str {
        match self {
            Self::Success => "bg-[#7DB68C]/10 border-[#7DB68C]/40 text-[#0E3F2B]",
            Self::Error => "bg-red-50 border-red-200 text-red-700",
        }
    }

    /// Errors interrupt screen readers, confirmations wait their turn.
    fn role(self) -> &'static str {
        match self {
            Self::Success => "status",
            Self::Error => "alert",
        }
    }
}

/// Inline banner for form results and load failures.
#[component]
pub fn Alert(
    #[prop(into)] message: String,
    #[prop(optional)] variant: AlertVariant,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            role=variant.role()
            class=format!("mb-6 p-4 rounded-lg border text-sm {}", variant.palette())
        >
            <p class="flex items-center gap-2">
                <span aria-hidden="true">{variant.icon()}</span>
                {message}
            </p>
            {children.map(|extra| view! { <div class="mt-3">{extra()}</div> })}
        </div>
    }
}

#[component]
pub fn SuccessAlert(#[prop(into)] message: String) -> impl IntoView {
    view! { <Alert message=message variant=AlertVariant::Success/> }
}

#[component]
pub fn ErrorAlert(#[prop(into)] message: String) -> impl IntoView {
    view! { <Alert message=message variant=AlertVariant::Error/> }
}
