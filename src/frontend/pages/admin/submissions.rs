use leptos::prelude::*;

use super::{AdminCtx, view_liveness};
use crate::api::AdminClient;
use crate::models::{ContactSubmission, SubmissionStatus};
use crate::services::editors::SubmissionsEditor;

fn status_classes(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::New => "bg-blue-100 text-blue-800",
        SubmissionStatus::Processed => "bg-yellow-100 text-yellow-800",
        SubmissionStatus::Replied => "bg-green-100 text-green-800",
    }
}

#[component]
pub fn SubmissionsTab(ctx: AdminCtx, client: AdminClient) -> impl IntoView {
    let editor = SubmissionsEditor::new(client, view_liveness());
    let state = RwSignal::new(editor.state());
    let editor = StoredValue::new(editor);

    let sync = move || {
        if let Some(next) = editor.try_with_value(SubmissionsEditor::state) {
            state.try_set(next);
        }
    };

    if let Some(e) = editor.try_get_value() {
        ctx.run(async move { e.fetch().await }, move |_| sync());
    }

    let set_status = move |id: String, status: SubmissionStatus| {
        let Some(e) = editor.try_get_value() else {
            return;
        };
        ctx.run(async move { e.update_status(&id, status).await }, move |_| sync());
    };

    let list = move || {
        if state.with(|s| s.loading && s.items.is_empty()) {
            return (0..3)
                .map(|_| view! {
                    <div class="animate-pulse border border-gray-200 rounded-lg p-4">
                        <div class="h-4 bg-gray-200 rounded w-1/4 mb-2"></div>
                        <div class="h-3 bg-gray-200 rounded w-3/4 mb-2"></div>
                        <div class="h-3 bg-gray-200 rounded w-1/2"></div>
                    </div>
                })
                .collect_view()
                .into_any();
        }
        let items = state.with(|s| s.items.clone());
        if items.is_empty() {
            return view! { <p class="text-center py-12 text-[#AAAAAA]">"Заявок пока нет"</p> }.into_any();
        }
        items
            .into_iter()
            .map(|submission| view! { <SubmissionCard submission=submission on_status=set_status/> })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="bg-white rounded-lg shadow-sm p-6">
            <h2 class="text-2xl font-bold text-[#0E3F2B] mb-6">"Заявки"</h2>
            {move || state.with(|s| s.error.clone()).map(|e| view! { <p class="text-red-600 mb-4">{e}</p> })}
            <div class="space-y-4">{list}</div>
        </div>
    }
}

#[component]
fn SubmissionCard(
    submission: ContactSubmission,
    on_status: impl Fn(String, SubmissionStatus) + Copy + 'static,
) -> impl IntoView {
    let current = submission.status;
    let created = submission.display_created_at();

    view! {
        <div class="border border-gray-200 rounded-lg p-6 hover:bg-gray-50 transition-colors">
            <div class="flex items-center gap-4 mb-2">
                <h3 class="font-semibold text-gray-900">{submission.name.clone()}</h3>
                <span class=format!("px-2 py-1 rounded text-xs font-medium {}", status_classes(current))>
                    {current.label()}
                </span>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-4 text-sm text-gray-600">
                <p><strong>"Телефон: "</strong>{submission.phone.clone()}</p>
                <p><strong>"Email: "</strong>{submission.email.clone()}</p>
                {submission.organization.clone().map(|o| view! { <p><strong>"Организация: "</strong>{o}</p> })}
                <p><strong>"Дата: "</strong>{created}</p>
            </div>
            {submission.comment.clone().map(|c| view! {
                <div class="mt-3">
                    <strong class="text-sm text-gray-700">"Комментарий:"</strong>
                    <p class="text-sm text-gray-600 mt-1">{c}</p>
                </div>
            })}
            <div class="flex items-center gap-2 mt-4">
                <span class="text-sm text-gray-600">"Изменить статус:"</span>
                {SubmissionStatus::ALL
                    .into_iter()
                    .map(|status| {
                        let id = submission.id.clone();
                        let classes = if status == current {
                            status_classes(status)
                        } else {
                            "bg-gray-100 text-gray-600 hover:bg-gray-200"
                        };
                        view! {
                            <button
                                class=format!("px-3 py-1 rounded text-xs font-medium transition-colors {classes}")
                                on:click=move |_| on_status(id.clone(), status)
                            >
                                {status.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
