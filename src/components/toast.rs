//! Toast Stack Component
//!
//! Renders the queued toast notifications from `AppContext`. This is the
//! user-facing surface for create/update/delete outcomes.

use leptos::prelude::*;

use crate::context::AppContext;

/// Stack of toast notifications, newest last
#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="toast-container position-fixed bottom-0 end-0 p-3">
            {move || ctx.toasts.get().into_iter().map(|toast| {
                let id = toast.id;
                view! {
                    <div class="toast show">
                        <div class="toast-header">
                            <strong class="me-auto">{toast.category.label()}</strong>
                            <button
                                class="btn-close"
                                aria-label="Close"
                                on:click=move |_| ctx.dismiss_toast(id)
                            >
                                "×"
                            </button>
                        </div>
                        <div class="toast-body">{toast.text}</div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
