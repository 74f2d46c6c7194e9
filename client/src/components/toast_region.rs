//! Stack of transient notifications pinned to the viewport corner.

use leptos::prelude::*;

use crate::state::toasts::{Toast, ToastVariant, Toasts};

#[component]
pub fn ToastRegion(toasts: Toasts) -> impl IntoView {
    let state = toasts.state();

    view! {
        <ol class="toast-region" aria-live="polite">
            <For
                each=move || state.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let destructive = toast.notice.variant == ToastVariant::Destructive;
                    view! {
                        <li class="toast" class:toast--destructive=destructive role="status">
                            <div class="toast__body">
                                <div class="toast__title">{toast.notice.title}</div>
                                <div class="toast__description">{toast.notice.description}</div>
                            </div>
                            <button
                                class="toast__close"
                                on:click=move |_| toasts.dismiss(id)
                                title="Dismiss"
                                aria-label="Dismiss"
                            >
                                "✕"
                            </button>
                        </li>
                    }
                }
            />
        </ol>
    }
}
