use crate::shared::icons::icon;
use leptos::prelude::*;

/// Dismissible error box bound to a page-local error signal.
///
/// Renders nothing while the signal holds `None`; the close button resets it.
#[component]
pub fn ErrorBanner(error: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            error.get().map(|message| {
                view! {
                    <div class="alert alert--error" role="alert">
                        <span class="alert__icon">{icon("alert-triangle")}</span>
                        <span class="alert__text">{message}</span>
                        <button
                            class="alert__close"
                            title="Dismiss"
                            on:click=move |_| error.set(None)
                        >
                            {icon("x")}
                        </button>
                    </div>
                }
            })
        }}
    }
}
