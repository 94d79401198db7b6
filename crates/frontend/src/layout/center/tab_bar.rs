use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[component]
fn TabHandle(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let key = StoredValue::new(tab.key.clone());
    let is_active = Memo::new(move |_| {
        tabs_store
            .active
            .with(|a| a.as_deref() == Some(key.get_value().as_str()))
    });
    // Title may be updated after a detail page loads its record
    let title = Memo::new(move |_| {
        tabs_store.opened.with(|tabs| {
            tabs.iter()
                .find(|t| t.key == key.get_value())
                .map(|t| t.title.clone())
                .unwrap_or_default()
        })
    });

    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        tabs_store.close_tab(&key.get_value());
    };

    view! {
        <div
            class="tab"
            class:tab--active=move || is_active.get()
            on:click=move |_| tabs_store.activate_tab(&key.get_value())
        >
            <span class="tab__title">{move || title.get()}</span>
            <button class="tab__close" title="Close" on:click=on_close>
                {icon("x")}
            </button>
        </div>
    }
}

/// Strip of opened tabs above the content area.
#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab| view! { <TabHandle tab=tab tabs_store=tabs_store /> }
            />
        </div>
    }
}
