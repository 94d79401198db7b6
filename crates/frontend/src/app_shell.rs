//! Application shell
//!
//! - `AppShell`: auth gate (LoginPage or MainLayout)
//! - `MainLayout`: TopHeader + Sidebar + tabbed centre

use crate::layout::center::TabBar;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use leptos::logging::log;
use leptos::prelude::*;

/// Syncs the active tab with `?active=...` on creation.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    tabs_store.init_router_integration();
    if tabs_store.opened.with_untracked(|t| t.is_empty()) {
        tabs_store.open_tab("a001_employee", "Employees");
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <div class="tabs-container">
                        <TabBar />
                        <div class="tab-content">
                            <For
                                each=move || tabs_store.opened.get()
                                key=|tab| tab.key.clone()
                                children=move |tab: TabData| {
                                    log!("mount tab '{}'", tab.key);
                                    view! { <TabPage tab=tab tabs_store=tabs_store /> }
                                }
                            />
                        </div>
                    </div>
                }.into_any()
            }
        />
    }
}

/// Application shell - auth gate component.
#[component]
pub fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.with(|s| s.access_token.is_some())
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
