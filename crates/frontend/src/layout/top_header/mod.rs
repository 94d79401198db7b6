//! TopHeader: application top bar: sidebar toggle, title, user, logout.

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        ctx.close_all();
        do_logout(set_auth_state);
    };

    let open_profile = move |_| {
        ctx.open_tab("sys_profile", tab_label_for_key("sys_profile").unwrap_or("Profile"));
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"HR & Finance"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user" on:click=open_profile title="My profile">
                    {icon("user")}
                    <span>{move || auth_state.with(|s| s.display_name())}</span>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || auth_state.with(|s| s.role().label())}
                    </Badge>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
