use contracts::system::auth::Role;
use leptos::prelude::*;

use super::context::use_role;

/// Renders children only for roles that pass `allow`.
///
/// The check is cosmetic; the backend enforces access on every request.
#[component]
pub fn RequireRole(
    allow: fn(&Role) -> bool,
    /// Shown instead of the children; nothing when omitted
    #[prop(optional, into)]
    fallback: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let role = use_role();
    let fallback = StoredValue::new(fallback);

    view! {
        <Show
            when=move || allow(&role.get())
            fallback=move || {
                fallback
                    .get_value()
                    .map(|text| view! { <div class="access-denied">{text}</div> })
            }
        >
            {children()}
        </Show>
    }
}
