//! Sidebar with collapsible menu groups filtered by role

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::context::use_role;
use contracts::system::auth::Role;
use leptos::prelude::*;

#[derive(Clone, Debug)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
    visible_for: fn(&Role) -> bool,
}

fn everyone(_: &Role) -> bool {
    true
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "people",
            label: "People",
            icon: "employees",
            items: vec![("a001_employee", "employees"), ("a003_overtime", "clock")],
            visible_for: everyone,
        },
        MenuGroup {
            id: "finance",
            label: "Finance",
            icon: "wallet",
            items: vec![("a002_budget", "wallet"), ("a004_reimbursement", "receipt")],
            visible_for: everyone,
        },
        MenuGroup {
            id: "accounting",
            label: "Accounting",
            icon: "scale",
            items: vec![
                ("a005_accounting_period", "calendar"),
                ("p900_trial_balance", "scale"),
            ],
            visible_for: Role::can_view_accounting,
        },
        MenuGroup {
            id: "account",
            label: "Account",
            icon: "user",
            items: vec![("sys_profile", "user")],
            visible_for: everyone,
        },
    ]
}

fn menu_groups_for(role: &Role) -> Vec<MenuGroup> {
    get_menu_groups()
        .into_iter()
        .filter(|g| (g.visible_for)(role))
        .collect()
}

fn item_label(key: &'static str) -> &'static str {
    tab_label_for_key(key).unwrap_or(key)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let role = use_role();

    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    let toggle_group = move |gid: &'static str| {
        expanded_groups.update(|items| {
            if let Some(pos) = items.iter().position(|x| x == gid) {
                items.remove(pos);
            } else {
                items.push(gid.to_string());
            }
        });
    };

    view! {
        <div class="app-sidebar__content">
            {move || {
                menu_groups_for(&role.get())
                    .into_iter()
                    .map(|group| {
                        let gid = group.id;
                        let is_expanded = move || expanded_groups.with(|g| g.iter().any(|x| x == gid));
                        view! {
                            <div>
                                <div
                                    class="app-sidebar__item"
                                    style:padding-left="12px"
                                    on:click=move |_| toggle_group(gid)
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(group.icon)}
                                        <span>{group.label}</span>
                                    </div>
                                    <div
                                        class="app-sidebar__chevron"
                                        class:app-sidebar__chevron--expanded=is_expanded
                                    >
                                        {icon("chevron-right")}
                                    </div>
                                </div>
                                <Show when=is_expanded>
                                    <div class="app-sidebar__children">
                                        {group
                                            .items
                                            .iter()
                                            .map(|&(key, icon_name)| {
                                                let label = item_label(key);
                                                view! {
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=move || {
                                                            ctx.active.with(|a| a.as_deref() == Some(key))
                                                        }
                                                        style:padding-left="10px"
                                                        on:click=move |_| ctx.open_tab(key, label)
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(icon_name)}
                                                            <span>{label}</span>
                                                        </div>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </Show>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(role: Role) -> Vec<&'static str> {
        menu_groups_for(&role)
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(k, _)| k))
            .collect()
    }

    #[test]
    fn test_accounting_hidden_from_hr_and_employees() {
        for role in [Role::Hr, Role::Employee, Role::Unknown] {
            let k = keys(role);
            assert!(!k.contains(&"a005_accounting_period"));
            assert!(!k.contains(&"p900_trial_balance"));
            assert!(k.contains(&"a001_employee"));
            assert!(k.contains(&"sys_profile"));
        }
    }

    #[test]
    fn test_accountant_sees_everything() {
        assert_eq!(keys(Role::Accountant).len(), 7);
        assert_eq!(keys(Role::Admin).len(), 7);
    }

    #[test]
    fn test_every_item_has_a_label() {
        for group in get_menu_groups() {
            for (key, _) in group.items {
                assert!(tab_label_for_key(key).is_some(), "{key}");
            }
        }
    }
}
