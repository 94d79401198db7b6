pub mod state;

use self::state::create_state;
use crate::domain::a001_employee::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, employee_detail_key};
use crate::shared::components::table::{format_money_opt, SortableHeaderCell};
use crate::shared::components::{ErrorBanner, PaginationControls};
use crate::shared::date_utils::format_date;
use crate::shared::list_utils::{
    cmp_opt, filter_list, highlight_matches, page_slice, sort_list, total_pages, Searchable,
    Sortable,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_role;
use contracts::domain::a001_employee::aggregate::{Employee, EmployeeStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for Employee {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.employee_code.cmp(&other.employee_code),
            "name" => self
                .full_name()
                .to_lowercase()
                .cmp(&other.full_name().to_lowercase()),
            "department" => cmp_opt(&self.department, &other.department),
            "designation" => cmp_opt(&self.designation, &other.designation),
            "joined" => cmp_opt(&self.date_of_joining, &other.date_of_joining),
            "status" => self.status.label().cmp(other.status.label()),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for Employee {
    fn matches_filter(&self, filter: &str) -> bool {
        self.matches(filter)
    }
}

fn status_color(status: &EmployeeStatus) -> BadgeColor {
    match status {
        EmployeeStatus::Active => BadgeColor::Success,
        EmployeeStatus::OnLeave => BadgeColor::Warning,
        EmployeeStatus::Terminated => BadgeColor::Danger,
        _ => BadgeColor::Informative,
    }
}

#[component]
pub fn EmployeeList() -> impl IntoView {
    let tabs_store =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let state = create_state();
    let role = use_role();
    let (loading, set_loading) = signal(false);
    let error = RwSignal::new(Option::<String>::None);

    let load_employees = move || {
        set_loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_employees().await {
                Ok(items) => state.update(|s| {
                    s.employees = items;
                    s.is_loaded = true;
                }),
                Err(e) => error.set(Some(format!("Failed to load employees: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        if !state.with_untracked(|s| s.is_loaded) {
            load_employees();
        }
    });

    let search_query = RwSignal::new(String::new());
    Effect::new(move || {
        let q = search_query.get();
        untrack(move || {
            state.update(|s| {
                s.search_query = q;
                s.page = 0;
            })
        });
    });

    // filter → sort; pagination is applied on top
    let visible = Memo::new(move |_| {
        state.with(|s| {
            let mut rows = filter_list(s.employees.clone(), &s.search_query);
            sort_list(&mut rows, &s.sort_field, s.sort_ascending);
            rows
        })
    });
    let page_rows = Memo::new(move |_| {
        let (page, size) = state.with(|s| (s.page, s.page_size));
        visible.with(|rows| page_slice(rows, page, size))
    });

    let toggle_sort = move |field: &'static str| {
        state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field.to_string();
                s.sort_ascending = true;
            }
            s.page = 0;
        });
    };

    let open_detail = move |id: String, name: String| {
        tabs_store.open_tab(
            &employee_detail_key(&id),
            &detail_tab_label("Employee", &name),
        );
    };

    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));
    let show_salary = Signal::derive(move || role.get().can_view_payroll());

    view! {
        <PageFrame page_id="a001_employee--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Employees"</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || visible.with(|v| v.len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| load_employees()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <div style="min-width: 320px;">
                            <Input
                                value=search_query
                                placeholder="Name, code, email, department (min. 3 characters)"
                            />
                        </div>
                        <PaginationControls
                            current_page=Signal::derive(move || state.with(|s| s.page))
                            total_pages=Signal::derive(move || {
                                total_pages(visible.with(|v| v.len()), state.with(|s| s.page_size))
                            })
                            total_count=Signal::derive(move || visible.with(|v| v.len()))
                            page_size=Signal::derive(move || state.with(|s| s.page_size))
                            on_page_change=Callback::new(move |p| state.update(|s| s.page = p))
                            on_page_size_change=Callback::new(move |size| {
                                state.update(|s| {
                                    s.page_size = size;
                                    s.page = 0;
                                })
                            })
                        />
                    </Flex>
                </div>

                <ErrorBanner error=error />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Code" sort_field="code" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=100.0 />
                                <SortableHeaderCell label="Name" sort_field="name" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=200.0 />
                                <SortableHeaderCell label="Department" sort_field="department" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=140.0 />
                                <SortableHeaderCell label="Designation" sort_field="designation" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=140.0 />
                                <SortableHeaderCell label="Joined" sort_field="joined" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=110.0 />
                                <SortableHeaderCell label="Status" sort_field="status" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=110.0 />
                                <Show when=move || show_salary.get()>
                                    <TableHeaderCell resizable=false min_width=120.0>"Basic salary"</TableHeaderCell>
                                </Show>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page_rows.get()
                                key=|e| e.id.clone()
                                children=move |employee: Employee| {
                                    let id = employee.id.clone();
                                    let name = employee.full_name();
                                    let name_for_click = name.clone();
                                    let salary = StoredValue::new(format_money_opt(employee.basic_salary));
                                    let status = employee.status.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{employee.employee_code.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a
                                                        href="#"
                                                        class="table__link"
                                                        on:click=move |e| {
                                                            e.prevent_default();
                                                            open_detail(id.clone(), name_for_click.clone());
                                                        }
                                                    >
                                                        {move || highlight_matches(&name, &state.with(|s| s.search_query.clone()))}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {employee.department.clone().unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {employee.designation.clone().unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {employee.date_of_joining.as_deref().map(format_date).unwrap_or_else(|| "—".to_string())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Badge appearance=BadgeAppearance::Tint color=status_color(&status)>
                                                    {status.label()}
                                                </Badge>
                                            </TableCell>
                                            <Show when=move || show_salary.get()>
                                                <TableCell class="text-right">{salary.get_value()}</TableCell>
                                            </Show>
                                        </TableRow>
                                    }
                                }
                            />
                            <Show when=move || state.with(|s| s.is_loaded) && visible.with(|v| v.is_empty())>
                                <TableRow>
                                    <TableCell>
                                        <span class="table__empty">"No employees match the filter"</span>
                                    </TableCell>
                                </TableRow>
                            </Show>
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
