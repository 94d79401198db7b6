pub mod state;

use self::state::{create_state, fiscal_year_options};
use crate::domain::a002_budget::api;
use crate::shared::components::table::{format_money, SortableHeaderCell, TableCellMoney};
use crate::shared::components::{ErrorBanner, StatCard, TableTotalsRow};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::list_utils::{cmp_f64, reload_after, sort_list, Sortable};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::guard::RequireRole;
use contracts::domain::a002_budget::aggregate::{BudgetDto, BudgetEntry, BudgetTotals};
use contracts::shared::calendar::{fiscal_year_label, fiscal_year_of};
use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for BudgetEntry {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "department" => self
                .department
                .to_lowercase()
                .cmp(&other.department.to_lowercase()),
            "category" => self
                .category
                .to_lowercase()
                .cmp(&other.category.to_lowercase()),
            "planned" => cmp_f64(self.planned_amount, other.planned_amount),
            "actual" => cmp_f64(self.actual_amount, other.actual_amount),
            "variance" => cmp_f64(
                self.variance.unwrap_or(f64::NEG_INFINITY),
                other.variance.unwrap_or(f64::NEG_INFINITY),
            ),
            _ => Ordering::Equal,
        }
    }
}

#[component]
pub fn BudgetList() -> impl IntoView {
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let error = RwSignal::new(Option::<String>::None);
    let show_create = RwSignal::new(false);

    let year_select = RwSignal::new(state.with_untracked(|s| s.fiscal_year.to_string()));

    let load = move || {
        let year = state.with_untracked(|s| s.fiscal_year);
        set_loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_budgets(year).await {
                Ok(entries) => state.update(|s| s.entries = entries),
                Err(e) => {
                    state.update(|s| s.entries.clear());
                    error.set(Some(format!("Failed to load budgets: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    // Reload whenever another fiscal year is picked (and once on mount).
    Effect::new(move |_| {
        let Ok(year) = year_select.get().parse::<i32>() else {
            return;
        };
        state.update_untracked(|s| s.fiscal_year = year);
        load();
    });

    let rows = Memo::new(move |_| {
        state.with(|s| {
            let mut rows = s.entries.clone();
            sort_list(&mut rows, &s.sort_field, s.sort_ascending);
            rows
        })
    });
    let totals = Memo::new(move |_| rows.with(|r| BudgetTotals::from_entries(r)));

    let toggle_sort = move |field: &'static str| {
        state.update(|s| {
            if s.sort_field == field {
                s.sort_ascending = !s.sort_ascending;
            } else {
                s.sort_field = field.to_string();
                s.sort_ascending = true;
            }
        });
    };
    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    // Actuals and variance come from the ledger, so the year is re-read
    let on_created = reload_after::<BudgetEntry>(load);

    view! {
        <PageFrame page_id="a002_budget--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Budgets"</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || fiscal_year_label(state.with(|s| s.fiscal_year))}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Select value=year_select>
                        {fiscal_year_options(fiscal_year_of(today()))
                            .into_iter()
                            .map(|year| view! { <option value=year.to_string()>{fiscal_year_label(year)}</option> })
                            .collect_view()}
                    </Select>
                    <RequireRole allow=Role::can_manage_budgets>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                            {icon("plus")}
                            " New entry"
                        </Button>
                    </RequireRole>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner error=error />

                <div class="stat-cards">
                    <StatCard
                        label="Planned"
                        icon_name="wallet"
                        value=Signal::derive(move || Some(totals.get().planned))
                    />
                    <StatCard
                        label="Actual"
                        icon_name="banknote"
                        value=Signal::derive(move || Some(totals.get().actual))
                        tone="success"
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Department" sort_field="department" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=160.0 />
                                <SortableHeaderCell label="Category" sort_field="category" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) min_width=160.0 />
                                <SortableHeaderCell label="Planned" sort_field="planned" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) align="right" />
                                <SortableHeaderCell label="Actual" sort_field="actual" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) align="right" />
                                <SortableHeaderCell label="Variance" sort_field="variance" current_sort_field=sort_field sort_ascending=sort_ascending on_sort=Callback::new(toggle_sort) align="right" />
                                <TableHeaderCell resizable=false min_width=160.0>"Notes"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || rows.get()
                                key=|e| e.id.clone()
                                children=move |entry: BudgetEntry| {
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout truncate=true>{entry.department.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{entry.category.clone()}</TableCellLayout></TableCell>
                                            <TableCellMoney value=Some(entry.planned_amount) />
                                            <TableCellMoney value=Some(entry.actual_amount) />
                                            <TableCellMoney value=entry.variance color_by_sign=true />
                                            <TableCell><TableCellLayout truncate=true>{entry.notes.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                            <TableTotalsRow>
                                <td>{move || format!("Entries: {}", rows.with(|r| r.len()))}</td>
                                <td></td>
                                <td class="table__cell--right">{move || format_money(totals.get().planned)}</td>
                                <td class="table__cell--right">{move || format_money(totals.get().actual)}</td>
                                <td></td>
                                <td></td>
                            </TableTotalsRow>
                        </TableBody>
                    </Table>
                </div>
            </div>

            <NewBudgetDialog
                open=show_create
                fiscal_year=Signal::derive(move || state.with(|s| s.fiscal_year))
                on_created=on_created
            />
        </PageFrame>
    }
}

#[component]
fn NewBudgetDialog(
    open: RwSignal<bool>,
    fiscal_year: Signal<i32>,
    on_created: Callback<BudgetEntry>,
) -> impl IntoView {
    let department = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let planned = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let reset = move || {
        department.set(String::new());
        category.set(String::new());
        planned.set(String::new());
        notes.set(String::new());
        error.set(None);
    };

    let submit = move |_| {
        let Ok(planned_amount) = planned.get_untracked().trim().parse::<f64>() else {
            error.set(Some("Planned amount must be a number".to_string()));
            return;
        };
        let notes_value = notes.get_untracked();
        let dto = BudgetDto {
            fiscal_year: fiscal_year.get_untracked(),
            department: department.get_untracked().trim().to_string(),
            category: category.get_untracked().trim().to_string(),
            planned_amount,
            notes: (!notes_value.trim().is_empty()).then(|| notes_value.trim().to_string()),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e));
            return;
        }
        set_saving.set(true);
        spawn_local(async move {
            match api::create_budget(&dto).await {
                Ok(entry) => {
                    on_created.run(entry);
                    reset();
                    open.set(false);
                }
                Err(e) => error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || format!("New budget entry · {}", fiscal_year_label(fiscal_year.get()))}
                    </DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Small>
                            <ErrorBanner error=error />
                            <Label>"Department"</Label>
                            <Input value=department />
                            <Label>"Category"</Label>
                            <Input value=category />
                            <Label>"Planned amount"</Label>
                            <Input value=planned input_type=InputType::Number />
                            <Label>"Notes"</Label>
                            <Input value=notes />
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=submit
                            disabled=Signal::derive(move || saving.get())
                        >
                            "Save"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                reset();
                                open.set(false);
                            }
                        >
                            "Cancel"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
