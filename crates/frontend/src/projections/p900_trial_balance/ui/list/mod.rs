use crate::projections::p900_trial_balance::api;
use crate::shared::components::table::{format_money, SortableHeaderCell, TableCellMoney};
use crate::shared::components::{ErrorBanner, StatCard, TableTotalsRow};
use crate::shared::list_utils::{
    cmp_f64, cmp_opt, filter_list, highlight_matches, sort_list, Searchable, Sortable,
};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_REPORT;
use contracts::projections::p900_trial_balance::dto::{TrialBalanceRow, TrialBalanceTotals};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use thaw::*;

impl Sortable for TrialBalanceRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "code" => self.account_code.cmp(&other.account_code),
            "name" => self
                .account_name
                .to_lowercase()
                .cmp(&other.account_name.to_lowercase()),
            "type" => cmp_opt(&self.account_type, &other.account_type),
            "debit" => cmp_f64(self.debit, other.debit),
            "credit" => cmp_f64(self.credit, other.credit),
            "balance" => cmp_f64(self.balance, other.balance),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for TrialBalanceRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.matches(filter)
    }
}

#[component]
pub fn TrialBalanceList() -> impl IntoView {
    let rows = RwSignal::new(Vec::<TrialBalanceRow>::new());
    let search_query = RwSignal::new(String::new());
    let sort_field = RwSignal::new("code".to_string());
    let sort_ascending = RwSignal::new(true);
    let (loading, set_loading) = signal(false);
    let error = RwSignal::new(Option::<String>::None);

    let load = move || {
        set_loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_trial_balance().await {
                Ok(items) => rows.set(items),
                Err(e) => error.set(Some(format!("Failed to load trial balance: {}", e))),
            }
            set_loading.set(false);
        });
    };
    load();

    let visible = Memo::new(move |_| {
        let mut items = filter_list(rows.get(), &search_query.get());
        sort_list(&mut items, &sort_field.get(), sort_ascending.get());
        items
    });
    // Totals follow the filter; the balance check always covers the whole ledger.
    let totals = Memo::new(move |_| visible.with(|v| TrialBalanceTotals::from_rows(v)));
    let ledger_totals = Memo::new(move |_| rows.with(|r| TrialBalanceTotals::from_rows(r)));

    let toggle_sort = Callback::new(move |field: &'static str| {
        if sort_field.get_untracked() == field {
            sort_ascending.update(|v| *v = !*v);
        } else {
            sort_field.set(field.to_string());
            sort_ascending.set(true);
        }
    });
    let current_sort = Signal::derive(move || sort_field.get());
    let ascending = Signal::derive(move || sort_ascending.get());

    view! {
        <PageFrame page_id="p900_trial_balance--report" category=PAGE_CAT_REPORT>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Trial balance"</h1>
                    <Show when=move || !rows.with(|r| r.is_empty())>
                        {move || {
                            if ledger_totals.get().is_balanced() {
                                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Balanced"</Badge> }.into_any()
                            } else {
                                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Unbalanced"</Badge> }.into_any()
                            }
                        }}
                    </Show>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {move || if loading.get() { "Loading..." } else { "Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner error=error />

                <div class="stat-cards">
                    <StatCard label="Debit" icon_name="scale" value=Signal::derive(move || Some(ledger_totals.get().debit)) />
                    <StatCard label="Credit" icon_name="scale" value=Signal::derive(move || Some(ledger_totals.get().credit)) />
                    <StatCard
                        label="Difference"
                        icon_name="alert-triangle"
                        value=Signal::derive(move || {
                            let t = ledger_totals.get();
                            Some(t.debit - t.credit)
                        })
                    />
                </div>

                <div class="filter-panel">
                    <div style="min-width: 320px;">
                        <Input value=search_query placeholder="Account code, name or type (min. 3 characters)" />
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 820px;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Code" sort_field="code" current_sort_field=current_sort sort_ascending=ascending on_sort=toggle_sort />
                                <SortableHeaderCell label="Account" sort_field="name" current_sort_field=current_sort sort_ascending=ascending on_sort=toggle_sort min_width=220.0 />
                                <SortableHeaderCell label="Type" sort_field="type" current_sort_field=current_sort sort_ascending=ascending on_sort=toggle_sort />
                                <SortableHeaderCell label="Debit" sort_field="debit" current_sort_field=current_sort sort_ascending=ascending on_sort=toggle_sort align="right" />
                                <SortableHeaderCell label="Credit" sort_field="credit" current_sort_field=current_sort sort_ascending=ascending on_sort=toggle_sort align="right" />
                                <SortableHeaderCell label="Balance" sort_field="balance" current_sort_field=current_sort sort_ascending=ascending on_sort=toggle_sort align="right" />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|r| r.account_code.clone()
                                children=move |row: TrialBalanceRow| {
                                    let code = row.account_code.clone();
                                    let name = row.account_name.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{move || highlight_matches(&code, &search_query.get())}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&name, &search_query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>{row.account_type.clone().unwrap_or_default()}</TableCell>
                                            <TableCellMoney value=Some(row.debit) />
                                            <TableCellMoney value=Some(row.credit) />
                                            <TableCellMoney value=Some(row.balance) color_by_sign=true />
                                        </TableRow>
                                    }
                                }
                            />
                            <TableTotalsRow>
                                <td>{move || format!("Accounts: {}", visible.with(|v| v.len()))}</td>
                                <td></td>
                                <td></td>
                                <td class="table__cell--right">{move || format_money(totals.get().debit)}</td>
                                <td class="table__cell--right">{move || format_money(totals.get().credit)}</td>
                                <td class="table__cell--right">{move || format_money(totals.get().balance)}</td>
                            </TableTotalsRow>
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
