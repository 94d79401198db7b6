use crate::domain::a005_accounting_period::api;
use crate::shared::components::{ConfirmDialog, ErrorBanner};
use crate::shared::date_utils::{format_datetime, format_period, month_name, today};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_role;
use crate::system::auth::guard::RequireRole;
use chrono::Datelike;
use contracts::domain::a005_accounting_period::aggregate::{
    period_key, sort_periods_desc, AccountingPeriod,
};
use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
enum PendingAction {
    Close(String),
    Reopen(String),
}

/// Years offered for closing: the current one and the three before it, newest first.
fn close_year_options(current: i32) -> Vec<i32> {
    ((current - 3)..=current).rev().collect()
}

#[component]
pub fn AccountingPeriodList() -> impl IntoView {
    let role = use_role();
    let periods = RwSignal::new(Vec::<AccountingPeriod>::new());
    let closed_only = RwSignal::new(false);
    let (loading, set_loading) = signal(false);
    let error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(Option::<PendingAction>::None);
    let confirm_open = RwSignal::new(false);

    let now = today();
    let close_month = RwSignal::new(now.month().to_string());
    let close_year = RwSignal::new(now.year().to_string());

    let load = move || {
        let only_closed = closed_only.get_untracked();
        set_loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_periods(only_closed).await {
                Ok(mut items) => {
                    sort_periods_desc(&mut items);
                    periods.set(items);
                }
                Err(e) => error.set(Some(format!("Failed to load periods: {}", e))),
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        closed_only.track();
        load();
    });

    let ask_close = move |_| {
        let (Ok(month), Ok(year)) = (
            close_month.get_untracked().parse::<u32>(),
            close_year.get_untracked().parse::<i32>(),
        ) else {
            error.set(Some("Pick a month and a year".to_string()));
            return;
        };
        pending.set(Some(PendingAction::Close(period_key(year, month))));
        confirm_open.set(true);
    };

    let ask_reopen = move |period: String| {
        pending.set(Some(PendingAction::Reopen(period)));
        confirm_open.set(true);
    };

    let run_pending = Callback::new(move |_| {
        let Some(action) = pending.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let result = match &action {
                PendingAction::Close(p) => api::close_period(p).await,
                PendingAction::Reopen(p) => api::reopen_period(p).await,
            };
            match result {
                Ok(()) => load(),
                Err(e) => error.set(Some(e)),
            }
            pending.set(None);
        });
    });

    let confirm_message = Signal::derive(move || match pending.get() {
        Some(PendingAction::Close(p)) => format!(
            "Close {}? Postings dated in a closed period are rejected.",
            format_period(&p)
        ),
        Some(PendingAction::Reopen(p)) => format!("Re-open {}?", format_period(&p)),
        None => String::new(),
    });
    let can_close = Signal::derive(move || role.get().can_close_periods());
    let years = StoredValue::new(close_year_options(now.year()));

    view! {
        <PageFrame page_id="a005_accounting_period--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Accounting periods"</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || periods.with(|p| p.len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Switch checked=closed_only label="Closed only" />
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

                <RequireRole allow=Role::can_close_periods>
                    <div class="filter-panel">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <Select value=close_month>
                                {(1..=12u32)
                                    .map(|m| view! { <option value=m.to_string()>{month_name(m)}</option> })
                                    .collect_view()}
                            </Select>
                            <Select value=close_year>
                                {years
                                    .get_value()
                                    .into_iter()
                                    .map(|y| view! { <option value=y.to_string()>{y.to_string()}</option> })
                                    .collect_view()}
                            </Select>
                            <Button appearance=ButtonAppearance::Primary on_click=ask_close>
                                {icon("lock")}
                                " Close period"
                            </Button>
                        </Flex>
                    </div>
                </RequireRole>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 640px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=140.0>"Period"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Closed at"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Closed by"</TableHeaderCell>
                                <Show when=move || can_close.get()>
                                    <TableHeaderCell resizable=false min_width=100.0>""</TableHeaderCell>
                                </Show>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || periods.get()
                                key=|p| (p.period.clone(), p.status)
                                children=move |p: AccountingPeriod| {
                                    let closed = p.is_closed();
                                    let key = StoredValue::new(p.period.clone());
                                    view! {
                                        <TableRow>
                                            <TableCell>{format_period(&p.period)}</TableCell>
                                            <TableCell>
                                                {if closed {
                                                    view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Closed"</Badge> }.into_any()
                                                } else {
                                                    view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Open"</Badge> }.into_any()
                                                }}
                                            </TableCell>
                                            <TableCell>{p.closed_at.as_deref().map(format_datetime).unwrap_or_default()}</TableCell>
                                            <TableCell>{p.closed_by.clone().unwrap_or_default()}</TableCell>
                                            <Show when=move || can_close.get()>
                                                <TableCell>
                                                    <Show when=move || closed>
                                                        <Button
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| ask_reopen(key.get_value())
                                                        >
                                                            {icon("unlock")}
                                                            " Re-open"
                                                        </Button>
                                                    </Show>
                                                </TableCell>
                                            </Show>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>

            <ConfirmDialog
                open=confirm_open
                title="Accounting period"
                message=confirm_message
                on_confirm=run_pending
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_year_options_newest_first() {
        assert_eq!(close_year_options(2025), vec![2025, 2024, 2023, 2022]);
    }
}
