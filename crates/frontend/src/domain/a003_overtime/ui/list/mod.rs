pub mod state;

use self::state::{bucket_label, bucket_subtitle, create_state, persist};
use crate::domain::a001_employee::api as employee_api;
use crate::domain::a003_overtime::api;
use crate::shared::components::table::{format_money, TableCellMoney};
use crate::shared::components::{ConfirmDialog, ErrorBanner, StatCard, TableTotalsRow};
use crate::shared::date_utils::{format_date, month_name, today, weekday_short};
use crate::shared::icons::icon;
use crate::shared::list_utils::reload_after;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_role;
use crate::system::auth::guard::RequireRole;
use chrono::Datelike;
use contracts::domain::a001_employee::aggregate::Employee;
use contracts::domain::a003_overtime::aggregate::{OvertimeDto, OvertimeRecord};
use contracts::domain::a003_overtime::attendance::{format_hours, hours_between};
use contracts::domain::a003_overtime::buckets::{BucketTotals, PeriodBucket};
use contracts::shared::calendar::parse_iso_date;
use contracts::shared::totals::sum_by;
use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn bucket_icon(bucket: PeriodBucket) -> &'static str {
    match bucket {
        PeriodBucket::Day | PeriodBucket::Week => "clock",
        _ => "calendar",
    }
}

#[component]
pub fn OvertimeList() -> impl IntoView {
    let state = create_state();
    let role = use_role();
    let (loading, set_loading) = signal(false);
    let error = RwSignal::new(Option::<String>::None);
    let show_create = RwSignal::new(false);
    let pending_delete = RwSignal::new(Option::<OvertimeRecord>::None);
    let confirm_open = RwSignal::new(false);

    let month_select = RwSignal::new(state.with_untracked(|s| s.month.to_string()));
    let year_select = RwSignal::new(state.with_untracked(|s| s.year.to_string()));

    let load = move || {
        let (month, year) = state.with_untracked(|s| (s.month, s.year));
        set_loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_overtime(month, year).await {
                Ok(records) => state.update(|s| {
                    s.records = records;
                    s.is_loaded = true;
                }),
                Err(e) => {
                    state.update(|s| s.records.clear());
                    error.set(Some(format!("Failed to load overtime: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| {
        let (Ok(month), Ok(year)) = (
            month_select.get().parse::<u32>(),
            year_select.get().parse::<i32>(),
        ) else {
            return;
        };
        state.update_untracked(|s| {
            s.month = month;
            s.year = year;
        });
        state.with_untracked(persist);
        load();
    });

    let records = Memo::new(move |_| {
        state.with(|s| {
            let mut rows = s.records.clone();
            rows.sort_by(|a, b| a.date.cmp(&b.date).then(a.from_time.cmp(&b.from_time)));
            rows
        })
    });
    let buckets = Memo::new(move |_| records.with(|r| BucketTotals::from_records(r, today())));
    let total_hours = Memo::new(move |_| records.with(|r| sum_by(r, |x| x.hours)));
    let total_amount = Memo::new(move |_| records.with(|r| sum_by(r, |x| x.amount)));

    // Server assigns rates and amounts, so the list is re-read after every write
    let on_created = reload_after::<OvertimeRecord>(load);

    let request_delete = move |record: OvertimeRecord| {
        pending_delete.set(Some(record));
        confirm_open.set(true);
    };

    let confirm_delete = Callback::new(move |_| {
        let Some(record) = pending_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::delete_overtime(&record.id).await {
                Ok(()) => load(),
                Err(e) => error.set(Some(format!("Failed to delete: {}", e))),
            }
            pending_delete.set(None);
        });
    });

    let delete_message = Signal::derive(move || {
        pending_delete
            .get()
            .map(|r| {
                format!(
                    "Delete overtime of {} on {} ({} h)?",
                    r.employee_name,
                    format_date(&r.date),
                    format_hours(r.hours)
                )
            })
            .unwrap_or_default()
    });

    let current_year = today().year();

    view! {
        <PageFrame page_id="a003_overtime--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Overtime"</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || state.with(|s| format!("{} {}", month_name(s.month), s.year))}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Select value=month_select>
                        {(1..=12u32)
                            .map(|m| view! { <option value=m.to_string()>{month_name(m)}</option> })
                            .collect_view()}
                    </Select>
                    <Select value=year_select>
                        {((current_year - 4)..=(current_year + 1))
                            .rev()
                            .map(|y| view! { <option value=y.to_string()>{y.to_string()}</option> })
                            .collect_view()}
                    </Select>
                    <RequireRole allow=Role::can_manage_overtime>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| show_create.set(true)>
                            {icon("plus")}
                            " Add overtime"
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

                <p class="page__hint">
                    {move || state.with(|s| format!(
                        "Cards add up the records of {} {} only.",
                        month_name(s.month),
                        s.year
                    ))}
                </p>
                <div class="stat-cards">
                    {PeriodBucket::ALL
                        .into_iter()
                        .map(|bucket| {
                            view! {
                                <StatCard
                                    label=bucket_label(bucket)
                                    icon_name=bucket_icon(bucket)
                                    value=Signal::derive(move || Some(buckets.get().get(bucket).amount))
                                    subtitle=Signal::derive(move || {
                                        let hours = buckets.get().get(bucket).hours;
                                        Some(state.with(|s| bucket_subtitle(hours, s.month, s.year)))
                                    })
                                />
                            }
                        })
                        .collect_view()}
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 860px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=110.0>"Date"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Employee"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"From"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"To"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=80.0>"Hours"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Amount"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Remarks"</TableHeaderCell>
                                <Show when=move || role.get().can_manage_overtime()>
                                    <TableHeaderCell resizable=false min_width=60.0>""</TableHeaderCell>
                                </Show>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || records.get()
                                key=|r| r.id.clone()
                                children=move |record: OvertimeRecord| {
                                    let for_delete = StoredValue::new(record.clone());
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {format!("{} {}", format_date(&record.date), weekday_short(&record.date))}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout truncate=true>{record.employee_name.clone()}</TableCellLayout></TableCell>
                                            <TableCell>{record.from_time.clone()}</TableCell>
                                            <TableCell>{record.to_time.clone()}</TableCell>
                                            <TableCell class="text-right">{format_hours(record.hours)}</TableCell>
                                            <TableCellMoney value=Some(record.amount) />
                                            <TableCell><TableCellLayout truncate=true>{record.remarks.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                            <Show when=move || role.get().can_manage_overtime()>
                                                <TableCell>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| request_delete(for_delete.get_value())
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </TableCell>
                                            </Show>
                                        </TableRow>
                                    }
                                }
                            />
                            <TableTotalsRow>
                                <td>{move || format!("Rows: {}", records.with(|r| r.len()))}</td>
                                <td></td>
                                <td></td>
                                <td></td>
                                <td class="table__cell--right">{move || format_hours(total_hours.get())}</td>
                                <td class="table__cell--right">{move || format_money(total_amount.get())}</td>
                                <td></td>
                            </TableTotalsRow>
                        </TableBody>
                    </Table>
                </div>
            </div>

            <NewOvertimeDialog open=show_create on_created=on_created />
            <ConfirmDialog
                open=confirm_open
                title="Delete overtime"
                message=delete_message
                confirm_label="Delete"
                on_confirm=confirm_delete
            />
        </PageFrame>
    }
}

#[component]
fn NewOvertimeDialog(open: RwSignal<bool>, on_created: Callback<OvertimeRecord>) -> impl IntoView {
    let employees = RwSignal::new(Vec::<Employee>::new());
    let employee_id = RwSignal::new(String::new());
    let date = RwSignal::new(today().format("%Y-%m-%d").to_string());
    let from_time = RwSignal::new("18:00".to_string());
    let to_time = RwSignal::new("20:00".to_string());
    let remarks = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    // Employee options are fetched the first time the dialog opens.
    Effect::new(move |_| {
        if open.get() && employees.with_untracked(|e| e.is_empty()) {
            spawn_local(async move {
                match employee_api::fetch_employees().await {
                    Ok(list) => employees.set(list),
                    Err(e) => error.set(Some(format!("Failed to load employees: {}", e))),
                }
            });
        }
    });

    let hours = Memo::new(move |_| {
        hours_between(&from_time.get(), &to_time.get()).map_err(|e| e.to_string())
    });

    let submit = move |_| {
        let hours = match hours.get_untracked() {
            Ok(h) if h > 0.0 => h,
            Ok(_) => {
                error.set(Some("From and to times must differ".to_string()));
                return;
            }
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };
        let employee = employee_id.get_untracked();
        if employee.is_empty() {
            error.set(Some("Select an employee".to_string()));
            return;
        }
        let date_value = date.get_untracked().trim().to_string();
        if parse_iso_date(&date_value).is_none() {
            error.set(Some("Date must be YYYY-MM-DD".to_string()));
            return;
        }
        let remarks_value = remarks.get_untracked();
        let dto = OvertimeDto {
            employee_id: employee,
            date: date_value,
            from_time: from_time.get_untracked().trim().to_string(),
            to_time: to_time.get_untracked().trim().to_string(),
            hours,
            remarks: (!remarks_value.trim().is_empty()).then(|| remarks_value.trim().to_string()),
        };
        error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            match api::create_overtime(&dto).await {
                Ok(record) => {
                    on_created.run(record);
                    remarks.set(String::new());
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
                    <DialogTitle>"Add overtime"</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Small>
                            <ErrorBanner error=error />
                            <Label>"Employee"</Label>
                            <Select value=employee_id>
                                <option value="">"-- Select --"</option>
                                <For
                                    each=move || employees.get()
                                    key=|e| e.id.clone()
                                    children=move |e: Employee| {
                                        view! { <option value=e.id.clone()>{e.full_name()}</option> }
                                    }
                                />
                            </Select>
                            <Label>"Date"</Label>
                            <Input value=date placeholder="YYYY-MM-DD" />
                            <Flex gap=FlexGap::Small>
                                <Flex vertical=true>
                                    <Label>"From"</Label>
                                    <Input value=from_time placeholder="HH:MM" />
                                </Flex>
                                <Flex vertical=true>
                                    <Label>"To"</Label>
                                    <Input value=to_time placeholder="HH:MM" />
                                </Flex>
                            </Flex>
                            <div class="form__hint">
                                {move || match hours.get() {
                                    Ok(h) => format!("{} h", format_hours(h)),
                                    Err(e) => e,
                                }}
                            </div>
                            <Label>"Remarks"</Label>
                            <Input value=remarks />
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
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| open.set(false)>
                            "Cancel"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
