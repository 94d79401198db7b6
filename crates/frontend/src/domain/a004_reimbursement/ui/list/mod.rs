pub mod state;

use self::state::{apply_filter, create_state, persist_filter, restore_filter, ALL_STATUSES};
use crate::domain::a004_reimbursement::api;
use crate::shared::components::table::{format_money, TableCellMoney};
use crate::shared::components::{ErrorBanner, StatCard, TableTotalsRow};
use crate::shared::date_utils::{format_date, today};
use crate::shared::icons::icon;
use crate::shared::list_utils::reload_after;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_role;
use contracts::domain::a004_reimbursement::aggregate::{
    NewReimbursementDto, Reimbursement, ReimbursementStatus, ReimbursementTotals,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn status_color(status: ReimbursementStatus) -> BadgeColor {
    match status {
        ReimbursementStatus::Pending => BadgeColor::Warning,
        ReimbursementStatus::Approved => BadgeColor::Success,
        ReimbursementStatus::Rejected => BadgeColor::Danger,
        ReimbursementStatus::Unknown => BadgeColor::Subtle,
    }
}

fn status_tone(status: ReimbursementStatus) -> &'static str {
    match status {
        ReimbursementStatus::Pending => "warning",
        ReimbursementStatus::Approved => "success",
        ReimbursementStatus::Rejected => "error",
        ReimbursementStatus::Unknown => "",
    }
}

#[component]
pub fn ReimbursementList() -> impl IntoView {
    let state = create_state();
    let role = use_role();
    let (loading, set_loading) = signal(false);
    let error = RwSignal::new(Option::<String>::None);
    let status_filter = RwSignal::new(restore_filter());
    let show_submit = RwSignal::new(false);
    let rejecting = RwSignal::new(Option::<Reimbursement>::None);
    let reject_open = RwSignal::new(false);

    let load = move || {
        set_loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::fetch_reimbursements().await {
                Ok(items) => state.update(|s| {
                    s.items = items;
                    s.is_loaded = true;
                }),
                Err(e) => error.set(Some(format!("Failed to load claims: {}", e))),
            }
            set_loading.set(false);
        });
    };
    load();

    Effect::new(move |_| persist_filter(&status_filter.get()));

    let visible = Memo::new(move |_| {
        let filter = status_filter.get();
        state.with(|s| {
            let mut rows = apply_filter(&s.items, &filter);
            rows.sort_by(|a, b| b.expense_date.cmp(&a.expense_date));
            rows
        })
    });
    // Status cards always summarize every claim, the totals row only the visible ones.
    let all_totals = Memo::new(move |_| state.with(|s| ReimbursementTotals::from_items(&s.items)));
    let visible_totals = Memo::new(move |_| visible.with(|v| ReimbursementTotals::from_items(v)));

    let approve = move |id: String| {
        spawn_local(async move {
            match api::approve_reimbursement(&id).await {
                Ok(()) => load(),
                Err(e) => error.set(Some(format!("Approve failed: {}", e))),
            }
        });
    };

    let start_reject = move |claim: Reimbursement| {
        rejecting.set(Some(claim));
        reject_open.set(true);
    };

    // Reviewer, timestamps and comments are set server-side
    let on_rejected = reload_after::<()>(load);
    let on_submitted = reload_after::<Reimbursement>(load);

    let can_review = Signal::derive(move || role.get().can_review_reimbursements());

    view! {
        <PageFrame page_id="a004_reimbursement--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Reimbursements"</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || visible.with(|v| v.len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Select value=status_filter>
                        <option value=ALL_STATUSES>"All statuses"</option>
                        {ReimbursementStatus::ALL
                            .into_iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect_view()}
                    </Select>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| show_submit.set(true)>
                        {icon("plus")}
                        " Submit claim"
                    </Button>
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
                    {ReimbursementStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! {
                                <StatCard
                                    label=status.label()
                                    icon_name="receipt"
                                    value=Signal::derive(move || Some(all_totals.get().for_status(status)))
                                    tone=status_tone(status)
                                />
                            }
                        })
                        .collect_view()}
                    <StatCard
                        label="Total"
                        icon_name="banknote"
                        value=Signal::derive(move || Some(all_totals.get().total))
                        subtitle=Signal::derive(move || Some(format!("{} claims", all_totals.get().count)))
                    />
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=100.0>"Date"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Employee"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>"Category"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>"Description"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Amount"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Status"</TableHeaderCell>
                                <Show when=move || can_review.get()>
                                    <TableHeaderCell resizable=false min_width=120.0>""</TableHeaderCell>
                                </Show>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible.get()
                                key=|r| (r.id.clone(), r.status)
                                children=move |claim: Reimbursement| {
                                    let pending = claim.is_pending();
                                    let id = StoredValue::new(claim.id.clone());
                                    let for_reject = StoredValue::new(claim.clone());
                                    let comment = claim.reviewer_comment.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>{format_date(&claim.expense_date)}</TableCell>
                                            <TableCell><TableCellLayout truncate=true>{claim.employee_name.clone()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{claim.category.clone()}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {claim.description.clone()}
                                                    {comment.map(|c| view! { <div class="table__subtext">{c}</div> })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCellMoney value=Some(claim.amount) />
                                            <TableCell>
                                                <Badge appearance=BadgeAppearance::Tint color=status_color(claim.status)>
                                                    {claim.status.label()}
                                                </Badge>
                                            </TableCell>
                                            <Show when=move || can_review.get()>
                                                <TableCell>
                                                    <Show when=move || pending>
                                                        <Flex gap=FlexGap::Small>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| approve(id.get_value())
                                                            >
                                                                {icon("check")}
                                                            </Button>
                                                            <Button
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| start_reject(for_reject.get_value())
                                                            >
                                                                {icon("x")}
                                                            </Button>
                                                        </Flex>
                                                    </Show>
                                                </TableCell>
                                            </Show>
                                        </TableRow>
                                    }
                                }
                            />
                            <TableTotalsRow>
                                <td>{move || format!("Claims: {}", visible_totals.get().count)}</td>
                                <td></td>
                                <td></td>
                                <td></td>
                                <td class="table__cell--right">{move || format_money(visible_totals.get().total)}</td>
                                <td></td>
                            </TableTotalsRow>
                        </TableBody>
                    </Table>
                </div>
            </div>

            <SubmitClaimDialog open=show_submit on_submitted=on_submitted />
            <RejectDialog open=reject_open claim=rejecting on_rejected=on_rejected />
        </PageFrame>
    }
}

#[component]
fn SubmitClaimDialog(open: RwSignal<bool>, on_submitted: Callback<Reimbursement>) -> impl IntoView {
    let category = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let expense_date = RwSignal::new(today().format("%Y-%m-%d").to_string());
    let error = RwSignal::new(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let submit = move |_| {
        let Ok(amount_value) = amount.get_untracked().trim().parse::<f64>() else {
            error.set(Some("Amount must be a number".to_string()));
            return;
        };
        let dto = NewReimbursementDto {
            category: category.get_untracked().trim().to_string(),
            description: description.get_untracked().trim().to_string(),
            amount: amount_value,
            expense_date: expense_date.get_untracked().trim().to_string(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e));
            return;
        }
        error.set(None);
        set_saving.set(true);
        spawn_local(async move {
            match api::submit_reimbursement(&dto).await {
                Ok(claim) => {
                    on_submitted.run(claim);
                    category.set(String::new());
                    description.set(String::new());
                    amount.set(String::new());
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
                    <DialogTitle>"Submit claim"</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Small>
                            <ErrorBanner error=error />
                            <Label>"Category"</Label>
                            <Input value=category placeholder="Travel, meals, equipment..." />
                            <Label>"Description"</Label>
                            <Input value=description />
                            <Label>"Amount"</Label>
                            <Input value=amount input_type=InputType::Number />
                            <Label>"Expense date"</Label>
                            <Input value=expense_date placeholder="YYYY-MM-DD" />
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=submit
                            disabled=Signal::derive(move || saving.get())
                        >
                            "Submit"
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

#[component]
fn RejectDialog(
    open: RwSignal<bool>,
    claim: RwSignal<Option<Reimbursement>>,
    on_rejected: Callback<()>,
) -> impl IntoView {
    let reason = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let confirm = move |_| {
        let Some(target) = claim.get_untracked() else {
            open.set(false);
            return;
        };
        let reason_value = reason.get_untracked().trim().to_string();
        if reason_value.is_empty() {
            error.set(Some("A reason is required".to_string()));
            return;
        }
        error.set(None);
        spawn_local(async move {
            match api::reject_reimbursement(&target.id, &reason_value).await {
                Ok(()) => {
                    on_rejected.run(());
                    reason.set(String::new());
                    claim.set(None);
                    open.set(false);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Reject claim"</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Small>
                            <ErrorBanner error=error />
                            <p>
                                {move || claim.get().map(|c| {
                                    format!("{} · {} · {}", c.employee_name, c.category, format_money(c.amount))
                                })}
                            </p>
                            <Label>"Reason"</Label>
                            <Input value=reason />
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Primary on_click=confirm>
                            "Reject"
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
