use super::tabs::{EmploymentTab, GeneralTab, PayrollTab};
use super::view_model::EmployeeDetailsVm;
use crate::shared::components::ErrorBanner;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use crate::system::auth::context::use_role;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn EmployeeDetail(id: String, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let vm = EmployeeDetailsVm::new();
    vm.load(id.clone());
    let title = vm.title();

    view! {
        <PageFrame page_id="a001_employee--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("user")}
                    <h1 class="page__title">{move || title.get()}</h1>
                    {move || vm.employee.get().map(|e| view! {
                        <Badge appearance=BadgeAppearance::Tint>{e.employee_code}</Badge>
                    })}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.load(id.clone())
                        disabled=Signal::derive(move || vm.loading.get())
                    >
                        {icon("refresh")}
                        " Reload"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close.run(())
                    >
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner error=vm.error />
                <TabBar vm=vm />
                <Show
                    when=move || vm.employee.with(|e| e.is_some())
                    fallback=move || view! {
                        <Show when=move || vm.loading.get()>
                            <Flex gap=FlexGap::Small>
                                <Spinner />
                                <span>"Loading..."</span>
                            </Flex>
                        </Show>
                    }
                >
                    <TabContent vm=vm />
                </Show>
            </div>
        </PageFrame>
    }
}

#[component]
fn TabBar(vm: EmployeeDetailsVm) -> impl IntoView {
    let role = use_role();
    let tab_button = move |key: &'static str, label: &'static str| {
        view! {
            <Button
                appearance=Signal::derive(move || {
                    if vm.active_tab.get() == key {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Subtle
                    }
                })
                on_click=move |_| vm.active_tab.set(key)
            >
                {label}
            </Button>
        }
    };

    view! {
        <div class="detail-tabs">
            {tab_button("general", "General")}
            {tab_button("employment", "Employment")}
            <Show when=move || role.get().can_view_payroll()>
                {tab_button("payroll", "Payroll")}
            </Show>
        </div>
    }
}

#[component]
fn TabContent(vm: EmployeeDetailsVm) -> impl IntoView {
    move || match vm.active_tab.get() {
        "employment" => view! { <EmploymentTab vm=vm /> }.into_any(),
        "payroll" => view! { <PayrollTab vm=vm /> }.into_any(),
        _ => view! { <GeneralTab vm=vm /> }.into_any(),
    }
}
