use contracts::system::auth::{ChangePasswordDto, UpdateProfileDto, MIN_PASSWORD_LEN};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::ErrorBanner;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::api;
use crate::system::auth::context::use_auth;

const NOTICE_MS: u32 = 4000;

/// Shows a success notice and hides it again unless a newer one replaced it.
fn flash_notice(notice: RwSignal<Option<String>>, text: &str) {
    let text = text.to_string();
    notice.set(Some(text.clone()));
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_MS).await;
        if notice.get_untracked().as_deref() == Some(text.as_str()) {
            notice.set(None);
        }
    });
}

/// Current user: profile form and password change.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let user_id = RwSignal::new(Option::<String>::None);
    let role_label = RwSignal::new(String::new());

    let current_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let loading = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let notice = RwSignal::new(Option::<String>::None);

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::get_current_user().await {
                Ok(user) => {
                    name.set(user.name.clone());
                    email.set(user.email.clone());
                    phone.set(user.phone.clone().unwrap_or_default());
                    user_id.set(Some(user.id.clone()));
                    role_label.set(user.role.label().to_string());
                    set_auth_state.update(|s| s.user = Some(user));
                }
                Err(e) => error.set(Some(e)),
            }
            loading.set(false);
        });
    };
    load();

    let save_profile = move |_| {
        let Some(id) = user_id.get_untracked() else {
            return;
        };
        let phone_val = phone.get_untracked().trim().to_string();
        let dto = UpdateProfileDto {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            phone: (!phone_val.is_empty()).then_some(phone_val),
        };
        if let Err(msg) = dto.validate() {
            error.set(Some(msg));
            return;
        }
        saving.set(true);
        error.set(None);
        notice.set(None);
        spawn_local(async move {
            match api::update_profile(&id, &dto).await {
                Ok(user) => {
                    set_auth_state.update(|s| s.user = Some(user));
                    flash_notice(notice, "Profile saved");
                }
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    };

    let change_password = move |_| {
        let Some(id) = user_id.get_untracked() else {
            return;
        };
        let dto = ChangePasswordDto {
            current_password: current_password.get_untracked(),
            new_password: new_password.get_untracked(),
        };
        if let Err(msg) = dto.validate(&confirm_password.get_untracked()) {
            error.set(Some(msg));
            return;
        }
        saving.set(true);
        error.set(None);
        notice.set(None);
        spawn_local(async move {
            match api::change_password(&id, &dto).await {
                Ok(()) => {
                    current_password.set(String::new());
                    new_password.set(String::new());
                    confirm_password.set(String::new());
                    flash_notice(notice, "Password changed");
                }
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    };

    let busy = Signal::derive(move || loading.get() || saving.get());

    view! {
        <PageFrame page_id="sys_profile--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"My profile"</h1>
                    <Badge appearance=BadgeAppearance::Tint>
                        {move || role_label.get()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <span class="page__header-hint">
                        {move || auth_state.with(|s| s.display_name())}
                    </span>
                </div>
            </div>

            <div class="page__content">
                <ErrorBanner error=error />
                {move || notice.get().map(|text| view! { <div class="alert alert--success">{text}</div> })}

                <div class="form-grid">
                    <section class="form-section">
                        <h3 class="form-section__title">"Details"</h3>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Name"</Label>
                            <Input value=name />
                            <Label>"Email"</Label>
                            <Input value=email input_type=InputType::Email />
                            <Label>"Phone"</Label>
                            <Input value=phone placeholder="optional" />
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=save_profile
                                disabled=busy
                            >
                                "Save profile"
                            </Button>
                        </Flex>
                    </section>

                    <section class="form-section">
                        <h3 class="form-section__title">"Change password"</h3>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Current password"</Label>
                            <Input value=current_password input_type=InputType::Password />
                            <Label>{format!("New password (min. {} characters)", MIN_PASSWORD_LEN)}</Label>
                            <Input value=new_password input_type=InputType::Password />
                            <Label>"Confirm new password"</Label>
                            <Input value=confirm_password input_type=InputType::Password />
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=change_password
                                disabled=busy
                            >
                                "Change password"
                            </Button>
                        </Flex>
                    </section>
                </div>
            </div>
        </PageFrame>
    }
}
