use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::components::ErrorBanner;
use crate::system::auth::context::{do_login, use_auth};
use crate::system::auth::storage;

/// Sign-in form shown while no token is stored.
#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(storage::get_last_email().unwrap_or_default());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let (signing_in, set_signing_in) = signal(false);

    let (_, set_auth_state) = use_auth();

    let sign_in = move || {
        if signing_in.get_untracked() {
            return;
        }
        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if email_val.is_empty() || password_val.is_empty() {
            error.set(Some("Enter email and password".to_string()));
            return;
        }

        set_signing_in.set(true);
        error.set(None);
        spawn_local(async move {
            // AppShell swaps in the main layout once the auth state has a token.
            if let Err(e) = do_login(email_val, password_val, set_auth_state).await {
                password.set(String::new());
                error.set(Some(format!("Sign-in failed: {}", e)));
            }
            set_signing_in.set(false);
        });
    };

    view! {
        <div class="login">
            <form
                class="login__card"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    sign_in();
                }
            >
                <h1 class="login__title">"HR & Finance"</h1>
                <p class="login__subtitle">"Sign in with your work account"</p>

                <ErrorBanner error=error />

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Email"</Label>
                    <Input value=email input_type=InputType::Email placeholder="name@company.com" />
                    <Label>"Password"</Label>
                    <Input value=password input_type=InputType::Password />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| sign_in()
                        disabled=Signal::derive(move || signing_in.get())
                    >
                        {move || if signing_in.get() { "Signing in..." } else { "Sign in" }}
                    </Button>
                </Flex>
            </form>
        </div>
    }
}
