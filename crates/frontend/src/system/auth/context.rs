use contracts::system::auth::{Role, UserProfile};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, claims, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<UserProfile>,
}

impl AuthState {
    fn from_token(token: String) -> Self {
        // Until /me answers, name and role come from the token payload.
        let user = claims::decode_claims(&token).ok().map(|c| UserProfile {
            id: c.sub,
            name: c.name.unwrap_or_default(),
            email: c.email.unwrap_or_default(),
            phone: None,
            role: c.role,
        });
        Self {
            access_token: Some(token),
            user,
        }
    }

    pub fn role(&self) -> Role {
        self.user.as_ref().map(|u| u.role).unwrap_or(Role::Unknown)
    }

    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| if u.name.is_empty() { u.email.clone() } else { u.name.clone() })
            .unwrap_or_else(|| "Guest".to_string())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let initial = match storage::get_access_token() {
        Some(token) => {
            let expired = claims::decode_claims(&token)
                .map(|c| claims::is_token_expired(&c))
                .unwrap_or(false);
            if expired {
                log::info!("stored token expired, signing out");
                storage::clear_tokens();
                AuthState::default()
            } else {
                AuthState::from_token(token)
            }
        }
        None => AuthState::default(),
    };
    let restoring = initial.access_token.is_some();
    let (auth_state, set_auth_state) = signal(initial);

    // Validate the restored token once
    if restoring {
        spawn_local(async move {
            match api::get_current_user().await {
                Ok(user) => set_auth_state.update(|s| s.user = Some(user)),
                Err(e) => {
                    log::warn!("session restore failed: {}", e);
                    storage::clear_tokens();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Role of the signed-in user as a reactive signal.
pub fn use_role() -> Signal<Role> {
    let (auth_state, _) = use_auth();
    Signal::derive(move || auth_state.with(|s| s.role()))
}

/// Stores the token and switches the shell to the main layout.
pub async fn do_login(
    email: String,
    password: String,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), String> {
    let response = api::login(email, password).await?;
    storage::save_access_token(&response.token);
    storage::save_last_email(&response.user.email);
    log::info!("signed in as {}", response.user.email);
    set_auth_state.set(AuthState {
        access_token: Some(response.token),
        user: Some(response.user),
    });
    Ok(())
}

/// There is no server-side session; dropping the token is enough.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_tokens();
    set_auth_state.set(AuthState::default());
}
