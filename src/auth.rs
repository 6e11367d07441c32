//! Authentication state.
//!
//! Holds the cached user profile and the authenticated flag as signals,
//! decoupled from the routing system: the router only sees an injected
//! `Signal<bool>` and reacts to it.

use leptos::prelude::*;

use crate::api::MarketApi;
use crate::session::SessionStore;

#[derive(Clone, Default)]
pub struct AuthState {
    /// Cached profile from the last login/register, or from storage.
    pub user: Option<crate::models::User>,
    pub is_authenticated: bool,
    /// True until the stored session has been loaded.
    pub is_loading: bool,
}

/// Read/write signal pair shared through Context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState {
            is_loading: true,
            ..AuthState::default()
        });
        Self { state, set_state }
    }

    /// Auth flag as a derived signal, for injecting into the router.
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// Hydrate the auth signals from the durable session store.
///
/// A present token counts as authenticated even when the cached profile is
/// missing or unreadable; the profile is display-only.
pub fn init_auth(ctx: &AuthContext, session: &SessionStore) {
    let user = session.current_user();
    let is_authenticated = session.is_authenticated();
    ctx.set_state.update(|state| {
        state.user = user;
        state.is_authenticated = is_authenticated;
        state.is_loading = false;
    });
}

/// Authenticate and persist the returned session before the caller observes
/// success. The router reacts to the auth signal flip, so callers don't
/// navigate by hand.
pub async fn login(
    ctx: AuthContext,
    api: MarketApi,
    email: String,
    password: String,
) -> Result<(), String> {
    let response = api.login(&email, &password).await?;
    api.session.save(&response.token, &response.user);
    ctx.set_state.update(|state| {
        state.user = Some(response.user);
        state.is_authenticated = true;
    });
    Ok(())
}

/// Create an account; on success the session is persisted exactly as for
/// login.
pub async fn register(
    ctx: AuthContext,
    api: MarketApi,
    name: String,
    email: String,
    password: String,
) -> Result<(), String> {
    let response = api.register(&name, &email, &password).await?;
    api.session.save(&response.token, &response.user);
    ctx.set_state.update(|state| {
        state.user = Some(response.user);
        state.is_authenticated = true;
    });
    Ok(())
}

/// Purely local: clears the stored session and the signals. No network call.
pub fn logout(ctx: AuthContext, api: &MarketApi) {
    api.session.clear();
    ctx.set_state.update(|state| {
        state.user = None;
        state.is_authenticated = false;
    });
}
