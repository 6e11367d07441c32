//! Router service - the engine.
//!
//! All History API access lives in this module. Navigation runs a
//! "request -> guard -> commit" flow: the target route is checked against
//! the injected authentication signal, redirected when a guard rejects it,
//! then pushed into history and reflected in the route signal.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Replace instead of push; used for redirects so Back does not bounce.
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Router service.
///
/// Drives the UI through a route signal; authentication is an injected
/// signal so this module stays decoupled from the auth system.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(AppRoute::default());

        let service = Self {
            current_route,
            set_route,
            is_authenticated,
        };
        // Guards apply to the very first route too: a deep link to an
        // unmatched or protected path lands on the redirect target.
        service.commit(initial_route, false);
        service
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Navigate with guards, pushing a new history entry.
    pub fn navigate(&self, path: &str) {
        self.commit(AppRoute::from_path(path), true);
    }

    /// History back; the popstate listener restores the route signal.
    pub fn back(&self) {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    }

    /// Guard the target, then write history and the route signal.
    ///
    /// `use_push` selects pushState over replaceState for an accepted
    /// target; redirected targets always replace.
    fn commit(&self, target_route: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();

        // Unmatched paths redirect to the listing.
        if target_route == AppRoute::NotFound {
            let redirect = AppRoute::fallback_redirect();
            replace_history_state(&redirect.to_path());
            self.set_route.set(redirect);
            return;
        }

        // Protected route, unauthenticated user.
        if target_route.requires_auth() && !is_auth {
            web_sys::console::log_1(&"[Router] Access denied, redirecting to login.".into());
            let redirect = AppRoute::auth_failure_redirect();
            replace_history_state(&redirect.to_path());
            self.set_route.set(redirect);
            return;
        }

        // Authenticated user on an auth form.
        if target_route.should_redirect_when_authenticated() && is_auth {
            web_sys::console::log_1(&"[Router] Already authenticated, redirecting.".into());
            let redirect = AppRoute::auth_success_redirect();
            replace_history_state(&redirect.to_path());
            self.set_route.set(redirect);
            return;
        }

        if use_push {
            push_history_state(&target_route.to_path());
        } else {
            replace_history_state(&target_route.to_path());
        }
        self.set_route.set(target_route);
    }

    /// Browser back/forward support; guards run on popstate too.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            let is_auth = is_authenticated.get_untracked();

            if target_route == AppRoute::NotFound {
                let redirect = AppRoute::fallback_redirect();
                replace_history_state(&redirect.to_path());
                set_route.set(redirect);
            } else if target_route.requires_auth() && !is_auth {
                let redirect = AppRoute::auth_failure_redirect();
                replace_history_state(&redirect.to_path());
                set_route.set(redirect);
            } else {
                set_route.set(target_route);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure to keep the listener alive.
        closure.forget();
    }

    /// React to authentication changes: logging out while on a protected
    /// page kicks to login, logging in while on an auth form kicks to the
    /// listing.
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if is_auth {
                if route.should_redirect_when_authenticated() {
                    let redirect = AppRoute::auth_success_redirect();
                    push_history_state(&redirect.to_path());
                    set_route.set(redirect);
                    web_sys::console::log_1(&"[Router] Logged in, leaving auth form.".into());
                }
            } else if route.requires_auth() {
                let redirect = AppRoute::auth_failure_redirect();
                push_history_state(&redirect.to_path());
                set_route.set(redirect);
                web_sys::console::log_1(&"[Router] Logged out, redirecting to login.".into());
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// Navigation as a plain callable, for event handlers.
#[allow(dead_code)]
pub fn use_navigate() -> impl Fn(&str) + Clone {
    let router = use_router();
    move |to: &str| {
        router.navigate(to);
    }
}

// ============================================================================
// UI components
// ============================================================================

/// Router root; provides the routing context. Mount once at the app root.
#[component]
pub fn Router(
    /// Authentication signal injected into the guards.
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// Renders the view the matcher picks for the current route.
#[component]
pub fn RouterOutlet(
    /// Maps the current route to a view.
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// Anchor that navigates through the router instead of reloading the page.
#[component]
pub fn Link(
    /// Target path.
    #[prop(into)]
    to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let href = to.clone();
    let on_click = move |ev: leptos::web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(&to);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
