//! MicroMarketplace frontend.
//!
//! Context-driven architecture with high cohesion and low coupling:
//! - `web::route`: route definitions (domain model)
//! - `web::router`: routing service (engine)
//! - `session`: durable session slot
//! - `api`: typed client for the marketplace API
//! - `auth`: authentication state
//! - `components`: UI layer

mod api;
mod auth;
mod models;
mod session;

mod components {
    pub mod favorites;
    mod icons;
    pub mod login;
    pub mod navbar;
    mod product_card;
    pub mod product_detail;
    pub mod products;
    mod query;
    pub mod register;
}

// Native Web API wrappers.
// Lightweight layers over the browser APIs the app relies on, keeping the
// `web_sys` plumbing out of the component layer.
pub(crate) mod web {
    pub mod route;
    pub mod router;
    pub mod storage;
}

use leptos::prelude::*;

use crate::api::{API_BASE_URL, MarketApi};
use crate::auth::{AuthContext, init_auth};
use crate::components::favorites::FavoritesPage;
use crate::components::login::LoginPage;
use crate::components::navbar::Navbar;
use crate::components::product_detail::ProductDetailPage;
use crate::components::products::ProductsPage;
use crate::components::register::RegisterPage;
use crate::session::SessionStore;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// Maps the current route to its page component.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Products => view! { <ProductsPage /> }.into_any(),
        AppRoute::Product(id) => view! { <ProductDetailPage id=id /> }.into_any(),
        AppRoute::Favorites => view! { <FavoritesPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        // the router redirects unmatched paths to the listing; this arm
        // only keeps the match total
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. One session slot, one API client; the client re-reads the token
    //    from the slot on every request.
    let session = SessionStore::browser();
    let api = MarketApi::new(API_BASE_URL, session.clone());
    provide_context(api);

    // 2. Auth context, hydrated from storage so reloads stay logged in.
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);
    init_auth(&auth_ctx, &session);

    // 3. The router only sees the auth flag, injected as a signal.
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <Navbar />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
