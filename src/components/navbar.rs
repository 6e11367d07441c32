use leptos::prelude::*;

use super::icons::{Heart, LogIn, LogOut, ShoppingBag, UserPlus};
use crate::api::use_api;
use crate::auth::{logout, use_auth};
use crate::web::router::{Link, use_router};

#[component]
pub fn Navbar() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let auth = use_auth();
    let router = use_router();

    let is_authenticated = move || auth.state.get().is_authenticated;
    let user_name = move || {
        auth.state
            .get()
            .user
            .map(|user| user.name)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        logout(auth, &api.get_value());
        router.navigate("/login");
    };

    view! {
        <div class="navbar bg-base-100 shadow-md sticky top-0 z-50 px-4">
            <div class="flex-1">
                <Link to="/" class="btn btn-ghost text-xl gap-2">
                    <ShoppingBag attr:class="h-5 w-5 text-primary" />
                    "MicroMarketplace"
                </Link>
            </div>
            <div class="flex-none items-center gap-1">
                <Link to="/" class="btn btn-ghost btn-sm">
                    "Products"
                </Link>
                <Show
                    when=is_authenticated
                    fallback=|| {
                        view! {
                            <Link to="/login" class="btn btn-ghost btn-sm gap-1">
                                <LogIn attr:class="h-4 w-4" />
                                "Login"
                            </Link>
                            <Link to="/register" class="btn btn-ghost btn-sm gap-1">
                                <UserPlus attr:class="h-4 w-4" />
                                "Register"
                            </Link>
                        }
                    }
                >
                    <Link to="/favorites" class="btn btn-ghost btn-sm gap-1">
                        <Heart attr:class="h-4 w-4" />
                        "Favorites"
                    </Link>
                    <span class="px-2 text-sm font-medium">{user_name}</span>
                    <button on:click=on_logout class="btn btn-primary btn-sm gap-1">
                        <LogOut attr:class="h-4 w-4" />
                        "Logout"
                    </button>
                </Show>
            </div>
        </div>
    }
}
