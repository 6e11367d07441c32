use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::ArrowLeft;
use super::product_card::ProductCard;
use crate::api::use_api;
use crate::auth::use_auth;
use crate::models::{FavoriteEntry, Product};
use crate::web::router::use_router;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let auth = use_auth();
    let router = use_router();

    let (favorites, set_favorites) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    // Guests have no favorites to show; send them to login.
    Effect::new(move |_| {
        let state = auth.state.get();
        if !state.is_loading && !state.is_authenticated {
            router.navigate("/login");
        }
    });

    Effect::new(move |_| {
        if !auth.state.get_untracked().is_authenticated {
            return;
        }
        set_loading.set(true);
        set_error.set(None);
        let api = api.get_value();
        spawn_local(async move {
            match api.get_favorites().await {
                Ok(entries) => {
                    // id-only entries carry nothing to render in the grid
                    set_favorites.set(
                        entries
                            .into_iter()
                            .filter_map(FavoriteEntry::into_product)
                            .collect(),
                    );
                }
                Err(err) => set_error.set(Some(err)),
            }
            set_loading.set(false);
        });
    });

    // A card reports a successful removal; drop exactly that product from
    // the local list, no refetch.
    let on_favorite_change = Callback::new(move |(id, is_favorite): (String, bool)| {
        if !is_favorite {
            set_favorites.update(|list| list.retain(|product| product.id != id));
        }
    });

    let count = move || favorites.get().len();
    let back = move |_| router.back();
    let browse = move |_| router.navigate("/");

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
            <button class="btn btn-outline btn-sm gap-2" on:click=back>
                <ArrowLeft attr:class="h-4 w-4" />
                "Back"
            </button>

            <div class="text-center space-y-1">
                <h1 class="text-3xl font-bold">"My Favorites"</h1>
                <p class="text-base-content/70">{count} " product(s) saved"</p>
            </div>

            <Show when=move || error.get().is_some()>
                <div role="alert" class="alert alert-error">
                    <span>{move || error.get().unwrap_or_default()}</span>
                </div>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="flex flex-col items-center gap-2 py-16">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                            <p class="text-base-content/60">"Loading favorites..."</p>
                        </div>
                    }
                }
            >
                <Show
                    when=move || !favorites.get().is_empty()
                    fallback=move || {
                        view! {
                            <div class="text-center py-16 space-y-3">
                                <h2 class="text-xl font-semibold">"No Favorites Yet"</h2>
                                <p class="text-base-content/60">
                                    "Start adding your favorite products to see them here"
                                </p>
                                <button class="btn btn-primary" on:click=browse>
                                    "Browse Products"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                        <For
                            each=move || favorites.get()
                            key=|product| product.id.clone()
                            children=move |product| {
                                view! {
                                    <ProductCard
                                        product=product
                                        is_favorite=Signal::derive(|| true)
                                        on_change=on_favorite_change
                                    />
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
