use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{Filter, Search};
use super::product_card::ProductCard;
use super::query::{Pager, ProductQuery};
use crate::api::use_api;
use crate::auth::use_auth;
use crate::models::Product;

const PAGE_SIZE: u32 = 10;
const CATEGORIES: [&str; 4] = ["Electronics", "Accessories", "Storage", "Cables"];

#[component]
pub fn ProductsPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth();

    let (query, set_query) = signal(ProductQuery::new());
    let (products, set_products) = signal(Vec::<Product>::new());
    let (total_pages, set_total_pages) = signal(1u32);
    let (favorites, set_favorites) = signal(HashSet::<String>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    // Monotonic fetch generation. Rapid input changes fire overlapping
    // requests with no cancellation; a response tagged with an older
    // generation is dropped instead of overwriting newer state.
    let (generation, set_generation) = signal(0u64);

    // Re-fetch whenever the tracked query changes.
    Effect::new({
        let api = api.clone();
        move |_| {
            let current = query.get();
            let fetch_generation = generation.get_untracked() + 1;
            set_generation.set(fetch_generation);
            set_loading.set(true);
            set_error.set(None);
            let api = api.clone();
            spawn_local(async move {
                let result = api
                    .list_products(&current.search, &current.category, current.page, PAGE_SIZE)
                    .await;
                if generation.get_untracked() != fetch_generation {
                    // a newer request took over
                    return;
                }
                match result {
                    Ok(listing) => {
                        set_products.set(listing.products);
                        set_total_pages.set(listing.pages.max(1));
                    }
                    Err(err) => set_error.set(Some(err)),
                }
                set_loading.set(false);
            });
        }
    });

    // The favorite-id set only drives the heart icons; guests skip it.
    Effect::new({
        let api = api.clone();
        move |_| {
            let state = auth.state.get();
            if !state.is_authenticated {
                set_favorites.set(HashSet::new());
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.get_favorites().await {
                    Ok(entries) => {
                        set_favorites.set(
                            entries
                                .iter()
                                .map(|entry| entry.product_id().to_string())
                                .collect(),
                        );
                    }
                    // hearts just render unfilled when this fails
                    Err(err) => web_sys::console::error_1(&err.into()),
                }
            });
        }
    });

    let on_search = move |ev| set_query.update(|q| q.set_search(event_target_value(&ev)));
    let on_category = move |ev| set_query.update(|q| q.set_category(event_target_value(&ev)));
    let prev_page = move |_| {
        let total = total_pages.get_untracked();
        set_query.update(|q| q.set_page(q.page.saturating_sub(1), total));
    };
    let next_page = move |_| {
        let total = total_pages.get_untracked();
        set_query.update(|q| q.set_page(q.page + 1, total));
    };

    let on_favorite_change = Callback::new(move |(id, is_favorite): (String, bool)| {
        set_favorites.update(|set| {
            if is_favorite {
                set.insert(id);
            } else {
                set.remove(&id);
            }
        });
    });

    let pager = move || Pager::new(query.get().page, total_pages.get());

    view! {
        <div class="max-w-7xl mx-auto p-4 md:p-8 space-y-6">
            <div class="text-center space-y-1">
                <h1 class="text-3xl font-bold">"Browse Products"</h1>
                <p class="text-base-content/70">"Discover amazing products from our sellers"</p>
            </div>

            <div class="flex flex-col md:flex-row gap-4">
                <label class="input input-bordered flex items-center gap-2 flex-1">
                    <Search attr:class="h-4 w-4 opacity-50" />
                    <input
                        type="text"
                        class="grow"
                        placeholder="Search products..."
                        on:input=on_search
                        prop:value=move || query.get().search
                    />
                </label>
                <div class="flex items-center gap-2">
                    <Filter attr:class="h-4 w-4 opacity-50" />
                    <select class="select select-bordered" on:change=on_category>
                        <option value="" selected=move || query.get().category.is_empty()>
                            "All Categories"
                        </option>
                        {CATEGORIES
                            .into_iter()
                            .map(|category| {
                                view! {
                                    <option
                                        value=category
                                        selected=move || query.get().category == category
                                    >
                                        {category}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
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
                            <p class="text-base-content/60">"Loading products..."</p>
                        </div>
                    }
                }
            >
                <Show
                    when=move || !products.get().is_empty()
                    fallback=|| {
                        view! {
                            <div class="text-center py-16 text-base-content/60">
                                <p class="text-lg">"No products found"</p>
                                <p class="text-sm">"Try adjusting your search or filters"</p>
                            </div>
                        }
                    }
                >
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                        <For
                            each=move || products.get()
                            key=|product| product.id.clone()
                            children=move |product| {
                                let id = product.id.clone();
                                let is_favorite =
                                    Signal::derive(move || favorites.get().contains(&id));
                                view! {
                                    <ProductCard
                                        product=product
                                        is_favorite=is_favorite
                                        on_change=on_favorite_change
                                    />
                                }
                            }
                        />
                    </div>

                    <div class="flex items-center justify-center gap-4 pt-4">
                        <button
                            class="btn btn-outline btn-sm"
                            on:click=prev_page
                            disabled=move || !pager().has_prev()
                        >
                            "Previous"
                        </button>
                        <span class="text-sm">
                            "Page " {move || query.get().page} " of " {move || total_pages.get()}
                        </span>
                        <button
                            class="btn btn-outline btn-sm"
                            on:click=next_page
                            disabled=move || !pager().has_next()
                        >
                            "Next"
                        </button>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
