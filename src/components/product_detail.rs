use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{ArrowLeft, Heart, HeartFilled, Star};
use crate::api::use_api;
use crate::auth::use_auth;
use crate::models::Product;
use crate::web::router::use_router;

#[component]
pub fn ProductDetailPage(id: String) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let auth = use_auth();
    let router = use_router();

    let product_id = StoredValue::new(id);
    let (product, set_product) = signal(Option::<Product>::None);
    let (is_favorite, set_is_favorite) = signal(false);
    let (busy, set_busy) = signal(false);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    // One fetch on mount. There is no "is this favorited" endpoint, so
    // membership for this id derives from the full favorites list.
    Effect::new(move |_| {
        let api = api.get_value();
        let id = product_id.get_value();
        let is_authenticated = auth.state.get_untracked().is_authenticated;
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api.get_product(&id).await {
                Ok(found) => {
                    set_product.set(Some(found));
                    if is_authenticated {
                        if let Ok(entries) = api.get_favorites().await {
                            set_is_favorite
                                .set(entries.iter().any(|entry| entry.product_id() == id));
                        }
                    }
                }
                Err(err) => set_error.set(Some(err)),
            }
            set_loading.set(false);
        });
    });

    let on_toggle_favorite = move |_| {
        if !auth.state.get_untracked().is_authenticated {
            router.navigate("/login");
            return;
        }
        if busy.get_untracked() {
            return;
        }
        let api = api.get_value();
        let id = product_id.get_value();
        let currently = is_favorite.get_untracked();
        set_busy.set(true);
        spawn_local(async move {
            let result = if currently {
                api.remove_favorite(&id).await
            } else {
                api.add_favorite(&id).await
            };
            match result {
                // local state flips only once the server accepted the change
                Ok(()) => set_is_favorite.set(!currently),
                Err(err) => web_sys::console::error_1(&err.into()),
            }
            set_busy.set(false);
        });
    };

    let back = move |_| router.back();

    view! {
        <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-6">
            <button class="btn btn-outline btn-sm gap-2" on:click=back>
                <ArrowLeft attr:class="h-4 w-4" />
                "Back to Products"
            </button>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="flex justify-center py-16">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                }
            >
                {move || match product.get() {
                    None => {
                        view! {
                            <div role="alert" class="alert alert-error">
                                <span>
                                    {error.get().unwrap_or_else(|| "Product not found".to_string())}
                                </span>
                            </div>
                        }
                            .into_any()
                    }
                    Some(product) => {
                        let is_authenticated = auth.state.get().is_authenticated;
                        let in_stock = product.stock > 0;
                        view! {
                            <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                                <figure class="rounded-box overflow-hidden bg-base-200">
                                    <img
                                        src=product.image
                                        alt=product.title.clone()
                                        class="object-cover w-full h-full"
                                    />
                                </figure>

                                <div class="space-y-4">
                                    <div class="flex items-start justify-between gap-4">
                                        <div>
                                            <h1 class="text-3xl font-bold">{product.title}</h1>
                                            <p class="text-base-content/60">{product.category}</p>
                                        </div>
                                        <button
                                            class="btn btn-ghost btn-circle text-error"
                                            on:click=on_toggle_favorite
                                            disabled=move || busy.get()
                                            title=move || {
                                                if is_favorite.get() {
                                                    "Remove from favorites"
                                                } else {
                                                    "Add to favorites"
                                                }
                                            }
                                        >
                                            <Show
                                                when=move || is_favorite.get()
                                                fallback=|| {
                                                    view! { <Heart attr:class="h-8 w-8" /> }
                                                }
                                            >
                                                <HeartFilled attr:class="h-8 w-8" />
                                            </Show>
                                        </button>
                                    </div>

                                    <div class="flex items-center gap-2">
                                        <Star attr:class="h-5 w-5 text-warning" />
                                        <span>
                                            {format!("{:.1}", product.rating)} " ("
                                            {product.reviews} " reviews)"
                                        </span>
                                    </div>

                                    <div class="text-2xl font-bold">
                                        {format!("${:.2}", product.price)}
                                    </div>

                                    <div>
                                        <span class="font-medium">"Availability: "</span>
                                        {if in_stock {
                                            view! {
                                                <span class="text-success">
                                                    {format!("In Stock ({} available)", product.stock)}
                                                </span>
                                            }
                                                .into_any()
                                        } else {
                                            view! {
                                                <span class="text-error">"Out of Stock"</span>
                                            }
                                                .into_any()
                                        }}
                                    </div>

                                    <div>
                                        <h3 class="font-semibold mb-1">"Description"</h3>
                                        <p class="text-base-content/80">{product.description}</p>
                                    </div>

                                    {(!product.tags.is_empty())
                                        .then(|| {
                                            view! {
                                                <div>
                                                    <h3 class="font-semibold mb-1">"Tags"</h3>
                                                    <div class="flex flex-wrap gap-2">
                                                        {product
                                                            .tags
                                                            .iter()
                                                            .map(|tag| {
                                                                view! {
                                                                    <span class="badge badge-outline">
                                                                        {tag.clone()}
                                                                    </span>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </div>
                                                </div>
                                            }
                                        })}

                                    {product
                                        .seller
                                        .map(|seller| {
                                            view! {
                                                <div>
                                                    <h3 class="font-semibold mb-1">
                                                        "Seller Information"
                                                    </h3>
                                                    <p>{seller.name}</p>
                                                    <p class="text-sm text-base-content/60">
                                                        {seller.email}
                                                    </p>
                                                </div>
                                            }
                                        })}

                                    <div class="flex items-center gap-3 pt-2">
                                        <button class="btn btn-primary" disabled=!in_stock>
                                            {if in_stock { "Add to Cart" } else { "Out of Stock" }}
                                        </button>
                                        {(!is_authenticated)
                                            .then(|| {
                                                view! {
                                                    <button
                                                        class="btn btn-outline"
                                                        on:click=move |_| router.navigate("/login")
                                                    >
                                                        "Login to Save"
                                                    </button>
                                                }
                                            })}
                                    </div>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </Show>
        </div>
    }
}
