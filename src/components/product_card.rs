use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{Heart, HeartFilled, Star};
use crate::api::use_api;
use crate::models::Product;
use crate::web::router::Link;

/// Product tile for the listing and favorites grids.
///
/// The heart toggle issues the add/remove call itself and reports the new
/// membership through `on_change` only after the call succeeded; a failed
/// call leaves the owning page's favorite set untouched.
#[component]
pub fn ProductCard(
    product: Product,
    #[prop(into)] is_favorite: Signal<bool>,
    #[prop(into)] on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let api = use_api();
    let (busy, set_busy) = signal(false);

    let product_id = product.id.clone();
    let detail_path = format!("/product/{}", product.id);
    let title = product.title.clone();
    let alt_text = product.title.clone();

    let on_favorite = move |_| {
        if busy.get_untracked() {
            return;
        }
        let api = api.clone();
        let id = product_id.clone();
        let currently = is_favorite.get_untracked();
        set_busy.set(true);
        spawn_local(async move {
            let result = if currently {
                api.remove_favorite(&id).await
            } else {
                api.add_favorite(&id).await
            };
            match result {
                Ok(()) => on_change.run((id, !currently)),
                Err(err) => web_sys::console::error_1(&err.into()),
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="card bg-base-100 shadow-md hover:shadow-xl transition-shadow">
            <Link to=detail_path>
                <figure class="aspect-square overflow-hidden bg-base-200">
                    <img src=product.image alt=alt_text class="object-cover w-full h-full" />
                </figure>
            </Link>
            <div class="card-body p-4 gap-1">
                <h3 class="card-title text-base">{title}</h3>
                <p class="text-sm text-base-content/60">{product.category}</p>

                <div class="flex items-center gap-1 text-sm">
                    <Star attr:class="h-4 w-4 text-warning" />
                    <span>{format!("{:.1}", product.rating)}</span>
                    <span class="text-base-content/50">"(" {product.reviews} ")"</span>
                </div>

                <div class="flex items-center justify-between mt-1">
                    <span class="text-lg font-bold">{format!("${:.2}", product.price)}</span>
                    <button
                        class="btn btn-ghost btn-circle btn-sm text-error"
                        on:click=on_favorite
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
                            fallback=|| view! { <Heart attr:class="h-5 w-5" /> }
                        >
                            <HeartFilled attr:class="h-5 w-5" />
                        </Show>
                    </button>
                </div>

                {if product.stock > 0 {
                    view! { <div class="badge badge-success badge-outline">"In Stock"</div> }
                        .into_any()
                } else {
                    view! { <div class="badge badge-error badge-outline">"Out of Stock"</div> }
                        .into_any()
                }}
            </div>
        </div>
    }
}
