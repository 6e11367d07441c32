use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{Lock, Mail};
use crate::api::use_api;
use crate::auth::{login, use_auth};
use crate::web::router::Link;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = StoredValue::new(use_api());
    let auth = use_auth();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || password.get().is_empty() {
            set_error.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_submitting.set(true);
        set_error.set(None);

        let api = api.get_value();
        spawn_local(async move {
            // on success the router sees the auth flip and leaves this page
            if let Err(err) =
                login(auth, api, email.get_untracked(), password.get_untracked()).await
            {
                set_error.set(Some(err));
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-[80vh] bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-2">
                    <h1 class="text-3xl font-bold">"Welcome Back"</h1>
                    <p class="text-base-content/70">"Login to your MicroMarketplace account"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email Address"</span>
                            </label>
                            <label class="input input-bordered flex items-center gap-2">
                                <Mail attr:class="h-4 w-4 opacity-50" />
                                <input
                                    id="email"
                                    type="email"
                                    class="grow"
                                    placeholder="john@example.com"
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    prop:value=email
                                    required
                                />
                            </label>
                        </div>

                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <label class="input input-bordered flex items-center gap-2">
                                <Lock attr:class="h-4 w-4 opacity-50" />
                                <input
                                    id="password"
                                    type="password"
                                    class="grow"
                                    placeholder="••••••••"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    required
                                />
                            </label>
                        </div>

                        <div class="form-control mt-4">
                            <button class="btn btn-primary" disabled=move || submitting.get()>
                                {move || {
                                    if submitting.get() {
                                        view! {
                                            <span class="loading loading-spinner"></span>
                                            "Logging in..."
                                        }
                                            .into_any()
                                    } else {
                                        "Login".into_any()
                                    }
                                }}
                            </button>
                        </div>

                        <p class="text-center text-sm mt-2">
                            "Don't have an account? "
                            <Link to="/register" class="link link-primary">
                                "Register here"
                            </Link>
                        </p>

                        <div class="bg-base-200 rounded-box p-3 text-center text-sm mt-2">
                            <p class="font-medium">"Demo Credentials:"</p>
                            <p class="text-base-content/60">"Email: john@example.com"</p>
                            <p class="text-base-content/60">"Password: password123"</p>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
