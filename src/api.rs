//! Typed client for the marketplace API.
//!
//! One client, one base address. Every request re-reads the token from the
//! injected session store at send time and attaches it as a bearer
//! credential; an absent token sends the request unauthenticated. Failures
//! collapse to a display `String` at this boundary: the server-provided
//! message when the body carries one, a fixed per-operation default
//! otherwise. No retry, no timeout, no caching.

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::models::{
    ApiMessage, AuthResponse, FavoriteEntry, FavoritesResponse, Product, ProductListResponse,
    ProductPayload, ProductResponse,
};
use crate::session::SessionStore;

/// Default base address; the server mounts every route under one prefix.
pub const API_BASE_URL: &str = "/api";

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Clone)]
pub struct MarketApi {
    base_url: String,
    pub session: SessionStore,
}

/// Grab the shared client from Context.
pub fn use_api() -> MarketApi {
    use_context::<MarketApi>().expect("MarketApi should be provided")
}

impl MarketApi {
    pub fn new(base_url: impl Into<String>, session: SessionStore) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, session }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Attach the stored token, if any, as a bearer credential.
    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.with_auth(Request::get(&self.url(path)))
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.with_auth(Request::post(&self.url(path)))
    }

    fn put(&self, path: &str) -> RequestBuilder {
        self.with_auth(Request::put(&self.url(path)))
    }

    fn delete(&self, path: &str) -> RequestBuilder {
        self.with_auth(Request::delete(&self.url(path)))
    }

    /// Send a built request and decode the success payload.
    async fn run<T: DeserializeOwned>(&self, request: Request, default: &str) -> Result<T, String> {
        let response = request.send().await.map_err(|_| default.to_string())?;
        if !response.ok() {
            return Err(Self::failure_message(response, default).await);
        }
        response.json::<T>().await.map_err(|_| default.to_string())
    }

    /// Send a built request, success payload ignored.
    async fn run_unit(&self, request: Request, default: &str) -> Result<(), String> {
        let response = request.send().await.map_err(|_| default.to_string())?;
        if !response.ok() {
            return Err(Self::failure_message(response, default).await);
        }
        Ok(())
    }

    async fn failure_message(response: Response, default: &str) -> String {
        match response.json::<ApiMessage>().await {
            Ok(body) if !body.message.is_empty() => body.message,
            _ => default.to_string(),
        }
    }

    // ---- auth ----

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, String> {
        const DEFAULT: &str = "Registration failed";
        let request = self
            .post("/auth/register")
            .json(&RegisterRequest {
                name,
                email,
                password,
            })
            .map_err(|_| DEFAULT.to_string())?;
        self.run(request, DEFAULT).await
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, String> {
        const DEFAULT: &str = "Login failed";
        let request = self
            .post("/auth/login")
            .json(&LoginRequest { email, password })
            .map_err(|_| DEFAULT.to_string())?;
        self.run(request, DEFAULT).await
    }

    // ---- products ----

    pub async fn list_products(
        &self,
        search: &str,
        category: &str,
        page: u32,
        limit: u32,
    ) -> Result<ProductListResponse, String> {
        const DEFAULT: &str = "Failed to fetch products";
        let page = page.to_string();
        let limit = limit.to_string();
        let request = self
            .get("/products")
            .query([
                ("search", search),
                ("category", category),
                ("page", page.as_str()),
                ("limit", limit.as_str()),
            ])
            .build()
            .map_err(|_| DEFAULT.to_string())?;
        self.run(request, DEFAULT).await
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, String> {
        const DEFAULT: &str = "Failed to fetch product";
        let request = self
            .get(&format!("/products/{id}"))
            .build()
            .map_err(|_| DEFAULT.to_string())?;
        let response: ProductResponse = self.run(request, DEFAULT).await?;
        Ok(response.product)
    }

    // Seller-side contract; no shipped view submits these yet.
    #[allow(dead_code)]
    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Product, String> {
        const DEFAULT: &str = "Failed to create product";
        let request = self
            .post("/products")
            .json(payload)
            .map_err(|_| DEFAULT.to_string())?;
        let response: ProductResponse = self.run(request, DEFAULT).await?;
        Ok(response.product)
    }

    #[allow(dead_code)]
    pub async fn update_product(
        &self,
        id: &str,
        payload: &ProductPayload,
    ) -> Result<Product, String> {
        const DEFAULT: &str = "Failed to update product";
        let request = self
            .put(&format!("/products/{id}"))
            .json(payload)
            .map_err(|_| DEFAULT.to_string())?;
        let response: ProductResponse = self.run(request, DEFAULT).await?;
        Ok(response.product)
    }

    #[allow(dead_code)]
    pub async fn delete_product(&self, id: &str) -> Result<(), String> {
        const DEFAULT: &str = "Failed to delete product";
        let request = self
            .delete(&format!("/products/{id}"))
            .build()
            .map_err(|_| DEFAULT.to_string())?;
        self.run_unit(request, DEFAULT).await
    }

    // ---- favorites ----

    pub async fn add_favorite(&self, product_id: &str) -> Result<(), String> {
        const DEFAULT: &str = "Failed to add to favorites";
        let request = self
            .post(&format!("/favorites/{product_id}/favorite"))
            .build()
            .map_err(|_| DEFAULT.to_string())?;
        self.run_unit(request, DEFAULT).await
    }

    pub async fn remove_favorite(&self, product_id: &str) -> Result<(), String> {
        const DEFAULT: &str = "Failed to remove from favorites";
        let request = self
            .delete(&format!("/favorites/{product_id}/favorite"))
            .build()
            .map_err(|_| DEFAULT.to_string())?;
        self.run_unit(request, DEFAULT).await
    }

    pub async fn get_favorites(&self) -> Result<Vec<FavoriteEntry>, String> {
        const DEFAULT: &str = "Failed to fetch favorites";
        let request = self
            .get("/favorites/user/favorites")
            .build()
            .map_err(|_| DEFAULT.to_string())?;
        let response: FavoritesResponse = self.run(request, DEFAULT).await?;
        Ok(response.favorites)
    }
}
