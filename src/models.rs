//! Wire models for the marketplace API.
//!
//! The server speaks MongoDB-style documents, so entity ids travel as `_id`
//! on the wire. The `alias` on each id keeps a plain `id` readable too.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Seller {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub stock: u32,
    pub rating: f32,
    pub reviews: u32,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub seller: Option<Seller>,
}

/// Body for product create/update calls.
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize)]
pub struct ProductPayload {
    pub title: String,
    pub category: String,
    pub price: f64,
    pub image: String,
    pub stock: u32,
    pub description: String,
    pub tags: Vec<String>,
}

/// `POST /auth/login` and `POST /auth/register` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// `GET /products` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub pages: u32,
}

/// `GET /products/:id` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductResponse {
    pub product: Product,
}

/// `GET /favorites/user/favorites` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<FavoriteEntry>,
}

/// One favorites entry.
///
/// The upstream contract is unstable: the endpoint has returned both bare
/// product ids and embedded product documents. Both shapes decode; pages
/// that only need membership use [`FavoriteEntry::product_id`], the
/// favorites grid keeps the embedded documents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FavoriteEntry {
    Id(String),
    Product(Product),
}

impl FavoriteEntry {
    pub fn product_id(&self) -> &str {
        match self {
            FavoriteEntry::Id(id) => id,
            FavoriteEntry::Product(product) => &product.id,
        }
    }

    /// The embedded product, if this entry carried one.
    pub fn into_product(self) -> Option<Product> {
        match self {
            FavoriteEntry::Id(_) => None,
            FavoriteEntry::Product(product) => Some(product),
        }
    }
}

/// Structured error body the server attaches to failed requests.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT_JSON: &str = r#"{
        "_id": "p1",
        "title": "USB-C Hub",
        "category": "Accessories",
        "price": 39.5,
        "image": "https://img.example/p1.jpg",
        "stock": 12,
        "rating": 4.5,
        "reviews": 87,
        "description": "Seven ports.",
        "tags": ["usb", "hub"],
        "seller": { "name": "Jane", "email": "jane@example.com" }
    }"#;

    #[test]
    fn product_decodes_mongo_id() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.tags, vec!["usb", "hub"]);
        assert_eq!(product.seller.unwrap().name, "Jane");
    }

    #[test]
    fn product_tolerates_missing_tags_and_seller() {
        let json = r#"{
            "id": "p2",
            "title": "Cable",
            "category": "Cables",
            "price": 5.0,
            "image": "",
            "stock": 0,
            "rating": 3.0,
            "reviews": 1,
            "description": ""
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "p2");
        assert!(product.tags.is_empty());
        assert!(product.seller.is_none());
    }

    #[test]
    fn favorites_decode_bare_ids() {
        let response: FavoritesResponse =
            serde_json::from_str(r#"{ "favorites": ["p1", "p2"] }"#).unwrap();
        let ids: Vec<&str> = response.favorites.iter().map(|f| f.product_id()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
        assert!(response.favorites[0].clone().into_product().is_none());
    }

    #[test]
    fn favorites_decode_embedded_products() {
        let json = format!(r#"{{ "favorites": [{PRODUCT_JSON}] }}"#);
        let response: FavoritesResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response.favorites[0].product_id(), "p1");
        let product = response.favorites[0].clone().into_product().unwrap();
        assert_eq!(product.title, "USB-C Hub");
    }

    #[test]
    fn user_round_trips_through_json() {
        let user = User {
            id: "u1".to_string(),
            name: "John".to_string(),
            email: "john@example.com".to_string(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"_id\":\"u1\""));
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn error_body_decodes_with_and_without_message() {
        let with: ApiMessage = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
        assert_eq!(with.message, "Invalid credentials");
        let without: ApiMessage = serde_json::from_str(r#"{}"#).unwrap();
        assert!(without.message.is_empty());
    }
}
