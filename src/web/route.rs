//! Route definitions - the domain model.
//!
//! Pure business logic, no DOM or `web_sys` dependency: every route the
//! application knows, how paths map onto them, and which of them are gated
//! behind authentication.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Product listing (default route).
    #[default]
    Products,
    /// Single product detail, carries the product id.
    Product(String),
    /// Favorites grid (requires authentication).
    Favorites,
    Login,
    Register,
    /// Unmatched path; the router redirects this to the listing.
    NotFound,
}

impl AppRoute {
    /// Parse a URL path into a route.
    pub fn from_path(path: &str) -> Self {
        match path {
            "" | "/" => Self::Products,
            "/favorites" => Self::Favorites,
            "/login" => Self::Login,
            "/register" => Self::Register,
            other => {
                if let Some(id) = other.strip_prefix("/product/") {
                    if !id.is_empty() && !id.contains('/') {
                        return Self::Product(id.to_string());
                    }
                }
                Self::NotFound
            }
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Products => "/".to_string(),
            Self::Product(id) => format!("/product/{id}"),
            Self::Favorites => "/favorites".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// Guard: does this route require an authenticated session?
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Favorites)
    }

    /// Should an already-authenticated user be moved off this route?
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// Where a failed auth guard sends the user.
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// Where a fresh login sends the user (away from the auth forms).
    pub fn auth_success_redirect() -> Self {
        Self::Products
    }

    /// Where unmatched paths are sent.
    pub fn fallback_redirect() -> Self {
        Self::Products
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_parse_to_routes() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Products);
        assert_eq!(AppRoute::from_path(""), AppRoute::Products);
        assert_eq!(AppRoute::from_path("/favorites"), AppRoute::Favorites);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
        assert_eq!(
            AppRoute::from_path("/product/p1"),
            AppRoute::Product("p1".to_string())
        );
    }

    #[test]
    fn unmatched_paths_fall_through() {
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/product/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/product/a/b"), AppRoute::NotFound);
        assert_eq!(AppRoute::fallback_redirect(), AppRoute::Products);
    }

    #[test]
    fn route_paths_round_trip() {
        for route in [
            AppRoute::Products,
            AppRoute::Product("p1".to_string()),
            AppRoute::Favorites,
            AppRoute::Login,
            AppRoute::Register,
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn only_favorites_is_guarded() {
        assert!(AppRoute::Favorites.requires_auth());
        assert!(!AppRoute::Products.requires_auth());
        assert!(!AppRoute::Product("p1".to_string()).requires_auth());
        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::Register.requires_auth());
    }

    #[test]
    fn auth_forms_redirect_when_authenticated() {
        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(AppRoute::Register.should_redirect_when_authenticated());
        assert!(!AppRoute::Favorites.should_redirect_when_authenticated());
        assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::Login);
        assert_eq!(AppRoute::auth_success_redirect(), AppRoute::Products);
    }
}
