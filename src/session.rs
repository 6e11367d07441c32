//! Session store.
//!
//! Persists the auth token and the cached user profile under two fixed
//! LocalStorage keys. Token presence is what "authenticated" means for the
//! UI; no expiry or refresh logic exists client-side, the server rejects a
//! stale token and the calling page surfaces the error string.
//!
//! The store is an explicit handle (not ad hoc global lookups) so the API
//! client and the pages share one injected instance, and tests can swap in
//! an in-memory backend.

use std::sync::Arc;

use crate::models::User;
use crate::web::storage::{LocalStorage, StorageBackend};

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// Cloneable handle over the durable session slot.
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Store backed by the browser's `localStorage`.
    pub fn browser() -> Self {
        Self::new(Arc::new(LocalStorage))
    }

    /// Persist a session. The token is stored verbatim, the user profile as
    /// JSON. No validation of the token shape is performed.
    pub fn save(&self, token: &str, user: &User) {
        self.backend.set(TOKEN_KEY, token);
        if let Ok(json) = serde_json::to_string(user) {
            self.backend.set(USER_KEY, &json);
        }
    }

    /// Remove both keys. Idempotent.
    pub fn clear(&self) {
        self.backend.remove(TOKEN_KEY);
        self.backend.remove(USER_KEY);
    }

    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY)
    }

    /// The cached user profile. Malformed stored JSON reads as an absent
    /// profile rather than an error.
    pub fn current_user(&self) -> Option<User> {
        let raw = self.backend.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Strictly "token key present".
    pub fn is_authenticated(&self) -> bool {
        self.backend.get(TOKEN_KEY).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::storage::MemoryStorage;

    fn sample_user() -> User {
        User {
            id: "u1".to_string(),
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        }
    }

    #[test]
    fn save_then_read_round_trip() {
        let session = SessionStore::new(Arc::new(MemoryStorage::new()));
        assert!(!session.is_authenticated());
        assert_eq!(session.current_user(), None);

        session.save("jwt-abc", &sample_user());

        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("jwt-abc".to_string()));
        assert_eq!(session.current_user(), Some(sample_user()));
    }

    #[test]
    fn clear_is_idempotent() {
        let session = SessionStore::new(Arc::new(MemoryStorage::new()));
        session.save("jwt-abc", &sample_user());

        session.clear();
        assert!(!session.is_authenticated());
        assert_eq!(session.current_user(), None);

        // clearing an already-empty session changes nothing
        session.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn malformed_user_json_reads_as_absent() {
        let backend = Arc::new(MemoryStorage::new());
        backend.set("token", "jwt-abc");
        backend.set("user", "{not valid json");

        let session = SessionStore::new(backend);
        // token presence still counts as authenticated
        assert!(session.is_authenticated());
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn token_alone_is_authenticated() {
        let backend = Arc::new(MemoryStorage::new());
        backend.set("token", "jwt-abc");

        let session = SessionStore::new(backend);
        assert!(session.is_authenticated());
        assert_eq!(session.current_user(), None);
    }
}
