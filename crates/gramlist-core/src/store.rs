//! Token store contract.
//!
//! Exactly two slots: access token and refresh token. No expiry tracking,
//! no shape validation, no network access. Stores are constructed and
//! injected rather than reached as ambient singletons, so each test case can
//! hold its own isolated instance.

use std::sync::RwLock;

use crate::error::StorageError;
use crate::tokens::{AccessToken, RefreshToken};

/// Persistence boundary for the session token pair.
pub trait TokenStore: Send + Sync {
    /// Returns the most recently stored access token, if any.
    fn access_token(&self) -> Option<AccessToken>;

    /// Returns the most recently stored refresh token, if any.
    fn refresh_token(&self) -> Option<RefreshToken>;

    /// Persist both tokens, overwriting any prior pair.
    fn set_tokens(&self, access: &AccessToken, refresh: &RefreshToken) -> Result<(), StorageError>;

    /// Remove both tokens. Idempotent when the store is already empty.
    fn clear(&self) -> Result<(), StorageError>;
}

#[derive(Debug, Clone)]
struct TokenPair {
    access: AccessToken,
    refresh: RefreshToken,
}

/// In-memory token store.
///
/// The default store for tests and short-lived processes that never persist
/// a session across runs.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: RwLock<Option<TokenPair>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<AccessToken> {
        let tokens = self.tokens.read().unwrap();
        tokens.as_ref().map(|pair| pair.access.clone())
    }

    fn refresh_token(&self) -> Option<RefreshToken> {
        let tokens = self.tokens.read().unwrap();
        tokens.as_ref().map(|pair| pair.refresh.clone())
    }

    fn set_tokens(&self, access: &AccessToken, refresh: &RefreshToken) -> Result<(), StorageError> {
        let mut tokens = self.tokens.write().unwrap();
        *tokens = Some(TokenPair {
            access: access.clone(),
            refresh: refresh.clone(),
        });
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut tokens = self.tokens.write().unwrap();
        *tokens = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_has_no_tokens() {
        let store = MemoryTokenStore::new();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn reads_reflect_most_recent_write() {
        let store = MemoryTokenStore::new();

        store
            .set_tokens(&AccessToken::new("a1"), &RefreshToken::new("r1"))
            .unwrap();
        assert_eq!(store.access_token().unwrap().as_str(), "a1");

        store
            .set_tokens(&AccessToken::new("a2"), &RefreshToken::new("r2"))
            .unwrap();
        assert_eq!(store.access_token().unwrap().as_str(), "a2");
        assert_eq!(store.refresh_token().unwrap().as_str(), "r2");

        store.clear().unwrap();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let store = MemoryTokenStore::new();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.access_token().is_none());
    }

    #[test]
    fn set_overwrites_after_clear() {
        let store = MemoryTokenStore::new();
        store
            .set_tokens(&AccessToken::new("a1"), &RefreshToken::new("r1"))
            .unwrap();
        store.clear().unwrap();
        store
            .set_tokens(&AccessToken::new("a2"), &RefreshToken::new("r2"))
            .unwrap();
        assert_eq!(store.access_token().unwrap().as_str(), "a2");
    }
}
