//! File-backed token store for persisting login state across runs.

use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use gramlist_core::error::StorageError;
use gramlist_core::{AccessToken, RefreshToken, TokenStore};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored token pair.
#[derive(Debug, Serialize, Deserialize)]
struct StoredTokens {
    access_token: String,
    refresh_token: String,
}

/// Token store persisted as `session.json` in the platform data directory.
///
/// The file is read once at open; writes go through to disk and the cache
/// together. Clearing an already-empty store is a no-op.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    cached: RwLock<Option<StoredTokens>>,
}

impl FileTokenStore {
    /// Open the store at the default platform location.
    pub fn open_default() -> Result<Self> {
        let dirs =
            ProjectDirs::from("", "", "gramlist").context("Could not determine data directory")?;

        let data_dir = dirs.data_dir();
        fs::create_dir_all(data_dir).context("Failed to create data directory")?;

        Self::open(data_dir.join("session.json")).context("Failed to open session store")
    }

    /// Open a store at an explicit path. A missing file is an empty store.
    pub fn open(path: PathBuf) -> Result<Self, StorageError> {
        let cached = if path.exists() {
            let json = fs::read_to_string(&path).map_err(StorageError::Read)?;
            Some(serde_json::from_str(&json)?)
        } else {
            None
        };

        Ok(Self {
            path,
            cached: RwLock::new(cached),
        })
    }

    fn write_file(&self, tokens: &StoredTokens) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(tokens)?;
        fs::write(&self.path, &json).map_err(StorageError::Write)?;

        // Set restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            let mut perms = fs::metadata(&self.path)
                .map_err(StorageError::Read)?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.path, perms).map_err(StorageError::Write)?;
        }

        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn access_token(&self) -> Option<AccessToken> {
        let cached = self.cached.read().unwrap();
        cached
            .as_ref()
            .map(|tokens| AccessToken::new(tokens.access_token.clone()))
    }

    fn refresh_token(&self) -> Option<RefreshToken> {
        let cached = self.cached.read().unwrap();
        cached
            .as_ref()
            .map(|tokens| RefreshToken::new(tokens.refresh_token.clone()))
    }

    fn set_tokens(&self, access: &AccessToken, refresh: &RefreshToken) -> Result<(), StorageError> {
        let tokens = StoredTokens {
            access_token: access.as_str().to_string(),
            refresh_token: refresh.as_str().to_string(),
        };
        self.write_file(&tokens)?;
        *self.cached.write().unwrap() = Some(tokens);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(StorageError::Write)?;
        }
        *self.cached.write().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileTokenStore {
        FileTokenStore::open(dir.path().join("session.json")).unwrap()
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }

    #[test]
    fn tokens_survive_a_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileTokenStore::open(path.clone()).unwrap();
        store
            .set_tokens(&AccessToken::new("A"), &RefreshToken::new("R"))
            .unwrap();

        let reopened = FileTokenStore::open(path).unwrap();
        assert_eq!(reopened.access_token().unwrap().as_str(), "A");
        assert_eq!(reopened.refresh_token().unwrap().as_str(), "R");
    }

    #[test]
    fn reads_reflect_only_most_recent_write() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .set_tokens(&AccessToken::new("a1"), &RefreshToken::new("r1"))
            .unwrap();
        store
            .set_tokens(&AccessToken::new("a2"), &RefreshToken::new("r2"))
            .unwrap();
        assert_eq!(store.access_token().unwrap().as_str(), "a2");

        store.clear().unwrap();
        // Clearing twice is fine.
        store.clear().unwrap();
        assert!(store.access_token().is_none());
    }

    #[test]
    fn clear_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileTokenStore::open(path.clone()).unwrap();
        store
            .set_tokens(&AccessToken::new("A"), &RefreshToken::new("R"))
            .unwrap();
        assert!(path.exists());

        store.clear().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "not json").unwrap();

        assert!(FileTokenStore::open(path).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn session_file_is_user_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileTokenStore::open(path.clone()).unwrap();
        store
            .set_tokens(&AccessToken::new("A"), &RefreshToken::new("R"))
            .unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}

