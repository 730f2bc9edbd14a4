//! Persisted credential storage
//!
//! The platform hands out one credential bundle per login; this module owns
//! where it lives between invocations. The store is injected into the HTTP
//! client as a trait object so tests can script credential churn without
//! touching the filesystem.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::client::models::CredentialBundle;
use crate::error::{ConfigError, Result};

/// Storage key for the authentication bundle
pub const TOKEN_KEY: &str = "token";

/// Default credential lifetime, matching the platform's cookie expiry
pub const TOKEN_TTL_DAYS: i64 = 365;

/// Contract for credential persistence.
///
/// At most one valid bundle lives under a given key; `set` replaces it
/// wholesale. `get` must report expired entries as absent.
pub trait CredentialStore: Send + Sync {
    /// Read the bundle stored under `key`, if present and unexpired.
    fn get(&self, key: &str) -> Result<Option<CredentialBundle>>;

    /// Persist `bundle` under `key` for `ttl_days` days, replacing any
    /// previous value.
    fn set(&self, key: &str, bundle: &CredentialBundle, ttl_days: i64) -> Result<()>;

    /// Delete the bundle stored under `key`. Removing an absent key is not
    /// an error.
    fn remove(&self, key: &str) -> Result<()>;
}

/// One persisted entry with its absolute expiry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredEntry {
    bundle: CredentialBundle,
    expires_at: DateTime<Utc>,
}

/// File-backed credential store.
///
/// Entries live in a YAML map at `~/.storeops/credentials.yaml`, the CLI
/// equivalent of the browser cookie jar. The file is chmod 600 on Unix.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Store at the default location under the home directory.
    pub fn open_default() -> Result<Self> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;
        Ok(Self::open_at(home.join(".storeops").join("credentials.yaml")))
    }

    /// Store at a specific path (for testing).
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<BTreeMap<String, StoredEntry>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let entries = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(entries)
    }

    fn save(&self, entries: &BTreeMap<String, StoredEntry>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_yaml::to_string(entries)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;
        std::fs::write(&self.path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&self.path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&self.path, perms)?;
        }

        Ok(())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self, key: &str) -> Result<Option<CredentialBundle>> {
        let entries = self.load()?;
        Ok(entries
            .get(key)
            .filter(|entry| entry.expires_at > Utc::now())
            .map(|entry| entry.bundle.clone()))
    }

    fn set(&self, key: &str, bundle: &CredentialBundle, ttl_days: i64) -> Result<()> {
        let mut entries = self.load().unwrap_or_default();
        entries.insert(
            key.to_string(),
            StoredEntry {
                bundle: bundle.clone(),
                expires_at: Utc::now() + Duration::days(ttl_days),
            },
        );
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        // An unreadable file is replaced rather than left in place
        let mut entries = self.load().unwrap_or_default();
        entries.remove(key);
        self.save(&entries)
    }
}

/// In-memory credential store for tests and embedded callers.
#[derive(Default)]
pub struct MemoryCredentialStore {
    entries: Mutex<BTreeMap<String, StoredEntry>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self, key: &str) -> Result<Option<CredentialBundle>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| crate::error::Error::Other("credential store poisoned".to_string()))?;
        Ok(entries
            .get(key)
            .filter(|entry| entry.expires_at > Utc::now())
            .map(|entry| entry.bundle.clone()))
    }

    fn set(&self, key: &str, bundle: &CredentialBundle, ttl_days: i64) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| crate::error::Error::Other("credential store poisoned".to_string()))?;
        entries.insert(
            key.to_string(),
            StoredEntry {
                bundle: bundle.clone(),
                expires_at: Utc::now() + Duration::days(ttl_days),
            },
        );
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| crate::error::Error::Other("credential store poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}
