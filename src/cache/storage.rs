//! SQLite-based query cache storage
//!
//! One row per cache key. Rows carry the resource they belong to so a
//! mutation can mark every entry of that resource stale in one statement,
//! whatever parameters the entries were fetched with.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::CacheError;

/// Schema version - increment to trigger nuke-and-rebuild
const SCHEMA_VERSION: i32 = 1;

type Result<T> = std::result::Result<T, CacheError>;

/// SQLite-backed cache storage
pub struct CacheStorage {
    conn: Connection,
}

impl CacheStorage {
    /// Open or create cache storage at the default XDG cache location
    pub fn open() -> Result<Self> {
        let cache_dir = Self::cache_dir()?;
        Self::open_at(&cache_dir)
    }

    /// Get the cache directory path (~/.cache/storeops on Linux/macOS)
    pub fn cache_dir() -> Result<PathBuf> {
        let cache_base = dirs::cache_dir().ok_or(CacheError::NoCacheDir)?;
        Ok(cache_base.join("storeops"))
    }

    /// Open cache storage at a specific directory (for testing)
    pub fn open_at(cache_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(cache_dir)
            .map_err(|e| CacheError::Io(format!("Failed to create cache dir: {}", e)))?;

        let db_path = cache_dir.join("cache.db");
        let conn = Connection::open(&db_path)?;

        // Check schema version - nuke if mismatched
        let version: i32 = conn
            .pragma_query_value(None, "user_version", |r| r.get(0))
            .unwrap_or(0);

        if version != 0 && version != SCHEMA_VERSION {
            log::info!(
                "Cache schema version mismatch ({} != {}), rebuilding",
                version,
                SCHEMA_VERSION
            );
            drop(conn);
            if db_path.exists() {
                std::fs::remove_file(&db_path)
                    .map_err(|e| CacheError::Io(format!("Failed to remove cache DB: {}", e)))?;
            }
            return Self::open_at(cache_dir);
        }

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS query_cache (
                cache_key TEXT PRIMARY KEY NOT NULL,
                resource TEXT NOT NULL,
                data TEXT NOT NULL,
                stale INTEGER NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL,
                expires_at INTEGER NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_resource ON query_cache(resource);
            CREATE INDEX IF NOT EXISTS idx_expires_at ON query_cache(expires_at);
            "#,
        )?;

        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

        Ok(Self { conn })
    }

    /// Get cached data if valid: present, unexpired, and not marked stale
    pub fn get_fresh(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let now = Utc::now().timestamp();

        let data: Option<String> = self
            .conn
            .query_row(
                "SELECT data FROM query_cache
                 WHERE cache_key = ?1 AND stale = 0 AND expires_at > ?2",
                params![key, now],
                |row| row.get(0),
            )
            .optional()?;

        Ok(data.map(String::into_bytes))
    }

    /// Store data under `key`, tagged with its resource, replacing any
    /// previous entry and clearing its stale flag
    pub fn put(&self, key: &str, resource: &str, data: &[u8], ttl: Duration) -> Result<()> {
        let now = Utc::now().timestamp();
        let expires = now + ttl.as_secs() as i64;

        self.conn.execute(
            "INSERT OR REPLACE INTO query_cache
             (cache_key, resource, data, stale, created_at, expires_at)
             VALUES (?1, ?2, ?3, 0, ?4, ?5)",
            params![
                key,
                resource,
                String::from_utf8_lossy(data).to_string(),
                now,
                expires
            ],
        )?;
        Ok(())
    }

    /// Mark every entry of a resource stale, whatever its parameters.
    ///
    /// Called after a successful mutation; the next read of any affected
    /// key refetches.
    pub fn mark_stale(&self, resource: &str) -> Result<usize> {
        let updated = self.conn.execute(
            "UPDATE query_cache SET stale = 1 WHERE resource = ?1",
            params![resource],
        )?;
        Ok(updated)
    }

    /// Clear all cache entries
    pub fn clear_all(&self) -> Result<ClearStats> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM query_cache", [], |r| r.get(0))?;

        self.conn.execute("DELETE FROM query_cache", [])?;

        Ok(ClearStats {
            entries_removed: count as usize,
        })
    }

    /// Get cache statistics
    pub fn stats(&self) -> Result<CacheStats> {
        let now = Utc::now().timestamp();

        let total_entries: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM query_cache", [], |r| r.get(0))?;

        let fresh_entries: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM query_cache WHERE stale = 0 AND expires_at > ?1",
            [now],
            |r| r.get(0),
        )?;

        let stale_entries: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM query_cache WHERE stale = 1",
            [],
            |r| r.get(0),
        )?;

        let total_size: i64 = self.conn.query_row(
            "SELECT COALESCE(SUM(LENGTH(data)), 0) FROM query_cache",
            [],
            |r| r.get(0),
        )?;

        Ok(CacheStats {
            total_entries: total_entries as usize,
            fresh_entries: fresh_entries as usize,
            stale_entries: stale_entries as usize,
            total_size_bytes: total_size as usize,
        })
    }
}

/// Statistics about cache clear operation
#[derive(Debug)]
pub struct ClearStats {
    pub entries_removed: usize,
}

/// Statistics about cache state
#[derive(Debug)]
pub struct CacheStats {
    pub total_entries: usize,
    pub fresh_entries: usize,
    pub stale_entries: usize,
    pub total_size_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_storage() -> (CacheStorage, TempDir) {
        let dir = TempDir::new().unwrap();
        let storage = CacheStorage::open_at(dir.path()).unwrap();
        (storage, dir)
    }

    #[test]
    fn test_put_get_fresh() {
        let (storage, _dir) = test_storage();
        let data = br#"{"data":[]}"#;

        storage
            .put("key1", "categories", data, Duration::from_secs(60))
            .unwrap();

        let result = storage.get_fresh("key1").unwrap();
        assert_eq!(result, Some(data.to_vec()));
    }

    #[test]
    fn test_expired_entry_is_not_fresh() {
        let (storage, _dir) = test_storage();

        storage
            .put("key2", "categories", b"data", Duration::from_secs(0))
            .unwrap();

        assert_eq!(storage.get_fresh("key2").unwrap(), None);
    }

    #[test]
    fn test_mark_stale_hides_all_entries_of_resource() {
        let (storage, _dir) = test_storage();

        storage
            .put("k-a", "product-items", b"a", Duration::from_secs(60))
            .unwrap();
        storage
            .put("k-b", "product-items", b"b", Duration::from_secs(60))
            .unwrap();
        storage
            .put("k-c", "categories", b"c", Duration::from_secs(60))
            .unwrap();

        let marked = storage.mark_stale("product-items").unwrap();
        assert_eq!(marked, 2);

        assert!(storage.get_fresh("k-a").unwrap().is_none());
        assert!(storage.get_fresh("k-b").unwrap().is_none());
        // Other resources are untouched
        assert!(storage.get_fresh("k-c").unwrap().is_some());
    }

    #[test]
    fn test_put_clears_stale_flag() {
        let (storage, _dir) = test_storage();

        storage
            .put("k", "categories", b"old", Duration::from_secs(60))
            .unwrap();
        storage.mark_stale("categories").unwrap();
        storage
            .put("k", "categories", b"new", Duration::from_secs(60))
            .unwrap();

        assert_eq!(storage.get_fresh("k").unwrap(), Some(b"new".to_vec()));
    }

    #[test]
    fn test_clear_all() {
        let (storage, _dir) = test_storage();

        storage
            .put("k1", "categories", b"d1", Duration::from_secs(60))
            .unwrap();
        storage
            .put("k2", "products", b"d2", Duration::from_secs(60))
            .unwrap();

        let stats = storage.clear_all().unwrap();
        assert_eq!(stats.entries_removed, 2);

        assert!(storage.get_fresh("k1").unwrap().is_none());
        assert!(storage.get_fresh("k2").unwrap().is_none());
    }

    #[test]
    fn test_stats() {
        let (storage, _dir) = test_storage();

        storage
            .put("k1", "categories", b"data1", Duration::from_secs(60))
            .unwrap();
        storage
            .put("k2", "products", b"data2", Duration::from_secs(60))
            .unwrap();
        storage.mark_stale("products").unwrap();

        let stats = storage.stats().unwrap();
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.fresh_entries, 1);
        assert_eq!(stats.stale_entries, 1);
        assert!(stats.total_size_bytes > 0);
    }
}
