//! Two-tier caching for downloaded tables
//!
//! - Disk: raw CSV bytes under the cache directory, reused while younger
//!   than a TTL.
//! - Memory: a small LRU of parsed values (one `Arc` snapshot per season), so
//!   repeated queries in one process share the same loaded tables.

use lru::LruCache;
use std::{
    fs,
    hash::Hash,
    io::Write,
    num::NonZeroUsize,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
    time::{Duration, SystemTime},
};

/// Read a cached file if it exists and was written less than `ttl` ago.
pub fn try_read_fresh(path: &Path, ttl: Duration) -> Option<Vec<u8>> {
    let modified = fs::metadata(path).ok()?.modified().ok()?;
    let age = SystemTime::now().duration_since(modified).unwrap_or_default();
    if age >= ttl {
        return None;
    }
    fs::read(path).ok()
}

/// Write bytes to file, creating parent directories as needed
pub fn write_bytes(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents)
}

/// In-memory LRU keyed cache of shared values.
pub struct MemoryCache<K: Hash + Eq, V> {
    entries: Mutex<LruCache<K, Arc<V>>>,
    capacity: usize,
}

impl<K: Hash + Eq, V> MemoryCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let size = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::new(size)),
            capacity,
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruCache<K, Arc<V>>> {
        // Every LRU operation is a single call, so a poisoned lock still
        // guards a consistent cache.
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.lock().get(key).cloned()
    }

    pub fn put(&self, key: K, value: Arc<V>) {
        self.lock().put(key, value);
    }

    pub fn invalidate(&self, key: &K) {
        self.lock().pop(key);
    }

    /// (entries, capacity)
    pub fn stats(&self) -> (usize, usize) {
        (self.lock().len(), self.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_bytes_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("stats.csv");

        write_bytes(&path, b"season,week\n").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"season,week\n");
    }

    #[test]
    fn test_try_read_fresh_within_ttl() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snaps.csv");
        write_bytes(&path, b"cached").unwrap();

        let content = try_read_fresh(&path, Duration::from_secs(3600));
        assert_eq!(content.as_deref(), Some(&b"cached"[..]));
    }

    #[test]
    fn test_try_read_fresh_expired() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snaps.csv");
        write_bytes(&path, b"cached").unwrap();

        assert!(try_read_fresh(&path, Duration::ZERO).is_none());
    }

    #[test]
    fn test_try_read_fresh_missing_file() {
        let dir = tempdir().unwrap();
        assert!(try_read_fresh(&dir.path().join("nope.csv"), Duration::from_secs(60)).is_none());
    }

    #[test]
    fn test_memory_cache_evicts_least_recent() {
        let cache: MemoryCache<u16, String> = MemoryCache::new(2);

        cache.put(2023, Arc::new("a".to_string()));
        cache.put(2024, Arc::new("b".to_string()));
        // Touch 2023 so 2024 becomes least recently used
        assert!(cache.get(&2023).is_some());
        cache.put(2025, Arc::new("c".to_string()));

        assert!(cache.get(&2024).is_none());
        assert_eq!(cache.get(&2023).as_deref(), Some(&"a".to_string()));
        assert_eq!(cache.stats(), (2, 2));

        cache.invalidate(&2023);
        assert!(cache.get(&2023).is_none());
    }

    #[test]
    fn test_memory_cache_shares_value() {
        let cache: MemoryCache<u16, Vec<u8>> = MemoryCache::new(4);
        let value = Arc::new(vec![1, 2, 3]);
        cache.put(1, Arc::clone(&value));

        let fetched = cache.get(&1).unwrap();
        assert!(Arc::ptr_eq(&fetched, &value));
    }
}
