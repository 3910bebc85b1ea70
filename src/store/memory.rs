use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::store::KeyValueCollection;

/// In-memory collection over a BTreeMap; the ordered map gives the same
/// key-ordered prefix scans as the disk backend.
pub struct MemoryCollection {
    inner: Arc<Mutex<BTreeMap<Vec<u8>, Vec<u8>>>>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(BTreeMap::new())),
        }
    }
}

impl Default for MemoryCollection {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueCollection for MemoryCollection {
    async fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        let store = self.inner.lock().await;
        let value = store.get(key).cloned();
        if value.is_some() {
            debug!("Store HIT");
        } else {
            debug!("Store MISS");
        }
        value
    }

    async fn put(&self, key: &[u8], value: &[u8]) {
        let mut store = self.inner.lock().await;
        debug!("Store PUT");
        store.insert(key.to_vec(), value.to_vec());
    }

    async fn remove(&self, key: &[u8]) -> bool {
        let mut store = self.inner.lock().await;
        store.remove(key).is_some()
    }

    async fn scan_prefix(&self, prefix: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
        let store = self.inner.lock().await;
        store
            .range(prefix.to_vec()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_put_remove() {
        let store = MemoryCollection::new();

        assert!(store.get(b"key1").await.is_none());

        store.put(b"key1", b"value1").await;
        assert_eq!(store.get(b"key1").await, Some(b"value1".to_vec()));

        assert!(store.remove(b"key1").await);
        assert!(!store.remove(b"key1").await);
        assert!(store.get(b"key1").await.is_none());
    }

    #[tokio::test]
    async fn test_scan_prefix_is_scoped_and_ordered() {
        let store = MemoryCollection::new();
        store.put(b"alice/2", b"a2").await;
        store.put(b"alice/1", b"a1").await;
        store.put(b"bob/1", b"b1").await;

        let entries = store.scan_prefix(b"alice/").await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, b"alice/1".to_vec());
        assert_eq!(entries[1].0, b"alice/2".to_vec());
    }

    #[tokio::test]
    async fn test_scan_prefix_empty_store() {
        let store = MemoryCollection::new();
        assert!(store.scan_prefix(b"alice/").await.is_empty());
    }
}
