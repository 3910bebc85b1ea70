pub mod disk;
pub mod memory;

use async_trait::async_trait;

/// A byte-level key-value collection supporting prefix scans.
///
/// Storage failures degrade to "not found" / no-op inside implementations;
/// the collection API itself never errors.
#[async_trait]
pub trait KeyValueCollection: Send + Sync {
    async fn get(&self, key: &[u8]) -> Option<Vec<u8>>;
    async fn put(&self, key: &[u8], value: &[u8]);
    async fn remove(&self, key: &[u8]) -> bool;
    /// Key-ordered entries whose keys start with `prefix`.
    async fn scan_prefix(&self, prefix: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)>;
}
