use anyhow::Result;
use async_trait::async_trait;
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle};
use std::path::Path;
use tracing::debug;

use crate::store::KeyValueCollection;

/// Durable collection backed by a fjall partition.
pub struct FjallCollection {
    _keyspace: Keyspace,
    partition: PartitionHandle,
}

impl FjallCollection {
    pub fn open(path: &Path, name: &str) -> Result<Self> {
        std::fs::create_dir_all(path)?;

        let keyspace = fjall::Config::new(path).open()?;
        let partition = keyspace.open_partition(name, PartitionCreateOptions::default())?;
        Ok(Self {
            _keyspace: keyspace,
            partition,
        })
    }
}

#[async_trait]
impl KeyValueCollection for FjallCollection {
    async fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        match self.partition.get(key) {
            Ok(Some(value)) => {
                debug!("Store HIT");
                Some(value.to_vec())
            }
            Ok(None) => {
                debug!("Store MISS");
                None
            }
            Err(e) => {
                debug!("FjallCollection get error: {}", e);
                None
            }
        }
    }

    async fn put(&self, key: &[u8], value: &[u8]) {
        if let Err(e) = self.partition.insert(key, value) {
            debug!("FjallCollection put error: {}", e);
        } else {
            debug!("Store PUT");
        }
    }

    async fn remove(&self, key: &[u8]) -> bool {
        let existed = matches!(self.partition.get(key), Ok(Some(_)));
        if let Err(e) = self.partition.remove(key) {
            debug!("FjallCollection remove error: {}", e);
            return false;
        }
        existed
    }

    async fn scan_prefix(&self, prefix: &[u8]) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.partition
            .prefix(prefix)
            .filter_map(|entry| match entry {
                Ok((key, value)) => Some((key.to_vec(), value.to_vec())),
                Err(e) => {
                    debug!("FjallCollection scan error: {}", e);
                    None
                }
            })
            .collect()
    }
}
