//! Portfolio positions and their owner-scoped persistence.

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::store::KeyValueCollection;

/// Which price category a held position belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Gold,
    Currency,
}

/// A held gold or currency position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub name: String,
    pub name_en: String,
    pub quantity: f64,
    pub buy_price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolioItem {
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub name: String,
    pub name_en: String,
    pub quantity: f64,
    pub buy_price: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItemUpdate {
    pub quantity: Option<f64>,
    pub buy_price: Option<f64>,
}

/// Owner-scoped CRUD over a key-value collection. Keys are
/// `"{owner}/{id}"`, values are the JSON-encoded item.
pub struct PortfolioService {
    collection: Arc<dyn KeyValueCollection>,
}

fn item_key(owner: &str, id: &str) -> Vec<u8> {
    format!("{owner}/{id}").into_bytes()
}

fn owner_prefix(owner: &str) -> Vec<u8> {
    format!("{owner}/").into_bytes()
}

impl PortfolioService {
    pub fn new(collection: Arc<dyn KeyValueCollection>) -> Self {
        PortfolioService { collection }
    }

    pub async fn create(&self, owner: &str, new_item: NewPortfolioItem) -> Result<PortfolioItem> {
        let now = Utc::now();
        let item = PortfolioItem {
            id: Uuid::new_v4().to_string(),
            user_id: owner.to_string(),
            kind: new_item.kind,
            name: new_item.name,
            name_en: new_item.name_en,
            quantity: new_item.quantity,
            buy_price: new_item.buy_price,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_vec(&item).context("Failed to encode portfolio item")?;
        self.collection
            .put(&item_key(owner, &item.id), &value)
            .await;
        Ok(item)
    }

    /// All items held by `owner`, oldest first.
    pub async fn list(&self, owner: &str) -> Result<Vec<PortfolioItem>> {
        let entries = self.collection.scan_prefix(&owner_prefix(owner)).await;

        let mut items = Vec::with_capacity(entries.len());
        for (_, value) in entries {
            let item: PortfolioItem =
                serde_json::from_slice(&value).context("Failed to decode portfolio item")?;
            items.push(item);
        }
        items.sort_by_key(|item| item.created_at);
        Ok(items)
    }

    pub async fn get(&self, owner: &str, id: &str) -> Result<Option<PortfolioItem>> {
        match self.collection.get(&item_key(owner, id)).await {
            Some(value) => Ok(Some(
                serde_json::from_slice(&value).context("Failed to decode portfolio item")?,
            )),
            None => Ok(None),
        }
    }

    /// Applies the non-`None` fields of `update` and bumps `updatedAt`.
    /// Returns `None` when the item does not exist for this owner.
    pub async fn update(
        &self,
        owner: &str,
        id: &str,
        update: PortfolioItemUpdate,
    ) -> Result<Option<PortfolioItem>> {
        let Some(mut item) = self.get(owner, id).await? else {
            return Ok(None);
        };

        if let Some(quantity) = update.quantity {
            item.quantity = quantity;
        }
        if let Some(buy_price) = update.buy_price {
            item.buy_price = buy_price;
        }
        item.updated_at = Utc::now();

        let value = serde_json::to_vec(&item).context("Failed to encode portfolio item")?;
        self.collection.put(&item_key(owner, id), &value).await;
        Ok(Some(item))
    }

    /// Removes the item; `false` when it does not exist for this owner.
    pub async fn delete(&self, owner: &str, id: &str) -> Result<bool> {
        Ok(self.collection.remove(&item_key(owner, id)).await)
    }
}
