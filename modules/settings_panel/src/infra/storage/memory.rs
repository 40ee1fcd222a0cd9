//! In-memory override store and provider
//!
//! The production backing store is an external key-value host addressed by
//! a connection string; this in-process implementation backs tests and
//! single-node deployments behind the same trait.

use crate::contract::{DataCenter, SettingOverride, Tier};
use crate::domain::repository::{OverrideStore, StoreProvider};
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

type OverrideKey = (String, Tier, DataCenter);

/// Override store backed by a process-local map
#[derive(Default)]
pub struct MemoryOverrideStore {
    data: RwLock<HashMap<OverrideKey, SettingOverride>>,
}

impl MemoryOverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(record: &SettingOverride) -> OverrideKey {
        (
            record.setting_name.clone(),
            record.tier.clone(),
            record.data_center.clone(),
        )
    }

    /// Number of stored overrides
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

#[async_trait]
impl OverrideStore for MemoryOverrideStore {
    async fn list(&self) -> Result<Vec<SettingOverride>> {
        Ok(self.data.read().values().cloned().collect())
    }

    async fn list_for_setting(&self, setting_name: &str) -> Result<Vec<SettingOverride>> {
        Ok(self
            .data
            .read()
            .values()
            .filter(|record| record.setting_name == setting_name)
            .cloned()
            .collect())
    }

    async fn get(
        &self,
        setting_name: &str,
        tier: &Tier,
        data_center: &DataCenter,
    ) -> Result<Option<SettingOverride>> {
        let key = (setting_name.to_string(), tier.clone(), data_center.clone());
        Ok(self.data.read().get(&key).cloned())
    }

    async fn set(&self, record: &SettingOverride) -> Result<SettingOverride> {
        self.data.write().insert(Self::key(record), record.clone());
        Ok(record.clone())
    }

    async fn clear(
        &self,
        setting_name: &str,
        tier: &Tier,
        data_center: &DataCenter,
    ) -> Result<bool> {
        let key = (setting_name.to_string(), tier.clone(), data_center.clone());
        Ok(self.data.write().remove(&key).is_some())
    }

    async fn replace_all(&self, records: Vec<SettingOverride>) -> Result<()> {
        let mut data = self.data.write();
        data.clear();
        for record in records {
            data.insert(Self::key(&record), record);
        }
        Ok(())
    }
}

/// Registry of in-memory stores keyed by connection string
///
/// Opening an unknown connection string creates an empty store, which is
/// what a fresh backing host looks like.
#[derive(Default)]
pub struct MemoryStoreProvider {
    stores: RwLock<HashMap<String, Arc<MemoryOverrideStore>>>,
}

impl MemoryStoreProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-register a store under a connection string
    pub fn insert(&self, connection: &str, store: Arc<MemoryOverrideStore>) {
        self.stores.write().insert(connection.to_string(), store);
    }
}

#[async_trait]
impl StoreProvider for MemoryStoreProvider {
    async fn open(&self, connection: &str) -> Result<Arc<dyn OverrideStore>> {
        let store = self
            .stores
            .write()
            .entry(connection.to_string())
            .or_insert_with(|| Arc::new(MemoryOverrideStore::new()))
            .clone();
        Ok(store)
    }
}
