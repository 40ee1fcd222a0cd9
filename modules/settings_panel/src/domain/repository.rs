//! Repository traits for override storage
//!
//! These traits define the interface to the backing override store.
//! Implementations are in infra/storage.

use crate::contract::{DataCenter, SettingOverride, Tier};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Store of overrides, keyed by (setting name, tier, data center).
///
/// Record ordering of list operations is unspecified; callers sort where
/// order matters.
#[async_trait]
pub trait OverrideStore: Send + Sync {
    /// All stored overrides
    async fn list(&self) -> Result<Vec<SettingOverride>>;

    /// All overrides for one setting
    async fn list_for_setting(&self, setting_name: &str) -> Result<Vec<SettingOverride>>;

    /// Find an override by its full key
    async fn get(
        &self,
        setting_name: &str,
        tier: &Tier,
        data_center: &DataCenter,
    ) -> Result<Option<SettingOverride>>;

    /// Create or replace an override
    async fn set(&self, record: &SettingOverride) -> Result<SettingOverride>;

    /// Remove an override; returns whether a record existed
    async fn clear(
        &self,
        setting_name: &str,
        tier: &Tier,
        data_center: &DataCenter,
    ) -> Result<bool>;

    /// Replace the entire contents of the store
    async fn replace_all(&self, records: Vec<SettingOverride>) -> Result<()>;
}

/// Resolves a connection string to an override store.
///
/// Copy-settings uses this to reach the named backing store of the
/// source/destination side.
#[async_trait]
pub trait StoreProvider: Send + Sync {
    async fn open(&self, connection: &str) -> Result<Arc<dyn OverrideStore>>;
}
