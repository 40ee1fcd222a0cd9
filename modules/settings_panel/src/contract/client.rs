//! Native client trait for in-process consumers
//!
//! This trait defines the API that other modules (and the REST layer's
//! in-process peers) use to interact with the settings panel.
//! NO HTTP - direct function calls.

use super::{
    error::PanelError,
    model::{DataCenter, Setting, SettingsDocument, SettingsGroup},
};
use async_trait::async_trait;

/// Settings panel API for in-process communication
#[async_trait]
pub trait PanelApi: Send + Sync {
    /// Full catalog snapshot: settings, available data centers, current tier
    async fn document(&self) -> Result<SettingsDocument, PanelError>;

    /// A single assembled setting
    async fn get_setting(&self, name: &str) -> Result<Setting, PanelError>;

    /// Settings matching a filter query (substring terms + `has:override`)
    async fn search(&self, filter: &str) -> Result<Vec<Setting>, PanelError>;

    /// Filtered settings grouped by dotted-name prefix
    async fn groups(&self, filter: &str) -> Result<Vec<SettingsGroup>, PanelError>;

    /// Create or replace an override at the viewer's tier
    async fn set_override(
        &self,
        name: &str,
        data_center: &DataCenter,
        value: &str,
    ) -> Result<Setting, PanelError>;

    /// Remove an override at the viewer's tier (idempotent)
    async fn clear_override(
        &self,
        name: &str,
        data_center: &DataCenter,
    ) -> Result<Setting, PanelError>;

    /// Bulk-copy overrides between the current store and a named store
    async fn copy_settings(
        &self,
        target: &str,
        copy_from: bool,
    ) -> Result<SettingsDocument, PanelError>;
}
