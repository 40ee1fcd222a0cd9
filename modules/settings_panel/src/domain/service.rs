//! Domain service - business logic orchestration

use super::catalog::SettingsCatalog;
use super::events::{EventPublisher, PanelEvent};
use super::repository::{OverrideStore, StoreProvider};
use super::search::FilterQuery;
use super::{resolve, search, validation};
use crate::config::PanelConfig;
use crate::contract::{
    DataCenter, PanelError, Setting, SettingOverride, SettingsDocument, SettingsGroup, Tier,
    ViewContext,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Domain service for the settings panel
pub struct Service {
    catalog: Arc<SettingsCatalog>,
    store: Arc<dyn OverrideStore>,
    stores: Arc<dyn StoreProvider>,
    events: Arc<dyn EventPublisher>,
    context: ViewContext,
    available_data_centers: Vec<DataCenter>,
    connection_string: String,
    max_value_len: usize,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        catalog: Arc<SettingsCatalog>,
        store: Arc<dyn OverrideStore>,
        stores: Arc<dyn StoreProvider>,
        events: Arc<dyn EventPublisher>,
        config: &PanelConfig,
    ) -> Self {
        Self {
            catalog,
            store,
            stores,
            events,
            context: ViewContext {
                tier: Tier::new(config.tier.clone()),
                data_center: DataCenter::new(config.data_center.clone()),
            },
            available_data_centers: config
                .available_data_centers
                .iter()
                .cloned()
                .map(DataCenter::new)
                .collect(),
            connection_string: config.connection_string.clone(),
            max_value_len: config.max_value_len,
        }
    }

    /// The viewer's (tier, data center)
    pub fn context(&self) -> &ViewContext {
        &self.context
    }

    // ===== Read Operations =====

    /// Full catalog snapshot: settings, available data centers, current tier
    pub async fn document(&self) -> Result<SettingsDocument, PanelError> {
        let settings = self.assemble_all().await?;
        Ok(SettingsDocument {
            settings,
            available_data_centers: self.available_data_centers.clone(),
            current_tier: self.context.tier.clone(),
        })
    }

    /// A single assembled setting
    pub async fn get_setting(&self, name: &str) -> Result<Setting, PanelError> {
        let definition = self
            .catalog
            .get(name)
            .ok_or_else(|| PanelError::UnknownSetting {
                name: name.to_string(),
            })?;

        let mut overrides = self
            .store
            .list_for_setting(name)
            .await
            .map_err(|e| self.store_failure("list overrides", e))?;
        sort_overrides(&mut overrides);

        Ok(resolve::assemble(
            definition,
            &overrides,
            &self.context,
            &self.available_data_centers,
        ))
    }

    /// Settings matching a filter query, in catalog order
    pub async fn search(&self, filter: &str) -> Result<Vec<Setting>, PanelError> {
        let query = FilterQuery::parse(filter);
        Ok(search::filter_settings(self.assemble_all().await?, &query))
    }

    /// Filtered settings grouped by dotted-name prefix
    pub async fn groups(&self, filter: &str) -> Result<Vec<SettingsGroup>, PanelError> {
        Ok(search::group_by_prefix(self.search(filter).await?))
    }

    // ===== Editor Operations =====

    /// Create or replace an override at the viewer's tier
    pub async fn set_override(
        &self,
        name: &str,
        data_center: &DataCenter,
        value: &str,
    ) -> Result<Setting, PanelError> {
        let definition = self
            .catalog
            .get(name)
            .ok_or_else(|| PanelError::UnknownSetting {
                name: name.to_string(),
            })?;

        self.validate_data_center(data_center)?;

        if !resolve::allows_override(definition, data_center) {
            return Err(PanelError::OverridesNotAllowed {
                name: name.to_string(),
                data_center: data_center.to_string(),
            });
        }

        validation::validate_value(definition, value, self.max_value_len)?;

        let record = SettingOverride {
            setting_name: name.to_string(),
            tier: self.context.tier.clone(),
            data_center: data_center.clone(),
            value: value.to_string(),
            updated_at: chrono::Utc::now(),
        };

        let stored = self
            .store
            .set(&record)
            .await
            .map_err(|e| self.store_failure("set override", e))?;

        self.publish(PanelEvent::override_set(&stored)).await;

        self.get_setting(name).await
    }

    /// Remove an override at the viewer's tier (idempotent)
    pub async fn clear_override(
        &self,
        name: &str,
        data_center: &DataCenter,
    ) -> Result<Setting, PanelError> {
        if self.catalog.get(name).is_none() {
            return Err(PanelError::UnknownSetting {
                name: name.to_string(),
            });
        }

        self.validate_data_center(data_center)?;

        let removed = self
            .store
            .clear(name, &self.context.tier, data_center)
            .await
            .map_err(|e| self.store_failure("clear override", e))?;

        if removed {
            self.publish(PanelEvent::override_cleared(
                name,
                &self.context.tier,
                data_center,
            ))
            .await;
        }

        self.get_setting(name).await
    }

    /// Bulk-copy overrides between the current store and a named store
    pub async fn copy_settings(
        &self,
        target: &str,
        copy_from: bool,
    ) -> Result<SettingsDocument, PanelError> {
        let addr = validation::validate_copy_target(target, &self.connection_string)?;
        let connection = addr.to_string();

        let remote = self
            .stores
            .open(&connection)
            .await
            .map_err(|error| {
                tracing::error!(%error, %connection, "failed to open copy-settings store");
                PanelError::StoreUnavailable { connection: connection.clone() }
            })?;

        let (source, destination) = if copy_from {
            (&remote, &self.store)
        } else {
            (&self.store, &remote)
        };

        let records = source
            .list()
            .await
            .map_err(|e| self.store_failure("read copy source", e))?;
        let copied = records.len();

        destination
            .replace_all(records)
            .await
            .map_err(|e| self.store_failure("write copy destination", e))?;

        let (source_label, destination_label) = if copy_from {
            (connection, self.connection_string.clone())
        } else {
            (self.connection_string.clone(), connection)
        };
        self.publish(PanelEvent::settings_copied(
            source_label,
            destination_label,
            copied,
        ))
        .await;

        self.document().await
    }

    // ===== Helper Methods =====

    async fn assemble_all(&self) -> Result<Vec<Setting>, PanelError> {
        let records = self
            .store
            .list()
            .await
            .map_err(|e| self.store_failure("list overrides", e))?;

        let mut by_setting: HashMap<String, Vec<SettingOverride>> = HashMap::new();
        for record in records {
            by_setting
                .entry(record.setting_name.clone())
                .or_default()
                .push(record);
        }

        let settings = self
            .catalog
            .iter()
            .map(|definition| {
                let mut overrides = by_setting.remove(&definition.name).unwrap_or_default();
                sort_overrides(&mut overrides);
                resolve::assemble(
                    definition,
                    &overrides,
                    &self.context,
                    &self.available_data_centers,
                )
            })
            .collect();

        // overrides the catalog no longer knows about are displayed nowhere
        for name in by_setting.keys() {
            tracing::warn!(setting = %name, "skipping overrides for unknown setting");
        }

        Ok(settings)
    }

    fn validate_data_center(&self, data_center: &DataCenter) -> Result<(), PanelError> {
        if data_center.is_any() || self.available_data_centers.contains(data_center) {
            Ok(())
        } else {
            Err(PanelError::UnknownDataCenter {
                data_center: data_center.to_string(),
            })
        }
    }

    fn store_failure(&self, operation: &str, error: anyhow::Error) -> PanelError {
        tracing::error!(%error, operation, "override store operation failed");
        PanelError::Internal
    }

    async fn publish(&self, event: PanelEvent) {
        if let Err(error) = self.events.publish(event).await {
            tracing::warn!(%error, "failed to publish audit event");
        }
    }
}

fn sort_overrides(overrides: &mut [SettingOverride]) {
    overrides.sort_by(|a, b| {
        (&a.tier, &a.data_center).cmp(&(&b.tier, &b.data_center))
    });
}
