/// Audit events for the settings panel
///
/// Events are published after successful writes. Publishing failures are
/// logged by the service and never fail the underlying operation.
use crate::contract::{DataCenter, SettingOverride, Tier};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audit event types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum PanelEvent {
    /// An override was created or replaced
    OverrideSet(OverrideSetEvent),
    /// An override was removed
    OverrideCleared(OverrideClearedEvent),
    /// Overrides were bulk-copied between stores
    SettingsCopied(SettingsCopiedEvent),
}

/// Event data for an override write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideSetEvent {
    pub setting_name: String,
    pub tier: String,
    pub data_center: String,
    pub value: String,
    pub timestamp: DateTime<Utc>,
}

/// Event data for an override removal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideClearedEvent {
    pub setting_name: String,
    pub tier: String,
    pub data_center: String,
    pub timestamp: DateTime<Utc>,
}

/// Event data for a bulk copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsCopiedEvent {
    pub source: String,
    pub destination: String,
    pub copied: usize,
    pub timestamp: DateTime<Utc>,
}

impl PanelEvent {
    pub fn override_set(record: &SettingOverride) -> Self {
        PanelEvent::OverrideSet(OverrideSetEvent {
            setting_name: record.setting_name.clone(),
            tier: record.tier.to_string(),
            data_center: record.data_center.to_string(),
            value: record.value.clone(),
            timestamp: Utc::now(),
        })
    }

    pub fn override_cleared(setting_name: &str, tier: &Tier, data_center: &DataCenter) -> Self {
        PanelEvent::OverrideCleared(OverrideClearedEvent {
            setting_name: setting_name.to_string(),
            tier: tier.to_string(),
            data_center: data_center.to_string(),
            timestamp: Utc::now(),
        })
    }

    pub fn settings_copied(source: String, destination: String, copied: usize) -> Self {
        PanelEvent::SettingsCopied(SettingsCopiedEvent {
            source,
            destination,
            copied,
            timestamp: Utc::now(),
        })
    }
}

/// Event publisher trait for audit sinks
#[async_trait::async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: PanelEvent) -> anyhow::Result<()>;
}

/// No-op publisher for testing or when auditing is disabled
pub struct NoOpEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for NoOpEventPublisher {
    async fn publish(&self, _event: PanelEvent) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Publisher emitting events as structured tracing records
pub struct LogEventPublisher;

#[async_trait::async_trait]
impl EventPublisher for LogEventPublisher {
    async fn publish(&self, event: PanelEvent) -> anyhow::Result<()> {
        let payload = serde_json::to_string(&event)?;
        tracing::info!(target: "settings_panel::audit", %payload, "audit event");
        Ok(())
    }
}
