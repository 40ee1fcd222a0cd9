//! Contract models for the settings panel
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;

/// Wildcard component matching any tier or data center.
pub const ANY: &str = "Any";

/// Deployment environment classifier (e.g. "Dev", "Prod").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tier(String);

impl Tier {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The wildcard tier.
    pub fn any() -> Self {
        Self(ANY.to_string())
    }

    pub fn is_any(&self) -> bool {
        self.0 == ANY
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Physical/logical deployment region scoping an override.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DataCenter(String);

impl DataCenter {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The wildcard data center.
    pub fn any() -> Self {
        Self(ANY.to_string())
    }

    pub fn is_any(&self) -> bool {
        self.0 == ANY
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DataCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display metadata for one enum member.
///
/// Keyed in maps by the raw stored value (e.g. "0" -> "Standard").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumName {
    pub name: String,
    pub description: String,
}

/// Value kind driving validation and editor selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Enum,
    Text,
}

/// A default value scoped to a (tier, data center) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultValue {
    pub tier: Tier,
    pub data_center: DataCenter,
    pub value: String,
}

/// Registered setting definition - one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingDefinition {
    /// Dot-delimited hierarchical identifier (e.g. "BackgroundJobs.Enabled")
    pub name: String,
    /// Markdown description, passed through opaque
    pub description: String,
    /// Display name of the underlying type (e.g. "Boolean")
    pub type_name: String,
    /// Value kind for validation
    pub kind: ValueKind,
    /// Whether a changed value takes effect only after restart
    pub requires_restart: bool,
    /// Per-data-center override permission; the "Any" entry acts as fallback
    pub allows_overrides: BTreeMap<DataCenter, bool>,
    /// Declared defaults; must contain the (Any, Any) base default
    pub defaults: Vec<DefaultValue>,
    /// Enum member metadata keyed by raw value; empty unless kind is Enum
    pub enum_names: BTreeMap<String, EnumName>,
}

impl SettingDefinition {
    pub fn is_enum(&self) -> bool {
        matches!(self.kind, ValueKind::Enum)
    }
}

/// A stored override superseding a setting's default for its scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingOverride {
    pub setting_name: String,
    pub tier: Tier,
    pub data_center: DataCenter,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

/// One (tier, data center, value) row of the assembled setting view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingValue {
    pub tier: Tier,
    pub data_center: DataCenter,
    pub value: String,
    pub is_default: bool,
    pub is_override: bool,
    pub allows_overrides: bool,
}

/// Assembled setting view for a viewing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub name: String,
    pub description: String,
    pub type_name: String,
    pub is_enum: bool,
    pub requires_restart: bool,
    /// Override permission materialized for every available data center
    pub allows_overrides: BTreeMap<DataCenter, bool>,
    /// Exactly one materialized default per available data center
    pub defaults: Vec<SettingValue>,
    /// All stored overrides for the setting
    pub overrides: Vec<SettingValue>,
    /// The override in effect for the viewing context, if any
    pub active_override: Option<SettingValue>,
    pub enum_names: BTreeMap<String, EnumName>,
}

impl Setting {
    pub fn has_override(&self) -> bool {
        !self.overrides.is_empty()
    }
}

/// The viewer's (tier, data center).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewContext {
    pub tier: Tier,
    pub data_center: DataCenter,
}

/// Full catalog snapshot served to the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDocument {
    pub settings: Vec<Setting>,
    pub available_data_centers: Vec<DataCenter>,
    pub current_tier: Tier,
}

/// One dotted-prefix group of the settings list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsGroup {
    pub prefix: String,
    pub settings: Vec<Setting>,
}
