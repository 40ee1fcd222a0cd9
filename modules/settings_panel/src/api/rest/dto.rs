//! REST DTOs with serde derives for HTTP API
//!
//! Wire shapes are camelCase, matching what the panel UI consumes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

// ===== Setting DTOs =====

/// One (tier, data center, value) row of a setting
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingValueDto {
    /// Tier the value is scoped to
    #[schema(example = "Prod")]
    pub tier: String,

    /// Data center the value is scoped to
    #[schema(example = "East")]
    pub data_center: String,

    /// Raw value
    pub value: String,

    /// Whether this row is a default
    pub is_default: bool,

    /// Whether this row is an override
    pub is_override: bool,

    /// Whether the data center accepts overrides for the setting
    pub allows_overrides: bool,
}

/// Display metadata for one enum member
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnumNameDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Setting response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingDto {
    /// Dot-delimited setting name
    #[schema(example = "BackgroundJobs.Enabled")]
    pub name: String,

    /// Markdown description
    pub description: String,

    /// Display name of the underlying type
    #[schema(example = "Boolean")]
    pub type_name: String,

    /// Whether the setting is an enum
    pub is_enum: bool,

    /// Whether a changed value takes effect only after restart
    pub requires_restart: bool,

    /// Override permission per available data center
    pub allows_overrides: BTreeMap<String, bool>,

    /// One materialized default per available data center
    pub defaults: Vec<SettingValueDto>,

    /// All stored overrides
    pub overrides: Vec<SettingValueDto>,

    /// The override in effect for the viewing context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_override: Option<SettingValueDto>,

    /// Enum member metadata keyed by raw value
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub enum_names: BTreeMap<String, EnumNameDto>,
}

/// Full settings document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocumentDto {
    pub settings: Vec<SettingDto>,
    pub available_data_centers: Vec<String>,
    #[schema(example = "Prod")]
    pub current_tier: String,
}

// ===== Request DTOs =====

/// Set-override request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetOverrideRequest {
    #[schema(example = "BackgroundJobs.Enabled")]
    pub setting_name: String,
    #[schema(example = "East")]
    pub data_center: String,
    pub value: String,
}

/// Clear-override request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClearOverrideRequest {
    pub setting_name: String,
    pub data_center: String,
}

/// Copy-settings request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CopySettingsRequest {
    /// Target backing store, host or host:port
    #[schema(example = "replica.example.com:6379")]
    pub redis_host: String,

    /// Copy from the target into the current store instead of to it
    #[serde(default)]
    pub copy_from: bool,
}

// ===== List Response DTOs =====

/// Filtered list of settings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsListResponse {
    pub items: Vec<SettingDto>,
    pub total: usize,
}

/// One dotted-prefix group
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SettingsGroupDto {
    #[schema(example = "BackgroundJobs")]
    pub prefix: String,
    pub settings: Vec<SettingDto>,
}

/// Grouped list of settings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupsResponse {
    pub groups: Vec<SettingsGroupDto>,
    /// Total settings across all groups
    pub total: usize,
}
