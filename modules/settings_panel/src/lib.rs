//! Settings Panel Module
//!
//! Server-side core of the settings panel: a catalog of named settings with
//! tier/data-center-scoped defaults, override management, search/grouping,
//! and the HTTP API the panel UI consumes.

// Public exports
pub mod contract;
pub use contract::{
    client::PanelApi, error::PanelError, DataCenter, EnumName, Setting, SettingDefinition,
    SettingOverride, SettingValue, SettingsDocument, SettingsGroup, Tier, ValueKind, ViewContext,
};

pub mod config;
pub use config::PanelConfig;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
