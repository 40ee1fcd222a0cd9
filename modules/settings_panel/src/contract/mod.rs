//! Contract layer - public API for in-process consumers
//!
//! This layer contains transport-agnostic models and the native client trait.
//! NO serde derives on models - these are pure domain types.

pub mod client;
pub mod error;
pub mod model;

pub use client::PanelApi;
pub use error::PanelError;
pub use model::{
    DataCenter, DefaultValue, EnumName, Setting, SettingDefinition, SettingOverride, SettingValue,
    SettingsDocument, SettingsGroup, Tier, ValueKind, ViewContext, ANY,
};
