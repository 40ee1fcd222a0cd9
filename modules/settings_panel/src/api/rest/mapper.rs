//! Mapper implementations for converting contract models into DTOs
//!
//! Conversions are one-way: requests carry plain strings that the domain
//! service parses and validates itself.

use super::dto::*;
use crate::contract;

impl From<contract::SettingValue> for SettingValueDto {
    fn from(value: contract::SettingValue) -> Self {
        Self {
            tier: value.tier.to_string(),
            data_center: value.data_center.to_string(),
            value: value.value,
            is_default: value.is_default,
            is_override: value.is_override,
            allows_overrides: value.allows_overrides,
        }
    }
}

impl From<contract::EnumName> for EnumNameDto {
    fn from(enum_name: contract::EnumName) -> Self {
        Self {
            name: enum_name.name,
            description: enum_name.description,
        }
    }
}

impl From<contract::Setting> for SettingDto {
    fn from(setting: contract::Setting) -> Self {
        Self {
            name: setting.name,
            description: setting.description,
            type_name: setting.type_name,
            is_enum: setting.is_enum,
            requires_restart: setting.requires_restart,
            allows_overrides: setting
                .allows_overrides
                .into_iter()
                .map(|(dc, allowed)| (dc.to_string(), allowed))
                .collect(),
            defaults: setting.defaults.into_iter().map(Into::into).collect(),
            overrides: setting.overrides.into_iter().map(Into::into).collect(),
            active_override: setting.active_override.map(Into::into),
            enum_names: setting
                .enum_names
                .into_iter()
                .map(|(raw, e)| (raw, e.into()))
                .collect(),
        }
    }
}

impl From<contract::SettingsDocument> for SettingsDocumentDto {
    fn from(document: contract::SettingsDocument) -> Self {
        Self {
            settings: document.settings.into_iter().map(Into::into).collect(),
            available_data_centers: document
                .available_data_centers
                .into_iter()
                .map(|dc| dc.to_string())
                .collect(),
            current_tier: document.current_tier.to_string(),
        }
    }
}

impl From<contract::SettingsGroup> for SettingsGroupDto {
    fn from(group: contract::SettingsGroup) -> Self {
        Self {
            prefix: group.prefix,
            settings: group.settings.into_iter().map(Into::into).collect(),
        }
    }
}
