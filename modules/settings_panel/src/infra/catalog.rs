//! Catalog file loading
//!
//! The setting catalog is declared in a YAML document and mapped into
//! contract definitions at startup. Serde stays at this edge; the domain
//! catalog re-checks its own invariants on construction.

use crate::contract::{DataCenter, DefaultValue, EnumName, SettingDefinition, Tier, ValueKind};
use crate::domain::catalog::{CatalogError, SettingsCatalog};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Catalog loading errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    settings: Vec<SettingEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct SettingEntry {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "type")]
    kind: KindEntry,
    #[serde(default)]
    type_name: Option<String>,
    #[serde(default)]
    requires_restart: bool,
    #[serde(default)]
    allows_overrides: BTreeMap<String, bool>,
    defaults: Vec<DefaultEntry>,
    #[serde(default)]
    enum_names: BTreeMap<String, EnumNameEntry>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum KindEntry {
    Bool,
    Enum,
    Text,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct DefaultEntry {
    #[serde(default = "any_component")]
    tier: String,
    #[serde(default = "any_component")]
    data_center: String,
    value: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct EnumNameEntry {
    name: String,
    #[serde(default)]
    description: String,
}

fn any_component() -> String {
    "Any".to_string()
}

impl From<KindEntry> for ValueKind {
    fn from(kind: KindEntry) -> Self {
        match kind {
            KindEntry::Bool => ValueKind::Bool,
            KindEntry::Enum => ValueKind::Enum,
            KindEntry::Text => ValueKind::Text,
        }
    }
}

impl From<SettingEntry> for SettingDefinition {
    fn from(entry: SettingEntry) -> Self {
        let kind = ValueKind::from(entry.kind);
        let type_name = entry.type_name.unwrap_or_else(|| {
            match kind {
                ValueKind::Bool => "Boolean",
                ValueKind::Enum => "Enum",
                ValueKind::Text => "String",
            }
            .to_string()
        });

        Self {
            name: entry.name,
            description: entry.description,
            type_name,
            kind,
            requires_restart: entry.requires_restart,
            allows_overrides: entry
                .allows_overrides
                .into_iter()
                .map(|(dc, allowed)| (DataCenter::new(dc), allowed))
                .collect(),
            defaults: entry
                .defaults
                .into_iter()
                .map(|d| DefaultValue {
                    tier: Tier::new(d.tier),
                    data_center: DataCenter::new(d.data_center),
                    value: d.value,
                })
                .collect(),
            enum_names: entry
                .enum_names
                .into_iter()
                .map(|(raw, e)| {
                    (
                        raw,
                        EnumName {
                            name: e.name,
                            description: e.description,
                        },
                    )
                })
                .collect(),
        }
    }
}

/// Load and validate a catalog from a YAML file
pub fn load_catalog(path: &Path) -> Result<SettingsCatalog, CatalogLoadError> {
    let raw = std::fs::read_to_string(path)?;
    parse_catalog(&raw)
}

/// Parse and validate a catalog from YAML text
pub fn parse_catalog(raw: &str) -> Result<SettingsCatalog, CatalogLoadError> {
    let file: CatalogFile = serde_yaml::from_str(raw)?;
    let definitions = file.settings.into_iter().map(SettingDefinition::from).collect();
    Ok(SettingsCatalog::new(definitions)?)
}
