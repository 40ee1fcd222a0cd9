//! Setting definition catalog
//!
//! Immutable, name-sorted collection of definitions built once at startup.
//! Construction enforces the catalog invariants; everything downstream can
//! rely on them.

use crate::contract::{DataCenter, SettingDefinition, Tier, ValueKind};
use std::collections::HashMap;

/// Catalog construction errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("setting name cannot be empty")]
    EmptyName,

    #[error("duplicate setting name: {0}")]
    DuplicateName(String),

    #[error("setting '{name}' has no (Any, Any) base default")]
    MissingBaseDefault { name: String },

    #[error("setting '{name}' declares more than one default for ({tier}, {data_center})")]
    DuplicateDefault {
        name: String,
        tier: Tier,
        data_center: DataCenter,
    },

    #[error("enum setting '{name}' declares no members")]
    MissingEnumNames { name: String },

    #[error("setting '{name}' default '{value}' is not a declared enum member")]
    UnknownEnumDefault { name: String, value: String },

    #[error("setting '{name}' default '{value}' is not a boolean")]
    InvalidBoolDefault { name: String, value: String },
}

/// Name-sorted catalog of setting definitions.
pub struct SettingsCatalog {
    settings: Vec<SettingDefinition>,
    by_name: HashMap<String, usize>,
}

impl SettingsCatalog {
    pub fn new(mut definitions: Vec<SettingDefinition>) -> Result<Self, CatalogError> {
        definitions.sort_by(|a, b| a.name.cmp(&b.name));

        let mut by_name = HashMap::with_capacity(definitions.len());
        for (index, definition) in definitions.iter().enumerate() {
            if definition.name.is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if by_name.insert(definition.name.clone(), index).is_some() {
                return Err(CatalogError::DuplicateName(definition.name.clone()));
            }
            validate_definition(definition)?;
        }

        Ok(Self {
            settings: definitions,
            by_name,
        })
    }

    pub fn get(&self, name: &str) -> Option<&SettingDefinition> {
        self.by_name.get(name).map(|&i| &self.settings[i])
    }

    /// Definitions in name order.
    pub fn iter(&self) -> impl Iterator<Item = &SettingDefinition> {
        self.settings.iter()
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }
}

fn validate_definition(definition: &SettingDefinition) -> Result<(), CatalogError> {
    let mut has_base = false;
    let mut seen: Vec<(&Tier, &DataCenter)> = Vec::with_capacity(definition.defaults.len());

    for default in &definition.defaults {
        let scope = (&default.tier, &default.data_center);
        if seen.contains(&scope) {
            return Err(CatalogError::DuplicateDefault {
                name: definition.name.clone(),
                tier: default.tier.clone(),
                data_center: default.data_center.clone(),
            });
        }
        seen.push(scope);

        if default.tier.is_any() && default.data_center.is_any() {
            has_base = true;
        }

        match definition.kind {
            ValueKind::Bool => {
                if !crate::domain::validation::is_bool(&default.value) {
                    return Err(CatalogError::InvalidBoolDefault {
                        name: definition.name.clone(),
                        value: default.value.clone(),
                    });
                }
            }
            ValueKind::Enum => {
                if !definition.enum_names.contains_key(&default.value) {
                    return Err(CatalogError::UnknownEnumDefault {
                        name: definition.name.clone(),
                        value: default.value.clone(),
                    });
                }
            }
            ValueKind::Text => {}
        }
    }

    if !has_base {
        return Err(CatalogError::MissingBaseDefault {
            name: definition.name.clone(),
        });
    }

    if definition.is_enum() && definition.enum_names.is_empty() {
        return Err(CatalogError::MissingEnumNames {
            name: definition.name.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::{DefaultValue, EnumName};
    use std::collections::BTreeMap;

    fn bool_definition(name: &str) -> SettingDefinition {
        SettingDefinition {
            name: name.to_string(),
            description: String::new(),
            type_name: "Boolean".to_string(),
            kind: ValueKind::Bool,
            requires_restart: false,
            allows_overrides: BTreeMap::new(),
            defaults: vec![DefaultValue {
                tier: Tier::any(),
                data_center: DataCenter::any(),
                value: "false".to_string(),
            }],
            enum_names: BTreeMap::new(),
        }
    }

    #[test]
    fn test_catalog_sorted_and_indexed() {
        let catalog = SettingsCatalog::new(vec![
            bool_definition("Zebra.Flag"),
            bool_definition("Alpha.Flag"),
        ])
        .expect("valid catalog");

        let names: Vec<_> = catalog.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha.Flag", "Zebra.Flag"]);
        assert!(catalog.get("Zebra.Flag").is_some());
        assert!(catalog.get("Missing").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result =
            SettingsCatalog::new(vec![bool_definition("A.Flag"), bool_definition("A.Flag")]);
        assert!(matches!(result, Err(CatalogError::DuplicateName(_))));
    }

    #[test]
    fn test_missing_base_default_rejected() {
        let mut definition = bool_definition("A.Flag");
        definition.defaults[0].tier = Tier::new("Prod");
        let result = SettingsCatalog::new(vec![definition]);
        assert!(matches!(
            result,
            Err(CatalogError::MissingBaseDefault { .. })
        ));
    }

    #[test]
    fn test_duplicate_default_scope_rejected() {
        let mut definition = bool_definition("A.Flag");
        definition.defaults.push(DefaultValue {
            tier: Tier::any(),
            data_center: DataCenter::any(),
            value: "true".to_string(),
        });
        let result = SettingsCatalog::new(vec![definition]);
        assert!(matches!(result, Err(CatalogError::DuplicateDefault { .. })));
    }

    #[test]
    fn test_bool_default_must_parse() {
        let mut definition = bool_definition("A.Flag");
        definition.defaults[0].value = "yes".to_string();
        let result = SettingsCatalog::new(vec![definition]);
        assert!(matches!(
            result,
            Err(CatalogError::InvalidBoolDefault { .. })
        ));
    }

    #[test]
    fn test_enum_default_must_be_member() {
        let mut definition = bool_definition("Search.Mode");
        definition.kind = ValueKind::Enum;
        definition.enum_names.insert(
            "0".to_string(),
            EnumName {
                name: "Standard".to_string(),
                description: String::new(),
            },
        );
        definition.defaults[0].value = "1".to_string();
        let result = SettingsCatalog::new(vec![definition]);
        assert!(matches!(
            result,
            Err(CatalogError::UnknownEnumDefault { .. })
        ));
    }

    #[test]
    fn test_enum_without_members_rejected() {
        let mut definition = bool_definition("Search.Mode");
        definition.kind = ValueKind::Enum;
        definition.defaults[0].value = "0".to_string();
        let result = SettingsCatalog::new(vec![definition]);
        // the default is checked first and is not a declared member
        assert!(matches!(
            result,
            Err(CatalogError::UnknownEnumDefault { .. })
        ));
    }
}
