//! Filter queries and dotted-prefix grouping for the settings list

use crate::contract::{Setting, SettingsGroup};
use std::collections::HashMap;

/// Parsed filter query.
///
/// Tokens are whitespace-separated. The `has:override` directive restricts
/// results to settings with at least one override; every other token is a
/// case-insensitive substring matched against name or description. All
/// terms must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    terms: Vec<String>,
    has_override: bool,
}

impl FilterQuery {
    pub fn parse(raw: &str) -> Self {
        let mut terms = Vec::new();
        let mut has_override = false;
        for token in raw.split_whitespace() {
            if token.eq_ignore_ascii_case("has:override") {
                has_override = true;
            } else {
                terms.push(token.to_lowercase());
            }
        }
        Self {
            terms,
            has_override,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && !self.has_override
    }

    pub fn matches(&self, setting: &Setting) -> bool {
        if self.has_override && !setting.has_override() {
            return false;
        }
        if self.terms.is_empty() {
            return true;
        }
        let name = setting.name.to_lowercase();
        let description = setting.description.to_lowercase();
        self.terms
            .iter()
            .all(|term| name.contains(term) || description.contains(term))
    }
}

/// Keep only the settings matching the query, preserving input order.
pub fn filter_settings(settings: Vec<Setting>, query: &FilterQuery) -> Vec<Setting> {
    if query.is_empty() {
        return settings;
    }
    settings
        .into_iter()
        .filter(|setting| query.matches(setting))
        .collect()
}

/// Prefix of a dotted name: the text before the first '.', or the whole
/// name when there is none.
pub fn prefix_of(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

/// Group settings by dotted-name prefix.
///
/// Stable and lossless: groups appear in first-occurrence order, settings
/// keep their input order within a group, and every setting lands in
/// exactly one group.
pub fn group_by_prefix(settings: Vec<Setting>) -> Vec<SettingsGroup> {
    let mut groups: Vec<SettingsGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for setting in settings {
        let prefix = prefix_of(&setting.name).to_string();
        match index.get(&prefix) {
            Some(&at) => groups[at].settings.push(setting),
            None => {
                index.insert(prefix.clone(), groups.len());
                groups.push(SettingsGroup {
                    prefix,
                    settings: vec![setting],
                });
            }
        }
    }

    groups
}
