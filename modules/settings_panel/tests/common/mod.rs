//! Common test fixtures: a small feature-flag catalog and wired service
#![allow(dead_code)]

use settings_panel::domain::{NoOpEventPublisher, OverrideStore, Service, SettingsCatalog};
use settings_panel::infra::storage::{MemoryOverrideStore, MemoryStoreProvider};
use settings_panel::{
    DataCenter, PanelConfig, SettingDefinition, SettingOverride, Tier, ValueKind,
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A panel service wired over in-memory stores, with direct handles to the
/// current store and the provider for seeding and inspection.
pub struct TestPanel {
    pub service: Arc<Service>,
    pub store: Arc<MemoryOverrideStore>,
    pub provider: Arc<MemoryStoreProvider>,
    pub config: PanelConfig,
}

pub fn test_config() -> PanelConfig {
    PanelConfig {
        tier: "Prod".to_string(),
        data_center: "East".to_string(),
        available_data_centers: vec!["East".to_string(), "West".to_string()],
        connection_string: "settings-store.internal:6379".to_string(),
        ..PanelConfig::default()
    }
}

fn definition(
    name: &str,
    description: &str,
    kind: ValueKind,
    type_name: &str,
    defaults: Vec<(&str, &str, &str)>,
) -> SettingDefinition {
    SettingDefinition {
        name: name.to_string(),
        description: description.to_string(),
        type_name: type_name.to_string(),
        kind,
        requires_restart: false,
        allows_overrides: BTreeMap::new(),
        defaults: defaults
            .into_iter()
            .map(|(tier, dc, value)| settings_panel::contract::DefaultValue {
                tier: Tier::new(tier),
                data_center: DataCenter::new(dc),
                value: value.to_string(),
            })
            .collect(),
        enum_names: BTreeMap::new(),
    }
}

/// Five settings covering every value kind, an override-restricted data
/// center, a restart-required setting, and a name with no dot.
pub fn test_catalog() -> SettingsCatalog {
    let jobs_enabled = definition(
        "BackgroundJobs.Enabled",
        "Run background jobs on this node.",
        ValueKind::Bool,
        "Boolean",
        vec![("Any", "Any", "false"), ("Prod", "Any", "true")],
    );

    let max_workers = definition(
        "BackgroundJobs.MaxWorkers",
        "Upper bound on concurrent background workers.",
        ValueKind::Text,
        "Int32",
        vec![("Any", "Any", "4")],
    );

    let mut redis = definition(
        "Redis.ConnectionString",
        "Host of the cache tier Redis.",
        ValueKind::Text,
        "String",
        vec![("Any", "Any", "localhost:6379")],
    );
    redis.requires_restart = true;
    redis
        .allows_overrides
        .insert(DataCenter::new("East"), false);

    let mut ranking = definition(
        "Search.RankingMode",
        "Result ranking strategy for the search service.",
        ValueKind::Enum,
        "RankingMode",
        vec![("Any", "Any", "0")],
    );
    ranking.enum_names.insert(
        "0".to_string(),
        settings_panel::EnumName {
            name: "Standard".to_string(),
            description: String::new(),
        },
    );
    ranking.enum_names.insert(
        "1".to_string(),
        settings_panel::EnumName {
            name: "Experimental".to_string(),
            description: "Two-pass ranking with reranker.".to_string(),
        },
    );

    let maintenance = definition(
        "Maintenance",
        "Serve the maintenance page instead of the app.",
        ValueKind::Bool,
        "Boolean",
        vec![("Any", "Any", "false")],
    );

    SettingsCatalog::new(vec![jobs_enabled, max_workers, redis, ranking, maintenance])
        .expect("test catalog is valid")
}

pub fn build_panel() -> TestPanel {
    build_panel_with_config(test_config())
}

pub fn build_panel_with_config(config: PanelConfig) -> TestPanel {
    let provider = Arc::new(MemoryStoreProvider::new());
    let store = Arc::new(MemoryOverrideStore::new());
    provider.insert(&config.connection_string, store.clone());

    let service = Arc::new(Service::new(
        Arc::new(test_catalog()),
        store.clone() as Arc<dyn OverrideStore>,
        provider.clone(),
        Arc::new(NoOpEventPublisher),
        &config,
    ));

    TestPanel {
        service,
        store,
        provider,
        config,
    }
}

/// Build an override record for seeding stores directly.
pub fn override_record(setting: &str, tier: &str, dc: &str, value: &str) -> SettingOverride {
    SettingOverride {
        setting_name: setting.to_string(),
        tier: Tier::new(tier),
        data_center: DataCenter::new(dc),
        value: value.to_string(),
        updated_at: chrono::Utc::now(),
    }
}
