//! Integration tests for copy-settings

use settings_panel::domain::{OverrideStore, StoreProvider};
use settings_panel::infra::storage::MemoryOverrideStore;
use settings_panel::{DataCenter, PanelError};
use std::sync::Arc;

mod common;
use common::{build_panel, override_record};

const REPLICA: &str = "replica.example.com:6379";

fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

#[tokio::test]
async fn test_copy_to_named_store() {
    let panel = build_panel();

    print_test_header(
        "test_copy_to_named_store",
        &[
            "Copying to a named store bulk-replaces its contents with the",
            "current overrides and leaves the current store untouched.",
        ],
    );

    println!("\n📝 Stage 1: Seed local overrides");
    panel
        .service
        .set_override("Maintenance", &DataCenter::new("East"), "true")
        .await
        .expect("set override");
    panel
        .service
        .set_override("BackgroundJobs.MaxWorkers", &DataCenter::any(), "8")
        .await
        .expect("set override");

    println!("📝 Stage 2: Copy to the replica store");
    let document = panel
        .service
        .copy_settings(REPLICA, false)
        .await
        .expect("copy settings");

    // local overrides still visible in the returned document
    let overridden: Vec<_> = document
        .settings
        .iter()
        .filter(|s| !s.overrides.is_empty())
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(overridden, vec!["BackgroundJobs.MaxWorkers", "Maintenance"]);

    println!("📝 Stage 3: Inspect the replica");
    let replica = panel.provider.open(REPLICA).await.expect("open replica");
    let records = replica.list().await.expect("list");
    assert_eq!(records.len(), 2);
    assert_eq!(panel.store.len(), 2);
}

#[tokio::test]
async fn test_copy_replaces_destination_contents() {
    let panel = build_panel();

    print_test_header(
        "test_copy_replaces_destination_contents",
        &["Copying is a bulk replace: prior destination overrides disappear."],
    );

    let replica = Arc::new(MemoryOverrideStore::new());
    replica
        .set(&override_record("Maintenance", "Prod", "West", "true"))
        .await
        .expect("seed replica");
    panel.provider.insert(REPLICA, replica.clone());

    panel
        .service
        .set_override("Maintenance", &DataCenter::new("East"), "true")
        .await
        .expect("set override");

    panel
        .service
        .copy_settings(REPLICA, false)
        .await
        .expect("copy settings");

    let records = replica.list().await.expect("list");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].data_center.as_str(), "East");
}

#[tokio::test]
async fn test_copy_from_named_store() {
    let panel = build_panel();

    print_test_header(
        "test_copy_from_named_store",
        &[
            "Copying from a named store replaces the current overrides and",
            "the returned document reflects the imported state.",
        ],
    );

    println!("\n📝 Stage 1: Seed the replica and one local override");
    let replica = Arc::new(MemoryOverrideStore::new());
    replica
        .set(&override_record(
            "BackgroundJobs.Enabled",
            "Prod",
            "East",
            "false",
        ))
        .await
        .expect("seed replica");
    replica
        .set(&override_record("Search.RankingMode", "Prod", "Any", "1"))
        .await
        .expect("seed replica");
    panel.provider.insert(REPLICA, replica);

    panel
        .service
        .set_override("Maintenance", &DataCenter::new("East"), "true")
        .await
        .expect("set override");

    println!("📝 Stage 2: Copy from the replica");
    let document = panel
        .service
        .copy_settings(REPLICA, true)
        .await
        .expect("copy settings");

    assert_eq!(panel.store.len(), 2);

    let maintenance = document
        .settings
        .iter()
        .find(|s| s.name == "Maintenance")
        .expect("setting");
    assert!(maintenance.overrides.is_empty(), "local override replaced");

    let jobs = document
        .settings
        .iter()
        .find(|s| s.name == "BackgroundJobs.Enabled")
        .expect("setting");
    let active = jobs.active_override.as_ref().expect("active override");
    assert_eq!(active.value, "false");
}

#[tokio::test]
async fn test_copy_rejects_invalid_targets() {
    let panel = build_panel();

    print_test_header(
        "test_copy_rejects_invalid_targets",
        &["The host:port predicate gates every copy."],
    );

    let same = panel
        .service
        .copy_settings(&panel.config.connection_string, false)
        .await;
    assert!(matches!(same, Err(PanelError::InvalidCopyTarget { .. })));

    let bad_port = panel.service.copy_settings("db.example.com:70000", true).await;
    assert!(matches!(
        bad_port,
        Err(PanelError::InvalidCopyTarget { .. })
    ));

    let empty = panel.service.copy_settings("", false).await;
    assert!(matches!(empty, Err(PanelError::InvalidCopyTarget { .. })));

    // nothing was copied anywhere
    assert_eq!(panel.store.len(), 0);
}
