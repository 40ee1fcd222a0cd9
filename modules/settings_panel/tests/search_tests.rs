//! Integration tests for filtering and grouping through the service

use settings_panel::DataCenter;

mod common;
use common::build_panel;

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
async fn test_substring_filter_on_name() {
    let panel = build_panel();

    print_test_header(
        "test_substring_filter_on_name",
        &["Case-insensitive substring terms match against the setting name."],
    );

    let matched = panel.service.search("jobs").await.expect("search");
    let names: Vec<_> = matched.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["BackgroundJobs.Enabled", "BackgroundJobs.MaxWorkers"]
    );
}

#[tokio::test]
async fn test_filter_matches_description() {
    let panel = build_panel();

    let matched = panel.service.search("maintenance page").await.expect("search");
    let names: Vec<_> = matched.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Maintenance"]);
}

#[tokio::test]
async fn test_empty_filter_returns_everything() {
    let panel = build_panel();

    let matched = panel.service.search("").await.expect("search");
    assert_eq!(matched.len(), 5);
}

#[tokio::test]
async fn test_has_override_returns_exactly_overridden_settings() {
    let panel = build_panel();

    print_test_header(
        "test_has_override_returns_exactly_overridden_settings",
        &[
            "After overriding two settings, has:override must return exactly",
            "those two, in catalog order.",
        ],
    );

    println!("\n📝 Stage 1: No overrides yet");
    let matched = panel.service.search("has:override").await.expect("search");
    assert!(matched.is_empty());

    println!("📝 Stage 2: Override two settings");
    panel
        .service
        .set_override("Maintenance", &DataCenter::new("East"), "true")
        .await
        .expect("set override");
    panel
        .service
        .set_override("BackgroundJobs.MaxWorkers", &DataCenter::new("West"), "8")
        .await
        .expect("set override");

    println!("📝 Stage 3: Search again");
    let matched = panel.service.search("has:override").await.expect("search");
    let names: Vec<_> = matched.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["BackgroundJobs.MaxWorkers", "Maintenance"]);
}

#[tokio::test]
async fn test_has_override_combines_with_terms() {
    let panel = build_panel();

    panel
        .service
        .set_override("Maintenance", &DataCenter::new("East"), "true")
        .await
        .expect("set override");
    panel
        .service
        .set_override("BackgroundJobs.MaxWorkers", &DataCenter::new("West"), "8")
        .await
        .expect("set override");

    let matched = panel
        .service
        .search("has:override workers")
        .await
        .expect("search");
    let names: Vec<_> = matched.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["BackgroundJobs.MaxWorkers"]);
}

#[tokio::test]
async fn test_grouping_is_lossless_and_ordered() {
    let panel = build_panel();

    print_test_header(
        "test_grouping_is_lossless_and_ordered",
        &[
            "Grouping the full catalog by dotted-name prefix keeps every",
            "setting exactly once and groups in first-appearance order.",
        ],
    );

    let groups = panel.service.groups("").await.expect("groups");

    let prefixes: Vec<_> = groups.iter().map(|g| g.prefix.as_str()).collect();
    assert_eq!(
        prefixes,
        vec!["BackgroundJobs", "Maintenance", "Redis", "Search"]
    );

    let flattened: Vec<_> = groups
        .iter()
        .flat_map(|g| g.settings.iter().map(|s| s.name.as_str()))
        .collect();
    assert_eq!(flattened.len(), 5);
    assert_eq!(
        flattened,
        vec![
            "BackgroundJobs.Enabled",
            "BackgroundJobs.MaxWorkers",
            "Maintenance",
            "Redis.ConnectionString",
            "Search.RankingMode",
        ]
    );

    // a name without a dot forms its own group
    let maintenance = groups
        .iter()
        .find(|g| g.prefix == "Maintenance")
        .expect("group");
    assert_eq!(maintenance.settings.len(), 1);
}

#[tokio::test]
async fn test_grouping_respects_filter() {
    let panel = build_panel();

    let groups = panel.service.groups("jobs").await.expect("groups");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].prefix, "BackgroundJobs");
    assert_eq!(groups[0].settings.len(), 2);
}
