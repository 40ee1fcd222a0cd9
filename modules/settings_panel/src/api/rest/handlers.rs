//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::{map_domain_error, Problem},
};
use crate::contract::DataCenter;
use crate::domain::Service;
use axum::{
    extract::{Path, Query},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for list endpoints
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Filter query: substring terms and the `has:override` directive
    #[serde(default)]
    pub filter: String,
}

/// Full settings document
pub async fn get_document(service: Arc<Service>) -> Result<Json<SettingsDocumentDto>, Problem> {
    let document = service.document().await.map_err(map_domain_error)?;
    Ok(Json(document.into()))
}

/// Filtered settings list
pub async fn list_settings(
    service: Arc<Service>,
    Query(query): Query<ListQuery>,
) -> Result<Json<SettingsListResponse>, Problem> {
    let settings = service
        .search(&query.filter)
        .await
        .map_err(map_domain_error)?;

    let items: Vec<SettingDto> = settings.into_iter().map(Into::into).collect();
    let total = items.len();

    Ok(Json(SettingsListResponse { items, total }))
}

/// Filtered settings grouped by dotted-name prefix
pub async fn list_groups(
    service: Arc<Service>,
    Query(query): Query<ListQuery>,
) -> Result<Json<GroupsResponse>, Problem> {
    let groups = service
        .groups(&query.filter)
        .await
        .map_err(map_domain_error)?;

    let groups: Vec<SettingsGroupDto> = groups.into_iter().map(Into::into).collect();
    let total = groups.iter().map(|g| g.settings.len()).sum();

    Ok(Json(GroupsResponse { groups, total }))
}

/// A single setting
pub async fn get_setting(
    service: Arc<Service>,
    Path(name): Path<String>,
) -> Result<Json<SettingDto>, Problem> {
    let setting = service.get_setting(&name).await.map_err(map_domain_error)?;
    Ok(Json(setting.into()))
}

/// Create or replace an override
pub async fn set_override(
    service: Arc<Service>,
    Json(req): Json<SetOverrideRequest>,
) -> Result<Json<SettingDto>, Problem> {
    let data_center = DataCenter::new(req.data_center);
    let setting = service
        .set_override(&req.setting_name, &data_center, &req.value)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(setting.into()))
}

/// Remove an override
pub async fn clear_override(
    service: Arc<Service>,
    Json(req): Json<ClearOverrideRequest>,
) -> Result<Json<SettingDto>, Problem> {
    let data_center = DataCenter::new(req.data_center);
    let setting = service
        .clear_override(&req.setting_name, &data_center)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(setting.into()))
}

/// Bulk-copy overrides between the current store and a named store
pub async fn copy_settings(
    service: Arc<Service>,
    Json(req): Json<CopySettingsRequest>,
) -> Result<Json<SettingsDocumentDto>, Problem> {
    let document = service
        .copy_settings(&req.redis_host, req.copy_from)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(document.into()))
}
