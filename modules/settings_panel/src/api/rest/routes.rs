//! Route registration

use super::{dto::*, error::Problem, handlers};
use crate::domain::Service;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;

/// Build the panel router with the service injected as an extension
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        // Document and list endpoints
        .route("/settings.json", get(get_document_handler))
        .route("/settings", get(list_settings_handler))
        .route("/settings/groups", get(list_groups_handler))
        .route("/settings/{name}", get(get_setting_handler))
        // Editor endpoints
        .route("/set", post(set_override_handler))
        .route("/clear", post(clear_override_handler))
        .route("/copy-settings", post(copy_settings_handler))
        .layer(Extension(service))
}

// ===== Handler wrappers that extract service from Extension =====

async fn get_document_handler(
    Extension(service): Extension<Arc<Service>>,
) -> Result<axum::Json<SettingsDocumentDto>, Problem> {
    handlers::get_document(service).await
}

async fn list_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    query: axum::extract::Query<handlers::ListQuery>,
) -> Result<axum::Json<SettingsListResponse>, Problem> {
    handlers::list_settings(service, query).await
}

async fn list_groups_handler(
    Extension(service): Extension<Arc<Service>>,
    query: axum::extract::Query<handlers::ListQuery>,
) -> Result<axum::Json<GroupsResponse>, Problem> {
    handlers::list_groups(service, query).await
}

async fn get_setting_handler(
    Extension(service): Extension<Arc<Service>>,
    path: axum::extract::Path<String>,
) -> Result<axum::Json<SettingDto>, Problem> {
    handlers::get_setting(service, path).await
}

async fn set_override_handler(
    Extension(service): Extension<Arc<Service>>,
    json: axum::Json<SetOverrideRequest>,
) -> Result<axum::Json<SettingDto>, Problem> {
    handlers::set_override(service, json).await
}

async fn clear_override_handler(
    Extension(service): Extension<Arc<Service>>,
    json: axum::Json<ClearOverrideRequest>,
) -> Result<axum::Json<SettingDto>, Problem> {
    handlers::clear_override(service, json).await
}

async fn copy_settings_handler(
    Extension(service): Extension<Arc<Service>>,
    json: axum::Json<CopySettingsRequest>,
) -> Result<axum::Json<SettingsDocumentDto>, Problem> {
    handlers::copy_settings(service, json).await
}
