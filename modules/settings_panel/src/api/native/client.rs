//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{
    DataCenter, PanelApi, PanelError, Setting, SettingsDocument, SettingsGroup,
};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client that directly calls the domain service, without HTTP
/// overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl PanelApi for NativeClient {
    async fn document(&self) -> Result<SettingsDocument, PanelError> {
        self.service.document().await
    }

    async fn get_setting(&self, name: &str) -> Result<Setting, PanelError> {
        self.service.get_setting(name).await
    }

    async fn search(&self, filter: &str) -> Result<Vec<Setting>, PanelError> {
        self.service.search(filter).await
    }

    async fn groups(&self, filter: &str) -> Result<Vec<SettingsGroup>, PanelError> {
        self.service.groups(filter).await
    }

    async fn set_override(
        &self,
        name: &str,
        data_center: &DataCenter,
        value: &str,
    ) -> Result<Setting, PanelError> {
        self.service.set_override(name, data_center, value).await
    }

    async fn clear_override(
        &self,
        name: &str,
        data_center: &DataCenter,
    ) -> Result<Setting, PanelError> {
        self.service.clear_override(name, data_center).await
    }

    async fn copy_settings(
        &self,
        target: &str,
        copy_from: bool,
    ) -> Result<SettingsDocument, PanelError> {
        self.service.copy_settings(target, copy_from).await
    }
}
