//! Domain layer - business logic and services

pub mod catalog;
pub mod events;
pub mod repository;
pub mod resolve;
pub mod search;
pub mod service;
pub mod validation;

pub use catalog::{CatalogError, SettingsCatalog};
pub use events::{EventPublisher, LogEventPublisher, NoOpEventPublisher, PanelEvent};
pub use repository::{OverrideStore, StoreProvider};
pub use search::FilterQuery;
pub use service::Service;
