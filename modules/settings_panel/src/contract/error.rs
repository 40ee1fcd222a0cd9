//! Contract error types for the settings panel
//!
//! These errors are transport-agnostic and used for inter-module communication.

/// Settings panel domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelError {
    /// Setting is not in the catalog
    UnknownSetting {
        /// Setting name
        name: String,
    },
    /// Data center is not available to this panel
    UnknownDataCenter {
        /// Data center name
        data_center: String,
    },
    /// The setting does not allow overrides for the target data center
    OverridesNotAllowed {
        /// Setting name
        name: String,
        /// Data center name
        data_center: String,
    },
    /// Override value failed validation for the setting's kind
    InvalidValue {
        /// Setting name
        name: String,
        /// Rejection reason
        reason: String,
    },
    /// Copy-settings target address failed validation
    InvalidCopyTarget {
        /// Candidate address
        target: String,
        /// Rejection reason
        reason: String,
    },
    /// Backing store could not be reached
    StoreUnavailable {
        /// Connection string
        connection: String,
    },
    /// Internal error
    Internal,
}

impl std::fmt::Display for PanelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSetting { name } => {
                write!(f, "Unknown setting: {}", name)
            }
            Self::UnknownDataCenter { data_center } => {
                write!(f, "Unknown data center: {}", data_center)
            }
            Self::OverridesNotAllowed { name, data_center } => {
                write!(
                    f,
                    "Setting {} does not allow overrides in {}",
                    name, data_center
                )
            }
            Self::InvalidValue { name, reason } => {
                write!(f, "Invalid value for {}: {}", name, reason)
            }
            Self::InvalidCopyTarget { target, reason } => {
                write!(f, "Invalid copy target '{}': {}", target, reason)
            }
            Self::StoreUnavailable { connection } => {
                write!(f, "Settings store unavailable: {}", connection)
            }
            Self::Internal => {
                write!(f, "Internal error")
            }
        }
    }
}

impl std::error::Error for PanelError {}
