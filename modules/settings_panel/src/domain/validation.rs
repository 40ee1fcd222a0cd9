//! Value validation and the copy-target host:port predicate

use crate::contract::{PanelError, SettingDefinition, ValueKind};
use std::fmt;
use std::net::Ipv4Addr;

/// Validated copy-target address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostAddr {
    host: String,
    port: Option<u16>,
}

impl HostAddr {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }
}

impl fmt::Display for HostAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => f.write_str(&self.host),
        }
    }
}

/// Whether a raw string is a boolean literal ("true"/"false", any case).
pub fn is_bool(raw: &str) -> bool {
    raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("false")
}

/// Validate a candidate override value against a setting's kind.
pub fn validate_value(
    definition: &SettingDefinition,
    raw: &str,
    max_len: usize,
) -> Result<(), PanelError> {
    if raw.len() > max_len {
        return Err(PanelError::InvalidValue {
            name: definition.name.clone(),
            reason: format!("value exceeds {} bytes", max_len),
        });
    }

    match definition.kind {
        ValueKind::Bool => {
            if !is_bool(raw) {
                return Err(PanelError::InvalidValue {
                    name: definition.name.clone(),
                    reason: "expected true or false".to_string(),
                });
            }
        }
        ValueKind::Enum => {
            if !definition.enum_names.contains_key(raw) {
                return Err(PanelError::InvalidValue {
                    name: definition.name.clone(),
                    reason: format!("'{}' is not a declared enum member", raw),
                });
            }
        }
        ValueKind::Text => {}
    }

    Ok(())
}

/// Validate a copy-settings target address.
///
/// Accepted iff non-empty, different from the current connection string,
/// and either a bare hostname/IPv4 literal or exactly one colon separating
/// a hostname/IPv4 literal from a port in [0, 65535].
pub fn validate_copy_target(candidate: &str, current: &str) -> Result<HostAddr, PanelError> {
    let reject = |reason: &str| PanelError::InvalidCopyTarget {
        target: candidate.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return Err(reject("address is empty"));
    }
    if trimmed == current {
        return Err(reject("address matches the current connection string"));
    }

    match trimmed.matches(':').count() {
        0 => {
            if !is_valid_host(trimmed) {
                return Err(reject("invalid hostname"));
            }
            Ok(HostAddr {
                host: trimmed.to_string(),
                port: None,
            })
        }
        1 => {
            let (host, port) = trimmed.split_once(':').unwrap_or((trimmed, ""));
            if !is_valid_host(host) {
                return Err(reject("invalid hostname"));
            }
            let port = parse_port(port).ok_or_else(|| reject("port must be in 0..=65535"))?;
            Ok(HostAddr {
                host: host.to_string(),
                port: Some(port),
            })
        }
        _ => Err(reject("address must be host or host:port")),
    }
}

fn parse_port(raw: &str) -> Option<u16> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().and_then(|port| u16::try_from(port).ok())
}

fn is_valid_host(host: &str) -> bool {
    host.parse::<Ipv4Addr>().is_ok() || is_valid_hostname(host)
}

fn is_valid_hostname(host: &str) -> bool {
    if host.is_empty() || host.len() > 253 {
        return false;
    }
    host.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}
