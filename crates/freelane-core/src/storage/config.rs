//! TOML-based profile configuration.
//!
//! Stores the inputs the generator needs:
//! - Business segment (enterprise or consumer clients)
//! - Selected roles
//! - Work window (start and end clock times)
//!
//! Configuration is stored at `~/.config/freelane/config.toml`.

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::data_dir;
use crate::block::BusinessSegment;
use crate::clock::ClockTime;
use crate::error::ConfigError;
use crate::role::Role;

/// User profile configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_user_id")]
    pub user_id: String,
    #[serde(default = "default_segment")]
    pub segment: BusinessSegment,
    #[serde(default)]
    pub roles: BTreeSet<Role>,
    #[serde(default = "default_work_start")]
    pub work_start: ClockTime,
    #[serde(default = "default_work_end")]
    pub work_end: ClockTime,
}

fn default_user_id() -> String {
    "local".to_string()
}

fn default_segment() -> BusinessSegment {
    BusinessSegment::Enterprise
}

fn default_work_start() -> ClockTime {
    ClockTime::new(9, 0).expect("valid default")
}

fn default_work_end() -> ClockTime {
    ClockTime::new(18, 0).expect("valid default")
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            segment: default_segment(),
            roles: BTreeSet::new(),
            work_start: default_work_start(),
            work_end: default_work_end(),
        }
    }
}

impl ProfileConfig {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/freelane"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                toml::from_str(&contents).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
        }
    }

    /// Load from disk, falling back to defaults on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        std::fs::write(&path, contents).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Read a single value by key, in its string form.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "user_id" => Some(self.user_id.clone()),
            "segment" => Some(self.segment.to_string()),
            "roles" => Some(
                self.roles
                    .iter()
                    .map(|r| r.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            "work_start" => Some(self.work_start.to_string()),
            "work_end" => Some(self.work_end.to_string()),
            _ => None,
        }
    }

    /// Set a single value by key from its string form.
    ///
    /// `roles` takes a comma-separated list; an empty string clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        match key {
            "user_id" => {
                if value.is_empty() {
                    return Err(invalid("user id must not be empty".to_string()));
                }
                self.user_id = value.to_string();
            }
            "segment" => {
                self.segment = value.parse().map_err(|e| invalid(format!("{e}")))?;
            }
            "roles" => {
                let mut roles = BTreeSet::new();
                for part in value.split(',').filter(|p| !p.trim().is_empty()) {
                    let role: Role = part.trim().parse().map_err(|e| invalid(format!("{e}")))?;
                    roles.insert(role);
                }
                self.roles = roles;
            }
            "work_start" => {
                self.work_start = value.parse().map_err(|e| invalid(format!("{e}")))?;
            }
            "work_end" => {
                self.work_end = value.parse().map_err(|e| invalid(format!("{e}")))?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}
