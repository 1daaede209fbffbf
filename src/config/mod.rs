//! The app shell configuration descriptor.
//!
//! Uses serde_yaml for the authored config file and serde_json for the
//! interchange form handed to the host's native build tooling. Enum-like
//! host tokens are closed Rust enums and colors are a validating newtype,
//! so a bad token or malformed color fails at parse time instead of
//! surfacing later inside the native build.

mod color;
mod error;
mod keyboard;
mod plugins;
mod push_notifications;
mod server;
mod splash_screen;
mod status_bar;

pub use color::HexColor;
pub use error::ConfigError;
pub use keyboard::{KeyboardConfig, KeyboardResize, KeyboardStyle};
pub use plugins::PluginsConfig;
pub use push_notifications::{PresentationOption, PushNotificationsConfig};
pub use server::{Scheme, ServerConfig};
pub use splash_screen::{ScaleType, SplashScreenConfig};
pub use status_bar::{StatusBarConfig, StatusBarStyle};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Root configuration descriptor consumed by the external mobile host.
///
/// Required sections: appId, appName, webDir.
/// Optional sections: server (schemes default to https), plugins.
///
/// The descriptor is read-only after construction; the host applies it
/// once at native build time and at app launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfiguration {
    /// Reverse-domain app identifier (e.g. "com.example.app").
    /// Immutable once published to an app store.
    pub app_id: String,
    /// Human-readable display name.
    pub app_name: String,
    /// Relative path to the static web assets the host loads as the UI.
    pub web_dir: String,
    /// Per-platform URL schemes for serving local web content.
    #[serde(default)]
    pub server: ServerConfig,
    /// Plugin option records, keyed by host-registered plugin name.
    #[serde(default)]
    pub plugins: PluginsConfig,
}

impl AppConfiguration {
    /// Load a descriptor from a file at the given path.
    ///
    /// `.json` files are parsed as JSON; everything else as YAML.
    /// The descriptor is validated before being returned.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        let config = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&content)?
        } else {
            Self::from_yaml(&content)?
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse a descriptor from a YAML string without validating it.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Parse a descriptor from a JSON string without validating it.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Emit the interchange form consumed by the host's build tooling.
    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Emit the descriptor as YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the descriptor.
    ///
    /// Token and color validity is already enforced by the types; this
    /// checks the structural rules the types cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_id.is_empty() {
            return Err(ConfigError::Validation("appId is required".into()));
        }

        if !is_reverse_domain(&self.app_id) {
            return Err(ConfigError::Validation(format!(
                "appId {:?} must be a reverse-domain identifier like \"com.example.app\"",
                self.app_id
            )));
        }

        if self.app_name.is_empty() {
            return Err(ConfigError::Validation("appName is required".into()));
        }

        if self.web_dir.is_empty() {
            return Err(ConfigError::Validation("webDir is required".into()));
        }

        if let Some(ref push) = self.plugins.push_notifications {
            let mut seen = HashSet::new();
            for option in &push.presentation_options {
                if !seen.insert(option) {
                    return Err(ConfigError::Validation(format!(
                        "PushNotifications.presentationOptions contains duplicate {:?}",
                        option
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Reverse-domain identifier: at least two dot-separated segments, each
/// starting with a letter and containing only letters, digits, or '_'.
fn is_reverse_domain(s: &str) -> bool {
    let segments: Vec<&str> = s.split('.').collect();
    if segments.len() < 2 {
        return false;
    }

    segments.iter().all(|segment| {
        let mut chars = segment.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}
