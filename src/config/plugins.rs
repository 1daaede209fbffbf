//! Plugin configuration blocks.

use serde::{Deserialize, Serialize};

use super::keyboard::KeyboardConfig;
use super::push_notifications::PushNotificationsConfig;
use super::splash_screen::SplashScreenConfig;
use super::status_bar::StatusBarConfig;

/// Per-plugin option records, keyed by the plugin names the host
/// registers. Entries for plugins the host does not know are ignored
/// by serde's default unknown-field handling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PluginsConfig {
    /// Splash screen shown while the webview loads.
    #[serde(rename = "SplashScreen", skip_serializing_if = "Option::is_none")]
    pub splash_screen: Option<SplashScreenConfig>,
    /// Native status bar appearance.
    #[serde(rename = "StatusBar", skip_serializing_if = "Option::is_none")]
    pub status_bar: Option<StatusBarConfig>,
    /// On-screen keyboard behavior.
    #[serde(rename = "Keyboard", skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<KeyboardConfig>,
    /// Foreground push-notification presentation.
    #[serde(rename = "PushNotifications", skip_serializing_if = "Option::is_none")]
    pub push_notifications: Option<PushNotificationsConfig>,
}
