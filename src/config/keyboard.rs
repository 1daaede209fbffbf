//! Keyboard plugin configuration.

use serde::{Deserialize, Serialize};

/// On-screen keyboard behavior applied by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardConfig {
    /// Which part of the webview is resized when the keyboard appears.
    #[serde(default)]
    pub resize: KeyboardResize,
    /// Keyboard appearance on platforms that support theming.
    #[serde(default)]
    pub style: KeyboardStyle,
    /// Also resize the webview when the app runs in full-screen mode.
    #[serde(default)]
    pub resize_on_full_screen: bool,
}

/// Webview resize strategy when the keyboard is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardResize {
    #[default]
    Body,
    Ionic,
    Native,
    None,
}

/// Keyboard theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KeyboardStyle {
    Dark,
    Light,
    #[default]
    Default,
}
