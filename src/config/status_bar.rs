//! Status bar plugin configuration.

use serde::{Deserialize, Serialize};

use super::color::HexColor;

/// Status bar appearance applied by the host at launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBarConfig {
    /// Text and icon style of the status bar.
    #[serde(default)]
    pub style: StatusBarStyle,
    /// Background color of the status bar.
    pub background_color: HexColor,
}

/// Status bar content style.
///
/// `Dark` means light text on a dark bar, `Light` the reverse;
/// `Default` follows the system theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusBarStyle {
    Dark,
    Light,
    #[default]
    Default,
}
