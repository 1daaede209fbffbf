//! Server configuration.

use serde::{Deserialize, Serialize};

/// Per-platform URL scheme settings for serving local web content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Scheme used to serve web content on Android.
    #[serde(default)]
    pub android_scheme: Scheme,
    /// Scheme used to serve web content on iOS.
    #[serde(default)]
    pub ios_scheme: Scheme,
}

/// URL scheme recognized by the host webview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Https,
    Http,
}
