//! Push notification plugin configuration.

use serde::{Deserialize, Serialize};

/// How incoming push notifications are presented while the app is
/// in the foreground.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushNotificationsConfig {
    /// Ordered set of presentation options. Order is preserved as
    /// authored; duplicates are rejected at validation.
    pub presentation_options: Vec<PresentationOption>,
}

/// A single foreground presentation option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationOption {
    Badge,
    Sound,
    Alert,
}
