//! Splash screen plugin configuration.

use serde::{Deserialize, Serialize};

use super::color::HexColor;

/// Splash screen settings applied by the host at launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplashScreenConfig {
    /// How long the splash stays visible, in milliseconds.
    #[serde(default)]
    pub launch_show_duration: u32,
    /// Background color behind the splash image.
    pub background_color: HexColor,
    /// Name of the Android drawable resource used as the splash image.
    #[serde(default = "default_splash_resource_name")]
    pub android_splash_resource_name: String,
    /// How the splash image is scaled to fill the screen on Android.
    #[serde(default)]
    pub android_scale_type: ScaleType,
    /// Show a loading spinner on top of the splash.
    #[serde(default)]
    pub show_spinner: bool,
    /// Display the splash over the status bar.
    #[serde(default)]
    pub splash_full_screen: bool,
    /// Display the splash over the status and navigation bars.
    #[serde(default)]
    pub splash_immersive: bool,
}

fn default_splash_resource_name() -> String {
    "splash".to_string()
}

/// Android image scale mode for the splash drawable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScaleType {
    CenterCrop,
    Center,
    CenterInside,
    #[default]
    FitXy,
    FitCenter,
    FitStart,
    FitEnd,
    Matrix,
}
