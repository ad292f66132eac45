//! Configuration for the map provider and camera behavior
//!
//! [`AppConfig`] carries what comes from the process environment (the
//! provider API key and endpoint overrides). [`CameraOptions`] and
//! [`MarkerSpeed`] carry the fixed animation parameters, and [`MapOptions`]
//! / [`FlyTo`] are the resolved payloads handed to a map backend.

use crate::core::{constants, geo::LatLng};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Provider configuration resolved at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Provider API key. Never validated here; a bad key is the provider's
    /// failure to report.
    pub api_key: Option<String>,
    pub tiles_source_url: String,
    pub style_base_url: String,
    pub camera: CameraOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            tiles_source_url: constants::DEFAULT_TILES_SOURCE_URL.to_string(),
            style_base_url: constants::DEFAULT_STYLE_BASE_URL.to_string(),
            camera: CameraOptions::default(),
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.api_key = constants::API_KEY_ENV_VARS
            .iter()
            .find_map(|name| lookup(name).filter(|value| !value.is_empty()));

        if let Some(url) = lookup(constants::TILES_URL_ENV_VAR) {
            config.tiles_source_url = url;
        }
        if let Some(url) = lookup(constants::STYLE_URL_ENV_VAR) {
            config.style_base_url = url;
        }

        if config.api_key.is_none() {
            log::warn!(
                "no map API key found in {:?}; the provider will reject style requests",
                constants::API_KEY_ENV_VARS
            );
        }

        config
    }

    /// Style URL with the API key interpolated
    pub fn style_url(&self) -> String {
        format!(
            "{}?key={}",
            self.style_base_url,
            self.api_key.as_deref().unwrap_or_default()
        )
    }

    /// Widget construction options centered on `center`
    pub fn map_options(&self, center: LatLng) -> MapOptions {
        MapOptions {
            container: constants::MAP_CONTAINER_ID.to_string(),
            zoom: self.camera.initial_zoom,
            center,
            vector_tiles_source_url: self.tiles_source_url.clone(),
            style_url: self.style_url(),
        }
    }
}

/// Fixed camera parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraOptions {
    pub initial_zoom: f64,
    pub fly_zoom: f64,
    pub fly_speed: f64,
    pub fly_curve: f64,
    pub marker_speed: MarkerSpeed,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            initial_zoom: constants::INITIAL_ZOOM,
            fly_zoom: constants::FLY_TO_ZOOM,
            fly_speed: constants::FLY_TO_SPEED,
            fly_curve: constants::FLY_TO_CURVE,
            marker_speed: MarkerSpeed::MAX,
        }
    }
}

impl CameraOptions {
    /// Fly-to command targeting `center`
    pub fn fly_to(&self, center: LatLng) -> FlyTo {
        FlyTo {
            center,
            zoom: self.fly_zoom,
            speed: self.fly_speed,
            curve: self.fly_curve,
        }
    }
}

/// Options a backend receives when creating its widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapOptions {
    pub container: String,
    pub zoom: f64,
    pub center: LatLng,
    pub vector_tiles_source_url: String,
    pub style_url: String,
}

/// Animated camera transition request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlyTo {
    pub center: LatLng,
    pub zoom: f64,
    pub speed: f64,
    pub curve: f64,
}

/// Marker animation speed on the 0 (slowest) to 10 (fastest) scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MarkerSpeed(u8);

impl MarkerSpeed {
    pub const MIN: MarkerSpeed = MarkerSpeed(0);
    pub const MAX: MarkerSpeed = MarkerSpeed(constants::MAX_MARKER_SPEED);

    pub fn new(speed: u8) -> Result<Self> {
        if speed <= constants::MAX_MARKER_SPEED {
            Ok(Self(speed))
        } else {
            Err(MapError::InvalidSpeed(speed))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Seconds a marker glide takes at this speed
    pub fn glide_duration_secs(&self) -> f64 {
        constants::MARKER_GLIDE_BASE_SECS / (1.0 + self.0 as f64)
    }
}

impl TryFrom<u8> for MarkerSpeed {
    type Error = MapError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MarkerSpeed> for u8 {
    fn from(speed: MarkerSpeed) -> Self {
        speed.0
    }
}
