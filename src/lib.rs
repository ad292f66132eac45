//! # wondermap
//!
//! Pick one of seven world landmarks and follow it on an interactive map.
//!
//! The crate keeps the application logic (landmark registry, selection,
//! shared coordinate state and the map adapter) independent of the map
//! surface itself. Any surface implementing [`backend::MapBackend`] can be
//! driven; a headless recording backend and an egui backend ship with the
//! crate.

pub mod adapter;
pub mod animation;
pub mod app;
pub mod backend;
pub mod core;
pub mod input;
pub mod landmarks;
pub mod prelude;
pub mod selection;
pub mod state;
#[cfg(feature = "egui")]
pub mod ui;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{AppConfig, CameraOptions, FlyTo, MapOptions, MarkerSpeed},
    geo::{LatLng, Point},
    viewport::Viewport,
};

pub use adapter::{AdapterPhase, MapAdapter};
pub use app::{AppEvent, WonderApp};
pub use backend::{MapBackend, MapWidgetHandle, MarkerHandle};
pub use input::events::{MapEvent, MapEventKind};
pub use landmarks::Landmark;
pub use selection::SelectionController;
pub use state::SharedCoordinate;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Widget creation failed: {0}")]
    WidgetCreation(String),

    #[error("Marker creation failed: {0}")]
    MarkerCreation(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid marker speed {0}, expected 0..=10")]
    InvalidSpeed(u8),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Install `env_logger`, defaulting to `info` when `RUST_LOG` is unset
#[cfg(feature = "debug")]
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("logger already initialised");
    }
}
