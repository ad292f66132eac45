//! Prelude module for common wondermap types and traits
//!
//! `use wondermap::prelude::*;` brings in everything a host needs to mount
//! the application and feed it events.

pub use crate::core::{
    config::{AppConfig, CameraOptions, FlyTo, MapOptions, MarkerSpeed},
    geo::{LatLng, Point},
    viewport::Viewport,
};

pub use crate::adapter::{AdapterPhase, MapAdapter};
pub use crate::app::{AppEvent, WonderApp};
pub use crate::backend::{HeadlessBackend, MapBackend, MapWidgetHandle, MarkerHandle};
pub use crate::input::events::{MapEvent, MapEventKind};
pub use crate::landmarks::{Landmark, DEFAULT_COORDINATE};
pub use crate::selection::SelectionController;
pub use crate::state::SharedCoordinate;

#[cfg(feature = "egui")]
pub use crate::ui::{landmark_picker, EguiBackend, MapView, UiMapExt};

pub use crate::{MapError, Result};
