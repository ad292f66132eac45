//! The seam between application logic and a concrete map surface
//!
//! A backend creates one widget and markers attached to it. The
//! [`MapAdapter`](crate::adapter::MapAdapter) owns the handles it returns and
//! only ever talks to them through these traits.

pub mod headless;

use crate::{
    core::{
        config::{FlyTo, MapOptions, MarkerSpeed},
        geo::LatLng,
    },
    input::events::MapEventKind,
    Result,
};

pub use headless::{HeadlessBackend, Journal, MapCommand};

/// Factory for map widgets and markers
pub trait MapBackend {
    type Widget: MapWidgetHandle;
    type Marker: MarkerHandle;

    /// Authenticate against the map provider
    fn set_api_key(&mut self, api_key: &str);

    fn create_widget(&mut self, options: &MapOptions) -> Result<Self::Widget>;

    /// Create a marker at `position` attached to `widget`
    fn create_marker(&mut self, position: LatLng, widget: &mut Self::Widget)
        -> Result<Self::Marker>;
}

/// An interactive map surface
pub trait MapWidgetHandle {
    /// Start an animated camera transition; supersedes any running one
    fn fly_to(&mut self, fly_to: &FlyTo);

    /// Start delivering events of `kind`
    fn listen(&mut self, kind: MapEventKind);

    fn is_listening(&self, kind: MapEventKind) -> bool;
}

/// A pin placed on a widget
pub trait MarkerHandle {
    /// Animate the marker to `position`; supersedes any running move
    fn move_to(&mut self, position: LatLng, speed: MarkerSpeed);

    /// Where the marker is headed (or resting)
    fn position(&self) -> LatLng;
}
