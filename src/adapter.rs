//! Keeps one map widget and its marker in step with the shared coordinate.

use crate::{
    backend::{MapBackend, MapWidgetHandle, MarkerHandle},
    core::{
        config::{AppConfig, CameraOptions},
        geo::LatLng,
    },
    input::events::{MapEvent, MapEventKind},
    state::SharedCoordinate,
    Result,
};

/// Lifecycle of the adapter. Phases only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AdapterPhase {
    Uninitialized,
    /// Widget exists; no marker (degraded if marker creation failed)
    WidgetReady,
    /// Marker exists and the click listener is registered
    MarkerReady,
    /// At least one coordinate change has been applied to widget and marker
    Synchronized,
}

pub struct MapAdapter<B: MapBackend> {
    backend: B,
    config: AppConfig,
    phase: AdapterPhase,
    widget: Option<B::Widget>,
    marker: Option<B::Marker>,
}

impl<B: MapBackend> MapAdapter<B> {
    pub fn new(backend: B, config: AppConfig) -> Self {
        Self {
            backend,
            config,
            phase: AdapterPhase::Uninitialized,
            widget: None,
            marker: None,
        }
    }

    pub fn phase(&self) -> AdapterPhase {
        self.phase
    }

    pub fn widget(&self) -> Option<&B::Widget> {
        self.widget.as_ref()
    }

    pub fn marker(&self) -> Option<&B::Marker> {
        self.marker.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn camera(&self) -> CameraOptions {
        self.config.camera
    }

    /// Create the widget centered on `center`, then the marker, then the
    /// click listener.
    ///
    /// A widget failure is returned. A marker failure is logged and leaves the
    /// adapter markerless. Only the first call does anything.
    pub fn mount(&mut self, center: LatLng) -> Result<()> {
        if self.phase != AdapterPhase::Uninitialized {
            log::debug!("map already mounted, ignoring");
            return Ok(());
        }

        self.backend
            .set_api_key(self.config.api_key.as_deref().unwrap_or_default());

        let options = self.config.map_options(center);
        let mut widget = self.backend.create_widget(&options)?;
        log::info!(
            "map widget created in '{}' at {} zoom {}",
            options.container,
            center,
            options.zoom
        );
        self.phase = AdapterPhase::WidgetReady;

        let marker = match self.backend.create_marker(center, &mut widget) {
            Ok(marker) => marker,
            Err(e) => {
                log::error!("{e}");
                self.widget = Some(widget);
                return Ok(());
            }
        };

        widget.listen(MapEventKind::Click);
        self.widget = Some(widget);
        self.marker = Some(marker);
        self.phase = AdapterPhase::MarkerReady;
        Ok(())
    }

    /// React to a widget event. Clicks move the marker and publish the
    /// clicked point; the camera follows through the resulting state change.
    pub fn handle_event(&mut self, event: &MapEvent, state: &mut SharedCoordinate) {
        let speed = self.camera().marker_speed;
        let (Some(widget), Some(marker)) = (self.widget.as_ref(), self.marker.as_mut()) else {
            return;
        };

        if !widget.is_listening(event.kind()) {
            return;
        }

        match event {
            MapEvent::Click { lat_lng, .. } => {
                marker.move_to(*lat_lng, speed);
                state.publish(*lat_lng);
            }
        }
    }

    /// Bring marker and camera to `coordinate`. No-op until both exist.
    pub fn on_coordinate_changed(&mut self, coordinate: LatLng) {
        let camera = self.camera();
        let (Some(widget), Some(marker)) = (self.widget.as_mut(), self.marker.as_mut()) else {
            log::debug!("coordinate change to {coordinate} before map is ready");
            return;
        };

        marker.move_to(coordinate, camera.marker_speed);
        widget.fly_to(&camera.fly_to(coordinate));
        self.phase = AdapterPhase::Synchronized;
    }
}
