//! The application context: shared coordinate state, selection and map
//! adapter, wired together by a single-threaded event loop.

use crate::{
    adapter::{AdapterPhase, MapAdapter},
    backend::MapBackend,
    core::{config::AppConfig, geo::LatLng},
    input::events::MapEvent,
    landmarks::DEFAULT_COORDINATE,
    selection::SelectionController,
    state::SharedCoordinate,
    Result,
};

/// Something that happened outside the application
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The user picked a landmark identifier
    Select(String),
    /// The map widget emitted an event
    Map(MapEvent),
}

pub struct WonderApp<B: MapBackend> {
    state: SharedCoordinate,
    selection: SelectionController,
    adapter: MapAdapter<B>,
}

impl<B: MapBackend> WonderApp<B> {
    pub fn new(backend: B, config: AppConfig) -> Self {
        Self {
            state: SharedCoordinate::new(DEFAULT_COORDINATE),
            selection: SelectionController::new(),
            adapter: MapAdapter::new(backend, config),
        }
    }

    /// Run the startup reactions: the initial selection effect, then widget,
    /// marker and listener creation, then the queued state changes.
    ///
    /// Once the map exists further calls do nothing. After a widget failure
    /// the queue is still drained, so a retry starts from a clean state.
    pub fn mount(&mut self) -> Result<()> {
        if self.adapter.phase() != AdapterPhase::Uninitialized {
            log::debug!("application already mounted, ignoring");
            return Ok(());
        }

        self.selection.initialize(&mut self.state);
        let mounted = self.adapter.mount(self.state.current());
        self.flush();
        mounted
    }

    /// Handle one event and every state change it causes
    pub fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::Select(id) => {
                self.selection.select(&id, &mut self.state);
            }
            AppEvent::Map(map_event) => {
                self.adapter.handle_event(&map_event, &mut self.state);
            }
        }
        self.flush();
    }

    pub fn select(&mut self, id: &str) {
        self.dispatch(AppEvent::Select(id.to_string()));
    }

    fn flush(&mut self) {
        while let Some(coordinate) = self.state.take_change() {
            self.adapter.on_coordinate_changed(coordinate);
        }
    }

    pub fn coordinate(&self) -> LatLng {
        self.state.current()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selection.selected()
    }

    pub fn adapter(&self) -> &MapAdapter<B> {
        &self.adapter
    }

    pub fn widget(&self) -> Option<&B::Widget> {
        self.adapter.widget()
    }
}
