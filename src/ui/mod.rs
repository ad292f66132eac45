pub mod selector;
pub mod style;
pub mod widget;

pub use selector::landmark_picker;
pub use style::{AttributionStyle, LandmarkStyle, MapStyle, MarkerStyle};
pub use widget::{EguiBackend, EguiMarker, MapView};

use crate::input::events::MapEvent;

pub trait UiMapExt {
    /// Draw `view` into the remaining space and return its events
    fn map_view(&mut self, view: &MapView) -> Vec<MapEvent>;
}

impl UiMapExt for egui::Ui {
    fn map_view(&mut self, view: &MapView) -> Vec<MapEvent> {
        view.show(self)
    }
}
