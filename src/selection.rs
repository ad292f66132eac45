use crate::{core::geo::LatLng, landmarks, landmarks::Landmark, state::SharedCoordinate};

/// Turns a landmark choice into a published coordinate
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected: Option<String>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The options offered to the user, in order
    pub fn options() -> &'static [Landmark] {
        landmarks::all()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Runs the selection reaction for the current (possibly unset) choice
    pub fn initialize(&self, state: &mut SharedCoordinate) -> LatLng {
        self.publish(state)
    }

    /// Records `id` as the choice and publishes its coordinate.
    ///
    /// Unknown ids publish the default coordinate.
    pub fn select(&mut self, id: &str, state: &mut SharedCoordinate) -> LatLng {
        log::debug!("landmark selected: {id}");
        self.selected = Some(id.to_string());
        self.publish(state)
    }

    fn publish(&self, state: &mut SharedCoordinate) -> LatLng {
        let coordinate = landmarks::coordinate_for(self.selected());
        state.publish(coordinate);
        coordinate
    }
}
