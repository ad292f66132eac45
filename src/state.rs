use crate::core::geo::LatLng;
use std::collections::VecDeque;

/// The application's current coordinate plus the changes not yet observed
/// by the map adapter.
///
/// Every [`publish`](Self::publish) counts as a change, including one that
/// repeats the current value.
#[derive(Debug, Clone)]
pub struct SharedCoordinate {
    current: LatLng,
    pending: VecDeque<LatLng>,
    revision: u64,
}

impl SharedCoordinate {
    pub fn new(initial: LatLng) -> Self {
        Self {
            current: initial,
            pending: VecDeque::new(),
            revision: 0,
        }
    }

    pub fn current(&self) -> LatLng {
        self.current
    }

    /// Number of publishes since creation
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn publish(&mut self, coordinate: LatLng) {
        log::debug!("coordinate state -> {coordinate}");
        self.current = coordinate;
        self.revision += 1;
        self.pending.push_back(coordinate);
    }

    /// Oldest unobserved change
    pub fn take_change(&mut self) -> Option<LatLng> {
        self.pending.pop_front()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
