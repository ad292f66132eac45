use crate::core::geo::{LatLng, Point};
use serde::{Deserialize, Serialize};

/// Events a map widget emits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MapEvent {
    /// Mouse/touch click on the map
    Click { lat_lng: LatLng, pixel: Point },
}

/// Event kinds a listener can be registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MapEventKind {
    Click,
}

impl MapEvent {
    pub fn kind(&self) -> MapEventKind {
        match self {
            MapEvent::Click { .. } => MapEventKind::Click,
        }
    }

    /// Geographic point associated with this event
    pub fn lat_lng(&self) -> LatLng {
        match self {
            MapEvent::Click { lat_lng, .. } => *lat_lng,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_and_position() {
        let click = MapEvent::Click {
            lat_lng: LatLng::new(10.0, 20.0),
            pixel: Point::new(100.0, 200.0),
        };
        assert_eq!(click.kind(), MapEventKind::Click);
        assert_eq!(click.lat_lng(), LatLng::new(10.0, 20.0));
    }

    #[test]
    fn test_event_serializes() {
        let click = MapEvent::Click {
            lat_lng: LatLng::new(1.5, -2.5),
            pixel: Point::new(3.0, 4.0),
        };
        let json = serde_json::to_string(&click).unwrap();
        let back: MapEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, click);
    }
}
