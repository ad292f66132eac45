//! The fixed set of seven landmarks the map can be pointed at.
//!
//! Lookups are total: anything that is not a known identifier resolves to
//! [`DEFAULT_COORDINATE`].

use crate::core::geo::LatLng;
use fxhash::FxHashMap;
use once_cell::sync::Lazy;

/// A selectable landmark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub id: &'static str,
    pub display_name: &'static str,
    pub coordinate: LatLng,
}

/// Where the map starts, and where unknown identifiers resolve to.
pub const DEFAULT_COORDINATE: LatLng = LatLng::new(27.1773531, 78.0116069);

static LANDMARKS: [Landmark; 7] = [
    Landmark {
        id: "taj-mahal",
        display_name: "Taj Mahal",
        coordinate: LatLng::new(27.1773531, 78.0116069),
    },
    Landmark {
        id: "colosseum",
        display_name: "Colosseum",
        coordinate: LatLng::new(41.8902141, 12.4877462),
    },
    Landmark {
        id: "chichen-itza",
        display_name: "Chichen Itza",
        coordinate: LatLng::new(20.6787867, -88.5706656),
    },
    Landmark {
        id: "machu-picchu",
        display_name: "Machu Picchu",
        coordinate: LatLng::new(-13.163136, -72.5471516),
    },
    Landmark {
        id: "christ-the-redeemer",
        display_name: "Christ the Redeemer",
        coordinate: LatLng::new(-22.9533291, -43.2132448),
    },
    Landmark {
        id: "petra",
        display_name: "Petra",
        coordinate: LatLng::new(26.9965639, 33.5115078),
    },
    Landmark {
        id: "great-wall",
        display_name: "Great Wall of China",
        coordinate: LatLng::new(40.4319117, 116.565892),
    },
];

static INDEX: Lazy<FxHashMap<&'static str, &'static Landmark>> =
    Lazy::new(|| LANDMARKS.iter().map(|landmark| (landmark.id, landmark)).collect());

/// All landmarks in presentation order
pub fn all() -> &'static [Landmark] {
    &LANDMARKS
}

pub fn find(id: &str) -> Option<&'static Landmark> {
    INDEX.get(id).copied()
}

/// Coordinate for `id`, or [`DEFAULT_COORDINATE`] when unset or unknown
pub fn coordinate_for(id: Option<&str>) -> LatLng {
    id.and_then(find)
        .map(|landmark| landmark.coordinate)
        .unwrap_or(DEFAULT_COORDINATE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_landmark_resolves_to_its_coordinate() {
        let expected = [
            ("taj-mahal", 27.1773531, 78.0116069),
            ("colosseum", 41.8902141, 12.4877462),
            ("chichen-itza", 20.6787867, -88.5706656),
            ("machu-picchu", -13.163136, -72.5471516),
            ("christ-the-redeemer", -22.9533291, -43.2132448),
            ("petra", 26.9965639, 33.5115078),
            ("great-wall", 40.4319117, 116.565892),
        ];

        for (id, lat, lng) in expected {
            assert_eq!(coordinate_for(Some(id)), LatLng::new(lat, lng), "{id}");
        }
    }

    #[test]
    fn test_unknown_and_empty_fall_back_to_default() {
        assert_eq!(coordinate_for(None), DEFAULT_COORDINATE);
        assert_eq!(coordinate_for(Some("")), DEFAULT_COORDINATE);
        assert_eq!(coordinate_for(Some("stonehenge")), DEFAULT_COORDINATE);
        assert_eq!(coordinate_for(Some("Colosseum")), DEFAULT_COORDINATE);
        assert_eq!(DEFAULT_COORDINATE, LatLng::new(27.1773531, 78.0116069));
    }

    #[test]
    fn test_registry_shape() {
        assert_eq!(all().len(), 7);
        assert_eq!(all()[0].id, "taj-mahal");
        assert_eq!(find("great-wall").map(|l| l.display_name), Some("Great Wall of China"));
        assert!(all().iter().all(|l| l.coordinate.is_valid()));
    }
}
