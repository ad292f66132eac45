//! Engine-wide magic numbers: provider endpoints, camera defaults and
//! animation tuning all live here.

/// Default square tile size in pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Highest latitude representable in Web Mercator.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.0511287798;

/// Zoom the widget is created with.
pub const INITIAL_ZOOM: f64 = 12.0;

/// Zoom the camera flies to on every coordinate change.
pub const FLY_TO_ZOOM: f64 = 14.0;

/// Fly-to speed (average screenfuls per second along the flight path).
pub const FLY_TO_SPEED: f64 = 2.5;

/// Fly-to curve: how far the camera zooms out mid-flight.
pub const FLY_TO_CURVE: f64 = 0.8;

/// Marker speed scale is 0 (slowest) to 10 (fastest).
pub const MAX_MARKER_SPEED: u8 = 10;

/// Duration of a speed-0 marker glide; faster speeds divide it down.
pub const MARKER_GLIDE_BASE_SECS: f64 = 2.0;

/// DOM-style id of the element the widget is anchored to.
pub const MAP_CONTAINER_ID: &str = "map";

/// Vector tile source used by the provider's street style.
pub const DEFAULT_TILES_SOURCE_URL: &str = "https://api.nextbillion.io/tiles/v3/tiles.json";

/// Street style document; the API key is appended as `?key=`.
pub const DEFAULT_STYLE_BASE_URL: &str = "https://api.nextbillion.io/maps/streets/style.json";

/// Environment variables consulted for the provider API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["NB_API_KEY", "REACT_APP_NB_API_KEY"];

pub const TILES_URL_ENV_VAR: &str = "NB_TILES_URL";
pub const STYLE_URL_ENV_VAR: &str = "NB_STYLE_URL";

/// Marker pin size in screen points (width, height).
pub const MARKER_ICON_SIZE: (f32, f32) = (18.0, 28.0);
