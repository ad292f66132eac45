use crate::core::geo::LatLng;

/// Easing curves for animations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    EaseOutCubic,
    EaseInOutCubic,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            EasingFunction::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// Main interpolation utilities
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation between two f64 values
    pub fn linear(start: f64, end: f64, t: f64) -> f64 {
        start + (end - start) * t
    }

    /// Interpolate between two LatLng coordinates along the shorter way
    /// around the antimeridian
    pub fn lat_lng(start: &LatLng, end: &LatLng, t: f64) -> LatLng {
        let mut end_lng = end.lng;
        if end_lng - start.lng > 180.0 {
            end_lng -= 360.0;
        } else if start.lng - end_lng > 180.0 {
            end_lng += 360.0;
        }

        LatLng::new(
            Self::linear(start.lat, end.lat, t),
            LatLng::wrap_lng(Self::linear(start.lng, end_lng, t)),
        )
    }
}
