use crate::animation::interpolation::{EasingFunction, Interpolation};
use crate::core::{
    config::{FlyTo, MarkerSpeed},
    geo::{LatLng, Point},
    viewport::Viewport,
};

/// State of a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionState {
    Running,
    Completed,
}

/// Zoom/pan trajectory of a flight
#[derive(Debug, Clone, Copy, PartialEq)]
enum FlightPath {
    /// Zoom out, travel, zoom back in
    Arc { r0: f64, rho: f64, w0: f64, u1: f64 },
    /// Target is (nearly) under the camera: pure zoom
    Zoom { rho: f64, direction: f64 },
    /// Nothing to animate
    Jump,
}

impl FlightPath {
    /// Visible span at path position `s`, relative to the starting span
    fn width(&self, s: f64) -> f64 {
        match *self {
            FlightPath::Arc { r0, rho, .. } => r0.cosh() / (r0 + rho * s).cosh(),
            FlightPath::Zoom { rho, direction } => (direction * rho * s).exp(),
            FlightPath::Jump => 1.0,
        }
    }

    /// Fraction of the ground distance covered at path position `s`
    fn travelled(&self, s: f64) -> f64 {
        match *self {
            FlightPath::Arc { r0, rho, w0, u1 } => {
                w0 * ((r0.cosh() * (r0 + rho * s).tanh() - r0.sinh()) / (rho * rho)) / u1
            }
            FlightPath::Zoom { .. } | FlightPath::Jump => 0.0,
        }
    }
}

/// Smooth zoom-and-pan camera flight (van Wijk & Nuij).
///
/// `curve` sets how far the camera pulls out mid-flight and `speed` how many
/// path units are covered per second.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyToAnimation {
    start_viewport: Viewport,
    target_center: LatLng,
    target_zoom: f64,
    from: Point,
    delta: Point,
    path: FlightPath,
    path_length: f64,
    duration: f64,
    elapsed: f64,
    easing: EasingFunction,
    pub state: TransitionState,
}

impl FlyToAnimation {
    pub fn new(viewport: &Viewport, fly_to: &FlyTo) -> Self {
        let start = viewport.center;
        let start_zoom = viewport.zoom;
        let target_zoom = fly_to.zoom.clamp(viewport.min_zoom, viewport.max_zoom);

        // Take the short way around the antimeridian
        let mut target = fly_to.center;
        if target.lng - start.lng > 180.0 {
            target.lng -= 360.0;
        } else if start.lng - target.lng > 180.0 {
            target.lng += 360.0;
        }

        let from = viewport.project(&start, Some(start_zoom));
        let delta = viewport.project(&target, Some(start_zoom)).subtract(&from);

        let rho = fly_to.curve.max(f64::EPSILON);
        let rho2 = rho * rho;
        let w0 = viewport.size.x.max(viewport.size.y).max(1.0);
        let w1 = w0 / 2_f64.powf(target_zoom - start_zoom);
        let u1 = delta.length();

        let r = |descent: bool| {
            let (w, sign) = if descent { (w1, -1.0) } else { (w0, 1.0) };
            let b = (w1 * w1 - w0 * w0 + sign * rho2 * rho2 * u1 * u1) / (2.0 * w * rho2 * u1);
            ((b * b + 1.0).sqrt() - b).ln()
        };

        let (path, path_length) = {
            let r0 = r(false);
            let length = (r(true) - r0) / rho;
            if u1 > 1e-6 && length.is_finite() {
                (FlightPath::Arc { r0, rho, w0, u1 }, length)
            } else if (w0 - w1).abs() < 1e-6 {
                (FlightPath::Jump, 0.0)
            } else {
                let direction = if w1 < w0 { -1.0 } else { 1.0 };
                (
                    FlightPath::Zoom { rho, direction },
                    (w1 / w0).ln().abs() / rho,
                )
            }
        };

        let duration = if fly_to.speed > 0.0 {
            path_length / fly_to.speed
        } else {
            0.0
        };

        Self {
            start_viewport: viewport.clone(),
            target_center: fly_to.center,
            target_zoom,
            from,
            delta,
            path,
            path_length,
            duration,
            elapsed: 0.0,
            easing: EasingFunction::EaseInOutCubic,
            state: TransitionState::Running,
        }
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_finished(&self) -> bool {
        self.state == TransitionState::Completed
    }

    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// Advance by `delta_time` seconds and return the camera (center, zoom)
    pub fn update(&mut self, delta_time: f64) -> (LatLng, f64) {
        self.elapsed += delta_time.max(0.0);
        let progress = self.progress();

        if progress >= 1.0 {
            self.state = TransitionState::Completed;
            return (self.target_center, self.target_zoom);
        }

        let s = self.easing.apply(progress) * self.path_length;
        let scale = 1.0 / self.path.width(s);
        let zoom = self.start_viewport.zoom + scale.log2();

        let world_point = self.from.add(&self.delta.multiply(self.path.travelled(s)));
        let center = self.start_viewport.unproject(&world_point, None).wrapped();

        (center, zoom)
    }
}

/// Marker slide from one position to another
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerGlide {
    from: LatLng,
    to: LatLng,
    duration: f64,
    elapsed: f64,
    pub state: TransitionState,
}

impl MarkerGlide {
    pub fn new(from: LatLng, to: LatLng, speed: MarkerSpeed) -> Self {
        Self {
            from,
            to,
            duration: speed.glide_duration_secs(),
            elapsed: 0.0,
            state: TransitionState::Running,
        }
    }

    pub fn target(&self) -> LatLng {
        self.to
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_finished(&self) -> bool {
        self.state == TransitionState::Completed
    }

    /// Advance by `delta_time` seconds and return the marker position
    pub fn update(&mut self, delta_time: f64) -> LatLng {
        self.elapsed += delta_time.max(0.0);
        let progress = if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).min(1.0)
        };

        if progress >= 1.0 {
            self.state = TransitionState::Completed;
            return self.to;
        }

        let eased = EasingFunction::EaseOutCubic.apply(progress);
        Interpolation::lat_lng(&self.from, &self.to, eased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CameraOptions;

    const TAJ_MAHAL: LatLng = LatLng::new(27.1773531, 78.0116069);
    const COLOSSEUM: LatLng = LatLng::new(41.8902141, 12.4877462);

    fn viewport(center: LatLng, zoom: f64) -> Viewport {
        Viewport::new(center, zoom, Point::new(800.0, 600.0))
    }

    #[test]
    fn test_flight_ends_on_target() {
        let fly = CameraOptions::default().fly_to(COLOSSEUM);
        let mut flight = FlyToAnimation::new(&viewport(TAJ_MAHAL, 14.0), &fly);
        assert!(flight.duration() > 0.0);

        let mut lowest_zoom = f64::MAX;
        while !flight.is_finished() {
            let (_, zoom) = flight.update(1.0 / 60.0);
            lowest_zoom = lowest_zoom.min(zoom);
        }

        assert_eq!(flight.update(0.0), (COLOSSEUM, 14.0));
        // Long flights pull out before coming back in
        assert!(lowest_zoom < 10.0);
    }

    #[test]
    fn test_flight_starts_at_current_view() {
        let fly = CameraOptions::default().fly_to(COLOSSEUM);
        let mut flight = FlyToAnimation::new(&viewport(TAJ_MAHAL, 14.0), &fly);

        let (center, zoom) = flight.update(0.0);
        assert!((center.lat - TAJ_MAHAL.lat).abs() < 1e-6);
        assert!((center.lng - TAJ_MAHAL.lng).abs() < 1e-6);
        assert!((zoom - 14.0).abs() < 1e-6);
    }

    #[test]
    fn test_flight_to_current_view_is_instant() {
        let fly = CameraOptions::default().fly_to(TAJ_MAHAL);
        let mut flight = FlyToAnimation::new(&viewport(TAJ_MAHAL, 14.0), &fly);

        assert_eq!(flight.duration(), 0.0);
        assert_eq!(flight.update(0.0), (TAJ_MAHAL, 14.0));
        assert!(flight.is_finished());
    }

    #[test]
    fn test_zoom_only_flight() {
        let fly = CameraOptions::default().fly_to(TAJ_MAHAL);
        let mut flight = FlyToAnimation::new(&viewport(TAJ_MAHAL, 12.0), &fly);

        assert!(flight.duration() > 0.0);
        let (center, zoom) = flight.update(flight.duration() / 2.0);
        assert!((center.lat - TAJ_MAHAL.lat).abs() < 1e-6);
        assert!(zoom > 12.0 && zoom < 14.0);
    }

    #[test]
    fn test_faster_flight_is_shorter() {
        let vp = viewport(TAJ_MAHAL, 14.0);
        let slow = FlyTo {
            speed: 1.0,
            ..CameraOptions::default().fly_to(COLOSSEUM)
        };
        let fast = CameraOptions::default().fly_to(COLOSSEUM);
        assert!(
            FlyToAnimation::new(&vp, &fast).duration() < FlyToAnimation::new(&vp, &slow).duration()
        );
    }

    #[test]
    fn test_marker_glide() {
        let mut glide = MarkerGlide::new(TAJ_MAHAL, COLOSSEUM, MarkerSpeed::MAX);
        let slow = MarkerGlide::new(TAJ_MAHAL, COLOSSEUM, MarkerSpeed::MIN);
        assert!(glide.duration() < slow.duration());

        let mid = glide.update(glide.duration() / 2.0);
        assert!(mid.lat > TAJ_MAHAL.lat && mid.lat < COLOSSEUM.lat);
        assert!(!glide.is_finished());

        assert_eq!(glide.update(10.0), COLOSSEUM);
        assert!(glide.is_finished());
    }
}
