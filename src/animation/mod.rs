pub mod interpolation;
pub mod transitions;

// Re-export commonly used types and functions for convenience
pub use interpolation::{EasingFunction, Interpolation};
pub use transitions::{FlyToAnimation, MarkerGlide, TransitionState};
