//! Pressure to width mapping.

use num_traits::Float;

use super::easing::Easing;
use super::{constant, RATE_OF_PRESSURE_CHANGE};

/// Returns the outline radius for a point with the given `pressure`.
///
/// Computes `size * easing(0.5 - thinning * (0.5 - pressure))`. With zero
/// thinning the radius ignores pressure entirely; positive thinning shrinks
/// light strokes and widens heavy ones. The result is not clamped.
///
/// ```
/// use freehand::stroke::{stroke_radius, Easing};
///
/// assert_eq!(stroke_radius(16.0, 0.0, 0.9, Easing::Linear), 8.0);
/// assert_eq!(stroke_radius(16.0, 0.5, 1.0, Easing::Linear), 12.0);
/// ```
pub fn stroke_radius<F: Float>(size: F, thinning: F, pressure: F, easing: Easing<F>) -> F {
    let half = constant::<F>(0.5);
    size * easing.apply(half - thinning * (half - pressure))
}

/// Infers pressure from how far the pen moved since the last point.
///
/// Fast motion (a long `distance` relative to `size`) pulls the pressure
/// down; slow motion lets it recover toward 1. `previous` is the pressure
/// carried over from the last point.
pub fn simulate_pressure<F: Float>(previous: F, distance: F, size: F) -> F {
    let one = F::one();
    let speed = (distance / size).min(one);
    let rest = (one - speed).min(one);
    (previous + (rest - previous) * (speed * constant(RATE_OF_PRESSURE_CHANGE))).min(one)
}
