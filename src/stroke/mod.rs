//! Freehand ink strokes from pressure-sensitive pointer samples.
//!
//! The pipeline has two stages:
//!
//! 1. [`resample`] smooths raw samples into [`StrokePoint`]s annotated with
//!    pressure, direction and running length.
//! 2. [`build_outline`] offsets those points by a pressure-derived radius,
//!    adds corner joints, tapers and caps, and returns a closed polygon.
//!
//! [`get_stroke`] runs both. Everything here is a pure function of its
//! arguments; callers recompute the whole outline whenever a sample arrives.
//!
//! # Example
//!
//! ```
//! use freehand::stroke::{get_stroke, StrokeOptions};
//!
//! let samples: [[f64; 3]; 5] = [
//!     [0.0, 0.0, 0.5],
//!     [12.0, 3.0, 0.6],
//!     [30.0, 8.0, 0.7],
//!     [55.0, 10.0, 0.6],
//!     [80.0, 9.0, 0.4],
//! ];
//!
//! let outline = get_stroke(&samples, &StrokeOptions::with_size(8.0).last(true));
//! assert!(outline.len() >= 4);
//! ```

mod easing;
mod input;
mod options;
mod outline;
mod pressure;
mod resample;

pub use easing::Easing;
pub use input::InputPoint;
pub use options::{EndOptions, OutlineOptions, ResampleOptions, StrokeOptions, Taper};
pub use outline::build_outline;
pub use pressure::{simulate_pressure, stroke_radius};
pub use resample::{resample, StrokePoint};

use crate::polygon::Polygon;
use num_traits::Float;

/// How quickly simulated pressure follows changes in speed.
pub const RATE_OF_PRESSURE_CHANGE: f64 = 0.275;

/// Slightly more than π, so half-turn arcs overlap their seam instead of
/// leaving a hairline gap.
pub const FIXED_PI: f64 = std::f64::consts::PI + 0.0001;

/// Steps in a sharp-corner joint (each side gets `CORNER_SEGMENTS + 1` points).
pub const CORNER_SEGMENTS: usize = 13;

/// Points in a round start cap.
pub const START_CAP_SEGMENTS: usize = 13;

/// Points in the circle drawn for a single-point stroke.
pub const DOT_SEGMENTS: usize = 13;

/// Divisions of the round end cap sweep (the cap has `END_CAP_SEGMENTS - 1` points).
pub const END_CAP_SEGMENTS: usize = 29;

/// Smallest radius an outline point may have.
pub const MIN_RADIUS: f64 = 0.01;

/// Stroke points closer than this to the end of the stroke are dropped,
/// except the final one.
pub const END_NOISE_LENGTH: f64 = 3.0;

/// Number of leading stroke points used to seed simulated pressure.
pub const PRESSURE_SEED_POINTS: usize = 10;

/// Pressure assumed when a sample has none.
pub const DEFAULT_PRESSURE: f64 = 0.5;

/// Pressure assumed for the first stroke point when its sample reports a
/// negative value.
pub const DEFAULT_FIRST_PRESSURE: f64 = 0.25;

/// Turns raw samples straight into an outline polygon.
///
/// Equivalent to [`resample`] followed by [`build_outline`] with the
/// matching halves of `options`.
pub fn get_stroke<F, P>(points: &[P], options: &StrokeOptions<F>) -> Polygon<F>
where
    F: Float,
    P: Copy + Into<InputPoint<F>>,
{
    let stroke_points = resample(points, &options.resample_options());
    build_outline(&stroke_points, &options.outline_options())
}

/// Converts an `f64` constant into the working float type.
#[inline]
pub(crate) fn constant<F: Float>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::nan)
}
