//! Input smoothing: raw samples to annotated stroke points.
//!
//! Each sample is pulled toward the previous stroke point by a low-pass
//! filter whose strength comes from `streamline`. The first `size` units of
//! travel are absorbed so pen-down jitter does not bend the stroke start.

use crate::primitives::{Point2, Vec2};
use num_traits::Float;
use tracing::trace;

use super::input::InputPoint;
use super::options::ResampleOptions;
use super::{constant, DEFAULT_FIRST_PRESSURE, DEFAULT_PRESSURE};

/// A resampled point annotated with everything the outline builder needs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrokePoint<F> {
    /// Smoothed position.
    pub point: Point2<F>,
    /// Pen pressure in `[0, 1]`.
    pub pressure: F,
    /// Unit direction pointing back toward the previous stroke point.
    pub vector: Vec2<F>,
    /// Distance from the previous stroke point.
    pub distance: F,
    /// Cumulative distance from the first stroke point.
    pub running_length: F,
}

/// Smooths raw samples into a sequence of [`StrokePoint`]s.
///
/// The output starts at the first sample, has non-decreasing
/// `running_length`, and each `distance` is the step from its predecessor.
/// The first point's `vector` copies the second's (or is zero when there
/// is only one point).
///
/// # Example
///
/// ```
/// use freehand::stroke::{resample, ResampleOptions};
///
/// let options: ResampleOptions<f64> = ResampleOptions { last: true, ..Default::default() };
/// let points = resample(&[[0.0, 0.0], [10.0, 0.0], [20.0, 0.0]], &options);
///
/// let end = points.last().unwrap();
/// assert_eq!((end.point.x, end.point.y), (20.0, 0.0));
/// ```
pub fn resample<F, P>(points: &[P], options: &ResampleOptions<F>) -> Vec<StrokePoint<F>>
where
    F: Float,
    P: Copy + Into<InputPoint<F>>,
{
    if points.is_empty() {
        return Vec::new();
    }

    let samples = normalize_samples(points);
    let last_index = samples.len() - 1;

    let t = constant::<F>(0.15) + (F::one() - options.streamline) * constant(0.85);

    let first = samples[0];
    let mut stroke_points = Vec::with_capacity(samples.len());
    stroke_points.push(StrokePoint {
        point: first.0,
        pressure: if first.1 >= F::zero() {
            first.1
        } else {
            constant(DEFAULT_FIRST_PRESSURE)
        },
        vector: Vec2::splat(F::one()),
        distance: F::zero(),
        running_length: F::zero(),
    });

    let mut prev = stroke_points[0];
    let mut travelled = F::zero();
    let mut gate_open = false;

    for (i, &(position, pressure)) in samples.iter().enumerate().skip(1) {
        let is_last = i == last_index;

        let point = if is_last && options.last {
            position
        } else {
            prev.point.lerp(position, t)
        };

        if point == prev.point {
            continue;
        }

        let distance = point.distance(prev.point);
        travelled = travelled + distance;

        if !is_last && !gate_open {
            if travelled < options.size {
                continue;
            }
            trace!(index = i, "resample: start-of-stroke noise gate crossed");
            gate_open = true;
        }

        prev = StrokePoint {
            point,
            pressure: if pressure >= F::zero() {
                pressure
            } else {
                constant(DEFAULT_PRESSURE)
            },
            vector: (prev.point - point).normalize_or_zero(),
            distance,
            running_length: prev.running_length + distance,
        };
        stroke_points.push(prev);
    }

    stroke_points[0].vector = stroke_points
        .get(1)
        .map(|p| p.vector)
        .unwrap_or_else(Vec2::zero);

    stroke_points
}

/// Expands raw samples into `(position, pressure)` pairs, padding one- and
/// two-sample input so a direction can always be established.
fn normalize_samples<F, P>(points: &[P]) -> Vec<(Point2<F>, F)>
where
    F: Float,
    P: Copy + Into<InputPoint<F>>,
{
    let mut samples: Vec<(Point2<F>, F)> = points
        .iter()
        .map(|&p| {
            let p: InputPoint<F> = p.into();
            (p.position(), p.pressure_or_default())
        })
        .collect();

    match samples.len() {
        1 => {
            let (position, pressure) = samples[0];
            samples.push((position + Vec2::splat(F::one()), pressure));
        }
        2 => {
            // A lone segment gives every stroke point the same direction,
            // which leaves tapers with nothing to work with.
            let (a, pa) = samples[0];
            let end = samples[1];
            let (b, pb) = end;
            samples.truncate(1);
            for step in 1..4 {
                let s = constant::<F>(step as f64 / 4.0);
                samples.push((a.lerp(b, s), pa + (pb - pa) * s));
            }
            samples.push(end);
        }
        _ => {}
    }

    samples
}
