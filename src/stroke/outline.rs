//! Stroke points to a closed, variable-width outline.
//!
//! The builder walks the stroke once, offsetting each point to the left and
//! right by a pressure-derived radius, then stitches the two sides together
//! with an end cap and a start cap:
//!
//! ```text
//!   left side →→→→→→→→→→→→→→→→→→→→→→ end cap
//!                                        ↓
//!   start cap ←←←←←←←←←←←←←←←← right side
//! ```

use crate::polygon::Polygon;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;
use tracing::{debug, trace};

use super::options::OutlineOptions;
use super::pressure::{simulate_pressure, stroke_radius};
use super::resample::StrokePoint;
use super::{
    constant, CORNER_SEGMENTS, DOT_SEGMENTS, END_CAP_SEGMENTS, END_NOISE_LENGTH, FIXED_PI,
    MIN_RADIUS, PRESSURE_SEED_POINTS, START_CAP_SEGMENTS,
};

/// Builds the outline polygon for a sequence of stroke points.
///
/// Returns an empty polygon for empty input or a non-positive size. A lone
/// stroke point without tapers (or any lone point once the stroke is
/// complete) becomes a small circle.
///
/// # Example
///
/// ```
/// use freehand::stroke::{build_outline, resample, OutlineOptions, ResampleOptions};
///
/// let samples: Vec<[f64; 2]> = (0..20).map(|i| [i as f64 * 5.0, 0.0]).collect();
/// let points = resample(&samples, &ResampleOptions::<f64>::default());
/// let outline = build_outline(&points, &OutlineOptions::default());
///
/// assert!(outline.len() >= 4);
/// assert!(outline.area() > 0.0);
/// ```
pub fn build_outline<F: Float>(points: &[StrokePoint<F>], options: &OutlineOptions<F>) -> Polygon<F> {
    let (first, last) = match (points.first(), points.last()) {
        (Some(first), Some(last)) if options.size > F::zero() => (*first, *last),
        _ => {
            trace!(points = points.len(), "build_outline: nothing to draw");
            return Polygon::empty();
        }
    };

    let total_length = last.running_length;
    let taper_start = options.start.taper.length(options.size, total_length);
    let taper_end = options.end.taper.length(options.size, total_length);

    let sides = trace_sides(points, options, taper_start, taper_end);

    let first_point = first.point;
    let last_point = if points.len() > 1 {
        last.point
    } else {
        first_point + Vec2::splat(F::one())
    };

    let has_taper = taper_start > F::zero() || taper_end > F::zero();
    if points.len() == 1 && (!has_taper || options.last) {
        debug!("build_outline: single point stroke drawn as a dot");
        let radius = sides.first_radius.unwrap_or(sides.radius);
        return Polygon::new(dot(first_point, last_point, radius));
    }

    let start_cap = start_cap(&sides, first_point, points.len(), options, taper_start, taper_end);
    let end_cap = end_cap(
        &sides,
        last_point,
        last.vector,
        points.len(),
        options,
        taper_start,
        taper_end,
    );

    let Sides { left, right, .. } = sides;
    let mut vertices = Vec::with_capacity(left.len() + end_cap.len() + right.len() + start_cap.len());
    vertices.extend(left);
    vertices.extend(end_cap);
    vertices.extend(right.into_iter().rev());
    vertices.extend(start_cap);

    Polygon::new(vertices)
}

/// The two offset sides of a stroke and the radii needed to cap them.
#[derive(Debug)]
struct Sides<F> {
    left: Vec<Point2<F>>,
    right: Vec<Point2<F>>,
    /// Radius of the last processed point.
    radius: F,
    /// Radius of the first processed point, before tapering.
    first_radius: Option<F>,
}

fn trace_sides<F: Float>(
    points: &[StrokePoint<F>],
    options: &OutlineOptions<F>,
    taper_start: F,
    taper_end: F,
) -> Sides<F> {
    let size = options.size;
    let last_index = points.len() - 1;
    let total_length = points[last_index].running_length;
    let min_distance = (size * options.smoothing).powi(2);
    let end_noise = constant::<F>(END_NOISE_LENGTH);
    let two = F::one() + F::one();

    // Fast initial motion would otherwise start the stroke fat.
    let mut prev_pressure = points
        .iter()
        .take(PRESSURE_SEED_POINTS)
        .fold(points[0].pressure, |acc, p| {
            let pressure = if options.simulate_pressure {
                simulate_pressure(acc, p.distance, size)
            } else {
                p.pressure
            };
            (acc + pressure) / two
        });

    let mut radius = stroke_radius(size, options.thinning, points[last_index].pressure, options.easing);
    let mut first_radius = None;
    let mut prev_vector = points[0].vector;

    let mut left = Vec::with_capacity(points.len());
    let mut right = Vec::with_capacity(points.len());
    let mut pl = points[0].point;
    let mut pr = pl;

    for (i, sp) in points.iter().enumerate() {
        let is_last = i == last_index;

        // Samples right before a pen lift are mostly noise.
        if !is_last && total_length - sp.running_length < end_noise {
            continue;
        }

        let mut pressure = sp.pressure;
        if options.thinning != F::zero() {
            if options.simulate_pressure {
                pressure = simulate_pressure(prev_pressure, sp.distance, size);
            }
            radius = stroke_radius(size, options.thinning, pressure, options.easing);
        } else {
            radius = size / two;
        }

        if first_radius.is_none() {
            first_radius = Some(radius);
        }

        let ts = if sp.running_length < taper_start {
            options.start.easing.apply(sp.running_length / taper_start)
        } else {
            F::one()
        };
        let remaining = total_length - sp.running_length;
        let te = if remaining < taper_end {
            options.end.easing.apply(remaining / taper_end)
        } else {
            F::one()
        };
        radius = (radius * ts.min(te)).max(constant(MIN_RADIUS));

        if is_last {
            let offset = sp.vector.perpendicular_cw() * radius;
            left.push(sp.point - offset);
            right.push(sp.point + offset);
            continue;
        }

        let next_vector = points[i + 1].vector;
        let next_dpr = sp.vector.dot(next_vector);

        if next_dpr < F::zero() {
            // Turning back on itself: wrap a half circle around the point.
            trace!(index = i, "build_outline: sharp corner joint");
            let offset = prev_vector.perpendicular_cw() * radius;
            let from_left = sp.point - offset;
            let from_right = sp.point + offset;
            let fixed_pi = constant::<F>(FIXED_PI);
            let segments = constant::<F>(CORNER_SEGMENTS as f64);
            for step in 0..=CORNER_SEGMENTS {
                let angle = fixed_pi * constant(step as f64) / segments;
                pl = from_left.rotate_around(sp.point, angle);
                pr = from_right.rotate_around(sp.point, -angle);
                left.push(pl);
                right.push(pr);
            }
            continue;
        }

        let offset = next_vector.lerp(sp.vector, next_dpr).perpendicular_cw() * radius;

        let tl = sp.point - offset;
        if i <= 1 || pl.distance_squared(tl) > min_distance {
            left.push(tl);
            pl = tl;
        }

        let tr = sp.point + offset;
        if i <= 1 || pr.distance_squared(tr) > min_distance {
            right.push(tr);
            pr = tr;
        }

        prev_pressure = pressure;
        prev_vector = sp.vector;
    }

    Sides {
        left,
        right,
        radius,
        first_radius,
    }
}

/// A closed circle around `center`, used for single-point strokes.
fn dot<F: Float>(center: Point2<F>, toward: Point2<F>, radius: F) -> Vec<Point2<F>> {
    let start = center.project((center - toward).perpendicular_cw().normalize_or_zero(), -radius);
    let two_pi = constant::<F>(std::f64::consts::TAU);
    let segments = constant::<F>(DOT_SEGMENTS as f64);
    (1..=DOT_SEGMENTS)
        .map(|step| start.rotate_around(center, two_pi * constant(step as f64) / segments))
        .collect()
}

fn start_cap<F: Float>(
    sides: &Sides<F>,
    first_point: Point2<F>,
    len: usize,
    options: &OutlineOptions<F>,
    taper_start: F,
    taper_end: F,
) -> Vec<Point2<F>> {
    let (first_left, first_right) = match (sides.left.first(), sides.right.first()) {
        (Some(l), Some(r)) => (*l, *r),
        _ => return Vec::new(),
    };

    // A taper already narrows the start to a point.
    if taper_start > F::zero() || (taper_end > F::zero() && len == 1) {
        return Vec::new();
    }

    if options.start.cap {
        let fixed_pi = constant::<F>(FIXED_PI);
        let segments = constant::<F>(START_CAP_SEGMENTS as f64);
        (1..=START_CAP_SEGMENTS)
            .map(|step| {
                first_right.rotate_around(first_point, fixed_pi * constant(step as f64) / segments)
            })
            .collect()
    } else {
        let corners = first_left - first_right;
        let a = corners * constant(0.5);
        let b = corners * constant(0.51);
        vec![first_point - a, first_point - b, first_point + b, first_point + a]
    }
}

fn end_cap<F: Float>(
    sides: &Sides<F>,
    last_point: Point2<F>,
    last_vector: Vec2<F>,
    len: usize,
    options: &OutlineOptions<F>,
    taper_start: F,
    taper_end: F,
) -> Vec<Point2<F>> {
    if taper_end > F::zero() || (taper_start > F::zero() && len == 1) {
        return vec![last_point];
    }

    let radius = sides.radius;
    let direction = (-last_vector).perpendicular_cw();

    if options.end.cap {
        // One and a half turns, so the cap never folds over itself on a
        // sharp final turn.
        let start = last_point.project(direction, radius);
        let three_pi = constant::<F>(3.0 * std::f64::consts::PI);
        let segments = constant::<F>(END_CAP_SEGMENTS as f64);
        (1..END_CAP_SEGMENTS)
            .map(|step| start.rotate_around(last_point, three_pi * constant(step as f64) / segments))
            .collect()
    } else {
        let near = radius * constant(0.99);
        vec![
            last_point + direction * radius,
            last_point + direction * near,
            last_point - direction * near,
            last_point - direction * radius,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::options::{EndOptions, Taper};
    use crate::stroke::resample::resample;
    use crate::stroke::{Easing, ResampleOptions};
    use approx::assert_relative_eq;

    fn stroke_point(x: f64, y: f64, pressure: f64) -> StrokePoint<f64> {
        StrokePoint {
            point: Point2::new(x, y),
            pressure,
            vector: Vec2::zero(),
            distance: 0.0,
            running_length: 0.0,
        }
    }

    /// Stroke points along `coords` with pressure 0.5, annotated the way
    /// `resample` would annotate them.
    fn polyline(coords: &[(f64, f64)]) -> Vec<StrokePoint<f64>> {
        let mut points: Vec<StrokePoint<f64>> = Vec::with_capacity(coords.len());
        for &(x, y) in coords {
            let point = Point2::new(x, y);
            let sp = match points.last() {
                Some(prev) => {
                    let distance = prev.point.distance(point);
                    StrokePoint {
                        point,
                        pressure: 0.5,
                        vector: (prev.point - point).normalize_or_zero(),
                        distance,
                        running_length: prev.running_length + distance,
                    }
                }
                None => stroke_point(x, y, 0.5),
            };
            points.push(sp);
        }
        if points.len() > 1 {
            points[0].vector = points[1].vector;
        }
        points
    }

    fn horizontal_line(count: usize, spacing: f64, y: f64) -> Vec<StrokePoint<f64>> {
        let samples: Vec<[f64; 3]> = (0..count)
            .map(|i| [i as f64 * spacing, y, 0.5])
            .collect();
        resample(
            &samples,
            &ResampleOptions {
                last: true,
                ..Default::default()
            },
        )
    }

    fn flat_options(size: f64) -> OutlineOptions<f64> {
        OutlineOptions {
            size,
            thinning: 0.0,
            last: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input() {
        let outline = build_outline::<f64>(&[], &OutlineOptions::default());
        assert!(outline.is_empty());
    }

    #[test]
    fn test_non_positive_size() {
        let points = horizontal_line(20, 5.0, 0.0);
        for size in [0.0, -4.0] {
            let options = OutlineOptions {
                size,
                ..Default::default()
            };
            assert!(build_outline(&points, &options).is_empty());
        }
    }

    #[test]
    fn test_single_point_is_a_dot() {
        let points = [stroke_point(10.0, 20.0, 0.5)];
        let options = OutlineOptions {
            last: true,
            ..Default::default()
        };
        let outline = build_outline(&points, &options);

        assert_eq!(outline.len(), DOT_SEGMENTS);
        let expected = stroke_radius(16.0, 0.5, 0.5, Easing::Linear);
        for v in &outline.vertices {
            assert_relative_eq!(v.distance(Point2::new(10.0, 20.0)), expected, epsilon = 1e-9);
        }
        // The last step completes the turn back onto the start point.
        let start = outline.vertices[DOT_SEGMENTS - 1];
        assert_relative_eq!(outline.vertices[0].distance(start), 2.0 * expected * (std::f64::consts::PI / 13.0).sin(), epsilon = 1e-9);
    }

    #[test]
    fn test_single_point_with_taper_is_not_a_dot_until_complete() {
        let points = [stroke_point(0.0, 0.0, 0.5)];
        let tapered = OutlineOptions {
            start: EndOptions::start().taper(Taper::Distance(10.0)),
            last: false,
            ..Default::default()
        };
        let outline = build_outline(&points, &tapered);
        // left + end cap point + right, no start cap
        assert_eq!(outline.len(), 3);

        let complete = OutlineOptions {
            last: true,
            ..tapered
        };
        assert_eq!(build_outline(&points, &complete).len(), DOT_SEGMENTS);
    }

    #[test]
    fn test_straight_line_has_constant_width() {
        let size = 10.0;
        let points = horizontal_line(30, 4.0, 7.0);
        let options = flat_options(size);
        let total = points.last().unwrap().running_length;
        let sides = trace_sides(&points, &options, 0.0, 0.0);

        assert!(!sides.left.is_empty());
        assert_eq!(sides.left.len(), sides.right.len());
        for p in &sides.left {
            assert_relative_eq!(p.y, 7.0 - size / 2.0, epsilon = 1e-9);
        }
        for p in &sides.right {
            assert_relative_eq!(p.y, 7.0 + size / 2.0, epsilon = 1e-9);
        }
        assert!(total > 0.0);
    }

    #[test]
    fn test_outline_order_and_cap_sizes() {
        let points = horizontal_line(30, 4.0, 0.0);
        let options = flat_options(10.0);
        let sides = trace_sides(&points, &options, 0.0, 0.0);
        let outline = build_outline(&points, &options);

        let expected = sides.left.len() + (END_CAP_SEGMENTS - 1) + sides.right.len() + START_CAP_SEGMENTS;
        assert_eq!(outline.len(), expected);
        assert_eq!(outline.vertices[0], sides.left[0]);

        // The start cap sweeps from the right side back around to the left.
        let last = *outline.vertices.last().unwrap();
        assert_relative_eq!(last.x, sides.left[0].x, epsilon = 1e-3);
        assert_relative_eq!(last.y, sides.left[0].y, epsilon = 1e-3);
    }

    #[test]
    fn test_round_caps_extend_past_endpoints() {
        let points = horizontal_line(30, 4.0, 0.0);
        let outline = build_outline(&points, &flat_options(10.0));
        let (min, max) = outline.bounding_box().unwrap();
        let end = points.last().unwrap().point;

        // Arc vertices sit on the circle but need not hit its extremes.
        assert_relative_eq!(min.x, -5.0, epsilon = 0.1);
        assert_relative_eq!(max.x, end.x + 5.0, epsilon = 0.1);
        assert!(min.x >= -5.0 - 1e-9);
        assert_relative_eq!(min.y, -5.0, epsilon = 1e-9);
        assert_relative_eq!(max.y, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_flat_caps() {
        let points = horizontal_line(30, 4.0, 0.0);
        let options = OutlineOptions {
            start: EndOptions::start().cap(false),
            end: EndOptions::end().cap(false),
            ..flat_options(10.0)
        };
        let sides = trace_sides(&points, &options, 0.0, 0.0);
        let outline = build_outline(&points, &options);

        assert_eq!(outline.len(), sides.left.len() + 4 + sides.right.len() + 4);
        let (min, max) = outline.bounding_box().unwrap();
        assert_relative_eq!(min.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(max.x, points.last().unwrap().point.x, epsilon = 1e-9);
        assert_relative_eq!(outline.area(), max.x * 10.0, epsilon = 1.0);
    }

    #[test]
    fn test_tapers_drop_caps() {
        let points = horizontal_line(40, 4.0, 0.0);
        let options = OutlineOptions {
            start: EndOptions::start().taper(Taper::Distance(30.0)),
            end: EndOptions::end().taper(Taper::Full),
            ..flat_options(10.0)
        };
        let sides = trace_sides(&points, &options, 30.0, points.last().unwrap().running_length);
        let outline = build_outline(&points, &options);

        // End cap collapses to the last point and there is no start cap.
        assert_eq!(outline.len(), sides.left.len() + 1 + sides.right.len());
        assert_eq!(outline.vertices[sides.left.len()], points.last().unwrap().point);

        // Radius is floored, never zero.
        let first_width = sides.left[0].distance(sides.right[0]);
        assert_relative_eq!(first_width, 2.0 * MIN_RADIUS, epsilon = 1e-9);
    }

    #[test]
    fn test_taper_narrows_start() {
        let points = horizontal_line(40, 4.0, 0.0);
        let options = OutlineOptions {
            start: EndOptions::start().taper(Taper::Distance(60.0)),
            ..flat_options(10.0)
        };
        let sides = trace_sides(&points, &options, 60.0, 0.0);
        let widths: Vec<f64> = sides
            .left
            .iter()
            .zip(&sides.right)
            .map(|(l, r)| l.distance(*r))
            .collect();
        assert!(widths[0] < widths[widths.len() / 2]);
        assert_relative_eq!(*widths.last().unwrap(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sharp_corner_inserts_joint() {
        let mut samples: Vec<[f64; 2]> = (0..20).map(|i| [i as f64 * 5.0, 0.0]).collect();
        samples.extend((1..20).map(|i| [95.0 - i as f64 * 5.0, 0.5]));
        let points = resample(
            &samples,
            &ResampleOptions {
                streamline: 0.0,
                size: 0.0,
                last: true,
            },
        );
        assert_eq!(points.len(), 39);

        let options = OutlineOptions {
            smoothing: 0.0,
            ..flat_options(8.0)
        };
        let sides = trace_sides(&points, &options, 0.0, 0.0);

        // 37 regular points, one corner, one final point.
        assert_eq!(sides.left.len(), 37 + CORNER_SEGMENTS + 1 + 1);
        assert_eq!(sides.right.len(), sides.left.len());

        let corner = Point2::new(95.0, 0.0);
        let on_joint = |side: &[Point2<f64>]| {
            side.iter()
                .filter(|p| (p.distance(corner) - 4.0).abs() < 1e-9)
                .count()
        };
        assert_eq!(on_joint(&sides.left), CORNER_SEGMENTS + 1);
        assert_eq!(on_joint(&sides.right), CORNER_SEGMENTS + 1);
    }

    #[test]
    fn test_corner_keeps_previous_direction() {
        // Indices 10 and 11 are both corners; index 9 is the last regular point.
        let mut coords: Vec<(f64, f64)> = (0..10).map(|i| (i as f64 * 5.0, 0.0)).collect();
        coords.extend([(50.0, 2.0), (40.0, 3.0), (50.0, 4.0), (60.0, 4.0), (70.0, 4.0)]);
        let points = polyline(&coords);

        let options = OutlineOptions {
            smoothing: 0.0,
            ..flat_options(8.0)
        };
        let sides = trace_sides(&points, &options, 0.0, 0.0);

        // The second joint starts from the direction of index 9, not index 10.
        let second_joint = sides.left[10 + CORNER_SEGMENTS + 1];
        assert_relative_eq!(second_joint.x, 40.0, epsilon = 1e-9);
        assert_relative_eq!(second_joint.y, -1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_corner_keeps_previous_pressure() {
        // Thirteen points along x, then a turn back at index 12.
        let mut coords: Vec<(f64, f64)> = (0..13).map(|i| (i as f64 * 4.0, 0.0)).collect();
        coords.extend([(44.0, 1.0), (40.0, 1.0), (36.0, 1.0), (32.0, 1.0)]);
        let slow = polyline(&coords);
        let mut fast = slow.clone();
        fast[12].distance = 40.0;

        let options = OutlineOptions {
            size: 10.0,
            thinning: 0.5,
            smoothing: 0.0,
            simulate_pressure: true,
            last: true,
            ..Default::default()
        };
        let slow = trace_sides(&slow, &options, 0.0, 0.0);
        let fast = trace_sides(&fast, &options, 0.0, 0.0);

        // The joint uses the corner's own pressure.
        assert!(slow.left[12 + 1].distance(fast.left[12 + 1]) > 1e-6);
        // The point after the corner does not.
        let after = 12 + CORNER_SEGMENTS + 1;
        assert_eq!(slow.left[after], fast.left[after]);
        assert_eq!(slow.right[after], fast.right[after]);
    }

    #[test]
    fn test_smoothing_merges_close_contour_points() {
        let coords: Vec<(f64, f64)> = (0..=40).map(|i| (i as f64, 0.0)).collect();
        let points = polyline(&coords);
        let count = |smoothing: f64| {
            let options = OutlineOptions {
                smoothing,
                ..flat_options(10.0)
            };
            trace_sides(&points, &options, 0.0, 0.0).left.len()
        };
        assert!(count(0.0) > count(0.3));
        assert!(count(0.3) > count(2.0));

        let options = OutlineOptions {
            smoothing: 0.3,
            ..flat_options(10.0)
        };
        let left = trace_sides(&points, &options, 0.0, 0.0).left;

        // The first two points are always kept, however close.
        assert_relative_eq!(left[0].x, 0.0);
        assert_relative_eq!(left[1].x, 1.0);
        // Past them, kept points are more than size * smoothing apart.
        for pair in left[1..left.len() - 1].windows(2) {
            assert!(pair[0].distance(pair[1]) > 3.0);
        }
    }

    #[test]
    fn test_trailing_points_are_trimmed() {
        let coords: Vec<(f64, f64)> = (0..=20).map(|i| (i as f64, 0.0)).collect();
        let points = polyline(&coords);
        let options = OutlineOptions {
            smoothing: 0.0,
            ..flat_options(10.0)
        };
        let sides = trace_sides(&points, &options, 0.0, 0.0);

        // Points 18 and 19 lie within END_NOISE_LENGTH of the end.
        assert_eq!(sides.left.len(), 19);
        assert_relative_eq!(sides.left[17].x, 17.0);
        assert_relative_eq!(sides.left[18].x, 20.0);
        assert!(sides.right.iter().all(|p| p.x <= 17.0 || p.x == 20.0));
    }

    #[test]
    fn test_thinning_follows_pressure() {
        let light: Vec<[f64; 3]> = (0..30).map(|i| [i as f64 * 4.0, 0.0, 0.1]).collect();
        let heavy: Vec<[f64; 3]> = (0..30).map(|i| [i as f64 * 4.0, 0.0, 0.9]).collect();
        let resample_options: ResampleOptions<f64> = ResampleOptions {
            last: true,
            ..Default::default()
        };
        let options = OutlineOptions {
            thinning: 0.8,
            simulate_pressure: false,
            last: true,
            ..Default::default()
        };

        let light = build_outline(&resample(&light, &resample_options), &options);
        let heavy = build_outline(&resample(&heavy, &resample_options), &options);
        assert!(heavy.area() > light.area());
    }

    #[test]
    fn test_deterministic() {
        let samples: Vec<(f64, f64, f64)> = (0..80)
            .map(|i| {
                let t = i as f64 * 0.1;
                (t.cos() * 50.0 * t, t.sin() * 50.0, 0.5 + 0.4 * (t * 3.0).sin())
            })
            .collect();
        let points = resample(&samples, &ResampleOptions::<f64>::default());
        let options = OutlineOptions::default();

        let a = build_outline(&points, &options);
        let b = build_outline(&points, &options);
        assert_eq!(a, b);
    }

    #[test]
    fn test_short_stroke_never_empty() {
        for count in 2..8 {
            let samples: Vec<[f64; 2]> = (0..count).map(|i| [i as f64 * 0.3, i as f64 * 0.1]).collect();
            for last in [false, true] {
                let points = resample(
                    &samples,
                    &ResampleOptions::<f64> {
                        last,
                        ..Default::default()
                    },
                );
                let outline = build_outline(
                    &points,
                    &OutlineOptions {
                        last,
                        ..Default::default()
                    },
                );
                assert!(outline.len() >= 4, "count {count} last {last}");
                assert!(outline.vertices.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
            }
        }
    }
}
