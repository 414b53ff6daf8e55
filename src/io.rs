//! SVG path export for stroke outlines.
//!
//! # Example
//!
//! ```
//! use freehand::io::outline_to_svg_path;
//! use freehand::stroke::{get_stroke, StrokeOptions};
//!
//! let samples: Vec<[f64; 2]> = (0..20).map(|i| [i as f64 * 4.0, 0.0]).collect();
//! let outline = get_stroke(&samples, &StrokeOptions::<f64>::default().last(true));
//!
//! let d = outline_to_svg_path(&outline);
//! assert!(d.starts_with("M"));
//! assert!(d.ends_with("Z"));
//! ```

use crate::polygon::Polygon;
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt;

/// Converts an outline to smooth SVG path data.
///
/// Consecutive vertices become quadratic curves through their midpoints,
/// which hides the faceting of the caps and joints. Returns an empty string
/// for an empty outline.
pub fn outline_to_svg_path<F: Float + fmt::Display>(outline: &Polygon<F>) -> String {
    let vertices = &outline.vertices;
    let Some(&first) = vertices.first() else {
        return String::new();
    };

    let mut d = String::new();
    d.push_str(&format!("M {} {} Q", first.x, first.y));

    let n = vertices.len();
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        let mid = a.lerp(b, F::one() / (F::one() + F::one()));
        d.push_str(&format!(" {} {} {} {}", a.x, a.y, mid.x, mid.y));
    }

    d.push_str(" Z");
    d
}

/// Converts a polyline to straight-segment SVG path data.
///
/// ```
/// use freehand::{Point2, io::polyline_to_svg_path};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(10.0, 10.0),
/// ];
///
/// assert_eq!(polyline_to_svg_path(&points, true), "M 0 0 L 10 0 L 10 10 Z");
/// ```
pub fn polyline_to_svg_path<F: Float + fmt::Display>(points: &[Point2<F>], closed: bool) -> String {
    let Some(first) = points.first() else {
        return String::new();
    };

    let mut d = String::new();
    d.push_str(&format!("M {} {}", first.x, first.y));
    for p in &points[1..] {
        d.push_str(&format!(" L {} {}", p.x, p.y));
    }

    if closed {
        d.push_str(" Z");
    }

    d
}
