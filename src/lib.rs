//! freehand - Pressure-sensitive ink strokes
//!
//! Turns raw pointer samples (position plus optional pen pressure) into a
//! closed polygon outlining a variable-width stroke, ready to be filled by
//! whatever renderer you have. Smoothing, speed-simulated pressure, tapers,
//! round or flat caps and rounded sharp corners are all handled here; drawing
//! the polygon is not.
//!
//! ```
//! use freehand::stroke::{get_stroke, StrokeOptions};
//!
//! let samples: Vec<(f64, f64, f64)> =
//!     vec![(0.0, 0.0, 0.4), (20.0, 5.0, 0.6), (45.0, 6.0, 0.7), (70.0, 2.0, 0.5)];
//! let outline = get_stroke(&samples, &StrokeOptions::with_size(10.0).last(true));
//! assert!(!outline.is_empty());
//! ```

pub mod error;
pub mod io;
pub mod polygon;
pub mod primitives;
pub mod stroke;

pub use error::FreehandError;
pub use polygon::Polygon;
pub use primitives::{Point2, Vec2};
pub use stroke::{build_outline, get_stroke, resample, stroke_radius, StrokePoint};
