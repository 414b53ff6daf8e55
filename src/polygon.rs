//! Closed outline polygons.

use crate::primitives::Point2;
use num_traits::Float;

/// A closed polygon represented as a sequence of vertices.
///
/// The polygon is implicitly closed (the last vertex connects to the first).
/// Stroke outlines are emitted left side forward, around the end, right side
/// backward and around the start. They may overlap themselves at caps and
/// sharp corners, so fill them with the non-zero rule.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon<F> {
    /// The vertices of the polygon in drawing order.
    pub vertices: Vec<Point2<F>>,
}

impl<F: Float> Polygon<F> {
    /// Creates a new polygon from vertices.
    #[inline]
    pub fn new(vertices: Vec<Point2<F>>) -> Self {
        Self { vertices }
    }

    /// Creates an empty polygon, meaning "nothing to draw".
    #[inline]
    pub fn empty() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Consumes the polygon, returning its vertices.
    #[inline]
    pub fn into_vertices(self) -> Vec<Point2<F>> {
        self.vertices
    }

    /// Returns the signed area of the polygon using the shoelace formula.
    ///
    /// Positive for CCW winding, negative for CW winding.
    pub fn signed_area(&self) -> F {
        let n = self.vertices.len();
        if n < 3 {
            return F::zero();
        }

        let mut area = F::zero();
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            area = area + a.x * b.y - b.x * a.y;
        }

        area / (F::one() + F::one())
    }

    /// Returns the absolute area of the polygon.
    pub fn area(&self) -> F {
        self.signed_area().abs()
    }

    /// Returns the length of the closed boundary.
    pub fn perimeter(&self) -> F {
        let n = self.vertices.len();
        if n < 2 {
            return F::zero();
        }

        (0..n).fold(F::zero(), |acc, i| {
            acc + self.vertices[i].distance(self.vertices[(i + 1) % n])
        })
    }

    /// Returns the bounding box as (min, max) points.
    pub fn bounding_box(&self) -> Option<(Point2<F>, Point2<F>)> {
        let first = *self.vertices.first()?;
        let bounds = self.vertices[1..]
            .iter()
            .fold((first, first), |(min, max), v| {
                (
                    Point2::new(min.x.min(v.x), min.y.min(v.y)),
                    Point2::new(max.x.max(v.x), max.y.max(v.y)),
                )
            });
        Some(bounds)
    }

    /// Tests if a point is inside the polygon using ray casting (even-odd rule).
    ///
    /// Points on the boundary may return either true or false. Regions where
    /// the outline overlaps itself an even number of times count as outside.
    pub fn contains(&self, point: Point2<F>) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];

            if ((vi.y > point.y) != (vj.y > point.y))
                && (point.x < (vj.x - vi.x) * (point.y - vi.y) / (vj.y - vi.y) + vi.x)
            {
                inside = !inside;
            }
            j = i;
        }

        inside
    }
}

impl<F: Float> From<Polygon<F>> for Vec<Point2<F>> {
    fn from(polygon: Polygon<F>) -> Self {
        polygon.vertices
    }
}
