//! Raw pointer samples accepted by the resampler.

use crate::error::FreehandError;
use crate::primitives::Point2;
use num_traits::Float;

use super::{constant, DEFAULT_PRESSURE};

/// A raw input sample: a position and an optional pen pressure.
///
/// Pressure is expected in `[0, 1]`. `None` means the device did not report
/// one; a negative value is also treated as "unspecified" and replaced when
/// stroke points are built.
///
/// Conversions exist from the usual shapes a caller has on hand:
///
/// ```
/// use freehand::stroke::InputPoint;
///
/// let a: InputPoint<f64> = [1.0, 2.0].into();
/// let b: InputPoint<f64> = (1.0, 2.0, 0.7).into();
/// let c = InputPoint::<f64>::try_from(&[1.0, 2.0, 0.7][..]).unwrap();
///
/// assert_eq!(a.pressure, None);
/// assert_eq!(b, c);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputPoint<F> {
    pub x: F,
    pub y: F,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pressure: Option<F>,
}

impl<F: Float> InputPoint<F> {
    /// Creates a sample without pressure.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self {
            x,
            y,
            pressure: None,
        }
    }

    /// Creates a sample with pressure.
    #[inline]
    pub fn with_pressure(x: F, y: F, pressure: F) -> Self {
        Self {
            x,
            y,
            pressure: Some(pressure),
        }
    }

    /// The sample position.
    #[inline]
    pub fn position(&self) -> Point2<F> {
        Point2::new(self.x, self.y)
    }

    /// Pressure with an absent value replaced by the default.
    ///
    /// Negative pressures pass through unchanged; the resampler decides how
    /// to substitute them depending on where the sample lands in the stroke.
    #[inline]
    pub fn pressure_or_default(&self) -> F {
        self.pressure.unwrap_or_else(|| constant(DEFAULT_PRESSURE))
    }
}

impl<F: Float> From<[F; 2]> for InputPoint<F> {
    fn from([x, y]: [F; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<[F; 3]> for InputPoint<F> {
    fn from([x, y, pressure]: [F; 3]) -> Self {
        Self::with_pressure(x, y, pressure)
    }
}

impl<F: Float> From<(F, F)> for InputPoint<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float> From<(F, F, F)> for InputPoint<F> {
    fn from((x, y, pressure): (F, F, F)) -> Self {
        Self::with_pressure(x, y, pressure)
    }
}

impl<F: Float> From<Point2<F>> for InputPoint<F> {
    fn from(p: Point2<F>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl<F: Float> TryFrom<&[F]> for InputPoint<F> {
    type Error = FreehandError;

    fn try_from(values: &[F]) -> Result<Self, Self::Error> {
        match *values {
            [x, y] => Ok(Self::new(x, y)),
            [x, y, pressure] => Ok(Self::with_pressure(x, y, pressure)),
            _ => Err(FreehandError::InvalidPointArity { len: values.len() }),
        }
    }
}
