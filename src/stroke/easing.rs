//! Easing curves used for pressure-to-width mapping and tapers.

use num_traits::Float;

/// An easing curve mapping `t` to an eased value.
///
/// The named curves cover the defaults the outline builder uses; anything
/// else can be supplied as a plain function with [`Easing::Custom`].
///
/// ```
/// use freehand::stroke::Easing;
///
/// assert_eq!(Easing::Linear.apply(0.3_f64), 0.3);
/// assert_eq!(Easing::EaseOutQuad.apply(0.5_f64), 0.75);
/// assert_eq!(Easing::<f64>::Custom(|t| t * t).apply(0.5), 0.25);
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing<F> {
    /// Identity, `t`.
    Linear,
    /// `t * t`.
    EaseInQuad,
    /// `t * (2 - t)`. Default for the start taper.
    EaseOutQuad,
    /// `(t - 1)^3 + 1`. Default for the end taper.
    EaseOutCubic,
    /// Cubic ease-in for `t < 0.5`, ease-out above.
    EaseInOutCubic,
    /// Caller-supplied curve.
    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(fn(F) -> F),
}

impl<F: Float> Easing<F> {
    /// Evaluates the curve at `t`.
    pub fn apply(&self, t: F) -> F {
        let one = F::one();
        let two = one + one;
        match *self {
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => t * (two - t),
            Easing::EaseOutCubic => {
                let u = t - one;
                u * u * u + one
            }
            Easing::EaseInOutCubic => {
                if t < one / two {
                    (two + two) * t * t * t
                } else {
                    let u = -two * t + two;
                    one - u * u * u / two
                }
            }
            Easing::Custom(f) => f(t),
        }
    }
}

impl<F> Default for Easing<F> {
    fn default() -> Self {
        Easing::Linear
    }
}
