//! Options controlling resampling and outline construction.
//!
//! [`StrokeOptions`] is the full bundle a caller normally keeps per brush.
//! The two transforms each take the narrower view they need,
//! [`ResampleOptions`] and [`OutlineOptions`].

use crate::error::FreehandError;
use num_traits::Float;

use super::constant;
use super::easing::Easing;

/// How far a stroke end narrows to a point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Taper<F> {
    /// No taper.
    #[default]
    None,
    /// Taper over this many units of running length.
    Distance(F),
    /// Taper over the whole stroke (at least `size` units).
    Full,
}

impl<F: Float> Taper<F> {
    /// Resolves the taper to a length for a stroke of `total_length`.
    ///
    /// A result of zero means no taper is configured.
    pub fn length(&self, size: F, total_length: F) -> F {
        match *self {
            Taper::None => F::zero(),
            Taper::Distance(d) => d,
            Taper::Full => size.max(total_length),
        }
    }
}

/// Cap and taper settings for one end of a stroke.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndOptions<F> {
    /// Round cap when `true`, flat cap when `false`. Ignored while tapering.
    pub cap: bool,
    /// Taper length.
    pub taper: Taper<F>,
    /// Easing applied to the taper progress.
    pub easing: Easing<F>,
}

impl<F: Float> EndOptions<F> {
    /// Defaults for the start of a stroke: rounded cap, no taper, `t * (2 - t)` easing.
    pub fn start() -> Self {
        Self {
            cap: true,
            taper: Taper::None,
            easing: Easing::EaseOutQuad,
        }
    }

    /// Defaults for the end of a stroke: rounded cap, no taper, `(t - 1)^3 + 1` easing.
    pub fn end() -> Self {
        Self {
            cap: true,
            taper: Taper::None,
            easing: Easing::EaseOutCubic,
        }
    }

    /// Sets the cap style.
    pub fn cap(mut self, cap: bool) -> Self {
        self.cap = cap;
        self
    }

    /// Sets the taper.
    pub fn taper(mut self, taper: Taper<F>) -> Self {
        self.taper = taper;
        self
    }

    /// Sets the taper easing.
    pub fn easing(mut self, easing: Easing<F>) -> Self {
        self.easing = easing;
        self
    }
}

/// Options for [`resample`](super::resample).
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResampleOptions<F> {
    /// Input smoothing in `[0, 1]`; higher values lag further behind the pen.
    pub streamline: F,
    /// Stroke size; also the length of the start-of-stroke noise gate.
    pub size: F,
    /// Whether the stroke is complete, in which case the final sample is kept verbatim.
    pub last: bool,
}

impl<F: Float> Default for ResampleOptions<F> {
    fn default() -> Self {
        Self {
            streamline: constant(0.5),
            size: constant(16.0),
            last: false,
        }
    }
}

/// Options for [`build_outline`](super::build_outline).
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutlineOptions<F> {
    /// Base diameter of the stroke.
    pub size: F,
    /// How strongly pressure changes the width. Zero gives a constant width.
    pub thinning: F,
    /// Softens the outline by merging nearby contour points.
    pub smoothing: F,
    /// Derive pressure from speed instead of the input samples.
    pub simulate_pressure: bool,
    /// Easing applied to pressure before it becomes a radius.
    pub easing: Easing<F>,
    /// Start cap and taper.
    pub start: EndOptions<F>,
    /// End cap and taper.
    pub end: EndOptions<F>,
    /// Whether the stroke is complete.
    pub last: bool,
}

impl<F: Float> Default for OutlineOptions<F> {
    fn default() -> Self {
        Self {
            size: constant(16.0),
            thinning: constant(0.5),
            smoothing: constant(0.5),
            simulate_pressure: true,
            easing: Easing::Linear,
            start: EndOptions::start(),
            end: EndOptions::end(),
            last: false,
        }
    }
}

/// Complete configuration for turning samples into an outline.
///
/// # Example
///
/// ```
/// use freehand::stroke::{EndOptions, StrokeOptions, Taper};
///
/// let options = StrokeOptions::with_size(8.0)
///     .thinning(0.7)
///     .streamline(0.3)
///     .end(EndOptions::end().taper(Taper::Distance(40.0)))
///     .last(true);
///
/// assert!(options.validate().is_ok());
/// assert_eq!(options.resample_options().size, 8.0);
/// assert_eq!(options.outline_options().thinning, 0.7);
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrokeOptions<F> {
    /// Base diameter of the stroke, and the length of the start noise gate.
    pub size: F,
    /// How strongly pressure changes the width, usually in `[-1, 1]`. Negative values
    /// make harder pressure thinner.
    pub thinning: F,
    /// Minimum spacing between contour points, as a fraction of `size`.
    pub smoothing: F,
    /// Input smoothing in `[0, 1]`.
    pub streamline: F,
    /// Derive pressure from speed instead of the input samples.
    pub simulate_pressure: bool,
    /// Easing applied to pressure before it becomes a radius.
    pub easing: Easing<F>,
    /// Start cap and taper.
    pub start: EndOptions<F>,
    /// End cap and taper.
    pub end: EndOptions<F>,
    /// Whether the stroke is complete.
    pub last: bool,
}

impl<F: Float> Default for StrokeOptions<F> {
    fn default() -> Self {
        let outline = OutlineOptions::default();
        Self {
            size: outline.size,
            thinning: outline.thinning,
            smoothing: outline.smoothing,
            streamline: ResampleOptions::default().streamline,
            simulate_pressure: outline.simulate_pressure,
            easing: outline.easing,
            start: outline.start,
            end: outline.end,
            last: outline.last,
        }
    }
}

impl<F: Float> StrokeOptions<F> {
    /// Creates stroke options with the given size.
    pub fn with_size(size: F) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Sets the pressure thinning.
    pub fn thinning(mut self, thinning: F) -> Self {
        self.thinning = thinning;
        self
    }

    /// Sets the outline smoothing.
    pub fn smoothing(mut self, smoothing: F) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Sets the input streamline factor.
    pub fn streamline(mut self, streamline: F) -> Self {
        self.streamline = streamline;
        self
    }

    /// Enables or disables speed-based pressure.
    pub fn simulate_pressure(mut self, simulate: bool) -> Self {
        self.simulate_pressure = simulate;
        self
    }

    /// Sets the pressure easing.
    pub fn easing(mut self, easing: Easing<F>) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the start cap and taper.
    pub fn start(mut self, start: EndOptions<F>) -> Self {
        self.start = start;
        self
    }

    /// Sets the end cap and taper.
    pub fn end(mut self, end: EndOptions<F>) -> Self {
        self.end = end;
        self
    }

    /// Marks the stroke as complete.
    pub fn last(mut self, last: bool) -> Self {
        self.last = last;
        self
    }

    /// The subset used by the resampler.
    pub fn resample_options(&self) -> ResampleOptions<F> {
        ResampleOptions {
            streamline: self.streamline,
            size: self.size,
            last: self.last,
        }
    }

    /// The subset used by the outline builder.
    pub fn outline_options(&self) -> OutlineOptions<F> {
        OutlineOptions {
            size: self.size,
            thinning: self.thinning,
            smoothing: self.smoothing,
            simulate_pressure: self.simulate_pressure,
            easing: self.easing,
            start: self.start,
            end: self.end,
            last: self.last,
        }
    }

    /// Checks the options for values a UI should never hand to the pipeline.
    ///
    /// The transforms accept anything and degrade gracefully; this is for
    /// callers that load brushes from user input.
    pub fn validate(&self) -> Result<(), FreehandError> {
        check("size", self.size, |v| v > F::zero())?;
        check("thinning", self.thinning, |_| true)?;
        check("smoothing", self.smoothing, |v| v >= F::zero())?;
        check("streamline", self.streamline, |v| {
            v >= F::zero() && v <= F::one()
        })?;
        if let Taper::Distance(d) = self.start.taper {
            check("start.taper", d, |v| v >= F::zero())?;
        }
        if let Taper::Distance(d) = self.end.taper {
            check("end.taper", d, |v| v >= F::zero())?;
        }
        Ok(())
    }
}

fn check<F: Float>(
    option: &'static str,
    value: F,
    accept: impl Fn(F) -> bool,
) -> Result<(), FreehandError> {
    if value.is_finite() && accept(value) {
        Ok(())
    } else {
        Err(FreehandError::InvalidOption {
            option,
            value: value.to_f64().unwrap_or(f64::NAN),
        })
    }
}
