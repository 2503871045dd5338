//! Fixed-order edge detection pipeline.
//!
//! Smoothing -> per-channel Sobel derivatives -> coefficient aggregation ->
//! tensor resolution -> non-maximum suppression -> hysteresis linking. No
//! stage is skipped and no partial output is returned; invalid inputs are
//! rejected before any stage executes.

use crate::gradient::aggregate::aggregate_coefficients;
use crate::gradient::sobel::sobel_derivatives;
use crate::gradient::tensor::resolve_tensor;
use crate::gradient::{Coefficients, DerivativeField, GradientField};
use crate::hysteresis::link_edges;
use crate::image::{ImageF32, ImageU8};
#[cfg(feature = "rayon")]
use crate::parallel::{aggregate_coefficients_par, resolve_tensor_par, suppress_non_maxima_par};
use crate::smooth::gaussian_blur;
use crate::suppress::suppress_non_maxima;
use crate::trace::{trace_event, trace_span};
use crate::util::{EdgeMapError, EdgeMapResult};

/// Pipeline parameters.
///
/// Thresholds are ratios of the global maximum suppressed magnitude, not
/// absolute values. `low_threshold >= high_threshold` is a caller
/// configuration error: the pipeline still completes but the weak set is
/// empty or degenerate.
#[derive(Clone, Copy, Debug)]
pub struct EdgeDetectParams {
    /// Gaussian smoothing standard deviation (> 0).
    pub sigma: f32,
    /// Low hysteresis threshold ratio in [0, 1].
    pub low_threshold: f32,
    /// High hysteresis threshold ratio in [0, 1].
    pub high_threshold: f32,
    /// Run the per-pixel stages row-parallel (requires the `rayon` feature;
    /// ignored otherwise). Results are identical either way.
    pub parallel: bool,
}

impl Default for EdgeDetectParams {
    fn default() -> Self {
        Self {
            sigma: 1.4,
            low_threshold: 0.05,
            high_threshold: 0.15,
            parallel: false,
        }
    }
}

/// Structure-tensor Canny edge detector.
pub struct EdgeDetector {
    params: EdgeDetectParams,
}

impl EdgeDetector {
    /// Creates a detector with default parameters.
    pub fn new() -> Self {
        Self {
            params: EdgeDetectParams::default(),
        }
    }

    /// Replaces the parameter set.
    pub fn with_params(mut self, params: EdgeDetectParams) -> Self {
        self.params = params;
        self
    }

    /// Returns the current parameters.
    pub fn params(&self) -> &EdgeDetectParams {
        &self.params
    }

    /// Runs the full pipeline over a 1-or-more-channel image.
    ///
    /// Channels share spatial dimensions; the channel count K only selects
    /// the aggregation width, the rest of the pipeline is channel-agnostic.
    /// Returns a binary mask (0 or 255) of the same dimensions.
    pub fn detect(&self, channels: &[ImageF32]) -> EdgeMapResult<ImageU8> {
        self.validate(channels)?;

        let _span = trace_span!(
            "detect_edges",
            width = channels[0].width(),
            height = channels[0].height(),
            channels = channels.len()
        )
        .entered();

        let mut fields = Vec::with_capacity(channels.len());
        for channel in channels {
            let blurred = gaussian_blur(channel, self.params.sigma)?;
            fields.push(sobel_derivatives(&blurred)?);
        }
        trace_event!("derivatives_ready", channels = fields.len());

        let coeffs = self.aggregate(&fields)?;
        let gradient = self.resolve(&coeffs)?;
        let suppressed = self.suppress(&gradient)?;
        let mask = link_edges(
            &suppressed,
            self.params.low_threshold,
            self.params.high_threshold,
        )?;
        trace_event!(
            "mask_ready",
            edge_pixels = mask.data().iter().filter(|&&v| v != 0).count()
        );
        Ok(mask)
    }

    fn validate(&self, channels: &[ImageF32]) -> EdgeMapResult<()> {
        let first = channels.first().ok_or(EdgeMapError::NoChannels)?;
        let width = first.width();
        let height = first.height();
        for channel in channels {
            if channel.width() != width || channel.height() != height {
                return Err(EdgeMapError::DimensionMismatch {
                    expected_width: width,
                    expected_height: height,
                    width: channel.width(),
                    height: channel.height(),
                });
            }
        }
        if self.params.sigma <= 0.0 || self.params.sigma.is_nan() {
            return Err(EdgeMapError::InvalidSigma {
                sigma: self.params.sigma,
            });
        }
        for (name, value) in [
            ("low_threshold", self.params.low_threshold),
            ("high_threshold", self.params.high_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EdgeMapError::ThresholdOutOfRange { name, value });
            }
        }
        Ok(())
    }

    #[cfg(feature = "rayon")]
    fn aggregate(&self, fields: &[DerivativeField]) -> EdgeMapResult<Coefficients> {
        if self.params.parallel {
            aggregate_coefficients_par(fields)
        } else {
            aggregate_coefficients(fields)
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn aggregate(&self, fields: &[DerivativeField]) -> EdgeMapResult<Coefficients> {
        aggregate_coefficients(fields)
    }

    #[cfg(feature = "rayon")]
    fn resolve(&self, coeffs: &Coefficients) -> EdgeMapResult<GradientField> {
        if self.params.parallel {
            resolve_tensor_par(coeffs)
        } else {
            resolve_tensor(coeffs)
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn resolve(&self, coeffs: &Coefficients) -> EdgeMapResult<GradientField> {
        resolve_tensor(coeffs)
    }

    #[cfg(feature = "rayon")]
    fn suppress(&self, gradient: &GradientField) -> EdgeMapResult<ImageF32> {
        if self.params.parallel {
            suppress_non_maxima_par(gradient)
        } else {
            suppress_non_maxima(gradient)
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn suppress(&self, gradient: &GradientField) -> EdgeMapResult<ImageF32> {
        suppress_non_maxima(gradient)
    }
}

impl Default for EdgeDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper: runs the pipeline with the given parameters.
pub fn detect_edges(channels: &[ImageF32], params: EdgeDetectParams) -> EdgeMapResult<ImageU8> {
    EdgeDetector::new().with_params(params).detect(channels)
}
