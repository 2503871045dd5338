//! Edgemap extracts binary edge maps with a structure-tensor Canny pipeline.
//!
//! Gradient energy from one or more channels is aggregated into a structure
//! tensor, resolved into per-pixel magnitude and orientation, thinned by
//! non-maximum suppression, and finalized by double-threshold hysteresis
//! linking. Grayscale and color images share the same formulation; the
//! channel count only selects the aggregation width. Optional parallelism is
//! available via the `rayon` feature and file loading via `image-io`.

pub mod gradient;
pub mod hysteresis;
pub mod image;
#[cfg(feature = "rayon")]
pub mod parallel;
pub mod pipeline;
pub mod smooth;
pub mod suppress;
mod trace;
pub mod util;

pub use gradient::aggregate::aggregate_coefficients;
pub use gradient::sobel::sobel_derivatives;
pub use gradient::tensor::resolve_tensor;
pub use gradient::{Coefficients, DerivativeField, GradientField};
pub use hysteresis::{link_edges, EDGE_VALUE};
pub use image::{ImageF32, ImageU8};
pub use pipeline::{detect_edges, EdgeDetectParams, EdgeDetector};
pub use smooth::gaussian_blur;
pub use suppress::suppress_non_maxima;
pub use util::{EdgeMapError, EdgeMapResult};

#[cfg(feature = "rayon")]
pub use parallel::{aggregate_coefficients_par, resolve_tensor_par, suppress_non_maxima_par};

#[cfg(feature = "image-io")]
pub use image::io;
