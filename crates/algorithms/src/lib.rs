//! # Tessera Algorithms
//!
//! Local-neighbourhood image analysis algorithms for Tessera.
//!
//! ## Available Algorithm Categories
//!
//! - **morphology**: Weighted dilation/erosion, minimum filter, opening, closing
//! - **smoothing**: Arithmetic, harmonic, contra-harmonic and geometric mean filters
//! - **gabor**: Gabor kernel synthesis and convolution
//! - **texture**: Co-occurrence matrices, Haralick measures, local binary patterns
//! - **moments**: Image moments, Hu invariants, shape descriptors
//! - **statistics**: Per-channel intensity histograms

pub mod gabor;
pub mod moments;
pub mod morphology;
pub mod smoothing;
pub mod statistics;
pub mod texture;

mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::gabor::{
        gabor_1d, gabor_2d, gabor_filter, gabor_kernel, gabor_response, Gabor1dParams,
        GaborComponent, GaborFilter, GaborParams,
    };
    pub use crate::moments::{
        area, feret_diameter, hu_moment, hu_moments, raw_moment, central_moment,
        normalized_central_moment, ContourPoint, HuMoments, MomentTable,
    };
    pub use crate::morphology::{
        closing, dilate, erode, minimum, opening, Closing, Dilate, Erode, Minimum, Opening,
        StructuringElement,
    };
    pub use crate::smoothing::{mean_filter, MeanFilter, MeanMode, MeanParams};
    pub use crate::statistics::{image_statistics, ImageStatistics};
    pub use crate::texture::{
        cooccurrence_matrix, haralick, local_binary_pattern, CooccurrenceDirection,
        CooccurrenceMatrix, GlcmParams, GlcmTexture,
    };
    pub use tessera_core::prelude::*;
}
