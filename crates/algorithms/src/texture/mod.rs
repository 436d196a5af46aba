//! Texture descriptors
//!
//! - **GLCM**: gray-level co-occurrence matrix and Haralick measures
//! - **LBP**: local binary pattern code histogram

mod glcm;
mod lbp;

pub use glcm::{
    cooccurrence_matrix, haralick, CooccurrenceDirection, CooccurrenceMatrix, Glcm, GlcmParams,
    GlcmTexture,
};
pub use lbp::{local_binary_pattern, LocalBinaryPattern};
