//! Gabor filtering
//!
//! Kernel synthesis from the 2D Gabor function and a spatial convolution
//! that renders the response either as rescaled gray or as a signed
//! red/blue map.

mod filter;
mod kernel;

pub use filter::{gabor_filter, gabor_response, GaborFilter};
pub use kernel::{
    gabor_1d, gabor_2d, gabor_kernel, kernel_half_extent, Gabor1dParams, GaborComponent,
    GaborParams, GaborSample,
};
