//! # Tessera Core
//!
//! Core types and traits shared by the Tessera image analysis algorithms.
//!
//! This crate provides:
//! - `Bitmap`: 8-bit grayscale or RGB pixel buffer stored as channel planes
//! - `Window`: square neighbourhood offsets for sliding-window passes
//! - `Histogram`: immutable count array with precomputed statistics
//! - Algorithm traits for a consistent API

pub mod bitmap;
pub mod error;
pub mod histogram;

pub use bitmap::{clamp_sample, Bitmap, Channel, ColorMode, Window};
pub use error::{Error, Result};
pub use histogram::Histogram;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::bitmap::{Bitmap, Channel, ColorMode, Window};
    pub use crate::error::{Error, Result};
    pub use crate::histogram::Histogram;
    pub use crate::{Algorithm, InPlaceFilter};
}

/// Trait for analyses that derive a value from their input.
///
/// Analyses are pure functions: the input is consumed read-only and a new
/// artifact (matrix, histogram, statistics) is returned.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}

/// Trait for filters that rewrite a bitmap in place.
///
/// Implementors read from a snapshot of the bitmap taken before the first
/// write, so results never depend on already-filtered neighbours.
pub trait InPlaceFilter {
    /// Parameters controlling the filter
    type Params: Default;

    /// Returns the filter name
    fn name(&self) -> &'static str;

    /// Returns a description of what the filter does
    fn description(&self) -> &'static str;

    /// Apply the filter, replacing the contents of `bitmap`
    fn apply_in_place(&self, bitmap: &mut Bitmap, params: &Self::Params) -> Result<()>;

    /// Apply with default parameters
    fn apply_in_place_default(&self, bitmap: &mut Bitmap) -> Result<()> {
        self.apply_in_place(bitmap, &Self::Params::default())
    }
}
