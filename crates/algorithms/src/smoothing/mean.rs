//! Generalized mean filter
//!
//! Replaces every pixel with a mean of the in-bounds samples of its
//! square neighbourhood. Four means are available: arithmetic, harmonic,
//! contra-harmonic and geometric.

use std::sync::atomic::{AtomicUsize, Ordering};

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};
use tessera_core::{clamp_sample, Bitmap, Error, InPlaceFilter, Result, Window};
use tracing::{debug, warn};

use crate::maybe_rayon::*;

/// Statistic applied to each window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MeanMode {
    /// Integer sum divided by count, truncated
    #[default]
    Arithmetic,
    /// `count / Σ(1/v)`; a zero sample drives the result to 0
    Harmonic,
    /// `Σv^(order+1) / Σv^order`
    ContraHarmonic,
    /// `exp(Σ ln v / count)`; a zero sample drives the result to 0
    Geometric,
}

impl MeanMode {
    /// Reduce a window of samples to a single value.
    ///
    /// `order` is only used by [`MeanMode::ContraHarmonic`]. The result may
    /// be non-finite for degenerate windows (e.g. an all-zero window in
    /// contra-harmonic mode, or an empty slice).
    pub fn reduce(self, samples: &[u8], order: i32) -> f64 {
        if samples.is_empty() {
            return f64::NAN;
        }
        let count = samples.len() as f64;

        match self {
            MeanMode::Arithmetic => {
                let sum: u64 = samples.iter().map(|&v| u64::from(v)).sum();
                (sum / samples.len() as u64) as f64
            }
            MeanMode::Harmonic => {
                let reciprocal: f64 = samples.iter().map(|&v| 1.0 / f64::from(v)).sum();
                count / reciprocal
            }
            MeanMode::ContraHarmonic => {
                let mut num = 0.0;
                let mut den = 0.0;
                for &v in samples {
                    let v = f64::from(v);
                    num += v.powi(order + 1);
                    den += v.powi(order);
                }
                num / den
            }
            MeanMode::Geometric => {
                let log_sum: f64 = samples.iter().map(|&v| f64::from(v).ln()).sum();
                (log_sum / count).exp()
            }
        }
    }
}

/// Parameters for the mean filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeanParams {
    /// Window radius (0 = the pixel itself)
    pub radius: usize,
    /// Which mean to compute
    pub mode: MeanMode,
    /// Exponent for the contra-harmonic mean
    pub order: i32,
}

impl Default for MeanParams {
    fn default() -> Self {
        Self {
            radius: 1,
            mode: MeanMode::Arithmetic,
            order: 1,
        }
    }
}

/// Mean filter
#[derive(Debug, Clone, Default)]
pub struct MeanFilter;

impl InPlaceFilter for MeanFilter {
    type Params = MeanParams;

    fn name(&self) -> &'static str {
        "Mean"
    }

    fn description(&self) -> &'static str {
        "Arithmetic, harmonic, contra-harmonic or geometric mean over a square window"
    }

    fn apply_in_place(&self, bitmap: &mut Bitmap, params: &Self::Params) -> Result<()> {
        mean_filter(bitmap, params)
    }
}

/// Apply the mean filter in place to every channel of `bitmap`.
///
/// Windows are intersected with the image bounds, so border pixels average
/// fewer samples. Harmonic, contra-harmonic and geometric results are
/// rounded to the nearest integer, not truncated: harmonic `[1, 3]` gives 2
/// where a truncating filter gives 1. Arithmetic results keep truncating
/// integer division. Non-finite results are written as 0.
pub fn mean_filter(bitmap: &mut Bitmap, params: &MeanParams) -> Result<()> {
    debug!(
        radius = params.radius,
        mode = ?params.mode,
        order = params.order,
        channels = bitmap.mode().channel_count(),
        "mean filter"
    );

    let window = Window::new(params.radius);
    let degenerate = AtomicUsize::new(0);
    bitmap.map_planes(|plane| mean_plane(plane, window, params, &degenerate))?;

    let degenerate = degenerate.into_inner();
    if degenerate > 0 {
        warn!(
            pixels = degenerate,
            mode = ?params.mode,
            "mean filter produced non-finite values, written as 0"
        );
    }
    Ok(())
}

fn mean_plane(
    src: ArrayView2<'_, u8>,
    window: Window,
    params: &MeanParams,
    degenerate: &AtomicUsize,
) -> Result<Array2<u8>> {
    let (rows, cols) = src.dim();
    let capacity = window.size() * window.size();

    let output_data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0u8; cols];
            let mut scratch: Vec<u8> = Vec::with_capacity(capacity);

            for (col, out) in row_data.iter_mut().enumerate() {
                scratch.clear();
                scratch.extend(window.samples(src, row, col));

                let value = params.mode.reduce(&scratch, params.order);
                *out = if value.is_finite() {
                    clamp_sample(value.round())
                } else {
                    degenerate.fetch_add(1, Ordering::Relaxed);
                    0
                };
            }

            row_data
        })
        .collect();

    Array2::from_shape_vec((rows, cols), output_data).map_err(|e| Error::Other(e.to_string()))
}
