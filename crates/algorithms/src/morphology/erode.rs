//! Morphological erosion (minimum filter)
//!
//! Replaces each pixel with the minimum of `sample - weight` over its
//! structuring element neighborhood. Shrinks bright regions and expands
//! dark regions.

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};
use tessera_core::{clamp_sample, Bitmap, Error, InPlaceFilter, Result};
use tracing::debug;

use crate::maybe_rayon::*;

use super::element::StructuringElement;

/// Parameters for morphological erosion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErodeParams {
    /// Structuring element weights
    pub element: StructuringElement,
}

/// Erosion filter
#[derive(Debug, Clone, Default)]
pub struct Erode;

impl InPlaceFilter for Erode {
    type Params = ErodeParams;

    fn name(&self) -> &'static str {
        "Erode"
    }

    fn description(&self) -> &'static str {
        "Morphological erosion (minimum of sample minus weight over the structuring element)"
    }

    fn apply_in_place(&self, bitmap: &mut Bitmap, params: &Self::Params) -> Result<()> {
        erode(bitmap, &params.element)
    }
}

/// Perform morphological erosion on a bitmap in place
///
/// Mirror of [`dilate`](super::dilate): `min(sample - weight)` over the
/// in-bounds window, clamped to 0. Row 0 and column 0 keep their input
/// values.
pub fn erode(bitmap: &mut Bitmap, element: &StructuringElement) -> Result<()> {
    element.validate()?;
    debug!(
        radius = element.radius(),
        rows = bitmap.rows(),
        cols = bitmap.cols(),
        mode = %bitmap.mode(),
        "erode"
    );

    let weights = element.weights();
    bitmap.map_planes(|plane| erode_plane(plane, &weights))
}

pub(crate) fn erode_plane(src: ArrayView2<'_, u8>, weights: &Array2<i32>) -> Result<Array2<u8>> {
    let (rows, cols) = src.dim();
    let radius = (weights.nrows() / 2) as isize;

    let output_data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = src.row(row).to_vec();
            if row == 0 {
                return row_data;
            }

            for (col, out) in row_data.iter_mut().enumerate().skip(1) {
                let mut min_val = i32::MAX;

                for (wr, dr) in (-radius..=radius).enumerate() {
                    let nr = row as isize + dr;
                    if nr < 0 || nr >= rows as isize {
                        continue;
                    }
                    for (wc, dc) in (-radius..=radius).enumerate() {
                        let nc = col as isize + dc;
                        if nc < 0 || nc >= cols as isize {
                            continue;
                        }
                        let sample = i32::from(src[(nr as usize, nc as usize)]);
                        let v = sample.saturating_sub(weights[(wr, wc)]);
                        min_val = min_val.min(v);
                    }
                }

                *out = clamp_sample(min_val);
            }

            row_data
        })
        .collect();

    Array2::from_shape_vec((rows, cols), output_data).map_err(|e| Error::Other(e.to_string()))
}
