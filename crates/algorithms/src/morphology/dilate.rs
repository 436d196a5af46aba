//! Morphological dilation (maximum filter)
//!
//! Replaces each pixel with the maximum of `sample + weight` over its
//! structuring element neighborhood. Enlarges bright regions and shrinks
//! dark regions.

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};
use tessera_core::{clamp_sample, Bitmap, Error, InPlaceFilter, Result};
use tracing::debug;

use crate::maybe_rayon::*;

use super::element::StructuringElement;

/// Parameters for morphological dilation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DilateParams {
    /// Structuring element weights
    pub element: StructuringElement,
}

/// Dilation filter
#[derive(Debug, Clone, Default)]
pub struct Dilate;

impl InPlaceFilter for Dilate {
    type Params = DilateParams;

    fn name(&self) -> &'static str {
        "Dilate"
    }

    fn description(&self) -> &'static str {
        "Morphological dilation (maximum of sample plus weight over the structuring element)"
    }

    fn apply_in_place(&self, bitmap: &mut Bitmap, params: &Self::Params) -> Result<()> {
        dilate(bitmap, &params.element)
    }
}

/// Perform morphological dilation on a bitmap in place
///
/// For every pixel at row ≥ 1 and column ≥ 1 the output is
/// `max(sample + weight)` over the in-bounds window positions, clamped to
/// 255. The first row and first column are left untouched. Each channel of
/// an RGB bitmap is processed independently.
///
/// # Arguments
/// * `bitmap` - Bitmap to rewrite
/// * `element` - Structuring element weights
pub fn dilate(bitmap: &mut Bitmap, element: &StructuringElement) -> Result<()> {
    element.validate()?;
    debug!(
        radius = element.radius(),
        rows = bitmap.rows(),
        cols = bitmap.cols(),
        mode = %bitmap.mode(),
        "dilate"
    );

    let weights = element.weights();
    bitmap.map_planes(|plane| dilate_plane(plane, &weights))
}

pub(crate) fn dilate_plane(src: ArrayView2<'_, u8>, weights: &Array2<i32>) -> Result<Array2<u8>> {
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
                let mut max_val = i32::MIN;

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
                        let v = sample.saturating_add(weights[(wr, wc)]);
                        if v > max_val {
                            max_val = v;
                        }
                    }
                }

                *out = clamp_sample(max_val);
            }

            row_data
        })
        .collect();

    Array2::from_shape_vec((rows, cols), output_data).map_err(|e| Error::Other(e.to_string()))
}
