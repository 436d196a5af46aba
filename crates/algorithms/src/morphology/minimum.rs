//! Minimum filter over a square window

use ndarray::{Array2, ArrayView2};
use serde::{Deserialize, Serialize};
use tessera_core::{Bitmap, Error, InPlaceFilter, Result, Window};
use tracing::debug;

use crate::maybe_rayon::*;

/// Parameters for the minimum filter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinimumParams {
    /// Window radius (values below 1 are raised to 1)
    pub radius: usize,
}

impl Default for MinimumParams {
    fn default() -> Self {
        Self { radius: 1 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Minimum;

impl InPlaceFilter for Minimum {
    type Params = MinimumParams;

    fn name(&self) -> &'static str {
        "Minimum"
    }

    fn description(&self) -> &'static str {
        "Replace each pixel by the minimum of its in-bounds square neighbourhood"
    }

    fn apply_in_place(&self, bitmap: &mut Bitmap, params: &Self::Params) -> Result<()> {
        minimum(bitmap, params.radius)
    }
}

/// Replace every pixel (borders included) by the smallest in-bounds value
/// of the `(2r+1) x (2r+1)` window around it.
pub fn minimum(bitmap: &mut Bitmap, radius: usize) -> Result<()> {
    let window = Window::new(radius.max(1));
    debug!(radius = window.radius(), mode = %bitmap.mode(), "minimum");
    bitmap.map_planes(|plane| minimum_plane(plane, window))
}

fn minimum_plane(src: ArrayView2<'_, u8>, window: Window) -> Result<Array2<u8>> {
    let (rows, cols) = src.dim();

    let output_data: Vec<u8> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            (0..cols)
                .map(|col| window.samples(src, row, col).fold(u8::MAX, u8::min))
                .collect::<Vec<u8>>()
        })
        .collect();

    Array2::from_shape_vec((rows, cols), output_data).map_err(|e| Error::Other(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_spreads_dark_pixel() {
        let mut bitmap = Bitmap::filled_gray(5, 5, 200);
        bitmap.set_gray(0, 0, 3).unwrap();
        minimum(&mut bitmap, 1).unwrap();
        assert_eq!(bitmap.get_gray(0, 0).unwrap(), 3);
        assert_eq!(bitmap.get_gray(1, 1).unwrap(), 3);
        assert_eq!(bitmap.get_gray(0, 1).unwrap(), 3);
        assert_eq!(bitmap.get_gray(2, 2).unwrap(), 200);
    }

    #[test]
    fn test_minimum_zero_radius_promoted() {
        let mut a = Bitmap::filled_gray(4, 4, 50);
        a.set_gray(2, 2, 10).unwrap();
        let mut b = a.clone();
        minimum(&mut a, 0).unwrap();
        minimum(&mut b, 1).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_minimum_default_params() {
        let mut bitmap = Bitmap::filled_rgb(3, 3, [9, 8, 7]);
        Minimum.apply_in_place_default(&mut bitmap).unwrap();
        assert_eq!(bitmap.get_rgb(1, 1).unwrap(), [9, 8, 7]);
    }
}
