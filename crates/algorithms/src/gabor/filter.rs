//! Gabor convolution and response rendering

use ndarray::{Array2, ArrayView2};
use tessera_core::{clamp_sample, Bitmap, Error, InPlaceFilter, Result};
use tracing::{debug, warn};

use crate::maybe_rayon::*;

use super::kernel::{gabor_kernel, GaborParams};

/// Gabor filter
#[derive(Debug, Clone, Default)]
pub struct GaborFilter;

impl InPlaceFilter for GaborFilter {
    type Params = GaborParams;

    fn name(&self) -> &'static str {
        "Gabor"
    }

    fn description(&self) -> &'static str {
        "Convolve with an oriented Gabor kernel and render the response"
    }

    fn apply_in_place(&self, bitmap: &mut Bitmap, params: &Self::Params) -> Result<()> {
        gabor_filter(bitmap, params)
    }
}

/// Convolve a gray plane with `kernel`, rounding each response to an integer.
///
/// Output `(x, y)` is `Σ kernel[xf + x_max][yf + y_max] · plane[x - xf][y - yf]`
/// over the offsets whose source pixel lies inside the plane.
pub fn gabor_response(plane: ArrayView2<'_, u8>, kernel: &Array2<f64>) -> Result<Array2<i32>> {
    let (rows, cols) = plane.dim();
    let (kh, kw) = kernel.dim();
    if kh % 2 == 0 || kw % 2 == 0 {
        return Err(Error::InvalidParameter {
            name: "kernel",
            value: format!("{}x{}", kh, kw),
            reason: "kernel dimensions must be odd".to_string(),
        });
    }
    let x_max = (kh / 2) as isize;
    let y_max = (kw / 2) as isize;

    let output_data: Vec<i32> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![0i32; cols];

            for (col, out) in row_data.iter_mut().enumerate() {
                let mut sum = 0.0;
                for xf in -x_max..=x_max {
                    let sr = row as isize - xf;
                    if sr < 0 || sr >= rows as isize {
                        continue;
                    }
                    for yf in -y_max..=y_max {
                        let sc = col as isize - yf;
                        if sc < 0 || sc >= cols as isize {
                            continue;
                        }
                        let k = kernel[((xf + x_max) as usize, (yf + y_max) as usize)];
                        sum += k * f64::from(plane[(sr as usize, sc as usize)]);
                    }
                }
                *out = sum.round() as i32;
            }

            row_data
        })
        .collect();

    Array2::from_shape_vec((rows, cols), output_data).map_err(|e| Error::Other(e.to_string()))
}

/// Apply the Gabor filter to a grayscale bitmap in place.
///
/// Unsigned mode rescales the response range to `[0, 255]`; a flat
/// response renders as all 0. Signed mode converts the bitmap to RGB and
/// draws positive responses in red, negative ones in blue, each scaled by
/// its own extreme.
pub fn gabor_filter(bitmap: &mut Bitmap, params: &GaborParams) -> Result<()> {
    bitmap.require_grayscale("gabor_filter")?;
    debug!(
        theta = params.theta,
        lambda = params.lambda,
        sigma = params.sigma,
        gamma = params.gamma,
        signed = params.signed,
        "gabor filter"
    );

    let kernel = gabor_kernel(params)?;
    let plane = bitmap.planes()[0].view();
    let response = gabor_response(plane, &kernel)?;

    if params.signed {
        bitmap.replace(render_signed(&response)?);
        Ok(())
    } else {
        bitmap.replace_planes(vec![render_unsigned(&response)])
    }
}

fn render_unsigned(response: &Array2<i32>) -> Array2<u8> {
    let min = response.iter().copied().min().unwrap_or(0);
    let max = response.iter().copied().max().unwrap_or(0);

    if max == min {
        warn!(value = min, "flat gabor response, rendering as 0");
        return Array2::zeros(response.dim());
    }

    let (min, max) = (f64::from(min), f64::from(max));
    let range = max - min;
    response.mapv(|r| clamp_sample((255.0 * (f64::from(r) - min) / range).round()))
}

fn render_signed(response: &Array2<i32>) -> Result<Bitmap> {
    let max_pos = response.iter().copied().filter(|&r| r > 0).max().unwrap_or(0);
    let min_neg = response.iter().copied().filter(|&r| r < 0).min().unwrap_or(0);

    let red = response.mapv(|r| {
        if r > 0 {
            clamp_sample((255.0 * f64::from(r) / f64::from(max_pos)).round())
        } else {
            0
        }
    });
    let blue = response.mapv(|r| {
        if r < 0 {
            clamp_sample((255.0 * f64::from(r) / f64::from(min_neg)).round())
        } else {
            0
        }
    });
    let green = Array2::zeros(response.dim());

    Bitmap::from_rgb_planes(red, green, blue)
}
