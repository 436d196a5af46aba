//! Gabor function evaluation and kernel synthesis

use std::f64::consts::PI;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tessera_core::{Error, Result};
use tracing::{debug, warn};

/// Which part of the complex Gabor response a kernel holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GaborComponent {
    /// Cosine (even) part
    Real,
    /// Sine (odd) part
    #[default]
    Imaginary,
    /// `sqrt(re² + im²)`
    Magnitude,
    /// `re² + im²`
    SquaredMagnitude,
}

/// Parameters of the 2D Gabor function and the filter built on it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaborParams {
    /// Envelope extent in standard deviations
    pub size: usize,
    /// Wavelength of the carrier
    pub lambda: f64,
    /// Orientation in radians
    pub theta: f64,
    /// Phase offset in radians
    pub phi: f64,
    /// Standard deviation of the Gaussian envelope
    pub sigma: f64,
    /// Spatial aspect ratio
    pub gamma: f64,
    pub component: GaborComponent,
    /// Render signed responses as red/blue instead of rescaled gray
    pub signed: bool,
}

impl Default for GaborParams {
    fn default() -> Self {
        Self {
            size: 3,
            lambda: 4.0,
            theta: 0.6,
            phi: 1.0,
            sigma: 2.0,
            gamma: 0.3,
            component: GaborComponent::Imaginary,
            signed: false,
        }
    }
}

impl GaborParams {
    /// Check that `lambda`, `sigma` and `gamma` are finite and positive
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("lambda", self.lambda),
            ("sigma", self.sigma),
            ("gamma", self.gamma),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidParameter {
                    name,
                    value: value.to_string(),
                    reason: "must be finite and positive".to_string(),
                });
            }
        }
        if !self.theta.is_finite() || !self.phi.is_finite() {
            return Err(Error::InvalidParameter {
                name: "theta/phi",
                value: format!("{}/{}", self.theta, self.phi),
                reason: "angles must be finite".to_string(),
            });
        }
        Ok(())
    }
}

/// Complex value of the Gabor function at one point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaborSample {
    pub re: f64,
    pub im: f64,
}

impl GaborSample {
    pub fn magnitude(&self) -> f64 {
        self.squared_magnitude().sqrt()
    }

    pub fn squared_magnitude(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Pick the requested component
    pub fn component(&self, component: GaborComponent) -> f64 {
        match component {
            GaborComponent::Real => self.re,
            GaborComponent::Imaginary => self.im,
            GaborComponent::Magnitude => self.magnitude(),
            GaborComponent::SquaredMagnitude => self.squared_magnitude(),
        }
    }
}

/// Evaluate the 2D Gabor function at `(x, y)`.
///
/// Coordinates are rotated by `theta`. A rotated coordinate that is exactly
/// zero is replaced by 1 before evaluation, so the kernel centre does not
/// sit on the carrier's zero crossing.
pub fn gabor_2d(x: f64, y: f64, params: &GaborParams) -> GaborSample {
    let (sin_t, cos_t) = params.theta.sin_cos();

    let mut xr = x * cos_t + y * sin_t;
    let mut yr = -x * sin_t + y * cos_t;
    if xr == 0.0 {
        xr = 1.0;
    }
    if yr == 0.0 {
        yr = 1.0;
    }

    let envelope = (-(xr * xr + params.gamma * params.gamma * yr * yr)
        / (2.0 * params.sigma * params.sigma))
        .exp();
    let carrier = 2.0 * PI * xr / params.lambda + params.phi;

    GaborSample {
        re: envelope * carrier.cos(),
        im: envelope * carrier.sin(),
    }
}

/// Parameters of the 1D Gabor function
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gabor1dParams {
    pub mean: f64,
    pub amplitude: f64,
    pub position: f64,
    pub width: f64,
    pub phase: f64,
    pub frequency: f64,
}

impl Default for Gabor1dParams {
    fn default() -> Self {
        Self {
            mean: 0.0,
            amplitude: 1.0,
            position: 0.0,
            width: 1.0,
            phase: 0.0,
            frequency: 1.0,
        }
    }
}

/// Evaluate the 1D Gabor function at `x`
pub fn gabor_1d(x: f64, params: &Gabor1dParams) -> f64 {
    let dx = x - params.position;
    let spread = 2.0 * params.width;
    let envelope = params.mean + params.amplitude * (-(dx * dx) / (spread * spread)).exp();
    envelope * (2.0 * PI * params.frequency * dx + params.phase).cos()
}

/// Half extents `(x_max, y_max)` of the kernel for these parameters
pub fn kernel_half_extent(params: &GaborParams) -> (usize, usize) {
    let (sin_t, cos_t) = params.theta.sin_cos();
    let size = params.size as f64;
    let sigma_x = params.sigma;
    let sigma_y = params.sigma / params.gamma;

    let x_max = 1.0_f64
        .max((size * sigma_x * cos_t).abs())
        .max((size * sigma_y * sin_t).abs())
        .ceil();
    let y_max = 1.0_f64
        .max((size * sigma_x * sin_t).abs())
        .max((size * sigma_y * cos_t).abs())
        .ceil();

    (x_max as usize, y_max as usize)
}

/// Kernel sums at or below this fraction of the largest entry are treated as zero
const DEGENERATE_SUM_RATIO: f64 = 1e-9;

/// Synthesize a normalized Gabor kernel.
///
/// The kernel has shape `(2 * x_max + 1, 2 * y_max + 1)`; entry `(i, j)`
/// holds the chosen component at `x = i - x_max`, `y = j - y_max`. Entries
/// are divided by their raw sum unless that sum is zero up to roundoff
/// relative to the largest entry, in which case the raw kernel is returned.
pub fn gabor_kernel(params: &GaborParams) -> Result<Array2<f64>> {
    params.validate()?;

    let (x_max, y_max) = kernel_half_extent(params);
    debug!(x_max, y_max, component = ?params.component, "gabor kernel");

    let mut kernel = Array2::from_shape_fn((2 * x_max + 1, 2 * y_max + 1), |(i, j)| {
        let x = i as f64 - x_max as f64;
        let y = j as f64 - y_max as f64;
        gabor_2d(x, y, params).component(params.component)
    });

    let sum = kernel.sum();
    let peak = kernel.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if sum.is_finite() && sum.abs() > DEGENERATE_SUM_RATIO * peak {
        kernel.mapv_inplace(|v| v / sum);
    } else {
        warn!(sum, peak, "gabor kernel sum is degenerate, leaving it unnormalized");
    }

    Ok(kernel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kernel_sums_to_one() {
        for component in [
            GaborComponent::Real,
            GaborComponent::Imaginary,
            GaborComponent::Magnitude,
            GaborComponent::SquaredMagnitude,
        ] {
            let params = GaborParams {
                component,
                ..Default::default()
            };
            let k = gabor_kernel(&params).unwrap();
            assert_relative_eq!(k.sum(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_kernel_dims_odd() {
        for theta in [0.0, 0.3, 0.6, 1.2, 2.5] {
            let params = GaborParams {
                theta,
                ..Default::default()
            };
            let (h, w) = gabor_kernel(&params).unwrap().dim();
            assert_eq!(h % 2, 1);
            assert_eq!(w % 2, 1);
        }
    }

    #[test]
    fn test_half_extent_theta_zero() {
        let params = GaborParams {
            theta: 0.0,
            gamma: 0.5,
            ..Default::default()
        };
        // x: 3 * 2 * cos0 = 6; y: 3 * (2 / 0.5) * cos0 = 12
        assert_eq!(kernel_half_extent(&params), (6, 12));
    }

    #[test]
    fn test_point_function_origin_quirk() {
        let params = GaborParams {
            theta: 0.0,
            phi: 0.0,
            ..Default::default()
        };
        // (0, 0) is evaluated as (1, 1)
        assert_eq!(gabor_2d(0.0, 0.0, &params), gabor_2d(1.0, 1.0, &params));
    }

    #[test]
    fn test_point_function_values() {
        let params = GaborParams {
            theta: 0.0,
            phi: 0.0,
            lambda: 4.0,
            sigma: 2.0,
            gamma: 1.0,
            ..Default::default()
        };
        let s = gabor_2d(2.0, 1.0, &params);
        let envelope = (-(4.0 + 1.0) / 8.0f64).exp();
        assert_relative_eq!(s.re, envelope * PI.cos(), epsilon = 1e-12);
        assert_relative_eq!(s.im, envelope * PI.sin(), epsilon = 1e-12);
        assert_relative_eq!(s.magnitude(), envelope, epsilon = 1e-12);
    }

    #[test]
    fn test_gabor_1d() {
        let params = Gabor1dParams::default();
        assert_relative_eq!(gabor_1d(0.0, &params), 1.0);
        // width 1: envelope exp(-1/4), carrier cos(2π) = 1
        assert_relative_eq!(gabor_1d(1.0, &params), (-0.25f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_params() {
        let bad = [
            GaborParams { lambda: 0.0, ..Default::default() },
            GaborParams { sigma: -1.0, ..Default::default() },
            GaborParams { gamma: f64::NAN, ..Default::default() },
        ];
        for params in bad {
            assert!(gabor_kernel(&params).is_err());
        }
    }

    /// Real kernel whose entries cancel to roundoff (raw sum ~ 9e-17)
    fn cancelling_params() -> GaborParams {
        GaborParams {
            theta: 1.5,
            phi: 2.739_399_182_558_889_92,
            component: GaborComponent::Real,
            ..Default::default()
        }
    }

    #[test]
    fn test_near_zero_sum_left_unnormalized() {
        let k = gabor_kernel(&cancelling_params()).unwrap();
        let peak = k.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
        assert!(k.sum().abs() < 1e-6);
        assert!(peak <= 1.0);
    }

    #[test]
    fn test_zero_kernel_left_unnormalized() {
        let params = GaborParams {
            component: GaborComponent::Magnitude,
            sigma: 1e-3,
            ..Default::default()
        };
        let k = gabor_kernel(&params).unwrap();
        assert!(k.iter().all(|v| v.is_finite()));
    }
}
