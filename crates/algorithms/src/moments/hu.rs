//! Image moments and Hu invariants
//!
//! Moments are taken over a real-valued field with `i` the row index and
//! `j` the column index:
//!
//! - raw: `m_pq = Σ i^p · j^q · f[i][j]`
//! - central: the same sum about the centroid `(m10/m00, m01/m00)`
//! - normalized central: `η_pq = μ_pq / μ00^γ`, `γ = (p+q)/2 + 1`
//!
//! A field whose total mass `m00` is zero has no centroid; every
//! centroid-dependent value is then NaN.

use ndarray::{Array2, ArrayView2};
use tessera_core::{Algorithm, Bitmap, Error, Result};
use tracing::{debug, warn};

/// Raw moment `m_pq` of a field
pub fn raw_moment(p: u32, q: u32, field: ArrayView2<'_, f64>) -> f64 {
    field
        .indexed_iter()
        .map(|((i, j), &v)| (i as f64).powi(p as i32) * (j as f64).powi(q as i32) * v)
        .sum()
}

/// Central moment `μ_pq` of a field
pub fn central_moment(p: u32, q: u32, field: ArrayView2<'_, f64>) -> f64 {
    MomentTable::new(field).central(p, q)
}

/// Normalized central moment `η_pq` of a field
pub fn normalized_central_moment(p: u32, q: u32, field: ArrayView2<'_, f64>) -> f64 {
    MomentTable::new(field).normalized(p, q)
}

/// Hu invariant number `n` (1 to 7) of a field
pub fn hu_moment(field: ArrayView2<'_, f64>, n: usize) -> Result<f64> {
    MomentTable::new(field).hu(n)
}

/// All seven Hu invariants of a field, in order
pub fn hu_moments(field: ArrayView2<'_, f64>) -> [f64; 7] {
    MomentTable::new(field).hu_all()
}

/// Moments of one field, with the zeroth and first order sums computed once.
#[derive(Debug, Clone)]
pub struct MomentTable<'a> {
    field: ArrayView2<'a, f64>,
    m00: f64,
    x0: f64,
    y0: f64,
}

impl<'a> MomentTable<'a> {
    pub fn new(field: ArrayView2<'a, f64>) -> Self {
        let m00 = raw_moment(0, 0, field);
        let m10 = raw_moment(1, 0, field);
        let m01 = raw_moment(0, 1, field);
        if m00 == 0.0 {
            warn!("moment field has zero mass, centroid is undefined");
        }
        Self {
            field,
            m00,
            x0: m10 / m00,
            y0: m01 / m00,
        }
    }

    /// Total mass `m00`
    pub fn mass(&self) -> f64 {
        self.m00
    }

    /// `(row, col)` centroid, or `None` when the field has zero mass
    pub fn centroid(&self) -> Option<(f64, f64)> {
        if self.m00 == 0.0 || !self.x0.is_finite() || !self.y0.is_finite() {
            None
        } else {
            Some((self.x0, self.y0))
        }
    }

    pub fn raw(&self, p: u32, q: u32) -> f64 {
        raw_moment(p, q, self.field)
    }

    pub fn central(&self, p: u32, q: u32) -> f64 {
        self.field
            .indexed_iter()
            .map(|((i, j), &v)| {
                (i as f64 - self.x0).powi(p as i32) * (j as f64 - self.y0).powi(q as i32) * v
            })
            .sum()
    }

    /// `η_pq` with `γ = (p+q)/2 + 1` in real arithmetic.
    ///
    /// Third-order moments use `γ = 2.5`. Implementations that compute `γ`
    /// with integer division use 2 there, so their invariants #3 to #7
    /// differ from these by a power of `μ00`.
    pub fn normalized(&self, p: u32, q: u32) -> f64 {
        let gamma = f64::from(p + q) / 2.0 + 1.0;
        self.central(p, q) / self.m00.powf(gamma)
    }

    /// `μ20 / μ00`
    pub fn variance_x(&self) -> f64 {
        self.central(2, 0) / self.m00
    }

    /// `μ02 / μ00`
    pub fn variance_y(&self) -> f64 {
        self.central(0, 2) / self.m00
    }

    /// `μ11 / μ00`
    pub fn covariance_xy(&self) -> f64 {
        self.central(1, 1) / self.m00
    }

    /// Hu invariant number `n` (1 to 7).
    ///
    /// Invariant 2 is `(η20 - 2)² + (2η11)²`, invariant 4 pairs `η12` with
    /// `η03` in its second square, and invariant 7 adds its two terms.
    pub fn hu(&self, n: usize) -> Result<f64> {
        if !(1..=7).contains(&n) {
            return Err(Error::InvalidParameter {
                name: "n",
                value: n.to_string(),
                reason: "Hu invariant index must be within 1..=7".to_string(),
            });
        }
        Ok(self.hu_all()[n - 1])
    }

    pub fn hu_all(&self) -> [f64; 7] {
        let n20 = self.normalized(2, 0);
        let n02 = self.normalized(0, 2);
        let n11 = self.normalized(1, 1);
        let n30 = self.normalized(3, 0);
        let n12 = self.normalized(1, 2);
        let n21 = self.normalized(2, 1);
        let n03 = self.normalized(0, 3);

        let a = n30 + n12;
        let b = n21 + n03;
        let c = n30 - 3.0 * n12;
        let d = 3.0 * n21 - n03;

        [
            n20 + n02,
            (n20 - 2.0).powi(2) + (2.0 * n11).powi(2),
            c.powi(2) + d.powi(2),
            a.powi(2) + (n12 + n03).powi(2),
            c * a * (a.powi(2) - 3.0 * b.powi(2)) + d * b * (3.0 * a.powi(2) - b.powi(2)),
            (n20 - n02) * (a.powi(2) - b.powi(2)) + 4.0 * n11 * a * b,
            d * a * (a.powi(2) - 3.0 * b.powi(2)) + c * b * (3.0 * a.powi(2) - b.powi(2)),
        ]
    }
}

/// Hu invariants of a grayscale bitmap as an [`Algorithm`]
#[derive(Debug, Clone, Default)]
pub struct HuMoments;

impl Algorithm for HuMoments {
    type Input = Bitmap;
    type Output = [f64; 7];
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "HuMoments"
    }

    fn description(&self) -> &'static str {
        "Seven Hu moment invariants of the gray intensity field"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        let field: Array2<f64> = input.to_field()?;
        debug!(rows = field.nrows(), cols = field.ncols(), "hu moments");
        Ok(hu_moments(field.view()))
    }
}
