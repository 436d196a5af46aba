//! Gray-Level Co-occurrence Matrix (GLCM) and Haralick texture features
//!
//! A co-occurrence matrix counts how often gray level `a` is followed by
//! gray level `b` at a fixed one-pixel offset. Haralick measures summarize
//! the resulting joint distribution.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tessera_core::{Algorithm, Bitmap, Error, Result};
use tracing::debug;

/// Pixel offset used to pair samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CooccurrenceDirection {
    /// Left neighbour paired with the pixel
    #[default]
    Degrees0,
    /// Pixel paired with its upper-right neighbour
    Degrees45,
    /// Upper neighbour paired with the pixel
    Degrees90,
    /// Mirrored columns: pixel paired with its upper-left neighbour
    Degrees135,
}

/// Parameters for co-occurrence accumulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlcmParams {
    pub direction: CooccurrenceDirection,
    /// Size the matrix by the brightest observed level instead of 255
    pub auto_gray: bool,
    /// Divide counts by the number of pairs
    pub normalize: bool,
}

impl Default for GlcmParams {
    fn default() -> Self {
        Self {
            direction: CooccurrenceDirection::Degrees0,
            auto_gray: true,
            normalize: true,
        }
    }
}

/// Available GLCM texture measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlcmTexture {
    /// Angular Second Moment (energy), uniformity
    Energy,
    /// Local intensity variation
    Contrast,
    /// Homogeneity (Inverse Difference Moment)
    Homogeneity,
    /// Linear dependency of gray levels
    Correlation,
    /// Randomness/disorder
    Entropy,
    /// Weighted absolute difference
    Dissimilarity,
}

/// Co-occurrence counts (or frequencies) for one direction
#[derive(Debug, Clone, PartialEq)]
pub struct CooccurrenceMatrix {
    matrix: Array2<f64>,
    pairs: u64,
    normalized: bool,
}

impl CooccurrenceMatrix {
    /// Entry `[a][b]` for the pair (first, second)
    pub fn matrix(&self) -> &Array2<f64> {
        &self.matrix
    }

    /// Number of pixel pairs accumulated
    pub fn pairs(&self) -> u64 {
        self.pairs
    }

    /// Number of gray levels per axis (`max_gray + 1`)
    pub fn levels(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    pub fn sum(&self) -> f64 {
        self.matrix.sum()
    }

    pub fn get(&self, first: u8, second: u8) -> f64 {
        self.matrix
            .get((usize::from(first), usize::from(second)))
            .copied()
            .unwrap_or(0.0)
    }
}

/// GLCM accumulation as an [`Algorithm`]
#[derive(Debug, Clone, Default)]
pub struct Glcm;

impl Algorithm for Glcm {
    type Input = Bitmap;
    type Output = CooccurrenceMatrix;
    type Params = GlcmParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "GLCM"
    }

    fn description(&self) -> &'static str {
        "Gray-level co-occurrence matrix at a one-pixel offset"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        cooccurrence_matrix(&input, &params)
    }
}

/// Build the co-occurrence matrix of a grayscale bitmap.
///
/// Pair enumeration per direction (row `i`, column `j`, `h x w` image):
/// - 0°: `(g[i][j-1], g[i][j])` for `j ≥ 1`
/// - 45°: `(g[i][j], g[i-1][j+1])` for `i ≥ 1`, `j < w-1`
/// - 90°: `(g[i-1][j], g[i][j])` for `i ≥ 1`
/// - 135°: with `s = w-1`, `(g[i][s-j], g[i-1][s-1-j])` for `i ≥ 1`, `j < w-1`
///
/// Normalization divides by the pair count, or by 1 if no pair exists.
pub fn cooccurrence_matrix(bitmap: &Bitmap, params: &GlcmParams) -> Result<CooccurrenceMatrix> {
    bitmap.require_grayscale("cooccurrence_matrix")?;
    let g = bitmap.planes()[0].view();
    let (h, w) = g.dim();

    let max_gray = if params.auto_gray {
        g.iter().copied().max().unwrap_or(0)
    } else {
        u8::MAX
    };
    let levels = usize::from(max_gray) + 1;
    debug!(direction = ?params.direction, levels, rows = h, cols = w, "co-occurrence");

    let mut matrix = Array2::<f64>::zeros((levels, levels));
    let mut pairs: u64 = 0;
    let mut count = |a: u8, b: u8| {
        matrix[(usize::from(a), usize::from(b))] += 1.0;
        pairs += 1;
    };

    match params.direction {
        CooccurrenceDirection::Degrees0 => {
            for i in 0..h {
                for j in 1..w {
                    count(g[(i, j - 1)], g[(i, j)]);
                }
            }
        }
        CooccurrenceDirection::Degrees45 => {
            for i in 1..h {
                for j in 0..w.saturating_sub(1) {
                    count(g[(i, j)], g[(i - 1, j + 1)]);
                }
            }
        }
        CooccurrenceDirection::Degrees90 => {
            for i in 1..h {
                for j in 0..w {
                    count(g[(i - 1, j)], g[(i, j)]);
                }
            }
        }
        CooccurrenceDirection::Degrees135 => {
            let s = w.saturating_sub(1);
            for i in 1..h {
                for j in 0..s {
                    count(g[(i, s - j)], g[(i - 1, s - 1 - j)]);
                }
            }
        }
    }

    if params.normalize {
        let divisor = if pairs == 0 { 1.0 } else { pairs as f64 };
        matrix.mapv_inplace(|v| v / divisor);
    }

    Ok(CooccurrenceMatrix {
        matrix,
        pairs,
        normalized: params.normalize,
    })
}

/// Compute a Haralick texture measure over a co-occurrence matrix.
///
/// The matrix is treated as a joint distribution; raw counts are
/// normalized by their sum first. An empty matrix yields 0.
pub fn haralick(glcm: &CooccurrenceMatrix, texture: GlcmTexture) -> f64 {
    let total = glcm.sum();
    if total <= 0.0 {
        return 0.0;
    }
    let n = glcm.levels();
    let p: Vec<f64> = glcm.matrix.iter().map(|v| v / total).collect();
    compute_texture(&p, n, texture)
}

fn compute_texture(glcm: &[f64], n: usize, texture: GlcmTexture) -> f64 {
    match texture {
        GlcmTexture::Energy => glcm.iter().map(|p| p * p).sum(),
        GlcmTexture::Contrast => {
            let mut val = 0.0;
            for i in 0..n {
                for j in 0..n {
                    let diff = (i as f64 - j as f64).powi(2);
                    val += glcm[i * n + j] * diff;
                }
            }
            val
        }
        GlcmTexture::Homogeneity => {
            let mut val = 0.0;
            for i in 0..n {
                for j in 0..n {
                    val += glcm[i * n + j] / (1.0 + (i as f64 - j as f64).abs());
                }
            }
            val
        }
        GlcmTexture::Correlation => {
            let mut mu_i = 0.0;
            let mut mu_j = 0.0;
            for i in 0..n {
                for j in 0..n {
                    let p = glcm[i * n + j];
                    mu_i += i as f64 * p;
                    mu_j += j as f64 * p;
                }
            }
            let mut sig_i = 0.0;
            let mut sig_j = 0.0;
            for i in 0..n {
                for j in 0..n {
                    let p = glcm[i * n + j];
                    sig_i += (i as f64 - mu_i).powi(2) * p;
                    sig_j += (j as f64 - mu_j).powi(2) * p;
                }
            }
            sig_i = sig_i.sqrt();
            sig_j = sig_j.sqrt();

            if sig_i < 1e-15 || sig_j < 1e-15 {
                return 0.0;
            }

            let mut corr = 0.0;
            for i in 0..n {
                for j in 0..n {
                    corr += glcm[i * n + j] * (i as f64 - mu_i) * (j as f64 - mu_j);
                }
            }
            corr / (sig_i * sig_j)
        }
        GlcmTexture::Entropy => glcm
            .iter()
            .filter(|&&p| p > 0.0)
            .map(|p| -p * p.ln())
            .sum(),
        GlcmTexture::Dissimilarity => {
            let mut val = 0.0;
            for i in 0..n {
                for j in 0..n {
                    val += glcm[i * n + j] * (i as f64 - j as f64).abs();
                }
            }
            val
        }
    }
}
