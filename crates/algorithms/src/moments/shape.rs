//! Shape descriptors of binary regions
//!
//! Region pixels are the gray samples equal to 255. Most descriptors are
//! plain ratios of the region area, its perimeter length and its Feret
//! diameter; the caller supplies whichever of those it has measured.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tessera_core::{Bitmap, Result};
use tracing::debug;

/// Integer point on a region contour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContourPoint {
    pub x: i32,
    pub y: i32,
}

impl ContourPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &ContourPoint) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }
}

impl From<(i32, i32)> for ContourPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Number of foreground (255) pixels in a grayscale bitmap
pub fn area(bitmap: &Bitmap) -> Result<usize> {
    bitmap.require_grayscale("area")?;
    let area = bitmap.planes()[0].iter().filter(|&&v| v == u8::MAX).count();
    debug!(area, "region area");
    Ok(area)
}

/// Diameter of the disc with the same area: `sqrt(4A/π)`
pub fn area_equivalent_diameter(area: usize) -> f64 {
    (4.0 * area as f64 / PI).sqrt()
}

/// Diameter of the circle with the same perimeter: `P/π`
pub fn perimeter_equivalent_diameter(perimeter: usize) -> f64 {
    perimeter as f64 / PI
}

/// `4πA / P²`; 1 for a disc
pub fn circularity(area: usize, perimeter: usize) -> f64 {
    let p = perimeter as f64;
    4.0 * PI * area as f64 / (p * p)
}

/// Area-equivalent diameter over Feret diameter
pub fn compactness(area: usize, feret_diameter: f64) -> f64 {
    area_equivalent_diameter(area) / feret_diameter
}

/// `4A / (π · feret²)`
pub fn roundness(area: usize, feret_diameter: f64) -> f64 {
    4.0 * area as f64 / (PI * feret_diameter * feret_diameter)
}

/// `P² / A`
pub fn shape_factor(area: usize, perimeter: usize) -> f64 {
    let p = perimeter as f64;
    p * p / area as f64
}

/// `4π · A / P`
pub fn thinness_ratio(area: usize, perimeter: usize) -> f64 {
    4.0 * PI * (area as f64 / perimeter as f64)
}

/// Reciprocal of the thinness ratio
pub fn irregularity(thinness_ratio: f64) -> f64 {
    1.0 / thinness_ratio
}

/// Largest Euclidean distance between two contour points (0 for fewer than two)
pub fn feret_diameter(points: &[ContourPoint]) -> f64 {
    feret_points(points).map_or(0.0, |(a, b)| a.distance(&b))
}

/// The pair of contour points realizing the Feret diameter.
///
/// Ties resolve to the first pair found scanning `i < j`.
pub fn feret_points(points: &[ContourPoint]) -> Option<(ContourPoint, ContourPoint)> {
    let mut best: Option<(ContourPoint, ContourPoint)> = None;
    let mut best_distance = f64::NEG_INFINITY;

    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let d = a.distance(b);
            if d > best_distance {
                best_distance = d;
                best = Some((*a, *b));
            }
        }
    }

    best
}
