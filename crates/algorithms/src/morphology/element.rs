//! Structuring element definitions for morphological operations
//!
//! A structuring element is a square integer matrix of odd side `2r + 1`.
//! Each weight is added to (dilation) or subtracted from (erosion) the
//! sample it overlaps before the window is reduced.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tessera_core::{Error, Result};

/// Weights of a structuring element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StructuringElement {
    /// All weights 1, side `2 * radius + 1`
    Ones(usize),
    /// All weights 0 (plain max/min filter), side `2 * radius + 1`
    Flat(usize),
    /// User-provided weights (must be odd-sized and square)
    Custom(Vec<Vec<i32>>),
}

impl Default for StructuringElement {
    fn default() -> Self {
        StructuringElement::Ones(1)
    }
}

impl StructuringElement {
    /// All-ones element; a radius below 1 is raised to 1
    pub fn ones(radius: usize) -> Self {
        StructuringElement::Ones(radius.max(1))
    }

    /// Zero-weight element; a radius below 1 is raised to 1
    pub fn flat(radius: usize) -> Self {
        StructuringElement::Flat(radius.max(1))
    }

    /// Validate the structuring element, returning an error for invalid configurations
    pub fn validate(&self) -> Result<()> {
        match self {
            StructuringElement::Ones(r) | StructuringElement::Flat(r) => {
                if *r == 0 {
                    return Err(Error::InvalidParameter {
                        name: "radius",
                        value: "0".to_string(),
                        reason: "structuring element radius must be at least 1".to_string(),
                    });
                }
                Ok(())
            }
            StructuringElement::Custom(weights) => {
                if weights.is_empty() {
                    return Err(Error::InvalidParameter {
                        name: "custom_weights",
                        value: "empty".to_string(),
                        reason: "custom weights must not be empty".to_string(),
                    });
                }
                let size = weights.len();
                if size % 2 == 0 {
                    return Err(Error::InvalidParameter {
                        name: "custom_weights",
                        value: format!("{}x{}", size, size),
                        reason: "custom weights size must be odd".to_string(),
                    });
                }
                for row in weights {
                    if row.len() != size {
                        return Err(Error::InvalidParameter {
                            name: "custom_weights",
                            value: format!("row length {}", row.len()),
                            reason: format!("custom weights must be square (expected {})", size),
                        });
                    }
                }
                Ok(())
            }
        }
    }

    /// Get the radius of the structuring element
    pub fn radius(&self) -> usize {
        match self {
            StructuringElement::Ones(r) | StructuringElement::Flat(r) => *r,
            StructuringElement::Custom(weights) => weights.len() / 2,
        }
    }

    /// Side length of the element
    pub fn size(&self) -> usize {
        self.radius() * 2 + 1
    }

    /// Materialize the weight matrix, indexed `(dr + r, dc + r)`.
    ///
    /// Call [`validate`](Self::validate) first; a ragged custom matrix is
    /// padded with zeros here rather than rejected.
    pub fn weights(&self) -> Array2<i32> {
        let size = self.size();
        match self {
            StructuringElement::Ones(_) => Array2::from_elem((size, size), 1),
            StructuringElement::Flat(_) => Array2::zeros((size, size)),
            StructuringElement::Custom(weights) => Array2::from_shape_fn((size, size), |(r, c)| {
                weights.get(r).and_then(|row| row.get(c)).copied().unwrap_or(0)
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ones_weights() {
        let se = StructuringElement::ones(1);
        let w = se.weights();
        assert_eq!(w.dim(), (3, 3));
        assert!(w.iter().all(|&v| v == 1));
    }

    #[test]
    fn test_flat_weights() {
        let w = StructuringElement::flat(2).weights();
        assert_eq!(w.dim(), (5, 5));
        assert!(w.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_constructor_clamps_radius() {
        assert_eq!(StructuringElement::ones(0), StructuringElement::Ones(1));
        assert_eq!(StructuringElement::flat(0).radius(), 1);
    }

    #[test]
    fn test_custom_weights_layout() {
        let se = StructuringElement::Custom(vec![
            vec![0, 1, 0],
            vec![2, 3, 4],
            vec![0, 5, 0],
        ]);
        se.validate().unwrap();
        let w = se.weights();
        assert_eq!(se.radius(), 1);
        assert_eq!(w[(1, 0)], 2);
        assert_eq!(w[(2, 1)], 5);
    }

    #[test]
    fn test_validate_zero_radius() {
        assert!(StructuringElement::Ones(0).validate().is_err());
        assert!(StructuringElement::Flat(0).validate().is_err());
    }

    #[test]
    fn test_validate_even_custom() {
        let weights = vec![vec![1, 0], vec![0, 1]];
        assert!(StructuringElement::Custom(weights).validate().is_err());
    }

    #[test]
    fn test_validate_ragged_custom() {
        let weights = vec![vec![1, 1, 1], vec![1, 1], vec![1, 1, 1]];
        assert!(StructuringElement::Custom(weights).validate().is_err());
        assert!(StructuringElement::Custom(vec![]).validate().is_err());
    }

    #[test]
    fn test_default() {
        let se = StructuringElement::default();
        assert_eq!(se, StructuringElement::Ones(1));
        assert_eq!(se.radius(), 1);
    }
}
