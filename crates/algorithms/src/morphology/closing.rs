//! Morphological closing (dilation followed by erosion)
//!
//! Fills small dark gaps and holes while preserving the overall shape
//! of larger dark regions.

use serde::{Deserialize, Serialize};
use tessera_core::{Bitmap, InPlaceFilter, Result};

use super::dilate::dilate;
use super::element::StructuringElement;
use super::erode::erode;

/// Parameters for morphological closing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClosingParams {
    pub element: StructuringElement,
}

/// Closing filter
#[derive(Debug, Clone, Default)]
pub struct Closing;

impl InPlaceFilter for Closing {
    type Params = ClosingParams;

    fn name(&self) -> &'static str {
        "Closing"
    }

    fn description(&self) -> &'static str {
        "Morphological closing (dilation then erosion) to fill small dark gaps"
    }

    fn apply_in_place(&self, bitmap: &mut Bitmap, params: &Self::Params) -> Result<()> {
        closing(bitmap, &params.element)
    }
}

/// Perform morphological closing on a bitmap in place
///
/// Closing = dilate then erode, both with the same element.
pub fn closing(bitmap: &mut Bitmap, element: &StructuringElement) -> Result<()> {
    dilate(bitmap, element)?;
    erode(bitmap, element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closing_fills_single_hole() {
        let mut bitmap = Bitmap::filled_gray(9, 9, 255);
        bitmap.set_gray(4, 4, 0).unwrap();
        closing(&mut bitmap, &StructuringElement::flat(1)).unwrap();
        assert_eq!(bitmap.get_gray(4, 4).unwrap(), 255);
    }

    #[test]
    fn test_closing_uniform_flat_is_identity() {
        let mut bitmap = Bitmap::filled_gray(6, 6, 42);
        closing(&mut bitmap, &StructuringElement::flat(2)).unwrap();
        assert!(bitmap.planes()[0].iter().all(|&v| v == 42));
    }
}
