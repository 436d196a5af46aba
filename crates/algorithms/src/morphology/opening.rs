//! Morphological opening (erosion followed by dilation)
//!
//! Removes small bright features (noise, spikes) while preserving
//! the overall shape and size of larger bright regions.

use serde::{Deserialize, Serialize};
use tessera_core::{Bitmap, InPlaceFilter, Result};

use super::dilate::dilate;
use super::element::StructuringElement;
use super::erode::erode;

/// Parameters for morphological opening
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpeningParams {
    pub element: StructuringElement,
}

/// Opening filter
#[derive(Debug, Clone, Default)]
pub struct Opening;

impl InPlaceFilter for Opening {
    type Params = OpeningParams;

    fn name(&self) -> &'static str {
        "Opening"
    }

    fn description(&self) -> &'static str {
        "Morphological opening (erosion then dilation) to remove small bright features"
    }

    fn apply_in_place(&self, bitmap: &mut Bitmap, params: &Self::Params) -> Result<()> {
        opening(bitmap, &params.element)
    }
}

/// Perform morphological opening on a bitmap in place
///
/// Opening = erode then dilate, both with the same element.
pub fn opening(bitmap: &mut Bitmap, element: &StructuringElement) -> Result<()> {
    erode(bitmap, element)?;
    dilate(bitmap, element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_removes_isolated_spike() {
        let mut bitmap = Bitmap::filled_gray(9, 9, 0);
        bitmap.set_gray(4, 4, 255).unwrap();
        opening(&mut bitmap, &StructuringElement::flat(1)).unwrap();
        assert_eq!(bitmap.get_gray(4, 4).unwrap(), 0);
    }

    #[test]
    fn test_opening_keeps_large_block() {
        let mut bitmap = Bitmap::filled_gray(12, 12, 0);
        for r in 3..9 {
            for c in 3..9 {
                bitmap.set_gray(r, c, 255).unwrap();
            }
        }
        let before = bitmap.clone();
        opening(&mut bitmap, &StructuringElement::flat(1)).unwrap();
        assert_eq!(bitmap, before);
    }
}
