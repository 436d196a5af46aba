//! Local binary patterns

use tessera_core::{Algorithm, Bitmap, Error, Histogram, Result};
use tracing::debug;

/// Neighbour offsets and their bit weights, clockwise from north-west
const NEIGHBOURS: [(isize, isize, u8); 8] = [
    (-1, -1, 128),
    (-1, 0, 64),
    (-1, 1, 32),
    (0, 1, 16),
    (1, 1, 8),
    (1, 0, 4),
    (1, -1, 2),
    (0, -1, 1),
];

/// LBP code histogram as an [`Algorithm`]
#[derive(Debug, Clone, Default)]
pub struct LocalBinaryPattern;

impl Algorithm for LocalBinaryPattern {
    type Input = Bitmap;
    type Output = Histogram;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "LocalBinaryPattern"
    }

    fn description(&self) -> &'static str {
        "Histogram of 8-neighbour local binary pattern codes"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        local_binary_pattern(&input)
    }
}

/// Histogram (256 bins) of the LBP codes of all interior pixels.
///
/// A neighbour sets its bit when the centre is strictly darker than it.
/// Border pixels produce no code.
pub fn local_binary_pattern(bitmap: &Bitmap) -> Result<Histogram> {
    bitmap.require_grayscale("local_binary_pattern")?;
    let g = bitmap.planes()[0].view();
    let (h, w) = g.dim();
    debug!(rows = h, cols = w, "local binary pattern");

    let mut bins = vec![0u32; 256];
    for i in 1..h.saturating_sub(1) {
        for j in 1..w.saturating_sub(1) {
            let centre = g[(i, j)];
            let code = NEIGHBOURS
                .iter()
                .filter(|(dr, dc, _)| {
                    let r = (i as isize + dr) as usize;
                    let c = (j as isize + dc) as usize;
                    centre < g[(r, c)]
                })
                .fold(0u8, |acc, &(_, _, weight)| acc | weight);
            bins[usize::from(code)] += 1;
        }
    }

    Ok(Histogram::new(bins))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_bright_neighbour() {
        #[rustfmt::skip]
        let data = vec![
            100, 10, 10,
            10,  50, 10,
            10,  10, 10,
        ];
        let bitmap = Bitmap::from_gray_vec(data, 3, 3).unwrap();
        let hist = local_binary_pattern(&bitmap).unwrap();
        assert_eq!(hist.total(), 1);
        assert_eq!(hist.values()[128], 1);
    }

    #[test]
    fn test_weights_per_neighbour() {
        // (row, col) of the bright neighbour -> expected code
        let cases = [
            ((0, 1), 64),
            ((0, 2), 32),
            ((1, 2), 16),
            ((2, 2), 8),
            ((2, 1), 4),
            ((2, 0), 2),
            ((1, 0), 1),
        ];
        for ((r, c), code) in cases {
            let mut bitmap = Bitmap::filled_gray(3, 3, 5);
            bitmap.set_gray(r, c, 9).unwrap();
            let hist = local_binary_pattern(&bitmap).unwrap();
            assert_eq!(hist.values()[code], 1, "neighbour at ({}, {})", r, c);
        }
    }

    #[test]
    fn test_equal_neighbours_set_no_bit() {
        let bitmap = Bitmap::filled_gray(6, 5, 77);
        let hist = LocalBinaryPattern.execute_default(bitmap).unwrap();
        assert_eq!(hist.values()[0], 12);
        assert_eq!(hist.total(), 12);
        assert_eq!(hist.values().len(), 256);
    }

    #[test]
    fn test_dark_centre_sets_all_bits() {
        let mut bitmap = Bitmap::filled_gray(3, 3, 200);
        bitmap.set_gray(1, 1, 0).unwrap();
        let hist = local_binary_pattern(&bitmap).unwrap();
        assert_eq!(hist.values()[255], 1);
    }

    #[test]
    fn test_too_small_has_no_codes() {
        let bitmap = Bitmap::filled_gray(2, 8, 1);
        assert_eq!(local_binary_pattern(&bitmap).unwrap().total(), 0);
    }

    #[test]
    fn test_rgb_rejected() {
        let bitmap = Bitmap::new_rgb(3, 3);
        assert!(local_binary_pattern(&bitmap).is_err());
    }
}
