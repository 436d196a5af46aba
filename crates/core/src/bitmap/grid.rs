//! Main Bitmap type

use crate::bitmap::{Channel, ColorMode};
use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView2};

/// An 8-bit pixel buffer.
///
/// `Bitmap` stores one `Array2<u8>` plane per channel: a single gray plane
/// for [`ColorMode::Grayscale`], or red, green and blue planes for
/// [`ColorMode::Rgb`]. Planes are indexed `(row, col)`; `height` is the
/// number of rows and `width` the number of columns.
///
/// `Clone` is the deep copy used as the read snapshot by in-place filters.
///
/// # Example
///
/// ```ignore
/// use tessera_core::Bitmap;
///
/// let mut bitmap = Bitmap::new_gray(4, 6);
/// bitmap.set_gray(1, 2, 200)?;
/// assert_eq!(bitmap.get_gray(1, 2)?, 200);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    /// Channel planes in the order given by `mode.channels()`
    planes: Vec<Array2<u8>>,
    mode: ColorMode,
}

impl Bitmap {
    /// Create a grayscale bitmap filled with zeros
    pub fn new_gray(rows: usize, cols: usize) -> Self {
        Self::filled_gray(rows, cols, 0)
    }

    /// Create an RGB bitmap filled with zeros
    pub fn new_rgb(rows: usize, cols: usize) -> Self {
        Self::filled_rgb(rows, cols, [0, 0, 0])
    }

    /// Create a grayscale bitmap filled with a specific value
    pub fn filled_gray(rows: usize, cols: usize, value: u8) -> Self {
        Self {
            planes: vec![Array2::from_elem((rows, cols), value)],
            mode: ColorMode::Grayscale,
        }
    }

    /// Create an RGB bitmap filled with a specific colour
    pub fn filled_rgb(rows: usize, cols: usize, rgb: [u8; 3]) -> Self {
        Self {
            planes: rgb
                .iter()
                .map(|&v| Array2::from_elem((rows, cols), v))
                .collect(),
            mode: ColorMode::Rgb,
        }
    }

    /// Create a grayscale bitmap from row-major data
    pub fn from_gray_vec(data: Vec<u8>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }

        let plane = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self::from_gray_array(plane))
    }

    /// Create an RGB bitmap from row-major `[r, g, b]` triples
    pub fn from_rgb_vec(data: Vec<[u8; 3]>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }

        let mut planes = Vec::with_capacity(3);
        for c in 0..3 {
            let channel: Vec<u8> = data.iter().map(|px| px[c]).collect();
            planes.push(
                Array2::from_shape_vec((rows, cols), channel)
                    .map_err(|e| Error::Other(e.to_string()))?,
            );
        }

        Ok(Self {
            planes,
            mode: ColorMode::Rgb,
        })
    }

    /// Create a grayscale bitmap from an ndarray plane
    pub fn from_gray_array(plane: Array2<u8>) -> Self {
        Self {
            planes: vec![plane],
            mode: ColorMode::Grayscale,
        }
    }

    /// Create an RGB bitmap from three equally sized planes
    pub fn from_rgb_planes(red: Array2<u8>, green: Array2<u8>, blue: Array2<u8>) -> Result<Self> {
        let (er, ec) = red.dim();
        for plane in [&green, &blue] {
            let (ar, ac) = plane.dim();
            if (ar, ac) != (er, ec) {
                return Err(Error::SizeMismatch { er, ec, ar, ac });
            }
        }

        Ok(Self {
            planes: vec![red, green, blue],
            mode: ColorMode::Rgb,
        })
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.planes[0].nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.planes[0].ncols()
    }

    /// Height in pixels (same as [`rows`](Self::rows))
    pub fn height(&self) -> usize {
        self.rows()
    }

    /// Width in pixels (same as [`cols`](Self::cols))
    pub fn width(&self) -> usize {
        self.cols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.planes[0].dim()
    }

    /// Number of pixels
    pub fn len(&self) -> usize {
        self.planes[0].len()
    }

    /// Whether the bitmap has no pixels
    pub fn is_empty(&self) -> bool {
        self.planes[0].is_empty()
    }

    // Colour mode

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn is_grayscale(&self) -> bool {
        self.mode == ColorMode::Grayscale
    }

    pub fn is_rgb(&self) -> bool {
        self.mode == ColorMode::Rgb
    }

    /// Fail with [`Error::UnsupportedColorMode`] unless the bitmap is grayscale
    pub fn require_grayscale(&self, operation: &'static str) -> Result<()> {
        if self.is_grayscale() {
            Ok(())
        } else {
            Err(Error::UnsupportedColorMode {
                operation,
                mode: self.mode,
            })
        }
    }

    // Plane access

    /// Read view of one channel plane
    pub fn plane(&self, channel: Channel) -> Result<ArrayView2<'_, u8>> {
        let idx = self.plane_index(channel)?;
        Ok(self.planes[idx].view())
    }

    /// All planes, in channel order
    pub fn planes(&self) -> &[Array2<u8>] {
        &self.planes
    }

    /// Replace every plane at once, keeping the colour mode.
    ///
    /// The number of planes and their shape must match the current bitmap.
    pub fn replace_planes(&mut self, planes: Vec<Array2<u8>>) -> Result<()> {
        if planes.len() != self.planes.len() {
            return Err(Error::Other(format!(
                "expected {} planes for a {} bitmap, got {}",
                self.planes.len(),
                self.mode,
                planes.len()
            )));
        }

        let (er, ec) = self.shape();
        for plane in &planes {
            let (ar, ac) = plane.dim();
            if (ar, ac) != (er, ec) {
                return Err(Error::SizeMismatch { er, ec, ar, ac });
            }
        }

        self.planes = planes;
        Ok(())
    }

    /// Recompute every plane from its current contents.
    ///
    /// All new planes are computed before any is stored, so `f` always sees
    /// the unmodified input.
    pub fn map_planes<F>(&mut self, f: F) -> Result<()>
    where
        F: Fn(ArrayView2<'_, u8>) -> Result<Array2<u8>>,
    {
        let planes = self
            .planes
            .iter()
            .map(|plane| f(plane.view()))
            .collect::<Result<Vec<_>>>()?;
        self.replace_planes(planes)
    }

    /// Replace the whole bitmap, including its shape and colour mode
    pub fn replace(&mut self, other: Bitmap) {
        *self = other;
    }

    /// Convert a grayscale bitmap to RGB by replicating the gray plane.
    ///
    /// RGB bitmaps are left unchanged.
    pub fn to_rgb(&mut self) {
        if self.is_grayscale() {
            let gray = self.planes[0].clone();
            self.planes = vec![gray.clone(), gray.clone(), gray];
            self.mode = ColorMode::Rgb;
        }
    }

    /// Gray plane as a real-valued field (for moment computations)
    pub fn to_field(&self) -> Result<Array2<f64>> {
        self.require_grayscale("to_field")?;
        Ok(self.planes[0].mapv(f64::from))
    }

    // Pixel access

    /// Get a channel sample at (row, col)
    pub fn get(&self, row: usize, col: usize, channel: Channel) -> Result<u8> {
        let idx = self.plane_index(channel)?;
        self.planes[idx]
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Set a channel sample at (row, col)
    pub fn set(&mut self, row: usize, col: usize, channel: Channel, value: u8) -> Result<()> {
        let idx = self.plane_index(channel)?;
        let (rows, cols) = self.shape();
        match self.planes[idx].get_mut((row, col)) {
            Some(px) => {
                *px = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            }),
        }
    }

    pub fn get_gray(&self, row: usize, col: usize) -> Result<u8> {
        self.get(row, col, Channel::Gray)
    }

    pub fn get_red(&self, row: usize, col: usize) -> Result<u8> {
        self.get(row, col, Channel::Red)
    }

    pub fn get_green(&self, row: usize, col: usize) -> Result<u8> {
        self.get(row, col, Channel::Green)
    }

    pub fn get_blue(&self, row: usize, col: usize) -> Result<u8> {
        self.get(row, col, Channel::Blue)
    }

    /// Get the `[r, g, b]` triple at (row, col)
    pub fn get_rgb(&self, row: usize, col: usize) -> Result<[u8; 3]> {
        Ok([
            self.get_red(row, col)?,
            self.get_green(row, col)?,
            self.get_blue(row, col)?,
        ])
    }

    pub fn set_gray(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        self.set(row, col, Channel::Gray, value)
    }

    pub fn set_red(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        self.set(row, col, Channel::Red, value)
    }

    pub fn set_green(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        self.set(row, col, Channel::Green, value)
    }

    pub fn set_blue(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        self.set(row, col, Channel::Blue, value)
    }

    pub fn set_rgb(&mut self, row: usize, col: usize, rgb: [u8; 3]) -> Result<()> {
        self.set_red(row, col, rgb[0])?;
        self.set_green(row, col, rgb[1])?;
        self.set_blue(row, col, rgb[2])
    }

    fn plane_index(&self, channel: Channel) -> Result<usize> {
        channel
            .plane_index(self.mode)
            .ok_or(Error::UnsupportedColorMode {
                operation: "channel access",
                mode: self.mode,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bitmap_creation() {
        let bitmap = Bitmap::new_gray(10, 20);
        assert_eq!(bitmap.rows(), 10);
        assert_eq!(bitmap.cols(), 20);
        assert_eq!(bitmap.height(), 10);
        assert_eq!(bitmap.width(), 20);
        assert!(bitmap.is_grayscale());
        assert_eq!(bitmap.planes().len(), 1);
    }

    #[test]
    fn test_gray_access() {
        let mut bitmap = Bitmap::new_gray(4, 4);
        bitmap.set_gray(2, 3, 42).unwrap();
        assert_eq!(bitmap.get_gray(2, 3).unwrap(), 42);
        assert!(bitmap.get_gray(4, 0).is_err());
        assert!(bitmap.get_red(0, 0).is_err());
    }

    #[test]
    fn test_rgb_access() {
        let mut bitmap = Bitmap::new_rgb(3, 3);
        bitmap.set_rgb(1, 1, [10, 20, 30]).unwrap();
        assert_eq!(bitmap.get_rgb(1, 1).unwrap(), [10, 20, 30]);
        assert_eq!(bitmap.get_green(1, 1).unwrap(), 20);
        assert!(matches!(
            bitmap.get_gray(0, 0),
            Err(Error::UnsupportedColorMode { mode: ColorMode::Rgb, .. })
        ));
    }

    #[test]
    fn test_from_vec_checks_length() {
        assert!(Bitmap::from_gray_vec(vec![0; 5], 2, 3).is_err());
        let b = Bitmap::from_rgb_vec(vec![[1, 2, 3]; 6], 2, 3).unwrap();
        assert_eq!(b.get_blue(1, 2).unwrap(), 3);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut original = Bitmap::filled_gray(2, 2, 5);
        let snapshot = original.clone();
        original.set_gray(0, 0, 99).unwrap();
        assert_eq!(snapshot.get_gray(0, 0).unwrap(), 5);
    }

    #[test]
    fn test_replace_planes_rejects_wrong_shape() {
        let mut bitmap = Bitmap::new_gray(3, 3);
        let err = bitmap.replace_planes(vec![Array2::zeros((2, 3))]);
        assert!(matches!(err, Err(Error::SizeMismatch { .. })));
        assert!(bitmap.replace_planes(vec![Array2::zeros((3, 3)); 3]).is_err());
    }

    #[test]
    fn test_to_rgb_replicates_gray() {
        let mut bitmap = Bitmap::filled_gray(2, 2, 77);
        bitmap.to_rgb();
        assert!(bitmap.is_rgb());
        assert_eq!(bitmap.get_rgb(1, 0).unwrap(), [77, 77, 77]);
    }

    #[test]
    fn test_to_field() {
        let bitmap = Bitmap::from_gray_vec(vec![0, 128, 255, 1], 2, 2).unwrap();
        let field = bitmap.to_field().unwrap();
        assert_relative_eq!(field[(0, 1)], 128.0);
        assert_relative_eq!(field[(1, 0)], 255.0);
        assert!(Bitmap::new_rgb(1, 1).to_field().is_err());
    }
}
