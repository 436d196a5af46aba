//! Square neighbourhood windows for sliding-window passes

use ndarray::ArrayView2;

/// A square window of side `2 * radius + 1` centred on a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    radius: usize,
}

impl Window {
    pub fn new(radius: usize) -> Self {
        Self { radius }
    }

    /// Get the radius of the window
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Side length of the window
    pub fn size(&self) -> usize {
        self.radius * 2 + 1
    }

    /// Iterate over the in-bounds samples of `plane` around (row, col).
    ///
    /// Positions falling outside the plane are skipped, not padded.
    pub fn samples<'a>(
        &self,
        plane: ArrayView2<'a, u8>,
        row: usize,
        col: usize,
    ) -> WindowIterator<'a> {
        WindowIterator {
            plane,
            center_row: row as isize,
            center_col: col as isize,
            radius: self.radius as isize,
            dr: -(self.radius as isize),
            dc: -(self.radius as isize),
        }
    }
}

/// Iterator over the in-bounds values of a [`Window`]
pub struct WindowIterator<'a> {
    plane: ArrayView2<'a, u8>,
    center_row: isize,
    center_col: isize,
    radius: isize,
    dr: isize,
    dc: isize,
}

impl Iterator for WindowIterator<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let (rows, cols) = self.plane.dim();
        while self.dr <= self.radius {
            let nr = self.center_row + self.dr;
            let nc = self.center_col + self.dc;

            if self.dc < self.radius {
                self.dc += 1;
            } else {
                self.dc = -self.radius;
                self.dr += 1;
            }

            if nr >= 0 && nc >= 0 && (nr as usize) < rows && (nc as usize) < cols {
                return Some(self.plane[(nr as usize, nc as usize)]);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn test_window_size() {
        let w = Window::new(2);
        assert_eq!(w.radius(), 2);
        assert_eq!(w.size(), 5);
    }

    #[test]
    fn test_samples_interior() {
        let plane = Array2::from_shape_fn((5, 5), |(r, c)| (r * 5 + c) as u8);
        let values: Vec<u8> = Window::new(1).samples(plane.view(), 2, 2).collect();
        assert_eq!(values, vec![6, 7, 8, 11, 12, 13, 16, 17, 18]);
    }

    #[test]
    fn test_samples_corner_skips_out_of_bounds() {
        let plane = Array2::from_shape_fn((3, 3), |(r, c)| (r * 3 + c) as u8);
        let values: Vec<u8> = Window::new(1).samples(plane.view(), 0, 0).collect();
        assert_eq!(values, vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_radius_zero_is_center_only() {
        let plane = Array2::from_elem((2, 2), 7u8);
        let values: Vec<u8> = Window::new(0).samples(plane.view(), 1, 1).collect();
        assert_eq!(values, vec![7]);
    }
}
