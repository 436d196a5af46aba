//! Mathematical morphology on 8-bit bitmaps
//!
//! Weighted grey-level operations driven by a [`StructuringElement`]:
//! - **Erosion**: minimum of sample minus weight (shrinks bright regions)
//! - **Dilation**: maximum of sample plus weight (expands bright regions)
//! - **Opening**: erosion then dilation
//! - **Closing**: dilation then erosion
//! - **Minimum**: plain window minimum, borders included
//!
//! Dilation and erosion leave the first row and first column untouched.

mod closing;
mod dilate;
mod element;
mod erode;
mod minimum;
mod opening;

pub use closing::{closing, Closing, ClosingParams};
pub use dilate::{dilate, Dilate, DilateParams};
pub use element::StructuringElement;
pub use erode::{erode, Erode, ErodeParams};
pub use minimum::{minimum, Minimum, MinimumParams};
pub use opening::{opening, Opening, OpeningParams};
