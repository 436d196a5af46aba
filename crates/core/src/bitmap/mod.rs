//! Pixel buffer and neighbourhood primitives

mod color;
mod grid;
mod sample;
mod window;

pub use color::{Channel, ColorMode};
pub use grid::Bitmap;
pub use sample::clamp_sample;
pub use window::{Window, WindowIterator};
