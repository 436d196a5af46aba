//! Colour-mode tagging for bitmaps

use serde::{Deserialize, Serialize};
use std::fmt;

/// Colour layout of a [`Bitmap`](super::Bitmap)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorMode {
    /// One 8-bit intensity channel
    Grayscale,
    /// Three 8-bit channels: red, green, blue
    Rgb,
}

impl ColorMode {
    /// Number of planes stored for this mode
    pub fn channel_count(&self) -> usize {
        self.channels().len()
    }

    /// Channels present in this mode, in plane order
    pub fn channels(&self) -> &'static [Channel] {
        match self {
            ColorMode::Grayscale => &[Channel::Gray],
            ColorMode::Rgb => &[Channel::Red, Channel::Green, Channel::Blue],
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Grayscale => write!(f, "grayscale"),
            ColorMode::Rgb => write!(f, "RGB"),
        }
    }
}

/// A single sample channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Gray,
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Plane index of this channel under `mode`, or `None` if absent
    pub fn plane_index(&self, mode: ColorMode) -> Option<usize> {
        match (self, mode) {
            (Channel::Gray, ColorMode::Grayscale) => Some(0),
            (Channel::Red, ColorMode::Rgb) => Some(0),
            (Channel::Green, ColorMode::Rgb) => Some(1),
            (Channel::Blue, ColorMode::Rgb) => Some(2),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_indices() {
        assert_eq!(Channel::Gray.plane_index(ColorMode::Grayscale), Some(0));
        assert_eq!(Channel::Blue.plane_index(ColorMode::Rgb), Some(2));
        assert_eq!(Channel::Red.plane_index(ColorMode::Grayscale), None);
        assert_eq!(Channel::Gray.plane_index(ColorMode::Rgb), None);
    }

    #[test]
    fn test_channel_count() {
        assert_eq!(ColorMode::Grayscale.channel_count(), 1);
        assert_eq!(ColorMode::Rgb.channel_count(), 3);
    }
}
