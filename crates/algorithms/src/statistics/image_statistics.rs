//! Per-channel intensity statistics
//!
//! One pass over the bitmap fills a 256-bin count array per channel;
//! each array is then frozen into a [`Histogram`].

use tessera_core::{Algorithm, Bitmap, Channel, ColorMode, Error, Histogram, Result};
use tracing::debug;

/// Intensity histograms of every channel present in a bitmap
#[derive(Debug, Clone, PartialEq)]
pub struct ImageStatistics {
    mode: ColorMode,
    histograms: Vec<Histogram>,
    pixel_count: usize,
}

impl ImageStatistics {
    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Number of pixels per channel
    pub fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Histogram of one channel; fails if the bitmap did not have it
    pub fn histogram(&self, channel: Channel) -> Result<&Histogram> {
        channel
            .plane_index(self.mode)
            .and_then(|idx| self.histograms.get(idx))
            .ok_or_else(|| Error::UnsupportedColorMode {
                operation: channel_operation(channel),
                mode: self.mode,
            })
    }

    pub fn gray(&self) -> Result<&Histogram> {
        self.histogram(Channel::Gray)
    }

    pub fn red(&self) -> Result<&Histogram> {
        self.histogram(Channel::Red)
    }

    pub fn green(&self) -> Result<&Histogram> {
        self.histogram(Channel::Green)
    }

    pub fn blue(&self) -> Result<&Histogram> {
        self.histogram(Channel::Blue)
    }
}

fn channel_operation(channel: Channel) -> &'static str {
    match channel {
        Channel::Gray => "gray histogram",
        Channel::Red => "red histogram",
        Channel::Green => "green histogram",
        Channel::Blue => "blue histogram",
    }
}

/// Image statistics as an [`Algorithm`]
#[derive(Debug, Clone, Default)]
pub struct ImageStatisticsAlgorithm;

impl Algorithm for ImageStatisticsAlgorithm {
    type Input = Bitmap;
    type Output = ImageStatistics;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "ImageStatistics"
    }

    fn description(&self) -> &'static str {
        "Per-channel intensity histograms with summary statistics"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output> {
        Ok(image_statistics(&input))
    }
}

/// Build per-channel histograms of `bitmap`
pub fn image_statistics(bitmap: &Bitmap) -> ImageStatistics {
    debug!(rows = bitmap.rows(), cols = bitmap.cols(), mode = %bitmap.mode(), "image statistics");

    let histograms = bitmap
        .planes()
        .iter()
        .map(|plane| {
            let mut bins = vec![0u32; 256];
            for &v in plane.iter() {
                bins[usize::from(v)] += 1;
            }
            Histogram::new(bins)
        })
        .collect();

    ImageStatistics {
        mode: bitmap.mode(),
        histograms,
        pixel_count: bitmap.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gray_statistics() {
        let bitmap = Bitmap::from_gray_vec(vec![10, 20, 10, 20], 2, 2).unwrap();
        let stats = image_statistics(&bitmap);
        assert_eq!(stats.pixel_count(), 4);
        let gray = stats.gray().unwrap();
        assert_relative_eq!(gray.mean(), 15.0);
        assert_eq!(gray.values()[10], 2);
        assert!(stats.red().is_err());
    }

    #[test]
    fn test_rgb_channels_are_independent() {
        let bitmap = Bitmap::filled_rgb(3, 2, [1, 50, 200]);
        let stats = ImageStatisticsAlgorithm.execute_default(bitmap).unwrap();
        assert_eq!(stats.red().unwrap().mode(), 1);
        assert_eq!(stats.green().unwrap().mode(), 50);
        assert_eq!(stats.blue().unwrap().mode(), 200);
        assert_eq!(stats.blue().unwrap().total(), 6);
        assert!(matches!(
            stats.gray(),
            Err(Error::UnsupportedColorMode { .. })
        ));
    }
}
