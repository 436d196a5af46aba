//! Statistical summaries of bitmaps
//!
//! - **image_statistics**: per-channel intensity histograms

pub mod image_statistics;

pub use image_statistics::{image_statistics, ImageStatistics, ImageStatisticsAlgorithm};
