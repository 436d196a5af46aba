//! Neighbourhood smoothing filters

mod mean;

pub use mean::{mean_filter, MeanFilter, MeanMode, MeanParams};
