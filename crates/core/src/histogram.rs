//! Intensity histogram container and histogram statistics
//!
//! A [`Histogram`] is built once from a completed count array and never
//! rescans pixels; every statistic is computed at construction time.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Immutable count array with precomputed summary statistics.
///
/// Bin `i` counts occurrences of value `i`. Intensity histograms use 256
/// bins, but any length is accepted (e.g. pattern-code histograms).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    values: Vec<u32>,
    mean: f64,
    std_dev: f64,
    entropy: f64,
    median: usize,
    mode: usize,
    min: usize,
    max: usize,
    total: u64,
}

impl Histogram {
    /// Build a histogram from a completed count array
    pub fn new(values: Vec<u32>) -> Self {
        let mut min = values.len();
        let mut max = 0;
        let mut total: u64 = 0;
        for (i, &hits) in values.iter().enumerate() {
            if hits != 0 {
                max = max.max(i);
                min = min.min(i);
                total += u64::from(hits);
            }
        }

        let mean = histogram_mean(&values);
        Self {
            std_dev: histogram_std_dev(&values, mean),
            median: histogram_median(&values),
            mode: histogram_mode(&values),
            entropy: histogram_entropy(&values),
            values,
            mean,
            min,
            max,
            total,
        }
    }

    /// Raw bin counts
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population standard deviation
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Shannon entropy in bits
    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    pub fn median(&self) -> usize {
        self.median
    }

    /// Most populated bin (lowest index on ties)
    pub fn mode(&self) -> usize {
        self.mode
    }

    /// Lowest non-empty bin, or the bin count if the histogram is empty
    pub fn min(&self) -> usize {
        self.min
    }

    /// Highest non-empty bin, or 0 if the histogram is empty
    pub fn max(&self) -> usize {
        self.max
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Range of bins around the median holding `percent` of the counts
    pub fn range(&self, percent: f64) -> Result<(usize, usize)> {
        histogram_range(&self.values, percent)
    }
}

fn total_hits(values: &[u32]) -> u64 {
    values.iter().map(|&v| u64::from(v)).sum()
}

/// Mean bin index weighted by count (0 for an empty histogram)
pub fn histogram_mean(values: &[u32]) -> f64 {
    let total = total_hits(values);
    if total == 0 {
        return 0.0;
    }
    let weighted: f64 = values
        .iter()
        .enumerate()
        .map(|(i, &hits)| i as f64 * f64::from(hits))
        .sum();
    weighted / total as f64
}

/// Population standard deviation around `mean` (0 for an empty histogram)
pub fn histogram_std_dev(values: &[u32], mean: f64) -> f64 {
    let total = total_hits(values);
    if total == 0 {
        return 0.0;
    }
    let acc: f64 = values
        .iter()
        .enumerate()
        .map(|(i, &hits)| {
            let diff = i as f64 - mean;
            diff * diff * f64::from(hits)
        })
        .sum();
    (acc / total as f64).sqrt()
}

/// First bin at which the cumulative count reaches half the total
pub fn histogram_median(values: &[u32]) -> usize {
    let half = total_hits(values) / 2;
    let mut acc: u64 = 0;
    for (i, &hits) in values.iter().enumerate() {
        acc += u64::from(hits);
        if acc >= half {
            return i;
        }
    }
    values.len()
}

/// Most populated bin; ties resolve to the lowest index
pub fn histogram_mode(values: &[u32]) -> usize {
    let mut mode = 0;
    let mut best = 0;
    for (i, &hits) in values.iter().enumerate() {
        if hits > best {
            best = hits;
            mode = i;
        }
    }
    mode
}

/// Shannon entropy of the bin distribution, in bits
pub fn histogram_entropy(values: &[u32]) -> f64 {
    let total = total_hits(values);
    if total == 0 {
        return 0.0;
    }
    values
        .iter()
        .filter(|&&hits| hits != 0)
        .map(|&hits| {
            let p = f64::from(hits) / total as f64;
            -p * p.log2()
        })
        .sum()
}

/// Bin range `(min, max)` around the median that holds `percent` of the counts.
///
/// Each tail trimmed holds at most `(1 - percent) / 2` of the total.
pub fn histogram_range(values: &[u32], percent: f64) -> Result<(usize, usize)> {
    if !(0.0..=1.0).contains(&percent) {
        return Err(Error::InvalidParameter {
            name: "percent",
            value: percent.to_string(),
            reason: "must be within [0, 1]".to_string(),
        });
    }

    let total = total_hits(values);
    let h = (total as f64 * (percent + (1.0 - percent) / 2.0)) as u64;
    let n = values.len();

    let mut min = 0;
    let mut hits = total;
    while min < n {
        hits -= u64::from(values[min]);
        if hits < h {
            break;
        }
        min += 1;
    }

    let mut max = n;
    let mut hits = total;
    while max > 0 {
        hits -= u64::from(values[max - 1]);
        if hits < h {
            break;
        }
        max -= 1;
    }

    Ok((min, max.saturating_sub(1)))
}
