//! Moment and shape descriptors
//!
//! - **hu**: raw, central and normalized moments, Hu invariants
//! - **shape**: area, Feret diameter and derived shape ratios

mod hu;
mod shape;

pub use hu::{
    central_moment, hu_moment, hu_moments, normalized_central_moment, raw_moment, HuMoments,
    MomentTable,
};
pub use shape::{
    area, area_equivalent_diameter, circularity, compactness, feret_diameter, feret_points,
    irregularity, perimeter_equivalent_diameter, roundness, shape_factor, thinness_ratio,
    ContourPoint,
};
