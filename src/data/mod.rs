//! Data handling.

mod dataset;

pub use dataset::Dataset;
