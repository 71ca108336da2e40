pub mod dataset;
pub mod distance;
