//! Business logic layer

pub mod distribution;

pub use distribution::DistributionSummary;
