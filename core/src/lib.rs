//! # Cohort Core
//!
//! Aggregation over groups of people. See [`aggregate`].

pub mod aggregate;
