//! # Domain Models
//!
//! * [`person::Person`]: one input record (age and salary).
//! * [`aggregate::AggregateResult`]: the youngest age paired with the salary total.
//!
//! Both are small `Copy` values built per call and dropped once consumed.

pub mod aggregate;
pub mod person;
