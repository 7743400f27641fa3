//! # Cohort Common
//!
//! Types shared by every crate in the workspace.
//!
//! * **[`models`]**: person records and aggregate results.
//! * **[`config`]**: runtime configuration assembled by the CLI.
//! * **[`error`]**: typed errors for record parsing and aggregation.

pub mod config;
pub mod error;
pub mod log;
pub mod models;

#[doc(hidden)]
pub use tracing as __tracing;
