//! Logging macros layered over `tracing`.
//!
//! Events emitted through these macros carry dedicated targets so the CLI
//! formatter can render them differently from ordinary `tracing` events.

/// Target used for successful outcomes, rendered with a check mark.
pub const SUCCESS_TARGET: &str = "cohort::success";

/// Target used for plain terminal lines, rendered without any prefix.
pub const PRINT_TARGET: &str = "cohort::print";

/// Reports a successful outcome.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}
