//! Computes the youngest age and the total salary of a group of people.
//!
//! Two entry points are offered:
//!
//! * [`compute_aggregates`]: the pure reduction. It never fails and reports an
//!   empty group as having no youngest age.
//! * [`Aggregator`]: applies an [`EmptyInputPolicy`] on top of the reduction,
//!   for callers that want empty input rejected.
//!
//! Both reductions (minimum and sum) are associative and commutative, so the
//! result does not depend on record order. [`Accumulator::merge`] exposes that
//! property for callers that fold chunks separately.

use cohort_common::config::{Config, EmptyInputPolicy};
use cohort_common::error::AggregateError;
use cohort_common::models::aggregate::AggregateResult;
use cohort_common::models::person::Person;
use tracing::debug;

mod accumulator;

pub use accumulator::Accumulator;

/// Folds `people` into their youngest age and total salary in a single pass.
///
/// An empty slice yields `youngest_age: None` and `total_salary: 0`.
pub fn compute_aggregates(people: &[Person]) -> AggregateResult {
    people.iter().collect::<Accumulator>().finish()
}

/// Policy-aware front for [`compute_aggregates`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    policy: EmptyInputPolicy,
}

impl Aggregator {
    pub fn new(policy: EmptyInputPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.empty_policy)
    }

    pub fn policy(&self) -> EmptyInputPolicy {
        self.policy
    }

    pub fn aggregate(&self, people: &[Person]) -> Result<AggregateResult, AggregateError> {
        if people.is_empty() && self.policy == EmptyInputPolicy::Fail {
            return Err(AggregateError::EmptyInput);
        }

        let acc: Accumulator = people.iter().collect();
        debug!(records = acc.count(), "Aggregated people");

        let result = acc.finish();
        debug!(youngest_age = ?result.youngest_age, total_salary = result.total_salary);
        Ok(result)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
