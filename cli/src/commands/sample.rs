use cohort_common::config::Config;
use cohort_common::models::person::Person;

use crate::commands::aggregate;

/// The fixed group aggregated by `cohort sample`.
pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new(30, 1000),
        Person::new(25, 1500),
        Person::new(35, 2000),
    ]
}

pub fn sample(cfg: &Config) -> anyhow::Result<()> {
    aggregate::aggregate(sample_people(), cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cohort_core::aggregate::compute_aggregates;

    #[test]
    fn test_sample_result_line() {
        let result = compute_aggregates(&sample_people());
        assert_eq!(result.to_string(), "Youngest age: 25, total salary: 4500");
    }
}
