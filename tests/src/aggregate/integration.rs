#![cfg(test)]
use std::str::FromStr;

use cohort_common::config::{Config, EmptyInputPolicy};
use cohort_common::error::{AggregateError, InvalidRecordError};
use cohort_common::models::aggregate::AggregateResult;
use cohort_common::models::person::Person;
use cohort_core::aggregate::{Accumulator, Aggregator, compute_aggregates};
use rand::Rng;
use rand::seq::SliceRandom;

fn parse_all(records: &[&str]) -> Result<Vec<Person>, InvalidRecordError> {
    records.iter().map(|r| Person::from_str(r)).collect()
}

/// Text records flow through parsing and aggregation the way the CLI drives them.
#[test]
fn parsed_records_aggregate() -> anyhow::Result<()> {
    let people = parse_all(&["30:1000", "25:1500", "35:2000"])?;
    let result = Aggregator::from_config(&Config::default()).aggregate(&people)?;

    assert_eq!(result, AggregateResult::new(Some(25), 4500));
    assert_eq!(result.to_string(), "Youngest age: 25, total salary: 4500");
    Ok(())
}

#[test]
fn one_bad_record_rejects_the_batch() {
    let err = parse_all(&["30:1000", "25", "35:2000"]).unwrap_err();
    assert!(matches!(err, InvalidRecordError::MissingField { field: "salary", .. }));
}

#[test]
fn empty_policy_is_honoured() {
    let unbounded = Aggregator::from_config(&Config::default());
    let result = unbounded.aggregate(&[]).unwrap();
    assert_eq!(result.total_salary, 0);
    assert!(result.is_empty());
    assert_eq!(result.to_string(), "Youngest age: Infinity, total salary: 0");

    let strict = Aggregator::from_config(&Config {
        empty_policy: EmptyInputPolicy::Fail,
        ..Config::default()
    });
    assert_eq!(strict.aggregate(&[]), Err(AggregateError::EmptyInput));
}

/// Random groups: sum and minimum match a naive recomputation, in any order and
/// under any chunking.
#[test]
fn random_groups_are_order_and_chunk_independent() {
    let mut rng = rand::rng();

    for _ in 0..50 {
        let len: usize = rng.random_range(1..=200);
        let mut people: Vec<Person> = (0..len)
            .map(|_| Person::new(rng.random_range(0..=120), rng.random_range(0..=1_000_000)))
            .collect();

        let expected_total: u128 = people.iter().map(|p| u128::from(p.salary)).sum();
        let expected_youngest: Option<u32> = people.iter().map(|p| p.age).min();
        let expected = AggregateResult::new(expected_youngest, expected_total);

        assert_eq!(compute_aggregates(&people), expected);

        people.shuffle(&mut rng);
        assert_eq!(compute_aggregates(&people), expected);
        assert_eq!(compute_aggregates(&people), compute_aggregates(&people));

        let chunk_size: usize = rng.random_range(1..=len);
        let chunked = people
            .chunks(chunk_size)
            .map(|chunk| chunk.iter().collect::<Accumulator>())
            .fold(Accumulator::new(), Accumulator::merge);
        assert_eq!(chunked.count(), len);
        assert_eq!(chunked.finish(), expected);
    }
}
