//! # Person Record
//!
//! The input entity of the aggregator. A record carries no identity beyond
//! its position in the slice it is passed in.
//!
//! Records can be parsed from the textual form `AGE:SALARY`, e.g. `30:1000`.

use std::str::FromStr;

use crate::error::InvalidRecordError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Person {
    pub age: u32,
    pub salary: u64,
}

impl Person {
    pub fn new(age: u32, salary: u64) -> Self {
        Self { age, salary }
    }
}

impl FromStr for Person {
    type Err = InvalidRecordError;

    /// Parses `AGE:SALARY`. Surrounding whitespace on either side is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (age_str, salary_str) = s.split_once(':').unwrap_or((s, ""));

        let age: u32 = parse_field(s, "age", age_str)?;
        let salary: u64 = parse_field(s, "salary", salary_str)?;

        Ok(Person::new(age, salary))
    }
}

fn parse_field<T>(input: &str, field: &'static str, raw: &str) -> Result<T, InvalidRecordError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InvalidRecordError::MissingField {
            input: input.to_string(),
            field,
        });
    }

    raw.parse::<T>().map_err(|source| InvalidRecordError::NonNumeric {
        input: input.to_string(),
        field,
        source,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
