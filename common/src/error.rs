//! Error types.

use std::num::ParseIntError;

/// A textual person record that could not be turned into a [`crate::models::person::Person`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InvalidRecordError {
    #[error("record '{input}' is missing its {field}")]
    MissingField { input: String, field: &'static str },

    #[error("record '{input}' has a non-numeric {field}: {source}")]
    NonNumeric {
        input: String,
        field: &'static str,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("no people to aggregate")]
    EmptyInput,
}
