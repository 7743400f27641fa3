/// Decides what the aggregator does when it receives zero records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyInputPolicy {
    /// Return a result with no youngest age and a zero salary total.
    #[default]
    Unbounded,
    /// Refuse the input with [`crate::error::AggregateError::EmptyInput`].
    Fail,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Hides the banner printed on startup.
    pub no_banner: bool,
    /// Verbosity reduction. Anything above zero prints the result line only.
    pub quiet: u8,
    pub empty_policy: EmptyInputPolicy,
}
