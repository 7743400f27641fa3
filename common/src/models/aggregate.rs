use std::fmt;

/// The minimum age paired with the summed salary of a group of people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AggregateResult {
    /// `None` when no records were aggregated: an empty group has no minimum.
    pub youngest_age: Option<u32>,
    pub total_salary: u128,
}

impl AggregateResult {
    pub fn new(youngest_age: Option<u32>, total_salary: u128) -> Self {
        Self {
            youngest_age,
            total_salary,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.youngest_age.is_none()
    }
}

impl fmt::Display for AggregateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.youngest_age {
            Some(age) => write!(f, "Youngest age: {age}")?,
            None => write!(f, "Youngest age: Infinity")?,
        }
        write!(f, ", total salary: {}", self.total_salary)
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
