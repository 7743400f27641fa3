use cohort_common::models::aggregate::AggregateResult;
use cohort_common::models::person::Person;

/// Running state of the reduction: smallest age seen and salary sum so far.
///
/// The default value is the identity for [`Accumulator::merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulator {
    youngest_age: Option<u32>,
    total_salary: u128,
    count: usize,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one record into the accumulator.
    pub fn push(self, person: &Person) -> Self {
        Self {
            youngest_age: min_age(self.youngest_age, Some(person.age)),
            total_salary: self.total_salary + u128::from(person.salary),
            count: self.count + 1,
        }
    }

    /// Combines two partial results. Associative and commutative.
    pub fn merge(self, other: Self) -> Self {
        Self {
            youngest_age: min_age(self.youngest_age, other.youngest_age),
            total_salary: self.total_salary + other.total_salary,
            count: self.count + other.count,
        }
    }

    /// Number of records folded so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn finish(self) -> AggregateResult {
        AggregateResult::new(self.youngest_age, self.total_salary)
    }
}

// `None` means "no minimum yet" and must lose against any age.
fn min_age(a: Option<u32>, b: Option<u32>) -> Option<u32> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

impl<'a> Extend<&'a Person> for Accumulator {
    fn extend<I: IntoIterator<Item = &'a Person>>(&mut self, iter: I) {
        *self = iter.into_iter().fold(*self, Accumulator::push);
    }
}

impl<'a> FromIterator<&'a Person> for Accumulator {
    fn from_iter<I: IntoIterator<Item = &'a Person>>(iter: I) -> Self {
        let mut acc = Accumulator::new();
        acc.extend(iter);
        acc
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

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Person> {
        vec![
            Person::new(30, 1000),
            Person::new(25, 1500),
            Person::new(35, 2000),
            Person::new(22, 800),
            Person::new(47, 4100),
        ]
    }

    #[test]
    fn test_identity() {
        let acc = Accumulator::new();
        assert_eq!(acc.count(), 0);
        assert_eq!(acc.finish(), AggregateResult::new(None, 0));
    }

    #[test]
    fn test_push() {
        let acc = Accumulator::new()
            .push(&Person::new(30, 1000))
            .push(&Person::new(25, 1500));
        assert_eq!(acc.count(), 2);
        assert_eq!(acc.finish(), AggregateResult::new(Some(25), 2500));
    }

    #[test]
    fn test_merge_with_identity() {
        let people = sample();
        let acc: Accumulator = people.iter().collect();

        assert_eq!(acc.merge(Accumulator::new()), acc);
        assert_eq!(Accumulator::new().merge(acc), acc);
    }

    #[test]
    fn test_chunked_merge_matches_single_pass() {
        let people = sample();
        let single: Accumulator = people.iter().collect();

        for size in 1..=people.len() {
            let chunked = people
                .chunks(size)
                .map(|chunk| chunk.iter().collect::<Accumulator>())
                .fold(Accumulator::new(), Accumulator::merge);
            assert_eq!(chunked, single, "chunk size {size}");
        }
    }

    #[test]
    fn test_merge_commutes() {
        let people = sample();
        let (left, right) = people.split_at(2);
        let a: Accumulator = left.iter().collect();
        let b: Accumulator = right.iter().collect();

        assert_eq!(a.merge(b), b.merge(a));
    }

    #[test]
    fn test_extend() {
        let people = sample();
        let mut acc: Accumulator = people[..2].iter().collect();
        acc.extend(&people[2..]);

        assert_eq!(acc.count(), 5);
        assert_eq!(acc.finish(), AggregateResult::new(Some(22), 9400));
    }

    #[test]
    fn test_min_age() {
        assert_eq!(min_age(None, None), None);
        assert_eq!(min_age(Some(3), None), Some(3));
        assert_eq!(min_age(None, Some(0)), Some(0));
        assert_eq!(min_age(Some(7), Some(2)), Some(2));
    }
}
