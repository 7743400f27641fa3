use colored::*;
use tracing::warn;

use crate::{mprint, terminal::{colors, print}};
use cohort_common::config::Config;
use cohort_common::models::aggregate::AggregateResult;
use cohort_common::models::person::Person;
use cohort_common::success;
use cohort_core::aggregate::Aggregator;

type Detail = (String, ColoredString);

const KEY_WIDTH: usize = "Youngest age".len();

pub fn aggregate(people: Vec<Person>, cfg: &Config) -> anyhow::Result<()> {
    let result: AggregateResult = Aggregator::from_config(cfg).aggregate(&people)?;

    match cfg.quiet {
        0 => {
            if people.is_empty() {
                warn!("No people were given, the youngest age is unbounded");
            }
            print_people(&people);
            print_summary(&result, people.len());
        }
        _ => print::print(&result.to_string()),
    }
    Ok(())
}

fn print_people(people: &[Person]) {
    for (idx, person) in people.iter().enumerate() {
        print::tree_head(idx, "Person");
        print::as_tree_one_level(&person_details(person));
        if idx + 1 != people.len() {
            mprint!();
        }
    }
}

fn person_details(person: &Person) -> Vec<Detail> {
    vec![
        ("Age".to_string(), person.age.to_string().color(colors::AGE)),
        ("Salary".to_string(), person.salary.to_string().color(colors::SALARY)),
    ]
}

fn print_summary(result: &AggregateResult, count: usize) {
    print::header("Aggregate", 0);

    let youngest: ColoredString = match result.youngest_age {
        Some(age) => age.to_string().color(colors::AGE).bold(),
        None => "Infinity".dimmed(),
    };
    print::aligned_line("Youngest age", youngest, KEY_WIDTH);
    print::aligned_line(
        "Total salary",
        result.total_salary.to_string().color(colors::SALARY).bold(),
        KEY_WIDTH,
    );

    let unit: &str = if count == 1 { "person" } else { "people" };
    success!("{count} {unit} aggregated");

    print::fat_separator();
    print::centerln(&result.to_string());
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
