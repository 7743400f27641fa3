pub mod aggregate;
pub mod sample;

use clap::{ArgAction, Parser, Subcommand};
use cohort_common::config::{Config, EmptyInputPolicy};
use cohort_common::models::person::Person;

#[derive(Parser)]
#[command(name = "cohort")]
#[command(version)]
#[command(about = "Finds the youngest age and the total salary of a group of people.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Print only the result line (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Exit with an error instead of reporting an unbounded youngest age
    #[arg(long, global = true)]
    pub fail_on_empty: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate the built-in sample group
    #[command(alias = "s")]
    Sample,
    /// Aggregate people given as AGE:SALARY
    #[command(alias = "a")]
    Aggregate { people: Vec<Person> },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        let empty_policy = if self.fail_on_empty {
            EmptyInputPolicy::Fail
        } else {
            EmptyInputPolicy::Unbounded
        };

        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            empty_policy,
        }
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
