mod commands;
mod terminal;

use commands::{CommandLine, Commands, aggregate, sample};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging()?;

    let cfg = commands.to_config();
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Sample => {
            print::header("sample group", cfg.quiet);
            sample::sample(&cfg)
        }
        Commands::Aggregate { people } => {
            print::header("people", cfg.quiet);
            aggregate::aggregate(people, &cfg)
        }
    }
}
