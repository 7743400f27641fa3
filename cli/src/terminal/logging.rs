use std::fmt;

use colored::*;
use cohort_common::log::{PRINT_TARGET, SUCCESS_TARGET};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Installs the global subscriber. `RUST_LOG` overrides the default `info` filter,
/// but plain terminal lines are always let through.
pub fn init_logging() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"))
        .add_directive(format!("{PRINT_TARGET}=info").parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(CohortFormatter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}

pub struct CohortFormatter;

impl<S, N> FormatEvent<S, N> for CohortFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0.unwrap_or_default());
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            if meta.target() == SUCCESS_TARGET {
                ("[✓]", |s| s.green().bold())
            } else {
                level_style(meta.level())
            };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn level_style(level: &Level) -> (&'static str, fn(ColoredString) -> ColoredString) {
    match *level {
        Level::TRACE => ("[ ]", |s| s.dimmed()),
        Level::DEBUG => ("[?]", |s| s.blue()),
        Level::INFO => ("[+]", |s| s.green().bold()),
        Level::WARN => ("[*]", |s| s.yellow().bold()),
        Level::ERROR => ("[-]", |s| s.red().bold()),
    }
}

/// Pulls the `raw_msg` field out of a print event.
#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "raw_msg" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

/// Runs `f` under a subscriber using [`CohortFormatter`] and returns what it wrote.
#[cfg(test)]
pub(crate) fn capture<F: FnOnce()>(f: F) -> String {
    use std::io;
    use std::sync::{Arc, Mutex};

    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    colored::control::set_override(false);

    let buf: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .event_format(CohortFormatter)
        .with_writer(move || Sink(sink.clone()))
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buf.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
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
    use cohort_common::success;
    use tracing::{debug, info, warn};

    #[test]
    fn test_raw_message_visitor() {
        let output = capture(|| {
            info!(target: PRINT_TARGET, raw_msg = "Youngest age: 25, total salary: 4500");
        });
        assert_eq!(output, "Youngest age: 25, total salary: 4500\n");

        // Non-string values arrive through record_debug
        let output = capture(|| info!(target: PRINT_TARGET, raw_msg = 42));
        assert_eq!(output, "42\n");

        // Without a raw_msg field the line is empty
        let output = capture(|| info!(target: PRINT_TARGET, other = 1));
        assert_eq!(output, "\n");
    }

    #[test]
    fn test_print_lines_have_no_prefix() {
        let output = capture(|| crate::terminal::print::print("plain line"));
        assert_eq!(output, "plain line\n");
    }

    #[test]
    fn test_status_symbols() {
        let output = capture(|| {
            info!("started");
            warn!("careful");
            success!("3 people aggregated");
        });
        assert_eq!(output, "[+] started\n[*] careful\n[✓] 3 people aggregated\n");
    }

    #[test]
    fn test_debug_is_filtered_at_info() {
        let output = capture(|| debug!("hidden"));
        assert!(output.is_empty());
    }
}
