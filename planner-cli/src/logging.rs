use std::{
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Default filter when neither `--log-level` nor `RUST_LOG` is given.
const DEFAULT_FILTER: &str = "info";

// --- Formatter ---

const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// `HH:MM:SS LEVEL target: fields` in local time. `with_date` prefixes the
/// calendar date, for log files that outlive a single run.
struct PlannerFormat {
    with_date: bool,
}

fn level_color(level: Level) -> &'static str {
    match level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

impl<S, N> FormatEvent<S, N> for PlannerFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let level = *meta.level();
        let clock = Local::now().format(if self.with_date {
            "%Y-%m-%d %H:%M:%S"
        } else {
            "%H:%M:%S"
        });

        if writer.has_ansi_escapes() {
            write!(
                writer,
                "{DIM}{clock}{RESET} {}{level:>5}{RESET} {DIM}{}:{RESET} ",
                level_color(level),
                meta.target()
            )?;
        } else {
            write!(writer, "{clock} {level:>5} {}: ", meta.target())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Public API ---

/// Builds the level filter: an explicit directive wins, then `RUST_LOG`,
/// then [`DEFAULT_FILTER`].
fn make_filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(level) => {
            EnvFilter::try_new(level).with_context(|| format!("invalid log level '{level}'"))
        }
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Initializes logging. Call once at startup.
///
/// - Terminal: stderr, colored when attached to a terminal, plain when piped,
///   so command output on stdout stays clean.
/// - File: appended to `log_file` when given, never colored.
/// - Level: `level` (any `EnvFilter` directive), else `RUST_LOG`, else INFO.
pub fn init_logging(
    level: Option<&str>,
    log_file: Option<&Path>,
) -> Result<()> {
    let filter = make_filter(level)?;

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(PlannerFormat { with_date: false })
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let file_layer = match log_file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .event_format(PlannerFormat { with_date: true })
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")
}
