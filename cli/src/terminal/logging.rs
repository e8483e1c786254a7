use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use colored::*;
use recon_common::config::Config;
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::spinner::SpinnerWriter;

const SUCCESS_TARGET: &str = "recon::success";

/// Symbol-prefixed, single-line event format. Colors only when `ansi` is set.
pub struct ReconFormatter {
    ansi: bool,
}

impl ReconFormatter {
    pub fn new(ansi: bool) -> Self {
        Self { ansi }
    }
}

impl<S, N> FormatEvent<S, N> for ReconFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) =
            match *meta.level() {
                Level::TRACE => ("[ ]", |s| s.dimmed()),
                Level::DEBUG => ("[?]", |s| s.blue()),
                Level::INFO if meta.target() == SUCCESS_TARGET => ("[✓]", |s| s.green().bold()),
                Level::INFO => ("[+]", |s| s.green()),
                Level::WARN => ("[*]", |s| s.yellow().bold()),
                _ => ("[-]", |s| s.red().bold()),
            };

        if self.ansi {
            write!(writer, "{} ", color_func(symbol.into()))?;
        } else {
            write!(writer, "{symbol} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Installs the global subscriber.
///
/// Events go to the log file named by `cfg` (created on demand, appended to).
/// When there is no log file, or it cannot be opened, they go to stderr.
pub fn init_logging(cfg: &Config) {
    let mut fallback: Option<io::Error> = None;

    let (writer, ansi): (BoxMakeWriter, bool) = match cfg.log_file() {
        Some(path) => match open_log_file(&path) {
            Ok(file) => (BoxMakeWriter::new(Mutex::new(file)), false),
            Err(e) => {
                fallback = Some(e);
                (BoxMakeWriter::new(|| SpinnerWriter), true)
            }
        },
        None => (BoxMakeWriter::new(|| SpinnerWriter), true),
    };

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(cfg.level).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(ReconFormatter::new(ansi))
        .with_writer(writer)
        .init();

    if let Some(e) = fallback {
        warn!("Failed to log to file, using default stderr: {e}");
    }
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_and_parents_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".recon").join("log").join("asn.log");

        open_log_file(&path).unwrap();
        assert!(path.is_file());

        // Reopening appends rather than failing
        open_log_file(&path).unwrap();
    }
}
