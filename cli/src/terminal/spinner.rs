use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use recon_common::target::Target;

const TICK: Duration = Duration::from_millis(100);
const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// The spinner currently on screen, if any. Log output is routed around it.
static ACTIVE: OnceLock<ProgressBar> = OnceLock::new();

pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Starts a spinner on stderr. Hidden when stderr is not a terminal or `q_level > 1`.
    pub fn start(q_level: u8) -> Self {
        let visible = q_level < 2 && console::Term::stderr().is_term();
        let pb = if visible {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };

        let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICK_STRINGS);
        pb.set_style(style);
        pb.enable_steady_tick(TICK);

        let _ = ACTIVE.set(pb.clone());
        Self { pb }
    }

    pub fn set_target(&self, idx: usize, total: usize, target: &Target) {
        self.pb.set_message(format!(
            "[{}/{}] Querying {}...",
            idx + 1,
            total,
            target.query_name().green().bold()
        ));
    }

    /// Runs `f` with the spinner cleared from the screen.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.pb.suspend(f)
    }

    pub fn finish_and_clear(&self) {
        self.pb.finish_and_clear();
    }
}

/// Stderr writer that keeps log lines from tearing through the spinner.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match ACTIVE.get() {
            Some(pb) if !pb.is_finished() => pb.suspend(|| io::stderr().write_all(buf))?,
            _ => io::stderr().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}
