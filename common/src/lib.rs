//! Shared building blocks for the `recon` workspace.
//!
//! * [`config`]: the resolved runtime [`Config`](config::Config) context.
//! * [`error`]: the error taxonomy shared by every crate.
//! * [`target`]: organization names and the targets-file reader.

pub mod config;
pub mod error;
pub mod target;

#[doc(hidden)]
pub use tracing;

/// Logs a successful milestone. Rendered with its own marker by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "recon::success", $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}
