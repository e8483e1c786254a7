pub mod asn;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use recon_common::config::{self, Config};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "recon")]
#[command(version)]
#[command(about = "Reconnaissance helpers for mapping an organization's network footprint.")]
pub struct CommandLine {
    /// Config file (default is $HOME/.recon.yaml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, value_name = "LEVEL", value_parser = config::parse_level)]
    pub verbose: Option<Level>,

    /// Reduce terminal decoration (-q hides the banner, -qq also hides the summary)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover ASNs and IP ranges associated with your targets
    #[command(alias = "a")]
    Asn(AsnArgs),
}

#[derive(Args, Debug)]
pub struct AsnArgs {
    /// File with one organization name per line
    #[arg(short, long, value_name = "FILE")]
    pub targets: PathBuf,

    /// Print tokens that are neither ASNs nor IP ranges as they are seen
    #[arg(long)]
    pub echo_unmatched: bool,

    /// Only accept ASN tokens made of exactly five digits
    #[arg(long)]
    pub strict_asn: bool,

    /// Path to the amass binary
    #[arg(long, value_name = "PATH")]
    pub amass_bin: Option<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Folds the global flags into `cfg`. Flags win over file and environment.
    pub fn apply(&self, cfg: &mut Config) {
        if let Some(level) = self.verbose {
            cfg.level = level;
        }
    }
}

impl AsnArgs {
    pub fn apply(&self, cfg: &mut Config) {
        if self.echo_unmatched {
            cfg.echo_unmatched = true;
        }
        if self.strict_asn {
            cfg.strict_asn = true;
        }
        if let Some(bin) = &self.amass_bin {
            cfg.amass_bin = bin.clone();
        }
    }
}
