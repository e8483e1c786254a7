mod commands;
mod terminal;

use commands::{CommandLine, Commands, asn};
use recon_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let mut cfg = Config::load(commands.config.as_deref())?;
    if let Some(path) = &cfg.config_file {
        eprintln!("Using config file: {}", path.display());
    }
    commands.apply(&mut cfg);

    match &commands.command {
        Commands::Asn(args) => {
            args.apply(&mut cfg);
            logging::init_logging(&cfg);
            print::banner(commands.quiet);
            print::header("asn discovery", commands.quiet);
            asn::asn(args, &cfg, commands.quiet).await
        }
    }
}
