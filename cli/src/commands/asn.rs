use std::io::{self, IsTerminal};
use std::time::Instant;

use anyhow::Context;
use recon_common::config::Config;
use recon_common::target::{self, Target};
use recon_common::warn;
use recon_core::classify::{Classifier, ClassifierOptions};
use recon_core::service::AsnService;
use recon_core::source::AmassIntel;

use crate::commands::AsnArgs;
use crate::terminal::{print, report, spinner::Spinner};

pub async fn asn(args: &AsnArgs, cfg: &Config, q_level: u8) -> anyhow::Result<()> {
    let targets: Vec<Target> = target::read_targets(&args.targets)
        .with_context(|| format!("reading targets from {}", args.targets.display()))?;

    if targets.is_empty() {
        let notice = format!("No targets found in {}", args.targets.display());
        warn!("{notice}");
        print::warning(&notice);
    }

    let classifier = Classifier::new(ClassifierOptions {
        echo_unmatched: cfg.echo_unmatched,
        strict_asn: cfg.strict_asn,
    });
    let service = AsnService::new(Box::new(AmassIntel::new(cfg.amass_bin.as_str())), classifier);

    let start_time: Instant = Instant::now();
    let total: usize = targets.len();
    let spinner = Spinner::start(q_level);

    let result = service
        .run_with_progress(
            &targets,
            |idx, target| spinner.set_target(idx, total, target),
            |token| spinner.suspend(|| println!("{token}")),
        )
        .await;
    spinner.finish_and_clear();

    let classification = result.context("gathering ASN intelligence")?;

    print::header("results", q_level);
    let stdout = io::stdout();
    let styled: bool = stdout.is_terminal();
    report::render(&mut stdout.lock(), &classification, styled)?;

    if classification.is_empty() {
        print::no_results(q_level);
    }
    print::summary(&classification, start_time.elapsed(), q_level);
    Ok(())
}
