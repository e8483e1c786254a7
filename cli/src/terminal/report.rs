use std::io::{self, Write};

use colored::*;
use recon_core::classify::Classification;
use tracing::info;

pub const ASN_HEADER: &str = "ASNs Found";
pub const IP_RANGE_HEADER: &str = "IP Ranges Found";
pub const RULE: &str = "========================================";

/// Writes both result lists under their section headers.
///
/// Headers are colored only when `styled` is set; records are always plain
/// so the output stays pipeable.
pub fn render<W: Write>(
    out: &mut W,
    classification: &Classification,
    styled: bool,
) -> io::Result<()> {
    section(out, ASN_HEADER, styled)?;
    for asn in classification.asns() {
        info!("ASN: {asn}");
        writeln!(out, "{asn}")?;
    }

    writeln!(out)?;
    section(out, IP_RANGE_HEADER, styled)?;
    for range in classification.ip_ranges() {
        info!("IP Range: {range}");
        writeln!(out, "{range}")?;
    }

    out.flush()
}

fn section<W: Write>(out: &mut W, title: &str, styled: bool) -> io::Result<()> {
    if styled {
        writeln!(out, "{}", title.bright_green().bold())?;
        writeln!(out, "{}", RULE.bright_black())
    } else {
        writeln!(out, "{title}")?;
        writeln!(out, "{RULE}")
    }
}
