//! Terminal chrome: banner, section headers and the closing summary.
//!
//! Everything here goes to stderr so stdout carries only results.

use std::time::Duration;

use colored::*;
use recon_core::classify::Classification;
use unicode_width::UnicodeWidthStr;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

pub fn print(msg: &str) {
    eprintln!("{msg}");
}

pub fn banner(q_level: u8) {
    if q_level > 0 {
        return;
    }

    let text_content: String = format!("⟦ RECON v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();

    print(&format!("{}{}{}", sep, text, sep));
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    print(&header_line(msg));
}

fn header_line(msg: &str) -> String {
    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    format!("{}", line)
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}

pub fn summary(classification: &Classification, total_time: Duration, q_level: u8) {
    if q_level > 1 {
        return;
    }

    let records: ColoredString = format!("{} records", classification.total()).bold();
    let asns: usize = classification.asns().len();
    let ip_ranges: usize = classification.ip_ranges().len();
    let asns: ColoredString = format!("{asns} ASNs").bold().color(colors::ASN);
    let ranges: ColoredString = format!("{ip_ranges} IP ranges").bold().color(colors::IP_RANGE);
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = format!("Complete: {records} ({asns}, {ranges}) in {total_time}")
        .color(colors::TEXT_DEFAULT)
        .to_string();

    fat_separator();
    centerln(&output);
}

/// Warnings the user must see even when logs go to a file. Not silenced by `-q`.
pub fn warning(msg: &str) {
    print(&warning_line(msg));
}

fn warning_line(msg: &str) -> String {
    format!("{} {}", "[*]".yellow().bold(), msg.color(colors::TEXT_DEFAULT))
}

pub fn no_results(q_level: u8) {
    if q_level > 1 {
        return;
    }
    print(&format!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        "No ASNs or IP ranges found".red().bold()
    ));
}
