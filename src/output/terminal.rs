// Colored terminal output for match reports and document analyses.
//
// This module handles all terminal-specific formatting: colors, headers,
// list truncation. The main.rs display functions delegate here.

use colored::Colorize;

use crate::pipeline::{MatchReport, TaggedLemma};
use crate::scoring::score::Score;

/// Display the outcome of one resume vs job description comparison.
///
/// `limit` caps how many lemmas each set prints (0 = all).
pub fn display_match_report(report: &MatchReport, limit: usize) {
    println!("\n{}", "=== Match Report ===".bold());
    println!();
    println!("  Match percentage: {}", colorize_score(report.score));
    println!(
        "  {} of {} distinct job description lemmas fuzzy-matched",
        report.fuzzy_matched.len(),
        report.distinct_job_lemmas
    );
    println!(
        "  {}",
        format!(
            "Lemmas: {} in resume, {} in job description",
            report.resume_lemmas, report.job_lemmas
        )
        .dimmed()
    );

    println!(
        "\n  {} ({}):",
        "Matched".green().bold(),
        report.matched.len()
    );
    print_lemmas(&report.matched, limit);

    println!(
        "\n  {} ({}):",
        "Missing".red().bold(),
        report.missing.len()
    );
    print_lemmas(&report.missing, limit);

    let fuzzy_only: Vec<&String> = report
        .fuzzy_matched
        .iter()
        .filter(|l| !report.matched.contains(*l))
        .collect();
    if !fuzzy_only.is_empty() {
        println!(
            "\n  {} ({}):",
            "Near matches".yellow().bold(),
            fuzzy_only.len()
        );
        println!("    {}", super::join_limited(fuzzy_only, limit));
    }
    println!();
}

/// Report that no score could be computed.
pub fn display_undefined_score(reason: &str) {
    println!("\n{}", "=== Match Report ===".bold());
    println!();
    println!("  Match percentage: {}", "undefined".dimmed());
    println!("  {}", reason.dimmed());
    println!();
}

/// Display the tagged tokens and lemmas of one document.
pub fn display_analysis(analyzed: &[TaggedLemma], limit: usize) {
    println!(
        "\n{}",
        format!("=== Analysis ({} tokens) ===", analyzed.len()).bold()
    );
    println!();

    if analyzed.is_empty() {
        println!("  {}", "No content words left after filtering.".dimmed());
        return;
    }

    println!(
        "  {:<24} {:<5} {:<24}",
        "Token".dimmed(),
        "POS".dimmed(),
        "Lemma".dimmed(),
    );
    println!("  {}", "-".repeat(55).dimmed());

    let shown = if limit == 0 { analyzed.len() } else { limit };
    for item in analyzed.iter().take(shown) {
        let lemma = if item.lemma == item.token {
            item.lemma.normal()
        } else {
            item.lemma.cyan()
        };
        println!("  {:<24} {:<5} {:<24}", item.token, item.pos.label(), lemma);
    }

    if analyzed.len() > shown {
        println!(
            "  {}",
            format!("... {} more", analyzed.len() - shown).dimmed()
        );
    }
    println!();
}

fn print_lemmas(lemmas: &std::collections::BTreeSet<String>, limit: usize) {
    if lemmas.is_empty() {
        println!("    {}", "(none)".dimmed());
    } else {
        println!("    {}", super::join_limited(lemmas, limit));
    }
}

/// Colorize a match percentage by band.
fn colorize_score(score: Score) -> colored::ColoredString {
    let text = score.to_string();
    match score.percent() {
        p if p >= 75.0 => text.green().bold(),
        p if p >= 50.0 => text.yellow(),
        _ => text.red(),
    }
}
