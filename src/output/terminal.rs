// Colored terminal output for classification results.
//
// This module handles all terminal-specific formatting: colors, the
// results table, the partial-fetch warning. The main.rs command arms
// delegate here.

use colored::Colorize;

use crate::pipeline::analyze::ClassificationResult;

/// Display the classified comments as a table plus a summary line.
pub fn display_results(results: &[ClassificationResult]) {
    if results.is_empty() {
        println!("No comments found for this video.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Comment Analysis ({} comments) ===", results.len()).bold()
    );
    println!();

    println!(
        "  {:>4}  {:<8}  {:<10}  {:<22} {}",
        "#".dimmed(),
        "Verdict".dimmed(),
        "Date".dimmed(),
        "Author".dimmed(),
        "Comment".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for (i, result) in results.iter().enumerate() {
        let verdict = if result.abusive {
            "ABUSIVE".red().bold()
        } else {
            "ok".green()
        };
        let date = result
            .published_at
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());
        let author = result.author.as_deref().unwrap_or("-");
        let preview = super::truncate_chars(&result.comment, 60);

        println!(
            "  {:>4}. {:<8}  {:<10}  {:<22} {}",
            i + 1,
            verdict,
            date,
            super::truncate_chars(author, 20),
            preview.dimmed(),
        );
    }

    println!();

    let abusive = results.iter().filter(|r| r.abusive).count();
    if abusive > 0 {
        println!("  {} {} abusive comments flagged", "!!".red().bold(), abusive);
    } else {
        println!("  {} no abusive comments found", "ok".green());
    }
}

/// Display one result in detail — processed text, tokens, verdict.
pub fn display_single(result: &ClassificationResult) {
    println!("\n{}", "=== Pipeline Result ===".bold());
    println!("  Processed: {}", result.comment);
    println!("  Tokens:    {:?}", result.tokens);
    let verdict = if result.abusive {
        "ABUSIVE".red().bold()
    } else {
        "not abusive".green()
    };
    println!("  Verdict:   {verdict}");
}

/// Warn that the fetch stopped early and results cover a partial batch.
pub fn display_partial_warning(reason: &str) {
    println!(
        "  {} comment fetch stopped early: {}",
        "~".yellow(),
        super::truncate_chars(reason, 120)
    );
    println!("  Results below cover only the comments fetched before the failure.");
}
