//! `lmpmap inspect` handler

use anyhow::{Context, Result};

use lmpmap::cli::InspectArgs;
use lmpmap::player::render::markers::MarkerColor;
use lmpmap::summary::{summarize, StepSummary};
use lmpmap::tui::{current_theme, Theme};
use lmpmap::Config;

/// Load the dataset and print one line per step.
pub fn handle(args: InspectArgs) -> Result<()> {
    let config = Config::load().context("Failed to load config")?;
    let source = super::resolve_source(args.source.as_deref(), &config);
    let dataset = super::load(&source)?;
    let theme = current_theme();

    println!(
        "{}",
        theme.accent_text(&format!(
            "{}: {} steps, {} records",
            source,
            dataset.len(),
            dataset.record_count()
        ))
    );
    for (index, summary) in summarize(&dataset).iter().enumerate() {
        println!("{}", format_summary_line(index, summary, &theme));
    }
    Ok(())
}

fn format_summary_line(index: usize, summary: &StepSummary, theme: &Theme) -> String {
    let mut line = format!(
        "{:>4}  {}  {}",
        index,
        theme.primary_text(&summary.time),
        theme.secondary_text(&format!("{}/{} drawn", summary.drawn, summary.records)),
    );
    for (tier, count) in MarkerColor::ALL.iter().zip(summary.tiers) {
        line.push_str(&format!("  {} {}", tier.label(), count));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line_lists_tiers_in_order() {
        // Compare on the plain text content
        let summary = StepSummary {
            time: "t0".to_string(),
            records: 3,
            drawn: 2,
            tiers: [1, 0, 1, 0],
        };
        let line = format_summary_line(7, &summary, &Theme::default());
        assert!(line.starts_with("   7  "));
        assert!(line.contains("t0"));
        assert!(line.contains("2/3 drawn"));
        assert!(line.ends_with("  >=0.9 1  >=0.5 0  <0.5 1  n/a 0"));
    }
}
