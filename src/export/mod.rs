//! Re-serialize a finished analysis: the aggregated two-column CSV and a
//! plain-text narrative report.

use anyhow::{Context, Result};
use csv::{Terminator, WriterBuilder};
use std::{fs, path::Path};
use tracing::info;

use crate::analysis::AnalysisResult;
use crate::process::format_number;

/// `{dimension},{metric}` header followed by one record per chart point.
pub fn to_csv(result: &AnalysisResult) -> Result<String> {
    let mut wtr = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    wtr.write_record([&result.dimension_column, &result.metric_column])
        .context("writing CSV header")?;
    for point in &result.chart_data {
        wtr.write_record([point.category.as_str(), point.value.to_string().as_str()])
            .with_context(|| format!("writing CSV row for `{}`", point.category))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing CSV buffer: {}", e))?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

pub fn write_csv<P: AsRef<Path>>(result: &AnalysisResult, path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_csv(result)?)
        .with_context(|| format!("writing aggregated CSV to {}", path.display()))?;
    info!(path = %path.display(), rows = result.chart_data.len(), "exported aggregated CSV");
    Ok(())
}

pub fn report_text(result: &AnalysisResult) -> String {
    let mut lines: Vec<String> = vec![
        "InsightAI Studio Report".into(),
        "=======================".into(),
        String::new(),
        format!("Metric: {}", result.metric_column),
        format!("Dimension: {}", result.dimension_column),
        String::new(),
        result.summary.clone(),
        String::new(),
        "Top categories:".into(),
    ];
    for cat in &result.top_categories {
        lines.push(format!(
            "- {}: {} ({:.1}%)",
            cat.category,
            format_number(cat.value),
            cat.share
        ));
    }
    lines.push(String::new());
    lines.push(format!(
        "Benchmarks: average {}, median {}, top 25% {}",
        format_number(result.benchmark.avg),
        format_number(result.benchmark.median),
        format_number(result.benchmark.top25pct)
    ));

    for (title, items) in [
        ("Insights:", &result.insights),
        ("Trends:", &result.trends),
        ("Recommendations:", &result.recommendations),
    ] {
        if items.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(title.into());
        lines.extend(items.iter().map(|s| format!("- {s}")));
    }

    lines.push(String::new());
    lines.push(format!(
        "Total {}: {}",
        result.metric_column,
        format_number(result.total_metric)
    ));
    lines.join("\n")
}

pub fn write_report<P: AsRef<Path>>(result: &AnalysisResult, path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, report_text(result))
        .with_context(|| format!("writing report to {}", path.display()))?;
    info!(path = %path.display(), "wrote text report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::config::{AnalysisConfig, Profile};
    use crate::sample::{SAMPLE_CSV, SAMPLE_PROMPT};
    use tempfile::tempdir;

    #[test]
    fn csv_has_dimension_and_metric_columns() -> Result<()> {
        let r = analyze(SAMPLE_CSV, SAMPLE_PROMPT, &AnalysisConfig::default())?;
        assert_eq!(
            to_csv(&r)?,
            "Region,Revenue\nNorth,397000\nSouth,299000\nEast,277000\nWest,251000\n"
        );
        Ok(())
    }

    #[test]
    fn csv_quotes_awkward_categories() -> Result<()> {
        let r = analyze(
            "City;Sales\n\"Paris, FR\";1.5\nRome;2",
            "sales",
            &AnalysisConfig::default(),
        )?;
        assert_eq!(to_csv(&r)?, "City,Sales\nRome,2\n\"Paris, FR\",1.5\n");
        Ok(())
    }

    #[test]
    fn report_lists_sections_that_have_content() -> Result<()> {
        let r = analyze(SAMPLE_CSV, SAMPLE_PROMPT, &AnalysisConfig::default())?;
        let text = report_text(&r);
        assert!(text.starts_with("InsightAI Studio Report\n=======================\n"));
        assert!(text.contains("- North: 397,000 (32.4%)"));
        assert!(text.contains("Benchmarks: average 306,000, median 299,000, top 25% 397,000"));
        assert!(text.contains("\nTrends:\n- North is 43.3% ahead of East"));
        assert!(text.ends_with("Total Revenue: 1,224,000"));

        let simple = analyze(
            SAMPLE_CSV,
            SAMPLE_PROMPT,
            &AnalysisConfig::for_profile(Profile::Simple),
        )?;
        let text = report_text(&simple);
        assert!(!text.contains("Insights:"));
        assert!(!text.contains("Recommendations:"));
        Ok(())
    }

    #[test]
    fn writes_both_files() -> Result<()> {
        let dir = tempdir()?;
        let r = analyze(SAMPLE_CSV, SAMPLE_PROMPT, &AnalysisConfig::default())?;
        let csv_path = dir.path().join("aggregated.csv");
        let report_path = dir.path().join("report.txt");
        write_csv(&r, &csv_path)?;
        write_report(&r, &report_path)?;
        assert_eq!(fs::read_to_string(&csv_path)?, to_csv(&r)?);
        assert_eq!(fs::read_to_string(&report_path)?, report_text(&r));
        Ok(())
    }
}
