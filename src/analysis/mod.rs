// src/analysis/mod.rs
pub mod aggregate;
pub mod benchmark;
pub mod narrate;
pub mod rank;
pub mod result;

use tracing::info;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::process::{load_table, RawTable};
use crate::schema::{classify_columns, select_columns};

pub use aggregate::{aggregate, Aggregate, ChartPoint};
pub use benchmark::{compute_benchmark, Benchmark};
pub use narrate::{narrate, Narrative, NarrativeInput};
pub use rank::{rank_categories, TopCategory};
pub use result::{summarize, AnalysisResult};

/// Run the whole pipeline over raw file text: normalize, parse, classify,
/// select, aggregate, benchmark and narrate.
///
/// Either returns a complete result or one of the `AnalysisError` cases;
/// nothing is partially filled in.
#[tracing::instrument(
    level = "info",
    skip(text, prompt, config),
    fields(prompt = %prompt, bytes = text.len())
)]
pub fn analyze(
    text: &str,
    prompt: &str,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    let table = load_table(text)?;
    analyze_table(&table, prompt, config)
}

/// Same as [`analyze`] for a table that is already parsed.
pub fn analyze_table(
    table: &RawTable,
    prompt: &str,
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    // ─── 1) numeric vs categorical ───────────────────────────────────
    let classification =
        classify_columns(table, config.numeric_threshold, config.sample_rows)?;

    // ─── 2) metric + dimension from the prompt ───────────────────────
    let headers: Vec<String> = table
        .unique_headers()
        .into_iter()
        .map(str::to_string)
        .collect();
    let choice = select_columns(
        &classification,
        &headers,
        prompt,
        &config.metric_keywords,
        &config.dimension_keywords,
    );

    // ─── 3) group + sum ──────────────────────────────────────────────
    let Aggregate { points, total } =
        aggregate(table, &choice.metric, &choice.dimension, &config.unknown_label)?;

    // ─── 4) benchmarks + ranking ─────────────────────────────────────
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let benchmark = compute_benchmark(&values);
    let ranked = rank_categories(&points, total);

    // ─── 5) prose ────────────────────────────────────────────────────
    let narrative = if config.narrate {
        narrate(&NarrativeInput {
            ranked: &ranked,
            benchmark: &benchmark,
            metric: &choice.metric,
            dimension: &choice.dimension,
        })
    } else {
        Narrative::default()
    };
    let summary = summarize(
        table.row_count(),
        table.column_count(),
        &choice.metric,
        &choice.dimension,
        ranked.first(),
    );

    info!(
        metric = %choice.metric,
        dimension = %choice.dimension,
        groups = points.len(),
        total,
        "analysis complete"
    );

    let mut top_categories = ranked;
    top_categories.truncate(config.top_n);

    Ok(AnalysisResult {
        row_count: table.row_count(),
        column_count: table.column_count(),
        delimiter: table.delimiter,
        metric_column: choice.metric,
        dimension_column: choice.dimension,
        chart_data: points,
        total_metric: total,
        top_categories,
        benchmark,
        summary,
        insights: narrative.insights,
        trends: narrative.trends,
        recommendations: narrative.recommendations,
    })
}
