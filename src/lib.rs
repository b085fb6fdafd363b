//! Ask a question of a CSV: sniff the layout, pick a metric and a grouping
//! column that match a free-text prompt, aggregate, and describe the result.

pub mod analysis;
pub mod config;
pub mod error;
pub mod export;
pub mod process;
pub mod sample;
pub mod schema;
pub mod view;

pub use analysis::{analyze, analyze_table, AnalysisResult, Benchmark, ChartPoint, TopCategory};
pub use config::{AnalysisConfig, Profile};
pub use error::AnalysisError;

#[cfg(test)]
pub(crate) fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,csvinsight=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
