use anyhow::{bail, Context, Result};
use clap::Parser;
use csvinsight::{
    analyze,
    export::{write_csv, write_report},
    process::format_number,
    sample::{SAMPLE_CSV, SAMPLE_PROMPT},
    AnalysisConfig, AnalysisError, AnalysisResult, Profile,
};
use std::{fs, path::PathBuf, process::ExitCode};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Ask a question of your CSV: pick a metric and a grouping column from a prompt and summarize"
)]
struct Args {
    /// Delimited text file with a header row
    file: Option<PathBuf>,
    /// Use the bundled demo dataset instead of a file
    #[arg(long)]
    sample: bool,
    #[arg(short, long, default_value = SAMPLE_PROMPT)]
    prompt: String,
    #[arg(long, default_value = "full")]
    profile: Profile,
    /// YAML config; overrides --profile
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
    #[arg(long)]
    export_csv: Option<PathBuf>,
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // ─── 2) config ───────────────────────────────────────────────────
    let config = match &args.config {
        Some(path) => AnalysisConfig::from_path(path)?,
        None => AnalysisConfig::for_profile(args.profile),
    };

    // ─── 3) input text ───────────────────────────────────────────────
    let text = match (&args.file, args.sample) {
        (_, true) => {
            info!("using bundled sample dataset");
            SAMPLE_CSV.to_string()
        }
        (Some(path), false) => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            String::from_utf8_lossy(&bytes).into_owned()
        }
        (None, false) => bail!("pass a CSV file or --sample"),
    };

    // ─── 4) analyze ──────────────────────────────────────────────────
    let result = match analyze(&text, &args.prompt, &config) {
        Ok(r) => r,
        Err(e) => {
            report_failure(&e);
            return Ok(ExitCode::FAILURE);
        }
    };

    // ─── 5) output ───────────────────────────────────────────────────
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_human(&result);
    }
    if let Some(path) = &args.export_csv {
        write_csv(&result, path)?;
    }
    if let Some(path) = &args.report {
        write_report(&result, path)?;
    }

    Ok(ExitCode::SUCCESS)
}

fn report_failure(e: &AnalysisError) {
    warn!(error = ?e, "analysis failed");
    eprintln!("{}", e);
}

fn print_human(result: &AnalysisResult) {
    println!("{}", result.summary);
    println!();
    println!("{:<24} {:>16} {:>8}", result.dimension_column, result.metric_column, "share");
    for cat in &result.top_categories {
        println!(
            "{:<24} {:>16} {:>7.1}%",
            cat.category,
            format_number(cat.value),
            cat.share
        );
    }
    for (title, items) in [
        ("Insights", &result.insights),
        ("Trends", &result.trends),
        ("Recommendations", &result.recommendations),
    ] {
        if items.is_empty() {
            continue;
        }
        println!();
        println!("{title}:");
        for item in items {
            println!("  - {item}");
        }
    }
}
