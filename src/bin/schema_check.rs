use anyhow::{Context, Result};
use clap::Parser;
use csvinsight::{
    process::{format_number, load_table},
    schema::{classify_columns, ColumnKind},
    AnalysisConfig, Profile,
};
use serde::Serialize;
use std::{fs, path::PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

/// What the classifier makes of a delimited file.
#[derive(Parser)]
#[command(author, version, about = "Show delimiter, headers and numeric columns of a CSV")]
struct Args {
    file: PathBuf,
    #[arg(long, default_value = "full")]
    profile: Profile,
    /// Emit YAML instead of a table
    #[arg(long)]
    yaml: bool,
}

#[derive(Serialize)]
struct SchemaReport {
    delimiter: String,
    rows: usize,
    headers: Vec<String>,
    numeric_ranking: Vec<String>,
    columns: Vec<csvinsight::schema::ColumnProfile>,
}

fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = AnalysisConfig::for_profile(args.profile);

    let bytes = fs::read(&args.file).with_context(|| format!("reading {}", args.file.display()))?;
    let text = String::from_utf8_lossy(&bytes);

    let table = load_table(&text)?;
    let classification = classify_columns(&table, config.numeric_threshold, config.sample_rows)?;

    let report = SchemaReport {
        delimiter: match table.delimiter {
            '\t' => "tab".into(),
            c => c.to_string(),
        },
        rows: table.row_count(),
        headers: table.headers.clone(),
        numeric_ranking: classification.numeric_headers.clone(),
        columns: classification.profiles.clone(),
    };

    if args.yaml {
        print!("{}", serde_yaml::to_string(&report)?);
        return Ok(());
    }

    println!(
        "{}: {} rows, delimiter `{}`",
        args.file.display(),
        report.rows,
        report.delimiter
    );
    println!("{:<28} {:<12} {:>8} {:>18}", "column", "kind", "numeric", "total");
    for col in &report.columns {
        let kind = match col.kind {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Categorical => "categorical",
        };
        println!(
            "{:<28} {:<12} {:>7.0}% {:>18}",
            col.name,
            kind,
            col.numeric_ratio * 100.0,
            format_number(col.total)
        );
    }
    println!("metric preference: {}", report.numeric_ranking.join(" > "));
    Ok(())
}
