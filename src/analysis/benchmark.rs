use serde::{Deserialize, Serialize};

/// Summary statistics over the aggregated group values (not per row).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Benchmark {
    pub avg: f64,
    /// Element at `n / 2` of the ascending values; even counts take the upper middle.
    pub median: f64,
    /// Element at `floor(n * 0.75)` of the ascending values.
    pub top25pct: f64,
}

/// Index-based picks, no interpolation. An empty slice yields all zeros.
pub fn compute_benchmark(values: &[f64]) -> Benchmark {
    let n = values.len();
    let avg = if n == 0 {
        0.0
    } else {
        values.iter().sum::<f64>() / n as f64
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let median = sorted.get(n / 2).copied().unwrap_or(avg);
    let top25pct = sorted
        .get((n as f64 * 0.75).floor() as usize)
        .copied()
        .unwrap_or(avg);

    Benchmark {
        avg,
        median,
        top25pct,
    }
}
