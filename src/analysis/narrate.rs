//! Rule-based bullet statements over a ranked result.

use serde::{Deserialize, Serialize};

use super::benchmark::Benchmark;
use super::rank::TopCategory;
use crate::process::format_number;

/// Ranks the leader/laggard/trend statements look at.
pub const NARRATIVE_TOP_RANKS: usize = 8;
/// Leader share above which the result reads as concentrated.
pub const CONCENTRATION_SHARE_PCT: f64 = 50.0;
/// Lower bound (inclusive) of the "healthy distribution" band, which ends at
/// `CONCENTRATION_SHARE_PCT` (exclusive).
pub const HEALTHY_SHARE_PCT: f64 = 30.0;
/// Minimum relative gap between rank 1 and rank 3 worth reporting.
pub const TREND_GAP_PCT: f64 = 10.0;
/// Ranks at or above this are the head; everything after is the long tail.
pub const LONG_TAIL_CUTOFF_RANK: usize = 5;
/// Combined tail share that earns a long-tail note.
pub const LONG_TAIL_SHARE_PCT: f64 = 20.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Narrative {
    pub insights: Vec<String>,
    pub trends: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Everything the narrator reads. `ranked` is the full ranking, not the
/// `top_n` slice handed to the presentation layer.
pub struct NarrativeInput<'a> {
    pub ranked: &'a [TopCategory],
    pub benchmark: &'a Benchmark,
    pub metric: &'a str,
    pub dimension: &'a str,
}

pub fn narrate(input: &NarrativeInput<'_>) -> Narrative {
    let top = &input.ranked[..input.ranked.len().min(NARRATIVE_TOP_RANKS)];
    let Some(leader) = top.first() else {
        return Narrative::default();
    };

    Narrative {
        insights: insights(input, top, leader),
        trends: trends(input, top),
        recommendations: recommendations(input, leader),
    }
}

fn insights(input: &NarrativeInput<'_>, top: &[TopCategory], leader: &TopCategory) -> Vec<String> {
    let mut out = Vec::with_capacity(3);

    out.push(format!(
        "{} leads {} with {:.1}% of total {} ({}).",
        leader.category,
        input.dimension,
        leader.share,
        input.metric,
        format_number(leader.value)
    ));

    if top.len() >= 2 {
        let (a, b) = (&top[top.len() - 2], &top[top.len() - 1]);
        let weakest = if a.value < b.value { a } else { b };
        out.push(format!(
            "{} is the weakest of the lowest ranks at {} ({:.1}% of total).",
            weakest.category,
            format_number(weakest.value),
            weakest.share
        ));
    }

    let groups = input.ranked.len();
    let above = input
        .ranked
        .iter()
        .filter(|t| t.value > input.benchmark.avg)
        .count();
    out.push(format!(
        "{} of {} {} values ({:.0}%) are above the average of {}.",
        above,
        groups,
        input.dimension,
        above as f64 / groups as f64 * 100.0,
        format_number(input.benchmark.avg)
    ));

    out
}

fn trends(input: &NarrativeInput<'_>, top: &[TopCategory]) -> Vec<String> {
    let mut out = Vec::new();
    if top.len() >= 3 {
        let (first, third) = (&top[0], &top[2]);
        let gap = (first.value - third.value) * 100.0 / third.value;
        if gap > TREND_GAP_PCT {
            out.push(format!(
                "{} is {:.1}% ahead of {} (rank 3) on {}.",
                first.category, gap, third.category, input.metric
            ));
        }
    }
    out
}

fn recommendations(input: &NarrativeInput<'_>, leader: &TopCategory) -> Vec<String> {
    let mut out = Vec::new();

    if leader.share > CONCENTRATION_SHARE_PCT {
        out.push(format!(
            "Concentration risk: {} accounts for {:.1}% of {}. Reduce dependence on a single {}.",
            leader.category, leader.share, input.metric, input.dimension
        ));
    } else if leader.share >= HEALTHY_SHARE_PCT && leader.share < CONCENTRATION_SHARE_PCT {
        out.push(format!(
            "Healthy distribution: {} leads with {:.1}% of {} without dominating it.",
            leader.category, leader.share, input.metric
        ));
    }

    if input.ranked.len() > LONG_TAIL_CUTOFF_RANK {
        let tail = &input.ranked[LONG_TAIL_CUTOFF_RANK..];
        let tail_share: f64 = tail.iter().map(|t| t.share).sum();
        if tail_share > LONG_TAIL_SHARE_PCT {
            out.push(format!(
                "Long tail: {} {} values beyond the top {} contribute {:.1}% of {}. Review them as a group.",
                tail.len(),
                input.dimension,
                LONG_TAIL_CUTOFF_RANK,
                tail_share,
                input.metric
            ));
        }
    }

    out
}
