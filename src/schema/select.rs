use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use super::types::{ColumnChoice, ColumnClassification, MatchTier};

static TOKEN_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("token split pattern"));

/// Lowercased alphanumeric runs of a header name.
pub fn header_tokens(name: &str) -> Vec<String> {
    let lower = name.to_lowercase();
    TOKEN_SPLIT
        .split(&lower)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pick one of `candidates` for `prompt`. Each tier scans every candidate in
/// order before the next tier is tried:
///  1) the whole (lowercased) header name is a substring of the prompt
///  2) any header token is a substring of the prompt
///  3) any header token is one of `keywords`
///  4) the first candidate
///
/// `None` only when `candidates` is empty.
pub fn choose_column<'a>(
    candidates: &'a [String],
    prompt: &str,
    keywords: &[String],
) -> Option<(&'a str, MatchTier)> {
    let first = candidates.first()?;
    let prompt = prompt.to_lowercase();

    let exact = candidates.iter().find(|c| {
        let name = c.trim().to_lowercase();
        !name.is_empty() && prompt.contains(&name)
    });
    if let Some(col) = exact {
        return Some((col.as_str(), MatchTier::ExactName));
    }

    let tokens: Vec<Vec<String>> = candidates.iter().map(|c| header_tokens(c)).collect();

    let in_prompt = candidates
        .iter()
        .zip(&tokens)
        .find(|(_, toks)| toks.iter().any(|t| prompt.contains(t.as_str())));
    if let Some((col, _)) = in_prompt {
        return Some((col.as_str(), MatchTier::PromptToken));
    }

    let keyword = candidates.iter().zip(&tokens).find(|(_, toks)| {
        toks.iter()
            .any(|t| keywords.iter().any(|k| k.eq_ignore_ascii_case(t)))
    });
    if let Some((col, _)) = keyword {
        return Some((col.as_str(), MatchTier::Keyword));
    }

    Some((first.as_str(), MatchTier::Fallback))
}

fn fallback(headers: &[String]) -> (String, MatchTier) {
    (headers.first().cloned().unwrap_or_default(), MatchTier::Fallback)
}

/// Choose the metric among the ranked numeric headers and the dimension among
/// the categorical headers (or every header when nothing is categorical).
pub fn select_columns(
    classification: &ColumnClassification,
    headers: &[String],
    prompt: &str,
    metric_keywords: &[String],
    dimension_keywords: &[String],
) -> ColumnChoice {
    let (metric, metric_tier) =
        choose_column(&classification.numeric_headers, prompt, metric_keywords)
            .map(|(c, t)| (c.to_string(), t))
            .unwrap_or_else(|| fallback(headers));

    let dimension_pool: &[String] = if classification.categorical_headers.is_empty() {
        warn!("no categorical columns; choosing the dimension from every header");
        headers
    } else {
        &classification.categorical_headers
    };
    let (dimension, dimension_tier) = choose_column(dimension_pool, prompt, dimension_keywords)
        .map(|(c, t)| (c.to_string(), t))
        .unwrap_or_else(|| fallback(headers));

    if metric_tier == MatchTier::Fallback || dimension_tier == MatchTier::Fallback {
        warn!(%metric, %dimension, "prompt did not name a column; using ranked defaults");
    }
    debug!(%metric, ?metric_tier, %dimension, ?dimension_tier, "selected columns");

    ColumnChoice {
        metric,
        metric_tier,
        dimension,
        dimension_tier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn classification(numeric: &[&str], categorical: &[&str]) -> ColumnClassification {
        ColumnClassification {
            numeric_headers: strings(numeric),
            categorical_headers: strings(categorical),
            profiles: Vec::new(),
        }
    }

    #[test]
    fn tokenizes_on_non_alphanumerics() {
        assert_eq!(header_tokens("Net_Sales (USD)"), vec!["net", "sales", "usd"]);
        assert!(header_tokens("--").is_empty());
    }

    #[test]
    fn exact_name_beats_earlier_token_match() {
        let cands = strings(&["Total Orders", "Revenue"]);
        let picked = choose_column(&cands, "revenue of all orders", &[]);
        assert_eq!(picked, Some(("Revenue", MatchTier::ExactName)));
    }

    #[test]
    fn prompt_token_beats_keyword() {
        let cands = strings(&["Sales_Amount", "Unit_Count"]);
        let keywords = strings(&["sales"]);
        let picked = choose_column(&cands, "how many units by count", &keywords);
        assert_eq!(picked, Some(("Unit_Count", MatchTier::PromptToken)));
    }

    #[test]
    fn keyword_then_fallback() {
        let cands = strings(&["Customers", "Gross Profit"]);
        let keywords = strings(&["profit"]);
        assert_eq!(
            choose_column(&cands, "show me everything", &keywords),
            Some(("Gross Profit", MatchTier::Keyword))
        );
        assert_eq!(
            choose_column(&cands, "show me everything", &[]),
            Some(("Customers", MatchTier::Fallback))
        );
        assert_eq!(choose_column(&[], "anything", &keywords), None);
    }

    #[test]
    fn blank_header_never_matches_exactly() {
        let cands = strings(&[" ", "Region"]);
        assert_eq!(
            choose_column(&cands, "by region", &[]),
            Some(("Region", MatchTier::ExactName))
        );
    }

    #[test]
    fn dimension_falls_back_to_all_headers() {
        let cfg = AnalysisConfig::default();
        let c = classification(&["Revenue", "Year"], &[]);
        let headers = strings(&["Year", "Revenue"]);
        let choice = select_columns(
            &c,
            &headers,
            "totals please",
            &cfg.metric_keywords,
            &cfg.dimension_keywords,
        );
        assert_eq!(choice.metric, "Revenue");
        assert_eq!(choice.metric_tier, MatchTier::Keyword);
        assert_eq!(choice.dimension, "Year");
        assert_eq!(choice.dimension_tier, MatchTier::Keyword);
    }

    #[test]
    fn metric_fallback_is_highest_total() {
        let c = classification(&["Amount", "Qty"], &["Shop"]);
        let headers = strings(&["Shop", "Qty", "Amount"]);
        let choice = select_columns(&c, &headers, "go", &[], &[]);
        assert_eq!(choice.metric, "Amount");
        assert_eq!(choice.metric_tier, MatchTier::Fallback);
        assert_eq!(choice.dimension, "Shop");
        assert_eq!(choice.dimension_tier, MatchTier::Fallback);
    }
}
