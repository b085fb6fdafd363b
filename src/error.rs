/// Everything the analysis pipeline can refuse to do.
///
/// None of these are fatal to a host application: the input is static, so the
/// caller surfaces the message and asks the user for different input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// Missing header or data rows after normalization.
    #[error("{0}")]
    Format(String),

    /// No column passed the numeric-ratio threshold.
    #[error("Could not find any numeric columns. Try including a revenue, amount or numeric metric column.")]
    Schema,

    /// The chosen metric summed to zero (or overflowed) across every group.
    #[error("All values for {metric} are zero or non-numeric. Try a different metric column in your prompt.")]
    EmptyAggregate { metric: String },
}

impl AnalysisError {
    pub(crate) fn too_few_lines() -> Self {
        AnalysisError::Format("CSV must have a header row and at least one data row.".into())
    }

    pub(crate) fn no_data_rows() -> Self {
        AnalysisError::Format("No data rows found after cleaning.".into())
    }
}
