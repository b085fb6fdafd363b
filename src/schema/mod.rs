pub mod classify;
pub mod select;
pub mod types;

pub use classify::classify_columns;
pub use select::{choose_column, header_tokens, select_columns};
pub use types::{ColumnChoice, ColumnClassification, ColumnKind, ColumnProfile, MatchTier};
