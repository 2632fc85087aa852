//! Term frequency aggregation for categorical columns.

use indexmap::IndexMap;
use serde::Serialize;

use tidy_model::{Column, ColumnType, MergeMap, Result, TidyError};

/// How many terms the distribution chart shows.
pub const DISTRIBUTION_TOP_N: usize = 10;

/// One row of a column's value distribution. Derived on demand from the
/// column's current data and merges, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermFrequency {
    pub term: String,
    pub count: usize,
    pub percentage: f64,
}

/// Count merge-resolved terms and order them by descending count.
///
/// Counting goes through an insertion-ordered map, so terms with equal
/// counts keep the order in which their resolved form first appeared.
/// The stable sort never reorders ties.
pub fn term_frequencies(values: &[String], merges: &MergeMap) -> Vec<TermFrequency> {
    if values.is_empty() {
        return Vec::new();
    }
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for value in values {
        *counts.entry(merges.resolve(value)).or_insert(0) += 1;
    }
    let total = values.len() as f64;
    let mut frequencies: Vec<TermFrequency> = counts
        .into_iter()
        .map(|(term, count)| TermFrequency {
            term: term.to_string(),
            count,
            percentage: count as f64 * 100.0 / total,
        })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count));
    frequencies
}

/// Frequencies for a categorical column.
///
/// # Errors
///
/// Numeric columns have no frequency view; asking for one is a
/// [`TidyError::ColumnTypeMismatch`].
pub fn column_frequencies(column: &Column) -> Result<Vec<TermFrequency>> {
    match column.categorical_values() {
        Some(values) => Ok(term_frequencies(values, &column.merges)),
        None => Err(TidyError::ColumnTypeMismatch {
            name: column.name.clone(),
            expected: ColumnType::Categorical,
            actual: column.column_type,
        }),
    }
}

/// Presentation truncation layered on top of the full aggregation.
pub fn top_terms(frequencies: &[TermFrequency], n: usize) -> &[TermFrequency] {
    &frequencies[..frequencies.len().min(n)]
}
