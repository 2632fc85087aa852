//! Chart suggestion rules.
//!
//! Four independent rules derive chart-ready series from the shape of a
//! project's columns. Categorical values pass through the column's merge
//! map before any grouping, so a chart always reflects cleaned data.

use indexmap::IndexMap;
use serde::Serialize;

use tidy_model::{Column, ColumnData, ColumnId};
use tracing::debug;

use crate::frequency::{DISTRIBUTION_TOP_N, TermFrequency, term_frequencies};

/// One point of a positional numeric series. `index` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequencePoint {
    pub index: usize,
    pub value: f64,
}

/// Average of a numeric column within one resolved category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAverage {
    pub name: String,
    pub avg: f64,
}

/// One positionally paired observation from two numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// A chart the selector considers worth rendering, with its series data
/// pre-aggregated. The consumer decides how to draw it; the distribution
/// series serves both bar and pie renderings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "chart", rename_all = "snake_case")]
pub enum ChartSuggestion {
    CategoricalDistribution {
        column_id: ColumnId,
        column_name: String,
        series: Vec<TermFrequency>,
    },
    NumericSequence {
        column_id: ColumnId,
        column_name: String,
        points: Vec<SequencePoint>,
    },
    GroupedAverage {
        categorical_id: ColumnId,
        categorical_name: String,
        numeric_id: ColumnId,
        numeric_name: String,
        groups: Vec<GroupAverage>,
    },
    ScatterCorrelation {
        x_id: ColumnId,
        x_name: String,
        y_id: ColumnId,
        y_name: String,
        points: Vec<ScatterPoint>,
    },
}

/// Selector outcome: either nothing to draw at all, or zero or more
/// suggestions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "charts", rename_all = "snake_case")]
pub enum ChartSuggestions {
    /// Every column in the project is empty; no rule was evaluated.
    NoData,
    Charts(Vec<ChartSuggestion>),
}

impl ChartSuggestions {
    pub fn charts(&self) -> &[ChartSuggestion] {
        match self {
            ChartSuggestions::NoData => &[],
            ChartSuggestions::Charts(charts) => charts,
        }
    }
}

/// Derive chart suggestions from a project's columns.
///
/// `active` designates the column the user is currently working on; only
/// the two single-column rules depend on it. The multi-column rules pick
/// the first non-empty column of each required type in list order.
pub fn suggest_charts(columns: &[Column], active: Option<&ColumnId>) -> ChartSuggestions {
    if columns.iter().all(|column| column.data.is_empty()) {
        return ChartSuggestions::NoData;
    }

    let mut charts = Vec::new();
    let active_column = active.and_then(|id| columns.iter().find(|column| column.id == *id));

    if let Some(column) = active_column {
        match &column.data {
            ColumnData::Categorical(values) if !values.is_empty() => {
                let mut series = term_frequencies(values, &column.merges);
                series.truncate(DISTRIBUTION_TOP_N);
                charts.push(ChartSuggestion::CategoricalDistribution {
                    column_id: column.id.clone(),
                    column_name: column.name.clone(),
                    series,
                });
            }
            ColumnData::Numeric(values) if !values.is_empty() => {
                let points = values
                    .iter()
                    .enumerate()
                    .map(|(position, value)| SequencePoint {
                        index: position + 1,
                        value: *value,
                    })
                    .collect();
                charts.push(ChartSuggestion::NumericSequence {
                    column_id: column.id.clone(),
                    column_name: column.name.clone(),
                    points,
                });
            }
            _ => {}
        }
    }

    let categorical: Vec<&Column> = columns
        .iter()
        .filter(|column| column.categorical_values().is_some_and(|v| !v.is_empty()))
        .collect();
    let numeric: Vec<&Column> = columns
        .iter()
        .filter(|column| column.numeric_values().is_some_and(|v| !v.is_empty()))
        .collect();

    if let (Some(cat), Some(num)) = (categorical.first(), numeric.first()) {
        charts.push(grouped_average(cat, num));
    }
    if let [x, y, ..] = numeric.as_slice() {
        charts.push(scatter_correlation(x, y));
    }

    debug!(count = charts.len(), "chart suggestions derived");
    ChartSuggestions::Charts(charts)
}

/// Pair the columns positionally, group numeric values by resolved
/// category, and average each group. Ordered by descending average with
/// first-occurrence ties, truncated to the top 10.
fn grouped_average(cat: &Column, num: &Column) -> ChartSuggestion {
    let cat_values = cat.categorical_values().unwrap_or_default();
    let num_values = num.numeric_values().unwrap_or_default();
    let paired = cat_values.len().min(num_values.len());

    let mut sums: IndexMap<&str, (f64, usize)> = IndexMap::new();
    for i in 0..paired {
        let name = cat.merges.resolve(&cat_values[i]);
        let entry = sums.entry(name).or_insert((0.0, 0));
        entry.0 += num_values[i];
        entry.1 += 1;
    }

    let mut groups: Vec<GroupAverage> = sums
        .into_iter()
        .map(|(name, (sum, count))| GroupAverage {
            name: name.to_string(),
            avg: round2(sum / count as f64),
        })
        .collect();
    groups.sort_by(|a, b| b.avg.total_cmp(&a.avg));
    groups.truncate(DISTRIBUTION_TOP_N);

    ChartSuggestion::GroupedAverage {
        categorical_id: cat.id.clone(),
        categorical_name: cat.name.clone(),
        numeric_id: num.id.clone(),
        numeric_name: num.name.clone(),
        groups,
    }
}

/// Positional `{x, y}` pairs truncated to the shorter column, unaggregated.
fn scatter_correlation(x: &Column, y: &Column) -> ChartSuggestion {
    let x_values = x.numeric_values().unwrap_or_default();
    let y_values = y.numeric_values().unwrap_or_default();
    let points = x_values
        .iter()
        .zip(y_values)
        .map(|(x, y)| ScatterPoint { x: *x, y: *y })
        .collect();

    ChartSuggestion::ScatterCorrelation {
        x_id: x.id.clone(),
        x_name: x.name.clone(),
        y_id: y.id.clone(),
        y_name: y.name.clone(),
        points,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
