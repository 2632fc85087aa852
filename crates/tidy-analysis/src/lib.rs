pub mod charts;
pub mod frequency;

pub use charts::{
    ChartSuggestion, ChartSuggestions, GroupAverage, ScatterPoint, SequencePoint, suggest_charts,
};
pub use frequency::{
    DISTRIBUTION_TOP_N, TermFrequency, column_frequencies, term_frequencies, top_terms,
};
