//! Chart selector tests.

use tidy_analysis::{ChartSuggestion, ChartSuggestions, suggest_charts};
use tidy_model::{Column, ColumnData, ColumnType, ProjectId};

fn categorical(name: &str, raw: &[&str]) -> Column {
    let mut column = Column::new(ProjectId::random(), name, ColumnType::Categorical);
    column.data = ColumnData::Categorical(raw.iter().map(|v| (*v).to_string()).collect());
    column
}

fn numeric(name: &str, raw: &[f64]) -> Column {
    let mut column = Column::new(ProjectId::random(), name, ColumnType::Numeric);
    column.data = ColumnData::Numeric(raw.to_vec());
    column
}

#[test]
fn all_empty_columns_report_no_data() {
    let columns = vec![
        Column::new(ProjectId::random(), "Region", ColumnType::Categorical),
        Column::new(ProjectId::random(), "Sales", ColumnType::Numeric),
    ];
    let active = columns[0].id.clone();
    assert_eq!(
        suggest_charts(&columns, Some(&active)),
        ChartSuggestions::NoData
    );
}

#[test]
fn active_categorical_column_yields_distribution() {
    let column = categorical("Region", &["North", "North", "South"]);
    let active = column.id.clone();
    let suggestions = suggest_charts(&[column], Some(&active));

    let charts = suggestions.charts();
    assert_eq!(charts.len(), 1);
    let ChartSuggestion::CategoricalDistribution { series, column_name, .. } = &charts[0] else {
        panic!("expected a distribution chart");
    };
    assert_eq!(column_name, "Region");
    assert_eq!(series[0].term, "North");
    assert_eq!(series[0].count, 2);
}

#[test]
fn distribution_series_truncates_to_top_ten() {
    let raw: Vec<String> = (0..15).map(|i| format!("term{i}")).collect();
    let refs: Vec<&str> = raw.iter().map(String::as_str).collect();
    let column = categorical("Terms", &refs);
    let active = column.id.clone();
    let suggestions = suggest_charts(&[column], Some(&active));

    let ChartSuggestion::CategoricalDistribution { series, .. } = &suggestions.charts()[0] else {
        panic!("expected a distribution chart");
    };
    assert_eq!(series.len(), 10);
}

#[test]
fn active_numeric_column_yields_one_based_sequence() {
    let column = numeric("Sales", &[120.0, 90.0, 200.0]);
    let active = column.id.clone();
    let suggestions = suggest_charts(&[column], Some(&active));

    let ChartSuggestion::NumericSequence { points, .. } = &suggestions.charts()[0] else {
        panic!("expected a sequence chart");
    };
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].index, 1);
    assert_eq!(points[0].value, 120.0);
    assert_eq!(points[2].index, 3);
}

#[test]
fn no_active_column_still_fires_multi_column_rules() {
    let columns = vec![
        categorical("Region", &["A", "B", "A"]),
        numeric("Sales", &[10.0, 20.0, 30.0]),
        numeric("Costs", &[5.0, 8.0]),
    ];
    let suggestions = suggest_charts(&columns, None);
    let charts = suggestions.charts();
    assert_eq!(charts.len(), 2);
    assert!(matches!(charts[0], ChartSuggestion::GroupedAverage { .. }));
    assert!(matches!(
        charts[1],
        ChartSuggestion::ScatterCorrelation { .. }
    ));
}

#[test]
fn grouped_average_pairs_positionally_and_keeps_stable_ties() {
    let columns = vec![
        categorical("Region", &["A", "B", "A"]),
        numeric("Sales", &[10.0, 20.0, 30.0]),
    ];
    let suggestions = suggest_charts(&columns, None);

    let ChartSuggestion::GroupedAverage { groups, .. } = &suggestions.charts()[0] else {
        panic!("expected a grouped average chart");
    };
    // A: (10 + 30) / 2 = 20, B: 20 / 1 = 20. Equal averages keep
    // first-occurrence order.
    assert_eq!(groups.len(), 2);
    assert_eq!((groups[0].name.as_str(), groups[0].avg), ("A", 20.0));
    assert_eq!((groups[1].name.as_str(), groups[1].avg), ("B", 20.0));
}

#[test]
fn grouped_average_resolves_merged_categories() {
    let mut cat = categorical("Country", &["usa", "USA", "Canada"]);
    cat.merges
        .register(&["usa".to_string(), "USA".to_string()], "USA")
        .expect("register");
    let columns = vec![cat, numeric("Score", &[1.0, 3.0, 10.0])];
    let suggestions = suggest_charts(&columns, None);

    let ChartSuggestion::GroupedAverage { groups, .. } = &suggestions.charts()[0] else {
        panic!("expected a grouped average chart");
    };
    assert_eq!((groups[0].name.as_str(), groups[0].avg), ("Canada", 10.0));
    assert_eq!((groups[1].name.as_str(), groups[1].avg), ("USA", 2.0));
}

#[test]
fn grouped_average_truncates_to_shorter_column() {
    let columns = vec![
        categorical("Region", &["A", "B", "A", "C"]),
        numeric("Sales", &[10.0, 20.0]),
    ];
    let suggestions = suggest_charts(&columns, None);

    let ChartSuggestion::GroupedAverage { groups, .. } = &suggestions.charts()[0] else {
        panic!("expected a grouped average chart");
    };
    // Only the first two rows pair up; "C" and the second "A" never count.
    assert_eq!(groups.len(), 2);
    assert_eq!((groups[0].name.as_str(), groups[0].avg), ("B", 20.0));
    assert_eq!((groups[1].name.as_str(), groups[1].avg), ("A", 10.0));
}

#[test]
fn scatter_pairs_first_two_numeric_columns_in_order() {
    let columns = vec![
        numeric("X", &[1.0, 2.0, 3.0]),
        numeric("Y", &[4.0, 5.0]),
        numeric("Z", &[9.0]),
    ];
    let suggestions = suggest_charts(&columns, None);

    let ChartSuggestion::ScatterCorrelation { points, x_name, y_name, .. } =
        &suggestions.charts()[0]
    else {
        panic!("expected a scatter chart");
    };
    assert_eq!(x_name, "X");
    assert_eq!(y_name, "Y");
    assert_eq!(points.len(), 2);
    assert_eq!((points[0].x, points[0].y), (1.0, 4.0));
    assert_eq!((points[1].x, points[1].y), (2.0, 5.0));
}

#[test]
fn empty_columns_are_skipped_when_picking_rule_inputs() {
    let columns = vec![
        categorical("EmptyCat", &[]),
        categorical("Region", &["A"]),
        numeric("EmptyNum", &[]),
        numeric("Sales", &[7.0]),
    ];
    let suggestions = suggest_charts(&columns, None);

    let ChartSuggestion::GroupedAverage {
        categorical_name,
        numeric_name,
        ..
    } = &suggestions.charts()[0]
    else {
        panic!("expected a grouped average chart");
    };
    assert_eq!(categorical_name, "Region");
    assert_eq!(numeric_name, "Sales");
}

#[test]
fn data_present_without_applicable_rules_is_not_no_data() {
    // Data exists but no multi-column rule applies; the result is still
    // Charts, not NoData.
    let column = numeric("Sales", &[1.0]);
    let suggestions = suggest_charts(std::slice::from_ref(&column), None);
    assert_eq!(suggestions, ChartSuggestions::Charts(Vec::new()));
}
