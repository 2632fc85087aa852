//! Terminal summaries rendered with comfy-table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tidy_analysis::{ChartSuggestion, ChartSuggestions, GroupAverage, TermFrequency};
use tidy_store::MemStore;

pub fn print_projects(store: &MemStore) {
    let projects = store.projects();
    if projects.is_empty() {
        println!("No projects yet - create one with `datatidy project new <NAME>`");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Description"),
        header_cell("Created"),
        header_cell("Columns"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    for project in projects {
        let columns = store
            .project_columns(&project.id)
            .map(|columns| columns.len())
            .unwrap_or(0);
        table.add_row(vec![
            dim_cell(project.id.as_str()),
            Cell::new(&project.name).add_attribute(Attribute::Bold),
            Cell::new(project.description.as_deref().unwrap_or("-")),
            Cell::new(project.created_at.format("%Y-%m-%d %H:%M")),
            Cell::new(columns),
        ]);
    }
    println!("{table}");
}

pub fn print_frequencies(column_name: &str, frequencies: &[TermFrequency]) {
    if frequencies.is_empty() {
        println!("Column `{column_name}` has no data");
        return;
    }
    println!("Distribution of `{column_name}`:");
    print_frequency_rows(frequencies);
}

pub fn print_charts(suggestions: &ChartSuggestions) {
    match suggestions {
        ChartSuggestions::NoData => {
            println!("No data available - add data to columns to see chart suggestions");
        }
        ChartSuggestions::Charts(charts) if charts.is_empty() => {
            println!("No chart suggestions apply to this project yet");
        }
        ChartSuggestions::Charts(charts) => {
            for chart in charts {
                print_chart(chart);
            }
        }
    }
}

fn print_chart(chart: &ChartSuggestion) {
    match chart {
        ChartSuggestion::CategoricalDistribution {
            column_name,
            series,
            ..
        } => {
            println!("{column_name} Distribution (top {} terms):", series.len());
            print_frequency_rows(series);
        }
        ChartSuggestion::NumericSequence {
            column_name,
            points,
            ..
        } => {
            println!("{column_name} Trends: {} sequential value(s)", points.len());
        }
        ChartSuggestion::GroupedAverage {
            categorical_name,
            numeric_name,
            groups,
            ..
        } => {
            println!("Average {numeric_name} by {categorical_name}:");
            print_group_rows(groups);
        }
        ChartSuggestion::ScatterCorrelation {
            x_name,
            y_name,
            points,
            ..
        } => {
            println!("{x_name} vs {y_name}: {} paired point(s)", points.len());
        }
    }
    println!();
}

fn print_frequency_rows(series: &[TermFrequency]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Term"),
        header_cell("Count"),
        header_cell("Share"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for frequency in series {
        table.add_row(vec![
            Cell::new(&frequency.term),
            Cell::new(frequency.count),
            Cell::new(format!("{:.1}%", frequency.percentage)),
        ]);
    }
    println!("{table}");
}

fn print_group_rows(groups: &[GroupAverage]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Average")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for group in groups {
        table.add_row(vec![Cell::new(&group.name), Cell::new(group.avg)]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
