//! Command implementations.
//!
//! Each function applies one command against the in-memory store; the
//! caller decides whether the store gets written back. Project and column
//! arguments accept either an id or a unique name.

use std::fs;
use std::io;

use anyhow::{Context, Result};
use tracing::info_span;

use tidy_analysis::{column_frequencies, suggest_charts};
use tidy_cli::resolve::{resolve_column, resolve_project};
use tidy_ingest::parse_raw_input;
use tidy_model::{Column, ColumnType};
use tidy_store::MemStore;

use crate::cli::{
    ChartsArgs, ColumnAddArgs, ColumnSelectorArgs, ColumnTypeArg, FreqArgs, IngestArgs, MergeArgs,
    ProjectNewArgs, ProjectSelectorArgs,
};
use crate::summary::{print_charts, print_frequencies, print_projects};

pub fn run_project_new(store: &mut MemStore, args: &ProjectNewArgs) -> Result<()> {
    let project = store.create_project(&args.name, args.description.clone());
    println!("Created project `{}` ({})", project.name, project.id);
    Ok(())
}

pub fn run_project_list(store: &MemStore) {
    print_projects(store);
}

pub fn run_project_delete(store: &mut MemStore, args: &ProjectSelectorArgs) -> Result<()> {
    let project_id = resolve_project(store, &args.project)?;
    let columns = store.project_columns(&project_id)?.len();
    store.delete_project(&project_id)?;
    println!("Deleted project {project_id} and {columns} column(s)");
    Ok(())
}

pub fn run_column_add(store: &mut MemStore, args: &ColumnAddArgs) -> Result<()> {
    let project_id = resolve_project(store, &args.project)?;
    let column_type = column_type_from_arg(args.column_type);
    let column = store.create_column(&project_id, &args.name, column_type)?;
    println!(
        "Added {} column `{}` ({})",
        column.column_type, column.name, column.id
    );
    Ok(())
}

pub fn run_column_delete(store: &mut MemStore, args: &ColumnSelectorArgs) -> Result<()> {
    let (_, column_id) = resolve_column(store, &args.project, &args.column)?;
    store.delete_column(&column_id)?;
    println!("Deleted column {column_id}");
    Ok(())
}

pub fn run_ingest(store: &mut MemStore, args: &IngestArgs) -> Result<()> {
    let (_, column_id) = resolve_column(store, &args.project, &args.column)?;
    let (column_type, column_name) = {
        let column = store.column(&column_id)?;
        (column.column_type, column.name.clone())
    };

    let span = info_span!("ingest", column = %column_name);
    let _guard = span.enter();

    let raw = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read input file {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("read raw input from stdin")?,
    };
    let data = parse_raw_input(&raw, column_type);
    let updated = store.replace_column_data(&column_id, data)?;
    println!(
        "Ingested {} value(s) into `{}`",
        updated.data.len(),
        updated.name
    );
    Ok(())
}

pub fn run_merge(store: &mut MemStore, args: &MergeArgs) -> Result<()> {
    let (_, column_id) = resolve_column(store, &args.project, &args.column)?;
    let (merged, updated) = store.merge_column_terms(&column_id, &args.terms, &args.target)?;
    println!(
        "Merged {merged} term(s) into `{}` on column `{}`",
        args.target, updated.name
    );
    Ok(())
}

pub fn run_freq(store: &MemStore, args: &FreqArgs) -> Result<()> {
    let (_, column_id) = resolve_column(store, &args.project, &args.column)?;
    let column = store.column(&column_id)?;
    let frequencies = column_frequencies(column)?;
    print_frequencies(&column.name, &frequencies);
    Ok(())
}

pub fn run_charts(store: &MemStore, args: &ChartsArgs) -> Result<()> {
    let project_id = resolve_project(store, &args.project)?;
    let columns: Vec<Column> = store
        .project_columns(&project_id)?
        .into_iter()
        .cloned()
        .collect();
    let active = match &args.active {
        Some(selector) => {
            let (_, column_id) = resolve_column(store, &args.project, selector)?;
            Some(column_id)
        }
        None => None,
    };

    let suggestions = suggest_charts(&columns, active.as_ref());
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&suggestions).context("serialize chart suggestions")?
        );
    } else {
        print_charts(&suggestions);
    }
    Ok(())
}

fn column_type_from_arg(arg: ColumnTypeArg) -> ColumnType {
    match arg {
        ColumnTypeArg::Categorical => ColumnType::Categorical,
        ColumnTypeArg::Numeric => ColumnType::Numeric,
    }
}
