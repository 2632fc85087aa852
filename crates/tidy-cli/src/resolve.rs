//! Project and column selector resolution.
//!
//! Commands accept either an id or a name wherever they reference a
//! project or column. An exact id always wins; names must be unique
//! within their scope, and an ambiguous name is an error that points
//! the user at the id.

use anyhow::{Result, bail};

use tidy_model::{ColumnId, ProjectId};
use tidy_store::MemStore;

/// Resolve a project selector: exact id first, then unique name.
pub fn resolve_project(store: &MemStore, selector: &str) -> Result<ProjectId> {
    if let Ok(id) = ProjectId::new(selector)
        && store.project(&id).is_ok()
    {
        return Ok(id);
    }
    let matches: Vec<ProjectId> = store
        .projects()
        .into_iter()
        .filter(|project| project.name == selector)
        .map(|project| project.id.clone())
        .collect();
    match matches.as_slice() {
        [only] => Ok(only.clone()),
        [] => bail!("no project matches `{selector}`"),
        _ => bail!("project name `{selector}` is ambiguous, use its id"),
    }
}

/// Resolve a column selector within a project: exact id first, then
/// unique name.
pub fn resolve_column(
    store: &MemStore,
    project_selector: &str,
    column_selector: &str,
) -> Result<(ProjectId, ColumnId)> {
    let project_id = resolve_project(store, project_selector)?;
    let columns = store.project_columns(&project_id)?;
    if let Ok(id) = ColumnId::new(column_selector)
        && columns.iter().any(|column| column.id == id)
    {
        return Ok((project_id, id));
    }
    let matches: Vec<ColumnId> = columns
        .iter()
        .filter(|column| column.name == column_selector)
        .map(|column| column.id.clone())
        .collect();
    match matches.as_slice() {
        [only] => Ok((project_id, only.clone())),
        [] => bail!("no column matches `{column_selector}`"),
        _ => bail!("column name `{column_selector}` is ambiguous, use its id"),
    }
}
