//! In-memory persistence for projects and columns.
//!
//! [`MemStore`] is the key-value collaborator behind the core: it hands
//! out snapshots, accepts new values, and owns the cascade rules. It is
//! serde-round-trippable so a frontend can persist the whole store as one
//! JSON document. All maps are insertion-ordered, which keeps column
//! listings in creation order across save/load cycles.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use tidy_model::{
    Column, ColumnData, ColumnId, ColumnType, Project, ProjectId, Result, TidyError,
};

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MemStore {
    projects: IndexMap<ProjectId, Project>,
    columns: IndexMap<ColumnId, Column>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Projects ---

    /// Create a project and return its stored snapshot.
    pub fn create_project(&mut self, name: impl Into<String>, description: Option<String>) -> Project {
        let project = Project::new(name, description);
        info!(project_id = %project.id, name = %project.name, "project created");
        self.projects.insert(project.id.clone(), project.clone());
        project
    }

    /// All projects, newest first. Equal timestamps keep creation order.
    pub fn projects(&self) -> Vec<&Project> {
        let mut projects: Vec<&Project> = self.projects.values().collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        projects
    }

    pub fn project(&self, id: &ProjectId) -> Result<&Project> {
        self.projects
            .get(id)
            .ok_or_else(|| TidyError::ProjectNotFound(id.clone()))
    }

    /// Delete a project and cascade to every column it owns.
    pub fn delete_project(&mut self, id: &ProjectId) -> Result<()> {
        if self.projects.shift_remove(id).is_none() {
            return Err(TidyError::ProjectNotFound(id.clone()));
        }
        let before = self.columns.len();
        self.columns.retain(|_, column| column.project_id != *id);
        info!(
            project_id = %id,
            cascaded_columns = before - self.columns.len(),
            "project deleted"
        );
        Ok(())
    }

    // --- Columns ---

    /// Create an empty column under an existing project.
    pub fn create_column(
        &mut self,
        project_id: &ProjectId,
        name: impl Into<String>,
        column_type: ColumnType,
    ) -> Result<Column> {
        self.project(project_id)?;
        let column = Column::new(project_id.clone(), name, column_type);
        debug!(column_id = %column.id, name = %column.name, %column_type, "column created");
        self.columns.insert(column.id.clone(), column.clone());
        Ok(column)
    }

    pub fn column(&self, id: &ColumnId) -> Result<&Column> {
        self.columns
            .get(id)
            .ok_or_else(|| TidyError::ColumnNotFound(id.clone()))
    }

    /// Columns of a project in creation order.
    pub fn project_columns(&self, project_id: &ProjectId) -> Result<Vec<&Column>> {
        self.project(project_id)?;
        Ok(self
            .columns
            .values()
            .filter(|column| column.project_id == *project_id)
            .collect())
    }

    /// Replace a column's data wholesale and return the new snapshot.
    ///
    /// The replacement variant must match the column's declared type.
    pub fn replace_column_data(&mut self, id: &ColumnId, data: ColumnData) -> Result<Column> {
        let column = self
            .columns
            .get_mut(id)
            .ok_or_else(|| TidyError::ColumnNotFound(id.clone()))?;
        if data.column_type() != column.column_type {
            return Err(TidyError::ColumnTypeMismatch {
                name: column.name.clone(),
                expected: column.column_type,
                actual: data.column_type(),
            });
        }
        debug!(column_id = %id, values = data.len(), "column data replaced");
        column.data = data;
        Ok(column.clone())
    }

    /// Register a merge group on a categorical column. Returns the number
    /// of distinct terms mapped and the column's new snapshot. Validation
    /// happens before the map is touched, so a rejected request has no
    /// partial effect.
    pub fn merge_column_terms(
        &mut self,
        id: &ColumnId,
        terms: &[String],
        target: &str,
    ) -> Result<(usize, Column)> {
        let column = self
            .columns
            .get_mut(id)
            .ok_or_else(|| TidyError::ColumnNotFound(id.clone()))?;
        if column.column_type != ColumnType::Categorical {
            return Err(TidyError::ColumnTypeMismatch {
                name: column.name.clone(),
                expected: ColumnType::Categorical,
                actual: column.column_type,
            });
        }
        let merged = column.merges.register(terms, target)?;
        info!(column_id = %id, merged, target, "terms merged");
        Ok((merged, column.clone()))
    }

    pub fn delete_column(&mut self, id: &ColumnId) -> Result<()> {
        if self.columns.shift_remove(id).is_none() {
            return Err(TidyError::ColumnNotFound(id.clone()));
        }
        debug!(column_id = %id, "column deleted");
        Ok(())
    }
}
