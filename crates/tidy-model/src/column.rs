use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::{ColumnId, ProjectId};
use crate::merge::MergeMap;

/// The declared type of a column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Categorical,
    Numeric,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Categorical => f.write_str("categorical"),
            ColumnType::Numeric => f.write_str("numeric"),
        }
    }
}

/// Column values, discriminated by the column's declared type.
///
/// The variant always matches [`Column::column_type`]; the store rejects
/// replacements that would break that invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "lowercase")]
pub enum ColumnData {
    Categorical(Vec<String>),
    Numeric(Vec<f64>),
}

impl ColumnData {
    /// Empty data of the given type.
    pub fn empty(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Categorical => ColumnData::Categorical(Vec::new()),
            ColumnType::Numeric => ColumnData::Numeric(Vec::new()),
        }
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnData::Categorical(_) => ColumnType::Categorical,
            ColumnData::Numeric(_) => ColumnType::Numeric,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnData::Categorical(values) => values.len(),
            ColumnData::Numeric(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A typed data column owned by a project.
///
/// `data` is replaced wholesale on every ingestion; `merges` grows
/// incrementally and only carries meaning for categorical columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub project_id: ProjectId,
    pub name: String,
    pub column_type: ColumnType,
    pub data: ColumnData,
    #[serde(default)]
    pub merges: MergeMap,
}

impl Column {
    /// Create an empty column of the given type.
    pub fn new(project_id: ProjectId, name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            id: ColumnId::random(),
            project_id,
            name: name.into(),
            column_type,
            data: ColumnData::empty(column_type),
            merges: MergeMap::new(),
        }
    }

    /// The raw categorical values, or `None` for numeric columns.
    pub fn categorical_values(&self) -> Option<&[String]> {
        match &self.data {
            ColumnData::Categorical(values) => Some(values),
            ColumnData::Numeric(_) => None,
        }
    }

    /// The numeric values, or `None` for categorical columns.
    pub fn numeric_values(&self) -> Option<&[f64]> {
        match &self.data {
            ColumnData::Numeric(values) => Some(values),
            ColumnData::Categorical(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_data_matches_declared_type() {
        let column = Column::new(ProjectId::random(), "Region", ColumnType::Categorical);
        assert_eq!(column.data, ColumnData::Categorical(Vec::new()));
        assert_eq!(column.data.column_type(), ColumnType::Categorical);
        assert!(column.data.is_empty());

        let column = Column::new(ProjectId::random(), "Sales", ColumnType::Numeric);
        assert_eq!(column.data.column_type(), ColumnType::Numeric);
        assert!(column.numeric_values().is_some());
        assert!(column.categorical_values().is_none());
    }
}
