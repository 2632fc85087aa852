pub mod column;
pub mod error;
pub mod ids;
pub mod merge;
pub mod project;

pub use column::{Column, ColumnData, ColumnType};
pub use error::{Result, TidyError};
pub use ids::{ColumnId, ProjectId};
pub use merge::MergeMap;
pub use project::Project;
