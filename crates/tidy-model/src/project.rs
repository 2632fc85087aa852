use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::ProjectId;

/// A project groups related data columns under one name.
///
/// Deleting a project cascades to every column it owns; the cascade itself
/// is the store's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: ProjectId::random(),
            name: name.into(),
            description,
            created_at: Utc::now(),
        }
    }
}
