//! Store behavior tests: lifecycle, cascade delete, ordering, round trips.

use tidy_model::{ColumnData, ColumnType, TidyError};
use tidy_store::MemStore;

#[test]
fn project_lifecycle() {
    let mut store = MemStore::new();
    let project = store.create_project("Demo", Some("Example".to_string()));
    assert_eq!(store.project(&project.id).expect("lookup").name, "Demo");
    store.delete_project(&project.id).expect("delete");
    assert!(matches!(
        store.project(&project.id),
        Err(TidyError::ProjectNotFound(_))
    ));
}

#[test]
fn deleting_a_project_cascades_to_its_columns() {
    let mut store = MemStore::new();
    let kept = store.create_project("Kept", None);
    let doomed = store.create_project("Doomed", None);
    let kept_col = store
        .create_column(&kept.id, "Region", ColumnType::Categorical)
        .expect("create column");
    let doomed_a = store
        .create_column(&doomed.id, "Region", ColumnType::Categorical)
        .expect("create column");
    let doomed_b = store
        .create_column(&doomed.id, "Sales", ColumnType::Numeric)
        .expect("create column");

    store.delete_project(&doomed.id).expect("delete project");

    assert!(matches!(
        store.column(&doomed_a.id),
        Err(TidyError::ColumnNotFound(_))
    ));
    assert!(matches!(
        store.column(&doomed_b.id),
        Err(TidyError::ColumnNotFound(_))
    ));
    assert!(store.column(&kept_col.id).is_ok());
}

#[test]
fn columns_list_in_creation_order() {
    let mut store = MemStore::new();
    let project = store.create_project("Demo", None);
    for name in ["first", "second", "third"] {
        store
            .create_column(&project.id, name, ColumnType::Categorical)
            .expect("create column");
    }
    let names: Vec<&str> = store
        .project_columns(&project.id)
        .expect("list columns")
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["first", "second", "third"]);
}

#[test]
fn column_creation_requires_existing_project() {
    let mut store = MemStore::new();
    let ghost = store.create_project("Ghost", None);
    store.delete_project(&ghost.id).expect("delete");
    assert!(matches!(
        store.create_column(&ghost.id, "Region", ColumnType::Categorical),
        Err(TidyError::ProjectNotFound(_))
    ));
}

#[test]
fn data_replacement_enforces_declared_type() {
    let mut store = MemStore::new();
    let project = store.create_project("Demo", None);
    let column = store
        .create_column(&project.id, "Sales", ColumnType::Numeric)
        .expect("create column");

    let err = store
        .replace_column_data(&column.id, ColumnData::Categorical(vec!["x".to_string()]))
        .expect_err("type mismatch");
    assert!(matches!(err, TidyError::ColumnTypeMismatch { .. }));

    let updated = store
        .replace_column_data(&column.id, ColumnData::Numeric(vec![1.0, 2.0]))
        .expect("replace");
    assert_eq!(updated.data.len(), 2);
}

#[test]
fn replacement_is_wholesale() {
    let mut store = MemStore::new();
    let project = store.create_project("Demo", None);
    let column = store
        .create_column(&project.id, "Sales", ColumnType::Numeric)
        .expect("create column");
    store
        .replace_column_data(&column.id, ColumnData::Numeric(vec![1.0, 2.0, 3.0]))
        .expect("replace");
    let updated = store
        .replace_column_data(&column.id, ColumnData::Numeric(Vec::new()))
        .expect("replace with empty");
    // Empty input clears previous data; it never appends.
    assert!(updated.data.is_empty());
}

#[test]
fn merges_require_categorical_columns() {
    let mut store = MemStore::new();
    let project = store.create_project("Demo", None);
    let column = store
        .create_column(&project.id, "Sales", ColumnType::Numeric)
        .expect("create column");
    let err = store
        .merge_column_terms(&column.id, &["a".to_string(), "b".to_string()], "a")
        .expect_err("numeric column");
    assert!(matches!(err, TidyError::ColumnTypeMismatch { .. }));
}

#[test]
fn merge_reports_distinct_terms() {
    let mut store = MemStore::new();
    let project = store.create_project("Demo", None);
    let column = store
        .create_column(&project.id, "Region", ColumnType::Categorical)
        .expect("create column");
    let (merged, updated) = store
        .merge_column_terms(
            &column.id,
            &["usa".to_string(), "USA".to_string(), "usa".to_string()],
            "USA",
        )
        .expect("merge");
    // The duplicate "usa" collapses before anything is mapped.
    assert_eq!(merged, 2);
    assert_eq!(updated.merges.len(), 2);
}

#[test]
fn rejected_merge_leaves_column_unchanged() {
    let mut store = MemStore::new();
    let project = store.create_project("Demo", None);
    let column = store
        .create_column(&project.id, "Region", ColumnType::Categorical)
        .expect("create column");
    let err = store
        .merge_column_terms(&column.id, &["only".to_string()], "only")
        .expect_err("single term");
    assert!(matches!(err, TidyError::InvalidMergeRequest { distinct: 1 }));
    assert!(store.column(&column.id).expect("lookup").merges.is_empty());
}

#[test]
fn projects_sort_newest_first() {
    // Hand-built JSON pins distinct timestamps; create_project would stamp
    // both with "now".
    let json = r#"{
        "projects": {
            "p-old": {
                "id": "p-old",
                "name": "Old",
                "description": null,
                "created_at": "2026-01-01T00:00:00Z"
            },
            "p-new": {
                "id": "p-new",
                "name": "New",
                "description": null,
                "created_at": "2026-06-01T00:00:00Z"
            }
        },
        "columns": {}
    }"#;
    let store: MemStore = serde_json::from_str(json).expect("deserialize store");
    let names: Vec<&str> = store.projects().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["New", "Old"]);
}

#[test]
fn store_round_trips_through_json() {
    let mut store = MemStore::new();
    let project = store.create_project("Demo", Some("desc".to_string()));
    let column = store
        .create_column(&project.id, "Region", ColumnType::Categorical)
        .expect("create column");
    store
        .replace_column_data(
            &column.id,
            ColumnData::Categorical(vec!["usa".to_string(), "USA".to_string()]),
        )
        .expect("replace");
    store
        .merge_column_terms(&column.id, &["usa".to_string(), "USA".to_string()], "USA")
        .expect("merge");

    let json = serde_json::to_string(&store).expect("serialize store");
    let round: MemStore = serde_json::from_str(&json).expect("deserialize store");
    let restored = round.column(&column.id).expect("column survives");
    assert_eq!(restored.merges.resolve("usa"), "USA");
    assert_eq!(restored.data.len(), 2);
}
