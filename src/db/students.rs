use rusqlite::params;

use crate::models::StudentRecord;

use super::{StoreError, StudentStore};

/// Retrieve every student in store-native order. The grid performs a full
/// reload through this after each mutation, so the query stays unfiltered
/// and unordered on purpose.
pub fn fetch_all_students(store: &StudentStore) -> Result<Vec<StudentRecord>, StoreError> {
    let conn = store.connect()?;
    let mut stmt = conn.prepare("SELECT id, name, course, mobile FROM students")?;

    let students = stmt
        .query_map([], |row| {
            Ok(StudentRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                course: row.get(2)?,
                mobile: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(students)
}

/// Exact-match lookup by name. Case-sensitive whole-string comparison; a
/// search for "Ann" must not return "Anna".
pub fn find_students_by_name(
    store: &StudentStore,
    name: &str,
) -> Result<Vec<StudentRecord>, StoreError> {
    let conn = store.connect()?;
    let mut stmt =
        conn.prepare("SELECT id, name, course, mobile FROM students WHERE name = ?1")?;

    let students = stmt
        .query_map([name], |row| {
            Ok(StudentRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                course: row.get(2)?,
                mobile: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(students)
}

/// Insert a new student row, returning the hydrated struct so callers can
/// show it without re-querying. The store assigns the id.
pub fn insert_student(
    store: &StudentStore,
    name: &str,
    course: &str,
    mobile: &str,
) -> Result<StudentRecord, StoreError> {
    let conn = store.connect()?;
    conn.execute(
        "INSERT INTO students (name, course, mobile) VALUES (?1, ?2, ?3)",
        params![name, course, mobile],
    )?;

    let id = conn.last_insert_rowid();
    Ok(StudentRecord {
        id,
        name: name.to_string(),
        course: course.to_string(),
        mobile: mobile.to_string(),
    })
}

/// Overwrite all mutable fields of the row matching `id`. Zero affected
/// rows surfaces [`StoreError::NotFound`] so the UI can show a message
/// instead of silently continuing.
pub fn update_student(
    store: &StudentStore,
    id: i64,
    name: &str,
    course: &str,
    mobile: &str,
) -> Result<(), StoreError> {
    let conn = store.connect()?;
    let updated = conn.execute(
        "UPDATE students SET name = ?1, course = ?2, mobile = ?3 WHERE id = ?4",
        params![name, course, mobile, id],
    )?;

    if updated == 0 {
        Err(StoreError::NotFound(id))
    } else {
        Ok(())
    }
}

/// Remove the row matching `id`, with the same missing-id behavior as
/// [`update_student`].
pub fn delete_student(store: &StudentStore, id: i64) -> Result<(), StoreError> {
    let conn = store.connect()?;
    let deleted = conn.execute("DELETE FROM students WHERE id = ?1", params![id])?;

    if deleted == 0 {
        Err(StoreError::NotFound(id))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::{fs, process};

    use super::*;
    use crate::db::StoreError;

    static NEXT_DB: AtomicU32 = AtomicU32::new(0);

    /// Throwaway on-disk store. The gateway opens a fresh connection per
    /// operation, so `:memory:` databases would lose their contents between
    /// calls; a temp file keeps the per-operation connection contract
    /// intact during tests.
    struct TempStore {
        store: StudentStore,
        path: PathBuf,
    }

    impl TempStore {
        fn new() -> TempStore {
            let path = std::env::temp_dir().join(format!(
                "student-manager-test-{}-{}.sqlite",
                process::id(),
                NEXT_DB.fetch_add(1, Ordering::Relaxed)
            ));
            let _ = fs::remove_file(&path);
            let store = StudentStore::open(&path).unwrap();
            TempStore { store, path }
        }
    }

    impl Drop for TempStore {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.path);
        }
    }

    #[test]
    fn list_is_empty_on_fresh_store() {
        let temp = TempStore::new();
        assert!(fetch_all_students(&temp.store).unwrap().is_empty());
    }

    #[test]
    fn insert_then_list_contains_exactly_the_new_record() {
        let temp = TempStore::new();
        let inserted = insert_student(&temp.store, "Ann", "Math", "555-1234").unwrap();

        let all = fetch_all_students(&temp.store).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], inserted);
        assert_eq!(all[0].name, "Ann");
        assert_eq!(all[0].course, "Math");
        assert_eq!(all[0].mobile, "555-1234");
    }

    #[test]
    fn inserted_ids_are_unique() {
        let temp = TempStore::new();
        let first = insert_student(&temp.store, "Ann", "Math", "1").unwrap();
        let second = insert_student(&temp.store, "Ben", "Physics", "2").unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn update_rewrites_all_fields_and_leaves_other_rows_alone() {
        let temp = TempStore::new();
        let ann = insert_student(&temp.store, "Ann", "Math", "555-1234").unwrap();
        let ben = insert_student(&temp.store, "Ben", "Physics", "555-0000").unwrap();

        update_student(&temp.store, ann.id, "Anne", "Physics", "555-9999").unwrap();

        let all = fetch_all_students(&temp.store).unwrap();
        let updated = all.iter().find(|r| r.id == ann.id).unwrap();
        assert_eq!(updated.name, "Anne");
        assert_eq!(updated.course, "Physics");
        assert_eq!(updated.mobile, "555-9999");
        assert_eq!(all.iter().find(|r| r.id == ben.id).unwrap(), &ben);
    }

    #[test]
    fn delete_removes_exactly_one_row() {
        let temp = TempStore::new();
        let ann = insert_student(&temp.store, "Ann", "Math", "1").unwrap();
        insert_student(&temp.store, "Ben", "Physics", "2").unwrap();

        delete_student(&temp.store, ann.id).unwrap();

        let all = fetch_all_students(&temp.store).unwrap();
        assert_eq!(all.len(), 1);
        assert!(all.iter().all(|r| r.id != ann.id));
    }

    #[test]
    fn update_missing_id_reports_not_found() {
        let temp = TempStore::new();
        match update_student(&temp.store, 42, "Ann", "Math", "1") {
            Err(StoreError::NotFound(42)) => {}
            other => panic!("expected NotFound(42), got {other:?}"),
        }
    }

    #[test]
    fn delete_missing_id_reports_not_found() {
        let temp = TempStore::new();
        match delete_student(&temp.store, 7) {
            Err(StoreError::NotFound(7)) => {}
            other => panic!("expected NotFound(7), got {other:?}"),
        }
    }

    #[test]
    fn search_matches_whole_name_case_sensitively() {
        let temp = TempStore::new();
        insert_student(&temp.store, "Ann", "Math", "1").unwrap();
        insert_student(&temp.store, "Anna", "Biology", "2").unwrap();
        insert_student(&temp.store, "ann", "Physics", "3").unwrap();

        let found = find_students_by_name(&temp.store, "Ann").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ann");
    }

    #[test]
    fn search_misses_return_empty() {
        let temp = TempStore::new();
        insert_student(&temp.store, "Ann", "Math", "1").unwrap();
        assert!(find_students_by_name(&temp.store, "Zoe")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn insert_update_delete_scenario() {
        let temp = TempStore::new();

        let ann = insert_student(&temp.store, "Ann", "Math", "555-1234").unwrap();
        let all = fetch_all_students(&temp.store).unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Ann");
        assert_eq!(all[0].course, "Math");
        assert_eq!(all[0].mobile, "555-1234");

        update_student(&temp.store, ann.id, "Anne", "Physics", "555-9999").unwrap();
        let all = fetch_all_students(&temp.store).unwrap();
        assert_eq!(
            all,
            vec![StudentRecord {
                id: ann.id,
                name: "Anne".to_string(),
                course: "Physics".to_string(),
                mobile: "555-9999".to_string(),
            }]
        );

        delete_student(&temp.store, ann.id).unwrap();
        assert!(fetch_all_students(&temp.store).unwrap().is_empty());
    }
}
