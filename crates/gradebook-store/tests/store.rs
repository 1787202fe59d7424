//! Integration tests for the SQLite store.

use gradebook_model::{CourseRecord, CourseStats, GradeRecord, GradeStats, HoursHighlight};
use gradebook_store::Store;
use tempfile::TempDir;

fn course(name: &str, hours: i64, price: f64) -> CourseRecord {
    CourseRecord {
        name: name.to_string(),
        hours,
        price,
    }
}

fn open_store() -> Store {
    let store = Store::open_in_memory().expect("open store");
    store.ensure_schema().expect("create schema");
    store
}

#[test]
fn schema_creation_is_idempotent() {
    let store = open_store();
    store.ensure_schema().expect("second run");
    store.ensure_schema().expect("third run");
}

#[test]
fn courses_round_trip_in_insertion_order() {
    let mut store = open_store();
    let records = vec![
        course("Fundamentos Python", 140, 550.0),
        course("Java Avançado", 200, 1500.0),
        course("Linux Básico", 80, 750.0),
    ];
    store.replace_courses(&records).expect("replace");
    assert_eq!(store.load_courses().expect("load"), records);
    assert_eq!(store.count_courses().expect("count"), 3);
}

#[test]
fn grades_round_trip() {
    let mut store = open_store();
    let records = vec![GradeRecord {
        name: "Ana".to_string(),
        grades: [7.5, 8.0, 9.0, 6.5, 10.0],
    }];
    store.replace_grades(&records).expect("replace");
    assert_eq!(store.load_grades().expect("load"), records);
}

#[test]
fn replace_overwrites_previous_contents() {
    let mut store = open_store();
    store
        .replace_courses(&[course("Antigo", 10, 100.0)])
        .expect("first replace");
    store
        .replace_courses(&[course("Novo", 20, 200.0)])
        .expect("second replace");

    let loaded = store.load_courses().expect("load");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Novo");
}

#[test]
fn failed_replace_keeps_previous_contents() {
    let mut store = open_store();
    let original = vec![course("Intacto", 40, 400.0)];
    store.replace_courses(&original).expect("initial load");

    // SQLite stores NaN as NULL, so the NOT NULL price column rejects this
    // record after the batch already deleted and inserted other rows.
    let broken = vec![
        course("Válido", 60, 600.0),
        course("Inválido", 70, f64::NAN),
    ];
    store.replace_courses(&broken).expect_err("must fail");

    assert_eq!(store.load_courses().expect("load"), original);
}

#[test]
fn statistics_table_holds_exactly_one_row() {
    let mut store = open_store();
    let first = CourseStats {
        course_count: 1,
        top_hours: Some(HoursHighlight {
            name: "A".to_string(),
            hours: 10,
        }),
        top_price: None,
    };
    store.replace_course_stats(&first).expect("first write");

    let second = CourseStats {
        course_count: 2,
        top_hours: Some(HoursHighlight {
            name: "B".to_string(),
            hours: 20,
        }),
        top_price: None,
    };
    store.replace_course_stats(&second).expect("second write");

    let row = store
        .course_stats_row()
        .expect("read stats")
        .expect("row present");
    assert_eq!(row.course_count, 2);
    assert_eq!(row.top_hours, "B (20 horas)");
    assert_eq!(row.top_price, "");
}

#[test]
fn grade_stats_round_trip() {
    let mut store = open_store();
    let stats = GradeStats {
        student_count: 2,
        overall_average: 4.0,
        best_average: 5.0,
        best_student: "Bruno".to_string(),
    };
    store.replace_grade_stats(&stats).expect("write");
    assert_eq!(
        store.grade_stats_row().expect("read").expect("row present"),
        stats
    );
}

#[test]
fn stats_row_absent_before_first_run() {
    let store = open_store();
    assert!(store.course_stats_row().expect("read").is_none());
    assert!(store.grade_stats_row().expect("read").is_none());
}

#[test]
fn store_persists_across_connections() {
    let dir = TempDir::new().expect("tempdir");
    let db_path = dir.path().join("db.sqlite3");

    {
        let mut store = Store::open(&db_path).expect("open");
        store.ensure_schema().expect("schema");
        store
            .replace_courses(&[course("Persistente", 30, 300.0)])
            .expect("replace");
    }

    let store = Store::open(&db_path).expect("reopen");
    store.ensure_schema().expect("schema again");
    let loaded = store.load_courses().expect("load");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Persistente");
}
