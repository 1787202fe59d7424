//! End-to-end pipeline tests: CSV file in, SQLite tables and statistics out.

use std::fs;

use gradebook_cli::pipeline::{run_courses, run_grades};
use gradebook_cli::types::RunConfig;
use gradebook_ingest::IngestError;
use gradebook_store::Store;
use tempfile::TempDir;

fn config(dir: &TempDir, csv_name: &str, contents: &str) -> RunConfig {
    let csv_path = dir.path().join(csv_name);
    fs::write(&csv_path, contents).expect("write csv");
    RunConfig {
        csv_path,
        db_path: dir.path().join("db.sqlite3"),
        delimiter: b';',
    }
}

fn missing_csv_config(dir: &TempDir) -> RunConfig {
    RunConfig {
        csv_path: dir.path().join("missing.csv"),
        db_path: dir.path().join("db.sqlite3"),
        delimiter: b';',
    }
}

const COURSES_CSV: &str = "curso;carga_horaria;preco\n\
                           Fundamentos Python;140;550\n\
                           Java Avançado;200;1500\n\
                           Microserviços com Go;160;990\n";

const GRADES_CSV: &str = "nome;n1;n2;n3;n4;n5\n\
                          Ana;1.0;2.0;3.0;4.0;100.0\n\
                          Bruno;5.0;5.0;5.0;5.0;5.0\n";

#[test]
fn courses_run_stores_rows_and_statistics() {
    let dir = TempDir::new().expect("tempdir");
    let config = config(&dir, "cursos.csv", COURSES_CSV);

    let result = run_courses(&config).expect("run pipeline");
    assert_eq!(result.stats.course_count, 3);
    assert_eq!(result.stats.top_hours.as_ref().expect("hours").name, "Java Avançado");
    assert_eq!(result.stats.top_price.as_ref().expect("price").name, "Java Avançado");

    let store = Store::open(&config.db_path).expect("open db");
    assert_eq!(store.count_courses().expect("count"), 3);
    let row = store
        .course_stats_row()
        .expect("read stats")
        .expect("stats row");
    assert_eq!(row.course_count, 3);
    assert_eq!(row.top_hours, "Java Avançado (200 horas)");
    assert_eq!(row.top_price, "Java Avançado (R$ 1500.00)");
}

#[test]
fn grades_run_stores_rows_and_statistics() {
    let dir = TempDir::new().expect("tempdir");
    let config = config(&dir, "notas.csv", GRADES_CSV);

    let result = run_grades(&config).expect("run pipeline");
    assert_eq!(result.stats.student_count, 2);
    assert_eq!(result.stats.overall_average, 4.0);
    assert_eq!(result.stats.best_average, 5.0);
    assert_eq!(result.stats.best_student, "Bruno");

    let store = Store::open(&config.db_path).expect("open db");
    assert_eq!(store.count_grades().expect("count"), 2);
    let row = store
        .grade_stats_row()
        .expect("read stats")
        .expect("stats row");
    assert_eq!(row, result.stats);
}

#[test]
fn rerun_on_unchanged_input_is_idempotent() {
    let dir = TempDir::new().expect("tempdir");
    let config = config(&dir, "notas.csv", GRADES_CSV);

    let first = run_grades(&config).expect("first run");
    let second = run_grades(&config).expect("second run");
    assert_eq!(first.stats, second.stats);

    // Tables are rebuilt, not appended to.
    let store = Store::open(&config.db_path).expect("open db");
    assert_eq!(store.count_grades().expect("count"), 2);
    assert_eq!(
        store
            .grade_stats_row()
            .expect("read stats")
            .expect("stats row"),
        second.stats
    );
}

#[test]
fn empty_input_yields_neutral_statistics() {
    let dir = TempDir::new().expect("tempdir");
    let config = config(&dir, "notas.csv", "nome;n1;n2;n3;n4;n5\n");

    let result = run_grades(&config).expect("run pipeline");
    assert_eq!(result.stats.student_count, 0);
    assert_eq!(result.stats.overall_average, 0.0);
    assert_eq!(result.stats.best_average, 0.0);
    assert!(result.stats.best_student.is_empty());

    let store = Store::open(&config.db_path).expect("open db");
    assert_eq!(store.count_grades().expect("count"), 0);
    assert!(store.grade_stats_row().expect("read stats").is_some());
}

#[test]
fn missing_input_file_aborts_before_any_write() {
    let dir = TempDir::new().expect("tempdir");
    let config = missing_csv_config(&dir);

    let error = run_courses(&config).expect_err("must fail");
    assert!(matches!(
        error.downcast_ref::<IngestError>(),
        Some(IngestError::NotFound { .. })
    ));
    // The database file was never created.
    assert!(!config.db_path.exists());
}

#[test]
fn conversion_failure_leaves_no_partial_data() {
    let dir = TempDir::new().expect("tempdir");
    let good = config(&dir, "notas.csv", GRADES_CSV);
    run_grades(&good).expect("seed run");

    let broken = RunConfig {
        csv_path: {
            let path = dir.path().join("broken.csv");
            fs::write(
                &path,
                "nome;n1;n2;n3;n4;n5\nCarla;1.0;bad;3.0;4.0;5.0\n",
            )
            .expect("write csv");
            path
        },
        ..good.clone()
    };

    let error = run_grades(&broken).expect_err("must fail");
    match error.downcast_ref::<IngestError>() {
        Some(IngestError::Conversion { row, column, .. }) => {
            assert_eq!(*row, 1);
            assert_eq!(column, "n2");
        }
        other => panic!("expected Conversion, got {other:?}"),
    }

    // Both the raw table and the statistics row still reflect the seed run.
    let store = Store::open(&good.db_path).expect("open db");
    assert_eq!(store.count_grades().expect("count"), 2);
    let row = store
        .grade_stats_row()
        .expect("read stats")
        .expect("stats row");
    assert_eq!(row.best_student, "Bruno");
}
