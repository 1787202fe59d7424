//! Sequential pipeline shared by the subcommands.
//!
//! Every run follows the same order: load the CSV, rebuild the raw table,
//! read it back, compute statistics, rebuild the statistics table. The
//! statistics write is transactional and happens last, so a failure in any
//! earlier stage leaves the previously stored statistics untouched.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use gradebook_ingest::{IngestOptions, read_courses, read_grades};
use gradebook_stats::{course_stats, grade_stats};
use gradebook_store::Store;

use crate::types::{CourseRunResult, GradeRunResult, RunConfig};

/// Run the course catalog pipeline end to end.
pub fn run_courses(config: &RunConfig) -> Result<CourseRunResult> {
    let span = info_span!("courses", csv = %config.csv_path.display());
    let _guard = span.enter();
    let started = Instant::now();

    let options = IngestOptions {
        delimiter: config.delimiter,
    };
    let records = read_courses(&config.csv_path, options).context("load course file")?;
    info!(count = records.len(), "course file loaded");

    let mut store = open_store(config)?;
    store.replace_courses(&records).context("rebuild courses table")?;

    let stored = store.load_courses().context("read courses back")?;
    let stats = course_stats(&stored);
    store
        .replace_course_stats(&stats)
        .context("rebuild statistics table")?;
    info!(count = stats.course_count, "course statistics stored");

    debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "courses run finished"
    );
    Ok(CourseRunResult {
        csv_path: config.csv_path.clone(),
        db_path: config.db_path.clone(),
        stats,
    })
}

/// Run the grade sheet pipeline end to end.
pub fn run_grades(config: &RunConfig) -> Result<GradeRunResult> {
    let span = info_span!("grades", csv = %config.csv_path.display());
    let _guard = span.enter();
    let started = Instant::now();

    let options = IngestOptions {
        delimiter: config.delimiter,
    };
    let records = read_grades(&config.csv_path, options).context("load grade file")?;
    info!(count = records.len(), "grade file loaded");

    let mut store = open_store(config)?;
    store.replace_grades(&records).context("rebuild grades table")?;

    let stored = store.load_grades().context("read grades back")?;
    let stats = grade_stats(&stored);
    store
        .replace_grade_stats(&stats)
        .context("rebuild statistics table")?;
    info!(count = stats.student_count, "grade statistics stored");

    debug!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "grades run finished"
    );
    Ok(GradeRunResult {
        csv_path: config.csv_path.clone(),
        db_path: config.db_path.clone(),
        stats,
    })
}

fn open_store(config: &RunConfig) -> Result<Store> {
    let store = Store::open(&config.db_path)
        .with_context(|| format!("open database {}", config.db_path.display()))?;
    store.ensure_schema().context("create tables")?;
    Ok(store)
}
