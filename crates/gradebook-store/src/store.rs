use std::path::Path;

use rusqlite::{Connection, params};
use tracing::debug;

use gradebook_model::{CourseRecord, CourseStats, GradeRecord, GradeStats};

use crate::error::Result;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS courses (
    id     INTEGER PRIMARY KEY AUTOINCREMENT,
    name   TEXT NOT NULL,
    hours  INTEGER NOT NULL,
    price  REAL NOT NULL
);
CREATE TABLE IF NOT EXISTS course_stats (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    course_count INTEGER NOT NULL,
    top_hours    TEXT NOT NULL,
    top_price    TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS grades (
    id      INTEGER PRIMARY KEY AUTOINCREMENT,
    student TEXT NOT NULL,
    n1      REAL NOT NULL,
    n2      REAL NOT NULL,
    n3      REAL NOT NULL,
    n4      REAL NOT NULL,
    n5      REAL NOT NULL
);
CREATE TABLE IF NOT EXISTS grade_stats (
    id              INTEGER PRIMARY KEY AUTOINCREMENT,
    student_count   INTEGER NOT NULL,
    overall_average REAL NOT NULL,
    best_average    REAL NOT NULL,
    best_student    TEXT NOT NULL
);
";

/// A course statistics row as persisted, highlights preformatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCourseStats {
    pub course_count: u64,
    pub top_hours: String,
    pub top_price: String,
}

/// Owns the SQLite connection for one pipeline run.
///
/// The connection is closed when the store is dropped, on every exit path.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (or create) the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            conn: Connection::open(path)?,
        })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Create all tables if absent. Safe to call on every run.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Replace the full contents of the `courses` table.
    pub fn replace_courses(&mut self, records: &[CourseRecord]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM courses", [])?;
        {
            let mut insert =
                tx.prepare("INSERT INTO courses (name, hours, price) VALUES (?1, ?2, ?3)")?;
            for record in records {
                insert.execute(params![record.name, record.hours, record.price])?;
            }
        }
        tx.commit()?;
        debug!(count = records.len(), "courses table rebuilt");
        Ok(())
    }

    /// Replace the full contents of the `grades` table.
    pub fn replace_grades(&mut self, records: &[GradeRecord]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM grades", [])?;
        {
            let mut insert = tx.prepare(
                "INSERT INTO grades (student, n1, n2, n3, n4, n5) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for record in records {
                insert.execute(params![
                    record.name,
                    record.grades[0],
                    record.grades[1],
                    record.grades[2],
                    record.grades[3],
                    record.grades[4],
                ])?;
            }
        }
        tx.commit()?;
        debug!(count = records.len(), "grades table rebuilt");
        Ok(())
    }

    /// Read every course back in insertion order.
    pub fn load_courses(&self) -> Result<Vec<CourseRecord>> {
        let mut select = self
            .conn
            .prepare("SELECT name, hours, price FROM courses ORDER BY id")?;
        let rows = select.query_map([], |row| {
            Ok(CourseRecord {
                name: row.get(0)?,
                hours: row.get(1)?,
                price: row.get(2)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// Read every grade row back in insertion order.
    pub fn load_grades(&self) -> Result<Vec<GradeRecord>> {
        let mut select = self
            .conn
            .prepare("SELECT student, n1, n2, n3, n4, n5 FROM grades ORDER BY id")?;
        let rows = select.query_map([], |row| {
            Ok(GradeRecord {
                name: row.get(0)?,
                grades: [
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                ],
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub fn count_courses(&self) -> Result<u64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM courses", [], |row| row.get(0))?)
    }

    pub fn count_grades(&self) -> Result<u64> {
        Ok(self
            .conn
            .query_row("SELECT COUNT(*) FROM grades", [], |row| row.get(0))?)
    }

    /// Replace the single `course_stats` row.
    ///
    /// Highlights are stored preformatted; an empty catalog stores empty
    /// strings.
    pub fn replace_course_stats(&mut self, stats: &CourseStats) -> Result<()> {
        let top_hours = stats
            .top_hours
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        let top_price = stats
            .top_price
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default();
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM course_stats", [])?;
        tx.execute(
            "INSERT INTO course_stats (course_count, top_hours, top_price) \
             VALUES (?1, ?2, ?3)",
            params![stats.course_count, top_hours, top_price],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Replace the single `grade_stats` row.
    pub fn replace_grade_stats(&mut self, stats: &GradeStats) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM grade_stats", [])?;
        tx.execute(
            "INSERT INTO grade_stats \
             (student_count, overall_average, best_average, best_student) \
             VALUES (?1, ?2, ?3, ?4)",
            params![
                stats.student_count,
                stats.overall_average,
                stats.best_average,
                stats.best_student,
            ],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// The persisted course statistics row, if one exists.
    pub fn course_stats_row(&self) -> Result<Option<StoredCourseStats>> {
        let mut select = self
            .conn
            .prepare("SELECT course_count, top_hours, top_price FROM course_stats")?;
        let mut rows = select.query_map([], |row| {
            Ok(StoredCourseStats {
                course_count: row.get(0)?,
                top_hours: row.get(1)?,
                top_price: row.get(2)?,
            })
        })?;
        rows.next().transpose().map_err(Into::into)
    }

    /// The persisted grade statistics row, if one exists.
    pub fn grade_stats_row(&self) -> Result<Option<GradeStats>> {
        let mut select = self.conn.prepare(
            "SELECT student_count, overall_average, best_average, best_student \
             FROM grade_stats",
        )?;
        let mut rows = select.query_map([], |row| {
            Ok(GradeStats {
                student_count: row.get(0)?,
                overall_average: row.get(1)?,
                best_average: row.get(2)?,
                best_student: row.get(3)?,
            })
        })?;
        rows.next().transpose().map_err(Into::into)
    }
}
