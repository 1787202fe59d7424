//! Console report rendering.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use crate::types::{CourseRunResult, GradeRunResult};

/// Print the human-readable report for a courses run.
pub fn print_course_summary(result: &CourseRunResult) {
    print_run_header(&result.csv_path, &result.db_path);
    let mut table = summary_table();
    table.add_row(vec![
        Cell::new("Courses"),
        Cell::new(result.stats.course_count).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Longest course"),
        highlight_cell(result.stats.top_hours.as_ref().map(ToString::to_string)),
    ]);
    table.add_row(vec![
        Cell::new("Most expensive course"),
        highlight_cell(result.stats.top_price.as_ref().map(ToString::to_string)),
    ]);
    println!("{table}");
}

/// Print the human-readable report for a grades run.
pub fn print_grade_summary(result: &GradeRunResult) {
    print_run_header(&result.csv_path, &result.db_path);
    let stats = &result.stats;
    let mut table = summary_table();
    table.add_row(vec![
        Cell::new("Students"),
        Cell::new(stats.student_count).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Overall average"),
        Cell::new(format!("{:.2}", stats.overall_average)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Best average"),
        Cell::new(format!("{:.2}", stats.best_average)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Best student"),
        highlight_cell((!stats.best_student.is_empty()).then(|| stats.best_student.clone())),
    ]);
    println!("{table}");
}

/// Print a run result as pretty JSON instead of the table report.
pub fn print_json<T: Serialize>(result: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

fn print_run_header(csv_path: &std::path::Path, db_path: &std::path::Path) {
    println!("Input: {}", csv_path.display());
    println!("Database: {}", db_path.display());
}

fn summary_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header_cell("Statistic"), header_cell("Value")]);
    table
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn highlight_cell(value: Option<String>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}
