//! Derived statistics values.
//!
//! Exactly one statistics row exists per dataset after a successful run,
//! always computed from the current raw table contents. Empty input maps to
//! the `Default` value of each type, which is a valid result, not a failure.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The course with the highest hour load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoursHighlight {
    pub name: String,
    pub hours: i64,
}

impl fmt::Display for HoursHighlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} horas)", self.name, self.hours)
    }
}

/// The course with the highest price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHighlight {
    pub name: String,
    pub price: f64,
}

impl fmt::Display for PriceHighlight {
    // Rendered exactly as the legacy statistics table stored it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (R$ {:.2})", self.name, self.price)
    }
}

/// Summary of the course catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseStats {
    pub course_count: u64,
    /// `None` when the catalog was empty.
    pub top_hours: Option<HoursHighlight>,
    /// `None` when the catalog was empty.
    pub top_price: Option<PriceHighlight>,
}

/// Summary of the grade sheet.
///
/// `overall_average` is the mean of every student's trimmed mean;
/// `best_average` and `best_student` identify the highest trimmed mean.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradeStats {
    pub student_count: u64,
    pub overall_average: f64,
    pub best_average: f64,
    pub best_student: String,
}
