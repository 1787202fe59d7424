use serde::{Deserialize, Serialize};

/// Number of grade columns each student row carries.
pub const GRADES_PER_STUDENT: usize = 5;

/// One row of the course catalog: course name, hour load, and price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub name: String,
    pub hours: i64,
    pub price: f64,
}

/// One row of the grade sheet: student name plus exactly five grades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    pub name: String,
    pub grades: [f64; GRADES_PER_STUDENT],
}
