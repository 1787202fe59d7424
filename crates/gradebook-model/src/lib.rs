pub mod record;
pub mod stats;

pub use record::{CourseRecord, GRADES_PER_STUDENT, GradeRecord};
pub use stats::{CourseStats, GradeStats, HoursHighlight, PriceHighlight};
