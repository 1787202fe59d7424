//! Descriptive statistics over loaded records.
//!
//! Every function here is pure: it takes an in-memory snapshot of a table
//! and returns a statistics value. Empty input yields the neutral value of
//! the corresponding statistics type rather than an error, so the pipeline
//! stays total.

use gradebook_model::{
    CourseRecord, CourseStats, GRADES_PER_STUDENT, GradeRecord, GradeStats, HoursHighlight,
    PriceHighlight,
};

/// Mean of the middle three of five sorted grades.
///
/// Exactly one low and one high value are dropped, by sort position, even
/// when the extremes are tied: `[5,5,5,5,5]` still keeps three fives.
pub fn trimmed_mean(grades: &[f64; GRADES_PER_STUDENT]) -> f64 {
    let mut sorted = *grades;
    sorted.sort_by(f64::total_cmp);
    let kept = &sorted[1..GRADES_PER_STUDENT - 1];
    kept.iter().sum::<f64>() / kept.len() as f64
}

/// Summarize the course catalog: count plus the records with the highest
/// hour load and the highest price.
///
/// Ties go to the earliest record, so callers must pass rows in insertion
/// order.
pub fn course_stats(records: &[CourseRecord]) -> CourseStats {
    let mut top_hours: Option<&CourseRecord> = None;
    let mut top_price: Option<&CourseRecord> = None;
    for record in records {
        if top_hours.is_none_or(|best| record.hours > best.hours) {
            top_hours = Some(record);
        }
        if top_price.is_none_or(|best| record.price > best.price) {
            top_price = Some(record);
        }
    }
    CourseStats {
        course_count: records.len() as u64,
        top_hours: top_hours.map(|record| HoursHighlight {
            name: record.name.clone(),
            hours: record.hours,
        }),
        top_price: top_price.map(|record| PriceHighlight {
            name: record.name.clone(),
            price: record.price,
        }),
    }
}

/// Summarize the grade sheet: count, overall average of the trimmed means,
/// and the student with the highest trimmed mean (earliest record on ties).
pub fn grade_stats(records: &[GradeRecord]) -> GradeStats {
    if records.is_empty() {
        return GradeStats::default();
    }
    let mut sum = 0.0;
    let mut best: Option<(&GradeRecord, f64)> = None;
    for record in records {
        let average = trimmed_mean(&record.grades);
        sum += average;
        if best.is_none_or(|(_, best_average)| average > best_average) {
            best = Some((record, average));
        }
    }
    let (best_student, best_average) = match best {
        Some((record, average)) => (record.name.clone(), average),
        None => (String::new(), 0.0),
    };
    GradeStats {
        student_count: records.len() as u64,
        overall_average: sum / records.len() as f64,
        best_average,
        best_student,
    }
}
