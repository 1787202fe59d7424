use anyhow::{Result, bail};

use gradebook_cli::pipeline::{run_courses, run_grades};
use gradebook_cli::summary::{print_course_summary, print_grade_summary, print_json};
use gradebook_cli::types::RunConfig;

use crate::cli::RunArgs;

pub fn courses(args: &RunArgs) -> Result<()> {
    let config = run_config(args)?;
    let result = run_courses(&config)?;
    if args.json {
        print_json(&result)
    } else {
        print_course_summary(&result);
        Ok(())
    }
}

pub fn grades(args: &RunArgs) -> Result<()> {
    let config = run_config(args)?;
    let result = run_grades(&config)?;
    if args.json {
        print_json(&result)
    } else {
        print_grade_summary(&result);
        Ok(())
    }
}

fn run_config(args: &RunArgs) -> Result<RunConfig> {
    if !args.delimiter.is_ascii() {
        bail!(
            "delimiter must be a single ASCII character, got {:?}",
            args.delimiter
        );
    }
    Ok(RunConfig {
        csv_path: args.csv_path.clone(),
        db_path: args.db_path.clone(),
        delimiter: args.delimiter as u8,
    })
}
