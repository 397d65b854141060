use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::constants::{MAX_LINE_LENGTH, NUM_FIELDS};
use crate::{InputFault, Job, JobSet, SchedulingError, TimeStep, ID};

/// Opens the job file, or stdin when no path is given.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>, SchedulingError> {
    match path {
        Some(path) => Ok(Box::new(File::open(path)?)),
        None => Ok(Box::new(io::stdin())),
    }
}

/// Reads a job list and returns a `JobSet`.
///
/// The first line is a header and is skipped. Every other line holds a
/// person, a job name, an arrival time and a duration, separated by commas,
/// spaces or tabs in any mix.
pub fn read_jobs<R: Read>(mut reader: R) -> Result<JobSet, SchedulingError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut jobs = JobSet::new_empty();

    // Line 0 is the header, so the n-th data line is job n
    for (number, line) in text.lines().enumerate().skip(1) {
        let id = job_id(number, number + 1)?;
        jobs.add_job(parse_line(line, number + 1, id)?);
    }

    Ok(jobs)
}

fn job_id(ordinal: usize, line_number: usize) -> Result<ID, SchedulingError> {
    ID::try_from(ordinal)
        .map_err(|_| SchedulingError::input(line_number, InputFault::TooManyJobs { max: ID::MAX }))
}

fn parse_line(line: &str, line_number: usize, id: ID) -> Result<Job, SchedulingError> {
    let length = line.len();
    if length > MAX_LINE_LENGTH {
        return Err(SchedulingError::input(
            line_number,
            InputFault::LineTooLong { length, max: MAX_LINE_LENGTH },
        ));
    }
    if line.trim().is_empty() {
        return Err(SchedulingError::input(line_number, InputFault::EmptyLine));
    }

    // Whitespace is just another separator
    let normalised: String = line
        .chars()
        .map(|c| if c == ' ' || c == '\t' { ',' } else { c })
        .collect();

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(normalised.as_bytes());
    let mut record = StringRecord::new();
    rdr.read_record(&mut record)?;

    let fields: Vec<&str> = record
        .iter()
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .collect();
    if fields.len() != NUM_FIELDS {
        return Err(SchedulingError::input(
            line_number,
            InputFault::FieldCount { found: fields.len(), expected: NUM_FIELDS },
        ));
    }

    let arrival_time = parse_number(fields[2], "arrival time", line_number)?;
    let duration = parse_number(fields[3], "duration", line_number)?;
    if duration == 0 {
        return Err(SchedulingError::input(line_number, InputFault::ZeroDuration));
    }

    Ok(Job::new(id, fields[0], fields[1], arrival_time, duration))
}

fn parse_number(value: &str, field: &'static str, line_number: usize) -> Result<TimeStep, SchedulingError> {
    value.parse().map_err(|_| {
        SchedulingError::input(
            line_number,
            InputFault::BadNumber { field, value: value.to_string() },
        )
    })
}
