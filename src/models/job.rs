use std::rc::Rc;

use crate::SchedulingError;

use super::{Slice, TimeStep, ID};

/// One job as submitted on an input line.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    id: ID,                  // Position in the input, starting at 1
    person_name: Rc<str>,    // Who submitted the job
    job_name: Rc<str>,       // Name printed in the schedule
    arrival_time: TimeStep,  // Time unit at which the job arrives
    duration: TimeStep,      // Total number of time units required
}

impl Job {
    pub fn new(id: ID, person_name: &str, job_name: &str, arrival_time: TimeStep, duration: TimeStep) -> Self {
        Self {
            id,
            person_name: Rc::from(person_name),
            job_name: Rc::from(job_name),
            arrival_time,
            duration,
        }
    }

    pub fn id(&self) -> ID {
        self.id
    }

    pub fn person_name(&self) -> &str {
        &self.person_name
    }

    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    pub fn arrival_time(&self) -> TimeStep {
        self.arrival_time
    }

    pub fn duration(&self) -> TimeStep {
        self.duration
    }

    /// Last time unit the job could occupy if it ran uninterrupted.
    pub fn nominal_end(&self) -> Option<TimeStep> {
        self.arrival_time.checked_add(self.duration)
    }

    /// Splits the job into one slice per time unit.
    ///
    /// Slice `k` targets `arrival_time + k` and carries a remaining duration
    /// of `duration - k`, so the first slice is the longest and is placed
    /// first to anchor the job.
    ///
    /// # Errors
    /// `Allocation` if the slice buffer cannot be reserved, `TimeOverflow`
    /// if the last slice's target does not fit in a `TimeStep`.
    pub fn split(&self) -> Result<Vec<Slice>, SchedulingError> {
        if self.nominal_end().is_none() {
            return Err(SchedulingError::TimeOverflow(self.job_name.to_string()));
        }

        let mut slices = Vec::new();
        slices.try_reserve_exact(self.duration)?;

        for k in 0..self.duration {
            slices.push(Slice::new(
                self.id,
                Rc::clone(&self.person_name),
                Rc::clone(&self.job_name),
                self.duration - k,
                self.arrival_time + k,
            ));
        }

        Ok(slices)
    }
}
