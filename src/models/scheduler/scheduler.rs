use crate::models::{Job, JobSet, Schedule, Timeline};
use crate::{log_changes, SchedulingError};

use super::completion::cultivate;
use super::placement::place_job;

/// Batch scheduler: accepts jobs in submission order and builds the
/// timeline one whole job at a time.
#[derive(Debug, Default)]
pub struct Scheduler {
    job_set: JobSet,        // Jobs as submitted, for the summary
    timeline: Timeline,     // Slices placed so far
    verbosity: u8,
}

impl Scheduler {
    pub fn new(verbosity: u8) -> Self {
        Self {
            job_set: JobSet::new_empty(),
            timeline: Timeline::new(),
            verbosity,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn job_set(&self) -> &JobSet {
        &self.job_set
    }

    /// Places every slice of `job` and records the job for the summary.
    pub fn add_job(&mut self, job: Job) -> Result<(), SchedulingError> {
        place_job(&mut self.timeline, &job, self.verbosity)?;
        if let Some((first, last)) = self.timeline.span_of(job.id()) {
            log_changes!(
                self.verbosity,
                "{} ({}): arrival {}, duration {}, now spans {}..={}",
                job.job_name(),
                job.person_name(),
                job.arrival_time(),
                job.duration(),
                first,
                last
            );
        }
        self.job_set.add_job(job);
        Ok(())
    }

    /// Closes the timeline with one idle slot and resolves the summary.
    pub fn finish(mut self) -> Result<Schedule, SchedulingError> {
        self.timeline.push_idle()?;
        let completions = cultivate(&self.job_set, &self.timeline)?;
        Ok(Schedule::new(self.job_set, self.timeline, completions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Slot;

    #[test]
    fn test_finish_appends_trailing_idle() {
        let mut scheduler = Scheduler::new(0);
        scheduler.add_job(Job::new(1, "Alice", "Job1", 0, 2)).unwrap();
        assert_eq!(scheduler.timeline().len(), 2);

        let schedule = scheduler.finish().unwrap();
        assert_eq!(schedule.timeline().len(), 3);
        assert!(schedule.timeline()[2].is_idle());
    }

    #[test]
    fn test_trailing_idle_after_idle_gap() {
        let mut scheduler = Scheduler::new(0);
        scheduler.add_job(Job::new(1, "Alice", "Job1", 2, 1)).unwrap();

        let schedule = scheduler.finish().unwrap();
        let labels: Vec<&str> = schedule.timeline().iter().map(Slot::label).collect();
        assert_eq!(labels, vec!["IDLE", "IDLE", "Job1", "IDLE"]);
        assert_eq!(schedule.visible_slots(false).map(|(i, _)| i).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(schedule.visible_slots(true).count(), 4);
    }

    #[test]
    fn test_empty_batch() {
        let schedule = Scheduler::new(0).finish().unwrap();

        assert_eq!(schedule.timeline().len(), 1);
        assert!(schedule.completions().is_empty());
        assert_eq!(schedule.visible_slots(false).count(), 0);
    }

    #[test]
    fn test_span_follows_later_displacement() {
        let mut scheduler = Scheduler::new(0);
        scheduler.add_job(Job::new(1, "Alice", "Job1", 0, 3)).unwrap();
        assert_eq!(scheduler.timeline().span_of(1), Some((0, 2)));

        scheduler.add_job(Job::new(2, "Bob", "Job2", 1, 1)).unwrap();
        assert_eq!(scheduler.timeline().span_of(1), Some((0, 3)));
        assert_eq!(scheduler.timeline().span_of(2), Some((1, 1)));
    }

    #[test]
    fn test_job_set_keeps_submitted_arrival() {
        let mut scheduler = Scheduler::new(0);
        scheduler.add_job(Job::new(1, "Alice", "Job1", 0, 3)).unwrap();
        scheduler.add_job(Job::new(2, "Bob", "Job2", 0, 3)).unwrap();

        // Job2 was deferred to 3 but its submitted arrival stays 0
        assert_eq!(scheduler.timeline()[3].label(), "Job2");
        assert_eq!(scheduler.job_set().get_job_by_id(2).map(Job::arrival_time), Some(0));
    }
}
