use crate::models::scheduler::Scheduler;
use crate::{log_changes, JobSet, Schedule, SchedulingError};

/// Schedules every job of `job_set` in submission order and resolves the
/// per-person summary.
///
/// Jobs are placed one after the other; the order matters because a job
/// never moves slots that an earlier job won on a tie.
pub fn simulation(job_set: JobSet, verbosity: u8) -> Result<Schedule, SchedulingError> {
    let mut scheduler = Scheduler::new(verbosity);

    for job in job_set.get_jobs().iter().cloned() {
        scheduler.add_job(job)?;
    }

    let schedule = scheduler.finish()?;
    log_changes!(
        verbosity,
        "scheduled {} jobs over {} time units",
        schedule.job_set().len(),
        schedule.timeline().len()
    );
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Job, Slot};

    #[test]
    fn test_two_jobs_with_preemption() {
        let job_set = JobSet::new(vec![
            Job::new(1, "Alice", "Job1", 0, 3),
            Job::new(2, "Bob", "Job2", 1, 1),
        ]);
        let schedule = simulation(job_set, 0).unwrap();

        let labels: Vec<&str> = schedule.timeline().iter().map(Slot::label).collect();
        assert_eq!(labels, vec!["Job1", "Job2", "Job1", "Job1", "IDLE"]);

        let summary: Vec<(&str, usize)> = schedule
            .completions()
            .iter()
            .map(|c| (c.person_name(), c.final_index()))
            .collect();
        assert_eq!(summary, vec![("Alice", 3), ("Bob", 1)]);
    }

    #[test]
    fn test_timeline_covers_horizon_without_gaps() {
        let job_set = JobSet::new(vec![
            Job::new(1, "Alice", "A", 4, 3),
            Job::new(2, "Bob", "B", 0, 2),
            Job::new(3, "Carol", "C", 5, 1),
            Job::new(4, "Dave", "D", 1, 4),
            Job::new(5, "Eve", "E", 12, 2),
        ]);
        let horizon = job_set.horizon().unwrap();
        let total: usize = job_set.iter().map(Job::duration).sum();
        let schedule = simulation(job_set, 0).unwrap();
        let timeline = schedule.timeline();

        assert!(timeline.len() >= horizon);
        let busy = timeline.iter().filter(|slot| !slot.is_idle()).count();
        assert_eq!(busy, total);
        for (index, slot) in timeline.iter().enumerate() {
            if let Some(slice) = slot.slice() {
                assert_eq!(slice.placed_at(), Some(index));
            }
        }
        assert!(timeline[timeline.len() - 1].is_idle());
    }

    #[test]
    fn test_slices_of_a_job_run_in_order() {
        let job_set = JobSet::new(vec![
            Job::new(1, "Alice", "A", 0, 4),
            Job::new(2, "Bob", "B", 0, 4),
            Job::new(3, "Carol", "C", 2, 1),
        ]);
        let schedule = simulation(job_set, 0).unwrap();

        for name in ["A", "B", "C"] {
            let remaining: Vec<usize> = schedule
                .timeline()
                .iter()
                .filter_map(Slot::slice)
                .filter(|slice| slice.job_name() == name)
                .map(|slice| slice.remaining())
                .collect();
            let mut sorted = remaining.clone();
            sorted.sort_by(|a, b| b.cmp(a));
            assert_eq!(remaining, sorted, "slices of {} out of order", name);
        }
    }
}
