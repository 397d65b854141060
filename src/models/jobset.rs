use super::{Job, TimeStep, ID};

/// Jobs in the order they were submitted, one entry per input line.
#[derive(Debug, Clone, Default)]
pub struct JobSet {
    jobs: Vec<Job>,
}

impl JobSet {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    pub fn new_empty() -> Self {
        Self { jobs: Vec::new() }
    }

    pub fn add_job(&mut self, job: Job) {
        self.jobs.push(job);
    }

    pub fn get_jobs(&self) -> &Vec<Job> {
        &self.jobs
    }

    pub fn get_job_by_id(&self, id: ID) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id() == id)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Latest `arrival_time + duration` over all jobs: a lower bound on the
    /// length of any timeline scheduling this set.
    pub fn horizon(&self) -> Option<TimeStep> {
        self.jobs
            .iter()
            .map(Job::nominal_end)
            .try_fold(0, |acc, end| end.map(|end| acc.max(end)))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizon() {
        let jobs = JobSet::new(vec![
            Job::new(1, "Alice", "Job1", 0, 3),
            Job::new(2, "Bob", "Job2", 5, 1),
            Job::new(3, "Carol", "Job3", 1, 2),
        ]);
        assert_eq!(jobs.horizon(), Some(6));
        assert_eq!(JobSet::new_empty().horizon(), Some(0));
    }

    #[test]
    fn test_horizon_overflow() {
        let jobs = JobSet::new(vec![Job::new(1, "Alice", "Job1", TimeStep::MAX, 1)]);
        assert_eq!(jobs.horizon(), None);
    }

    #[test]
    fn test_get_job_by_id() {
        let mut jobs = JobSet::new_empty();
        jobs.add_job(Job::new(1, "Alice", "Job1", 0, 3));
        jobs.add_job(Job::new(2, "Bob", "Job2", 1, 1));

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs.get_job_by_id(2).map(Job::job_name), Some("Job2"));
        assert!(jobs.get_job_by_id(3).is_none());
    }
}
