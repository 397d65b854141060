use crate::models::{Job, JobSet, TimeStep, Timeline};
use crate::SchedulingError;

/// Summary line for one person: their latest-finishing job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    person_name: String,
    job_id: u32,
    job_name: String,
    final_index: TimeStep,
}

impl Completion {
    pub fn person_name(&self) -> &str {
        &self.person_name
    }

    pub fn job_id(&self) -> u32 {
        self.job_id
    }

    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    pub fn final_index(&self) -> TimeStep {
        self.final_index
    }
}

/// Last timeline index occupied by a slice named like `job`.
pub fn final_index(timeline: &Timeline, job: &Job) -> Result<TimeStep, SchedulingError> {
    timeline.last_index_of(job.job_name()).ok_or_else(|| {
        SchedulingError::Invariant(format!(
            "job '{}' of {} has no slot on the timeline",
            job.job_name(),
            job.person_name()
        ))
    })
}

/// Reduces the submitted jobs to one entry per person, keeping the job whose
/// final index is greatest. Ties keep the first-seen job; people are listed
/// in order of their first submission.
///
/// A job joins the first entry whose person name starts with the job's
/// person name, so `Al` is folded into an earlier `Alice`.
pub fn cultivate(job_set: &JobSet, timeline: &Timeline) -> Result<Vec<Completion>, SchedulingError> {
    let mut completions: Vec<Completion> = Vec::new();

    for job in job_set.iter() {
        let index = final_index(timeline, job)?;
        let existing = completions
            .iter()
            .position(|kept| kept.person_name.starts_with(job.person_name()));

        match existing {
            Some(position) => {
                let kept = &mut completions[position];
                if index > kept.final_index {
                    kept.job_id = job.id();
                    kept.job_name = job.job_name().to_string();
                    kept.final_index = index;
                }
            }
            None => {
                completions.push(Completion {
                    person_name: job.person_name().to_string(),
                    job_id: job.id(),
                    job_name: job.job_name().to_string(),
                    final_index: index,
                });
            }
        }
    }

    Ok(completions)
}
