use super::scheduler::Completion;
use super::{JobSet, Slot, TimeStep, Timeline};

/// Final result of a run: the timeline and the per-person summary.
#[derive(Debug, Clone)]
pub struct Schedule {
    job_set: JobSet,
    timeline: Timeline,
    completions: Vec<Completion>,
}

impl Schedule {
    pub fn new(job_set: JobSet, timeline: Timeline, completions: Vec<Completion>) -> Self {
        Self {
            job_set,
            timeline,
            completions,
        }
    }

    pub fn job_set(&self) -> &JobSet {
        &self.job_set
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn completions(&self) -> &[Completion] {
        &self.completions
    }

    /// Slots to print, with their indices.
    ///
    /// Leading idle slots are skipped unless `include_leading_idle` is set;
    /// with no busy slot at all nothing is left to print.
    pub fn visible_slots(&self, include_leading_idle: bool) -> impl Iterator<Item = (TimeStep, &Slot)> {
        let start = match self.timeline.first_busy() {
            Some(_) if include_leading_idle => 0,
            Some(first) => first,
            None => self.timeline.len(),
        };
        self.timeline.iter().enumerate().skip(start)
    }
}
