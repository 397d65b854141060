use std::rc::Rc;

use crate::constants::IDLE_JOB_NAME;

use super::{TimeStep, ID};

/// One time unit of a job.
///
/// `hint` is where the placement engine will try to put the slice next;
/// `placed_at` is the index it actually occupies once it is on the timeline,
/// kept in sync whenever an earlier insertion pushes it back.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    job_id: ID,
    person_name: Rc<str>,
    job_name: Rc<str>,
    remaining: TimeStep,            // Remaining duration, used as priority (lower wins)
    hint: TimeStep,                 // Target index while pending
    placed_at: Option<TimeStep>,    // Actual index once placed
}

impl Slice {
    pub fn new(job_id: ID, person_name: Rc<str>, job_name: Rc<str>, remaining: TimeStep, hint: TimeStep) -> Self {
        Self {
            job_id,
            person_name,
            job_name,
            remaining,
            hint,
            placed_at: None,
        }
    }

    pub fn job_id(&self) -> ID {
        self.job_id
    }

    pub fn person_name(&self) -> &str {
        &self.person_name
    }

    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    pub fn remaining(&self) -> TimeStep {
        self.remaining
    }

    pub fn hint(&self) -> TimeStep {
        self.hint
    }

    pub fn placed_at(&self) -> Option<TimeStep> {
        self.placed_at
    }

    /// Identifies a slice among all slices of the batch.
    pub fn key(&self) -> (ID, TimeStep) {
        (self.job_id, self.remaining)
    }

    pub fn set_hint(&mut self, hint: TimeStep) {
        self.hint = hint;
    }

    pub(crate) fn place(&mut self, index: TimeStep) {
        self.placed_at = Some(index);
    }

    pub(crate) fn shift_later(&mut self) {
        if let Some(index) = self.placed_at.as_mut() {
            *index += 1;
        }
    }
}

/// Content of one time unit on the timeline.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Idle,
    Busy(Slice),
}

impl Slot {
    pub fn is_idle(&self) -> bool {
        matches!(self, Slot::Idle)
    }

    pub fn slice(&self) -> Option<&Slice> {
        match self {
            Slot::Idle => None,
            Slot::Busy(slice) => Some(slice),
        }
    }

    /// Name printed for this slot in the schedule.
    pub fn label(&self) -> &str {
        match self {
            Slot::Idle => IDLE_JOB_NAME,
            Slot::Busy(slice) => slice.job_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(remaining: TimeStep) -> Slice {
        Slice::new(1, Rc::from("Alice"), Rc::from("Job1"), remaining, 0)
    }

    #[test]
    fn test_shift_only_moves_placed_slices() {
        let mut pending = slice(2);
        pending.shift_later();
        assert_eq!(pending.placed_at(), None);

        let mut placed = slice(2);
        placed.place(4);
        placed.shift_later();
        assert_eq!(placed.placed_at(), Some(5));
    }

    #[test]
    fn test_idle_is_a_tag_not_a_name() {
        let lookalike = Slot::Busy(Slice::new(2, Rc::from("Bob"), Rc::from("IDLE"), 1, 0));
        assert!(!lookalike.is_idle());
        assert_eq!(lookalike.label(), "IDLE");
        assert!(Slot::Idle.is_idle());
        assert_eq!(Slot::Idle.label(), IDLE_JOB_NAME);
    }
}
