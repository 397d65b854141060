use std::ops::Index;

use crate::SchedulingError;

use super::{Slice, Slot, TimeStep, ID};

/// What the placement engine sees at a given index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    Vacant,             // Past the end of the timeline
    Idle,
    Busy(TimeStep),     // Remaining duration of the presiding slice
}

/// Ordered sequence of time slots, one per time unit, without gaps.
#[derive(Debug, Default, Clone)]
pub struct Timeline {
    slots: Vec<Slot>,
}

/// Implementing `Index` allows reading the slot at a given time unit.
impl Index<TimeStep> for Timeline {
    type Output = Slot;

    fn index(&self, index: TimeStep) -> &Self::Output {
        &self.slots[index]
    }
}

impl Timeline {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: TimeStep) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    pub fn occupant(&self, index: TimeStep) -> Occupant {
        match self.slots.get(index) {
            None => Occupant::Vacant,
            Some(Slot::Idle) => Occupant::Idle,
            Some(Slot::Busy(slice)) => Occupant::Busy(slice.remaining()),
        }
    }

    /// Appends idle slots until the timeline holds at least `length` slots.
    ///
    /// # Errors
    /// `Allocation` if the slot buffer cannot grow.
    pub fn ensure_length(&mut self, length: usize) -> Result<(), SchedulingError> {
        if length <= self.slots.len() {
            return Ok(());
        }
        self.slots.try_reserve(length - self.slots.len())?;
        self.slots.resize(length, Slot::Idle);
        Ok(())
    }

    /// Appends an idle slot at the end.
    pub fn push_idle(&mut self) -> Result<(), SchedulingError> {
        self.slots.try_reserve(1)?;
        self.slots.push(Slot::Idle);
        Ok(())
    }

    /// Appends `slice` at the end and returns its index.
    pub fn push(&mut self, mut slice: Slice) -> Result<TimeStep, SchedulingError> {
        self.slots.try_reserve(1)?;
        let index = self.slots.len();
        slice.place(index);
        self.slots.push(Slot::Busy(slice));
        Ok(index)
    }

    /// Puts `slice` in place of the idle slot at `index`.
    ///
    /// Returns the slice back if the slot is not idle.
    pub fn fill_idle(&mut self, index: TimeStep, mut slice: Slice) -> Result<TimeStep, Slice> {
        match self.slots.get_mut(index) {
            Some(slot) if slot.is_idle() => {
                slice.place(index);
                *slot = Slot::Busy(slice);
                Ok(index)
            }
            _ => Err(slice),
        }
    }

    /// Inserts `slice` at `index`, pushing the slot there and every later
    /// slot back by one time unit. Displaced slices have their recorded
    /// index bumped to match.
    pub fn insert_before(&mut self, index: TimeStep, mut slice: Slice) -> Result<TimeStep, SchedulingError> {
        if index > self.slots.len() {
            return Err(SchedulingError::Invariant(format!(
                "insertion at {} past the end of a timeline of length {}",
                index,
                self.slots.len()
            )));
        }
        self.slots.try_reserve(1)?;
        slice.place(index);
        self.slots.insert(index, Slot::Busy(slice));

        for slot in self.slots[index + 1..].iter_mut() {
            if let Slot::Busy(displaced) = slot {
                displaced.shift_later();
            }
        }
        Ok(index)
    }

    /// Index of the first slot holding a real job.
    pub fn first_busy(&self) -> Option<TimeStep> {
        self.slots.iter().position(|slot| !slot.is_idle())
    }

    /// Highest index whose slice has a job name starting with `job_name`.
    ///
    /// Only the name is compared, as a prefix: `Job1` also finds slices of
    /// `Job10`, and two people submitting the same job name share their
    /// final index. Idle slots never match.
    pub fn last_index_of(&self, job_name: &str) -> Option<TimeStep> {
        self.slots
            .iter()
            .rposition(|slot| slot.slice().is_some_and(|slice| slice.job_name().starts_with(job_name)))
    }

    /// First and last index currently held by slices of job `job_id`.
    pub fn span_of(&self, job_id: ID) -> Option<(TimeStep, TimeStep)> {
        let holds_job = |slot: &Slot| slot.slice().is_some_and(|slice| slice.job_id() == job_id);
        let first = self.slots.iter().position(holds_job)?;
        let last = self.slots.iter().rposition(holds_job)?;
        Some((first, last))
    }

    /// Whether the slot at `index` holds the slice identified by `key`.
    pub fn holds(&self, index: TimeStep, key: (ID, TimeStep)) -> bool {
        self.slots
            .get(index)
            .and_then(Slot::slice)
            .is_some_and(|slice| slice.key() == key)
    }
}
