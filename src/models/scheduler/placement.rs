use std::collections::VecDeque;

use crate::models::{Job, Occupant, Slice, TimeStep, Timeline};
use crate::{log_checks, log_debug, SchedulingError};

/// Where a slice ended up and which rule put it there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Appended(TimeStep),     // Target was just past the end of the timeline
    FilledIdle(TimeStep),   // Target was idle
    Preempted(TimeStep),    // Shorter than the presiding slice, took its place
    Deferred(TimeStep),     // Lost the target slot, placed further down
}

impl Placement {
    pub fn index(&self) -> TimeStep {
        match *self {
            Placement::Appended(index)
            | Placement::FilledIdle(index)
            | Placement::Preempted(index)
            | Placement::Deferred(index) => index,
        }
    }
}

/// Places every slice of `job` on the timeline, longest remaining first.
///
/// Whenever a slice is deferred past its target to index `I`, every slice
/// still waiting is re-anchored to `I + k`, where `k` is its position within
/// the job (0 for the first slice). A deferred later slice therefore leaves
/// a gap before the rest of its job.
pub fn place_job(timeline: &mut Timeline, job: &Job, verbosity: u8) -> Result<Vec<Placement>, SchedulingError> {
    let mut pending: VecDeque<Slice> = job.split()?.into();
    let mut placements = Vec::new();
    placements.try_reserve_exact(pending.len())?;

    while let Some(slice) = pending.pop_front() {
        let remaining = slice.remaining();
        let placement = place_slice(timeline, slice, verbosity)?;
        log_checks!(
            verbosity,
            "  {} (remaining {}) -> {:?}",
            job.job_name(),
            remaining,
            placement
        );

        if let Placement::Deferred(index) = placement {
            for next in pending.iter_mut() {
                let hint = index + position_in_job(job, next);
                next.set_hint(hint);
            }
            if let Some(next) = pending.front() {
                log_debug!(
                    verbosity,
                    "  re-anchored {} pending slices of {} at {}",
                    pending.len(),
                    job.job_name(),
                    next.hint()
                );
            }
        }
        placements.push(placement);
    }

    Ok(placements)
}

/// Position of `slice` within `job`, 0 for the slice carrying the full
/// duration.
fn position_in_job(job: &Job, slice: &Slice) -> TimeStep {
    job.duration() - slice.remaining()
}

/// Places a single slice at its hint, or as close after it as the
/// shortest-remaining-first order allows.
///
/// Ties go to the slice already on the timeline.
pub fn place_slice(timeline: &mut Timeline, slice: Slice, verbosity: u8) -> Result<Placement, SchedulingError> {
    let target = slice.hint();
    if target > timeline.len() {
        log_debug!(verbosity, "  growing timeline from {} to {}", timeline.len(), target);
    }
    timeline.ensure_length(target)?;

    match timeline.occupant(target) {
        Occupant::Vacant => Ok(Placement::Appended(timeline.push(slice)?)),
        Occupant::Idle => fill(timeline, target, slice).map(Placement::FilledIdle),
        Occupant::Busy(presiding) if slice.remaining() < presiding => {
            Ok(Placement::Preempted(timeline.insert_before(target, slice)?))
        }
        Occupant::Busy(_) => defer(timeline, target + 1, slice).map(Placement::Deferred),
    }
}

fn fill(timeline: &mut Timeline, index: TimeStep, slice: Slice) -> Result<TimeStep, SchedulingError> {
    timeline.fill_idle(index, slice).map_err(|slice| {
        SchedulingError::Invariant(format!(
            "slot {} was reported idle but refused a slice of '{}'",
            index,
            slice.job_name()
        ))
    })
}

/// Scans forward from `from` for the first slot the slice may take: the end
/// of the timeline, an idle slot, or a slice with strictly more remaining.
fn defer(timeline: &mut Timeline, from: TimeStep, slice: Slice) -> Result<TimeStep, SchedulingError> {
    let key = slice.key();
    let job_name = slice.job_name().to_string();
    let mut cursor = from;

    let index = loop {
        match timeline.occupant(cursor) {
            Occupant::Vacant => break timeline.push(slice)?,
            Occupant::Idle => break fill(timeline, cursor, slice)?,
            Occupant::Busy(other) if other > slice.remaining() => {
                break timeline.insert_before(cursor, slice)?;
            }
            Occupant::Busy(_) => cursor += 1,
        }
    };

    if !timeline.holds(index, key) {
        return Err(SchedulingError::Invariant(format!(
            "slice of '{}' is not at index {} after placement",
            job_name, index
        )));
    }
    Ok(index)
}
