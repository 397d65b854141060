use std::io::{self, Write};

use crate::Schedule;

/// Writes the schedule followed by the per-person summary.
///
/// ```text
/// Time	Job
/// 0		Job1
/// ...
///
/// Summary
/// Alice 	3
/// ```
pub fn write_report<W: Write>(out: &mut W, schedule: &Schedule, full_timeline: bool) -> io::Result<()> {
    writeln!(out, "Time\tJob")?;
    for (index, slot) in schedule.visible_slots(full_timeline) {
        writeln!(out, "{}\t\t{}", index, slot.label())?;
    }

    writeln!(out)?;
    writeln!(out, "Summary")?;
    for completion in schedule.completions() {
        writeln!(out, "{} \t{}", completion.person_name(), completion.final_index())?;
    }
    out.flush()
}
