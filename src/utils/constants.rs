/// Name printed for a time slot that has no job assigned.
pub const IDLE_JOB_NAME: &str = "IDLE";

/// Longest data line accepted, in bytes, newline excluded.
///
/// The input format was designed around a 255-byte line buffer; anything
/// that does not fit is treated as malformed rather than truncated.
pub const MAX_LINE_LENGTH: usize = 253;

/// Number of fields on every data line: person, job, arrival, duration.
pub const NUM_FIELDS: usize = 4;

/// Process exit status reported by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success = 0,
    InputError = 1,
    InternalError = 2,
}
