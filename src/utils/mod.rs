pub mod constants;
pub mod errors;
pub mod report;

pub use constants::ExitStatus;
pub use errors::{InputFault, SchedulingError};
pub use report::write_report;
