pub mod config;
pub mod core;
pub mod input;
pub mod logging;
pub mod models;
pub mod utils;

pub use crate::core::simulation;
pub use config::Config;
pub use input::{open_input, read_jobs};
pub use models::scheduler;
pub use models::{Job, JobSet, Schedule, Slice, Slot, TimeStep, Timeline, ID};
pub use utils::{constants, write_report, ExitStatus, InputFault, SchedulingError};
