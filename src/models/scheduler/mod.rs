pub mod completion;
pub mod placement;
pub mod scheduler;

pub use completion::{cultivate, final_index, Completion};
pub use placement::{place_job, place_slice, Placement};
pub use scheduler::Scheduler;
