mod job;
pub mod jobset;
pub mod schedule;
pub mod scheduler;
pub mod slice;
pub mod timeline;

pub use job::Job;
pub use jobset::JobSet;
pub use schedule::Schedule;
pub use slice::{Slice, Slot};
pub use timeline::{Occupant, Timeline};

pub type TimeStep = usize;

pub type ID = u32;
