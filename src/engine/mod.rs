pub mod scheduler;
pub mod scroll;
