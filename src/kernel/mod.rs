// Interrupt plumbing for the polling loops
// Single core in use, no preemption. ISRs only raise wake flags; the
// main loop turns them into scheduler jobs and idles in between.

pub mod tick;
pub mod wake;

pub use iraira_core::sched::{Job, Scheduler};
