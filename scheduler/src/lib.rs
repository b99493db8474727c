//! A round robin scheduler library.
//!
//! This library provides the process records, the ready queue, the arrival
//! admission and the metrics needed to simulate preemptive round robin
//! scheduling over a batch of processes known in advance. The clock is
//! driven from the outside, see the [`Scheduler`] trait.
//!

use std::num::NonZeroU64;

mod admission;
mod metrics;
mod process;
mod queue;
mod scheduler;

pub use crate::metrics::Metrics;
pub use crate::process::ProcessSpec;
pub use crate::queue::QueueError;
pub use crate::scheduler::{
    Pid, Process, ProcessState, Scheduler, SchedulingDecision, StopReason, Timings,
};

mod schedulers;

pub use schedulers::RoundRobin;

/// Returns a structure that implements the `Scheduler` trait with a round robin scheduler policy
///
/// * `quantum` - the time quanta that a process can run before it is preempted
/// * `processes` - the batch to schedule, in input order. Processes arriving
///                 at the same time are admitted in this order.
pub fn round_robin(quantum: NonZeroU64, processes: Vec<ProcessSpec>) -> impl Scheduler {
    RoundRobin::new(quantum, processes)
}
