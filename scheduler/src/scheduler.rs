use std::fmt::{self, Display};
use std::num::NonZeroU64;

use crate::Metrics;

/// The PID of a process
///
/// PIDs are taken verbatim from the input and are only used for reporting.
#[derive(PartialEq, Eq, Copy, Clone, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Pid(u32);

impl Pid {
    pub fn new(pid: u32) -> Pid {
        Pid(pid)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for Pid {
    fn from(pid: u32) -> Self {
        Pid::new(pid)
    }
}

impl PartialEq<u32> for Pid {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The action that the scheduler asks the processor to take.
///
/// This is returned by the [`Scheduler::next`] function.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SchedulingDecision {
    /// Run the process with PID `pid` for exactly `timeslice` time units.
    ///
    /// The timeslice is `0` only for a process with an empty burst.
    Run { pid: Pid, timeslice: u64 },

    /// The ready queue is empty but some processes have not arrived yet.
    ///
    /// The processor has to let the given amount of time pass.
    Idle(NonZeroU64),

    /// There are no more processes to schedule.
    Done,
}

impl Display for SchedulingDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulingDecision::Run { pid, timeslice } => {
                write!(f, "Run {} for {} units", pid, timeslice)
            }
            SchedulingDecision::Idle(amount) => {
                write!(f, "Idle for {} units", amount)
            }
            SchedulingDecision::Done => {
                write!(f, "Done, no more processes")
            }
        }
    }
}

/// The outcome of a dispatched slice, as reported by [`Scheduler::stop`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The timeslice has expired and the process still has work left.
    /// It has been placed at the tail of the ready queue.
    Expired,

    /// The process has used its whole burst and was handed to the metrics.
    Exit,
}

impl Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Expired => write!(f, "Expired"),
            StopReason::Exit => write!(f, "Exit"),
        }
    }
}

/// The trait that any scheduler has to implement.
///
/// The scheduler owns the processes, the processor owns the clock. A
/// processor drives a scheduler like this:
///
/// 1. [`Scheduler::admit`] at time `0`,
/// 2. [`Scheduler::next`] to obtain a decision,
/// 3. for a [`SchedulingDecision::Run`], advance the clock one unit at a
///    time calling [`Scheduler::admit`] after every unit, then call
///    [`Scheduler::stop`],
/// 4. for a [`SchedulingDecision::Idle`], advance the clock the same way,
/// 5. repeat from 2 until [`SchedulingDecision::Done`].
pub trait Scheduler {
    /// Returns the action that the processor has to perform next.
    fn next(&mut self, now: u64) -> SchedulingDecision;

    /// Admits every process that has arrived by `now` into the ready queue.
    ///
    /// Returns the number of newly admitted processes.
    fn admit(&mut self, now: u64) -> usize;

    /// The scheduler is informed that the running process has used the
    /// timeslice it was given, `now` being the time at the end of the slice.
    ///
    /// Returns [`None`] if no process was running.
    fn stop(&mut self, now: u64) -> Option<StopReason>;

    /// Returns the list of processes, in input order.
    fn list(&self) -> Vec<&dyn Process>;

    /// Returns the metrics accumulated over the completed processes.
    fn metrics(&self) -> Metrics;
}

/// The state of a process.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProcessState {
    /// The process has not arrived yet.
    Pending,

    /// The process sits in the ready queue.
    Ready,

    /// The process is currently scheduled.
    Running,

    /// The process has used its whole burst.
    Done,
}

impl Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessState::Pending => write!(f, "PENDING"),
            ProcessState::Ready => write!(f, "READY"),
            ProcessState::Running => write!(f, "RUNNING"),
            ProcessState::Done => write!(f, "DONE"),
        }
    }
}

/// The trait that the Process Control Block (PCB) has to implement.
pub trait Process {
    /// Return the PID of the process.
    fn pid(&self) -> Pid;

    /// Return the state of the process.
    fn state(&self) -> ProcessState;

    /// Returns the process timings.
    fn timings(&self) -> Timings;
}

/// A snapshot of the time accounting of one process.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timings {
    pub arrival: u64,
    pub burst: u64,
    pub remaining: u64,
    /// Time between arrival and first dispatch, once dispatched.
    pub response: Option<u64>,
    /// Time at which the burst was used up.
    pub completion: Option<u64>,
    /// `completion - arrival - burst`, once completed.
    pub waiting: Option<u64>,
}
