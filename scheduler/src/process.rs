use crate::{Pid, Process, ProcessState, Timings};

/// A process as described by the input: identity, arrival and CPU demand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ProcessSpec {
    pub pid: Pid,
    pub arrival_time: u64,
    pub burst_time: u64,
}

impl ProcessSpec {
    pub fn new(pid: u32, arrival_time: u64, burst_time: u64) -> Self {
        ProcessSpec {
            pid: Pid::new(pid),
            arrival_time,
            burst_time,
        }
    }
}

/// Process Control Block.
///
/// `state == Ready` means the process occupies a slot in the ready queue.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Pcb {
    pub(crate) pid: Pid,
    pub(crate) arrival_time: u64,
    pub(crate) burst_time: u64,
    pub(crate) remaining_time: u64,
    pub(crate) state: ProcessState,
    pub(crate) response_time: Option<u64>,
    pub(crate) completion_time: Option<u64>,
    pub(crate) waiting_time: Option<u64>,
}

impl Pcb {
    pub(crate) fn new(spec: ProcessSpec) -> Self {
        Pcb {
            pid: spec.pid,
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            remaining_time: spec.burst_time,
            state: ProcessState::Pending,
            response_time: None,
            completion_time: None,
            waiting_time: None,
        }
    }

    pub(crate) fn queued(&self) -> bool {
        self.state == ProcessState::Ready
    }

    pub(crate) fn started(&self) -> bool {
        self.response_time.is_some()
    }

    /// Marks the first dispatch. Later calls leave the response time alone.
    pub(crate) fn dispatch(&mut self, now: u64) {
        self.state = ProcessState::Running;
        if !self.started() {
            self.response_time = Some(now - self.arrival_time);
        }
    }

    /// Charges `slice` units of CPU to the process.
    ///
    /// Returns `true` if this used up the burst, in which case the
    /// completion and waiting times are final.
    pub(crate) fn charge(&mut self, slice: u64, now: u64) -> bool {
        self.remaining_time -= slice;
        if self.remaining_time > 0 {
            return false;
        }
        self.state = ProcessState::Done;
        self.completion_time = Some(now);
        self.waiting_time = Some(now - self.arrival_time - self.burst_time);
        true
    }
}

impl Process for Pcb {
    fn pid(&self) -> Pid {
        self.pid
    }

    fn state(&self) -> ProcessState {
        self.state
    }

    fn timings(&self) -> Timings {
        Timings {
            arrival: self.arrival_time,
            burst: self.burst_time,
            remaining: self.remaining_time,
            response: self.response_time,
            completion: self.completion_time,
            waiting: self.waiting_time,
        }
    }
}
