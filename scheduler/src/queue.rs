use std::collections::VecDeque;
use std::fmt::{self, Display};

use crate::process::Pcb;
use crate::ProcessState;

/// Errors raised by the ready queue primitives.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// `pop_front` was called on an empty queue.
    EmptyQueue,

    /// `push_back` was called for a process that is already queued.
    AlreadyQueued,
}

impl Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::EmptyQueue => write!(f, "the ready queue is empty"),
            QueueError::AlreadyQueued => write!(f, "the process is already queued"),
        }
    }
}

impl std::error::Error for QueueError {}

/// Strict FIFO of admitted, unfinished processes.
///
/// The queue holds positions into the process table, the table owns the
/// processes. The `Ready` state of a PCB mirrors its membership.
#[derive(Debug, Default)]
pub(crate) struct ReadyQueue {
    slots: VecDeque<usize>,
}

impl ReadyQueue {
    pub(crate) fn new() -> Self {
        ReadyQueue {
            slots: VecDeque::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn push_back(&mut self, table: &mut [Pcb], index: usize) -> Result<(), QueueError> {
        let pcb = &mut table[index];
        if pcb.queued() {
            return Err(QueueError::AlreadyQueued);
        }
        pcb.state = ProcessState::Ready;
        self.slots.push_back(index);
        Ok(())
    }

    /// Removes the head, which leaves the queue to run.
    pub(crate) fn pop_front(&mut self, table: &mut [Pcb]) -> Result<usize, QueueError> {
        let index = self.slots.pop_front().ok_or(QueueError::EmptyQueue)?;
        table[index].state = ProcessState::Running;
        Ok(index)
    }
}
