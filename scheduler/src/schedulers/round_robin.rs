use std::num::NonZeroU64;

use tracing::debug;

use crate::admission::Admission;
use crate::process::Pcb;
use crate::queue::ReadyQueue;
use crate::SchedulingDecision::{Done, Idle, Run};
use crate::{Metrics, Process, ProcessSpec, Scheduler, SchedulingDecision, StopReason};

/// Preemptive round robin over a batch of processes known in advance.
pub struct RoundRobin {
    table: Vec<Pcb>,
    ready_queue: ReadyQueue,
    admission: Admission,
    /// The dispatched process and the slice it was given.
    current_process: Option<(usize, u64)>,
    quantum: NonZeroU64,
    metrics: Metrics,
}

impl RoundRobin {
    pub fn new(quantum: NonZeroU64, processes: Vec<ProcessSpec>) -> Self {
        let table: Vec<Pcb> = processes.into_iter().map(Pcb::new).collect();
        let admission = Admission::new(&table);
        RoundRobin {
            table,
            ready_queue: ReadyQueue::new(),
            admission,
            current_process: None,
            quantum,
            metrics: Metrics::new(),
        }
    }
}

impl Scheduler for RoundRobin {
    fn next(&mut self, now: u64) -> SchedulingDecision {
        if let Some((index, timeslice)) = self.current_process {
            return Run {
                pid: self.table[index].pid,
                timeslice,
            };
        }

        let Ok(index) = self.ready_queue.pop_front(&mut self.table) else {
            return match self.admission.next_arrival(&self.table) {
                Some(arrival) => match NonZeroU64::new(arrival.saturating_sub(now)) {
                    Some(gap) => Idle(gap),
                    None => {
                        self.admit(now);
                        self.next(now)
                    }
                },
                None => Done,
            };
        };

        let queued = self.ready_queue.len();
        let process = &mut self.table[index];
        process.dispatch(now);
        let timeslice = process.remaining_time.min(self.quantum.get());
        self.current_process = Some((index, timeslice));
        debug!(pid = %process.pid, now, timeslice, queued, "dispatch");

        Run {
            pid: process.pid,
            timeslice,
        }
    }

    fn admit(&mut self, now: u64) -> usize {
        self.admission
            .admit(now, &mut self.table, &mut self.ready_queue)
    }

    fn stop(&mut self, now: u64) -> Option<StopReason> {
        let (index, timeslice) = self.current_process.take()?;
        let process = &mut self.table[index];

        if process.charge(timeslice, now) {
            let waiting = process.waiting_time.unwrap_or_default();
            let response = process.response_time.unwrap_or_default();
            debug!(pid = %process.pid, now, waiting, response, "exit");
            self.metrics.record(waiting, response);
            return Some(StopReason::Exit);
        }

        // arrivals of this slice are already queued, the process lands behind them
        self.ready_queue
            .push_back(&mut self.table, index)
            .expect("a running process is never queued");
        Some(StopReason::Expired)
    }

    fn list(&self) -> Vec<&dyn Process> {
        self.table
            .iter()
            .map(|process| process as &dyn Process)
            .collect()
    }

    fn metrics(&self) -> Metrics {
        self.metrics
    }
}
