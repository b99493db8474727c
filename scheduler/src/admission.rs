use tracing::trace;

use crate::process::Pcb;
use crate::queue::ReadyQueue;
use crate::ProcessState;

/// Moves arrived processes into the ready queue.
///
/// Processes are admitted by arrival time, ties broken by input order.
/// Once admitted a process never becomes pending again, so a cursor over
/// the arrival order replaces a full scan of the table.
#[derive(Debug)]
pub(crate) struct Admission {
    order: Vec<usize>,
    cursor: usize,
}

impl Admission {
    pub(crate) fn new(table: &[Pcb]) -> Self {
        let mut order: Vec<usize> = (0..table.len()).collect();
        // stable, keeps input order among equal arrivals
        order.sort_by_key(|&index| table[index].arrival_time);
        Admission { order, cursor: 0 }
    }

    pub(crate) fn admit(&mut self, now: u64, table: &mut [Pcb], queue: &mut ReadyQueue) -> usize {
        let mut admitted = 0;
        while let Some(&index) = self.order.get(self.cursor) {
            if table[index].arrival_time > now {
                break;
            }
            self.cursor += 1;
            if table[index].state != ProcessState::Pending {
                continue;
            }
            if queue.push_back(table, index).is_ok() {
                trace!(pid = %table[index].pid, now, "admitted");
                admitted += 1;
            }
        }
        admitted
    }

    /// Arrival time of the earliest process that has not been admitted.
    pub(crate) fn next_arrival(&self, table: &[Pcb]) -> Option<u64> {
        self.order
            .get(self.cursor)
            .map(|&index| table[index].arrival_time)
    }
}
