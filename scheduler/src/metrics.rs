/// Sums of waiting and response time over completed processes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Metrics {
    pub sum_waiting: u64,
    pub sum_response: u64,
    pub completed: usize,
}

impl Metrics {
    pub fn new() -> Self {
        Metrics::default()
    }

    /// Accounts for one completed process. Must be called exactly once per process.
    pub fn record(&mut self, waiting: u64, response: u64) {
        self.sum_waiting += waiting;
        self.sum_response += response;
        self.completed += 1;
    }

    /// Average waiting time, `0.0` when nothing completed.
    pub fn average_waiting(&self) -> f64 {
        self.average(self.sum_waiting)
    }

    /// Average response time, `0.0` when nothing completed.
    pub fn average_response(&self) -> f64 {
        self.average(self.sum_response)
    }

    fn average(&self, sum: u64) -> f64 {
        if self.completed == 0 {
            return 0.0;
        }
        sum as f64 / self.completed as f64
    }
}
