//! A processor simulation library
//!
//! This is used for driving a scheduler from the [`scheduler`] crate over a
//! simulated clock and collecting the resulting averages.

use std::fmt::{self, Display};
use std::num::NonZeroU64;

use tracing::{debug, info, warn};

use scheduler::{
    Metrics, Pid, ProcessSpec, ProcessState, Scheduler, SchedulingDecision, StopReason, Timings,
};

/// Running iteration log
#[derive(Debug, PartialEq)]
pub struct Log {
    /// The simulated time at which the decision was taken.
    pub time: u64,

    /// The action requested by the scheduler.
    pub decision: SchedulingDecision,

    /// How the dispatched slice ended, for [`SchedulingDecision::Run`].
    pub stop_reason: Option<StopReason>,

    /// The processes and their states right after the decision,
    /// in input order.
    pub processes: Vec<ProcessInfo>,
}

impl Log {
    fn new(time: u64, decision: SchedulingDecision, processes: Vec<ProcessInfo>) -> Log {
        Log {
            time,
            decision,
            stop_reason: None,
            processes,
        }
    }
}

impl Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "t={} {}", self.time, self.decision)?;
        writeln!(f, "PID\tSTATE\tARRIVAL\tBURST\tREMAIN\tRESP\tWAIT")?;
        for process in &self.processes {
            writeln!(f, "{}", process)?;
        }
        if let Some(reason) = self.stop_reason {
            writeln!(f, "-> {}", reason)?;
        }
        Ok(())
    }
}

/// Information about a process state.
#[derive(Debug, PartialEq)]
pub struct ProcessInfo {
    /// The PID of the process.
    pub pid: Pid,

    /// The process state.
    pub state: ProcessState,

    /// The process timings.
    pub timings: Timings,
}

struct OrDash(Option<u64>);

impl Display for OrDash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "-"),
        }
    }
}

impl Display for ProcessInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.pid,
            self.state,
            self.timings.arrival,
            self.timings.burst,
            self.timings.remaining,
            OrDash(self.timings.response),
            OrDash(self.timings.waiting)
        )
    }
}

/// The two averages produced by a simulation.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Report {
    pub average_waiting: f64,
    pub average_response: f64,
}

impl From<Metrics> for Report {
    fn from(metrics: Metrics) -> Self {
        Report {
            average_waiting: metrics.average_waiting(),
            average_response: metrics.average_response(),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average waiting time: {:.2}", self.average_waiting)?;
        writeln!(f, "Average response time: {:.2}", self.average_response)
    }
}

/// The outcome of a run: the decision trace and the averages.
#[derive(Debug)]
pub struct Simulation {
    /// Empty unless the run was traced.
    pub logs: Vec<Log>,
    pub report: Report,
}

/// The processor simulator.
pub struct Processor<S: Scheduler> {
    scheduler: S,
    clock: u64,
    trace: bool,
    logs: Vec<Log>,
}

impl<S: Scheduler> Processor<S> {
    /// Run a scheduler until it has nothing left to schedule.
    ///
    /// With `trace` set, every decision is logged together with a snapshot
    /// of all processes. Without it only the metrics are kept.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use processor::Processor;
    /// use scheduler::ProcessSpec;
    /// use std::num::NonZeroU64;
    ///
    /// let processes = vec![ProcessSpec::new(1, 0, 5), ProcessSpec::new(2, 1, 3)];
    /// let scheduler = scheduler::round_robin(NonZeroU64::new(2).unwrap(), processes);
    /// let simulation = Processor::run(scheduler, false);
    /// assert_eq!(simulation.report.average_response, 0.5);
    /// assert!(simulation.logs.is_empty());
    /// ```
    pub fn run(scheduler: S, trace: bool) -> Simulation {
        let mut processor = Processor {
            scheduler,
            clock: 0,
            trace,
            logs: vec![],
        };
        processor.scheduler.admit(0);
        let mut decisions: usize = 0;

        loop {
            let decision = processor.scheduler.next(processor.clock);
            decisions += 1;
            if processor.trace {
                let log = Log::new(processor.clock, decision, processor.snapshot());
                processor.logs.push(log);
            }

            match decision {
                SchedulingDecision::Run { pid, timeslice } => {
                    debug!(%pid, time = processor.clock, timeslice, "run");
                    processor.advance(timeslice);
                    let reason = processor.scheduler.stop(processor.clock);
                    if let Some(log) = processor.logs.last_mut() {
                        log.stop_reason = reason;
                    }
                }
                SchedulingDecision::Idle(amount) => {
                    debug!(time = processor.clock, amount = amount.get(), "idle");
                    // nothing runs, so there is no preempted process to order arrivals against
                    processor.clock += amount.get();
                    processor.scheduler.admit(processor.clock);
                }
                SchedulingDecision::Done => break,
            }
        }

        let report = Report::from(processor.scheduler.metrics());
        info!(time = processor.clock, decisions, "simulation finished");
        Simulation {
            logs: processor.logs,
            report,
        }
    }

    /// Moves the clock through a slice one unit at a time, admitting
    /// arrivals after each unit so they queue ahead of the preempted process.
    fn advance(&mut self, units: u64) {
        for _ in 0..units {
            self.clock += 1;
            self.scheduler.admit(self.clock);
        }
    }

    fn snapshot(&self) -> Vec<ProcessInfo> {
        self.scheduler
            .list()
            .into_iter()
            .map(|process| ProcessInfo {
                pid: process.pid(),
                state: process.state(),
                timings: process.timings(),
            })
            .collect()
    }
}

/// Simulate round robin scheduling of `processes` with the given quantum.
///
/// A quantum of `0` cannot make progress, no scheduling takes place and
/// both averages are `0`. See [`Processor::run`] for `trace`.
pub fn simulate(processes: Vec<ProcessSpec>, quantum: u64, trace: bool) -> Simulation {
    let Some(quantum) = NonZeroU64::new(quantum) else {
        warn!(processes = processes.len(), "quantum is 0, nothing scheduled");
        return Simulation {
            logs: vec![],
            report: Report::default(),
        };
    };
    Processor::run(scheduler::round_robin(quantum, processes), trace)
}

/// Format the [`Processor`]'s logs to a [`String`].
///
/// * `logs` - the logs returned by the [`Processor`].
///
/// ## Example
///
/// ```rust
/// use processor::{format_logs, simulate};
/// use scheduler::ProcessSpec;
///
/// let simulation = simulate(vec![ProcessSpec::new(1, 0, 1)], 2, true);
///
/// println!("{}", format_logs(&simulation.logs));
/// ```
pub fn format_logs(logs: &[Log]) -> String {
    let mut s = String::new();
    for (iteration, log) in logs.iter().enumerate() {
        fmt::write(
            &mut s,
            format_args!("===== Iteration: {} =====\n{}\n", iteration + 1, log),
        )
        .unwrap();
    }
    s
}
