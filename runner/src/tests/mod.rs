use scheduler::{Pid, ProcessSpec, ProcessState, SchedulingDecision};

use std::env;
use std::fs;

use processor::format_logs;
use processor::{Log, Simulation};

mod arrivals;

static SCHEDULER: &str = "round-robin";

fn write_logs(folder: &str, name: &str, logs: &str) {
    fs::create_dir_all(format!("../outputs/{SCHEDULER}/{folder}")).unwrap();
    fs::write(format!("../outputs/{SCHEDULER}/{folder}/{name}.log"), logs).unwrap();
}

fn read_logs(folder: &str, name: &str) -> String {
    fs::read_to_string(format!("../outputs/{SCHEDULER}/{folder}/{name}.log")).unwrap()
}

/// Compares the trace against the stored one, or stores it with `WRITE_OUTPUT` set.
fn run(folder: &str, name: &str, logs: &[Log]) {
    let output = format_logs(logs);

    if env::var("WRITE_OUTPUT").is_ok() {
        write_logs(folder, name, &output);
    } else {
        let reference = read_logs(folder, name);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
}

fn processes(triples: &[(u32, u64, u64)]) -> Vec<ProcessSpec> {
    triples
        .iter()
        .map(|&(pid, arrival, burst)| ProcessSpec::new(pid, arrival, burst))
        .collect()
}

/// The dispatches of a run as `(time, pid, timeslice)`.
fn dispatches(simulation: &Simulation) -> Vec<(u64, u32, u64)> {
    simulation
        .logs
        .iter()
        .filter_map(|log| match log.decision {
            SchedulingDecision::Run { pid, timeslice } => Some((log.time, pid.get(), timeslice)),
            _ => None,
        })
        .collect()
}

/// Checks the accounting identities every finished run has to satisfy.
///
/// PIDs are expected to be unique.
fn check(simulation: &Simulation, processes: &[ProcessSpec], quantum: u64) {
    let last = simulation.logs.last().unwrap();
    assert_eq!(last.decision, SchedulingDecision::Done);
    assert_eq!(last.processes.len(), processes.len());

    let mut executed = vec![0; processes.len()];
    let mut dispatched = vec![false; processes.len()];
    let mut previous: Option<Pid> = None;

    for log in &simulation.logs {
        let SchedulingDecision::Run { pid, timeslice } = log.decision else {
            previous = None;
            continue;
        };
        assert!(timeslice <= quantum);
        assert!(log.stop_reason.is_some());

        let index = processes.iter().position(|p| p.pid == pid).unwrap();
        let final_timings = last.processes[index].timings;
        if !dispatched[index] {
            dispatched[index] = true;
            assert_eq!(
                final_timings.response,
                Some(log.time - processes[index].arrival_time)
            );
        }

        // the same process twice in a row only if nobody else was waiting
        if previous == Some(pid) {
            assert!(log
                .processes
                .iter()
                .all(|process| process.state != ProcessState::Ready));
        }
        previous = Some(pid);
        executed[index] += timeslice;
    }

    let mut sum_waiting = 0;
    let mut sum_response = 0;
    for (index, spec) in processes.iter().enumerate() {
        let info = &last.processes[index];
        assert_eq!(info.pid, spec.pid);
        assert_eq!(info.state, ProcessState::Done);
        assert_eq!(info.timings.remaining, 0);
        assert_eq!(executed[index], spec.burst_time);
        assert!(dispatched[index]);

        let completion = info.timings.completion.unwrap();
        let waiting = completion - spec.arrival_time - spec.burst_time;
        assert_eq!(info.timings.waiting, Some(waiting));
        sum_waiting += waiting;
        sum_response += info.timings.response.unwrap();
    }

    if !processes.is_empty() {
        let count = processes.len() as f64;
        assert_eq!(simulation.report.average_waiting, sum_waiting as f64 / count);
        assert_eq!(simulation.report.average_response, sum_response as f64 / count);
    }
}
