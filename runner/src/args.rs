use std::path::PathBuf;

use clap::Parser;

use crate::error::InputError;

/// Simulate preemptive round robin scheduling of a batch of processes and
/// print the average waiting and response times.
#[derive(Debug, Parser)]
#[command(name = "rr", version, about)]
pub struct Args {
    /// File holding the process count followed by `pid arrival burst` triples
    pub process_file: PathBuf,

    /// Length of the time quantum, decimal digits only
    #[arg(value_parser = parse_quantum)]
    pub quantum: u64,
}

/// Accepts a non-empty run of ASCII digits, nothing else.
pub fn parse_quantum(value: &str) -> Result<u64, InputError> {
    if value.is_empty() || !value.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(InputError::InvalidQuantum(value.to_string()));
    }
    value
        .parse()
        .map_err(|_| InputError::InvalidQuantum(value.to_string()))
}
