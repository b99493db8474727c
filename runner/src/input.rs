use std::fs;
use std::path::Path;

use scheduler::ProcessSpec;
use tracing::debug;

use crate::error::InputError;

/// Reads the process file at `path`.
pub fn load(path: &Path) -> Result<Vec<ProcessSpec>, InputError> {
    let data = fs::read(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "process file read");
    parse_processes(&data)
}

/// Parses `N` followed by `N` triples of `pid arrival burst`.
///
/// Any byte that is not an ASCII digit separates integers. Trailing
/// content after the last triple is ignored.
pub fn parse_processes(data: &[u8]) -> Result<Vec<ProcessSpec>, InputError> {
    let mut integers = Integers::new(data);
    let count = integers.expect("process count")?;

    let mut processes = Vec::new();
    processes
        .try_reserve_exact(count as usize)
        .map_err(|_| InputError::OutOfMemory { count })?;

    for _ in 0..count {
        let pid = integers.expect("pid")?;
        let arrival_time = integers.expect("arrival time")?;
        let burst_time = integers.expect("burst time")?;
        processes.push(ProcessSpec::new(
            pid,
            arrival_time.into(),
            burst_time.into(),
        ));
    }

    debug!(count, "processes parsed");
    Ok(processes)
}

/// The unsigned integers of a byte stream, in order.
struct Integers<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Integers<'a> {
    fn new(data: &'a [u8]) -> Self {
        Integers { data, position: 0 }
    }

    fn expect(&mut self, expected: &'static str) -> Result<u32, InputError> {
        self.next()
            .unwrap_or(Err(InputError::UnexpectedEof { expected }))
    }
}

impl Iterator for Integers<'_> {
    type Item = Result<u32, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.data[self.position..];
        let start = self.position + rest.iter().position(u8::is_ascii_digit)?;
        let length = self.data[start..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count();
        self.position = start + length;

        let token = &self.data[start..self.position];
        let value = token.iter().try_fold(0u32, |value, byte| {
            value.checked_mul(10)?.checked_add(u32::from(byte - b'0'))
        });
        Some(value.ok_or_else(|| {
            InputError::Malformed(String::from_utf8_lossy(token).into_owned())
        }))
    }
}
