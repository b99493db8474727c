use std::fmt::{self, Display};
use std::io;
use std::path::PathBuf;

/// `EINVAL`, returned for usage and parse errors.
pub const EINVAL: i32 = 22;

/// `ENOMEM`, returned when the process table cannot be allocated.
pub const ENOMEM: i32 = 12;

/// `EIO`, used when an I/O error carries no OS error number.
pub const EIO: i32 = 5;

/// Everything that can abort a run before or while reading its input.
#[derive(Debug)]
pub enum InputError {
    /// Wrong number of arguments, or an argument clap refused.
    Usage(String),

    /// The quantum argument is not made of ASCII digits only.
    InvalidQuantum(String),

    /// The input ended while an integer was still expected.
    UnexpectedEof {
        /// What the missing integer should have been.
        expected: &'static str,
    },

    /// An integer token does not fit.
    Malformed(String),

    /// The process table for `count` processes could not be allocated.
    OutOfMemory { count: u32 },

    /// The process file could not be read.
    Io { path: PathBuf, source: io::Error },
}

impl InputError {
    /// The code the process exits with.
    pub fn exit_code(&self) -> i32 {
        match self {
            InputError::Usage(_)
            | InputError::InvalidQuantum(_)
            | InputError::UnexpectedEof { .. }
            | InputError::Malformed(_) => EINVAL,
            InputError::OutOfMemory { .. } => ENOMEM,
            InputError::Io { source, .. } => source.raw_os_error().unwrap_or(EIO),
        }
    }
}

impl Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Usage(message) => write!(f, "{}", message),
            InputError::InvalidQuantum(quantum) => {
                write!(f, "invalid quantum {:?}, expected decimal digits", quantum)
            }
            InputError::UnexpectedEof { expected } => {
                write!(
                    f,
                    "Reached end of file while looking for another integer ({})",
                    expected
                )
            }
            InputError::Malformed(token) => write!(f, "malformed integer {}", token),
            InputError::OutOfMemory { count } => {
                write!(f, "cannot allocate a table of {} processes", count)
            }
            InputError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
