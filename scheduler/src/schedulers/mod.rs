//! Scheduling policies.
//!
//! Each policy lives in its own file and is exported here.
//!
mod round_robin;
pub use round_robin::RoundRobin;
