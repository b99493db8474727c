use std::env;
use std::ffi::OsString;
use std::io;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use processor::{format_logs, simulate, Report};

mod args;
mod error;
mod input;

use args::Args;
use error::{InputError, EIO};

fn main() {
    init_tracing();

    let args = match parse_args(env::args_os()) {
        Ok(args) => args,
        Err(err) => exit(err),
    };

    match run(&args) {
        Ok(report) => print!("{}", report),
        Err(err) => exit(err),
    }
}

/// Wrong argument counts and a bad quantum become [`InputError::Usage`].
/// `--help` and `--version` print and exit right away.
fn parse_args<I, T>(args: I) -> anyhow::Result<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(args).map_err(|err| {
        if !err.use_stderr() {
            err.exit()
        }
        InputError::Usage(err.render().to_string()).into()
    })
}

fn run(args: &Args) -> anyhow::Result<Report> {
    let processes = input::load(&args.process_file).context("cannot load processes")?;

    let trace = env::var_os("RR_TRACE").is_some();
    let simulation = simulate(processes, args.quantum, trace);
    if trace {
        eprint!("{}", format_logs(&simulation.logs));
    }
    Ok(simulation.report)
}

fn exit(err: anyhow::Error) -> ! {
    let code = exit_code(&err);
    debug!(code, "exiting");
    eprintln!("{:#}", err);
    process::exit(code)
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<InputError>())
        .map_or(EIO, InputError::exit_code)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("RR_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// Do not delete this line
#[cfg(test)]
mod tests;
