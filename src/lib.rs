//! A ptrace-based supervised-execution engine for confined execution of
//! untrusted programs: given a command and a set of limits, spawns and
//! traces a child, enforces wall/CPU time, memory, process-count, syscall,
//! and filesystem-path limits, and reports one verdict describing how the
//! run ended.

#[macro_use]
pub mod log;

pub mod config;
pub mod kernel_abi;
pub mod memory;
pub mod monitors;
pub mod policy;
pub mod process_state;
pub mod registers;
mod supervisor;

pub use config::{default_config, RunConfig, Verdict};

/// Runs one sandboxed execution end to end and returns the verdict's
/// integer code. See [`config::RunConfig`] and [`config::Verdict`].
pub fn run(config: RunConfig) -> i32 {
    log::init();
    supervisor::run(config)
}
