//! The run configuration record and the verdict enumeration. These are
//! this crate's public surface together with [`crate::run`].

use crate::kernel_abi::SyscallId;
use std::collections::HashSet;

/// A single sandboxed run's parameters. `default_config()` yields every
/// optional field disabled.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Wall-clock cap in milliseconds; `-1` means unset.
    pub time_ms: i64,
    /// Address-space cap in megabytes; `-1` means unset.
    pub memory_mb: i64,
    /// Process-count cap; `-1` means unset.
    pub nproc: i64,
    /// chdir target in the child, if any.
    pub dir: Option<String>,
    pub cmd: String,
    pub argv: Vec<String>,
    pub envp: Vec<String>,
    pub stdin: Option<String>,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    /// Allowed canonical syscall ids; empty means "no filtering".
    pub syscall_whitelist: HashSet<SyscallId>,
    /// Regex source matched against absolute paths for path-taking
    /// syscalls; `None` behaves as the permissive `.*`.
    pub filesystem_whitelist: Option<String>,
}

/// Every optional field disabled, matching the source's "all -1/unset"
/// default.
pub fn default_config() -> RunConfig {
    RunConfig {
        time_ms: -1,
        memory_mb: -1,
        nproc: -1,
        dir: None,
        cmd: String::new(),
        argv: Vec::new(),
        envp: Vec::new(),
        stdin: None,
        stdout: None,
        stderr: None,
        syscall_whitelist: HashSet::new(),
        filesystem_whitelist: None,
    }
}

/// The single classification this sandbox returns for a run.
/// Discriminants reproduce the source's `enum Verdict` exactly so that
/// `run(config) as i32` is a drop-in replacement for the original `int
/// run(Config)`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(i32)]
pub enum Verdict {
    /// Reserved; never emitted by the core.
    No = 0,
    Accepted = 1,
    /// Reserved; never emitted by the core -- output comparison is an
    /// external collaborator.
    WrongAnswer = 2,
    MemoryLimit = 3,
    TimeLimit = 4,
    RuntimeError = 5,
    /// Reserved; never emitted by the core.
    CompileError = 6,
    RestrictedViolation = 7,
    ExecutionError = 8,
}

impl Verdict {
    /// The verdict's short mnemonic, matching the source's enum member
    /// names (`AC`, `TL`, `ML`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Verdict::No => "NO",
            Verdict::Accepted => "AC",
            Verdict::WrongAnswer => "WA",
            Verdict::MemoryLimit => "ML",
            Verdict::TimeLimit => "TL",
            Verdict::RuntimeError => "RE",
            Verdict::CompileError => "CE",
            Verdict::RestrictedViolation => "RV",
            Verdict::ExecutionError => "ER",
        }
    }

    pub fn from_code(code: i32) -> Option<Verdict> {
        match code {
            0 => Some(Verdict::No),
            1 => Some(Verdict::Accepted),
            2 => Some(Verdict::WrongAnswer),
            3 => Some(Verdict::MemoryLimit),
            4 => Some(Verdict::TimeLimit),
            5 => Some(Verdict::RuntimeError),
            6 => Some(Verdict::CompileError),
            7 => Some(Verdict::RestrictedViolation),
            8 => Some(Verdict::ExecutionError),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verdict_discriminants_match_source() {
        assert_eq!(Verdict::No as i32, 0);
        assert_eq!(Verdict::Accepted as i32, 1);
        assert_eq!(Verdict::WrongAnswer as i32, 2);
        assert_eq!(Verdict::MemoryLimit as i32, 3);
        assert_eq!(Verdict::TimeLimit as i32, 4);
        assert_eq!(Verdict::RuntimeError as i32, 5);
        assert_eq!(Verdict::CompileError as i32, 6);
        assert_eq!(Verdict::RestrictedViolation as i32, 7);
        assert_eq!(Verdict::ExecutionError as i32, 8);
    }

    #[test]
    fn default_config_is_fully_unset() {
        let c = default_config();
        assert_eq!(c.time_ms, -1);
        assert_eq!(c.memory_mb, -1);
        assert_eq!(c.nproc, -1);
        assert!(c.dir.is_none());
        assert!(c.syscall_whitelist.is_empty());
        assert!(c.filesystem_whitelist.is_none());
    }
}
