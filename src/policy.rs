//! The per-syscall accept/deny decision pipeline.

use crate::kernel_abi::SyscallId;
use crate::log::LogLevel::*;
use crate::process_state::ProcessState;
use libc::pid_t;
use regex::Regex;
use std::cell::Cell;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

/// `AT_FDCWD`, sign-extended the same way a tracee's dirfd argument is.
const AT_FDCWD: i64 = -100;

/// Process-wide policy for one run.
pub struct Policy {
    syscall_whitelist: HashSet<SyscallId>,
    filesystem_whitelist: Regex,
    /// Cleared after the first accepted syscall (must be `execve`).
    first_syscall: Cell<bool>,
}

pub enum Decision {
    Accept,
    /// Carries the denied syscall's name, for diagnostics.
    Deny(&'static str),
}

impl Policy {
    pub fn new(syscall_whitelist: HashSet<SyscallId>, filesystem_whitelist: Option<&str>) -> Policy {
        let pattern = filesystem_whitelist.unwrap_or(".*");
        let filesystem_whitelist =
            Regex::new(pattern).unwrap_or_else(|_| Regex::new(".*").unwrap());
        Policy {
            syscall_whitelist,
            filesystem_whitelist,
            first_syscall: Cell::new(true),
        }
    }

    /// Evaluates `state`'s current syscall against the decision pipeline,
    /// in order: first-syscall guard, unrestricted mode, path-argument
    /// syscalls, signal-sending syscalls, prctl, default whitelist lookup.
    pub fn decide(&self, state: &ProcessState) -> Decision {
        let id = state.get_syscall();

        if self.first_syscall.get() {
            if id == SyscallId::Execve {
                self.first_syscall.set(false);
                return Decision::Accept;
            }
            log!(LogWarn, "first syscall was not execve: {}", id.name());
            return Decision::Deny(id.name());
        }

        if self.syscall_whitelist.is_empty() {
            return Decision::Accept;
        }

        if is_path_argument_syscall(id) {
            if self.decide_path_argument(state, id) {
                return Decision::Accept;
            }
            log!(LogWarn, "path rejected for syscall {}", id.name());
            return Decision::Deny(id.name());
        }

        if is_signal_sending_syscall(id) {
            let target = state.get_param(0) as pid_t;
            if target == state.pid() {
                return Decision::Accept;
            }
            log!(LogWarn, "signal to non-self pid denied: {}", id.name());
            return Decision::Deny(id.name());
        }

        if id == SyscallId::Prctl {
            let option = state.get_param(0);
            if option == 3 || option == 15 {
                return Decision::Accept;
            }
            log!(LogWarn, "prctl option {} denied", option);
            return Decision::Deny(id.name());
        }

        if self.syscall_whitelist.contains(&id) {
            Decision::Accept
        } else {
            log!(LogWarn, "syscall not in whitelist: {}", id.name());
            Decision::Deny(id.name())
        }
    }

    fn decide_path_argument(&self, state: &ProcessState, id: SyscallId) -> bool {
        let has_dirfd = takes_dirfd(id);
        let (dirfd, path_index) = if has_dirfd { (state.get_param(0) as i64, 1) } else { (AT_FDCWD, 0) };
        let raw_path = crate::memory::read_cstring(state.pid(), state.get_param(path_index));
        let raw_path = String::from_utf8_lossy(&raw_path).into_owned();

        let resolved = resolve_path(state.pid(), &raw_path, sign_extend_dirfd(dirfd));
        self.filesystem_whitelist.is_match(&resolved)
    }
}

/// Sign-extends a dirfd that arrived in a wider register: takes the low 32
/// bits and reinterprets as a signed 32-bit integer.
fn sign_extend_dirfd(raw: i64) -> i32 {
    (raw & 0xFFFF_FFFF) as u32 as i32
}

/// Resolves an absolute path for a (possibly relative) path argument.
fn resolve_path(pid: pid_t, raw_path: &str, dirfd: i32) -> String {
    if raw_path.starts_with('/') {
        return raw_path.to_string();
    }

    let base = if dirfd == AT_FDCWD as i32 {
        readlink_proc(pid, "cwd")
    } else {
        readlink_proc(pid, &format!("fd/{}", dirfd))
    };

    let mut full = PathBuf::from(base);
    full.push(raw_path);
    full.to_string_lossy().into_owned()
}

fn readlink_proc(pid: pid_t, entry: &str) -> String {
    fs::read_link(format!("/proc/{}/{}", pid, entry))
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Path-argument syscalls taking an implicit `AT_FDCWD` in param 0.
fn takes_plain_path(id: SyscallId) -> bool {
    matches!(
        id,
        SyscallId::Open
            | SyscallId::Access
            | SyscallId::Mkdir
            | SyscallId::Unlink
            | SyscallId::Readlink
            | SyscallId::Stat
            | SyscallId::Fstat
            | SyscallId::Lstat
            | SyscallId::Oldstat
            | SyscallId::Oldfstat
            | SyscallId::Oldlstat
            | SyscallId::Stat64
            | SyscallId::Fstat64
            | SyscallId::Lstat64
    )
}

/// Path-argument syscalls taking an explicit dirfd in param 0 and the path
/// in param 1.
fn takes_dirfd(id: SyscallId) -> bool {
    matches!(
        id,
        SyscallId::Openat
            | SyscallId::Faccessat
            | SyscallId::Readlinkat
            | SyscallId::Fstatat64
            | SyscallId::Newfstatat
    )
}

fn is_path_argument_syscall(id: SyscallId) -> bool {
    takes_plain_path(id) || takes_dirfd(id)
}

fn is_signal_sending_syscall(id: SyscallId) -> bool {
    matches!(id, SyscallId::Kill | SyscallId::Tkill | SyscallId::Tgkill)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dirfd_sign_extension_matches_twos_complement() {
        // AT_FDCWD delivered in a 64-bit register as 0xFFFFFFFFFFFFFF9C.
        let raw: i64 = 0xFFFF_FFFF_FFFF_FF9C_u64 as i64;
        assert_eq!(sign_extend_dirfd(raw), -100);
    }

    #[test]
    fn positive_dirfd_round_trips() {
        assert_eq!(sign_extend_dirfd(7), 7);
    }

    #[test]
    fn absolute_path_ignores_dirfd() {
        assert_eq!(resolve_path(1, "/etc/passwd", 3), "/etc/passwd");
    }

    #[test]
    fn empty_whitelist_permissive_regex_matches_anything() {
        let p = Policy::new(HashSet::new(), None);
        assert!(p.filesystem_whitelist.is_match("/anything/at/all"));
    }

    #[test]
    fn stat_family_64_variants_are_path_arguments() {
        assert!(takes_plain_path(SyscallId::Stat64));
        assert!(takes_plain_path(SyscallId::Fstat64));
        assert!(takes_plain_path(SyscallId::Lstat64));
        assert!(is_path_argument_syscall(SyscallId::Stat64));
    }
}
