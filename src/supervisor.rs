//! Fork & child setup, the ptrace event loop, and verdict finalization.

use crate::config::{RunConfig, Verdict};
use crate::log::LogLevel::*;
use crate::monitors::{self, new_stop_flag};
use crate::policy::{Decision, Policy};
use crate::process_state::ProcessState;
use libc::c_int;
use nix::sys::signal::{self, SaFlags, SigAction, SigHandler, SigSet, Signal};
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{self, ForkResult, Pid};
use std::ffi::CString;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Set by the SIGUSR1 handler installed in the parent; the handler itself
/// must be signal-safe, so it only touches this atomic boolean.
static EXEC_FAILED: AtomicBool = AtomicBool::new(false);

extern "C" fn sigusr1_handler(_signum: c_int) {
    EXEC_FAILED.store(true, Ordering::SeqCst);
}

/// Runs one sandboxed execution end to end and returns the verdict's
/// integer code.
pub fn run(config: RunConfig) -> i32 {
    EXEC_FAILED.store(false, Ordering::SeqCst);

    match unsafe { unistd::fork() } {
        Ok(ForkResult::Child) => {
            let parent = unistd::getppid();
            run_child(&config, parent);
            unreachable!("run_child never returns")
        }
        Ok(ForkResult::Parent { child }) => run_parent(&config, child),
        Err(_) => Verdict::ExecutionError as i32,
    }
}

/// Applies rlimits, chdir, and fd redirection in the documented order, then
/// requests tracing and execs. Never returns: either `execve` replaces this
/// process or it signals the parent and self-kills.
fn run_child(config: &RunConfig, parent: Pid) -> ! {
    const MB: i64 = 1024 * 1024;

    if config.memory_mb >= 0 {
        set_limit(libc::RLIMIT_DATA, ((config.memory_mb + 10) * MB) as u64);
        set_limit(libc::RLIMIT_AS, ((config.memory_mb + 10) * MB) as u64);
    }

    if config.time_ms >= 0 {
        let soft = ((2 * config.time_ms + 999) / 1000) as u64;
        let hard = ((3 * config.time_ms) / 1000) as u64;
        set_limit_pair(libc::RLIMIT_CPU, soft, hard);
    }

    if config.nproc >= 0 {
        set_limit(libc::RLIMIT_NPROC, config.nproc as u64);
    }

    if let Some(dir) = &config.dir {
        if !dir.is_empty() {
            let _ = unistd::chdir(dir.as_str());
        }
    }

    set_limit(libc::RLIMIT_STACK, libc::RLIM_INFINITY);
    set_limit(libc::RLIMIT_CORE, 0);

    redirect_stream(&config.stdin, unistd::STDIN_FILENO, nix::fcntl::OFlag::O_RDONLY);
    redirect_stream(&config.stdout, unistd::STDOUT_FILENO, nix::fcntl::OFlag::O_WRONLY);
    redirect_stream(&config.stderr, unistd::STDERR_FILENO, nix::fcntl::OFlag::O_WRONLY);

    let _ = nix::sys::ptrace::traceme();

    exec_target(config);

    // execve failed
    let _ = signal::kill(parent, Signal::SIGUSR1);
    let _ = signal::kill(unistd::getpid(), Signal::SIGKILL);
    std::process::exit(127)
}

/// Sets both soft and hard limits from a single value, hard limit doubled.
fn set_limit(resource: c_int, limit: u64) {
    set_limit_pair(resource, limit, limit.saturating_add(limit));
}

fn set_limit_pair(resource: c_int, soft: u64, hard: u64) {
    let rl = libc::rlimit {
        rlim_cur: soft,
        rlim_max: hard,
    };
    unsafe {
        libc::setrlimit(resource, &rl);
    }
}

/// Opens `path` (if configured) and `dup2`s it onto `fd`; closes `fd`
/// otherwise. Opens with no `O_CREAT`/`O_TRUNC` -- callers must pre-create
/// redirection targets.
fn redirect_stream(path: &Option<String>, fd: libc::c_int, flags: nix::fcntl::OFlag) {
    match path {
        Some(p) => {
            if let Ok(opened) = nix::fcntl::open(p.as_str(), flags, nix::sys::stat::Mode::empty())
            {
                let _ = unistd::dup2(opened, fd);
                let _ = unistd::close(opened);
            }
        }
        None => {
            let _ = unistd::close(fd);
        }
    }
}

fn exec_target(config: &RunConfig) {
    let cmd = match CString::new(config.cmd.as_str()) {
        Ok(c) => c,
        Err(_) => return,
    };
    let argv: Vec<CString> = config
        .argv
        .iter()
        .filter_map(|s| CString::new(s.as_str()).ok())
        .collect();
    let envp: Vec<CString> = config
        .envp
        .iter()
        .filter_map(|s| CString::new(s.as_str()).ok())
        .collect();

    let _ = unistd::execve(&cmd, &argv, &envp);
}

/// Installs the SIGUSR1 handler, builds the policy, spawns both monitors,
/// drives the event loop, and finalizes.
fn run_parent(config: &RunConfig, child: Pid) -> i32 {
    install_sigusr1_handler();

    let policy = Policy::new(
        config.syscall_whitelist.clone(),
        config.filesystem_whitelist.as_deref(),
    );

    let stop = new_stop_flag();
    let time_handle =
        monitors::spawn_wall_time_monitor(child.as_raw(), config.time_ms, stop.clone());
    let mem_handle = monitors::spawn_rss_monitor(child.as_raw(), config.memory_mb, stop.clone());

    let verdict = event_loop(child, &policy);

    finalize(child, &stop, time_handle, mem_handle, verdict) as i32
}

fn install_sigusr1_handler() {
    let action = unsafe {
        SigAction::new(
            SigHandler::Handler(sigusr1_handler),
            SaFlags::empty(),
            SigSet::empty(),
        )
    };
    unsafe {
        let _ = signal::sigaction(Signal::SIGUSR1, &action);
    }
}

/// The blocking ptrace event loop. Returns the `default_verdict` to hand
/// to [`finalize`].
fn event_loop(child: Pid, policy: &Policy) -> Verdict {
    loop {
        if nix::sys::ptrace::syscall(child, None::<Signal>).is_err() {
            log!(LogError, "ptrace(PTRACE_SYSCALL) failed for pid {}", child);
            return Verdict::ExecutionError;
        }

        let status = match waitpid(child, None) {
            Ok(s) => s,
            Err(_) => {
                log!(LogError, "waitpid failed for pid {}", child);
                return Verdict::ExecutionError;
            }
        };

        match status {
            WaitStatus::Signaled(_, _, _) => {
                log!(LogWarn, "program was sigkilled");
                return Verdict::RuntimeError;
            }
            WaitStatus::Exited(_, code) => {
                if code == 0 {
                    log!(LogDebug, "program exited without problems");
                    return Verdict::Accepted;
                } else {
                    log!(LogWarn, "program exited with error code {}", code);
                    return Verdict::RuntimeError;
                }
            }
            WaitStatus::Stopped(_, signal) => match signal {
                Signal::SIGTRAP => match ProcessState::snapshot(child.as_raw()) {
                    Ok(state) => match policy.decide(&state) {
                        Decision::Accept => continue,
                        Decision::Deny(name) => {
                            log!(LogWarn, "bad syscall: {}", name);
                            return Verdict::RestrictedViolation;
                        }
                    },
                    Err(_) => {
                        log!(LogError, "failed to snapshot process state");
                        return Verdict::ExecutionError;
                    }
                },
                Signal::SIGXCPU => {
                    log!(LogWarn, "CPU limit reached");
                    return Verdict::TimeLimit;
                }
                Signal::SIGABRT => {
                    log!(LogWarn, "program aborted");
                    return Verdict::RuntimeError;
                }
                Signal::SIGSEGV => {
                    log!(LogWarn, "program received SIGSEGV");
                    return Verdict::RuntimeError;
                }
                Signal::SIGFPE => {
                    log!(LogWarn, "program received SIGFPE");
                    return Verdict::RuntimeError;
                }
                other => {
                    log!(LogWarn, "program stopped by signal {}", other);
                    return Verdict::ExecutionError;
                }
            },
            _ => {
                // PtraceEvent/Continued/StillAlive never arise from a plain
                // PTRACE_SYSCALL continuation without PTRACE_SETOPTIONS.
                return Verdict::ExecutionError;
            }
        }
    }
}

/// SIGCONT+SIGKILL the tracee, flip the stop flag, join both monitors, then
/// resolve the verdict by priority. Safe regardless of whether the tracee
/// is alive, stopped, or already reaped.
fn finalize(
    child: Pid,
    stop: &Arc<AtomicBool>,
    time_handle: std::thread::JoinHandle<bool>,
    mem_handle: std::thread::JoinHandle<Result<bool, ()>>,
    default_verdict: Verdict,
) -> Verdict {
    let _ = signal::kill(child, Signal::SIGCONT);
    let _ = signal::kill(child, Signal::SIGKILL);
    stop.store(true, Ordering::SeqCst);

    let time_exceeded = time_handle.join().unwrap_or(false);
    let mem_result = mem_handle.join().unwrap_or(Ok(false));

    if EXEC_FAILED.load(Ordering::SeqCst) {
        log!(LogError, "exec failed");
        Verdict::ExecutionError
    } else if mem_result.is_err() {
        log!(LogError, "memory monitor errored");
        Verdict::ExecutionError
    } else if time_exceeded {
        log!(LogWarn, "time limit reached");
        Verdict::TimeLimit
    } else if mem_result == Ok(true) {
        log!(LogWarn, "memory limit reached");
        Verdict::MemoryLimit
    } else {
        default_verdict
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::default_config;

    #[test]
    fn pure_accept_on_true() {
        let mut config = default_config();
        config.cmd = "/bin/true".to_string();
        config.argv = vec!["/bin/true".to_string()];
        let verdict = run(config);
        assert_eq!(verdict, Verdict::Accepted as i32);
    }

    #[test]
    fn policy_deny_on_restricted_whitelist() {
        let mut config = default_config();
        config.cmd = "/bin/true".to_string();
        config.argv = vec!["/bin/true".to_string()];
        config
            .syscall_whitelist
            .insert(crate::kernel_abi::SyscallId::Execve);
        config
            .syscall_whitelist
            .insert(crate::kernel_abi::SyscallId::ExitGroup);
        let verdict = run(config);
        assert_eq!(verdict, Verdict::RestrictedViolation as i32);
    }
}
