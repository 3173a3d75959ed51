//! The wall-time and RSS monitors that run concurrently with the
//! supervisor's ptrace event loop.

use crate::log::LogLevel::*;
use libc::pid_t;
use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Cooperative stop signal shared between the supervisor and both
/// monitors; flipped once by the supervisor during finalization.
pub type StopFlag = Arc<AtomicBool>;

pub fn new_stop_flag() -> StopFlag {
    Arc::new(AtomicBool::new(false))
}

/// The cadence at which both monitors poll the stop flag and the tracee's
/// liveness.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Spawns the wall-time monitor on its own OS thread. Returns a
/// `JoinHandle` yielding `true` if the time limit was exceeded (and SIGKILL
/// was sent), `false` if the monitor stopped cleanly (tracee died first, or
/// the supervisor flipped the stop flag).
pub fn spawn_wall_time_monitor(
    pid: pid_t,
    time_limit_ms: i64,
    stop: StopFlag,
) -> thread::JoinHandle<bool> {
    thread::spawn(move || {
        if time_limit_ms < 0 {
            wait_for_stop(&stop);
            return false;
        }
        let limit = Duration::from_millis(time_limit_ms as u64);
        let start = Instant::now();
        loop {
            if stop.load(Ordering::Relaxed) {
                return false;
            }
            if !tracee_alive(pid) {
                return false;
            }
            if start.elapsed() > limit {
                log!(LogWarn, "wall-time limit exceeded for pid {}", pid);
                unsafe {
                    libc::kill(pid, libc::SIGKILL);
                }
                return true;
            }
            thread::sleep(POLL_INTERVAL);
        }
    })
}

/// Spawns the RSS monitor. Returns `Ok(true)` if the memory limit was
/// exceeded, `Ok(false)` if it stopped cleanly, `Err(())` on an
/// unrecoverable `/proc` read failure that isn't the benign "pid already
/// gone" race.
pub fn spawn_rss_monitor(
    pid: pid_t,
    memory_limit_mb: i64,
    stop: StopFlag,
) -> thread::JoinHandle<Result<bool, ()>> {
    thread::spawn(move || {
        if memory_limit_mb < 0 {
            wait_for_stop(&stop);
            return Ok(false);
        }
        let limit_bytes = (memory_limit_mb as u64) * 1024 * 1024;
        loop {
            if stop.load(Ordering::Relaxed) {
                return Ok(false);
            }
            match read_rss_bytes(pid) {
                Some(rss) => {
                    if rss > limit_bytes {
                        log!(LogWarn, "memory limit exceeded for pid {}", pid);
                        unsafe {
                            libc::kill(pid, libc::SIGKILL);
                        }
                        return Ok(true);
                    }
                }
                None => {
                    if !tracee_alive(pid) {
                        // The tracee exited between our open() and read();
                        // treated as clean 0, not an error.
                        return Ok(false);
                    }
                    return Err(());
                }
            }
            thread::sleep(POLL_INTERVAL);
        }
    })
}

fn wait_for_stop(stop: &StopFlag) {
    while !stop.load(Ordering::Relaxed) {
        thread::sleep(POLL_INTERVAL);
    }
}

fn tracee_alive(pid: pid_t) -> bool {
    unsafe { libc::kill(pid, 0) == 0 }
}

/// Reads resident set size in bytes from `/proc/<pid>/statm` (field 2,
/// pages), or `None` if the file cannot be read or parsed.
fn read_rss_bytes(pid: pid_t) -> Option<u64> {
    let contents = fs::read_to_string(format!("/proc/{}/statm", pid)).ok()?;
    let resident_pages: u64 = contents.split_whitespace().nth(1)?.parse().ok()?;
    let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) } as u64;
    Some(resident_pages * page_size)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unset_limit_never_fires_until_stopped() {
        let stop = new_stop_flag();
        let stop2 = stop.clone();
        let handle = spawn_wall_time_monitor(std::process::id() as pid_t, -1, stop2);
        thread::sleep(Duration::from_millis(50));
        stop.store(true, Ordering::Relaxed);
        assert_eq!(handle.join().unwrap(), false);
    }

    #[test]
    fn rss_monitor_reads_self() {
        assert!(read_rss_bytes(std::process::id() as pid_t).is_some());
    }
}
