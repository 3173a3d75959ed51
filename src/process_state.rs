//! Snapshotting a stopped tracee's registers into a [`ProcessState`].

use crate::kernel_abi::{self, Personality, SyscallId};
use crate::registers::Registers;
use libc::pid_t;
use nix::sys::ptrace;
use nix::unistd::Pid;
use std::io;

/// CS value for both long-mode (native64) and x32; compat32 uses 0x23.
const CS_COMPAT32: u64 = 0x23;
const CS_LONG_MODE: u64 = 0x33;
/// DS value that, combined with `CS_LONG_MODE`, indicates x32 rather than
/// native64.
const DS_X32: u64 = 0x2b;

/// A stopped tracee's register snapshot, its resolved personality and
/// canonical syscall id, and an error flag set when the snapshot found
/// something unreachable in a well-behaved tracee.
pub struct ProcessState {
    pid: pid_t,
    registers: Registers,
    syscall_id: SyscallId,
    error: bool,
}

impl ProcessState {
    /// Fetches the tracee's general-purpose registers via `PTRACE_GETREGS`,
    /// derives personality from CS/DS, extracts the raw syscall number
    /// (masking the x32 bit first), and resolves it to a canonical id.
    pub fn snapshot(pid: pid_t) -> io::Result<ProcessState> {
        let raw = ptrace::getregs(Pid::from_raw(pid)).map_err(nix_error_to_io)?;

        let (personality, error) = classify(raw.cs, raw.ds);
        let registers = Registers::new(personality, raw);
        let syscall_number = registers.raw_syscall_number();
        let table = kernel_abi::table_for(personality);
        let syscall_id = table.id_for_number(syscall_number as u32);
        // An out-of-range number resolves to `SyscallId::None`, which is a
        // legitimate "no syscall in flight yet" state right after exec, not
        // itself an error; the error flag here is reserved for CS/DS we
        // cannot classify at all.

        Ok(ProcessState {
            pid,
            registers,
            syscall_id,
            error,
        })
    }

    pub fn pid(&self) -> pid_t {
        self.pid
    }

    pub fn personality(&self) -> Personality {
        self.registers.personality()
    }

    pub fn error(&self) -> bool {
        self.error
    }

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn get_syscall(&self) -> SyscallId {
        self.syscall_id
    }

    /// Buffers a new syscall id into the local register image. Sets the
    /// error flag (but does not panic) if `id` is absent on this
    /// personality's ABI.
    pub fn set_syscall(&mut self, id: SyscallId) {
        let table = kernel_abi::table_for(self.registers.personality());
        match table.number_for_id(id) {
            Some(number) => {
                self.registers.set_raw_syscall_number(number as u64);
                self.syscall_id = id;
            }
            None => {
                self.error = true;
            }
        }
    }

    pub fn get_param(&self, i: usize) -> u64 {
        self.registers.param(i)
    }

    pub fn set_param(&mut self, i: usize, val: u64) {
        self.registers.set_param(i, val);
    }
}

fn nix_error_to_io(err: nix::Error) -> io::Error {
    match err.as_errno() {
        Some(errno) => io::Error::from_raw_os_error(errno as i32),
        None => io::Error::new(io::ErrorKind::Other, err.to_string()),
    }
}

/// Maps (CS, DS) to a personality. Returns `(personality, error)`; an
/// unrecognized CS sets the error flag and defaults to `Native64` so
/// callers always get a usable value.
fn classify(cs: u64, ds: u64) -> (Personality, bool) {
    match cs {
        CS_COMPAT32 => (Personality::Compat32, false),
        CS_LONG_MODE => {
            if ds == DS_X32 {
                (Personality::X32, false)
            } else {
                (Personality::Native64, false)
            }
        }
        _ => (Personality::Native64, true),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classify_compat32() {
        assert_eq!(classify(0x23, 0).0, Personality::Compat32);
        assert!(!classify(0x23, 0).1);
    }

    #[test]
    fn classify_native64() {
        assert_eq!(classify(0x33, 0).0, Personality::Native64);
        assert!(!classify(0x33, 0).1);
    }

    #[test]
    fn classify_x32() {
        assert_eq!(classify(0x33, 0x2b).0, Personality::X32);
        assert!(!classify(0x33, 0x2b).1);
    }

    #[test]
    fn classify_unknown_cs_sets_error() {
        let (_, error) = classify(0xDEAD, 0);
        assert!(error);
    }
}
