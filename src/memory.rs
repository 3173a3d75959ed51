//! Reading NUL-terminated strings out of a tracee's address space via
//! `PTRACE_PEEKDATA`.

use nix::sys::ptrace;
use nix::unistd::Pid;
use std::mem::size_of;

const WORD_SIZE: usize = size_of::<libc::c_long>();

/// Reads a NUL-terminated byte string starting at `addr` in `pid`'s address
/// space, one machine word at a time. Stops at the first NUL found within a
/// word, or at the first failed peek (treated as end-of-string rather than
/// an error, matching the source's tolerance of a partially-mapped tail).
/// Returns an empty vector when `addr == 0`.
pub fn read_cstring(pid: libc::pid_t, addr: u64) -> Vec<u8> {
    if addr == 0 {
        return Vec::new();
    }

    let pid = Pid::from_raw(pid);
    let mut out = Vec::with_capacity(WORD_SIZE * 4);
    let mut offset: u64 = 0;

    loop {
        let word = match ptrace::read(pid, (addr + offset) as ptrace::AddressType) {
            Ok(w) => w,
            Err(_) => break,
        };

        let bytes = word.to_ne_bytes();
        let mut hit_nul = false;
        for &b in bytes.iter() {
            if b == 0 {
                hit_nul = true;
                break;
            }
            out.push(b);
        }
        if hit_nul {
            break;
        }
        offset += WORD_SIZE as u64;
    }

    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zero_address_is_empty() {
        assert!(read_cstring(1, 0).is_empty());
    }
}
