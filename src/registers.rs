//! The tracee's general-purpose register file and the per-personality
//! argument-register mapping.
//!
//! This crate targets x86_64 hosts only, and on an x86_64 kernel
//! `PTRACE_GETREGS` always returns registers in the 64-bit `user_regs_struct`
//! shape regardless of the tracee's personality -- the kernel places a
//! 32-bit tracee's register values into the correspondingly-named wide
//! register (`ebx` lives in the low 32 bits of `rbx`, etc). So there is only
//! one register shape to carry; personality only changes *which named field*
//! holds a given syscall argument.

use crate::kernel_abi::{Personality, X32_SYSCALL_BIT};
use libc::user_regs_struct;

/// Index into the five-argument-register mapping table.
pub const MAX_PARAMS: usize = 6;

macro_rules! rd_get_reg {
    ($slf:expr, $field:ident) => {
        $slf.regs.$field
    };
}

macro_rules! rd_set_reg {
    ($slf:expr, $field:ident, $val:expr) => {
        $slf.regs.$field = $val
    };
}

/// A stopped tracee's register snapshot, plus the personality needed to
/// interpret it. Buffers writes locally (`set_syscall`/`set_param`); nothing
/// is pushed back to the tracee unless the caller explicitly asks for it.
#[derive(Copy, Clone)]
pub struct Registers {
    personality: Personality,
    regs: user_regs_struct,
}

impl Registers {
    pub fn new(personality: Personality, regs: user_regs_struct) -> Registers {
        Registers { personality, regs }
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }

    pub fn raw(&self) -> &user_regs_struct {
        &self.regs
    }

    pub fn raw_mut(&mut self) -> &mut user_regs_struct {
        &mut self.regs
    }

    /// The raw `orig_rax`/`orig_eax`-equivalent syscall number, with the x32
    /// personality bit masked off.
    pub fn raw_syscall_number(&self) -> u64 {
        let n = rd_get_reg!(self, orig_rax);
        if self.personality == Personality::X32 {
            n & !X32_SYSCALL_BIT
        } else {
            n
        }
    }

    /// Write a raw syscall number back into the local register image,
    /// preserving the x32 bit on x32 tracees.
    pub fn set_raw_syscall_number(&mut self, number: u64) {
        let value = if self.personality == Personality::X32 {
            number | X32_SYSCALL_BIT
        } else {
            number
        };
        rd_set_reg!(self, orig_rax, value);
    }

    /// Read argument register `i` (0..6), per the per-personality mapping.
    /// Compat32 arguments are zero-extended from the low 32 bits of the
    /// underlying 64-bit register.
    pub fn param(&self, i: usize) -> u64 {
        match self.personality {
            Personality::Compat32 => match i {
                0 => rd_get_reg!(self, rbx) as u32 as u64,
                1 => rd_get_reg!(self, rcx) as u32 as u64,
                2 => rd_get_reg!(self, rdx) as u32 as u64,
                3 => rd_get_reg!(self, rsi) as u32 as u64,
                4 => rd_get_reg!(self, rdi) as u32 as u64,
                5 => rd_get_reg!(self, rbp) as u32 as u64,
                _ => panic!("bad parameter index {}", i),
            },
            Personality::Native64 | Personality::X32 => match i {
                0 => rd_get_reg!(self, rdi),
                1 => rd_get_reg!(self, rsi),
                2 => rd_get_reg!(self, rdx),
                3 => rd_get_reg!(self, r10),
                4 => rd_get_reg!(self, r8),
                5 => rd_get_reg!(self, r9),
                _ => panic!("bad parameter index {}", i),
            },
        }
    }

    /// Write argument register `i`. On compat32, only the low 32 bits of
    /// the underlying register are replaced; the upper 32 bits are
    /// preserved.
    pub fn set_param(&mut self, i: usize, val: u64) {
        const UPPER32_MASK: u64 = 0xFFFF_FFFF_0000_0000;
        match self.personality {
            Personality::Compat32 => {
                let v = val & 0xFFFF_FFFF;
                match i {
                    0 => rd_set_reg!(self, rbx, (rd_get_reg!(self, rbx) & UPPER32_MASK) | v),
                    1 => rd_set_reg!(self, rcx, (rd_get_reg!(self, rcx) & UPPER32_MASK) | v),
                    2 => rd_set_reg!(self, rdx, (rd_get_reg!(self, rdx) & UPPER32_MASK) | v),
                    3 => rd_set_reg!(self, rsi, (rd_get_reg!(self, rsi) & UPPER32_MASK) | v),
                    4 => rd_set_reg!(self, rdi, (rd_get_reg!(self, rdi) & UPPER32_MASK) | v),
                    5 => rd_set_reg!(self, rbp, (rd_get_reg!(self, rbp) & UPPER32_MASK) | v),
                    _ => panic!("bad parameter index {}", i),
                }
            }
            Personality::Native64 | Personality::X32 => match i {
                0 => rd_set_reg!(self, rdi, val),
                1 => rd_set_reg!(self, rsi, val),
                2 => rd_set_reg!(self, rdx, val),
                3 => rd_set_reg!(self, r10, val),
                4 => rd_set_reg!(self, r8, val),
                5 => rd_set_reg!(self, r9, val),
                _ => panic!("bad parameter index {}", i),
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn blank_regs() -> user_regs_struct {
        unsafe { std::mem::zeroed() }
    }

    #[test]
    fn native64_param_mapping() {
        let mut raw = blank_regs();
        raw.rdi = 1;
        raw.rsi = 2;
        raw.rdx = 3;
        raw.r10 = 4;
        raw.r8 = 5;
        raw.r9 = 6;
        let regs = Registers::new(Personality::Native64, raw);
        for i in 0..MAX_PARAMS {
            assert_eq!(regs.param(i), (i + 1) as u64);
        }
    }

    #[test]
    fn compat32_param_mapping_zero_extends() {
        let mut raw = blank_regs();
        raw.rbx = 0xFFFF_FFFF_0000_0001; // upper bits must be ignored on read
        let regs = Registers::new(Personality::Compat32, raw);
        assert_eq!(regs.param(0), 1);
    }

    #[test]
    fn compat32_set_param_preserves_upper_bits() {
        let mut raw = blank_regs();
        raw.rbx = 0xDEAD_BEEF_0000_0000;
        let mut regs = Registers::new(Personality::Compat32, raw);
        regs.set_param(0, 42);
        assert_eq!(regs.raw().rbx, 0xDEAD_BEEF_0000_002A);
    }

    #[test]
    fn x32_syscall_bit_round_trips() {
        let mut raw = blank_regs();
        raw.orig_rax = 59 | X32_SYSCALL_BIT;
        let mut regs = Registers::new(Personality::X32, raw);
        assert_eq!(regs.raw_syscall_number(), 59);
        regs.set_raw_syscall_number(231);
        assert_eq!(regs.raw().orig_rax, 231 | X32_SYSCALL_BIT);
    }

    #[test]
    fn native64_syscall_number_has_no_x32_bit() {
        let mut raw = blank_regs();
        raw.orig_rax = 231;
        let regs = Registers::new(Personality::Native64, raw);
        assert_eq!(regs.raw_syscall_number(), 231);
    }
}
