//! Syscall tables and the personality (ABI) enumeration.
//!
//! A static, ABI-keyed table of `(canonical id, name)` built once at
//! startup, plus the inverse `id -> number` lookup used by `set_syscall`.

pub mod i386;
pub mod syscall_id;
pub mod x32;
pub mod x86_64;

pub use syscall_id::SyscallId;

use lazy_static::lazy_static;
use static_assertions::const_assert;

const_assert!(syscall_id::SyscallId::ALL.len() < u16::MAX as usize);

/// Which calling convention is in effect for a tracee, derived from its
/// CS/DS segment registers at a given stop.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Personality {
    /// 64-bit long mode: the tracer's own native ABI.
    Native64,
    /// 32-bit legacy (i386) ABI running under a 64-bit kernel.
    Compat32,
    /// x32: 64-bit instruction set, ILP32 (32-bit pointers/longs) userspace.
    X32,
}

/// One ABI's syscall table: a dense, startup-built `number -> id` array plus
/// its inverse `id -> number`. Built once (see [`table_for`]) and immutable
/// thereafter.
pub struct SyscallTable {
    /// Indexed by raw syscall number; `SyscallId::None` for unused slots.
    by_number: Vec<SyscallId>,
    /// Indexed by `SyscallId as usize`; `None` when absent on this ABI.
    by_id: Vec<Option<u32>>,
}

impl SyscallTable {
    fn build(slots: &[(u32, SyscallId)]) -> SyscallTable {
        let max_number = slots.iter().map(|&(n, _)| n).max().unwrap_or(0);
        let mut by_number = vec![SyscallId::None; max_number as usize + 1];
        // by_id is indexed by the enum's raw discriminant; SyscallId::ALL.len() + 1
        // covers None (discriminant 0) through the last named id.
        let mut by_id: Vec<Option<u32>> = vec![None; SyscallId::ALL.len() + 1];

        for &(number, id) in slots {
            by_number[number as usize] = id;
            // Last occurrence wins, matching the source table's semantics;
            // the corpus has no duplicates so this never actually triggers.
            by_id[id as usize] = Some(number);
        }

        SyscallTable { by_number, by_id }
    }

    /// Canonical id for a raw syscall number, or `SyscallId::None` if the
    /// number is out of the table's observed range or an unmapped gap.
    pub fn id_for_number(&self, number: u32) -> SyscallId {
        self.by_number
            .get(number as usize)
            .copied()
            .unwrap_or(SyscallId::None)
    }

    /// Raw syscall number for a canonical id on this ABI, or `None` if the
    /// syscall does not exist on this ABI.
    pub fn number_for_id(&self, id: SyscallId) -> Option<u32> {
        self.by_id.get(id as usize).copied().flatten()
    }
}

lazy_static! {
    static ref NATIVE64: SyscallTable = SyscallTable::build(x86_64::SLOTS);
    static ref COMPAT32: SyscallTable = SyscallTable::build(i386::SLOTS);
    static ref X32_TABLE: SyscallTable = SyscallTable::build(x32::SLOTS);
}

/// Returns the immutable table for `personality`, building it (and caching
/// it for the life of the process) on first use.
pub fn table_for(personality: Personality) -> &'static SyscallTable {
    match personality {
        Personality::Native64 => &NATIVE64,
        Personality::Compat32 => &COMPAT32,
        Personality::X32 => &X32_TABLE,
    }
}

/// The x32 personality bit OR'd into `orig_rax` by the kernel; must be
/// masked off before a table lookup and preserved when writing back.
pub const X32_SYSCALL_BIT: u64 = 0x4000_0000;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn table_bijection_native64() {
        let t = table_for(Personality::Native64);
        for &(number, id) in x86_64::SLOTS {
            assert_eq!(t.id_for_number(number), id);
            assert_eq!(t.number_for_id(id), Some(number));
        }
    }

    #[test]
    fn table_bijection_compat32() {
        let t = table_for(Personality::Compat32);
        for &(number, id) in i386::SLOTS {
            assert_eq!(t.id_for_number(number), id);
            assert_eq!(t.number_for_id(id), Some(number));
        }
    }

    #[test]
    fn table_bijection_x32() {
        let t = table_for(Personality::X32);
        for &(number, id) in x32::SLOTS {
            assert_eq!(t.id_for_number(number), id);
            assert_eq!(t.number_for_id(id), Some(number));
        }
    }

    #[test]
    fn absent_on_missing_abi_returns_none() {
        // `newfstatat` never existed on the 32-bit ABI.
        let i386_table = table_for(Personality::Compat32);
        assert_eq!(i386_table.number_for_id(SyscallId::Newfstatat), None);

        // `oldstat` never existed on x86_64 or x32.
        let native = table_for(Personality::Native64);
        assert_eq!(native.number_for_id(SyscallId::Oldstat), None);
        let x32 = table_for(Personality::X32);
        assert_eq!(x32.number_for_id(SyscallId::Oldstat), None);
    }

    #[test]
    fn out_of_range_number_is_none_id() {
        let t = table_for(Personality::Native64);
        assert_eq!(t.id_for_number(999_999), SyscallId::None);
    }

    #[test]
    fn sentinel_slots_never_reverse_map() {
        // No number should ever be claimed to hold SyscallId::None via the
        // inverse table -- None has no table entry to begin with.
        let t = table_for(Personality::Native64);
        assert_eq!(t.number_for_id(SyscallId::None), None);
    }
}
