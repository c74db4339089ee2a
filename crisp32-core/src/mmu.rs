//! Virtual-to-physical translation and page table entry layout.
//!
//! # PTE format
//! ```text
//!   31                          12 11        4 3   2   1   0
//! ┌──────────────────────────────┬────────────┬───┬───┬───┬───┐
//! │      physical frame number   │  reserved  │ U │ X │ W │ V │
//! └──────────────────────────────┴────────────┴───┴───┴───┴───┘
//! ```
//! Bits 11–4 are reserved: implementations must preserve them on rewrite but
//! never interpret them.

use bitflags::bitflags;

/// The physical address value the MMU returns to signal translation failure.
/// Never a legal memory address — see the GLOSSARY entry "fault sentinel".
pub const FAULT_SENTINEL: u32 = 0xFFFF_FFFF;

const FRAME_MASK: u32 = 0xFFFF_F000;
const PAGE_OFFSET_MASK: u32 = 0x0000_0FFF;
pub const PAGE_SHIFT: u32 = 12;

bitflags! {
    #[derive(Copy, Clone, Eq, PartialEq)]
    pub struct PteFlags: u32 {
        const VALID    = 1 << 0;
        const WRITE    = 1 << 1;
        const EXECUTE  = 1 << 2;
        const USER     = 1 << 3;
    }
}

impl PteFlags {
    pub fn from_entry(entry: u32) -> Self {
        Self::from_bits_truncate(entry & 0xF)
    }
}

/// A resolved page table entry.
#[derive(Debug, Copy, Clone)]
pub struct PageTableEntry {
    pub frame: u32,
    pub flags: PteFlags,
}

impl PageTableEntry {
    pub fn from_raw(entry: u32) -> Self {
        Self {
            frame: entry & FRAME_MASK,
            flags: PteFlags::from_entry(entry),
        }
    }
}

pub fn page_number(vaddr: u32) -> u32 {
    vaddr >> PAGE_SHIFT
}

pub fn page_offset(vaddr: u32) -> u32 {
    vaddr & PAGE_OFFSET_MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_virtual_address_into_page_and_offset() {
        assert_eq!(page_number(0x0000_3ABC), 0x3);
        assert_eq!(page_offset(0x0000_3ABC), 0xABC);
    }

    #[test]
    fn pte_reserved_bits_do_not_affect_flags() {
        let pte = PageTableEntry::from_raw(0x1234_50FB); // reserved bits set
        assert_eq!(pte.frame, 0x1234_5000);
        assert!(pte.flags.contains(PteFlags::VALID));
        assert!(pte.flags.contains(PteFlags::WRITE));
        assert!(!pte.flags.contains(PteFlags::EXECUTE));
        assert!(pte.flags.contains(PteFlags::USER));
    }
}
