//! Register tables and the logic that turns them into bus transfers.
//!
//! Vendor tables are long runs of `(address, value)` pairs, mostly with consecutive addresses.
//! The sensors auto-increment their register pointer during a write, so a run can go out as one
//! transfer: two address bytes followed by every value in the run.

use crate::util::split_u16;
use heapless::{consts, Vec};

/// Size of the bulk transfer buffer: two address bytes plus up to 30 register values.
pub const TRANSFER_BUF_SIZE: usize = 32;

/// Smallest useful transfer: address plus a single value.
pub const SINGLE_WRITE_SIZE: usize = 3;

/// One bus transfer, start address first (big-endian), then the values.
pub type TransferBuf = Vec<u8, consts::U32>;

/// A single line of a register table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegEntry {
    /// Write `val` to the register at `addr`.
    Write { addr: u16, val: u8 },
    /// Sleep before moving on, typically after a reset.
    WaitMs(u16),
}

/// Table entry that writes `val` to `addr`.
pub const fn reg(addr: u16, val: u8) -> RegEntry {
    RegEntry::Write { addr, val }
}

/// Table entry that waits `ms` milliseconds.
pub const fn wait_ms(ms: u16) -> RegEntry {
    RegEntry::WaitMs(ms)
}

/// What the bus layer has to do next while applying a table.
#[derive(Debug, Eq, PartialEq)]
pub enum Step {
    Wait(u16),
    Write(TransferBuf),
}

/// Splits a table into transfers, merging runs of consecutive addresses.
pub struct Bursts<'a> {
    entries: &'a [RegEntry],
    pos: usize,
    max_len: usize,
}

impl<'a> Bursts<'a> {
    /// Iterate over `entries` producing transfers of at most `max_len` bytes. The length is
    /// clamped to `[SINGLE_WRITE_SIZE, TRANSFER_BUF_SIZE]`; the lower bound disables merging.
    pub fn new(entries: &'a [RegEntry], max_len: usize) -> Self {
        Bursts {
            entries,
            pos: 0,
            max_len: max_len.max(SINGLE_WRITE_SIZE).min(TRANSFER_BUF_SIZE),
        }
    }

    /// Value of the entry at the cursor if it continues a run ending at `last`.
    fn continues(&self, last: u16) -> Option<u8> {
        match self.entries.get(self.pos) {
            Some(RegEntry::Write { addr, val }) if last.checked_add(1) == Some(*addr) => Some(*val),
            _ => None,
        }
    }
}

impl<'a> Iterator for Bursts<'a> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let entry = *self.entries.get(self.pos)?;
        self.pos += 1;

        let (addr, val) = match entry {
            RegEntry::WaitMs(ms) => return Some(Step::Wait(ms)),
            RegEntry::Write { addr, val } => (addr, val),
        };

        let (hi, lo) = split_u16(addr);
        let mut buf = TransferBuf::new();
        // Capacity is always enough for a single write
        let _ = buf.extend_from_slice(&[hi, lo, val]);

        let mut last = addr;
        while buf.len() < self.max_len {
            let val = match self.continues(last) {
                Some(val) => val,
                None => break,
            };
            if buf.push(val).is_err() {
                break;
            }
            last += 1;
            self.pos += 1;
        }

        Some(Step::Write(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writes(steps: &[Step]) -> std::vec::Vec<&[u8]> {
        steps
            .iter()
            .filter_map(|s| match s {
                Step::Write(buf) => Some(&buf[..]),
                Step::Wait(_) => None,
            })
            .collect()
    }

    #[test]
    fn consecutive_addresses_are_merged() {
        let table = [
            reg(0x3800, 0x01),
            reg(0x3801, 0x02),
            reg(0x3802, 0x03),
            reg(0x3810, 0x04),
        ];
        let steps: std::vec::Vec<Step> = Bursts::new(&table, TRANSFER_BUF_SIZE).collect();
        assert_eq!(
            writes(&steps),
            vec![&[0x38, 0x00, 0x01, 0x02, 0x03][..], &[0x38, 0x10, 0x04][..]]
        );
    }

    #[test]
    fn descending_or_repeated_addresses_split() {
        let table = [reg(0x3801, 0xb4), reg(0x3801, 0xc4), reg(0x3800, 0x00)];
        let steps: std::vec::Vec<Step> = Bursts::new(&table, TRANSFER_BUF_SIZE).collect();
        assert_eq!(steps.len(), 3);
    }

    #[test]
    fn waits_break_runs() {
        let table = [
            reg(0x3008, 0x82),
            wait_ms(5),
            reg(0x3009, 0x02),
            wait_ms(5),
        ];
        let steps: std::vec::Vec<Step> = Bursts::new(&table, TRANSFER_BUF_SIZE).collect();
        assert_eq!(steps.len(), 4);
        assert_eq!(steps[1], Step::Wait(5));
        assert_eq!(steps[3], Step::Wait(5));
        assert_eq!(writes(&steps), vec![&[0x30, 0x08, 0x82][..], &[0x30, 0x09, 0x02][..]]);
    }

    #[test]
    fn long_runs_are_capped() {
        let table: std::vec::Vec<RegEntry> = (0..40u16).map(|i| reg(0x5800 + i, i as u8)).collect();
        let steps: std::vec::Vec<Step> = Bursts::new(&table, TRANSFER_BUF_SIZE).collect();
        let bufs = writes(&steps);
        assert_eq!(bufs.len(), 2);
        assert_eq!(bufs[0].len(), TRANSFER_BUF_SIZE);
        assert_eq!(&bufs[1][..3], &[0x58, 30, 30]);
        assert_eq!(bufs[1].len(), 2 + 10);
    }

    #[test]
    fn no_merge_across_address_wrap() {
        let table = [reg(0xffff, 0x01), reg(0x0000, 0x02)];
        assert_eq!(Bursts::new(&table, TRANSFER_BUF_SIZE).count(), 2);
    }

    #[test]
    fn minimum_length_disables_merging() {
        let table = [reg(0x0340, 0x01), reg(0x0341, 0x84), reg(0x0342, 0x06)];
        let steps: std::vec::Vec<Step> = Bursts::new(&table, 0).collect();
        assert_eq!(
            writes(&steps),
            vec![
                &[0x03, 0x40, 0x01][..],
                &[0x03, 0x41, 0x84][..],
                &[0x03, 0x42, 0x06][..]
            ]
        );
    }

    #[test]
    fn empty_table_yields_nothing() {
        assert_eq!(Bursts::new(&[], TRANSFER_BUF_SIZE).next(), None);
    }
}
