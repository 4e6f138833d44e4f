//! Test doubles for the I2C bus and the delay provider.

use embedded_hal::blocking::{delay::DelayMs, i2c};
use std::collections::BTreeMap;
use std::vec::Vec;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MockError {
    Nack,
}

/// A sensor register file sitting on a fake bus. Bulk writes auto-increment the register
/// pointer like the real parts do.
#[derive(Default)]
pub struct MockBus {
    pub address: u8,
    pub regs: BTreeMap<u16, u8>,
    /// Registers that ignore writes and always read back the given value.
    pub stuck: BTreeMap<u16, u8>,
    /// Every successful write transfer, bytes as sent.
    pub writes: Vec<Vec<u8>>,
    /// Register address of every successful read.
    pub reads: Vec<u16>,
    /// Number of upcoming write transfers to reject.
    pub fail_writes: usize,
    /// Number of upcoming read transfers to reject.
    pub fail_reads: usize,
}

impl MockBus {
    pub fn new(address: u8) -> Self {
        MockBus {
            address,
            ..Default::default()
        }
    }

    pub fn with_regs(address: u8, regs: &[(u16, u8)]) -> Self {
        let mut bus = MockBus::new(address);
        bus.regs.extend(regs.iter().copied());
        bus
    }

    pub fn reg(&self, addr: u16) -> u8 {
        self.regs.get(&addr).copied().unwrap_or(0)
    }

    /// Single register writes to `addr`, in order.
    pub fn writes_to(&self, addr: u16) -> Vec<u8> {
        let [hi, lo] = addr.to_be_bytes();
        self.writes
            .iter()
            .filter(|w| w.len() == 3 && w[0] == hi && w[1] == lo)
            .map(|w| w[2])
            .collect()
    }
}

impl i2c::Write for MockBus {
    type Error = MockError;

    fn write(&mut self, address: u8, bytes: &[u8]) -> Result<(), MockError> {
        if address != self.address || bytes.len() < 2 {
            return Err(MockError::Nack);
        }
        if self.fail_writes > 0 {
            self.fail_writes -= 1;
            return Err(MockError::Nack);
        }

        let start = u16::from_be_bytes([bytes[0], bytes[1]]);
        for (i, val) in bytes[2..].iter().enumerate() {
            let addr = start.wrapping_add(i as u16);
            if !self.stuck.contains_key(&addr) {
                self.regs.insert(addr, *val);
            }
        }
        self.writes.push(bytes.to_vec());
        Ok(())
    }
}

impl i2c::WriteRead for MockBus {
    type Error = MockError;

    fn write_read(
        &mut self,
        address: u8,
        bytes: &[u8],
        buffer: &mut [u8],
    ) -> Result<(), MockError> {
        if address != self.address || bytes.len() != 2 {
            return Err(MockError::Nack);
        }
        if self.fail_reads > 0 {
            self.fail_reads -= 1;
            return Err(MockError::Nack);
        }

        let start = u16::from_be_bytes([bytes[0], bytes[1]]);
        for (i, slot) in buffer.iter_mut().enumerate() {
            let addr = start.wrapping_add(i as u16);
            *slot = match self.stuck.get(&addr) {
                Some(val) => *val,
                None => self.reg(addr),
            };
        }
        self.reads.push(start);
        Ok(())
    }
}

/// Records requested waits instead of sleeping.
#[derive(Default)]
pub struct MockDelay {
    pub calls: Vec<u16>,
}

impl MockDelay {
    pub fn total_ms(&self) -> u32 {
        self.calls.iter().map(|ms| u32::from(*ms)).sum()
    }
}

impl DelayMs<u16> for MockDelay {
    fn delay_ms(&mut self, ms: u16) {
        self.calls.push(ms);
    }
}
