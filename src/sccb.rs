//! A generic driver for the Serial Camera Control Bus on OmniVision image sensors with 16-bit
//! register addresses. Works on any microcontroller implementing the embedded-hal I2C
//! interface, as long as the bus supports a repeated start for register reads.

use crate::table::{Bursts, RegEntry, Step, TRANSFER_BUF_SIZE};
use crate::util::split_u16;
use core::marker::PhantomData;
use embedded_hal::blocking::{delay::DelayMs, i2c};
use heapless::{consts, LinearMap};

/// Statically allocated (size 32) linear map for mapping addresses (`u16`) to values (`u8`).
/// Entries are written in insertion order.
pub type RegMap = LinearMap<u16, u8, consts::U32>;

/// Bus settings for one sensor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Config {
    /// 7-bit device address, the I2C driver shifts it left by 1.
    pub address: u8,
    /// Extra attempts after a failed transfer.
    pub max_retries: u8,
    /// Pause between attempts.
    pub retry_delay_ms: u16,
    /// Longest bulk transfer in bytes, anything below 3 disables batching.
    pub burst_len: usize,
}

impl Config {
    pub const fn new(address: u8) -> Self {
        Config {
            address,
            max_retries: 3,
            retry_delay_ms: 3,
            burst_len: TRANSFER_BUF_SIZE,
        }
    }
}

/// SCCB driver.
pub struct Sccb<I2C> {
    /// Marker to ensure the same I2C type is used in all calls.
    i2c: PhantomData<I2C>,
    config: Config,
}

/// SCCB errors.
#[derive(Debug, Eq, PartialEq)]
pub enum SccbError<E> {
    /// I2C write error.
    I2cWrite(E),
    /// I2C read error.
    I2cRead(E),
    /// Register write-readback mismatch.
    RegMismatch((u16, u8)),
}

impl<I2C, E> Sccb<I2C>
where
    I2C: i2c::Write<Error = E> + i2c::WriteRead<Error = E>,
{
    /// Creates a new SCCB driver associated with an I2C peripheral.
    pub fn new(_i2c: &I2C, config: Config) -> Self {
        Sccb {
            i2c: PhantomData,
            config,
        }
    }

    /// Device I2C address.
    pub fn address(&self) -> u8 {
        self.config.address
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read a register: the address goes out high byte first, then one byte is read back after
    /// a repeated start.
    pub fn read_register(&self, i2c: &mut I2C, reg: u16) -> Result<u8, SccbError<E>> {
        let (hi, lo) = split_u16(reg);
        let mut buf = [0x00];
        i2c.write_read(self.config.address, &[hi, lo], &mut buf)
            .map_err(SccbError::I2cRead)?;
        Ok(buf[0])
    }

    /// Read a 16-bit quantity stored as `reg` (MSB) and `reg + 1` (LSB).
    pub fn read_register_pair(&self, i2c: &mut I2C, reg: u16) -> Result<u16, SccbError<E>> {
        let msb: u16 = self.read_register(i2c, reg)?.into();
        let lsb: u16 = self.read_register(i2c, reg.wrapping_add(1))?.into();
        Ok((msb << 8) | lsb)
    }

    /// Write a register, retrying on failure.
    pub fn write_register<D: DelayMs<u16>>(
        &self,
        i2c: &mut I2C,
        delay: &mut D,
        reg: u16,
        val: u8,
    ) -> Result<(), SccbError<E>> {
        let (hi, lo) = split_u16(reg);
        self.write_retrying(i2c, delay, &[hi, lo, val])
    }

    /// Read a register, set the bits in `set`, clear the bits in `unset` and write it back.
    pub fn modify_register<D: DelayMs<u16>>(
        &self,
        i2c: &mut I2C,
        delay: &mut D,
        reg: u16,
        set: u8,
        unset: u8,
    ) -> Result<(), SccbError<E>> {
        let val = self.read_register(i2c, reg)?;
        self.write_register(i2c, delay, reg, (val | set) & !unset)
    }

    /// Apply a vendor register table, merging consecutive addresses into bulk transfers.
    pub fn write_table<D: DelayMs<u16>>(
        &self,
        i2c: &mut I2C,
        delay: &mut D,
        table: &[RegEntry],
    ) -> Result<(), SccbError<E>> {
        for step in Bursts::new(table, self.config.burst_len) {
            match step {
                Step::Wait(ms) => delay.delay_ms(ms),
                Step::Write(buf) => {
                    if let Err(e) = self.write_retrying(i2c, delay, &buf) {
                        rprintln!(
                            "sccb: bulk transfer failed at {:04x}",
                            u16::from_be_bytes([buf[0], buf[1]])
                        );
                        return Err(e);
                    }
                }
            }
        }

        Ok(())
    }

    /// Apply a register configuration specified by the linear map.
    pub fn apply_config<D: DelayMs<u16>>(
        &self,
        i2c: &mut I2C,
        delay: &mut D,
        map: &RegMap,
        do_readback: bool,
    ) -> Result<(), SccbError<E>> {
        for (reg, val) in map.iter() {
            // Write the register
            self.write_register(i2c, delay, *reg, *val)?;

            // Readback to check the write register worked
            if do_readback {
                let readback = self.read_register(i2c, *reg)?;
                if readback != *val {
                    return Err(SccbError::RegMismatch((*reg, readback)));
                }
            }
        }

        Ok(())
    }

    /// Send one transfer, giving the bus `max_retries` more chances if it fails.
    fn write_retrying<D: DelayMs<u16>>(
        &self,
        i2c: &mut I2C,
        delay: &mut D,
        buf: &[u8],
    ) -> Result<(), SccbError<E>> {
        let mut retry: u16 = 0;
        loop {
            match i2c.write(self.config.address, buf) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    retry += 1;
                    rprintln!(
                        "sccb: i2c transfer failed, retrying {:02x}{:02x} ({} bytes)",
                        buf[0],
                        buf[1],
                        buf.len()
                    );
                    delay.delay_ms(self.config.retry_delay_ms);
                    if retry > u16::from(self.config.max_retries) {
                        return Err(SccbError::I2cWrite(e));
                    }
                }
            }
        }
    }
}
