#![cfg_attr(not(test), no_std)]

pub mod configs;
pub mod registers;
pub mod types;

use embedded_hal::i2c::I2c;
use log::debug;

use registers::*;

pub use configs::*;
pub use types::*;

/// Trait alias to support both I2c<SevenBitAddress> and I2c without address mode.
pub trait CompatibleI2c<E>: I2c<Error = E> {}
impl<T, E> CompatibleI2c<E> for T where T: I2c<Error = E> {}

// I2C addresses selected by the SA1/SA0 board straps
pub const DEFAULT_ADDRESS: u8 = 0x1E; // SA1=0 SA0=0
pub const ADDRESS_SA0: u8 = 0x1D; // SA1=0 SA0=1
pub const ADDRESS_SA1: u8 = 0x1C; // SA1=1 SA0=0
pub const ADDRESS_SA1_SA0: u8 = 0x1F; // SA1=1 SA0=1

// WHO_AM_I value of production devices
pub const WHO_AM_I_VAL: u8 = 0xC7;

// Maximum bus frequency the chip supports
pub const I2C_MAX_FREQUENCY: u32 = 400_000;

// 6 channels of two bytes, burst-read from MOutXMsb with hybrid auto-increment
pub const READ_LEN: usize = 12;

const UINT14_MAX: u16 = 16383;

// Largest config block is the five control registers
const WRITE_BUF_LEN: usize = 6;

#[derive(Debug)]
pub enum Error<E> {
    I2c(E),
    InvalidDevice,
    NotEnabled,
    BlockTooLong(usize),
}

pub struct Fxos8700cq<I2C, E> {
    i2c: I2C,
    address: u8,
    enabled: bool,
    _error: core::marker::PhantomData<E>,
}

impl<I2C, E> Fxos8700cq<I2C, E> {
    pub fn i2c(&mut self) -> &mut I2C {
        &mut self.i2c
    }
}

impl<I2C, E> Fxos8700cq<I2C, E>
where
    I2C: CompatibleI2c<E>,
    E: core::fmt::Debug,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            enabled: false,
            _error: core::marker::PhantomData,
        }
    }

    pub fn default(i2c: I2C) -> Self {
        Self::new(i2c, DEFAULT_ADDRESS)
    }

    pub fn destroy(self) -> I2C {
        self.i2c
    }

    pub fn who_am_i(&mut self) -> Result<u8, Error<E>> {
        self.read_reg(Reg::WhoAmI.addr())
    }

    pub fn init(&mut self) -> Result<(), Error<E>> {
        let id = self.who_am_i()?;
        if id != WHO_AM_I_VAL {
            return Err(Error::InvalidDevice);
        }

        // Control registers only accept writes in standby
        self.apply_config(CONFIG_STANDBY)?;
        self.apply_config(CONFIG_HYBRID_400HZ)?;
        self.enabled = false;
        Ok(())
    }

    pub fn enable(&mut self) -> Result<(), Error<E>> {
        let ctrl1 = self.read_reg(Reg::CtrlReg1.addr())?;
        self.write_reg(Reg::CtrlReg1.addr(), ctrl1 | CtrlReg1Flags::ACTIVE.bits())?;
        self.enabled = true;
        Ok(())
    }

    pub fn disable(&mut self) -> Result<(), Error<E>> {
        let ctrl1 = self.read_reg(Reg::CtrlReg1.addr())?;
        self.write_reg(Reg::CtrlReg1.addr(), ctrl1 & !CtrlReg1Flags::ACTIVE.bits())?;
        self.enabled = false;
        Ok(())
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn status(&mut self) -> Result<u8, Error<E>> {
        self.read_reg(Reg::Status.addr())
    }

    pub fn read_data(&mut self) -> Result<(AccelSample, MagSample), Error<E>> {
        if !self.enabled {
            return Err(Error::NotEnabled);
        }

        let mut raw = [0u8; READ_LEN];
        self.read_bytes(Reg::MOutXMsb.addr(), &mut raw)?;

        // 16-bit, 2's complement, right-justified magnetometer data
        let mag = MagSample {
            x: i16::from_be_bytes([raw[0], raw[1]]),
            y: i16::from_be_bytes([raw[2], raw[3]]),
            z: i16::from_be_bytes([raw[4], raw[5]]),
        };

        // 14-bit, 2's complement, left-justified accelerometer data
        let accel = AccelSample {
            x: accel_sample_from_raw(u16::from_be_bytes([raw[6], raw[7]])),
            y: accel_sample_from_raw(u16::from_be_bytes([raw[8], raw[9]])),
            z: accel_sample_from_raw(u16::from_be_bytes([raw[10], raw[11]])),
        };

        Ok((accel, mag))
    }

    pub fn accel_scale(&mut self) -> Result<Option<u8>, Error<E>> {
        let cfg = self.read_reg(Reg::XyzDataCfg.addr())?;

        let fs = (cfg & XYZ_FS_MASK) >> XYZ_FS_LOC;
        match fs {
            0x00 => Ok(Some(2)),
            0x01 => Ok(Some(4)),
            0x02 => Ok(Some(8)),
            _ => Ok(None),
        }
    }

    pub fn read_reg(&mut self, reg: u8) -> Result<u8, Error<E>> {
        let mut buf = [0u8];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .map_err(Error::I2c)?;
        Ok(buf[0])
    }

    pub fn write_reg(&mut self, reg: u8, val: u8) -> Result<(), Error<E>> {
        self.i2c
            .write(self.address, &[reg, val])
            .map_err(Error::I2c)?;
        Ok(())
    }

    pub fn read_bytes(&mut self, start_reg: u8, buffer: &mut [u8]) -> Result<(), Error<E>> {
        self.i2c
            .write_read(self.address, &[start_reg], buffer)
            .map_err(Error::I2c)
    }

    // One transaction, the device register pointer auto-increments across the run
    pub fn write_bytes(&mut self, start_reg: u8, values: &[u8]) -> Result<(), Error<E>> {
        if values.len() >= WRITE_BUF_LEN {
            return Err(Error::BlockTooLong(values.len()));
        }

        let mut buf = [0u8; WRITE_BUF_LEN];
        buf[0] = start_reg;
        buf[1..=values.len()].copy_from_slice(values);
        self.i2c
            .write(self.address, &buf[..=values.len()])
            .map_err(Error::I2c)
    }

    pub fn apply_config(&mut self, config: &[RegBlock]) -> Result<(), Error<E>> {
        for block in config {
            debug!(
                "write_regs {:<10}({:#04X}) = {:02X?}",
                block.start.name(),
                block.start.addr(),
                block.values
            );
            self.write_bytes(block.start.addr(), block.values)?;
        }
        Ok(())
    }

    pub fn dump_config(&mut self, regs: &[Reg]) -> Result<(), Error<E>> {
        for reg in regs {
            let val = self.read_reg(reg.addr())?;
            debug!(
                "{:<10}({:#04X}): 0x{:02X} ({:>3}) 0b{:08b}",
                reg.name(),
                reg.addr(),
                val,
                val,
                val
            );
        }
        Ok(())
    }
}

// Readings above half the 14-bit range carry the effective sign bit
fn accel_sample_from_raw(raw: u16) -> i16 {
    if raw > UINT14_MAX / 2 {
        (raw as i32 - UINT14_MAX as i32) as i16
    } else {
        raw as i16
    }
}
