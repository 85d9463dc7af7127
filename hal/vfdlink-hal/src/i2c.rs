//! I²C implementation of the controller-side bus
//!
//! Adapts any blocking `embedded-hal` I²C master to [`BusController`].
//! Bytes written during a transaction are buffered locally and flushed to
//! the device as a single bus write when the transaction closes, so the
//! command frame reaches the peripheral as one contiguous exchange.

use embedded_hal::i2c::I2c;
use heapless::Vec;

use crate::bus::{BusController, MAX_TRANSACTION_LEN};

/// I²C configuration
#[derive(Debug, Clone, Copy)]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self {
            frequency: 100_000, // 100kHz standard mode
        }
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz)
    pub const FAST: Self = Self { frequency: 400_000 };
}

/// Errors from the I²C controller adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cError<E> {
    /// Underlying I²C bus error
    Bus(E),
    /// Byte written or transaction closed with no transaction open
    NoTransaction,
    /// Transaction opened while another is still open
    TransactionOpen,
    /// Transaction exceeds the maximum frame size
    Overflow,
}

/// Controller-role bus over a blocking I²C master.
pub struct I2cController<I2C> {
    i2c: I2C,
    frame: Vec<u8, MAX_TRANSACTION_LEN>,
    target: Option<u8>,
}

impl<I2C: I2c> I2cController<I2C> {
    /// Wrap an I²C master
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            frame: Vec::new(),
            target: None,
        }
    }

    /// Release the underlying I²C master
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> BusController for I2cController<I2C> {
    type Error = I2cError<I2C::Error>;

    fn begin_transaction(&mut self, address: u8) -> Result<(), Self::Error> {
        if self.target.is_some() {
            return Err(I2cError::TransactionOpen);
        }
        self.frame.clear();
        self.target = Some(address);
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        if self.target.is_none() {
            return Err(I2cError::NoTransaction);
        }
        self.frame.push(byte).map_err(|_| I2cError::Overflow)
    }

    fn end_transaction(&mut self) -> Result<(), Self::Error> {
        let address = self.target.take().ok_or(I2cError::NoTransaction)?;
        self.i2c.write(address, &self.frame).map_err(I2cError::Bus)
    }
}
