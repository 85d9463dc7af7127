//! vfdlink Bus Transport Abstraction
//!
//! The command protocol needs exactly four primitives from the bus: begin
//! an addressed transaction, write one byte, read one byte, end the
//! transaction. This crate defines those primitives as traits and ships a
//! generic adapter for any blocking `embedded-hal` I²C master.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Endpoints (vfdlink-drivers)            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  vfdlink-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  I2cController<I2C> over embedded-hal   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`bus::BusController`] - outbound transactions (controller role)
//! - [`bus::BusPeripheral`] - inbound transaction bytes (peripheral role)

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use bus::{BusController, BusPeripheral, MAX_TRANSACTION_LEN};
pub use i2c::{I2cConfig, I2cController, I2cError};
