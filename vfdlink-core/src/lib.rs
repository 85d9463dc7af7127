//! Board-agnostic core layer for the vfdlink display link
//!
//! This crate contains everything that does not depend on a concrete bus
//! or display chipset:
//!
//! - The [`traits::CharacterDisplay`] trait, one operation per protocol
//!   opcode category
//! - Convenience helpers layered on the trait ([`traits::DisplayExt`])
//! - Configuration-time types ([`config::DisplayConfig`])
//!
//! Both endpoint roles program against [`traits::CharacterDisplay`]: the
//! controller-side encoder implements it by serializing commands onto the
//! bus, and the peripheral-side dispatcher invokes it on a real driver.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod traits;

pub use config::DisplayConfig;
pub use traits::{CharacterDisplay, DisplayExt};
