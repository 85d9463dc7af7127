//! vfdlink endpoint implementations
//!
//! The two halves of the link, built on the shared protocol schema:
//!
//! - [`remote::RemoteDisplay`] - controller role. Implements
//!   [`vfdlink_core::CharacterDisplay`] by serializing every call into one
//!   bus transaction, so application code cannot tell a remote display
//!   from a local one.
//! - [`port::CommandPort`] - peripheral role. Decodes one command per
//!   inbound transaction and dispatches it to the real display driver.
//!
//! Commands travel in the order they were issued: the bus serializes
//! transactions and the port processes exactly one frame per transaction.
//! There is no return channel; controller-side calls are fire-and-forget.

#![no_std]
#![deny(unsafe_code)]

pub mod port;
pub mod remote;

#[cfg(test)]
pub(crate) mod mock;

pub use port::{CommandPort, PortError, RecvError};
pub use remote::{RemoteDisplay, RemoteError};
