//! vfdlink Command Protocol
//!
//! This crate defines the command stream a controller uses to drive a
//! remote VFD-class character display across a shared two-wire bus. Both
//! endpoint roles import this crate, so the opcode table cannot drift
//! between them.
//!
//! # Protocol Overview
//!
//! Every display call becomes one command frame:
//! ```text
//! ┌────────┬────────────────────────────────┐
//! │ OPCODE │ ARGUMENTS                      │
//! │ 1B     │ 0–256B (shape fixed by opcode) │
//! └────────┴────────────────────────────────┘
//! ```
//!
//! There is no frame length prefix and no terminator: the opcode alone
//! determines how many argument bytes follow, and a frame boundary is a
//! bus transaction boundary. Variable-length payloads (print-string,
//! print-buffer) carry a single length byte followed by exactly that many
//! raw bytes.
//!
//! The wire format carries no checksums, acknowledgements, or version
//! field; commands are fire-and-forget. Conditions the original device
//! protocol left silent (unknown opcode, short transaction, oversized
//! payload) are surfaced as hard errors at this crate's API boundary
//! instead.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod opcode;
pub mod wire;

pub use command::Command;
pub use opcode::{ArgShape, Opcode};
pub use wire::{DecodeError, EncodeError, FrameReader, MAX_FRAME_LEN, MAX_PAYLOAD_LEN};
