//! Wire-level framing for command frames.
//!
//! A command frame is `[opcode][argument bytes]` with no length prefix for
//! the frame as a whole and no terminator. Frame boundaries are bus
//! transaction boundaries, so the decoder must know from the opcode alone
//! how many bytes to consume.

/// Maximum variable payload length; the length byte cannot represent more.
pub const MAX_PAYLOAD_LEN: usize = u8::MAX as usize;

/// Maximum complete frame size (OPCODE + LENGTH + MAX_PAYLOAD)
pub const MAX_FRAME_LEN: usize = 1 + 1 + MAX_PAYLOAD_LEN;

/// Errors that can occur while encoding a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Payload exceeds the one-byte length ceiling (255 bytes)
    PayloadTooLarge,
    /// Destination buffer too small for the frame
    BufferTooSmall,
}

/// Errors that can occur while decoding a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DecodeError {
    /// Opcode byte does not match any table entry
    UnknownOpcode(u8),
    /// The transaction ended before the opcode's argument bytes arrived
    UnexpectedEnd {
        /// Bytes the opcode still required
        expected: usize,
        /// Bytes actually left in the transaction
        available: usize,
    },
    /// String payload is not valid UTF-8
    Utf8,
}

/// Cursor over the bytes of one inbound transaction.
///
/// Reads declared-length slices atomically: a read that would run past the
/// end of the transaction fails with [`DecodeError::UnexpectedEnd`] and
/// consumes nothing, rather than yielding transport-defined garbage.
#[derive(Debug, Clone)]
pub struct FrameReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> FrameReader<'a> {
    /// Create a reader over the bytes of one transaction.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// True when every byte of the transaction has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Read one byte.
    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let byte = *self.data.get(self.pos).ok_or(DecodeError::UnexpectedEnd {
            expected: 1,
            available: 0,
        })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Read exactly `len` bytes as one slice.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let slice = self
            .data
            .get(self.pos..self.pos + len)
            .ok_or(DecodeError::UnexpectedEnd {
                expected: len,
                available: self.remaining(),
            })?;
        self.pos += len;
        Ok(slice)
    }
}
