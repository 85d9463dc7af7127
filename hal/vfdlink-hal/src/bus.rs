//! Bus transaction traits
//!
//! The protocol core assumes each transaction delivers bytes in the order
//! written and carries exactly one command frame. Only one transaction may
//! be open at a time; the whole path is synchronous.

/// Upper bound on one transaction's byte count.
///
/// One command frame is at most an opcode byte, a length byte, and a
/// 255-byte payload. A transaction longer than this cannot be a single
/// well-formed frame.
pub const MAX_TRANSACTION_LEN: usize = 257;

/// Controller side of the bus: outbound addressed transactions.
///
/// The transaction close is the only synchronization point and signals
/// nothing about peripheral-side success; the protocol is
/// fire-and-forget by design.
pub trait BusController {
    /// Error type for bus operations
    type Error;

    /// Open an outbound transaction addressed to a peripheral
    ///
    /// # Arguments
    /// * `address` - 7-bit bus address of the target peripheral
    fn begin_transaction(&mut self, address: u8) -> Result<(), Self::Error>;

    /// Write one byte into the open transaction
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Close the open transaction, releasing the bus
    fn end_transaction(&mut self) -> Result<(), Self::Error>;
}

/// Peripheral side of the bus: bytes of the current inbound transaction.
pub trait BusPeripheral {
    /// Error type for bus operations
    type Error;

    /// Read the next byte of the current transaction
    ///
    /// Returns `Ok(None)` once the transaction is exhausted, so a short
    /// transaction is detectable instead of yielding undefined bytes.
    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error>;
}
