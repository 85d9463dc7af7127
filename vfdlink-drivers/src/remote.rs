//! Controller-role encoder
//!
//! [`RemoteDisplay`] looks like a local display to the caller: every
//! [`CharacterDisplay`] operation serializes into one command frame and
//! one bus transaction addressed to the configured peripheral. No call
//! waits for acknowledgement; closing the transaction is the only
//! synchronization point.

use core::fmt;

use heapless::String;
use vfdlink_core::CharacterDisplay;
use vfdlink_hal::BusController;
use vfdlink_protocol::{Command, EncodeError, MAX_PAYLOAD_LEN};

/// Errors from the controller-side encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RemoteError<E> {
    /// Bus transport failure
    Bus(E),
    /// Command could not be encoded (oversized payload)
    Encode(EncodeError),
}

impl<E> From<EncodeError> for RemoteError<E> {
    fn from(err: EncodeError) -> Self {
        RemoteError::Encode(err)
    }
}

/// A character display reached across the bus.
pub struct RemoteDisplay<B> {
    bus: B,
    address: u8,
}

impl<B: BusController> RemoteDisplay<B> {
    /// Address a display peripheral on the given bus
    pub fn new(bus: B, address: u8) -> Self {
        Self { bus, address }
    }

    /// The configured peripheral address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying bus
    pub fn release(self) -> B {
        self.bus
    }

    /// Serialize one command into one bus transaction.
    fn send(&mut self, command: &Command<'_>) -> Result<(), RemoteError<B::Error>> {
        let frame = command.encode_to_vec()?;
        self.bus
            .begin_transaction(self.address)
            .map_err(RemoteError::Bus)?;
        for &byte in &frame {
            self.bus.write_byte(byte).map_err(RemoteError::Bus)?;
        }
        self.bus.end_transaction().map_err(RemoteError::Bus)
    }

    /// Compose formatted text into a bounded local buffer and forward it
    /// through the print-string path.
    ///
    /// Output longer than the 255-byte payload ceiling is rejected as
    /// [`EncodeError::PayloadTooLarge`] rather than truncated on the wire.
    pub fn print_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), RemoteError<B::Error>> {
        let mut text: String<MAX_PAYLOAD_LEN> = String::new();
        fmt::Write::write_fmt(&mut text, args)
            .map_err(|_| RemoteError::Encode(EncodeError::PayloadTooLarge))?;
        self.write_str(&text)
    }
}

impl<B: BusController> CharacterDisplay for RemoteDisplay<B> {
    type Error = RemoteError<B::Error>;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.send(&Command::Clear)
    }

    fn home(&mut self) -> Result<(), Self::Error> {
        self.send(&Command::Home)
    }

    fn set_cursor(&mut self, pos: u8) -> Result<(), Self::Error> {
        self.send(&Command::SetCursor(pos))
    }

    fn set_cursor_at(&mut self, col: u8, line: u8) -> Result<(), Self::Error> {
        self.send(&Command::SetCursorAt { col, line })
    }

    fn display_on(&mut self) -> Result<(), Self::Error> {
        self.send(&Command::DisplayOn)
    }

    fn display_off(&mut self) -> Result<(), Self::Error> {
        self.send(&Command::DisplayOff)
    }

    fn cursor_on(&mut self) -> Result<(), Self::Error> {
        self.send(&Command::CursorOn)
    }

    fn cursor_off(&mut self) -> Result<(), Self::Error> {
        self.send(&Command::CursorOff)
    }

    fn blink_on(&mut self) -> Result<(), Self::Error> {
        self.send(&Command::BlinkOn)
    }

    fn blink_off(&mut self) -> Result<(), Self::Error> {
        self.send(&Command::BlinkOff)
    }

    fn scroll_left(&mut self) -> Result<(), Self::Error> {
        self.send(&Command::ScrollLeft)
    }

    fn scroll_right(&mut self) -> Result<(), Self::Error> {
        self.send(&Command::ScrollRight)
    }

    fn left_to_right(&mut self) -> Result<(), Self::Error> {
        self.send(&Command::LeftToRight)
    }

    fn right_to_left(&mut self) -> Result<(), Self::Error> {
        self.send(&Command::RightToLeft)
    }

    fn autoscroll_on(&mut self) -> Result<(), Self::Error> {
        self.send(&Command::AutoscrollOn)
    }

    fn autoscroll_off(&mut self) -> Result<(), Self::Error> {
        self.send(&Command::AutoscrollOff)
    }

    fn set_brightness(&mut self, level: u8) -> Result<(), Self::Error> {
        self.send(&Command::SetBrightness(level))
    }

    fn write_char(&mut self, ch: u8) -> Result<(), Self::Error> {
        self.send(&Command::PrintChar(ch))
    }

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        self.send(&Command::PrintStr(text))
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.send(&Command::PrintBytes(data))
    }
}
