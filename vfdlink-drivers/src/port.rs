//! Peripheral-role decoder and dispatcher
//!
//! [`CommandPort`] owns the real display driver and executes one command
//! per inbound transaction: read the opcode, pull exactly the argument
//! bytes that opcode names, invoke the matching driver operation. Decoded
//! payloads borrow from the transaction buffer and are gone when the
//! dispatch call returns.

use heapless::Vec;
use vfdlink_core::{CharacterDisplay, DisplayConfig};
use vfdlink_hal::BusPeripheral;
use vfdlink_protocol::{Command, DecodeError, FrameReader, MAX_FRAME_LEN};

/// Errors from processing one framed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortError<E> {
    /// The frame could not be decoded
    Decode(DecodeError),
    /// The display driver rejected the operation
    Display(E),
}

impl<E> From<DecodeError> for PortError<E> {
    fn from(err: DecodeError) -> Self {
        PortError::Decode(err)
    }
}

/// Errors from draining and processing an inbound transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RecvError<B, E> {
    /// Bus transport failure
    Bus(B),
    /// Transaction longer than the maximum command frame
    FrameOverrun,
    /// The frame could not be decoded
    Decode(DecodeError),
    /// The display driver rejected the operation
    Display(E),
}

impl<B, E> From<PortError<E>> for RecvError<B, E> {
    fn from(err: PortError<E>) -> Self {
        match err {
            PortError::Decode(e) => RecvError::Decode(e),
            PortError::Display(e) => RecvError::Display(e),
        }
    }
}

/// Command execution port in front of a display driver.
pub struct CommandPort<D> {
    display: D,
}

impl<D: CharacterDisplay> CommandPort<D> {
    /// Put a port in front of a display driver
    pub fn new(display: D) -> Self {
        Self { display }
    }

    /// Access the underlying display driver
    pub fn display(&mut self) -> &mut D {
        &mut self.display
    }

    /// Release the underlying display driver
    pub fn into_inner(self) -> D {
        self.display
    }

    /// Apply bring-up configuration to the display.
    ///
    /// Configuration is a bring-up concern, not a wire command: the
    /// brightness bootstrap and initial clear run locally before the
    /// first transaction arrives.
    pub fn apply_config(&mut self, config: &DisplayConfig) -> Result<(), D::Error> {
        self.display.set_brightness(config.brightness)?;
        self.display.clear()
    }

    /// Read and process one command from an already-framed transaction.
    ///
    /// Exactly one frame per invocation; bytes after the frame are not
    /// consumed (a transaction is expected to carry exactly one frame).
    pub fn process_frame(&mut self, frame: &[u8]) -> Result<(), PortError<D::Error>> {
        let mut reader = FrameReader::new(frame);
        let command = Command::decode(&mut reader)?;
        self.dispatch(command)
    }

    /// Drain the current inbound transaction and process its frame.
    pub fn process_transaction<R: BusPeripheral>(
        &mut self,
        rx: &mut R,
    ) -> Result<(), RecvError<R::Error, D::Error>> {
        let mut frame: Vec<u8, MAX_FRAME_LEN> = Vec::new();
        while let Some(byte) = rx.read_byte().map_err(RecvError::Bus)? {
            frame.push(byte).map_err(|_| RecvError::FrameOverrun)?;
        }
        self.process_frame(&frame).map_err(RecvError::from)
    }

    /// Invoke the display operation matching a decoded command.
    fn dispatch(&mut self, command: Command<'_>) -> Result<(), PortError<D::Error>> {
        let display = &mut self.display;
        match command {
            Command::Clear => display.clear(),
            Command::Home => display.home(),
            Command::SetCursor(pos) => display.set_cursor(pos),
            Command::SetCursorAt { col, line } => display.set_cursor_at(col, line),
            Command::DisplayOn => display.display_on(),
            Command::DisplayOff => display.display_off(),
            Command::CursorOn => display.cursor_on(),
            Command::CursorOff => display.cursor_off(),
            Command::BlinkOn => display.blink_on(),
            Command::BlinkOff => display.blink_off(),
            Command::ScrollLeft => display.scroll_left(),
            Command::ScrollRight => display.scroll_right(),
            Command::LeftToRight => display.left_to_right(),
            Command::RightToLeft => display.right_to_left(),
            Command::AutoscrollOn => display.autoscroll_on(),
            Command::AutoscrollOff => display.autoscroll_off(),
            Command::SetBrightness(level) => display.set_brightness(level),
            Command::PrintChar(ch) => display.write_char(ch),
            Command::PrintStr(text) => display.write_str(text),
            Command::PrintBytes(data) => display.write_bytes(data),
        }
        .map_err(PortError::Display)
    }
}
