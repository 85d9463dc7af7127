//! The shared opcode table.
//!
//! Each display operation is identified by a single-byte tag. The table is
//! the protocol's only versioning mechanism: there is no version field on
//! the wire, so values are append-only. Renumbering an existing entry
//! breaks deployed peripherals silently.

/// Argument bytes that follow an opcode on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgShape {
    /// No argument bytes.
    None,
    /// One fixed argument byte.
    Byte,
    /// Two fixed argument bytes.
    TwoBytes,
    /// One length byte, then exactly that many payload bytes.
    LengthPrefixed,
}

/// Single-byte command tag.
///
/// Values reproduce the original device enumeration order and must never
/// be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Opcode {
    /// Clear the screen.
    Clear = 0x00,
    /// Move the cursor to the origin.
    Home = 0x01,
    /// Move the cursor to an absolute position.
    SetCursor = 0x02,
    /// Move the cursor to a column and line.
    SetCursorAt = 0x03,
    /// Turn the display on.
    DisplayOn = 0x04,
    /// Turn the display off.
    DisplayOff = 0x05,
    /// Show the cursor.
    CursorOn = 0x06,
    /// Hide the cursor.
    CursorOff = 0x07,
    /// Enable cursor blink.
    BlinkOn = 0x08,
    /// Disable cursor blink.
    BlinkOff = 0x09,
    /// Scroll the display contents left.
    ScrollLeft = 0x0A,
    /// Scroll the display contents right.
    ScrollRight = 0x0B,
    /// Set left-to-right text direction.
    LeftToRight = 0x0C,
    /// Set right-to-left text direction.
    RightToLeft = 0x0D,
    /// Enable autoscroll.
    AutoscrollOn = 0x0E,
    /// Disable autoscroll.
    AutoscrollOff = 0x0F,
    /// Set the brightness level.
    SetBrightness = 0x10,
    /// Print a single character.
    PrintChar = 0x11,
    /// Print a length-prefixed UTF-8 string.
    PrintStr = 0x12,
    /// Print a length-prefixed raw byte sequence.
    PrintBytes = 0x13,
}

impl Opcode {
    /// The full closed set, in wire-value order.
    pub const ALL: [Opcode; 20] = [
        Opcode::Clear,
        Opcode::Home,
        Opcode::SetCursor,
        Opcode::SetCursorAt,
        Opcode::DisplayOn,
        Opcode::DisplayOff,
        Opcode::CursorOn,
        Opcode::CursorOff,
        Opcode::BlinkOn,
        Opcode::BlinkOff,
        Opcode::ScrollLeft,
        Opcode::ScrollRight,
        Opcode::LeftToRight,
        Opcode::RightToLeft,
        Opcode::AutoscrollOn,
        Opcode::AutoscrollOff,
        Opcode::SetBrightness,
        Opcode::PrintChar,
        Opcode::PrintStr,
        Opcode::PrintBytes,
    ];

    /// Parse an opcode from its wire byte.
    pub fn from_u8(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Opcode::Clear),
            0x01 => Some(Opcode::Home),
            0x02 => Some(Opcode::SetCursor),
            0x03 => Some(Opcode::SetCursorAt),
            0x04 => Some(Opcode::DisplayOn),
            0x05 => Some(Opcode::DisplayOff),
            0x06 => Some(Opcode::CursorOn),
            0x07 => Some(Opcode::CursorOff),
            0x08 => Some(Opcode::BlinkOn),
            0x09 => Some(Opcode::BlinkOff),
            0x0A => Some(Opcode::ScrollLeft),
            0x0B => Some(Opcode::ScrollRight),
            0x0C => Some(Opcode::LeftToRight),
            0x0D => Some(Opcode::RightToLeft),
            0x0E => Some(Opcode::AutoscrollOn),
            0x0F => Some(Opcode::AutoscrollOff),
            0x10 => Some(Opcode::SetBrightness),
            0x11 => Some(Opcode::PrintChar),
            0x12 => Some(Opcode::PrintStr),
            0x13 => Some(Opcode::PrintBytes),
            _ => None,
        }
    }

    /// Convert to the wire byte.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Argument shape for this opcode.
    ///
    /// The decoder consumes exactly the bytes this shape names; any
    /// mismatch with the encoder would desynchronize the stream, so the
    /// shape is defined here once for both sides.
    pub fn arg_shape(self) -> ArgShape {
        match self {
            Opcode::SetCursor | Opcode::SetBrightness | Opcode::PrintChar => ArgShape::Byte,
            Opcode::SetCursorAt => ArgShape::TwoBytes,
            Opcode::PrintStr | Opcode::PrintBytes => ArgShape::LengthPrefixed,
            _ => ArgShape::None,
        }
    }
}
