//! Display commands and their wire codec.
//!
//! [`Command`] is the closed sum type both ends of the link agree on. The
//! argument shape of every opcode is carried directly in its variant, so a
//! wrong argument count is unrepresentable; the encoder and decoder below
//! are the two halves that must stay bit-exact.

use heapless::Vec;

use crate::opcode::Opcode;
use crate::wire::{DecodeError, EncodeError, FrameReader, MAX_FRAME_LEN, MAX_PAYLOAD_LEN};

/// One display-control command.
///
/// Variable payloads borrow from the frame they were decoded from, so a
/// decoded command never outlives its transaction buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command<'a> {
    /// Clear the screen
    Clear,
    /// Move the cursor to the origin
    Home,
    /// Move the cursor to an absolute position
    SetCursor(u8),
    /// Move the cursor to a column and line
    SetCursorAt {
        /// Column, 0-based
        col: u8,
        /// Line, 0-based
        line: u8,
    },
    /// Turn the display on
    DisplayOn,
    /// Turn the display off
    DisplayOff,
    /// Show the cursor
    CursorOn,
    /// Hide the cursor
    CursorOff,
    /// Enable cursor blink
    BlinkOn,
    /// Disable cursor blink
    BlinkOff,
    /// Scroll the display contents left
    ScrollLeft,
    /// Scroll the display contents right
    ScrollRight,
    /// Set left-to-right text direction
    LeftToRight,
    /// Set right-to-left text direction
    RightToLeft,
    /// Enable autoscroll
    AutoscrollOn,
    /// Disable autoscroll
    AutoscrollOff,
    /// Set the brightness level
    SetBrightness(u8),
    /// Print a single character
    PrintChar(u8),
    /// Print a string (length-prefixed UTF-8 on the wire, no terminator)
    PrintStr(&'a str),
    /// Print a raw byte sequence (length-prefixed on the wire)
    PrintBytes(&'a [u8]),
}

impl<'a> Command<'a> {
    /// The wire tag for this command.
    pub fn opcode(&self) -> Opcode {
        match self {
            Command::Clear => Opcode::Clear,
            Command::Home => Opcode::Home,
            Command::SetCursor(_) => Opcode::SetCursor,
            Command::SetCursorAt { .. } => Opcode::SetCursorAt,
            Command::DisplayOn => Opcode::DisplayOn,
            Command::DisplayOff => Opcode::DisplayOff,
            Command::CursorOn => Opcode::CursorOn,
            Command::CursorOff => Opcode::CursorOff,
            Command::BlinkOn => Opcode::BlinkOn,
            Command::BlinkOff => Opcode::BlinkOff,
            Command::ScrollLeft => Opcode::ScrollLeft,
            Command::ScrollRight => Opcode::ScrollRight,
            Command::LeftToRight => Opcode::LeftToRight,
            Command::RightToLeft => Opcode::RightToLeft,
            Command::AutoscrollOn => Opcode::AutoscrollOn,
            Command::AutoscrollOff => Opcode::AutoscrollOff,
            Command::SetBrightness(_) => Opcode::SetBrightness,
            Command::PrintChar(_) => Opcode::PrintChar,
            Command::PrintStr(_) => Opcode::PrintStr,
            Command::PrintBytes(_) => Opcode::PrintBytes,
        }
    }

    /// Variable payload bytes, if this command carries any.
    fn payload(&self) -> Option<&'a [u8]> {
        match self {
            Command::PrintStr(text) => Some(text.as_bytes()),
            Command::PrintBytes(data) => Some(data),
            _ => None,
        }
    }

    /// Number of bytes this command occupies on the wire.
    pub fn encoded_len(&self) -> usize {
        1 + match self {
            Command::SetCursor(_) | Command::SetBrightness(_) | Command::PrintChar(_) => 1,
            Command::SetCursorAt { .. } => 2,
            Command::PrintStr(text) => 1 + text.len(),
            Command::PrintBytes(data) => 1 + data.len(),
            _ => 0,
        }
    }

    /// Encode this command into `buffer`.
    ///
    /// Returns the number of bytes written. A payload longer than 255
    /// bytes is rejected rather than truncated: a wrapped length byte
    /// would corrupt the frame boundary for every later command in the
    /// same transaction.
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, EncodeError> {
        if let Some(payload) = self.payload() {
            if payload.len() > MAX_PAYLOAD_LEN {
                return Err(EncodeError::PayloadTooLarge);
            }
        }

        let frame_len = self.encoded_len();
        if buffer.len() < frame_len {
            return Err(EncodeError::BufferTooSmall);
        }

        buffer[0] = self.opcode().as_u8();
        match *self {
            Command::SetCursor(pos) => buffer[1] = pos,
            Command::SetCursorAt { col, line } => {
                buffer[1] = col;
                buffer[2] = line;
            }
            Command::SetBrightness(level) => buffer[1] = level,
            Command::PrintChar(ch) => buffer[1] = ch,
            Command::PrintStr(text) => put_payload(buffer, text.as_bytes()),
            Command::PrintBytes(data) => put_payload(buffer, data),
            _ => {}
        }

        Ok(frame_len)
    }

    /// Encode this command into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_LEN>, EncodeError> {
        let mut buffer = [0u8; MAX_FRAME_LEN];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| EncodeError::BufferTooSmall)?;
        Ok(vec)
    }

    /// Decode exactly one command, consuming its opcode and argument bytes.
    ///
    /// Leaves any bytes after the frame in the reader; the number of bytes
    /// consumed always equals what [`Command::encode`] wrote for the same
    /// command.
    pub fn decode(reader: &mut FrameReader<'a>) -> Result<Self, DecodeError> {
        let byte = reader.read_u8()?;
        let opcode = Opcode::from_u8(byte).ok_or(DecodeError::UnknownOpcode(byte))?;

        Ok(match opcode {
            Opcode::Clear => Command::Clear,
            Opcode::Home => Command::Home,
            Opcode::SetCursor => Command::SetCursor(reader.read_u8()?),
            Opcode::SetCursorAt => {
                let col = reader.read_u8()?;
                let line = reader.read_u8()?;
                Command::SetCursorAt { col, line }
            }
            Opcode::DisplayOn => Command::DisplayOn,
            Opcode::DisplayOff => Command::DisplayOff,
            Opcode::CursorOn => Command::CursorOn,
            Opcode::CursorOff => Command::CursorOff,
            Opcode::BlinkOn => Command::BlinkOn,
            Opcode::BlinkOff => Command::BlinkOff,
            Opcode::ScrollLeft => Command::ScrollLeft,
            Opcode::ScrollRight => Command::ScrollRight,
            Opcode::LeftToRight => Command::LeftToRight,
            Opcode::RightToLeft => Command::RightToLeft,
            Opcode::AutoscrollOn => Command::AutoscrollOn,
            Opcode::AutoscrollOff => Command::AutoscrollOff,
            Opcode::SetBrightness => Command::SetBrightness(reader.read_u8()?),
            Opcode::PrintChar => Command::PrintChar(reader.read_u8()?),
            Opcode::PrintStr => {
                let payload = read_payload(reader)?;
                let text = core::str::from_utf8(payload).map_err(|_| DecodeError::Utf8)?;
                Command::PrintStr(text)
            }
            Opcode::PrintBytes => Command::PrintBytes(read_payload(reader)?),
        })
    }

    /// Decode a single command frame (one frame per bus transaction).
    pub fn decode_frame(frame: &'a [u8]) -> Result<Self, DecodeError> {
        let mut reader = FrameReader::new(frame);
        Self::decode(&mut reader)
    }
}

/// Shared length-prefixed payload rule: `buffer[1]` is the byte count,
/// followed by exactly that many raw bytes. Length fits in one byte; the
/// caller has already enforced the 255-byte ceiling.
fn put_payload(buffer: &mut [u8], payload: &[u8]) {
    buffer[1] = payload.len() as u8;
    buffer[2..2 + payload.len()].copy_from_slice(payload);
}

/// Decode half of the payload rule: read the length byte, then exactly
/// that many bytes. The length is a byte count, not a character count.
fn read_payload<'a>(reader: &mut FrameReader<'a>) -> Result<&'a [u8], DecodeError> {
    let len = reader.read_u8()? as usize;
    reader.read_bytes(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcode::ArgShape;
    use proptest::prelude::*;

    static FILL_255: [u8; 255] = [0x5A; 255];
    static FILL_256: [u8; 256] = [0x5A; 256];

    fn every_command() -> [Command<'static>; 20] {
        [
            Command::Clear,
            Command::Home,
            Command::SetCursor(17),
            Command::SetCursorAt { col: 3, line: 1 },
            Command::DisplayOn,
            Command::DisplayOff,
            Command::CursorOn,
            Command::CursorOff,
            Command::BlinkOn,
            Command::BlinkOff,
            Command::ScrollLeft,
            Command::ScrollRight,
            Command::LeftToRight,
            Command::RightToLeft,
            Command::AutoscrollOn,
            Command::AutoscrollOff,
            Command::SetBrightness(80),
            Command::PrintChar(b'A'),
            Command::PrintStr("OK"),
            Command::PrintBytes(&[0x00, 0xFF, 0x10]),
        ]
    }

    #[test]
    fn test_roundtrip_every_command() {
        for command in every_command() {
            let frame = command.encode_to_vec().unwrap();
            let decoded = Command::decode_frame(&frame).unwrap();
            assert_eq!(decoded, command);
        }
    }

    #[test]
    fn test_consumed_equals_written() {
        // Lockstep invariant: the decoder consumes exactly the bytes the
        // encoder wrote, for every opcode shape.
        for command in every_command() {
            let mut buffer = [0u8; MAX_FRAME_LEN];
            let written = command.encode(&mut buffer).unwrap();
            assert_eq!(written, command.encoded_len());

            let mut reader = FrameReader::new(&buffer[..written]);
            Command::decode(&mut reader).unwrap();
            assert_eq!(reader.consumed(), written);
            assert!(reader.is_empty());
        }
    }

    #[test]
    fn test_variable_payload_lengths() {
        for len in [0usize, 1, 254, 255] {
            let data = &FILL_255[..len];
            let command = Command::PrintBytes(data);
            let frame = command.encode_to_vec().unwrap();
            assert_eq!(frame.len(), 2 + len);
            assert_eq!(frame[1] as usize, len);

            let mut reader = FrameReader::new(&frame);
            let decoded = Command::decode(&mut reader).unwrap();
            assert_eq!(decoded, command);
            assert!(reader.is_empty());
        }
    }

    #[test]
    fn test_payload_over_ceiling_rejected() {
        let command = Command::PrintBytes(&FILL_256);
        let mut buffer = [0u8; 300];
        assert_eq!(command.encode(&mut buffer), Err(EncodeError::PayloadTooLarge));
        assert_eq!(command.encode_to_vec(), Err(EncodeError::PayloadTooLarge));
    }

    #[test]
    fn test_string_payload_at_ceiling() {
        // 255 ASCII bytes survive intact
        let text = core::str::from_utf8(&FILL_255).unwrap();
        let frame = Command::PrintStr(text).encode_to_vec().unwrap();
        assert_eq!(frame.len(), 257);
        assert_eq!(Command::decode_frame(&frame).unwrap(), Command::PrintStr(text));
    }

    #[test]
    fn test_no_arg_ops_are_identical_frames() {
        let first = Command::Clear.encode_to_vec().unwrap();
        let second = Command::Clear.encode_to_vec().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.as_slice(), &[Opcode::Clear.as_u8()]);
    }

    #[test]
    fn test_sequential_frames_decode_in_order() {
        let sequence = [
            Command::Home,
            Command::SetCursorAt { col: 2, line: 0 },
            Command::PrintStr("OK"),
        ];

        let mut buffer = [0u8; 64];
        let mut used = 0;
        for command in &sequence {
            used += command.encode(&mut buffer[used..]).unwrap();
        }

        let mut reader = FrameReader::new(&buffer[..used]);
        for command in &sequence {
            assert_eq!(&Command::decode(&mut reader).unwrap(), command);
        }
        assert!(reader.is_empty());
    }

    #[test]
    fn test_unknown_opcode() {
        assert_eq!(
            Command::decode_frame(&[0xEE]),
            Err(DecodeError::UnknownOpcode(0xEE))
        );
    }

    #[test]
    fn test_truncated_fixed_args() {
        // SetCursorAt needs two argument bytes; only one arrived
        let frame = [Opcode::SetCursorAt.as_u8(), 3];
        assert_eq!(
            Command::decode_frame(&frame),
            Err(DecodeError::UnexpectedEnd {
                expected: 1,
                available: 0
            })
        );
    }

    #[test]
    fn test_truncated_payload() {
        // Declared 5 payload bytes, transaction carries 2
        let frame = [Opcode::PrintBytes.as_u8(), 5, 0xAA, 0xBB];
        assert_eq!(
            Command::decode_frame(&frame),
            Err(DecodeError::UnexpectedEnd {
                expected: 5,
                available: 2
            })
        );
    }

    #[test]
    fn test_invalid_utf8_string() {
        let frame = [Opcode::PrintStr.as_u8(), 2, 0xFF, 0xFE];
        assert_eq!(Command::decode_frame(&frame), Err(DecodeError::Utf8));
    }

    #[test]
    fn test_encoded_len_matches_arg_shape() {
        for command in every_command() {
            let expected = match command.opcode().arg_shape() {
                ArgShape::None => 1,
                ArgShape::Byte => 2,
                ArgShape::TwoBytes => 3,
                ArgShape::LengthPrefixed => 2 + command.payload().unwrap().len(),
            };
            assert_eq!(command.encoded_len(), expected);
        }
    }

    proptest! {
        #[test]
        fn prop_print_bytes_roundtrip(data in proptest::collection::vec(any::<u8>(), 0..=255)) {
            let command = Command::PrintBytes(&data);
            let frame = command.encode_to_vec().unwrap();
            prop_assert_eq!(Command::decode_frame(&frame).unwrap(), command);
        }

        #[test]
        fn prop_print_str_roundtrip(text in "[ -~]{0,255}") {
            let command = Command::PrintStr(&text);
            let frame = command.encode_to_vec().unwrap();
            prop_assert_eq!(Command::decode_frame(&frame).unwrap(), command);
        }

        #[test]
        fn prop_cursor_roundtrip(col: u8, line: u8) {
            let command = Command::SetCursorAt { col, line };
            let frame = command.encode_to_vec().unwrap();
            prop_assert_eq!(Command::decode_frame(&frame).unwrap(), command);
        }

        #[test]
        fn prop_single_byte_args_roundtrip(value: u8) {
            for command in [
                Command::SetCursor(value),
                Command::SetBrightness(value),
                Command::PrintChar(value),
            ] {
                let frame = command.encode_to_vec().unwrap();
                prop_assert_eq!(Command::decode_frame(&frame).unwrap(), command);
            }
        }
    }
}
