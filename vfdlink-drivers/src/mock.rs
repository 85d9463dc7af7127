//! Test doubles shared by the endpoint test modules

use core::convert::Infallible;

use heapless::{String, Vec};
use vfdlink_core::CharacterDisplay;
use vfdlink_hal::{BusController, BusPeripheral};
use vfdlink_protocol::{MAX_FRAME_LEN, MAX_PAYLOAD_LEN};

/// Frame-capture bus: records each closed transaction as (address, bytes).
pub struct MockBus {
    pub transactions: Vec<(u8, Vec<u8, MAX_FRAME_LEN>), 32>,
    current: Option<(u8, Vec<u8, MAX_FRAME_LEN>)>,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            current: None,
        }
    }
}

impl BusController for MockBus {
    type Error = Infallible;

    fn begin_transaction(&mut self, address: u8) -> Result<(), Self::Error> {
        assert!(self.current.is_none(), "transaction already open");
        self.current = Some((address, Vec::new()));
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        let (_, frame) = self.current.as_mut().expect("no open transaction");
        frame.push(byte).expect("frame over capacity");
        Ok(())
    }

    fn end_transaction(&mut self) -> Result<(), Self::Error> {
        let done = self.current.take().expect("no open transaction");
        self.transactions.push(done).expect("too many transactions");
        Ok(())
    }
}

/// Replays one inbound transaction byte-at-a-time.
pub struct SliceBus<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceBus<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl BusPeripheral for SliceBus<'_> {
    type Error = Infallible;

    fn read_byte(&mut self) -> Result<Option<u8>, Self::Error> {
        let byte = self.data.get(self.pos).copied();
        if byte.is_some() {
            self.pos += 1;
        }
        Ok(byte)
    }
}

/// One recorded display-driver invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Clear,
    Home,
    SetCursor(u8),
    SetCursorAt(u8, u8),
    DisplayOn,
    DisplayOff,
    CursorOn,
    CursorOff,
    BlinkOn,
    BlinkOff,
    ScrollLeft,
    ScrollRight,
    LeftToRight,
    RightToLeft,
    AutoscrollOn,
    AutoscrollOff,
    SetBrightness(u8),
    WriteChar(u8),
    WriteStr(String<MAX_PAYLOAD_LEN>),
    WriteBytes(Vec<u8, MAX_PAYLOAD_LEN>),
}

/// Display driver that records every operation in call order.
pub struct MockDisplay {
    pub calls: Vec<Call, 32>,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self { calls: Vec::new() }
    }

    fn record(&mut self, call: Call) -> Result<(), Infallible> {
        self.calls.push(call).expect("too many calls");
        Ok(())
    }
}

impl CharacterDisplay for MockDisplay {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.record(Call::Clear)
    }

    fn home(&mut self) -> Result<(), Self::Error> {
        self.record(Call::Home)
    }

    fn set_cursor(&mut self, pos: u8) -> Result<(), Self::Error> {
        self.record(Call::SetCursor(pos))
    }

    fn set_cursor_at(&mut self, col: u8, line: u8) -> Result<(), Self::Error> {
        self.record(Call::SetCursorAt(col, line))
    }

    fn display_on(&mut self) -> Result<(), Self::Error> {
        self.record(Call::DisplayOn)
    }

    fn display_off(&mut self) -> Result<(), Self::Error> {
        self.record(Call::DisplayOff)
    }

    fn cursor_on(&mut self) -> Result<(), Self::Error> {
        self.record(Call::CursorOn)
    }

    fn cursor_off(&mut self) -> Result<(), Self::Error> {
        self.record(Call::CursorOff)
    }

    fn blink_on(&mut self) -> Result<(), Self::Error> {
        self.record(Call::BlinkOn)
    }

    fn blink_off(&mut self) -> Result<(), Self::Error> {
        self.record(Call::BlinkOff)
    }

    fn scroll_left(&mut self) -> Result<(), Self::Error> {
        self.record(Call::ScrollLeft)
    }

    fn scroll_right(&mut self) -> Result<(), Self::Error> {
        self.record(Call::ScrollRight)
    }

    fn left_to_right(&mut self) -> Result<(), Self::Error> {
        self.record(Call::LeftToRight)
    }

    fn right_to_left(&mut self) -> Result<(), Self::Error> {
        self.record(Call::RightToLeft)
    }

    fn autoscroll_on(&mut self) -> Result<(), Self::Error> {
        self.record(Call::AutoscrollOn)
    }

    fn autoscroll_off(&mut self) -> Result<(), Self::Error> {
        self.record(Call::AutoscrollOff)
    }

    fn set_brightness(&mut self, level: u8) -> Result<(), Self::Error> {
        self.record(Call::SetBrightness(level))
    }

    fn write_char(&mut self, ch: u8) -> Result<(), Self::Error> {
        self.record(Call::WriteChar(ch))
    }

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        let mut stored = String::new();
        stored.push_str(text).expect("text over capacity");
        self.record(Call::WriteStr(stored))
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let mut stored = Vec::new();
        stored.extend_from_slice(data).expect("data over capacity");
        self.record(Call::WriteBytes(stored))
    }
}
