//! Character display trait shared by both ends of the link

/// A character display, one operation per protocol opcode category.
///
/// On the peripheral this is implemented by the real display driver (the
/// chipset-specific rendering code is an external collaborator). On the
/// controller it is implemented by the remote encoder, so application code
/// is written once against this trait and runs against either end.
pub trait CharacterDisplay {
    /// Error type for display operations
    type Error;

    /// Clear the entire screen
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Move the cursor to the origin
    fn home(&mut self) -> Result<(), Self::Error>;

    /// Move the cursor to an absolute position
    fn set_cursor(&mut self, pos: u8) -> Result<(), Self::Error>;

    /// Move the cursor to a column and line (both 0-based)
    fn set_cursor_at(&mut self, col: u8, line: u8) -> Result<(), Self::Error>;

    /// Turn the display on
    fn display_on(&mut self) -> Result<(), Self::Error>;

    /// Turn the display off
    fn display_off(&mut self) -> Result<(), Self::Error>;

    /// Show the cursor
    fn cursor_on(&mut self) -> Result<(), Self::Error>;

    /// Hide the cursor
    fn cursor_off(&mut self) -> Result<(), Self::Error>;

    /// Enable cursor blink
    fn blink_on(&mut self) -> Result<(), Self::Error>;

    /// Disable cursor blink
    fn blink_off(&mut self) -> Result<(), Self::Error>;

    /// Scroll the display contents one position left
    fn scroll_left(&mut self) -> Result<(), Self::Error>;

    /// Scroll the display contents one position right
    fn scroll_right(&mut self) -> Result<(), Self::Error>;

    /// Set left-to-right text direction
    fn left_to_right(&mut self) -> Result<(), Self::Error>;

    /// Set right-to-left text direction
    fn right_to_left(&mut self) -> Result<(), Self::Error>;

    /// Enable autoscroll
    fn autoscroll_on(&mut self) -> Result<(), Self::Error>;

    /// Disable autoscroll
    fn autoscroll_off(&mut self) -> Result<(), Self::Error>;

    /// Set the brightness level
    fn set_brightness(&mut self, level: u8) -> Result<(), Self::Error>;

    /// Output a single character at the cursor
    fn write_char(&mut self, ch: u8) -> Result<(), Self::Error>;

    /// Output a string at the cursor
    fn write_str(&mut self, text: &str) -> Result<(), Self::Error>;

    /// Output a raw byte sequence at the cursor
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// Helper operations layered on [`CharacterDisplay`]
pub trait DisplayExt: CharacterDisplay {
    /// Write text starting at a column and line
    fn print_at(&mut self, col: u8, line: u8, text: &str) -> Result<(), Self::Error> {
        self.set_cursor_at(col, line)?;
        self.write_str(text)
    }

    /// Blank `width` cells of a line
    fn clear_line(&mut self, line: u8, width: u8) -> Result<(), Self::Error> {
        self.set_cursor_at(0, line)?;
        for _ in 0..width {
            self.write_char(b' ')?;
        }
        Ok(())
    }
}

// Blanket implementation for all CharacterDisplay types
impl<T: CharacterDisplay> DisplayExt for T {}
