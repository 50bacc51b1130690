//! The LCD1602 driver

use embedded_hal::delay::DelayNs;

use crate::{
    command::{Command, CommandSet, MoveDirection, RegisterSelection, ShiftType, State},
    error::Error,
    sender::SendCommand,
};

mod init;

pub use init::Config;

/// Characters per row
pub const COLUMNS: u8 = 16;
/// Rows on the display
pub const ROWS: u8 = 2;
/// DDRAM address of the first column of the second row
pub const SECOND_ROW_OFFSET: u8 = 0x40;

/// Drive an LCD1602 through a [`SendCommand`] sender
///
/// The driver never reads the LCD back, so it keeps no display state:
/// every method re-asserts the register it needs and sends fresh instructions.
pub struct Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    sender: &'a mut Sender,
    delayer: &'b mut Delayer,
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    /// Return cursor to (0, 0), content is kept
    pub fn home(&mut self) -> Result<(), Error<Sender::Error>> {
        self.send(CommandSet::ReturnHome)
    }

    /// Clear the whole display and return cursor home
    pub fn clear(&mut self) -> Result<(), Error<Sender::Error>> {
        self.send(CommandSet::ClearDisplay)
    }

    /// Set how the cursor moves after each character written
    ///
    /// * `dir` - [`MoveDirection::LeftToRight`] moves the cursor right
    /// * `shift` - [`ShiftType::CursorAndDisplay`] moves the display instead of the cursor
    pub fn set_entry_mode(
        &mut self,
        dir: MoveDirection,
        shift: ShiftType,
    ) -> Result<(), Error<Sender::Error>> {
        self.send(CommandSet::EntryModeSet(dir, shift))
    }

    /// Turn the display on with the given cursor look, `blink` implies `cursor`
    pub fn set_cursor_mode(
        &mut self,
        cursor: State,
        blink: State,
    ) -> Result<(), Error<Sender::Error>> {
        self.send(CommandSet::CursorMode { cursor, blink })
    }

    /// Turn the display off, content is kept
    pub fn display_off(&mut self) -> Result<(), Error<Sender::Error>> {
        self.send(CommandSet::DisplayOff)
    }

    /// Move cursor to column `x` of row `y`, top left is (0, 0)
    pub fn set_cursor(&mut self, x: u8, y: u8) -> Result<(), Error<Sender::Error>> {
        if x >= COLUMNS || y >= ROWS {
            return Err(Error::CursorOutOfRange { x, y });
        }

        self.send(CommandSet::SetDDRAM(x + y * SECOND_ROW_OFFSET))
    }

    /// Shift the cursor left by `step` positions, one instruction each
    pub fn shift_cursor_left(&mut self, step: u8) -> Result<(), Error<Sender::Error>> {
        self.send_repeated(
            CommandSet::CursorOrDisplayShift(ShiftType::CursorOnly, MoveDirection::RightToLeft),
            step,
        )
    }

    /// Shift the cursor right by `step` positions, one instruction each
    pub fn shift_cursor_right(&mut self, step: u8) -> Result<(), Error<Sender::Error>> {
        self.send_repeated(
            CommandSet::CursorOrDisplayShift(ShiftType::CursorOnly, MoveDirection::LeftToRight),
            step,
        )
    }

    /// Shift the whole display left by `step` positions, one instruction each
    pub fn shift_display_left(&mut self, step: u8) -> Result<(), Error<Sender::Error>> {
        self.send_repeated(
            CommandSet::CursorOrDisplayShift(
                ShiftType::CursorAndDisplay,
                MoveDirection::RightToLeft,
            ),
            step,
        )
    }

    /// Shift the whole display right by `step` positions, one instruction each
    pub fn shift_display_right(&mut self, step: u8) -> Result<(), Error<Sender::Error>> {
        self.send_repeated(
            CommandSet::CursorOrDisplayShift(
                ShiftType::CursorAndDisplay,
                MoveDirection::LeftToRight,
            ),
            step,
        )
    }

    /// Write a string starting at the cursor
    ///
    /// The string must hold 1 to 16 characters. It is neither wrapped to the
    /// second row nor truncated. Characters outside `0x00..=0xFF` are shown
    /// as a full rectangle (0xFF), rather than sending the low 8 bits of their
    /// code point (which would turn '€' into 0xAC). Use [`Lcd::write_byte`]
    /// for raw character codes.
    pub fn write(&mut self, text: &str) -> Result<(), Error<Sender::Error>> {
        let len = text.chars().count();

        if len == 0 {
            return Err(Error::EmptyText);
        }
        if len > COLUMNS as usize {
            return Err(Error::TextTooLong {
                overflow: len - COLUMNS as usize,
            });
        }

        self.sender
            .select_register(RegisterSelection::Data)
            .map_err(Error::Pin)?;

        text.chars().try_for_each(|char| {
            let byte = u8::try_from(char).unwrap_or(0xFF);
            self.sender
                .shift_byte(byte, self.delayer)
                .map_err(Error::Pin)
        })
    }

    /// Write a raw character code (e.g. from the LCD's CGROM table) at the cursor
    pub fn write_byte(&mut self, byte: u8) -> Result<(), Error<Sender::Error>> {
        self.send(CommandSet::WriteDataToRAM(byte))
    }

    /// Wait for specified milliseconds
    pub fn delay_ms(&mut self, ms: u32) {
        self.delayer.delay_ms(ms);
    }

    fn send(&mut self, command: CommandSet) -> Result<(), Error<Sender::Error>> {
        self.sender.send(command, self.delayer).map_err(Error::Pin)
    }

    // one register selection, then `step` independent instructions
    fn send_repeated(
        &mut self,
        command: CommandSet,
        step: u8,
    ) -> Result<(), Error<Sender::Error>> {
        let command = Command::from(command);

        self.sender
            .select_register(command.get_register_selection())
            .map_err(Error::Pin)?;

        (0..step).try_for_each(|_| {
            self.sender
                .shift_byte(command.get_data(), self.delayer)
                .map_err(Error::Pin)
        })
    }
}
