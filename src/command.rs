//! HD44780 instructions and their 8-bit encodings

use crate::utils::BitOps;

/// Instructions this driver knows how to emit
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandSet {
    /// Clear all DDRAM and return cursor home
    ClearDisplay,
    /// Return cursor (and shifted display) to (0, 0), DDRAM untouched
    ReturnHome,
    /// How the cursor or display moves after each character write
    EntryModeSet(MoveDirection, ShiftType),
    /// Display on with the given cursor look, see [`CURSOR_MODE_TABLE`]
    CursorMode {
        /// underline cursor
        cursor: State,
        /// blinking block, implies `cursor`
        blink: State,
    },
    /// Display off, DDRAM retained
    DisplayOff,
    /// Move the cursor, or the whole display, by one position
    CursorOrDisplayShift(ShiftType, MoveDirection),
    /// Interface width, line count and font
    FunctionSet(DataWidth, LineMode, Font),
    /// Set DDRAM address (cursor position)
    SetDDRAM(u8),
    /// Write a character code at the cursor
    WriteDataToRAM(u8),
}

/// Which way the cursor (or display) travels
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MoveDirection {
    /// toward column 0
    RightToLeft = 0,
    /// toward column 15
    #[default]
    LeftToRight = 1,
}

/// Whether only the cursor moves, or the whole display window
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftType {
    #[allow(missing_docs)]
    #[default]
    CursorOnly = 0,
    #[allow(missing_docs)]
    CursorAndDisplay = 1,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    Off = 0,
    #[default]
    On = 1,
}

impl From<bool> for State {
    fn from(value: bool) -> Self {
        match value {
            true => State::On,
            false => State::Off,
        }
    }
}

#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataWidth {
    Bit4,
    // the shift register drives all of D0..D7
    #[default]
    Bit8,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineMode {
    OneLine,
    #[default]
    TwoLine,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Default, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    #[default]
    Font5x8,
    Font5x11,
}

/// Level of the LCD RS line
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterSelection {
    /// RS low, byte is a controller instruction
    Command,
    /// RS high, byte is a character code
    Data,
}

/// Entry mode instruction, indexed by `[MoveDirection][ShiftType]`
pub const ENTRY_MODE_TABLE: [[u8; 2]; 2] = [
    // RightToLeft: CursorOnly, CursorAndDisplay
    [0x04, 0x05],
    // LeftToRight: CursorOnly, CursorAndDisplay
    [0x06, 0x07],
];

/// Display-on instruction, indexed by `[cursor][blink]`
///
/// Blink forces the cursor on, so both blink columns are `0x0F`.
pub const CURSOR_MODE_TABLE: [[u8; 2]; 2] = [
    // cursor off: no blink, blink
    [0x0C, 0x0F],
    // cursor on: no blink, blink
    [0x0E, 0x0F],
];

/// A byte ready for the wire, with the register it targets
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    rs: RegisterSelection,
    data: u8,
}

impl Command {
    #[allow(missing_docs)]
    pub fn new(rs: RegisterSelection, data: u8) -> Self {
        Self { rs, data }
    }

    #[allow(missing_docs)]
    pub fn get_register_selection(&self) -> RegisterSelection {
        self.rs
    }

    #[allow(missing_docs)]
    pub fn get_data(&self) -> u8 {
        self.data
    }
}

impl From<CommandSet> for Command {
    fn from(command: CommandSet) -> Self {
        match command {
            CommandSet::ClearDisplay => Self::new(RegisterSelection::Command, 0b0000_0001),

            CommandSet::ReturnHome => Self::new(RegisterSelection::Command, 0b0000_0010),

            CommandSet::EntryModeSet(dir, st) => Self::new(
                RegisterSelection::Command,
                ENTRY_MODE_TABLE[dir as usize][st as usize],
            ),

            CommandSet::CursorMode { cursor, blink } => Self::new(
                RegisterSelection::Command,
                CURSOR_MODE_TABLE[cursor as usize][blink as usize],
            ),

            CommandSet::DisplayOff => Self::new(RegisterSelection::Command, 0b0000_1000),

            CommandSet::CursorOrDisplayShift(st, dir) => {
                let mut raw_bits: u8 = 0b0001_0000;

                match st {
                    ShiftType::CursorOnly => raw_bits.clear_bit(3),
                    ShiftType::CursorAndDisplay => raw_bits.set_bit(3),
                };

                match dir {
                    MoveDirection::RightToLeft => raw_bits.clear_bit(2),
                    MoveDirection::LeftToRight => raw_bits.set_bit(2),
                };

                Self::new(RegisterSelection::Command, raw_bits)
            }

            CommandSet::FunctionSet(width, line, font) => {
                let mut raw_bits: u8 = 0b0010_0000;

                match width {
                    DataWidth::Bit4 => raw_bits.clear_bit(4),
                    DataWidth::Bit8 => raw_bits.set_bit(4),
                };

                match line {
                    LineMode::OneLine => raw_bits.clear_bit(3),
                    LineMode::TwoLine => raw_bits.set_bit(3),
                };

                match font {
                    Font::Font5x8 => raw_bits.clear_bit(2),
                    Font::Font5x11 => raw_bits.set_bit(2),
                };

                Self::new(RegisterSelection::Command, raw_bits)
            }

            CommandSet::SetDDRAM(addr) => {
                assert!(addr < 2u8.pow(7), "DDRAM address out of range");

                Self::new(RegisterSelection::Command, 0b1000_0000 + addr)
            }

            CommandSet::WriteDataToRAM(data) => Self::new(RegisterSelection::Data, data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(command: CommandSet) -> u8 {
        Command::from(command).get_data()
    }

    #[test]
    fn function_set_for_shift_register_wiring() {
        assert_eq!(
            encode(CommandSet::FunctionSet(
                DataWidth::default(),
                LineMode::default(),
                Font::default()
            )),
            0x38
        );
    }

    #[test]
    fn entry_mode_table_covers_every_combination() {
        use MoveDirection::*;
        use ShiftType::*;

        for (dir, st, code) in [
            (RightToLeft, CursorOnly, 0x04),
            (RightToLeft, CursorAndDisplay, 0x05),
            (LeftToRight, CursorOnly, 0x06),
            (LeftToRight, CursorAndDisplay, 0x07),
        ] {
            assert_eq!(encode(CommandSet::EntryModeSet(dir, st)), code);
        }
    }

    #[test]
    fn blink_implies_cursor() {
        let mode = |cursor: bool, blink: bool| {
            encode(CommandSet::CursorMode {
                cursor: cursor.into(),
                blink: blink.into(),
            })
        };

        assert_eq!(mode(false, false), 0x0C);
        assert_eq!(mode(true, false), 0x0E);
        assert_eq!(mode(false, true), 0x0F);
        assert_eq!(mode(true, true), 0x0F);
    }

    #[test]
    fn shift_codes() {
        use MoveDirection::*;
        use ShiftType::*;

        let shift = |st, dir| encode(CommandSet::CursorOrDisplayShift(st, dir));

        assert_eq!(shift(CursorOnly, RightToLeft), 0x10);
        assert_eq!(shift(CursorOnly, LeftToRight), 0x14);
        assert_eq!(shift(CursorAndDisplay, RightToLeft), 0x18);
        assert_eq!(shift(CursorAndDisplay, LeftToRight), 0x1C);
    }

    #[test]
    fn fixed_instructions() {
        assert_eq!(encode(CommandSet::ClearDisplay), 0x01);
        assert_eq!(encode(CommandSet::ReturnHome), 0x02);
        assert_eq!(encode(CommandSet::DisplayOff), 0x08);
        assert_eq!(encode(CommandSet::SetDDRAM(0x4F)), 0xCF);
    }

    #[test]
    fn only_character_writes_target_data_register() {
        assert_eq!(
            Command::from(CommandSet::WriteDataToRAM(b'A')),
            Command::new(RegisterSelection::Data, 0x41)
        );
        assert_eq!(
            Command::from(CommandSet::ClearDisplay).get_register_selection(),
            RegisterSelection::Command
        );
    }

    #[test]
    #[should_panic(expected = "DDRAM address out of range")]
    fn ddram_address_is_seven_bits() {
        let _ = Command::from(CommandSet::SetDDRAM(0x80));
    }
}
