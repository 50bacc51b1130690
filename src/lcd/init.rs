use embedded_hal::delay::DelayNs;

use crate::{
    command::{CommandSet, DataWidth, Font, LineMode, MoveDirection, ShiftType, State},
    error::Error,
    lcd::Lcd,
    sender::SendCommand,
};

/// [`Config`] is the init config of a [`Lcd`]
///
/// The default is a hidden, non-blinking cursor that moves right after each write.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    cursor: State,
    cursor_blink: State,
    direction: MoveDirection,
    shift_type: ShiftType,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cursor: State::Off,
            cursor_blink: State::Off,
            direction: MoveDirection::LeftToRight,
            shift_type: ShiftType::CursorOnly,
        }
    }
}

#[allow(missing_docs)]
impl Config {
    pub fn get_cursor_state(&self) -> State {
        self.cursor
    }

    pub fn set_cursor_state(mut self, cursor: State) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn get_cursor_blink(&self) -> State {
        self.cursor_blink
    }

    pub fn set_cursor_blink(mut self, blink: State) -> Self {
        self.cursor_blink = blink;
        self
    }

    pub fn get_direction(&self) -> MoveDirection {
        self.direction
    }

    pub fn set_direction(mut self, dir: MoveDirection) -> Self {
        self.direction = dir;
        self
    }

    pub fn get_shift_type(&self) -> ShiftType {
        self.shift_type
    }

    pub fn set_shift_type(mut self, shift: ShiftType) -> Self {
        self.shift_type = shift;
        self
    }
}

impl<'a, 'b, Sender, Delayer> Lcd<'a, 'b, Sender, Delayer>
where
    Sender: SendCommand<Delayer>,
    Delayer: DelayNs,
{
    /// Create a [`Lcd`] driver, and init LCD hardware
    ///
    /// This talks to the hardware, call it once per power cycle.
    pub fn new(
        sender: &'a mut Sender,
        delayer: &'b mut Delayer,
        config: Config,
    ) -> Result<Self, Error<Sender::Error>> {
        let mut lcd = Lcd { sender, delayer };

        // data width, line count and font are fixed by the shift register wiring
        lcd.send(CommandSet::FunctionSet(
            DataWidth::Bit8,
            LineMode::TwoLine,
            Font::Font5x8,
        ))?;

        lcd.set_cursor_mode(config.get_cursor_state(), config.get_cursor_blink())?;
        lcd.set_entry_mode(config.get_direction(), config.get_shift_type())?;

        #[cfg(feature = "defmt")]
        defmt::debug!("LCD1602 initialized with {}", config);

        Ok(lcd)
    }
}
