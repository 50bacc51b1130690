//! Built-in sender
//! If you want to drive the LCD through other hardware, you will need to implement [`SendCommand`] trait

use embedded_hal::delay::DelayNs;

use crate::command::{Command, RegisterSelection};

mod shift_register_sender;

pub use shift_register_sender::{ShiftRegisterConfig, ShiftRegisterSender};

/// [`SendCommand`] is the trait a sender should implement to communicate with the hardware
///
/// The LCD is write-only from the driver's point of view: nothing is ever read back,
/// so every timing requirement is met with fixed delays from `Delayer`.
pub trait SendCommand<Delayer: DelayNs> {
    /// Error raised by the underlying lines
    type Error;

    /// Drive the LCD RS line, it must be stable before the next [`SendCommand::shift_byte`]
    fn select_register(&mut self, rs: RegisterSelection) -> Result<(), Self::Error>;

    /// Put one byte on the LCD data bus and strobe it in
    fn shift_byte(&mut self, byte: u8, delayer: &mut Delayer) -> Result<(), Self::Error>;

    /// Select the register a [`Command`] targets, then send its byte
    fn send(
        &mut self,
        command: impl Into<Command>,
        delayer: &mut Delayer,
    ) -> Result<(), Self::Error> {
        let command = command.into();

        self.select_register(command.get_register_selection())?;
        self.shift_byte(command.get_data(), delayer)
    }
}
