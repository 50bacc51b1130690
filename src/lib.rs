/*!
# LCD 1602 Shift Register Driver

Drive an HD44780-class LCD1602 in 8 bit mode with only 5 digital output lines,
by pushing each byte through a serial-in/parallel-out shift register.

Basic Usage:

1. Initialize a "sender" <br/>
    This crate include [`sender::ShiftRegisterSender`], which owns the 5 lines:
    * register serial data
    * register shift clock
    * register clear (active low)
    * LCD enable
    * LCD register select (RS)

    Or you can use any driver implemented [`sender::SendCommand`].
<br/>
<br/>
2. Use [`lcd::Lcd::new()`] to create a [`lcd::Lcd`], and initialize LCD1602 hardware
<br/>
<br/>
3. use any methods provide by [`lcd::Lcd`] to control LCD1602

The driver is write-only: it never reads the LCD back, and every timing
requirement is met with fixed millisecond delays.
*/

#![no_std]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod lcd;
pub mod sender;
pub mod utils;
