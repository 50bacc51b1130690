//! Errors returned by [`Lcd`](crate::lcd::Lcd) operations

use core::fmt;

/// Everything a driver call can fail with
///
/// The validation variants are produced before any line is toggled.
/// `E` is the error type of the underlying [`SendCommand`](crate::sender::SendCommand).
#[derive(Debug, PartialEq)]
pub enum Error<E> {
    /// `write` was given an empty string
    EmptyText,
    /// `write` was given more characters than one row holds
    TextTooLong {
        /// characters past the end of the row
        overflow: usize,
    },
    /// `set_cursor` was given a position outside the 16x2 grid
    CursorOutOfRange {
        #[allow(missing_docs)]
        x: u8,
        #[allow(missing_docs)]
        y: u8,
    },
    /// A line refused to change level
    Pin(E),
}

impl<E> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyText => write!(f, "Cannot display an empty string"),
            Error::TextTooLong { overflow } => {
                write!(f, "Text length exceeded 16 characters by {}", overflow)
            }
            Error::CursorOutOfRange { x, y } => {
                write!(f, "Cursor position X ({}) or Y ({}) out of range", x, y)
            }
            Error::Pin(_) => write!(f, "GPIO error"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E> defmt::Format for Error<E> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Error::EmptyText => defmt::write!(fmt, "Cannot display an empty string"),
            Error::TextTooLong { overflow } => {
                defmt::write!(fmt, "Text length exceeded 16 characters by {}", overflow)
            }
            Error::CursorOutOfRange { x, y } => {
                defmt::write!(fmt, "Cursor position X ({}) or Y ({}) out of range", x, y)
            }
            Error::Pin(_e) => defmt::write!(fmt, "GPIO error"),
        }
    }
}
