//! Five recording lines and a recording delay, sharing one event log,
//! so a test can see the exact interleaving across every line.

#![allow(dead_code)]

use core::convert::Infallible;
use std::{cell::RefCell, rc::Rc, vec::Vec};

use embedded_hal::{
    delay::DelayNs,
    digital::{ErrorType, OutputPin},
};
use lcd1602_shift_driver::sender::{ShiftRegisterConfig, ShiftRegisterSender};

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Line {
    Data,
    Clock,
    Clear,
    Enable,
    Rs,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Event {
    Set(Line, bool),
    DelayMs(u32),
    DelayNs(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub struct RecordingPin {
    line: Line,
    log: Log,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Set(self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Set(self.line, true));
        Ok(())
    }
}

pub struct RecordingDelay {
    log: Log,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayNs(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

pub fn rig(
    config: ShiftRegisterConfig,
) -> (ShiftRegisterSender<RecordingPin>, RecordingDelay, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let pin = |line| RecordingPin {
        line,
        log: log.clone(),
    };

    let sender = ShiftRegisterSender::with_config(
        pin(Line::Data),
        pin(Line::Clock),
        pin(Line::Clear),
        pin(Line::Enable),
        pin(Line::Rs),
        config,
    );
    let delay = RecordingDelay { log: log.clone() };

    (sender, delay, log)
}

/// Drain everything recorded so far
pub fn take(log: &Log) -> Vec<Event> {
    core::mem::take(&mut *log.borrow_mut())
}

/// Exact events of one byte going out with the default register config:
/// clear cycle, 8 bits LSB first, latch pulse, settle, LCD strobe, settle
pub fn frame(byte: u8) -> Vec<Event> {
    use Event::*;
    use Line::*;

    let mut events = Vec::new();

    events.push(Set(Clear, false));
    for _ in 0..10 {
        events.extend([Set(Data, false), Set(Clock, true), Set(Clock, false)]);
    }
    events.push(Set(Clear, true));
    events.push(DelayMs(1));

    events.push(Set(Clock, false));
    for index in 0..8 {
        events.extend([
            Set(Data, (byte >> index) & 1 == 1),
            Set(Clock, true),
            Set(Clock, false),
        ]);
    }
    events.extend([Set(Clock, true), Set(Clock, false)]);
    events.push(DelayMs(1));

    events.extend([Set(Enable, true), Set(Enable, false)]);
    events.push(DelayMs(1));

    events
}

/// RS selection followed by one frame per byte
pub fn instruction(data_mode: bool, bytes: &[u8]) -> Vec<Event> {
    let mut events = std::vec![Event::Set(Line::Rs, data_mode)];
    bytes.iter().for_each(|&byte| events.extend(frame(byte)));
    events
}

/// What the LCD latched on each enable strobe: (RS level, byte)
///
/// Bits clocked while the register is held in clear are dropped,
/// the first 8 clocked after it is released form the byte, LSB first.
pub fn decode(events: &[Event]) -> Vec<(bool, u8)> {
    let mut latched = Vec::new();
    let mut rs = false;
    let mut data = false;
    let mut clearing = false;
    let mut bits: Vec<bool> = Vec::new();

    for event in events {
        match *event {
            Event::Set(Line::Rs, level) => rs = level,
            Event::Set(Line::Data, level) => data = level,
            Event::Set(Line::Clear, level) => {
                clearing = !level;
                bits.clear();
            }
            Event::Set(Line::Clock, true) if !clearing => bits.push(data),
            Event::Set(Line::Enable, true) => {
                let byte = bits
                    .iter()
                    .take(8)
                    .enumerate()
                    .fold(0u8, |acc, (index, &bit)| acc | ((bit as u8) << index));
                latched.push((rs, byte));
            }
            _ => {}
        }
    }

    latched
}

pub fn count(events: &[Event], wanted: Event) -> usize {
    events.iter().filter(|&&event| event == wanted).count()
}
