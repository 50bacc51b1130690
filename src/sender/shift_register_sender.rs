use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{command::RegisterSelection, sender::SendCommand, utils::BitOps};

// Shift register to LCD1602:
// serial data -> register -> D0..D7
// register clear is active low
// LCD EN and RS are driven directly

/// Timing and quirk knobs of a [`ShiftRegisterSender`]
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShiftRegisterConfig {
    latch_pulse: bool,
    clear_bits: u8,
    settle_ms: u32,
}

impl Default for ShiftRegisterConfig {
    fn default() -> Self {
        Self {
            latch_pulse: true,
            clear_bits: 10,
            settle_ms: 1,
        }
    }
}

#[allow(missing_docs)]
impl ShiftRegisterConfig {
    /// Whether one extra register clock pulse follows the 8 data bits.
    ///
    /// Needed when the register's storage clock is tied to its shift clock.
    pub fn get_latch_pulse(&self) -> bool {
        self.latch_pulse
    }

    pub fn set_latch_pulse(mut self, latch_pulse: bool) -> Self {
        self.latch_pulse = latch_pulse;
        self
    }

    /// Zero bits shifted in while the register is held in clear
    pub fn get_clear_bits(&self) -> u8 {
        self.clear_bits
    }

    pub fn set_clear_bits(mut self, clear_bits: u8) -> Self {
        self.clear_bits = clear_bits;
        self
    }

    /// Delay after a clear, after the data settles, and after the LCD strobe
    pub fn get_settle_ms(&self) -> u32 {
        self.settle_ms
    }

    pub fn set_settle_ms(mut self, settle_ms: u32) -> Self {
        self.settle_ms = settle_ms;
        self
    }
}

/// Drive an LCD1602 in 8 bit mode with a serial-in/parallel-out shift register and 5 lines
pub struct ShiftRegisterSender<Pin>
where
    Pin: OutputPin,
{
    data_pin: Pin,
    clock_pin: Pin,
    clear_pin: Pin,
    en_pin: Pin,
    rs_pin: Pin,
    config: ShiftRegisterConfig,
}

impl<Pin> ShiftRegisterSender<Pin>
where
    Pin: OutputPin,
{
    /// Wire up the five lines with the default [`ShiftRegisterConfig`]
    pub fn new(data: Pin, clock: Pin, clear: Pin, lcd_enable: Pin, lcd_rs: Pin) -> Self {
        Self::with_config(
            data,
            clock,
            clear,
            lcd_enable,
            lcd_rs,
            ShiftRegisterConfig::default(),
        )
    }

    #[allow(missing_docs)]
    pub fn with_config(
        data: Pin,
        clock: Pin,
        clear: Pin,
        lcd_enable: Pin,
        lcd_rs: Pin,
        config: ShiftRegisterConfig,
    ) -> Self {
        Self {
            data_pin: data,
            clock_pin: clock,
            clear_pin: clear,
            en_pin: lcd_enable,
            rs_pin: lcd_rs,
            config,
        }
    }

    #[allow(missing_docs)]
    pub fn get_config(&self) -> ShiftRegisterConfig {
        self.config
    }

    /// Give the lines back, in the order [`ShiftRegisterSender::new`] takes them
    pub fn release(self) -> (Pin, Pin, Pin, Pin, Pin) {
        (
            self.data_pin,
            self.clock_pin,
            self.clear_pin,
            self.en_pin,
            self.rs_pin,
        )
    }

    fn pulse_clock(&mut self) -> Result<(), Pin::Error> {
        self.clock_pin.set_high()?;
        self.clock_pin.set_low()
    }

    fn pulse_enable(&mut self) -> Result<(), Pin::Error> {
        self.en_pin.set_high()?;
        self.en_pin.set_low()
    }

    // flush every stage, so bits from an interrupted shift can't leak into this one
    fn clear_register(&mut self, delayer: &mut impl DelayNs) -> Result<(), Pin::Error> {
        self.clear_pin.set_low()?;
        for _ in 0..self.config.clear_bits {
            self.data_pin.set_low()?;
            self.pulse_clock()?;
        }
        self.clear_pin.set_high()?;

        delayer.delay_ms(self.config.settle_ms);
        Ok(())
    }
}

impl<Pin, Delayer> SendCommand<Delayer> for ShiftRegisterSender<Pin>
where
    Pin: OutputPin,
    Delayer: DelayNs,
{
    type Error = Pin::Error;

    fn select_register(&mut self, rs: RegisterSelection) -> Result<(), Self::Error> {
        match rs {
            RegisterSelection::Command => self.rs_pin.set_low(),
            RegisterSelection::Data => self.rs_pin.set_high(),
        }
    }

    fn shift_byte(&mut self, byte: u8, delayer: &mut Delayer) -> Result<(), Self::Error> {
        #[cfg(feature = "defmt")]
        defmt::trace!("shift byte {=u8:#x}", byte);

        self.clear_register(delayer)?;

        self.clock_pin.set_low()?;

        // LSB first, the wiring puts bit 0 on D0 once all 8 are in
        for index in 0..8 {
            self.data_pin.set_state(byte.check_bit(index).into())?;
            self.pulse_clock()?;
        }

        if self.config.latch_pulse {
            self.pulse_clock()?;
        }

        delayer.delay_ms(self.config.settle_ms);

        self.pulse_enable()?;

        delayer.delay_ms(self.config.settle_ms);

        Ok(())
    }
}
