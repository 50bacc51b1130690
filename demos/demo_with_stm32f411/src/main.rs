//! Drive LCD1602 with a STM32F411RET6 through a shift register, using 5 pins
//!
//! this demo walks through every instruction the driver offers, with a pause in between.

//! Wiring diagram
//!
//! Shift register (serial-in/parallel-out, active low clear) <-> STM32F411RET6
//!      SER <-> PA0 (serial data)
//!      CLK <-> PA1 (shift clock, also tied to the storage clock)
//!      CLR <-> PA2
//!   Q0..Q7 <-> LCD1602 D0..D7
//!
//! LCD1602 <-> STM32F411RET6
//!     Vss <-> GND
//!     Vdd <-> 5V (It is best to use an external source for the 5V pin, such as the 5V output from a DAPLink device or USB.)
//!      V0 <-> potentiometer <-> 5V & GND (to adjust the display contrast)
//!      RS <-> PA3
//!      RW <-> GND (the driver never reads back)
//!      EN <-> PA4 (and optionally connect to a 4.7 kOhm Pulldown resistor, to stable voltage level when STM32 reset)
//!       A <-> 5V
//!       K <-> GND

#![no_std]
#![no_main]

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{pac, prelude::*};

use lcd1602_shift_driver::{
    command::{MoveDirection, ShiftType, State},
    lcd::{Config, Lcd},
    sender::ShiftRegisterSender,
};

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(12.MHz()).freeze();

    let mut delayer = cp.SYST.delay(&clocks);

    // init needed digital pins

    let gpioa = dp.GPIOA.split();

    // Push-pull mode for a fast interaction
    let data_pin = gpioa.pa0.into_push_pull_output().erase();
    let clock_pin = gpioa.pa1.into_push_pull_output().erase();
    let clear_pin = gpioa.pa2.into_push_pull_output().erase();
    let rs_pin = gpioa.pa3.into_push_pull_output().erase();
    let en_pin = gpioa.pa4.into_push_pull_output().erase();

    // put pins together
    let mut sender = ShiftRegisterSender::new(data_pin, clock_pin, clear_pin, en_pin, rs_pin);

    // init LCD1602
    let mut lcd = match Lcd::new(&mut sender, &mut delayer, Config::default()) {
        Ok(lcd) => lcd,
        Err(e) => panic!("LCD1602 init failed: {}", e),
    };
    rprintln!("LCD1602 initialized");

    lcd.clear().unwrap();
    lcd.write("hello,").unwrap();
    lcd.set_cursor(0, 1).unwrap();
    lcd.write("world!").unwrap();

    lcd.delay_ms(1_000);

    // the line is 17 characters long, and will be refused
    if let Err(e) = lcd.write("this will not fit") {
        rprintln!("{}", e);
    }

    // blinking cursor at the end of first line
    lcd.set_cursor_mode(State::On, State::On).unwrap();
    lcd.set_cursor(15, 0).unwrap();
    lcd.delay_ms(1_000);

    lcd.shift_cursor_left(3).unwrap();
    lcd.delay_ms(1_000);
    lcd.shift_cursor_right(2).unwrap();
    lcd.delay_ms(1_000);

    lcd.set_cursor_mode(State::Off, State::Off).unwrap();

    // scroll the whole display window back and forth
    (0..4).for_each(|_| {
        lcd.delay_ms(250);
        lcd.shift_display_right(1).unwrap();
    });
    (0..4).for_each(|_| {
        lcd.delay_ms(250);
        lcd.shift_display_left(1).unwrap();
    });
    rprintln!("display shifted");

    // write right to left, starting at the end of second line
    lcd.home().unwrap();
    lcd.set_entry_mode(MoveDirection::RightToLeft, ShiftType::CursorOnly)
        .unwrap();
    lcd.set_cursor(15, 1).unwrap();
    lcd.write("~!").unwrap();
    lcd.set_entry_mode(MoveDirection::LeftToRight, ShiftType::CursorOnly)
        .unwrap();

    // full rectangle from CGROM
    lcd.set_cursor(7, 1).unwrap();
    lcd.write_byte(0xFF).unwrap();

    // and blinking display 3 times
    (0..3).for_each(|_| {
        lcd.delay_ms(500);
        lcd.display_off().unwrap();
        lcd.delay_ms(500);
        lcd.set_cursor_mode(State::Off, State::Off).unwrap();
    });
    rprintln!("demo finished");

    #[allow(clippy::empty_loop)]
    loop {}
}
