//! Cocktail arcade controller firmware for ATmega32U4 (Teensy 2.0).
//!
//! The main loop polls the matrix every millisecond and resolves key
//! changes to keycodes through the board profile. Host reporting lives
//! outside this loop; until it is attached the on-board LED shows whether
//! any resolved keycode is held.

#![no_std]
#![no_main]
#![feature(asm_experimental_arch)]

mod matrix;

use avr_device::atmega32u4::Peripherals;
use cocktail_keymap::profiles::cocktail::{COLS, ROWS};
use cocktail_keymap::profiles::COCKTAIL;
use cocktail_keymap::{LayerSelector, Scanner};

use matrix::CocktailPins;

/// Teensy on-board LED, PD6.
const LED: u8 = 1 << 6;

/// Panic handler: on AVR we just loop forever.
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {}
}

/// Main entry point.
#[no_mangle]
pub extern "C" fn main() -> ! {
    let dp = unsafe { Peripherals::steal() };

    // Disable clock prescaler (CLKPR)
    dp.CPU.clkpr.write(|w| w.clkpce().set_bit());
    dp.CPU.clkpr.write(|w| unsafe { w.bits(0) }); // Prescaler = 1

    let profile = &COCKTAIL;
    let mut scanner: Scanner<_, ROWS, COLS> = Scanner::new(CocktailPins::new(&dp), profile.matrix);
    scanner.initialize().ok();
    let mut layers = LayerSelector::new(&profile.keymap, &profile.fn_tables);

    // Sampler init set every PORTD pin as an input; reclaim the LED pin.
    dp.PORTD.ddrd.modify(|r, w| unsafe { w.bits(r.bits() | LED) });

    let mut held: u8 = 0;

    loop {
        scanner.scan().ok();

        for change in scanner.changes() {
            // Keymap and scanner share dimensions, lookups cannot fail.
            layers
                .process(change, |event| {
                    held = if event.pressed {
                        held.saturating_add(1)
                    } else {
                        held.saturating_sub(1)
                    };
                })
                .ok();
        }

        set_led(&dp, held > 0);

        // ~1ms delay between scans
        delay_ms(1);
    }
}

fn set_led(dp: &Peripherals, on: bool) {
    dp.PORTD.portd.modify(|r, w| unsafe {
        if on {
            w.bits(r.bits() | LED)
        } else {
            w.bits(r.bits() & !LED)
        }
    });
}

/// Busy-wait delay in milliseconds (approximate, at 16MHz).
fn delay_ms(ms: u16) {
    for _ in 0..ms {
        // ~1ms at 16MHz: 16000 cycles / 4 cycles per loop iteration
        for _ in 0..4000u16 {
            unsafe { core::arch::asm!("nop") };
        }
    }
}
