//! Switch sampling for the cocktail controller.
//!
//! The controller has no row drivers: every switch has its own pin on the
//! Teensy 2.0 and pulls it to ground when closed.
//!
//! Pin mapping (ATmega32U4):
//!   Row 0: PB0-PB5
//!   Row 1: PC0-PC5
//!   Row 2: PD0-PD5
//!   Row 3: PF0-PF5
//!   Row 4: PF6-PF7 (columns 0-1)

use core::convert::Infallible;

use avr_device::atmega32u4::Peripherals;
use cocktail_keymap::profiles::cocktail::ROWS;
use cocktail_keymap::Sampler;

/// JTAG disable bit in MCUCR. PORTF is shared with the JTAG pins.
const JTD: u8 = 1 << 7;

/// Columns 2-5 of row 4 have no switch; report them idle (high).
const ROW4_UNUSED: u8 = 0x3C;

/// Reads the cocktail wiring straight from the port input registers.
pub struct CocktailPins<'a> {
    dp: &'a Peripherals,
}

impl<'a> CocktailPins<'a> {
    pub fn new(dp: &'a Peripherals) -> Self {
        Self { dp }
    }
}

impl Sampler<ROWS> for CocktailPins<'_> {
    type Error = Infallible;

    /// All four ports become inputs with pull-ups (DDR: 0, PORT: 1).
    fn init(&mut self) -> Result<(), Infallible> {
        let dp = self.dp;

        // JTD must be written twice within four cycles to take effect.
        dp.CPU.mcucr.modify(|r, w| unsafe { w.bits(r.bits() | JTD) });
        dp.CPU.mcucr.modify(|r, w| unsafe { w.bits(r.bits() | JTD) });

        dp.PORTB.ddrb.write(|w| unsafe { w.bits(0x00) });
        dp.PORTB.portb.write(|w| unsafe { w.bits(0xFF) });
        dp.PORTC.ddrc.write(|w| unsafe { w.bits(0x00) });
        dp.PORTC.portc.write(|w| unsafe { w.bits(0xFF) });
        dp.PORTD.ddrd.write(|w| unsafe { w.bits(0x00) });
        dp.PORTD.portd.write(|w| unsafe { w.bits(0xFF) });
        dp.PORTF.ddrf.write(|w| unsafe { w.bits(0x00) });
        dp.PORTF.portf.write(|w| unsafe { w.bits(0xFF) });
        Ok(())
    }

    fn read_levels(&mut self, levels: &mut [u16; ROWS]) -> Result<(), Infallible> {
        settle();
        let pinf = self.dp.PORTF.pinf.read().bits();

        levels[0] = self.dp.PORTB.pinb.read().bits() as u16;
        levels[1] = self.dp.PORTC.pinc.read().bits() as u16;
        levels[2] = self.dp.PORTD.pind.read().bits() as u16;
        levels[3] = pinf as u16;
        levels[4] = ((pinf >> 6) | ROW4_UNUSED) as u16;
        Ok(())
    }
}

/// Short delay for pin settling (~1us at 16MHz).
#[inline(always)]
fn settle() {
    for _ in 0..4u8 {
        unsafe { core::arch::asm!("nop") };
    }
}
