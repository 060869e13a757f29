//! Electrical samplers: hardware-to-bitmask transforms for one scan pass.

use core::convert::Infallible;

use embedded_hal::digital::InputPin;

use crate::scanner::Polarity;

/// Source of raw line levels for a matrix with `ROWS` rows.
///
/// A sampler does no interpretation. It reports the electrical level of each
/// column line, bit set = line high. Lines that are not wired to a switch
/// must read at the idle level of the configured [`Polarity`].
pub trait Sampler<const ROWS: usize> {
    type Error: core::fmt::Debug;

    /// Put every line into input mode with a known idle level.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Read the level of every line, one `u16` per row.
    fn read_levels(&mut self, levels: &mut [u16; ROWS]) -> Result<(), Self::Error>;
}

/// Sampler fed from software instead of pins.
///
/// Host tooling and tests use it to inject switch states. The injected
/// state is logical (bit set = pressed); it is encoded into line levels
/// according to the polarity, so the scanner sees exactly what a real board
/// would produce.
#[derive(Clone, Debug)]
pub struct VirtualSampler<const ROWS: usize> {
    pressed: [u16; ROWS],
    polarity: Polarity,
    reads: usize,
}

impl<const ROWS: usize> VirtualSampler<ROWS> {
    pub fn new(polarity: Polarity) -> Self {
        Self {
            pressed: [0; ROWS],
            polarity,
            reads: 0,
        }
    }

    /// Close or open the switch at (`row`, `col`).
    pub fn set(&mut self, row: usize, col: usize, pressed: bool) {
        if pressed {
            self.pressed[row] |= 1 << col;
        } else {
            self.pressed[row] &= !(1 << col);
        }
    }

    /// Replace the whole pressed pattern.
    pub fn set_rows(&mut self, pressed: [u16; ROWS]) {
        self.pressed = pressed;
    }

    /// Number of completed `read_levels` calls.
    pub fn reads(&self) -> usize {
        self.reads
    }
}

impl<const ROWS: usize> Sampler<ROWS> for VirtualSampler<ROWS> {
    type Error = Infallible;

    fn init(&mut self) -> Result<(), Infallible> {
        self.reads = 0;
        Ok(())
    }

    fn read_levels(&mut self, levels: &mut [u16; ROWS]) -> Result<(), Infallible> {
        for (level, pressed) in levels.iter_mut().zip(self.pressed.iter()) {
            *level = self.polarity.encode(*pressed);
        }
        self.reads += 1;
        Ok(())
    }
}

/// Direct-wired matrix: every switch has its own input pin.
///
/// Cells without a switch are `None` and always read idle. Pin direction
/// and pull configuration are the HAL's job when the pins are created, so
/// `init` has nothing to do.
pub struct DirectPinSampler<In: InputPin, const ROWS: usize, const COLS: usize> {
    pins: [[Option<In>; COLS]; ROWS],
    polarity: Polarity,
}

impl<In: InputPin, const ROWS: usize, const COLS: usize> DirectPinSampler<In, ROWS, COLS> {
    pub fn new(pins: [[Option<In>; COLS]; ROWS], polarity: Polarity) -> Self {
        Self { pins, polarity }
    }

    /// Give the pins back.
    pub fn into_pins(self) -> [[Option<In>; COLS]; ROWS] {
        self.pins
    }
}

impl<In: InputPin, const ROWS: usize, const COLS: usize> Sampler<ROWS>
    for DirectPinSampler<In, ROWS, COLS>
{
    type Error = In::Error;

    fn init(&mut self) -> Result<(), In::Error> {
        Ok(())
    }

    fn read_levels(&mut self, levels: &mut [u16; ROWS]) -> Result<(), In::Error> {
        let idle = self.polarity.idle_level();
        for (level, row) in levels.iter_mut().zip(self.pins.iter_mut()) {
            let mut bits = 0u16;
            for (col, pin) in row.iter_mut().enumerate() {
                let high = match pin {
                    Some(pin) => pin.is_high()?,
                    None => idle,
                };
                if high {
                    bits |= 1 << col;
                }
            }
            *level = bits;
        }
        Ok(())
    }
}
