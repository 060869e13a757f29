//! Matrix scan and debounce engine.
//!
//! The scanner keeps two snapshots, `current` and `previous`, and a single
//! countdown shared by the whole matrix. Every pass samples into `current`.
//! The swap that makes a reading visible to [`Scanner::is_modified`] only
//! happens when the countdown has expired, and the countdown is re-armed by
//! that swap whether or not anything changed. A stable reading therefore
//! becomes visible at most once every `debounce` passes, and contact bounce
//! that settles inside that window is never reported.

use log::{debug, trace};

use crate::matrix::{MatrixSnapshot, RowBits};
use crate::sampler::Sampler;

/// Electrical convention of the switch lines.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Polarity {
    /// Lines idle high through pull-ups; a closed switch pulls low.
    ActiveLow,
    /// Lines idle low; a closed switch drives high.
    ActiveHigh,
}

impl Polarity {
    /// Level of a line whose switch is open.
    pub const fn idle_level(self) -> bool {
        matches!(self, Polarity::ActiveLow)
    }

    /// Line levels to pressed bits.
    pub const fn decode(self, levels: u16) -> u16 {
        match self {
            Polarity::ActiveLow => !levels,
            Polarity::ActiveHigh => levels,
        }
    }

    /// Pressed bits to line levels.
    pub const fn encode(self, pressed: u16) -> u16 {
        // The mapping is its own inverse.
        self.decode(pressed)
    }
}

/// Build-time matrix settings shared by every board profile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatrixConfig {
    /// Number of passes between two visible readings. 0 disables debouncing.
    pub debounce: u8,
    pub polarity: Polarity,
}

impl MatrixConfig {
    pub const fn new(debounce: u8, polarity: Polarity) -> Self {
        Self { debounce, polarity }
    }
}

/// One cell that differs between the last two visible readings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyChange {
    pub row: usize,
    pub col: usize,
    /// New state of the cell.
    pub pressed: bool,
}

/// Owned scanner state for a `ROWS` x `COLS` matrix.
pub struct Scanner<S: Sampler<ROWS>, const ROWS: usize, const COLS: usize> {
    sampler: S,
    config: MatrixConfig,
    buffers: [MatrixSnapshot<ROWS, COLS>; 2],
    /// Index into `buffers` of the snapshot being written.
    current: usize,
    debouncing: u8,
}

impl<S: Sampler<ROWS>, const ROWS: usize, const COLS: usize> Scanner<S, ROWS, COLS> {
    /// Create a scanner. Hardware is left untouched until [`Self::initialize`].
    pub fn new(sampler: S, config: MatrixConfig) -> Self {
        Self {
            sampler,
            config,
            buffers: [MatrixSnapshot::new(); 2],
            current: 0,
            debouncing: config.debounce,
        }
    }

    /// Configure the lines, clear both snapshots and arm the debounce counter.
    pub fn initialize(&mut self) -> Result<(), S::Error> {
        self.sampler.init()?;
        for buffer in self.buffers.iter_mut() {
            buffer.clear();
        }
        self.current = 0;
        self.debouncing = self.config.debounce;
        debug!(
            "Matrix {}x{} initialized, debounce {} passes, {:?}",
            ROWS, COLS, self.config.debounce, self.config.polarity
        );
        Ok(())
    }

    /// Run one sampling pass.
    ///
    /// Fails only when the sampler does; the snapshots are left unchanged in
    /// that case.
    pub fn scan(&mut self) -> Result<(), S::Error> {
        let mut levels = [0u16; ROWS];
        self.sampler.read_levels(&mut levels)?;

        if self.debouncing == 0 {
            self.current ^= 1;
            self.debouncing = self.config.debounce;
            trace!("Matrix swap, previous now holds the last stable reading");
        }

        let polarity = self.config.polarity;
        let current = &mut self.buffers[self.current];
        for (row, level) in levels.iter().enumerate() {
            current.set_row(row, RowBits::from_bits(polarity.decode(*level)));
        }

        if self.debouncing > 0 {
            self.debouncing -= 1;
        }
        Ok(())
    }

    /// Whether the last visible reading differs from the one before it.
    /// Always false while debouncing.
    pub fn is_modified(&self) -> bool {
        if self.debouncing > 0 {
            return false;
        }
        self.current().first_difference(self.previous()).is_some()
    }

    /// Whether the switch at (`row`, `col`) was closed in the last pass.
    ///
    /// # Panics
    ///
    /// Panics if the cell is outside the matrix.
    pub fn cell_state(&self, row: usize, col: usize) -> bool {
        self.current().is_on(row, col)
    }

    /// Full bitset for `row` from the last pass.
    pub fn row_state(&self, row: usize) -> RowBits<COLS> {
        self.current().row(row)
    }

    /// Number of closed switches in the last pass.
    pub fn pressed_count(&self) -> usize {
        self.current().count()
    }

    /// Cells that changed between the last two visible readings.
    /// Empty unless [`Self::is_modified`] holds.
    pub fn changes(&self) -> impl Iterator<Item = KeyChange> + '_ {
        let modified = self.is_modified();
        let current = self.current();
        let previous = self.previous();
        (0..ROWS)
            .filter(move |_| modified)
            .flat_map(move |row| {
                let now = current.row(row);
                now.diff(previous.row(row)).iter_on().map(move |col| KeyChange {
                    row,
                    col,
                    pressed: now.is_on(col),
                })
            })
    }

    pub const fn rows(&self) -> usize {
        ROWS
    }

    pub const fn cols(&self) -> usize {
        COLS
    }

    /// Ghosting needs a diode-less row/column scan; a direct-wired matrix
    /// never produces it.
    pub const fn has_ghost(&self) -> bool {
        false
    }

    /// Passes left before the next reading becomes visible.
    pub fn debounce_remaining(&self) -> u8 {
        self.debouncing
    }

    pub fn current(&self) -> &MatrixSnapshot<ROWS, COLS> {
        &self.buffers[self.current]
    }

    pub fn previous(&self) -> &MatrixSnapshot<ROWS, COLS> {
        &self.buffers[self.current ^ 1]
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }

    /// Tear the scanner down and give the sampler back.
    pub fn into_sampler(self) -> S {
        self.sampler
    }
}
