//! Static keymap tables.
//!
//! A keymap is a fixed stack of layers, each one a full `ROWS` x `COLS`
//! grid of keycodes. Lookups do not fall through between layers: a shifted
//! layer repeats every key it wants to keep.

use core::fmt;

use crate::keycode::Keycode;

/// One full grid of keycodes.
pub type Layer<const ROWS: usize, const COLS: usize> = [[Keycode; COLS]; ROWS];

/// Out-of-range lookup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeymapError {
    LayerOutOfRange { layer: usize, layers: usize },
    RowOutOfRange { row: usize, rows: usize },
    ColOutOfRange { col: usize, cols: usize },
}

impl fmt::Display for KeymapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeymapError::LayerOutOfRange { layer, layers } => {
                write!(f, "layer {} out of range ({} layers)", layer, layers)
            }
            KeymapError::RowOutOfRange { row, rows } => {
                write!(f, "row {} out of range ({} rows)", row, rows)
            }
            KeymapError::ColOutOfRange { col, cols } => {
                write!(f, "column {} out of range ({} columns)", col, cols)
            }
        }
    }
}

impl core::error::Error for KeymapError {}

/// Read-only layer × row × column → keycode table.
#[derive(Copy, Clone, Debug)]
pub struct Keymap<const ROWS: usize, const COLS: usize> {
    layers: &'static [Layer<ROWS, COLS>],
}

impl<const ROWS: usize, const COLS: usize> Keymap<ROWS, COLS> {
    /// Wrap a static layer stack. Layer 0 is the base layer.
    pub const fn new(layers: &'static [Layer<ROWS, COLS>]) -> Self {
        assert!(!layers.is_empty(), "a keymap needs a base layer");
        Self { layers }
    }

    pub const fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Keycode at (`layer`, `row`, `col`).
    pub fn keycode_at(&self, layer: usize, row: usize, col: usize) -> Result<Keycode, KeymapError> {
        let grid = self.layers.get(layer).ok_or(KeymapError::LayerOutOfRange {
            layer,
            layers: self.layers.len(),
        })?;
        let keys = grid
            .get(row)
            .ok_or(KeymapError::RowOutOfRange { row, rows: ROWS })?;
        keys.get(col)
            .copied()
            .ok_or(KeymapError::ColOutOfRange { col, cols: COLS })
    }

    /// Borrow a whole layer, for printing.
    pub fn layer(&self, layer: usize) -> Option<&'static Layer<ROWS, COLS>> {
        self.layers.get(layer)
    }

    /// Matrix positions that carry an Fn key on the base layer.
    pub fn fn_keys(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.layers[0].iter().enumerate().flat_map(|(row, keys)| {
            keys.iter()
                .enumerate()
                .filter_map(move |(col, kc)| kc.fn_index().map(|index| (row, col, index)))
        })
    }
}
