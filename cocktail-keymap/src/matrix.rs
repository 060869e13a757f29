//! Matrix state storage.
//!
//! A row is a bitset with one bit per column (bit `c` set = switch at
//! column `c` closed). Rows are stored in a `u16`, so a matrix may have at
//! most 16 columns. Both limits are enforced at compile time.

use core::fmt;

/// Widest supported row, in columns.
pub const MAX_COLS: usize = 16;
/// Largest supported row count.
pub const MAX_ROWS: usize = 255;

/// Pressed state of one matrix row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct RowBits<const COLS: usize>(u16);

impl<const COLS: usize> RowBits<COLS> {
    /// Bits that correspond to a real column.
    pub const MASK: u16 = {
        assert!(COLS <= MAX_COLS, "matrix rows are limited to 16 columns");
        if COLS == MAX_COLS {
            u16::MAX
        } else {
            (1u16 << COLS) - 1
        }
    };

    /// A row with every switch open.
    pub const EMPTY: Self = Self(0);

    /// Build a row from raw bits, dropping anything past the last column.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & Self::MASK)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Whether the switch in `col` is closed.
    ///
    /// # Panics
    ///
    /// Panics if `col` is not a column of this matrix.
    pub fn is_on(self, col: usize) -> bool {
        assert!(col < COLS, "column {} out of range (cols = {})", col, COLS);
        self.0 & (1 << col) != 0
    }

    /// Set or clear the switch in `col`.
    pub fn set(&mut self, col: usize, on: bool) {
        assert!(col < COLS, "column {} out of range (cols = {})", col, COLS);
        if on {
            self.0 |= 1 << col;
        } else {
            self.0 &= !(1 << col);
        }
    }

    /// Number of closed switches in the row.
    pub const fn count(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Columns whose state differs between `self` and `other`.
    pub const fn diff(self, other: Self) -> Self {
        Self(self.0 ^ other.0)
    }

    /// Iterate over the indices of closed switches, lowest column first.
    pub fn iter_on(self) -> impl Iterator<Item = usize> {
        (0..COLS).filter(move |&col| self.0 & (1 << col) != 0)
    }
}

/// Renders bits in column order: column 0 first.
impl<const COLS: usize> fmt::Display for RowBits<COLS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for col in 0..COLS {
            f.write_str(if self.is_on(col) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// State of every cell of a `ROWS` x `COLS` matrix for one scan pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatrixSnapshot<const ROWS: usize, const COLS: usize> {
    rows: [RowBits<COLS>; ROWS],
}

impl<const ROWS: usize, const COLS: usize> Default for MatrixSnapshot<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROWS: usize, const COLS: usize> MatrixSnapshot<ROWS, COLS> {
    /// An all-released snapshot.
    pub const fn new() -> Self {
        const { assert!(ROWS <= MAX_ROWS, "matrix is limited to 255 rows") };
        const { assert!(COLS <= MAX_COLS, "matrix rows are limited to 16 columns") };
        Self {
            rows: [RowBits::EMPTY; ROWS],
        }
    }

    pub const fn rows(&self) -> usize {
        ROWS
    }

    pub const fn cols(&self) -> usize {
        COLS
    }

    pub fn row(&self, row: usize) -> RowBits<COLS> {
        self.rows[row]
    }

    pub fn set_row(&mut self, row: usize, bits: RowBits<COLS>) {
        self.rows[row] = bits;
    }

    pub fn is_on(&self, row: usize, col: usize) -> bool {
        self.rows[row].is_on(col)
    }

    /// Total number of closed switches.
    pub fn count(&self) -> usize {
        self.rows.iter().map(|r| r.count()).sum()
    }

    pub fn clear(&mut self) {
        self.rows = [RowBits::EMPTY; ROWS];
    }

    /// Index of the first row that differs from `other`.
    pub fn first_difference(&self, other: &Self) -> Option<usize> {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .position(|(a, b)| a != b)
    }
}

/// Debug table: a `r/c` header, then `row: bits` per row.
impl<const ROWS: usize, const COLS: usize> fmt::Display for MatrixSnapshot<ROWS, COLS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("r/c ")?;
        for col in 0..COLS {
            write!(f, "{:X}", col)?;
        }
        f.write_str("\n")?;
        for (row, bits) in self.rows.iter().enumerate() {
            writeln!(f, "{:02X}: {}", row, bits)?;
        }
        Ok(())
    }
}
