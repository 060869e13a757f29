//! Four-player cocktail arcade controller.
//!
//! Every switch has its own pin: rows 0-2 are ports B, C and D (bits 0-5),
//! row 3 is port F bits 0-5 and row 4 is port F bits 6-7. Each row sends
//! the digits 0-5 so the host sees one "pad" per row.

use crate::keycode::Keycode::{self, *};
use crate::keymap::{Keymap, Layer};
use crate::layer::FnTables;
use crate::profile::Profile;
use crate::scanner::{MatrixConfig, Polarity};

pub const ROWS: usize = 5;
pub const COLS: usize = 6;

#[rustfmt::skip]
const LAYERS: [Layer<ROWS, COLS>; 1] = [
    [
        [N0, N1, N2, N3, N4, N5],
        [N0, N1, N2, N3, N4, N5],
        [N0, N1, N2, N3, N4, N5],
        [N0, N1, N2, N3, N4, N5],
        [N0, N1, N2, N3, N4, N5],
    ],
];

const FN_KEYCODES: [Keycode; 8] = [No, No, Slash, Semicolon, Space, No, No, No];

pub static COCKTAIL: Profile<ROWS, COLS> = Profile {
    name: "cocktail",
    description: "super fantastic cocktail arcade, four player controller",
    matrix: MatrixConfig::new(0, Polarity::ActiveLow),
    keymap: Keymap::new(&LAYERS),
    fn_tables: FnTables::new([0; 8], FN_KEYCODES),
};
