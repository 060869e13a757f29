//! Macway: a 59-key Model M conversion on a 12x8 matrix.
//!
//! ```text
//! ,-----------------------------------------------------------.
//! |Esc|  1|  2|  3|  4|  5|  6|  7|  8|  9|  0|  -|  =|  \|  `|
//! |-----------------------------------------------------------|
//! |Tab  |  Q|  W|  E|  R|  T|  Y|  U|  I|  O|  P|  [|  ]| BS  |
//! |-----------------------------------------------------------|
//! |Contro|  A|  S|  D|  F|  G|  H|  J|  K|  L|Fn3|  '|Return  |
//! |-----------------------------------------------------------|
//! |Shift   |  Z|  X|  C|  V|  B|  N|  M|  ,|  .|Fn2|Shift     |
//! |-----------------------------------------------------------|
//! |Ctrl |   |Alt  |           Fn4             |Alt  |   |Fn1  |
//! `-----'   `---------------------------------------'   `-----'
//! ```
//!
//! Fn1 and Fn2 hold the function/navigation layer, Fn3 and Fn4 the cursor
//! layer. Tapped, Fn2 sends `/`, Fn3 `;` and Fn4 space.

use crate::keycode::Keycode::{self, *};
use crate::keymap::{Keymap, Layer};
use crate::layer::FnTables;
use crate::profile::Profile;
use crate::scanner::{MatrixConfig, Polarity};

pub const ROWS: usize = 12;
pub const COLS: usize = 8;

const ___: Keycode = No;

#[rustfmt::skip]
const LAYERS: [Layer<ROWS, COLS>; 3] = [
    // Layer 0: default
    [
        //  0          1          2          3     4          5          6          7
        [___,       ___,       LCtrl,     ___,  ___,       ___,       Fn1,       ___   ], // 0
        [___,       LShift,    ___,       ___,  ___,       ___,       RShift,    ___   ], // 1
        [___,       Tab,       Escape,    N1,   Q,         A,         Z,         ___   ], // 2
        [___,       LCtrl,     ___,       N2,   W,         S,         X,         ___   ], // 3
        [___,       ___,       ___,       N3,   E,         D,         C,         ___   ], // 4
        [G,         T,         N5,        N4,   R,         F,         V,         B     ], // 5
        [___,       Backspace, ___,       ___,  Backslash, Grave,     Enter,     Fn4   ], // 6
        [H,         Y,         N6,        N7,   U,         J,         M,         N     ], // 7
        [___,       RBracket,  Equal,     N8,   I,         K,         Comma,     ___   ], // 8
        [___,       ___,       ___,       N9,   O,         L,         Dot,       ___   ], // 9
        [___,       LBracket,  Minus,     N0,   P,         Fn3,       Quote,     Fn2   ], // A
        [LAlt,      ___,       ___,       ___,  ___,       ___,       ___,       RAlt  ], // B
    ],
    // Layer 1: function keys and navigation
    [
        [___,       ___,       LCtrl,     ___,  ___,       ___,       ___,       ___   ], // 0
        [___,       LShift,    ___,       ___,  ___,       ___,       RShift,    ___   ], // 1
        [___,       CapsLock,  Escape,    F1,   ___,       ___,       ___,       ___   ], // 2
        [___,       LCtrl,     ___,       F2,   ___,       ___,       ___,       ___   ], // 3
        [___,       ___,       ___,       F3,   ___,       ___,       ___,       ___   ], // 4
        [___,       ___,       F5,        F4,   ___,       ___,       ___,       ___   ], // 5
        [___,       Delete,    ___,       ___,  Insert,    Delete,    Enter,     ___   ], // 6
        [___,       PageUp,    F6,        F7,   Home,      Left,      ___,       PageDown], // 7
        [___,       ___,       F12,       F8,   Up,        Down,      ___,       ___   ], // 8
        [___,       ___,       ___,       F9,   End,       Right,     ___,       ___   ], // 9
        [___,       PrintScreen, F11,     F10,  ScrollLock, ___,      ___,       ___   ], // A
        [LAlt,      ___,       ___,       ___,  ___,       ___,       ___,       RAlt  ], // B
    ],
    // Layer 2: vi-style cursor
    [
        [___,       ___,       LCtrl,     ___,  ___,       ___,       ___,       ___   ], // 0
        [___,       LShift,    ___,       ___,  ___,       ___,       RShift,    ___   ], // 1
        [___,       Tab,       Escape,    ___,  ___,       ___,       ___,       ___   ], // 2
        [___,       LCtrl,     ___,       ___,  ___,       ___,       ___,       ___   ], // 3
        [___,       ___,       ___,       ___,  ___,       ___,       ___,       ___   ], // 4
        [___,       ___,       ___,       ___,  ___,       ___,       ___,       ___   ], // 5
        [___,       Delete,    ___,       ___,  ___,       ___,       Enter,     ___   ], // 6
        [Left,      Home,      ___,       ___,  PageDown,  Down,      ___,       ___   ], // 7
        [___,       ___,       ___,       ___,  PageUp,    Up,        ___,       ___   ], // 8
        [___,       ___,       ___,       ___,  End,       Right,     ___,       ___   ], // 9
        [___,       ___,       ___,       ___,  ___,       ___,       ___,       ___   ], // A
        [LAlt,      ___,       ___,       ___,  ___,       ___,       ___,       RAlt  ], // B
    ],
];

const FN_LAYERS: [u8; 8] = [0, 1, 1, 2, 2, 0, 0, 0];
const FN_KEYCODES: [Keycode; 8] = [No, No, Slash, Semicolon, Space, No, No, No];

pub static MACWAY: Profile<ROWS, COLS> = Profile {
    name: "macway",
    description: "Model M conversion, 59 keys with HHKB-style Fn layers",
    matrix: MatrixConfig::new(5, Polarity::ActiveLow),
    keymap: Keymap::new(&LAYERS),
    fn_tables: FnTables::new(FN_LAYERS, FN_KEYCODES),
};
