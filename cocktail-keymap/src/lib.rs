//! Matrix scanning, debouncing and keymap resolution for the cocktail
//! controller and related boards.
//!
//! This crate is `no_std` so the same engine runs in the AVR firmware and
//! in the host CLI. It knows nothing about USB; a driver loop calls
//! [`Scanner::scan`] on its own schedule and turns the resulting
//! [`KeyChange`]s into keycodes through a [`LayerSelector`].

#![cfg_attr(not(test), no_std)]

pub mod keycode;
pub mod keymap;
pub mod layer;
pub mod matrix;
pub mod profile;
pub mod profiles;
pub mod sampler;
pub mod scanner;

pub use keycode::Keycode;
pub use keymap::{Keymap, KeymapError, Layer};
pub use layer::{active_fn_bit, FnTables, KeyEvent, LayerSelector, LayerState};
pub use matrix::{MatrixSnapshot, RowBits};
pub use profile::{Profile, ProfileError};
pub use sampler::{DirectPinSampler, Sampler, VirtualSampler};
pub use scanner::{KeyChange, MatrixConfig, Polarity, Scanner};
