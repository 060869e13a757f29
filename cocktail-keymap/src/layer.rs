//! Fn-key layer selection.
//!
//! Up to eight keys on the base layer are Fn keys. Holding Fn key `i`
//! shifts the keymap to `fn_layer[i]`. Tapping it, pressing and releasing
//! it with no other key in between, sends `fn_keycode[i]` instead, so an Fn
//! key doubles as an ordinary key.

use log::{debug, warn};

use crate::keycode::Keycode;
use crate::keymap::{Keymap, KeymapError};
use crate::scanner::KeyChange;

/// Number of Fn keys a bitmask can describe.
pub const NUM_FN_KEYS: usize = 8;

/// Index of the Fn bit that wins when several are held: the lowest one.
/// An empty mask resolves to index 0.
pub fn active_fn_bit(fn_bits: u8) -> usize {
    if fn_bits == 0 {
        0
    } else {
        fn_bits.trailing_zeros() as usize
    }
}

/// The two per-Fn-key resolution tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FnTables {
    /// Layer to shift to while the Fn key is held.
    pub layers: [u8; NUM_FN_KEYS],
    /// Keycode sent when the Fn key is tapped.
    pub keycodes: [Keycode; NUM_FN_KEYS],
}

impl FnTables {
    pub const fn new(layers: [u8; NUM_FN_KEYS], keycodes: [Keycode; NUM_FN_KEYS]) -> Self {
        Self { layers, keycodes }
    }

    pub fn resolve_layer(&self, fn_bits: u8) -> usize {
        self.layers[active_fn_bit(fn_bits)] as usize
    }

    pub fn resolve_fallback_keycode(&self, fn_bits: u8) -> Keycode {
        self.keycodes[active_fn_bit(fn_bits)]
    }
}

/// Keycode transition handed to the report side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub keycode: Keycode,
    pub pressed: bool,
}

impl KeyEvent {
    pub const fn press(keycode: Keycode) -> Self {
        Self {
            keycode,
            pressed: true,
        }
    }

    pub const fn release(keycode: Keycode) -> Self {
        Self {
            keycode,
            pressed: false,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayerState {
    Base,
    /// Shifted by the Fn key with this index.
    Shifted(u8),
}

/// Layer state machine fed with matrix changes.
///
/// Fn keys are recognised on the base layer only. Other keys resolve on
/// the layer active when they are pressed, and their release reports the
/// same keycode even if the layer changed while they were held.
pub struct LayerSelector<'a, const ROWS: usize, const COLS: usize> {
    keymap: &'a Keymap<ROWS, COLS>,
    fn_tables: &'a FnTables,
    state: LayerState,
    /// Fn keys currently held, bit `i` = Fn key `i`.
    fn_held: u8,
    /// Another key was pressed since the layer was shifted.
    used: bool,
    /// Keycode each held cell was pressed with.
    held: [[Keycode; COLS]; ROWS],
}

impl<'a, const ROWS: usize, const COLS: usize> LayerSelector<'a, ROWS, COLS> {
    pub fn new(keymap: &'a Keymap<ROWS, COLS>, fn_tables: &'a FnTables) -> Self {
        Self {
            keymap,
            fn_tables,
            state: LayerState::Base,
            fn_held: 0,
            used: false,
            held: [[Keycode::No; COLS]; ROWS],
        }
    }

    pub fn state(&self) -> LayerState {
        self.state
    }

    pub fn fn_held(&self) -> u8 {
        self.fn_held
    }

    /// Layer the keymap is consulted with right now.
    pub fn layer(&self) -> usize {
        match self.state {
            LayerState::Base => 0,
            LayerState::Shifted(index) => self.fn_tables.resolve_layer(1 << index),
        }
    }

    /// Feed one matrix change, emitting the resulting key events.
    pub fn process(
        &mut self,
        change: KeyChange,
        mut emit: impl FnMut(KeyEvent),
    ) -> Result<(), KeymapError> {
        let base = self.keymap.keycode_at(0, change.row, change.col)?;
        if let Some(index) = base.fn_index() {
            self.process_fn(index, change.pressed, &mut emit);
            return Ok(());
        }

        // The base lookup above bounds-checked the cell.
        let (row, col) = (change.row, change.col);
        let keycode = if change.pressed {
            let keycode = self.keymap.keycode_at(self.layer(), row, col)?;
            if matches!(self.state, LayerState::Shifted(_)) {
                self.used = true;
            }
            self.held[row][col] = keycode;
            keycode
        } else {
            core::mem::replace(&mut self.held[row][col], Keycode::No)
        };
        if keycode != Keycode::No {
            emit(KeyEvent {
                keycode,
                pressed: change.pressed,
            });
        }
        Ok(())
    }

    fn process_fn(&mut self, index: u8, pressed: bool, emit: &mut impl FnMut(KeyEvent)) {
        let bit = 1u8 << index;
        if pressed {
            self.fn_held |= bit;
        } else {
            self.fn_held &= !bit;
        }
        let lowest = active_fn_bit(self.fn_held) as u8;

        match self.state {
            LayerState::Base if pressed => {
                self.state = LayerState::Shifted(lowest);
                self.used = false;
                debug!("Fn{} held, layer {}", lowest, self.layer());
            }
            LayerState::Base => {
                warn!("Fn{} released while no layer was active", index);
            }
            LayerState::Shifted(active) if pressed => {
                // Combining two Fn keys counts as using the first one.
                self.used = true;
                if lowest != active {
                    self.state = LayerState::Shifted(lowest);
                    debug!("Fn{} takes over, layer {}", lowest, self.layer());
                }
            }
            LayerState::Shifted(active) if active == index => {
                if !self.used {
                    let keycode = self.fn_tables.resolve_fallback_keycode(bit);
                    if keycode != Keycode::No {
                        emit(KeyEvent::press(keycode));
                        emit(KeyEvent::release(keycode));
                    }
                }
                if self.fn_held == 0 {
                    self.state = LayerState::Base;
                    debug!("Fn{} released, back to base layer", index);
                } else {
                    self.state = LayerState::Shifted(lowest);
                    self.used = true;
                    debug!("Fn{} released, Fn{} still held, layer {}", index, lowest, self.layer());
                }
            }
            LayerState::Shifted(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::Layer;

    use crate::keycode::Keycode::*;

    const LAYERS: [Layer<1, 4>; 3] = [[[A, Fn1, Fn2, Fn5]], [[F1, No, No, No]], [[F2, No, No, No]]];
    const KEYMAP: Keymap<1, 4> = Keymap::new(&LAYERS);
    const TABLES: FnTables = FnTables::new(
        [0, 1, 2, 0, 0, 2, 0, 0],
        [No, Slash, No, No, No, Space, No, No],
    );

    fn change(col: usize, pressed: bool) -> KeyChange {
        KeyChange { row: 0, col, pressed }
    }

    fn feed(selector: &mut LayerSelector<'_, 1, 4>, col: usize, pressed: bool) -> Vec<KeyEvent> {
        let mut events = Vec::new();
        selector.process(change(col, pressed), |e| events.push(e)).unwrap();
        events
    }

    #[test]
    fn lowest_bit_wins() {
        assert_eq!(active_fn_bit(0b0010_0100), 2);
        assert_eq!(active_fn_bit(0b1000_0000), 7);
        assert_eq!(active_fn_bit(0), 0);
    }

    #[test]
    fn tables_resolve_through_lowest_bit() {
        let tables = FnTables::new(
            [0, 0, 3, 0, 0, 4, 0, 0],
            [No, No, Semicolon, No, No, Space, No, No],
        );
        let bits = (1 << 2) | (1 << 5);
        assert_eq!(tables.resolve_layer(bits), 3);
        assert_eq!(tables.resolve_fallback_keycode(bits), Semicolon);
    }

    #[test]
    fn empty_mask_uses_entry_zero() {
        assert_eq!(TABLES.resolve_layer(0), 0);
        assert_eq!(TABLES.resolve_fallback_keycode(0), No);
    }

    #[test]
    fn holding_fn_shifts_layer() {
        let mut selector = LayerSelector::new(&KEYMAP, &TABLES);
        assert!(feed(&mut selector, 1, true).is_empty());
        assert_eq!(selector.state(), LayerState::Shifted(1));
        assert_eq!(feed(&mut selector, 0, true), [KeyEvent::press(F1)]);
        assert_eq!(feed(&mut selector, 0, false), [KeyEvent::release(F1)]);
        // Used, so no fallback on release.
        assert!(feed(&mut selector, 1, false).is_empty());
        assert_eq!(selector.state(), LayerState::Base);
        assert_eq!(feed(&mut selector, 0, true), [KeyEvent::press(A)]);
    }

    #[test]
    fn tapping_fn_sends_fallback() {
        let mut selector = LayerSelector::new(&KEYMAP, &TABLES);
        feed(&mut selector, 1, true);
        assert_eq!(
            feed(&mut selector, 1, false),
            [KeyEvent::press(Slash), KeyEvent::release(Slash)]
        );
        assert_eq!(selector.layer(), 0);
    }

    #[test]
    fn tap_without_fallback_is_silent() {
        let mut selector = LayerSelector::new(&KEYMAP, &TABLES);
        feed(&mut selector, 2, true);
        assert!(feed(&mut selector, 2, false).is_empty());
    }

    #[test]
    fn lower_fn_takes_over() {
        let mut selector = LayerSelector::new(&KEYMAP, &TABLES);
        feed(&mut selector, 3, true);
        assert_eq!(selector.state(), LayerState::Shifted(5));
        assert_eq!(selector.layer(), 2);

        feed(&mut selector, 2, true);
        assert_eq!(selector.state(), LayerState::Shifted(2));

        // Fn5 is not the active key; releasing it changes nothing.
        assert!(feed(&mut selector, 3, false).is_empty());
        assert_eq!(selector.state(), LayerState::Shifted(2));

        assert!(feed(&mut selector, 2, false).is_empty());
        assert_eq!(selector.state(), LayerState::Base);
    }

    #[test]
    fn releasing_active_fn_falls_back_to_remaining_one() {
        let mut selector = LayerSelector::new(&KEYMAP, &TABLES);
        feed(&mut selector, 1, true);
        feed(&mut selector, 3, true);
        assert_eq!(selector.state(), LayerState::Shifted(1));

        assert!(feed(&mut selector, 1, false).is_empty());
        assert_eq!(selector.state(), LayerState::Shifted(5));
        // Fn5 was combined with Fn1, so it does not tap either.
        assert!(feed(&mut selector, 3, false).is_empty());
        assert_eq!(selector.fn_held(), 0);
    }

    #[test]
    fn release_reports_keycode_from_press() {
        let mut selector = LayerSelector::new(&KEYMAP, &TABLES);
        feed(&mut selector, 1, true);
        assert_eq!(feed(&mut selector, 0, true), [KeyEvent::press(F1)]);
        assert!(feed(&mut selector, 1, false).is_empty());
        assert_eq!(selector.layer(), 0);
        assert_eq!(feed(&mut selector, 0, false), [KeyEvent::release(F1)]);
    }

    #[test]
    fn release_without_press_is_silent() {
        let mut selector = LayerSelector::new(&KEYMAP, &TABLES);
        assert!(feed(&mut selector, 0, false).is_empty());
    }

    #[test]
    fn out_of_range_change_is_rejected() {
        let mut selector = LayerSelector::new(&KEYMAP, &TABLES);
        let err = selector.process(KeyChange { row: 1, col: 0, pressed: true }, |_| {});
        assert_eq!(err, Err(KeymapError::RowOutOfRange { row: 1, rows: 1 }));
    }
}
