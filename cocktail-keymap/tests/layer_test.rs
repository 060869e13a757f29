mod common;

use cocktail_keymap::profiles::{COCKTAIL, MACWAY};
use cocktail_keymap::{KeyEvent, Keycode, LayerSelector, LayerState, MatrixConfig, Scanner, VirtualSampler};

/// Drive a full scan + layer pipeline and collect every emitted event.
struct Rig<const ROWS: usize, const COLS: usize> {
    scanner: Scanner<VirtualSampler<ROWS>, ROWS, COLS>,
}

impl<const ROWS: usize, const COLS: usize> Rig<ROWS, COLS> {
    fn new(matrix: MatrixConfig) -> Self {
        // Debounce off so each pass is visible.
        let config = MatrixConfig::new(0, matrix.polarity);
        let mut scanner = Scanner::new(VirtualSampler::new(config.polarity), config);
        scanner.initialize().unwrap();
        Self { scanner }
    }

    fn step(
        &mut self,
        selector: &mut LayerSelector<'_, ROWS, COLS>,
        row: usize,
        col: usize,
        pressed: bool,
    ) -> Vec<KeyEvent> {
        self.scanner.sampler_mut().set(row, col, pressed);
        self.scanner.scan().unwrap();
        let mut events = Vec::new();
        for change in self.scanner.changes() {
            selector.process(change, |e| events.push(e)).unwrap();
        }
        events
    }
}

#[test]
fn cocktail_rows_send_digits() {
    let mut rig = Rig::<5, 6>::new(COCKTAIL.matrix);
    let mut selector = LayerSelector::new(&COCKTAIL.keymap, &COCKTAIL.fn_tables);

    assert_eq!(rig.step(&mut selector, 3, 4, true), [KeyEvent::press(Keycode::N4)]);
    assert_eq!(rig.step(&mut selector, 3, 4, false), [KeyEvent::release(Keycode::N4)]);
}

#[test]
fn cocktail_fn_tables_match_board() {
    let tables = &COCKTAIL.fn_tables;
    assert_eq!(tables.resolve_fallback_keycode(1 << 2), Keycode::Slash);
    assert_eq!(tables.resolve_fallback_keycode(1 << 3), Keycode::Semicolon);
    assert_eq!(tables.resolve_fallback_keycode(1 << 4), Keycode::Space);
    assert_eq!(tables.resolve_layer(0xFF), 0);
}

#[test]
fn macway_fn1_reaches_navigation_layer() {
    let mut rig = Rig::<12, 8>::new(MACWAY.matrix);
    let mut selector = LayerSelector::new(&MACWAY.keymap, &MACWAY.fn_tables);

    // Fn1 sits on the right Ctrl position.
    assert!(rig.step(&mut selector, 0, 6, true).is_empty());
    assert_eq!(selector.state(), LayerState::Shifted(1));
    assert_eq!(selector.layer(), 1);

    // `I` becomes Up.
    assert_eq!(rig.step(&mut selector, 8, 4, true), [KeyEvent::press(Keycode::Up)]);
    assert_eq!(rig.step(&mut selector, 8, 4, false), [KeyEvent::release(Keycode::Up)]);
    assert!(rig.step(&mut selector, 0, 6, false).is_empty());
    assert_eq!(selector.state(), LayerState::Base);

    assert_eq!(rig.step(&mut selector, 8, 4, true), [KeyEvent::press(Keycode::I)]);
}

#[test]
fn macway_tapped_space_bar_sends_space() {
    let mut rig = Rig::<12, 8>::new(MACWAY.matrix);
    let mut selector = LayerSelector::new(&MACWAY.keymap, &MACWAY.fn_tables);

    assert!(rig.step(&mut selector, 6, 7, true).is_empty());
    assert_eq!(selector.layer(), 2);
    assert_eq!(
        rig.step(&mut selector, 6, 7, false),
        [KeyEvent::press(Keycode::Space), KeyEvent::release(Keycode::Space)]
    );
}

#[test]
fn macway_space_bar_held_with_hjkl_moves_cursor() {
    let mut rig = Rig::<12, 8>::new(MACWAY.matrix);
    let mut selector = LayerSelector::new(&MACWAY.keymap, &MACWAY.fn_tables);

    rig.step(&mut selector, 6, 7, true);
    assert_eq!(rig.step(&mut selector, 7, 0, true), [KeyEvent::press(Keycode::Left)]);
    assert_eq!(rig.step(&mut selector, 7, 0, false), [KeyEvent::release(Keycode::Left)]);
    assert!(rig.step(&mut selector, 6, 7, false).is_empty());
}

#[test]
fn macway_semicolon_and_slash_prefer_lower_fn() {
    let mut rig = Rig::<12, 8>::new(MACWAY.matrix);
    let mut selector = LayerSelector::new(&MACWAY.keymap, &MACWAY.fn_tables);

    // Fn3 (`;`) then Fn2 (`/`): Fn2 is the lower bit and takes over.
    rig.step(&mut selector, 10, 5, true);
    assert_eq!(selector.layer(), 2);
    rig.step(&mut selector, 10, 7, true);
    assert_eq!(selector.state(), LayerState::Shifted(2));
    assert_eq!(selector.layer(), 1);
    assert!(rig.step(&mut selector, 10, 7, false).is_empty());
    assert!(rig.step(&mut selector, 10, 5, false).is_empty());
    assert_eq!(selector.fn_held(), 0);
}

#[test]
fn macway_key_held_across_layer_change_releases_what_it_pressed() {
    let mut rig = Rig::<12, 8>::new(MACWAY.matrix);
    let mut selector = LayerSelector::new(&MACWAY.keymap, &MACWAY.fn_tables);

    let mut events = Vec::new();
    events.extend(rig.step(&mut selector, 0, 6, true));
    events.extend(rig.step(&mut selector, 8, 4, true));
    events.extend(rig.step(&mut selector, 0, 6, false));
    assert_eq!(selector.layer(), 0);
    events.extend(rig.step(&mut selector, 8, 4, false));

    assert_eq!(
        events,
        [KeyEvent::press(Keycode::Up), KeyEvent::release(Keycode::Up)]
    );
}
