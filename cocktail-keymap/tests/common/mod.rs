#![allow(dead_code)]

use cocktail_keymap::{MatrixConfig, Polarity, Scanner, VirtualSampler};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

pub type TestScanner<const ROWS: usize, const COLS: usize> = Scanner<VirtualSampler<ROWS>, ROWS, COLS>;

/// Initialized scanner over a virtual active-low board.
pub fn scanner<const ROWS: usize, const COLS: usize>(debounce: u8) -> TestScanner<ROWS, COLS> {
    let config = MatrixConfig::new(debounce, Polarity::ActiveLow);
    let mut scanner = Scanner::new(VirtualSampler::new(config.polarity), config);
    scanner.initialize().unwrap();
    scanner
}

/// Run `passes` scans and record `is_modified` after each one.
pub fn scan_n<const ROWS: usize, const COLS: usize>(
    scanner: &mut TestScanner<ROWS, COLS>,
    passes: usize,
) -> Vec<bool> {
    (0..passes)
        .map(|_| {
            scanner.scan().unwrap();
            scanner.is_modified()
        })
        .collect()
}
