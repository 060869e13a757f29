//! Replay a scan script through the scanner and layer selector.
//!
//! Script format: one scan pass per line. A line lists the cells held
//! during that pass as `row,col` tokens separated by whitespace, or `-`
//! for none. Blank lines and text after `#` are ignored.

use std::fmt;

use anyhow::{bail, Context, Result};
use cocktail_keymap::{KeyEvent, LayerSelector, Profile, Scanner, VirtualSampler};

/// What one pass produced.
pub struct PassReport {
    /// 1-based pass number.
    pub pass: usize,
    /// Script line the pass came from.
    pub line: usize,
    pub modified: bool,
    pub pressed: usize,
    pub layer: usize,
    pub events: Vec<KeyEvent>,
    /// Rendered matrix, when requested.
    pub matrix: Option<String>,
}

impl fmt::Display for PassReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "pass {:>3} (line {}): modified={} pressed={} layer={}",
            self.pass, self.line, self.modified, self.pressed, self.layer
        )?;
        if let Some(matrix) = &self.matrix {
            for line in matrix.lines() {
                writeln!(f, "    {}", line)?;
            }
        }
        for event in &self.events {
            writeln!(
                f,
                "  {} {:?}",
                if event.pressed { "press  " } else { "release" },
                event.keycode
            )?;
        }
        Ok(())
    }
}

/// Parse a script into per-pass pressed rows, keeping the source line.
pub fn parse_script<const ROWS: usize, const COLS: usize>(
    input: &str,
) -> Result<Vec<(usize, [u16; ROWS])>> {
    let mut passes = Vec::new();

    for (line_num, line) in input.lines().enumerate() {
        let line_num = line_num + 1;
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let mut rows = [0u16; ROWS];
        for token in line.split_whitespace() {
            if token == "-" {
                continue;
            }
            let (row, col) = parse_cell(token)
                .with_context(|| format!("line {}: invalid cell `{}`", line_num, token))?;
            if row >= ROWS || col >= COLS {
                bail!(
                    "line {}: cell {},{} is outside the {}x{} matrix",
                    line_num,
                    row,
                    col,
                    ROWS,
                    COLS
                );
            }
            rows[row] |= 1 << col;
        }
        passes.push((line_num, rows));
    }

    if passes.is_empty() {
        bail!("script has no scan passes");
    }
    Ok(passes)
}

fn parse_cell(token: &str) -> Result<(usize, usize)> {
    let Some((row, col)) = token.split_once(',') else {
        bail!("expected `row,col`");
    };
    let row = row.parse().context("bad row")?;
    let col = col.parse().context("bad column")?;
    Ok((row, col))
}

/// Run every pass of `script` against `profile`.
pub fn run<const ROWS: usize, const COLS: usize>(
    profile: &Profile<ROWS, COLS>,
    script: &str,
    show_matrix: bool,
) -> Result<Vec<PassReport>> {
    profile
        .validate()
        .with_context(|| format!("profile {} is inconsistent", profile.name))?;
    let passes = parse_script::<ROWS, COLS>(script)?;

    let mut scanner: Scanner<_, ROWS, COLS> =
        Scanner::new(VirtualSampler::new(profile.matrix.polarity), profile.matrix);
    scanner.initialize()?;
    let mut selector = LayerSelector::new(&profile.keymap, &profile.fn_tables);

    let mut reports = Vec::with_capacity(passes.len());
    for (index, (line, rows)) in passes.into_iter().enumerate() {
        scanner.sampler_mut().set_rows(rows);
        scanner.scan()?;

        let mut events = Vec::new();
        for change in scanner.changes() {
            selector
                .process(change, |event| events.push(event))
                .with_context(|| format!("line {}: resolving {},{}", line, change.row, change.col))?;
        }

        reports.push(PassReport {
            pass: index + 1,
            line,
            modified: scanner.is_modified(),
            pressed: scanner.pressed_count(),
            layer: selector.layer(),
            events,
            matrix: show_matrix.then(|| scanner.current().to_string()),
        });
    }
    Ok(reports)
}
