//! Text rendering of a profile's keymap: one grid per layer, then the Fn
//! tables.

use anyhow::{bail, Context, Result};
use cocktail_keymap::layer::NUM_FN_KEYS;
use cocktail_keymap::{Keycode, Profile};

/// Width of one key cell, label plus padding.
const CELL: usize = 6;

/// Render every layer, or only `only_layer`, followed by the Fn tables.
pub fn render<const ROWS: usize, const COLS: usize>(
    profile: &Profile<ROWS, COLS>,
    only_layer: Option<usize>,
) -> Result<String> {
    profile
        .validate()
        .with_context(|| format!("profile {} is inconsistent", profile.name))?;

    let layers = profile.keymap.num_layers();
    let selected: Vec<usize> = match only_layer {
        Some(layer) if layer >= layers => {
            bail!("layer {} does not exist ({} has {} layers)", layer, profile.name, layers)
        }
        Some(layer) => vec![layer],
        None => (0..layers).collect(),
    };

    let mut out = format!("{}: {}\n", profile.name, profile.description);
    for layer in selected {
        out.push('\n');
        out.push_str(&render_layer(profile, layer)?);
    }
    out.push('\n');
    out.push_str(&render_fn_tables(profile));
    Ok(out)
}

fn render_layer<const ROWS: usize, const COLS: usize>(
    profile: &Profile<ROWS, COLS>,
    layer: usize,
) -> Result<String> {
    let mut out = format!("Layer {}\n", layer);

    out.push_str("r/c ");
    for col in 0..COLS {
        out.push_str(&format!("{:<width$}", col, width = CELL));
    }
    trim_line(&mut out);

    for row in 0..ROWS {
        out.push_str(&format!("{:>2}  ", row));
        for col in 0..COLS {
            let keycode = profile.keymap.keycode_at(layer, row, col)?;
            out.push_str(&format!("{:<width$}", label(keycode), width = CELL));
        }
        trim_line(&mut out);
    }
    Ok(out)
}

/// Cells are left-aligned; drop the padding after the last one and end the line.
fn trim_line(out: &mut String) {
    let trimmed = out.trim_end_matches(' ').len();
    out.truncate(trimmed);
    out.push('\n');
}

fn render_fn_tables<const ROWS: usize, const COLS: usize>(profile: &Profile<ROWS, COLS>) -> String {
    let mut out = String::from("Fn  layer  tap\n");
    for index in 0..NUM_FN_KEYS {
        let bit = 1u8 << index;
        let tap = profile.fn_tables.resolve_fallback_keycode(bit);
        out.push_str(&format!(
            "{:<3} {:>5}  {}\n",
            index,
            profile.fn_tables.resolve_layer(bit),
            if tap == Keycode::No { "-" } else { tap.display_name() }
        ));
    }
    out
}

fn label(keycode: Keycode) -> &'static str {
    if keycode == Keycode::No {
        "."
    } else {
        keycode.display_name()
    }
}
