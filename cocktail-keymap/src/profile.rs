//! Board profiles: everything that differs between wirings, as data.

use core::fmt;

use crate::keymap::Keymap;
use crate::layer::{FnTables, NUM_FN_KEYS};
use crate::scanner::MatrixConfig;

/// A profile whose tables do not fit together.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ProfileError {
    /// An Fn key shifts to a layer the keymap does not have.
    FnLayerMissing { fn_key: usize, layer: usize, layers: usize },
    /// A shifted layer carries an Fn key; Fn keys only act on the base layer.
    FnKeyOnShiftedLayer { layer: usize, row: usize, col: usize },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::FnLayerMissing {
                fn_key,
                layer,
                layers,
            } => write!(
                f,
                "Fn{} shifts to layer {}, but the keymap has {} layers",
                fn_key, layer, layers
            ),
            ProfileError::FnKeyOnShiftedLayer { layer, row, col } => write!(
                f,
                "layer {} has an Fn key at row {}, column {}",
                layer, row, col
            ),
        }
    }
}

impl core::error::Error for ProfileError {}

/// Complete configuration of one board.
#[derive(Copy, Clone, Debug)]
pub struct Profile<const ROWS: usize, const COLS: usize> {
    pub name: &'static str,
    pub description: &'static str,
    pub matrix: MatrixConfig,
    pub keymap: Keymap<ROWS, COLS>,
    pub fn_tables: FnTables,
}

impl<const ROWS: usize, const COLS: usize> Profile<ROWS, COLS> {
    /// Check that the Fn tables and the keymap agree.
    pub fn validate(&self) -> Result<(), ProfileError> {
        let layers = self.keymap.num_layers();
        for fn_key in 0..NUM_FN_KEYS {
            let layer = self.fn_tables.layers[fn_key] as usize;
            if layer >= layers {
                return Err(ProfileError::FnLayerMissing {
                    fn_key,
                    layer,
                    layers,
                });
            }
        }

        for layer in 1..layers {
            let Some(grid) = self.keymap.layer(layer) else {
                continue;
            };
            for (row, keys) in grid.iter().enumerate() {
                if let Some(col) = keys.iter().position(|kc| kc.is_fn()) {
                    return Err(ProfileError::FnKeyOnShiftedLayer { layer, row, col });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode::Keycode::*;
    use crate::keymap::Layer;
    use crate::scanner::Polarity;

    const LAYERS: [Layer<1, 2>; 2] = [[[Fn0, A]], [[No, B]]];
    const BAD_LAYERS: [Layer<1, 2>; 2] = [[[Fn0, A]], [[Fn0, B]]];

    fn profile(layers: &'static [Layer<1, 2>], fn_layer: u8) -> Profile<1, 2> {
        Profile {
            name: "test",
            description: "",
            matrix: MatrixConfig::new(0, Polarity::ActiveLow),
            keymap: Keymap::new(layers),
            fn_tables: FnTables::new([fn_layer, 0, 0, 0, 0, 0, 0, 0], [No; 8]),
        }
    }

    #[test]
    fn consistent_profile_validates() {
        assert_eq!(profile(&LAYERS, 1).validate(), Ok(()));
    }

    #[test]
    fn missing_fn_layer_is_rejected() {
        assert_eq!(
            profile(&LAYERS, 2).validate(),
            Err(ProfileError::FnLayerMissing {
                fn_key: 0,
                layer: 2,
                layers: 2
            })
        );
    }

    #[test]
    fn fn_key_on_shifted_layer_is_rejected() {
        assert_eq!(
            profile(&BAD_LAYERS, 1).validate(),
            Err(ProfileError::FnKeyOnShiftedLayer {
                layer: 1,
                row: 0,
                col: 0
            })
        );
    }
}
