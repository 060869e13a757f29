mod layout;
mod simulate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cocktail_keymap::profiles::{COCKTAIL, MACWAY};
use cocktail_keymap::Profile;
use std::fs;

#[derive(Parser)]
#[command(name = "cocktail-cli")]
#[command(about = "Inspect keymap profiles and replay matrix scans on the host")]
struct Cli {
    /// Log engine activity (debounce swaps, layer changes)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProfileName {
    Cocktail,
    Macway,
}

#[derive(Subcommand)]
enum Command {
    /// List the built-in board profiles
    Profiles,
    /// Print the keymap grid and Fn tables of a profile
    Layout {
        #[arg(short, long, value_enum, default_value = "cocktail")]
        profile: ProfileName,
        /// Only print this layer
        #[arg(short, long)]
        layer: Option<usize>,
    },
    /// Replay a scan script through the scanner and layer selector
    Simulate {
        #[arg(short, long, value_enum, default_value = "cocktail")]
        profile: ProfileName,
        /// Script file: one scan pass per line, pressed cells as `row,col`
        script: String,
        /// Print the matrix after every pass
        #[arg(short = 'm', long)]
        show_matrix: bool,
    },
}

/// One line per profile for the `profiles` listing.
fn summary<const ROWS: usize, const COLS: usize>(profile: &Profile<ROWS, COLS>) -> String {
    format!(
        "{:<10} {:>2}x{:<2} {} layer(s), debounce {:>2}  {}",
        profile.name,
        ROWS,
        COLS,
        profile.keymap.num_layers(),
        profile.matrix.debounce,
        profile.description
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    match cli.command {
        Command::Profiles => {
            println!("{}", summary(&COCKTAIL));
            println!("{}", summary(&MACWAY));
        }
        Command::Layout { profile, layer } => {
            let text = match profile {
                ProfileName::Cocktail => layout::render(&COCKTAIL, layer)?,
                ProfileName::Macway => layout::render(&MACWAY, layer)?,
            };
            print!("{}", text);
        }
        Command::Simulate {
            profile,
            script,
            show_matrix,
        } => {
            let contents =
                fs::read_to_string(&script).with_context(|| format!("reading {}", script))?;
            let reports = match profile {
                ProfileName::Cocktail => simulate::run(&COCKTAIL, &contents, show_matrix),
                ProfileName::Macway => simulate::run(&MACWAY, &contents, show_matrix),
            }
            .with_context(|| format!("simulating {}", script))?;

            for report in reports {
                print!("{}", report);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_dimensions_and_debounce() {
        let line = summary(&MACWAY);
        assert!(line.starts_with(MACWAY.name));
        assert!(line.contains("12x8"));
        assert!(line.contains("3 layer(s), debounce  5"));
    }
}
