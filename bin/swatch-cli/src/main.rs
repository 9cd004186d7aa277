//! swatch - resolve CSS color expressions to hex.

use anyhow::{Context, Result};
use clap::Parser;
use swatch::{decode_hex_color, parse_color, Hex};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "swatch")]
#[command(author, version, about = "Resolve CSS color expressions to hex")]
#[command(long_about = "
Resolve colors given as hex, CSS named colors or CSS color functions to a
quantized sRGB color.

Examples:
  swatch chocolate                      # #d2691e
  swatch 'oklch(0.7 0.1 120deg)'        # #96a85e
  swatch 'hsl(120, 100%, 50%, 0.5)'     # #00ff0080
  swatch --decode '#fff' '#0000'        # 255 255 255 / 0 0 0 0
")]
struct Cli {
    /// Color expressions to resolve
    #[arg(required = true)]
    colors: Vec<String>,

    /// Decode hex colors and print their bytes
    #[arg(short, long)]
    decode: bool,

    /// Print the sRGB components in [0, 1] next to each color
    #[arg(short, long, conflicts_with = "decode")]
    components: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn bytes(hex: &Hex) -> String {
    let [red, green, blue] = hex.rgb();
    match hex.alpha() {
        Some(alpha) => format!("{red} {green} {blue} {alpha}"),
        None => format!("{red} {green} {blue}"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    for color in &cli.colors {
        if cli.decode {
            let hex = decode_hex_color(color.trim())
                .with_context(|| format!("Failed to decode {color:?}"))?;
            tracing::debug!(expression = %color, %hex, "decoded");
            println!("{}", bytes(&hex));
            continue;
        }

        let hex = parse_color(color)
            .with_context(|| format!("Failed to resolve {color:?}"))?;
        tracing::debug!(expression = %color, %hex, "resolved");
        if cli.components {
            println!("{hex}  {}", hex.to_components());
        } else {
            println!("{hex}");
        }
    }

    Ok(())
}
