//! Print the shade family of a color and optionally render it to a PNG.
//!
//! ```text
//! swatches "#FF5722" --accents --match -o deep-orange.png
//! ```
//!
//! Set `RUST_LOG=tincture=debug` to see the palette scores.

use std::{error::Error, path::PathBuf, process};

use clap::Parser;
use image::{Rgba, RgbaImage};
use log::info;
use tincture::{
    generate_shades_in, match_palette, models::Srgb, Color, Component, Grade, ReferencePalette,
    ShadeFamily, ShadePolicy, Space, TonalPalette,
};

const SWATCH_WIDTH: u32 = 480;
const SWATCH_HEIGHT: u32 = 64;

#[derive(Parser)]
#[command(name = "swatches", about = "Generate the shade family of a color")]
struct Cli {
    /// Base color as hex (#RRGGBB, #RRGGBBAA) or CSS rgb()/rgba().
    color: Srgb,

    /// Also generate the accent grades.
    #[arg(short, long)]
    accents: bool,

    /// Follow the tonal curve of the closest built-in palette.
    #[arg(short = 'm', long = "match")]
    match_palette: bool,

    /// Write the swatches to this PNG file.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// A few reference palettes, anchored at their lightest, middle and darkest
/// grades.
fn catalog() -> tincture::Result<Vec<TonalPalette>> {
    const PALETTES: [(&str, [&str; 3]); 6] = [
        ("Red", ["#FFEBEE", "#F44336", "#B71C1C"]),
        ("Deep Purple", ["#EDE7F6", "#673AB7", "#311B92"]),
        ("Blue", ["#E3F2FD", "#2196F3", "#0D47A1"]),
        ("Green", ["#E8F5E9", "#4CAF50", "#1B5E20"]),
        ("Amber", ["#FFF8E1", "#FFC107", "#FF6F00"]),
        ("Grey", ["#FAFAFA", "#9E9E9E", "#212121"]),
    ];
    let grades = [Grade::Standard(50), Grade::Standard(500), Grade::Standard(900)];

    PALETTES
        .iter()
        .map(|(name, hex)| TonalPalette::from_hex(*name, grades.into_iter().zip(*hex)))
        .collect()
}

fn to_u8(value: Component) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn render(family: &ShadeFamily) -> RgbaImage {
    let mut img = RgbaImage::new(SWATCH_WIDTH, SWATCH_HEIGHT * family.len() as u32);

    for (i, shade) in family.iter().enumerate() {
        let srgb = shade.color.to_srgb();
        let pixel = Rgba([
            to_u8(srgb.red()),
            to_u8(srgb.green()),
            to_u8(srgb.blue()),
            to_u8(srgb.alpha()),
        ]);

        let top = i as u32 * SWATCH_HEIGHT;
        for y in top..top + SWATCH_HEIGHT {
            for x in 0..SWATCH_WIDTH {
                img.put_pixel(x, y, pixel);
            }
        }
    }

    img
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let base = Color::from(cli.color);
    let grades = if cli.accents {
        Grade::ALL.to_vec()
    } else {
        Grade::STANDARD.to_vec()
    };

    let catalog = catalog()?;
    let policy = if cli.match_palette {
        let matched = match_palette(&base.to_lch(), &catalog)?;
        println!(
            "matched {} (\u{394}E00 {:.2})",
            matched.palette.name(),
            matched.distance
        );
        ShadePolicy::PaletteAnchored(matched.palette)
    } else {
        ShadePolicy::DefaultCurve
    };
    let family = generate_shades_in(&base, &grades, policy, Space::Srgb);

    for shade in &family {
        let srgb = shade.color.to_srgb();
        println!("{:>4}  {}  {}", shade.grade, srgb.to_hex(), srgb.to_css());
    }

    if let Some(path) = cli.output {
        render(&family).save(&path)?;
        info!("wrote {} swatches to {}", family.len(), path.display());
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
