//! Palette inspection command

use std::path::Path;

use console::style;

use crate::cli::progress::PALETTE;
use crate::texture::{Palette, PaletteFilter, load_rgba};

pub fn execute(image: &Path, filter: PaletteFilter) -> anyhow::Result<()> {
    let rgba = load_rgba(image)?;
    let palette = Palette::extract(&rgba, filter);

    println!("{PALETTE}Palette of {} ({filter:?}):", image.display());
    for color in palette.colors() {
        println!(
            "  {}  {}  brightness {:.1}",
            style(color.to_hex()).bold(),
            color,
            color.brightness()
        );
    }
    println!();
    println!("{} colors", palette.len());

    Ok(())
}
