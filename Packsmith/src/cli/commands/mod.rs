use clap::Subcommand;
use std::path::PathBuf;

use crate::batch::Preset;
use crate::texture::PaletteFilter;

pub mod batch;
pub mod pack;
pub mod palette;
pub mod rgb;

/// Overrides shared by every batch command
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BatchOverrides {
    /// Template image (overrides the config)
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Output directory (overrides the config)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Suppress progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recolor a template according to a TOML batch config
    Batch {
        /// Batch config file
        #[arg(short, long)]
        config: PathBuf,

        #[command(flatten)]
        overrides: BatchOverrides,

        /// Noise seed (overrides the config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate the bundled material swords from the diamond sword
    Swords {
        #[command(flatten)]
        overrides: BatchOverrides,

        /// Noise seed (default 42)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate netherite swords with gold, emerald and diamond handles
    Handles {
        #[command(flatten)]
        overrides: BatchOverrides,
    },

    /// Print the palette of an image, darkest first
    Palette {
        /// Source image
        image: PathBuf,

        /// Which colors to keep: opaque, blade or min-brightness=N
        #[arg(short, long, default_value = "opaque")]
        filter: PaletteFilter,
    },

    /// Bundle a resource pack directory into a zip archive
    Pack {
        /// Archive name (default: <dir>_<timestamp>.zip)
        name: Option<String>,

        /// Resource pack root directory
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Do not ask for confirmation when pack.mcmeta is missing
        #[arg(short, long)]
        yes: bool,
    },

    /// Convert a decimal color to RGB and hex
    Rgb {
        /// Decimal color value (e.g. 6306848)
        decimal: String,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Batch {
                config,
                overrides,
                seed,
            } => batch::execute_config(config, overrides, *seed),
            Commands::Swords { overrides, seed } => {
                batch::execute_preset(Preset::Swords, overrides, *seed)
            }
            Commands::Handles { overrides } => {
                batch::execute_preset(Preset::NetheriteHandles, overrides, None)
            }
            Commands::Palette { image, filter } => palette::execute(image, *filter),
            Commands::Pack { name, root, yes } => pack::execute(root, name.as_deref(), *yes),
            Commands::Rgb { decimal } => rgb::execute(decimal),
        }
    }
}
