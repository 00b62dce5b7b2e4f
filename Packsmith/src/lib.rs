//! # Packsmith
//!
//! Texture generation and packaging tools for Minecraft resource packs.
//!
//! ## Features
//!
//! - **Gradient recoloring** - Re-theme a sword blade from one base color
//! - **Palette remapping** - Swap a handle onto another item's palette by
//!   brightness rank
//! - **Batch generation** - TOML-described batches with a seeded noise source
//! - **Pack bundling** - Zip `pack.mcmeta`, `pack.png` and `assets/`
//!
//! ## Quick Start
//!
//! ### Running a Bundled Batch
//!
//! ```no_run
//! use packsmith::batch::{BatchConfig, Preset, run_batch};
//!
//! let config = BatchConfig::preset(Preset::Swords)?.with_output_dir("out/swords");
//! let result = run_batch(&config, |progress| {
//!     println!("[{}/{}] {}", progress.current, progress.total, progress.output);
//! })?;
//! println!("{} written, {} failed", result.success_count, result.fail_count);
//! # Ok::<(), packsmith::Error>(())
//! ```
//!
//! ### Recoloring a Single Image
//!
//! ```no_run
//! use packsmith::prelude::*;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let template = load_rgba("templates/swords/diamond_sword.png")?;
//! let recolor = Recolor::Gradient(Shades::from_base(Rgb::new(96, 60, 32)));
//! let mut rng = StdRng::seed_from_u64(42);
//! save_png(&recolor.apply(&template, &mut rng)?, "peat_sword.png")?;
//! # Ok::<(), packsmith::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `packsmith` command-line binary

pub mod batch;
pub mod color;
pub mod error;
pub mod pack;
pub mod texture;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    pub use crate::color::{Rgb, Shades, parse_decimal};
    pub use crate::texture::{
        Palette, PaletteFilter, Recolor, Region, load_rgba, recolor_gradient, remap_by_rank,
        save_png,
    };

    // Batch exports
    pub use crate::batch::{BatchConfig, BatchResult, Preset, run_batch};

    // Pack exports
    pub use crate::pack::{ExcludeRules, PackSummary, create_resource_pack};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
