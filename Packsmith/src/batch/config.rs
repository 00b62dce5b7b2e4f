//! Batch configuration (TOML)
//!
//! A batch names one template image, an output directory, a noise seed and
//! an ordered list of items. Each item is an output file name plus a color
//! specification:
//!
//! ```toml
//! template = "templates/swords/diamond_sword.png"
//! output_dir = "assets/minecraft/textures/item/swords"
//! seed = 42
//!
//! [[item]]
//! output = "peat_sword.png"
//! mode = "gradient"
//! base = [96, 60, 32]
//!
//! [[item]]
//! output = "netherite_gold_handle_sword.png"
//! mode = "source_image"
//! source = "templates/swords/golden_sword.png"
//! filter = { min_brightness = 50.0 }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::texture::PaletteFilter;

fn default_seed() -> u64 {
    42
}

/// A full batch description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Template image every item is rendered from.
    pub template: PathBuf,
    /// Directory the recolored images are written to (created if absent).
    pub output_dir: PathBuf,
    /// Seed for gradient noise, applied once per run.
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(rename = "item", default)]
    pub items: Vec<BatchItem>,
}

/// One output image of a batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchItem {
    /// Output file name inside `output_dir`.
    pub output: String,
    #[serde(flatten)]
    pub color: ColorSpec,
}

/// How an item's new colors are chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ColorSpec {
    /// Gradient re-theme of the blade from a single base color.
    Gradient { base: Rgb },
    /// Handle remap onto the colors of another image.
    SourceImage {
        source: PathBuf,
        #[serde(default)]
        filter: PaletteFilter,
    },
    /// Handle remap onto an explicit list of colors.
    Colors { colors: Vec<Rgb> },
}

/// Batch tables bundled with the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Eight material swords re-themed from the diamond sword.
    Swords,
    /// Netherite swords with gold, emerald and diamond handles.
    NetheriteHandles,
}

const SWORDS_PRESET: &str = include_str!("presets/swords.toml");
const NETHERITE_HANDLES_PRESET: &str = include_str!("presets/netherite_handles.toml");

impl Preset {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Swords => "swords",
            Self::NetheriteHandles => "netherite_handles",
        }
    }

    #[must_use]
    pub const fn source(self) -> &'static str {
        match self {
            Self::Swords => SWORDS_PRESET,
            Self::NetheriteHandles => NETHERITE_HANDLES_PRESET,
        }
    }
}

impl BatchConfig {
    /// Parse and validate a TOML batch description.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a batch description from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded batch config from {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    /// One of the bundled batch tables.
    pub fn preset(preset: Preset) -> Result<Self> {
        Self::from_toml_str(preset.source())
    }

    #[must_use]
    pub fn with_template(mut self, template: impl Into<PathBuf>) -> Self {
        self.template = template.into();
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that the batch has items and that every output name is a
    /// unique plain file name.
    pub fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(invalid("batch has no items"));
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            let is_plain = Path::new(&item.output)
                .file_name()
                .is_some_and(|name| name == item.output.as_str());
            if !is_plain {
                return Err(invalid(format!(
                    "output '{}' must be a file name, not a path",
                    item.output
                )));
            }
            if !seen.insert(item.output.as_str()) {
                return Err(invalid(format!("duplicate output '{}'", item.output)));
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::ConfigInvalid {
        message: message.into(),
    }
}
