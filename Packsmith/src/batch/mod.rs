//! Batch texture generation
//!
//! This module turns a batch description (template, output directory, seed
//! and an ordered list of output/color pairs) into recolored PNG files.

mod config;
mod driver;

pub use config::{BatchConfig, BatchItem, ColorSpec, Preset};
pub use driver::{
    BatchJob, BatchProgress, BatchResult, ItemResult, ItemStatus, RenderedItem, render_batch,
    resolve_jobs, run_batch,
};
