//! Batch recolor commands

use std::path::Path;
use std::time::Instant;

use crate::batch::{BatchConfig, BatchResult, ItemStatus, Preset, run_batch};
use crate::cli::progress::{DISK, LOOKING_GLASS, print_done, print_step, simple_bar};

use super::BatchOverrides;

/// Run a batch described by a TOML file
pub fn execute_config(
    config: &Path,
    overrides: &BatchOverrides,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let config = BatchConfig::load(config)?;
    run(config, overrides, seed)
}

/// Run one of the bundled batch tables
pub fn execute_preset(
    preset: Preset,
    overrides: &BatchOverrides,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    tracing::debug!("Using bundled preset {}", preset.name());
    let config = BatchConfig::preset(preset)?;
    run(config, overrides, seed)
}

fn run(
    mut config: BatchConfig,
    overrides: &BatchOverrides,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    if let Some(template) = &overrides.template {
        config = config.with_template(template);
    }
    if let Some(output_dir) = &overrides.output_dir {
        config = config.with_output_dir(output_dir);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let started = Instant::now();
    print_step(
        1,
        2,
        LOOKING_GLASS,
        &format!("Loading template {}...", config.template.display()),
    );

    let pb = simple_bar(config.items.len() as u64, !overrides.quiet);
    let result = run_batch(&config, |progress| {
        pb.set_position(progress.current as u64);
        pb.set_message(progress.output.clone());
    })?;
    pb.finish_and_clear();

    print_step(
        2,
        2,
        DISK,
        &format!("Wrote textures to {}", config.output_dir.display()),
    );
    print_summary(&result);
    print_done(started.elapsed());

    Ok(())
}

fn print_summary(result: &BatchResult) {
    println!();
    println!("Generation complete:");
    println!("  Success: {}", result.success_count);
    println!("  Failed: {}", result.fail_count);

    if result.fail_count > 0 {
        println!();
        println!("Failures:");
        for item in result.failures() {
            if let ItemStatus::Failed(reason) = &item.status {
                println!("  {}: {reason}", item.output);
            }
        }
    }
}
