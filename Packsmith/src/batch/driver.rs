//! Batch recolor driver
//!
//! Runs every item of a [`BatchConfig`] against one shared template. Items
//! are processed in order with a single seeded generator. A failing item is
//! reported and skipped; only missing inputs abort the whole run.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::{BatchConfig, ColorSpec};
use crate::color::Shades;
use crate::error::{Error, Result};
use crate::texture::{Palette, Recolor, load_rgba, save_png};

/// Progress update emitted before each item is rendered.
#[derive(Debug, Clone)]
pub struct BatchProgress {
    /// 1-based index of the item being processed.
    pub current: usize,
    pub total: usize,
    /// Output file name of the item.
    pub output: String,
}

/// A batch item with its colors resolved.
#[derive(Debug, Clone)]
pub struct BatchJob {
    pub output: String,
    pub recolor: Recolor,
}

/// Outcome of rendering one item in memory.
#[derive(Debug)]
pub struct RenderedItem {
    pub output: String,
    pub result: Result<RgbaImage>,
}

/// Final status of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemStatus {
    /// Written to the given path.
    Written(PathBuf),
    /// Skipped, with the reason.
    Failed(String),
}

/// Per-item report line of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemResult {
    pub output: String,
    pub status: ItemStatus,
}

impl ItemResult {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.status, ItemStatus::Written(_))
    }
}

/// Result of a batch run
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Number of images written
    pub success_count: usize,
    /// Number of skipped items
    pub fail_count: usize,
    /// One entry per item, in batch order
    pub results: Vec<ItemResult>,
}

impl BatchResult {
    fn from_results(results: Vec<ItemResult>) -> Self {
        let success_count = results.iter().filter(|r| r.is_success()).count();
        Self {
            success_count,
            fail_count: results.len() - success_count,
            results,
        }
    }

    /// Items that were not written.
    pub fn failures(&self) -> impl Iterator<Item = &ItemResult> {
        self.results.iter().filter(|r| !r.is_success())
    }
}

/// Resolve every item of `config` into a [`BatchJob`].
///
/// Palette source images are loaded here, once per distinct path. A
/// missing source image fails the whole batch before anything is rendered.
pub fn resolve_jobs(config: &BatchConfig) -> Result<Vec<BatchJob>> {
    let mut sources: HashMap<&Path, RgbaImage> = HashMap::new();
    let mut jobs = Vec::with_capacity(config.items.len());

    for item in &config.items {
        let recolor = match &item.color {
            ColorSpec::Gradient { base } => Recolor::Gradient(Shades::from_base(*base)),
            ColorSpec::Colors { colors } => Recolor::Palette(Palette::new(colors.iter().copied())),
            ColorSpec::SourceImage { source, filter } => {
                let image = match sources.entry(source.as_path()) {
                    Entry::Occupied(entry) => entry.into_mut(),
                    Entry::Vacant(entry) => {
                        if !source.exists() {
                            return Err(Error::PaletteSourceNotFound {
                                path: source.clone(),
                            });
                        }
                        entry.insert(load_rgba(source)?)
                    }
                };
                let palette = Palette::extract(image, *filter);
                tracing::debug!(
                    "Palette for {} from {}: {} colors",
                    item.output,
                    source.display(),
                    palette.len()
                );
                Recolor::Palette(palette)
            }
        };

        jobs.push(BatchJob {
            output: item.output.clone(),
            recolor,
        });
    }

    Ok(jobs)
}

/// Render one job, logging a warning when it fails.
fn render_job<R>(template: &RgbaImage, job: &BatchJob, rng: &mut R) -> Result<RgbaImage>
where
    R: Rng + ?Sized,
{
    let result = job.recolor.apply(template, rng);
    if let Err(e) = &result {
        tracing::warn!("Skipping {}: {}", job.output, e);
    }
    result
}

/// Render every job against `template` without touching the filesystem.
///
/// Noise for all gradient jobs is drawn from the same `rng`, in job order.
pub fn render_batch<R, F>(
    template: &RgbaImage,
    jobs: &[BatchJob],
    rng: &mut R,
    progress: F,
) -> Vec<RenderedItem>
where
    R: Rng + ?Sized,
    F: Fn(&BatchProgress),
{
    let total = jobs.len();

    jobs.iter()
        .enumerate()
        .map(|(index, job)| {
            progress(&BatchProgress {
                current: index + 1,
                total,
                output: job.output.clone(),
            });
            RenderedItem {
                output: job.output.clone(),
                result: render_job(template, job, &mut *rng),
            }
        })
        .collect()
}

/// Run a batch end to end: load inputs, render every item and write the
/// results into `config.output_dir`.
///
/// Returns `Err` only for run-level problems (missing template or palette
/// source, unwritable output directory). Item failures are reported in the
/// returned [`BatchResult`].
pub fn run_batch<F>(config: &BatchConfig, progress: F) -> Result<BatchResult>
where
    F: Fn(&BatchProgress),
{
    if !config.template.exists() {
        return Err(Error::TemplateNotFound {
            path: config.template.clone(),
        });
    }
    let template = load_rgba(&config.template)?;
    let jobs = resolve_jobs(config)?;

    tracing::info!(
        "Rendering {} items from {} (seed {})",
        jobs.len(),
        config.template.display(),
        config.seed
    );

    std::fs::create_dir_all(&config.output_dir)?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let total = jobs.len();
    let mut results = Vec::with_capacity(total);

    // One image in memory at a time: render, write, then drop the buffer
    for (index, job) in jobs.iter().enumerate() {
        progress(&BatchProgress {
            current: index + 1,
            total,
            output: job.output.clone(),
        });

        let status = match render_job(&template, job, &mut rng) {
            Ok(image) => {
                let path = config.output_dir.join(&job.output);
                match save_png(&image, &path) {
                    Ok(()) => {
                        tracing::debug!("Wrote {}", path.display());
                        ItemStatus::Written(path)
                    }
                    Err(e) => {
                        tracing::warn!("Failed to write {}: {}", path.display(), e);
                        ItemStatus::Failed(e.to_string())
                    }
                }
            }
            Err(e) => ItemStatus::Failed(e.to_string()),
        };

        results.push(ItemResult {
            output: job.output.clone(),
            status,
        });
    }

    Ok(BatchResult::from_results(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use image::Rgba;
    use std::cell::RefCell;

    /// 2x2 sprite: blade pixel, handle pixel, dark outline, transparent.
    fn sprite() -> RgbaImage {
        let mut image = RgbaImage::new(2, 2);
        image.put_pixel(0, 0, Rgba([40, 200, 210, 255]));
        image.put_pixel(1, 0, Rgba([137, 103, 39, 255]));
        image.put_pixel(0, 1, Rgba([20, 20, 20, 255]));
        image
    }

    fn gradient_job(output: &str) -> BatchJob {
        BatchJob {
            output: output.to_string(),
            recolor: Recolor::Gradient(Shades::from_base(Rgb::new(74, 110, 41))),
        }
    }

    #[test]
    fn test_render_batch_continues_after_failure() {
        let jobs: Vec<BatchJob> = (1..=8)
            .map(|i| {
                if i == 3 {
                    BatchJob {
                        output: "empty.png".to_string(),
                        recolor: Recolor::Palette(Palette::default()),
                    }
                } else {
                    gradient_job(&format!("item{i}.png"))
                }
            })
            .collect();

        let seen = RefCell::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(42);
        let rendered = render_batch(&sprite(), &jobs, &mut rng, |p| {
            seen.borrow_mut().push((p.current, p.total));
        });

        assert_eq!(rendered.len(), 8);
        for (index, item) in rendered.iter().enumerate() {
            if index == 2 {
                assert!(matches!(item.result, Err(Error::EmptyPalette)));
            } else {
                assert!(item.result.is_ok(), "{} failed", item.output);
            }
        }
        assert_eq!(seen.borrow().first(), Some(&(1, 8)));
        assert_eq!(seen.borrow().last(), Some(&(8, 8)));
    }

    #[test]
    fn test_render_batch_shares_one_generator() {
        let jobs = vec![gradient_job("a.png"), gradient_job("b.png")];
        let mut first_rng = StdRng::seed_from_u64(42);
        let first = render_batch(&sprite(), &jobs, &mut first_rng, |_| {});
        let mut second_rng = StdRng::seed_from_u64(42);
        let second = render_batch(&sprite(), &jobs, &mut second_rng, |_| {});

        let image = |items: &[RenderedItem], i: usize| items[i].result.as_ref().unwrap().clone();
        assert_eq!(image(&first, 0), image(&second, 0));
        assert_eq!(image(&first, 1), image(&second, 1));
    }

    #[test]
    fn test_batch_result_counts() {
        let result = BatchResult::from_results(vec![
            ItemResult {
                output: "a.png".to_string(),
                status: ItemStatus::Written(PathBuf::from("out/a.png")),
            },
            ItemResult {
                output: "b.png".to_string(),
                status: ItemStatus::Failed("palette is empty".to_string()),
            },
        ]);
        assert_eq!(result.success_count, 1);
        assert_eq!(result.fail_count, 1);
        assert_eq!(result.failures().map(|r| r.output.as_str()).collect::<Vec<_>>(), ["b.png"]);
    }
}
