//! Resource pack bundling
//!
//! Zips a resource pack directory (`pack.mcmeta`, optional `pack.png` and
//! the `assets/` tree) into a distributable archive.

mod exclude;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::error::{Error, Result};
use crate::utils::normalize_path;

pub use exclude::{DEFAULT_EXCLUDES, ExcludeRules};

/// Files that must exist at the pack root.
pub const REQUIRED_FILES: &[&str] = &["pack.mcmeta"];

/// Pack icon, bundled when present.
pub const PACK_ICON: &str = "pack.png";

/// Directory holding the pack's assets.
pub const ASSETS_DIR: &str = "assets";

/// Summary of a written archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackSummary {
    pub archive: PathBuf,
    /// Total number of entries written.
    pub file_count: usize,
    /// Entries that came from `assets/`.
    pub asset_count: usize,
    /// Size of the archive on disk.
    pub size_bytes: u64,
}

/// Required files missing from `root`.
#[must_use]
pub fn required_missing(root: &Path) -> Vec<&'static str> {
    REQUIRED_FILES
        .iter()
        .copied()
        .filter(|name| !root.join(name).is_file())
        .collect()
}

/// `<dir-name>_<YYYYmmdd_HHMMSS>.zip` for the pack at `root`.
pub fn default_archive_name(root: &Path, now: NaiveDateTime) -> Result<String> {
    let root = root.canonicalize()?;
    let name = root
        .file_name()
        .map_or_else(|| "resourcepack".to_string(), |n| n.to_string_lossy().into_owned());
    Ok(format!("{name}_{}.zip", now.format("%Y%m%d_%H%M%S")))
}

/// Append `.zip` unless `name` already ends with it.
#[must_use]
pub fn normalize_archive_name(name: &str) -> String {
    if name.ends_with(".zip") {
        name.to_string()
    } else {
        format!("{name}.zip")
    }
}

/// Write the pack at `root` into `archive` using the default exclusions.
pub fn create_resource_pack(root: &Path, archive: &Path) -> Result<PackSummary> {
    create_resource_pack_with(root, archive, &ExcludeRules::default())
}

/// Write the pack at `root` into `archive`, skipping anything `rules`
/// excludes. Excluded directories are not descended into.
pub fn create_resource_pack_with(
    root: &Path,
    archive: &Path,
    rules: &ExcludeRules,
) -> Result<PackSummary> {
    tracing::info!("Bundling {} into {}", root.display(), archive.display());

    let file = File::create(archive)?;
    let mut zip = zip::ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut file_count = 0;
    for name in REQUIRED_FILES.iter().chain(std::iter::once(&PACK_ICON)) {
        let path = root.join(name);
        if path.is_file() {
            add_file(&mut zip, &path, name, options)?;
            file_count += 1;
        } else if REQUIRED_FILES.contains(name) {
            tracing::warn!("{} not found, archive will be incomplete", name);
        }
    }

    let assets = root.join(ASSETS_DIR);
    let mut asset_count = 0;
    if assets.is_dir() {
        let walker = WalkDir::new(&assets)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                !entry
                    .path()
                    .strip_prefix(root)
                    .is_ok_and(|relative| rules.is_excluded(relative))
            });

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = entry
                .path()
                .strip_prefix(root)
                .map_err(|e| Error::InvalidPath(e.to_string()))?;
            add_file(&mut zip, entry.path(), &normalize_path(relative), options)?;
            asset_count += 1;
        }
    } else {
        tracing::warn!("{} has no {}/ directory", root.display(), ASSETS_DIR);
    }

    let mut writer = zip.finish()?;
    writer.flush()?;
    drop(writer);

    let size_bytes = std::fs::metadata(archive)?.len();
    let summary = PackSummary {
        archive: archive.to_path_buf(),
        file_count: file_count + asset_count,
        asset_count,
        size_bytes,
    };
    tracing::info!(
        "Wrote {} files ({} bytes) to {}",
        summary.file_count,
        summary.size_bytes,
        archive.display()
    );
    Ok(summary)
}

fn add_file<W: Write + std::io::Seek>(
    zip: &mut zip::ZipWriter<W>,
    path: &Path,
    name: &str,
    options: SimpleFileOptions,
) -> Result<()> {
    tracing::debug!("Adding {}", name);
    zip.start_file(name, options)?;
    let mut source = File::open(path)?;
    std::io::copy(&mut source, zip)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_required_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(required_missing(dir.path()), vec!["pack.mcmeta"]);

        std::fs::write(dir.path().join("pack.mcmeta"), "{}").unwrap();
        assert!(required_missing(dir.path()).is_empty());
    }

    #[test]
    fn test_archive_names() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("kiln_pack");
        std::fs::create_dir(&root).unwrap();

        let now = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(
            default_archive_name(&root, now).unwrap(),
            "kiln_pack_20250102_030405.zip"
        );

        assert_eq!(normalize_archive_name("release"), "release.zip");
        assert_eq!(normalize_archive_name("release.zip"), "release.zip");
    }
}
