//! Resource pack bundling command

use std::io::BufRead;
use std::path::Path;

use chrono::Local;
use console::{Term, style};

use crate::cli::progress::{CHECK, PACKAGE, WARNING, format_mb, group_digits};
use crate::pack::{
    ASSETS_DIR, PACK_ICON, create_resource_pack, default_archive_name, normalize_archive_name,
    required_missing,
};

const RULE: &str = "============================================================";

pub fn execute(root: &Path, name: Option<&str>, yes: bool) -> anyhow::Result<()> {
    let archive_name = match name {
        Some(name) => normalize_archive_name(name),
        None => default_archive_name(root, Local::now().naive_local())?,
    };
    let archive = root.join(&archive_name);

    println!("{PACKAGE}Creating resource pack: {archive_name}");
    println!("{RULE}");

    let missing = required_missing(root);
    if !missing.is_empty() {
        println!(
            "{}{} {}",
            WARNING,
            style("Warning: Missing files:").yellow(),
            missing.join(", ")
        );
        println!("The resource pack may not work correctly without these files.");
        if !yes && !confirm("Continue anyway? (y/n): ")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let summary = create_resource_pack(root, &archive)?;

    for name in ["pack.mcmeta", PACK_ICON] {
        if root.join(name).is_file() {
            println!("{CHECK}Added: {name}");
        }
    }
    if root.join(ASSETS_DIR).is_dir() {
        println!(
            "{CHECK}Added: {ASSETS_DIR}/ directory ({} files)",
            summary.asset_count
        );
    } else {
        println!("{WARNING}Warning: {ASSETS_DIR}/ directory not found");
    }

    println!("{RULE}");
    println!("{CHECK}{}", style("Resource pack created successfully!").green());
    println!("  File: {}", summary.archive.display());
    println!(
        "  Size: {} ({} bytes)",
        format_mb(summary.size_bytes),
        group_digits(summary.size_bytes)
    );
    println!("  Files: {} files included", summary.file_count);
    println!();
    println!("To use this pack:");
    println!("  1. Copy {archive_name} to your Minecraft resourcepacks folder");
    println!("  2. Enable it in Minecraft: Options > Resource Packs");

    Ok(())
}

/// Ask a yes/no question on stdin; only `y` (any case) confirms.
///
/// Reads stdin directly so a piped answer (`echo y | packsmith pack`) works.
fn confirm(prompt: &str) -> anyhow::Result<bool> {
    Term::stdout().write_str(prompt)?;
    read_confirmation(std::io::stdin().lock())
}

fn read_confirmation<R: BufRead>(mut input: R) -> anyhow::Result<bool> {
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
