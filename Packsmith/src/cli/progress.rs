//! CLI progress display utilities
//!
//! Step indicators, emojis and the progress bar used by batch commands.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};

// =============================================================================
// Emoji Constants (with ASCII fallbacks for terminals without emoji support)
// =============================================================================

/// Magnifying glass - for reading/scanning operations
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("\u{1f50d} ", "");
/// Package - for archive operations
pub static PACKAGE: Emoji<'_, '_> = Emoji("\u{1f4e6} ", "");
/// Floppy disk - for writing/saving operations
pub static DISK: Emoji<'_, '_> = Emoji("\u{1f4be} ", "");
/// Palette - for color operations
pub static PALETTE: Emoji<'_, '_> = Emoji("\u{1f3a8} ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("\u{2728} ", "");
/// Check mark - for added files
pub static CHECK: Emoji<'_, '_> = Emoji("\u{2713} ", "+ ");
/// Warning sign
pub static WARNING: Emoji<'_, '_> = Emoji("\u{26a0}\u{fe0f}  ", "! ");

/// Print a step indicator: `[1/3] 🔍 Message...`
///
/// # Example
/// ```ignore
/// print_step(1, 3, LOOKING_GLASS, "Loading template...");
/// print_step(2, 3, PACKAGE, "Bundling...");
/// print_step(3, 3, DISK, "Writing files...");
/// ```
pub fn print_step(current: usize, total: usize, emoji: Emoji, msg: &str) {
    println!(
        "{} {emoji}{msg}",
        style(format!("[{current}/{total}]")).bold().dim()
    );
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{SPARKLE} Done in {}", HumanDuration(elapsed));
}

/// Progress bar style with percentage
///
/// Format: `peat_sword.png [########--------] 2/8 (25%)`
///
/// # Panics
/// Panics if the template string is invalid (this is a compile-time constant).
#[must_use]
pub fn bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        .expect("valid template")
        .progress_chars("##-")
}

/// Create a progress bar, hidden when `visible` is false
#[must_use]
pub fn simple_bar(total: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total);
    pb.set_style(bar_style());
    pb
}

/// Format byte size in megabytes: `0.01 MB`
#[must_use]
pub fn format_mb(bytes: u64) -> String {
    const MB: f64 = 1024.0 * 1024.0;
    format!("{:.2} MB", bytes as f64 / MB)
}

/// Group digits with commas: `1234567` becomes `1,234,567`
#[must_use]
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mb() {
        assert_eq!(format_mb(0), "0.00 MB");
        assert_eq!(format_mb(3 * 1024 * 1024), "3.00 MB");
        assert_eq!(format_mb(1024 * 1024 + 512 * 1024), "1.50 MB");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1000), "1,000");
        assert_eq!(group_digits(1_234_567), "1,234,567");
    }
}
