//! Path utilities

use std::path::Path;

/// Normalize path separators to forward slashes (for archive entry names)
pub fn normalize_path<P: AsRef<Path>>(path: P) -> String {
    path.as_ref().to_string_lossy().replace('\\', "/")
}
