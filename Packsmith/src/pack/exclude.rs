//! Exclusion rules for resource pack bundling

use std::path::Path;

/// Patterns skipped by default: VCS and editor metadata, Python caches and
/// environments, generator scripts and earlier archives.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "__pycache__",
    ".git",
    ".gitignore",
    "venv",
    ".venv",
    "env",
    ".env",
    ".DS_Store",
    "*.pyc",
    "*.py",
    "*.zip",
    ".idea",
    ".vscode",
    "node_modules",
];

/// A list of exclusion patterns.
///
/// `*suffix` patterns match the end of a file name (`*.py`). Any other
/// pattern matches a whole path component, so `env` excludes `env/` but
/// not `textures/environment/`.
#[derive(Debug, Clone)]
pub struct ExcludeRules {
    patterns: Vec<String>,
}

impl Default for ExcludeRules {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDES.iter().copied())
    }
}

impl ExcludeRules {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Add one more pattern.
    #[must_use]
    pub fn with(mut self, pattern: impl Into<String>) -> Self {
        self.patterns.push(pattern.into());
        self
    }

    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether `path` (relative to the pack root) is excluded.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        self.patterns.iter().any(|pattern| match pattern.strip_prefix('*') {
            Some(suffix) => file_name.ends_with(suffix),
            None => path
                .components()
                .any(|c| c.as_os_str() == pattern.as_str()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = ExcludeRules::default();
        assert!(rules.is_excluded(Path::new("assets/.DS_Store")));
        assert!(rules.is_excluded(Path::new("assets/minecraft/__pycache__/x.bin")));
        assert!(rules.is_excluded(Path::new("assets/generate_swords.py")));
        assert!(rules.is_excluded(Path::new("assets/old_build.zip")));
        assert!(rules.is_excluded(Path::new("assets/.git")));
        assert!(!rules.is_excluded(Path::new("assets/minecraft/textures/item/peat_sword.png")));
    }

    #[test]
    fn test_component_match_is_exact() {
        let rules = ExcludeRules::default();
        assert!(rules.is_excluded(Path::new("assets/env/thing.png")));
        assert!(!rules.is_excluded(Path::new("assets/minecraft/textures/environment/rain.png")));
        assert!(!rules.is_excluded(Path::new("assets/minecraft/lang/en_us.json")));
        // .gitignore is its own pattern, not a prefix match of .git
        assert!(rules.is_excluded(Path::new("assets/.gitignore")));
        assert!(!rules.is_excluded(Path::new("assets/.github_notes.txt")));
    }

    #[test]
    fn test_custom_pattern() {
        let rules = ExcludeRules::new(["*.psd"]).with("drafts");
        assert!(rules.is_excluded(Path::new("assets/sword.psd")));
        assert!(rules.is_excluded(Path::new("assets/drafts/sword.png")));
        assert!(!rules.is_excluded(Path::new("assets/sword.py")));
        assert_eq!(rules.patterns().len(), 2);
    }
}
