//! Sweep configuration types.

use std::path::PathBuf;

use derive_builder::Builder;

/// Directory name matched when no target is configured.
pub const DEFAULT_TARGET_NAME: &str = "node_modules";

/// Number of simultaneous deletions when not configured.
pub const DEFAULT_DELETE_CONCURRENCY: usize = 3;

/// Rows shown at once by the selection prompt when not configured.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Configuration for a discovery and deletion run.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct SweepConfig {
    /// Root path to search.
    pub root: PathBuf,

    /// Base name of the directories to find.
    #[builder(default = "DEFAULT_TARGET_NAME.to_string()")]
    pub target_name: String,

    /// Maximum number of deletions in flight.
    #[builder(default = "DEFAULT_DELETE_CONCURRENCY")]
    pub delete_concurrency: usize,

    /// Maximum number of concurrent size computations (0 = available parallelism).
    #[builder(default = "0")]
    pub size_concurrency: usize,

    /// Number of threads for the walk itself (0 = rayon default pool).
    #[builder(default = "0")]
    pub walk_threads: usize,

    /// Page size hint for the selection prompt.
    #[builder(default = "DEFAULT_PAGE_SIZE")]
    pub page_size: usize,
}

impl SweepConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.root {
            Some(ref root) if root.as_os_str().is_empty() => {
                return Err("Root path cannot be empty".to_string());
            }
            None => return Err("Root path is required".to_string()),
            _ => {}
        }
        if let Some(ref name) = self.target_name {
            if name.is_empty() {
                return Err("Target name cannot be empty".to_string());
            }
            if name.contains(std::path::is_separator) {
                return Err(format!("Target name must be a single path component: {name}"));
            }
        }
        if self.delete_concurrency == Some(0) {
            return Err("Delete concurrency must be at least 1".to_string());
        }
        if self.page_size == Some(0) {
            return Err("Page size must be at least 1".to_string());
        }
        Ok(())
    }
}

impl SweepConfig {
    /// Create a new sweep config builder.
    pub fn builder() -> SweepConfigBuilder {
        SweepConfigBuilder::default()
    }

    /// Create a config for sweeping a path with default settings.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            target_name: DEFAULT_TARGET_NAME.to_string(),
            delete_concurrency: DEFAULT_DELETE_CONCURRENCY,
            size_concurrency: 0,
            walk_threads: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Check whether a directory base name is a target.
    pub fn is_target(&self, name: &str) -> bool {
        name == self.target_name
    }

    /// Effective number of sizing workers.
    pub fn effective_size_concurrency(&self) -> usize {
        match self.size_concurrency {
            0 => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4),
            n => n,
        }
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = SweepConfig::builder()
            .root("/home/user")
            .target_name("target")
            .delete_concurrency(5usize)
            .build()
            .unwrap();

        assert_eq!(config.root, PathBuf::from("/home/user"));
        assert_eq!(config.target_name, "target");
        assert_eq!(config.delete_concurrency, 5);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_config_simple() {
        let config = SweepConfig::new("/home/user");
        assert_eq!(config.root, PathBuf::from("/home/user"));
        assert_eq!(config.target_name, "node_modules");
        assert_eq!(config.delete_concurrency, 3);
        assert!(config.effective_size_concurrency() >= 1);
    }

    #[test]
    fn test_builder_rejects_invalid() {
        assert!(SweepConfig::builder().build().is_err());
        assert!(SweepConfig::builder().root("").build().is_err());
        assert!(SweepConfig::builder().root("/x").target_name("").build().is_err());
        assert!(SweepConfig::builder().root("/x").target_name("a/b").build().is_err());
        assert!(SweepConfig::builder()
            .root("/x")
            .delete_concurrency(0usize)
            .build()
            .is_err());
        assert!(SweepConfig::builder().root("/x").page_size(0usize).build().is_err());
    }

    #[test]
    fn test_is_target() {
        let config = SweepConfig::new("/test");
        assert!(config.is_target("node_modules"));
        assert!(!config.is_target("node_modules_old"));
        assert!(!config.is_target("src"));
    }
}
