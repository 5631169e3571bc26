//! Standard paths used by repokit

use std::path::PathBuf;

/// Standard repokit paths
pub struct Paths {
    /// Config directory (~/.config/repokit)
    pub config: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("repokit");

        Self { config }
    }

    /// Path of the main config file
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_under_config_dir() {
        let paths = Paths {
            config: PathBuf::from("/tmp/repokit-root/config"),
        };
        assert_eq!(
            paths.config_file(),
            PathBuf::from("/tmp/repokit-root/config/config.yaml")
        );
    }

    #[test]
    fn test_default_paths_end_in_repokit() {
        let paths = Paths::new();
        assert!(paths.config.ends_with("repokit"));
        assert!(paths.config_file().ends_with("repokit/config.yaml"));
    }
}
