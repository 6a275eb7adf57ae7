//! Logging configuration from environment variables

use std::path::PathBuf;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log file name inside `log_dir`
    pub log_file: PathBuf,
    /// Log level filter (e.g., "minter=debug,info")
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file: PathBuf::from("logs/minter.log"),
            log_level: "minter=info,lib_core=info,lib_solana=info,lib_imagegen=info,warn".to_string(),
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let log_dir = std::env::var("MINTER_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.log_dir);

        Self {
            log_file: log_dir.join("minter.log"),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_dir,
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = DebugConfig::default();
        assert_eq!(config.log_file, PathBuf::from("logs/minter.log"));
        assert!(!config.is_debug_enabled());
    }
}
