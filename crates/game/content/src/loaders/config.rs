//! Engine configuration loader.

use std::path::Path;

use arena_core::EngineConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load engine config from a TOML file.
    ///
    /// Missing keys fall back to [`EngineConfig::default`].
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e))
    }

    /// Parse engine config from TOML text.
    pub fn parse(content: &str) -> LoadResult<EngineConfig> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse engine config TOML: {}", e))?;

        if config.default_timer <= 0 {
            anyhow::bail!(
                "default_timer must be positive, got {}",
                config.default_timer
            );
        }

        Ok(config)
    }
}
