//! Content factory for loading everything a match needs from a data directory.

use std::path::{Path, PathBuf};

use arena_core::{EngineConfig, Roster};

use crate::loaders::{ConfigLoader, LoadResult, RosterLoader};

/// Content factory that loads match content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── engine.toml   (optional, defaults apply when absent)
/// └── roster.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory pointing at the data directory bundled with this crate.
    pub fn bundled_data_dir() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load the fighter roster from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        RosterLoader::load(&self.data_dir.join("roster.ron"))
    }

    /// Load engine configuration from `engine.toml`, or defaults when absent.
    pub fn load_engine_config(&self) -> LoadResult<EngineConfig> {
        let path = self.data_dir.join("engine.toml");
        if path.exists() {
            ConfigLoader::load(&path)
        } else {
            Ok(EngineConfig::default())
        }
    }
}
