//! Fighter roster loader.
//!
//! Loads fighter templates from RON files and validates them into a
//! [`Roster`].

use std::path::Path;

use arena_core::{FighterTemplate, Roster};

use crate::loaders::{LoadResult, read_file};

/// The reference catalog shipped with the crate.
const BUNDLED_ROSTER: &str = include_str!("../../data/roster.ron");

/// Loader for fighter rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// RON format: `Vec<FighterTemplate>`
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load roster {}: {}", path.display(), e))
    }

    /// Parse and validate a roster from RON text.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let templates: Vec<FighterTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        Ok(Roster::new(templates)?)
    }

    /// The roster bundled with this crate.
    pub fn bundled() -> LoadResult<Roster> {
        Self::parse(BUNDLED_ROSTER)
    }
}
