//! Content factory for building a scheme catalog from data files.

use std::path::{Path, PathBuf};

use tactics_core::{GameConfig, SchemeCatalog};
use tracing::debug;

use crate::loaders::{ConfigLoader, LoadResult, MapLayout, MapLoader, SchemeLoader, read_file};

/// Content factory that loads all rule content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── acts.ron
/// ├── perks.ron
/// ├── props.ron
/// ├── persons.ron
/// └── maps/
///     └── arena.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Scheme files read by [`ContentFactory::load_catalog`], in merge order.
    pub const SCHEME_FILES: [&'static str; 4] =
        ["acts.ron", "perks.ron", "props.ron", "persons.ron"];

    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load and cross-check every scheme table.
    pub fn load_catalog(&self) -> LoadResult<SchemeCatalog> {
        let mut sources = Vec::with_capacity(Self::SCHEME_FILES.len());
        for name in Self::SCHEME_FILES {
            sources.push((name, read_file(&self.data_dir.join(name))?));
        }
        let catalog = SchemeLoader::catalog_from_sources(
            sources
                .iter()
                .map(|(name, content)| (*name, content.as_str())),
        )?;
        debug!(
            acts = catalog.act_count(),
            perks = catalog.perk_count(),
            props = catalog.prop_count(),
            persons = catalog.person_count(),
            dir = %self.data_dir.display(),
            "scheme catalog loaded"
        );
        Ok(catalog)
    }

    /// Load a map from `maps/{map_name}.ron`.
    pub fn load_map(&self, map_name: &str) -> LoadResult<MapLayout> {
        let path = self.data_dir.join("maps").join(format!("{map_name}.ron"));
        MapLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
