//! Rule content compiled into the binary.
//!
//! The same files live under `data/` and can be loaded from disk through
//! [`crate::ContentFactory`] for modding.

use tactics_core::{GameConfig, SchemeCatalog};

use crate::loaders::{ConfigLoader, LoadResult, MapLayout, MapLoader, SchemeLoader};

pub const ACTS: &str = include_str!("../data/acts.ron");
pub const PERKS: &str = include_str!("../data/perks.ron");
pub const PROPS: &str = include_str!("../data/props.ron");
pub const PERSONS: &str = include_str!("../data/persons.ron");
pub const CONFIG: &str = include_str!("../data/config.toml");
pub const ARENA: &str = include_str!("../data/maps/arena.ron");

/// Every built-in scheme table in one checked catalog.
pub fn catalog() -> LoadResult<SchemeCatalog> {
    SchemeLoader::catalog_from_sources([
        ("acts.ron", ACTS),
        ("perks.ron", PERKS),
        ("props.ron", PROPS),
        ("persons.ron", PERSONS),
    ])
}

pub fn config() -> LoadResult<GameConfig> {
    ConfigLoader::parse(CONFIG)
}

/// The demo sector.
pub fn arena() -> LoadResult<MapLayout> {
    MapLoader::parse(ARENA)
}
