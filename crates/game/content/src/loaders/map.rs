//! Sector layout loader.
//!
//! A layout is a rectangular hex grid, the cells carved out of it, and the
//! persons placed on it when the sector starts.

use std::path::Path;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use tactics_core::{HexMap, OffsetCoords, PlayerId};

use crate::loaders::{LoadResult, read_file};

/// Side a spawned actor fights for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnOwner {
    Human,
    Monsters,
}

impl SpawnOwner {
    pub fn player(self) -> PlayerId {
        match self {
            SpawnOwner::Human => PlayerId::HUMAN,
            SpawnOwner::Monsters => PlayerId::MONSTERS,
        }
    }
}

/// One person placed on the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnSpec {
    pub person: String,
    pub owner: SpawnOwner,
    pub at: (i32, i32),
    /// Carried props as `(sid, count)`.
    #[serde(default)]
    pub items: Vec<(String, u32)>,
    /// Equipment prop sids, worn in slot order.
    #[serde(default)]
    pub equip: Vec<String>,
}

/// Map layout structure for RON files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapLayout {
    pub width: u32,
    pub height: u32,
    /// Impassable cells.
    #[serde(default)]
    pub walls: Vec<(i32, i32)>,
    #[serde(default)]
    pub spawns: Vec<SpawnSpec>,
}

impl MapLayout {
    /// Builds the hex grid with walls applied.
    pub fn build(&self) -> LoadResult<HexMap> {
        let mut map = HexMap::grid(self.width, self.height);
        for &(x, y) in &self.walls {
            let Some(node) = map.node_at(OffsetCoords::new(x, y)) else {
                bail!("Wall ({x}, {y}) is outside the {}x{} map", self.width, self.height);
            };
            map.set_passable(node, false)?;
        }
        Ok(map)
    }

    /// Spawn points must be on the map, passable, and not shared.
    pub fn check_spawns(&self, map: &HexMap) -> LoadResult<()> {
        let mut taken = Vec::with_capacity(self.spawns.len());
        for spawn in &self.spawns {
            let (x, y) = spawn.at;
            let Some(node) = map.node_at(OffsetCoords::new(x, y)) else {
                bail!("Spawn of '{}' at ({x}, {y}) is outside the map", spawn.person);
            };
            if !map.is_passable(node) {
                bail!("Spawn of '{}' at ({x}, {y}) is inside a wall", spawn.person);
            }
            if taken.contains(&node) {
                bail!("Two spawns share cell ({x}, {y})");
            }
            taken.push(node);
        }
        Ok(())
    }
}

/// Loader for sector layouts from RON files.
pub struct MapLoader;

impl MapLoader {
    pub fn load(path: &Path) -> LoadResult<MapLayout> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Failed to load map {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<MapLayout> {
        let layout: MapLayout = ron::from_str(content).context("Failed to parse map RON")?;
        let map = layout.build()?;
        layout.check_spawns(&map)?;
        Ok(layout)
    }
}
