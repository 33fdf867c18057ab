//! Sector setup from loaded content.
//!
//! A scenario pairs a layout (terrain and spawn points) with the scheme
//! catalog its persons come from, and builds a ready-to-run [`Sector`]
//! with both sides driven by bots.

use std::sync::Arc;

use tactics_content::{ContentFactory, MapLayout, SpawnSpec, builtin};
use tactics_core::persons::{Equipment, Prop};
use tactics_core::schemes::PropScheme;
use tactics_core::{
    Actor, ActorId, DiceRandomSource, GameConfig, JobPerkResolver, OffsetCoords, PcgDice,
    PerkResolver, Person, PlayerId, SchemeCatalog, SchemeOracle, Sector, SectorState,
    TacticalActUsageService, WearDurableService,
};

use crate::bot::BotTaskSource;
use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};

/// Everything needed to start a sector.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub layout: MapLayout,
    pub catalog: Arc<SchemeCatalog>,
    pub config: GameConfig,
}

impl Scenario {
    pub fn new(layout: MapLayout, catalog: SchemeCatalog, config: GameConfig) -> Self {
        Self {
            layout,
            catalog: Arc::new(catalog),
            config,
        }
    }

    /// The demo arena with the built-in rule tables.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(
            builtin::arena()?,
            builtin::catalog()?,
            builtin::config()?,
        ))
    }

    /// Content named by the runner configuration: a data directory if one
    /// is set, otherwise the built-in tables.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let Some(data_dir) = &config.data_dir else {
            return Self::builtin();
        };
        let factory = ContentFactory::new(data_dir);
        Ok(Self::new(
            factory.load_map(&config.map)?,
            factory.load_catalog()?,
            factory.load_config()?,
        ))
    }

    /// Places every spawn and wires up the act resolver.
    pub fn create_sector(&self, seed: u64) -> Result<Sector> {
        let map = self.layout.build()?;
        self.layout.check_spawns(&map)?;
        let mut state = SectorState::new(map);

        tracing::info!(
            spawns = self.layout.spawns.len(),
            width = self.layout.width,
            height = self.layout.height,
            "creating sector from scenario"
        );

        let resolver: Arc<dyn PerkResolver> = Arc::new(JobPerkResolver);
        for (index, spawn) in self.layout.spawns.iter().enumerate() {
            let id = ActorId(index as u32);
            let actor = self.build_actor(&state, id, spawn)?;
            state
                .actors
                .insert(actor.with_perk_resolver(Arc::clone(&resolver)));
        }

        let usage = TacticalActUsageService::new(
            Box::new(DiceRandomSource::new(PcgDice::new(seed))),
            resolver,
            self.config.clone(),
        )
        .with_durable_service(Box::new(WearDurableService::default()));

        let mut sector = Sector::new(state, usage);
        sector.add_source(Box::new(BotTaskSource::new(PlayerId::HUMAN)));
        sector.add_source(Box::new(BotTaskSource::new(PlayerId::MONSTERS)));
        Ok(sector)
    }

    fn build_actor(&self, state: &SectorState, id: ActorId, spawn: &SpawnSpec) -> Result<Actor> {
        let scheme = self
            .catalog
            .person(&spawn.person)
            .ok_or_else(|| RuntimeError::UnknownScheme {
                kind: "person",
                sid: spawn.person.clone(),
            })?;
        let spawn_error = |source| RuntimeError::Spawn {
            person: spawn.person.clone(),
            source,
        };

        let mut person = Person::from_scheme(&scheme, &*self.catalog).map_err(spawn_error)?;

        for (sid, count) in &spawn.items {
            let prop = self.prop(sid)?;
            if prop.equip.is_some() {
                for _ in 0..*count {
                    let equipment =
                        Equipment::new(Arc::clone(&prop), &*self.catalog).map_err(spawn_error)?;
                    person.inventory_mut().add(Prop::Equipment(equipment));
                }
            } else {
                person.inventory_mut().add_resource(prop, *count);
            }
        }

        for (slot, sid) in spawn.equip.iter().enumerate() {
            let equipment =
                Equipment::new(self.prop(sid)?, &*self.catalog).map_err(spawn_error)?;
            person.equip(slot, equipment).map_err(spawn_error)?;
        }

        let (x, y) = spawn.at;
        let node = state
            .map
            .node_at(OffsetCoords::new(x, y))
            .ok_or_else(|| anyhow::anyhow!("Spawn at ({x}, {y}) is outside the map"))?;

        tracing::debug!(%id, person = %spawn.person, ?node, "spawned");
        Ok(Actor::new(id, person, spawn.owner.player(), node))
    }

    fn prop(&self, sid: &str) -> Result<Arc<PropScheme>> {
        self.catalog
            .prop(sid)
            .ok_or_else(|| RuntimeError::UnknownScheme {
                kind: "prop",
                sid: sid.to_owned(),
            })
    }
}
