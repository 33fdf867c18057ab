//! Scenario helpers shared by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use tactics_core::schemes::{
    ActRange, DefenceType, ImpactType, JobScheme, JobType, OffenseType, PerkLevelScheme,
    PerkScheme, PersonArmorItem, PersonDefenceItem, PersonKind, PersonRuleLevel, PersonScheme,
    PropBulletScheme, PropEquipScheme, PropScheme, Roll, TacticalActConstrains,
    TacticalActEffectType, TacticalActOffence, TacticalActScheme, TacticalActStats,
    TacticalActTargets,
};
use tactics_core::{
    ActorId, GameConfig, HexMap, JobPerkResolver, NodeId, OffsetCoords, Person, PlayerId,
    SchemeCatalog, SchemeOracle, SectorState, TacticalAct, TacticalActUsageRandomSource,
    TacticalActUsageService,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rolled {
    Efficient,
    ToHit,
    ArmorSave,
    SecondaryAct,
    DamagedEquipment,
}

#[derive(Debug, Default)]
struct Script {
    efficient: VecDeque<i32>,
    to_hit: VecDeque<i32>,
    armor_save: VecDeque<i32>,
    secondary: VecDeque<i32>,
    log: Vec<Rolled>,
}

/// Random source fed from per-kind queues. Empty queues fall back to
/// efficiency 1, to-hit 6, failed armor save, and secondary acts firing.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    script: Rc<RefCell<Script>>,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn efficient(&self, values: impl IntoIterator<Item = i32>) -> &Self {
        self.script.borrow_mut().efficient.extend(values);
        self
    }

    pub fn to_hit(&self, values: impl IntoIterator<Item = i32>) -> &Self {
        self.script.borrow_mut().to_hit.extend(values);
        self
    }

    pub fn armor_save(&self, values: impl IntoIterator<Item = i32>) -> &Self {
        self.script.borrow_mut().armor_save.extend(values);
        self
    }

    pub fn secondary(&self, values: impl IntoIterator<Item = i32>) -> &Self {
        self.script.borrow_mut().secondary.extend(values);
        self
    }

    /// Roll kinds requested so far, in order.
    pub fn log(&self) -> Vec<Rolled> {
        self.script.borrow().log.clone()
    }

    fn next(&self, kind: Rolled, fallback: i32) -> i32 {
        let mut script = self.script.borrow_mut();
        script.log.push(kind);
        let queue = match kind {
            Rolled::Efficient => &mut script.efficient,
            Rolled::ToHit => &mut script.to_hit,
            Rolled::ArmorSave => &mut script.armor_save,
            Rolled::SecondaryAct => &mut script.secondary,
            Rolled::DamagedEquipment => return fallback,
        };
        queue.pop_front().unwrap_or(fallback)
    }
}

impl TacticalActUsageRandomSource for ScriptedRandom {
    fn roll_efficient(&mut self, _roll: &Roll) -> i32 {
        self.next(Rolled::Efficient, 1)
    }

    fn roll_to_hit(&mut self, _roll: &Roll) -> i32 {
        self.next(Rolled::ToHit, 6)
    }

    fn roll_armor_save(&mut self) -> i32 {
        self.next(Rolled::ArmorSave, 1)
    }

    fn roll_use_secondary_act(&mut self) -> i32 {
        self.next(Rolled::SecondaryAct, 6)
    }

    fn roll_damaged_equipment(&mut self, slots: &[usize]) -> Option<usize> {
        self.next(Rolled::DamagedEquipment, 0);
        slots.first().copied()
    }
}

pub fn usage(random: &ScriptedRandom) -> TacticalActUsageService {
    usage_with(random, GameConfig::without_turn_upkeep())
}

pub fn usage_with(random: &ScriptedRandom, config: GameConfig) -> TacticalActUsageService {
    TacticalActUsageService::new(Box::new(random.clone()), Arc::new(JobPerkResolver), config)
}

fn act(
    sid: &str,
    targets: TacticalActTargets,
    effect: TacticalActEffectType,
    ap_rank: i32,
    range: ActRange,
) -> TacticalActScheme {
    TacticalActScheme {
        sid: sid.into(),
        stats: TacticalActStats {
            targets,
            effect,
            offence: TacticalActOffence {
                offence_type: OffenseType::Tactical,
                impact: ImpactType::Kinetic,
                ap_rank,
            },
            range,
        },
        constrains: None,
        efficient: Roll::new(6, 1),
        to_hit: Roll::d6(),
    }
}

pub fn catalog() -> SchemeCatalog {
    let mut catalog = SchemeCatalog::new();
    let enemy = TacticalActTargets::ENEMY;
    let damage = TacticalActEffectType::Damage;

    catalog
        .insert_act(act("punch", enemy, damage, 1, ActRange::melee()))
        .unwrap();
    catalog
        .insert_act(act("spear", enemy, damage, 5, ActRange::new(1, 2)))
        .unwrap();
    catalog
        .insert_act(act("rail_shot", enemy, damage, 12, ActRange::new(1, 6)))
        .unwrap();
    catalog
        .insert_act(act(
            "bandage",
            TacticalActTargets::SELF | TacticalActTargets::ALLY,
            TacticalActEffectType::Heal,
            0,
            ActRange::melee(),
        ))
        .unwrap();
    let mut pistol_shot = act("pistol_shot", enemy, damage, 4, ActRange::new(1, 6));
    pistol_shot.constrains = Some(TacticalActConstrains {
        prop_resource_type: "9mm".into(),
        prop_resource_count: 1,
    });
    catalog.insert_act(pistol_shot).unwrap();

    catalog
        .insert_prop(PropScheme {
            sid: "pistol_ammo".into(),
            bullet: Some(PropBulletScheme {
                caliber: "9mm".into(),
            }),
            use_rules: None,
            equip: None,
        })
        .unwrap();
    catalog
        .insert_prop(PropScheme {
            sid: "pistol".into(),
            bullet: None,
            use_rules: None,
            equip: Some(PropEquipScheme {
                armors: Vec::new(),
                acts: vec!["pistol_shot".into()],
                durable: 5,
            }),
        })
        .unwrap();
    catalog
        .insert_prop(PropScheme {
            sid: "jacket".into(),
            bullet: None,
            use_rules: None,
            equip: Some(PropEquipScheme {
                armors: vec![PersonArmorItem::new(
                    ImpactType::Kinetic,
                    2,
                    PersonRuleLevel::Normal,
                )],
                acts: Vec::new(),
                durable: 3,
            }),
        })
        .unwrap();

    catalog
        .insert_perk(PerkScheme {
            sid: "brawler".into(),
            levels: vec![PerkLevelScheme {
                max_value: 1,
                jobs: vec![
                    JobScheme {
                        job_type: JobType::Defeats,
                        value: 2,
                    },
                    JobScheme {
                        job_type: JobType::AttackActors,
                        value: 5,
                    },
                ],
            }],
        })
        .unwrap();

    catalog
        .insert_person(PersonScheme {
            sid: "scout".into(),
            kind: PersonKind::Human,
            hp: 10,
            defences: Vec::new(),
            armors: Vec::new(),
            acts: vec!["punch".into(), "spear".into(), "bandage".into()],
            equipment_slots: 3,
        })
        .unwrap();
    catalog
        .insert_person(PersonScheme {
            sid: "ghoul".into(),
            kind: PersonKind::Monster,
            hp: 5,
            defences: vec![PersonDefenceItem::new(
                DefenceType::TacticalDefence,
                PersonRuleLevel::Normal,
            )],
            armors: Vec::new(),
            acts: vec!["punch".into()],
            equipment_slots: 1,
        })
        .unwrap();
    catalog
        .insert_person(PersonScheme {
            sid: "husk".into(),
            kind: PersonKind::Monster,
            hp: 5,
            defences: Vec::new(),
            armors: Vec::new(),
            acts: vec!["punch".into()],
            equipment_slots: 1,
        })
        .unwrap();

    catalog.check_references().unwrap();
    catalog
}

pub fn node(map: &HexMap, x: i32, y: i32) -> NodeId {
    map.node_at(OffsetCoords::new(x, y)).unwrap()
}

/// Builds a person from the test catalog and places it at `(x, y)`.
pub fn spawn(
    state: &mut SectorState,
    catalog: &SchemeCatalog,
    sid: &str,
    owner: PlayerId,
    x: i32,
    y: i32,
) -> ActorId {
    let scheme = catalog.person(sid).unwrap();
    let person = Person::from_scheme(&scheme, catalog).unwrap();
    let at = node(&state.map, x, y);
    state.actors.spawn(person, owner, at)
}

/// Act of a person by sid.
pub fn act_of(state: &SectorState, actor: ActorId, sid: &str) -> TacticalAct {
    state
        .actors
        .get(actor)
        .unwrap()
        .person()
        .acts()
        .get(sid)
        .unwrap()
        .clone()
}

pub fn health(state: &SectorState, actor: ActorId) -> i32 {
    state
        .actors
        .get(actor)
        .unwrap()
        .person()
        .survival()
        .value(tactics_core::SurvivalStatType::Health)
        .unwrap()
}
