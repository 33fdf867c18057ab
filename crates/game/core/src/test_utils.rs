//! Fixtures shared by unit tests.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::config::GameConfig;
use crate::env::{SchemeCatalog, SchemeOracle};
use crate::map::{HexMap, NodeId};
use crate::persons::{JobPerkResolver, Person};
use crate::schemes::{
    ActRange, ConsumeCommonRule, ConsumeCommonRuleType, DefenceType, ImpactType, JobScheme,
    JobType, OffenseType, PerkLevelScheme, PerkScheme, PersonArmorItem, PersonDefenceItem,
    PersonKind, PersonRuleDirection, PersonRuleLevel, PersonScheme, PropBulletScheme,
    PropEquipScheme, PropScheme, PropUseScheme, Roll, TacticalActConstrains,
    TacticalActEffectType, TacticalActOffence, TacticalActScheme, TacticalActStats,
    TacticalActTargets,
};
use crate::sector::SectorState;
use crate::tactics::{ActorId, PlayerId, TacticalActUsageRandomSource, TacticalActUsageService};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollKind {
    Efficient,
    ToHit,
    ArmorSave,
    SecondaryAct,
    DamagedEquipment,
}

/// Random source returning the same value for every roll of a kind.
#[derive(Clone, Debug)]
pub struct FixedRandom {
    pub efficient: i32,
    pub to_hit: i32,
    pub armor_save: i32,
    pub secondary: i32,
    pub log: Rc<RefCell<Vec<RollKind>>>,
}

impl Default for FixedRandom {
    fn default() -> Self {
        Self {
            efficient: 3,
            to_hit: 6,
            armor_save: 1,
            secondary: 6,
            log: Rc::default(),
        }
    }
}

impl TacticalActUsageRandomSource for FixedRandom {
    fn roll_efficient(&mut self, _roll: &Roll) -> i32 {
        self.log.borrow_mut().push(RollKind::Efficient);
        self.efficient
    }

    fn roll_to_hit(&mut self, _roll: &Roll) -> i32 {
        self.log.borrow_mut().push(RollKind::ToHit);
        self.to_hit
    }

    fn roll_armor_save(&mut self) -> i32 {
        self.log.borrow_mut().push(RollKind::ArmorSave);
        self.armor_save
    }

    fn roll_use_secondary_act(&mut self) -> i32 {
        self.log.borrow_mut().push(RollKind::SecondaryAct);
        self.secondary
    }

    fn roll_damaged_equipment(&mut self, slots: &[usize]) -> Option<usize> {
        self.log.borrow_mut().push(RollKind::DamagedEquipment);
        slots.first().copied()
    }
}

pub fn fixed_usage() -> TacticalActUsageService {
    TacticalActUsageService::new(
        Box::new(FixedRandom::default()),
        Arc::new(JobPerkResolver),
        GameConfig::without_turn_upkeep(),
    )
}

fn melee(sid: &str, offence_type: OffenseType, ap_rank: i32, efficient: Roll) -> TacticalActScheme {
    TacticalActScheme {
        sid: sid.into(),
        stats: TacticalActStats {
            targets: TacticalActTargets::ENEMY,
            effect: TacticalActEffectType::Damage,
            offence: TacticalActOffence {
                offence_type,
                impact: ImpactType::Kinetic,
                ap_rank,
            },
            range: ActRange::melee(),
        },
        constrains: None,
        efficient,
        to_hit: Roll::d6(),
    }
}

pub fn fist_act() -> TacticalActScheme {
    melee("fist", OffenseType::Tactical, 1, Roll::new(3, 1))
}

pub fn claws_act() -> TacticalActScheme {
    melee("claws", OffenseType::Fury, 2, Roll::new(4, 1))
}

pub fn pistol_shot_act() -> TacticalActScheme {
    TacticalActScheme {
        sid: "pistol_shot".into(),
        stats: TacticalActStats {
            targets: TacticalActTargets::ENEMY,
            effect: TacticalActEffectType::Damage,
            offence: TacticalActOffence {
                offence_type: OffenseType::Tactical,
                impact: ImpactType::Kinetic,
                ap_rank: 4,
            },
            range: ActRange::new(1, 6),
        },
        constrains: Some(TacticalActConstrains {
            prop_resource_type: "9mm".into(),
            prop_resource_count: 1,
        }),
        efficient: Roll::new(6, 1),
        to_hit: Roll::d6(),
    }
}

pub fn bandage_act() -> TacticalActScheme {
    TacticalActScheme {
        sid: "bandage".into(),
        stats: TacticalActStats {
            targets: TacticalActTargets::SELF | TacticalActTargets::ALLY,
            effect: TacticalActEffectType::Heal,
            offence: TacticalActOffence {
                offence_type: OffenseType::Undefined,
                impact: ImpactType::Kinetic,
                ap_rank: 0,
            },
            range: ActRange::melee(),
        },
        constrains: None,
        efficient: Roll::new(3, 1),
        to_hit: Roll::d6(),
    }
}

/// Gains levels by trading blows.
pub fn fighter_perk() -> PerkScheme {
    PerkScheme {
        sid: "fighter".into(),
        levels: vec![PerkLevelScheme {
            max_value: 1,
            jobs: vec![
                JobScheme {
                    job_type: JobType::AttackActors,
                    value: 3,
                },
                JobScheme {
                    job_type: JobType::ReceiveHits,
                    value: 2,
                },
            ],
        }],
    }
}

pub fn pistol_ammo_prop() -> PropScheme {
    PropScheme {
        sid: "pistol_ammo".into(),
        bullet: Some(PropBulletScheme {
            caliber: "9mm".into(),
        }),
        use_rules: None,
        equip: None,
    }
}

pub fn pistol_prop() -> PropScheme {
    PropScheme {
        sid: "pistol".into(),
        bullet: None,
        use_rules: None,
        equip: Some(PropEquipScheme {
            armors: Vec::new(),
            acts: vec!["pistol_shot".into()],
            durable: 10,
        }),
    }
}

pub fn jacket_prop() -> PropScheme {
    PropScheme {
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
    }
}

pub fn ration_prop() -> PropScheme {
    PropScheme {
        sid: "ration".into(),
        bullet: None,
        use_rules: Some(PropUseScheme {
            consumable: true,
            common_rules: vec![ConsumeCommonRule {
                rule_type: ConsumeCommonRuleType::Satiety,
                level: PersonRuleLevel::Normal,
                direction: PersonRuleDirection::Positive,
            }],
        }),
        equip: None,
    }
}

pub fn human_scheme() -> PersonScheme {
    PersonScheme {
        sid: "human".into(),
        kind: PersonKind::Human,
        hp: 10,
        defences: Vec::new(),
        armors: Vec::new(),
        acts: vec!["fist".into()],
        equipment_slots: PersonScheme::DEFAULT_SLOTS,
    }
}

pub fn monster_scheme() -> PersonScheme {
    PersonScheme {
        sid: "ghoul".into(),
        kind: PersonKind::Monster,
        hp: 6,
        defences: vec![PersonDefenceItem::new(
            DefenceType::TacticalDefence,
            PersonRuleLevel::Lesser,
        )],
        armors: vec![PersonArmorItem::new(
            ImpactType::Kinetic,
            1,
            PersonRuleLevel::Lesser,
        )],
        acts: vec!["claws".into()],
        equipment_slots: 1,
    }
}

/// Catalog holding every fixture scheme above.
pub fn fixture_catalog() -> SchemeCatalog {
    let mut catalog = SchemeCatalog::new();
    for act in [fist_act(), claws_act(), pistol_shot_act(), bandage_act()] {
        catalog.insert_act(act).unwrap();
    }
    catalog.insert_perk(fighter_perk()).unwrap();
    for prop in [pistol_ammo_prop(), pistol_prop(), jacket_prop(), ration_prop()] {
        catalog.insert_prop(prop).unwrap();
    }
    catalog.insert_person(human_scheme()).unwrap();
    catalog.insert_person(monster_scheme()).unwrap();
    catalog.check_references().unwrap();
    catalog
}

pub fn human(catalog: &SchemeCatalog) -> Person {
    Person::from_scheme(&catalog.person("human").unwrap(), catalog).unwrap()
}

/// Sector with one human actor standing on `node`.
pub fn sector_with_human(map: HexMap, node: NodeId) -> (SectorState, ActorId) {
    let catalog = fixture_catalog();
    let mut state = SectorState::new(map);
    let actor = state.actors.spawn(human(&catalog), PlayerId::HUMAN, node);
    (state, actor)
}
