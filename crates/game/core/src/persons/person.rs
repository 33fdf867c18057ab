use crate::env::{SchemeOracle, get_scheme};
use crate::schemes::{
    ConsumeCommonRuleType, PersonArmorItem, PersonDefenceItem, PersonKind, PersonRuleDirection,
    PersonScheme, TacticalActScheme,
};

use super::{
    Equipment, EquipmentCarrier, EvolutionData, Inventory, PersonError, SurvivalData,
    SurvivalStatType, TacticalActCarrier,
};

/// Innate defences and armour of a person.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CombatStats {
    pub defences: Vec<PersonDefenceItem>,
    pub armors: Vec<PersonArmorItem>,
}

/// Survival changes caused by using a prop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropUsage {
    pub sid: String,
    pub consumed: bool,
    pub changes: Vec<(SurvivalStatType, i32)>,
}

/// Character sheet behind an actor.
#[derive(Debug)]
pub struct Person {
    sid: String,
    kind: PersonKind,
    survival: SurvivalData,
    evolution: Option<EvolutionData>,
    combat_stats: CombatStats,
    inventory: Inventory,
    equipment: EquipmentCarrier,
    acts: TacticalActCarrier,
}

impl Person {
    /// Builds a fresh person from its template.
    ///
    /// Humans get the full survival set and perks for every known perk
    /// scheme; monsters only track health and never evolve.
    pub fn from_scheme<O: SchemeOracle + ?Sized>(
        scheme: &PersonScheme,
        oracle: &O,
    ) -> Result<Self, PersonError> {
        let innate = scheme
            .acts
            .iter()
            .map(|sid| get_scheme::<TacticalActScheme, _>(oracle, sid))
            .collect::<Result<Vec<_>, _>>()?;

        let (survival, evolution) = match scheme.kind {
            PersonKind::Human => (
                SurvivalData::human(scheme.hp),
                Some(EvolutionData::new(oracle)),
            ),
            PersonKind::Monster => (SurvivalData::monster(scheme.hp), None),
        };

        Ok(Self {
            sid: scheme.sid.clone(),
            kind: scheme.kind,
            survival,
            evolution,
            combat_stats: CombatStats {
                defences: scheme.defences.clone(),
                armors: scheme.armors.clone(),
            },
            inventory: Inventory::new(),
            equipment: EquipmentCarrier::new(scheme.equipment_slots),
            acts: TacticalActCarrier::new(innate),
        })
    }

    pub fn sid(&self) -> &str {
        &self.sid
    }

    pub fn kind(&self) -> PersonKind {
        self.kind
    }

    pub fn survival(&self) -> &SurvivalData {
        &self.survival
    }

    pub fn survival_mut(&mut self) -> &mut SurvivalData {
        &mut self.survival
    }

    pub fn evolution(&self) -> Option<&EvolutionData> {
        self.evolution.as_ref()
    }

    pub fn evolution_mut(&mut self) -> Option<&mut EvolutionData> {
        self.evolution.as_mut()
    }

    pub fn combat_stats(&self) -> &CombatStats {
        &self.combat_stats
    }

    pub fn combat_stats_mut(&mut self) -> &mut CombatStats {
        &mut self.combat_stats
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn equipment(&self) -> &EquipmentCarrier {
        &self.equipment
    }

    /// Mutable access to a worn item. Acts do not depend on durability, so
    /// the act list stays valid.
    pub fn equipment_mut(&mut self, slot: usize) -> Option<&mut Equipment> {
        self.equipment.get_mut(slot)
    }

    pub fn acts(&self) -> &TacticalActCarrier {
        &self.acts
    }

    pub fn is_dead(&self) -> bool {
        self.survival.is_dead()
    }

    /// Monsters and persons without evolution data gain no perk progress.
    pub fn can_evolve(&self) -> bool {
        self.kind != PersonKind::Monster && self.evolution.is_some()
    }

    /// Armour in the order it is consulted: innate first, then worn,
    /// unbroken equipment in slot order.
    pub fn armors(&self) -> Vec<PersonArmorItem> {
        let worn = self
            .equipment
            .iter()
            .filter(|(_, equipment)| !equipment.is_broken())
            .flat_map(|(_, equipment)| equipment.armors().iter().copied());
        self.combat_stats
            .armors
            .iter()
            .copied()
            .chain(worn)
            .collect()
    }

    pub fn equip(
        &mut self,
        slot: usize,
        equipment: Equipment,
    ) -> Result<Option<Equipment>, PersonError> {
        let previous = self.equipment.equip(slot, equipment)?;
        self.acts.rebuild(&self.equipment);
        Ok(previous)
    }

    pub fn unequip(&mut self, slot: usize) -> Result<Option<Equipment>, PersonError> {
        let previous = self.equipment.unequip(slot)?;
        self.acts.rebuild(&self.equipment);
        Ok(previous)
    }

    /// Applies the consume rules of a carried prop.
    ///
    /// Consumable props lose one unit. A prop without use rules is rejected
    /// before anything changes.
    pub fn use_prop(&mut self, sid: &str) -> Result<PropUsage, PersonError> {
        let resource = self
            .inventory
            .resource(sid)
            .filter(|resource| resource.count() > 0)
            .ok_or_else(|| PersonError::PropNotFound {
                sid: sid.to_owned(),
            })?;
        let scheme = resource.scheme().clone();
        let use_rules = scheme
            .use_rules
            .as_ref()
            .ok_or_else(|| PersonError::NotUsable {
                sid: sid.to_owned(),
            })?;

        let mut changes = Vec::with_capacity(use_rules.common_rules.len());
        for rule in &use_rules.common_rules {
            let Some(amount) = rule.amount() else {
                continue;
            };
            let stat = match rule.rule_type {
                ConsumeCommonRuleType::Satiety => SurvivalStatType::Satiety,
                ConsumeCommonRuleType::Thirst => SurvivalStatType::Hydration,
                ConsumeCommonRuleType::Health => SurvivalStatType::Health,
                ConsumeCommonRuleType::Intoxication => SurvivalStatType::Intoxication,
            };
            let delta = match rule.direction {
                PersonRuleDirection::Positive => amount,
                PersonRuleDirection::Negative => -amount,
            };
            if self.survival.restore_stat(stat, delta) {
                changes.push((stat, delta));
            }
        }

        if use_rules.consumable {
            self.inventory.take_resource(sid, 1)?;
        }

        Ok(PropUsage {
            sid: sid.to_owned(),
            consumed: use_rules.consumable,
            changes,
        })
    }
}
