//! Tactical acts available to a person.

use std::sync::Arc;

use crate::map::CubeCoords;
use crate::schemes::{TacticalActConstrains, TacticalActScheme, TacticalActStats};

use super::EquipmentCarrier;

/// An act bound to its rule table, optionally granted by worn equipment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TacticalAct {
    scheme: Arc<TacticalActScheme>,
    equipment_slot: Option<usize>,
}

impl TacticalAct {
    pub fn new(scheme: Arc<TacticalActScheme>) -> Self {
        Self {
            scheme,
            equipment_slot: None,
        }
    }

    pub fn from_equipment(scheme: Arc<TacticalActScheme>, slot: usize) -> Self {
        Self {
            scheme,
            equipment_slot: Some(slot),
        }
    }

    pub fn sid(&self) -> &str {
        &self.scheme.sid
    }

    pub fn scheme(&self) -> &TacticalActScheme {
        &self.scheme
    }

    pub fn stats(&self) -> &TacticalActStats {
        &self.scheme.stats
    }

    pub fn constrains(&self) -> Option<&TacticalActConstrains> {
        self.scheme.constrains.as_ref()
    }

    /// Slot of the equipment that grants this act.
    pub fn equipment_slot(&self) -> Option<usize> {
        self.equipment_slot
    }

    /// True when `target` lies within the act's inclusive range from `from`.
    pub fn check_distance(&self, from: CubeCoords, target: CubeCoords) -> bool {
        self.scheme.stats.range.contains(from.distance_to(target))
    }
}

/// Innate acts of a person plus acts of currently worn equipment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TacticalActCarrier {
    innate: Vec<Arc<TacticalActScheme>>,
    acts: Vec<TacticalAct>,
}

impl TacticalActCarrier {
    pub fn new(innate: Vec<Arc<TacticalActScheme>>) -> Self {
        let acts = innate.iter().cloned().map(TacticalAct::new).collect();
        Self { innate, acts }
    }

    /// Recomputes the act list after equipment changed. Broken equipment
    /// still grants its acts.
    pub fn rebuild(&mut self, equipment: &EquipmentCarrier) {
        let mut acts: Vec<TacticalAct> = self.innate.iter().cloned().map(TacticalAct::new).collect();
        for (slot, worn) in equipment.iter() {
            acts.extend(
                worn.acts()
                    .iter()
                    .cloned()
                    .map(|scheme| TacticalAct::from_equipment(scheme, slot)),
            );
        }
        self.acts = acts;
    }

    pub fn acts(&self) -> &[TacticalAct] {
        &self.acts
    }

    pub fn get(&self, sid: &str) -> Option<&TacticalAct> {
        self.acts.iter().find(|act| act.sid() == sid)
    }

    pub fn is_empty(&self) -> bool {
        self.acts.is_empty()
    }
}
