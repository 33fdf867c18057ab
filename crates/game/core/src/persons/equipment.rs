//! Worn equipment and its slots.

use std::sync::Arc;

use crate::env::{SchemeOracle, get_scheme};
use crate::schemes::{PersonArmorItem, PropScheme, TacticalActScheme};

use super::PersonError;

/// A single equippable prop with its remaining durability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equipment {
    scheme: Arc<PropScheme>,
    acts: Vec<Arc<TacticalActScheme>>,
    durable: u32,
}

impl Equipment {
    /// Builds equipment from a prop scheme, resolving the acts it grants.
    pub fn new<O: SchemeOracle + ?Sized>(
        scheme: Arc<PropScheme>,
        oracle: &O,
    ) -> Result<Self, PersonError> {
        let equip = scheme
            .equip
            .as_ref()
            .ok_or_else(|| PersonError::NotEquippable {
                sid: scheme.sid.clone(),
            })?;

        let acts = equip
            .acts
            .iter()
            .map(|sid| get_scheme::<TacticalActScheme, _>(oracle, sid))
            .collect::<Result<Vec<_>, _>>()?;
        let durable = equip.durable;

        Ok(Self {
            scheme,
            acts,
            durable,
        })
    }

    pub fn sid(&self) -> &str {
        &self.scheme.sid
    }

    pub fn scheme(&self) -> &Arc<PropScheme> {
        &self.scheme
    }

    pub fn acts(&self) -> &[Arc<TacticalActScheme>] {
        &self.acts
    }

    pub fn durable(&self) -> u32 {
        self.durable
    }

    pub fn is_broken(&self) -> bool {
        self.durable == 0
    }

    pub fn armors(&self) -> &[PersonArmorItem] {
        self.scheme
            .equip
            .as_ref()
            .map(|equip| equip.armors.as_slice())
            .unwrap_or_default()
    }

    /// Lowers durability. Returns true if this wear broke the equipment.
    pub fn wear(&mut self, amount: u32) -> bool {
        let was_broken = self.is_broken();
        self.durable = self.durable.saturating_sub(amount);
        !was_broken && self.is_broken()
    }
}

/// Fixed set of equipment slots of a person.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EquipmentCarrier {
    slots: Vec<Option<Equipment>>,
}

impl EquipmentCarrier {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
        }
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Puts equipment into a slot, returning what was there before.
    pub fn equip(
        &mut self,
        slot: usize,
        equipment: Equipment,
    ) -> Result<Option<Equipment>, PersonError> {
        let slots = self.slots.len();
        let target = self
            .slots
            .get_mut(slot)
            .ok_or(PersonError::SlotOutOfRange { slot, slots })?;
        Ok(target.replace(equipment))
    }

    pub fn unequip(&mut self, slot: usize) -> Result<Option<Equipment>, PersonError> {
        let slots = self.slots.len();
        let target = self
            .slots
            .get_mut(slot)
            .ok_or(PersonError::SlotOutOfRange { slot, slots })?;
        Ok(target.take())
    }

    pub fn get(&self, slot: usize) -> Option<&Equipment> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Equipment> {
        self.slots.get_mut(slot).and_then(Option::as_mut)
    }

    /// Occupied slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Equipment)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, equipment)| equipment.as_ref().map(|eq| (slot, eq)))
    }

    /// Slots holding equipment that provides armour.
    pub fn armor_slots(&self) -> Vec<usize> {
        self.iter()
            .filter(|(_, equipment)| !equipment.armors().is_empty())
            .map(|(slot, _)| slot)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{fixture_catalog, jacket_prop, pistol_prop};

    #[test]
    fn non_equippable_prop_is_rejected() {
        let catalog = fixture_catalog();
        let ammo = catalog.prop("pistol_ammo").unwrap();
        assert!(matches!(
            Equipment::new(ammo, &catalog),
            Err(PersonError::NotEquippable { .. })
        ));
    }

    #[test]
    fn equipment_resolves_granted_acts() {
        let catalog = fixture_catalog();
        let pistol = Equipment::new(Arc::new(pistol_prop()), &catalog).unwrap();
        assert_eq!(pistol.acts().len(), 1);
        assert_eq!(pistol.acts()[0].sid, "pistol_shot");
    }

    #[test]
    fn wear_reports_breaking_once() {
        let catalog = fixture_catalog();
        let mut jacket = Equipment::new(Arc::new(jacket_prop()), &catalog).unwrap();
        let durable = jacket.durable();

        assert!(!jacket.wear(durable - 1));
        assert!(jacket.wear(5));
        assert!(!jacket.wear(1));
        assert!(jacket.is_broken());
    }

    #[test]
    fn slots_are_bounded() {
        let catalog = fixture_catalog();
        let jacket = Equipment::new(Arc::new(jacket_prop()), &catalog).unwrap();
        let mut carrier = EquipmentCarrier::new(2);

        assert_eq!(carrier.equip(1, jacket.clone()), Ok(None));
        assert_eq!(carrier.armor_slots(), vec![1]);
        assert_eq!(
            carrier.equip(2, jacket),
            Err(PersonError::SlotOutOfRange { slot: 2, slots: 2 })
        );
        assert!(carrier.unequip(1).unwrap().is_some());
        assert!(carrier.armor_slots().is_empty());
    }
}
