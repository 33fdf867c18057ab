use crate::persons::{Equipment, PersonKind};

/// Wears equipment down as it is used or hit.
pub trait EquipmentDurableService {
    /// Returns true if this use broke the equipment.
    fn update_by_use(&mut self, equipment: &mut Equipment, owner: PersonKind) -> bool;
}

/// Removes a fixed amount of durability per use.
#[derive(Clone, Copy, Debug)]
pub struct WearDurableService {
    wear_per_use: u32,
}

impl WearDurableService {
    pub const fn new(wear_per_use: u32) -> Self {
        Self { wear_per_use }
    }
}

impl Default for WearDurableService {
    fn default() -> Self {
        Self::new(1)
    }
}

impl EquipmentDurableService for WearDurableService {
    fn update_by_use(&mut self, equipment: &mut Equipment, owner: PersonKind) -> bool {
        let broke = equipment.wear(self.wear_per_use);
        if broke {
            tracing::debug!(equipment = equipment.sid(), %owner, "equipment broke");
        }
        broke
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SchemeOracle;
    use crate::test_utils::fixture_catalog;

    #[test]
    fn wears_one_point_per_use() {
        let catalog = fixture_catalog();
        let mut pistol = Equipment::new(catalog.prop("pistol").unwrap(), &catalog).unwrap();
        let before = pistol.durable();
        let mut service = WearDurableService::default();

        assert!(!service.update_by_use(&mut pistol, PersonKind::Human));
        assert_eq!(pistol.durable(), before - 1);
    }
}
