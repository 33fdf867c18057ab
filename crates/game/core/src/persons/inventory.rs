//! Carried props: stackable resources and spare equipment.

use std::sync::Arc;

use crate::schemes::PropScheme;

use super::{Equipment, PersonError};

/// Stack of a countable prop (ammunition, food, medkits).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource {
    scheme: Arc<PropScheme>,
    count: u32,
}

impl Resource {
    pub fn new(scheme: Arc<PropScheme>, count: u32) -> Self {
        Self { scheme, count }
    }

    pub fn sid(&self) -> &str {
        &self.scheme.sid
    }

    pub fn scheme(&self) -> &Arc<PropScheme> {
        &self.scheme
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prop {
    Resource(Resource),
    Equipment(Equipment),
}

impl Prop {
    pub fn sid(&self) -> &str {
        match self {
            Prop::Resource(resource) => resource.sid(),
            Prop::Equipment(equipment) => equipment.sid(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    props: Vec<Prop>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a prop. Resources of the same scheme are merged into one stack.
    pub fn add(&mut self, prop: Prop) {
        if let Prop::Resource(incoming) = &prop {
            for existing in &mut self.props {
                if let Prop::Resource(stack) = existing
                    && stack.sid() == incoming.sid()
                {
                    stack.count += incoming.count;
                    return;
                }
            }
        }
        self.props.push(prop);
    }

    pub fn add_resource(&mut self, scheme: Arc<PropScheme>, count: u32) {
        self.add(Prop::Resource(Resource::new(scheme, count)));
    }

    pub fn props(&self) -> &[Prop] {
        &self.props
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.props.iter().filter_map(|prop| match prop {
            Prop::Resource(resource) => Some(resource),
            Prop::Equipment(_) => None,
        })
    }

    pub fn resource(&self, sid: &str) -> Option<&Resource> {
        self.resources().find(|resource| resource.sid() == sid)
    }

    pub fn resource_count(&self, sid: &str) -> u32 {
        self.resource(sid).map_or(0, Resource::count)
    }

    /// Total rounds of the given caliber over all stacks.
    pub fn caliber_count(&self, caliber: &str) -> u32 {
        self.resources()
            .filter(|resource| resource.scheme.caliber() == Some(caliber))
            .map(Resource::count)
            .sum()
    }

    /// Removes `count` units of a resource. Nothing is removed on failure.
    pub fn take_resource(&mut self, sid: &str, count: u32) -> Result<(), PersonError> {
        let available = self.resource_count(sid);
        if available < count {
            return Err(PersonError::NotEnough {
                resource: sid.to_owned(),
                required: count,
                available,
            });
        }
        self.drain(count, |resource| resource.sid() == sid);
        Ok(())
    }

    /// Removes `count` rounds of a caliber, emptying stacks in inventory
    /// order. Nothing is removed on failure.
    pub fn take_caliber(&mut self, caliber: &str, count: u32) -> Result<(), PersonError> {
        let available = self.caliber_count(caliber);
        if available < count {
            return Err(PersonError::NotEnough {
                resource: caliber.to_owned(),
                required: count,
                available,
            });
        }
        self.drain(count, |resource| resource.scheme.caliber() == Some(caliber));
        Ok(())
    }

    /// Takes spare equipment out of the inventory.
    pub fn take_equipment(&mut self, sid: &str) -> Option<Equipment> {
        let index = self
            .props
            .iter()
            .position(|prop| matches!(prop, Prop::Equipment(eq) if eq.sid() == sid))?;
        match self.props.remove(index) {
            Prop::Equipment(equipment) => Some(equipment),
            Prop::Resource(_) => None,
        }
    }

    fn drain(&mut self, mut count: u32, matches: impl Fn(&Resource) -> bool) {
        for prop in &mut self.props {
            if count == 0 {
                break;
            }
            if let Prop::Resource(resource) = prop
                && matches(resource)
            {
                let taken = resource.count.min(count);
                resource.count -= taken;
                count -= taken;
            }
        }
        self.props
            .retain(|prop| !matches!(prop, Prop::Resource(resource) if resource.count == 0));
    }
}
