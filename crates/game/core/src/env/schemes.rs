//! Scheme lookup oracle.
//!
//! The tactical core reads rule tables through [`SchemeOracle`] only, so the
//! data may come from embedded RON, files on disk, or hand-built fixtures.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::schemes::{PerkScheme, PersonScheme, PropScheme, SchemeError, TacticalActScheme};

/// Read-only access to validated rule tables.
pub trait SchemeOracle: Send + Sync {
    fn act(&self, sid: &str) -> Option<Arc<TacticalActScheme>>;

    fn perk(&self, sid: &str) -> Option<Arc<PerkScheme>>;

    /// All perk schemes ordered by sid.
    fn perks(&self) -> Vec<Arc<PerkScheme>>;

    fn prop(&self, sid: &str) -> Option<Arc<PropScheme>>;

    fn person(&self, sid: &str) -> Option<Arc<PersonScheme>>;
}

/// Scheme types that can be fetched generically through [`get_scheme`].
pub trait SchemeKind: Sized {
    const KIND: &'static str;

    fn lookup<O: SchemeOracle + ?Sized>(oracle: &O, sid: &str) -> Option<Arc<Self>>;
}

impl SchemeKind for TacticalActScheme {
    const KIND: &'static str = "act";

    fn lookup<O: SchemeOracle + ?Sized>(oracle: &O, sid: &str) -> Option<Arc<Self>> {
        oracle.act(sid)
    }
}

impl SchemeKind for PerkScheme {
    const KIND: &'static str = "perk";

    fn lookup<O: SchemeOracle + ?Sized>(oracle: &O, sid: &str) -> Option<Arc<Self>> {
        oracle.perk(sid)
    }
}

impl SchemeKind for PropScheme {
    const KIND: &'static str = "prop";

    fn lookup<O: SchemeOracle + ?Sized>(oracle: &O, sid: &str) -> Option<Arc<Self>> {
        oracle.prop(sid)
    }
}

impl SchemeKind for PersonScheme {
    const KIND: &'static str = "person";

    fn lookup<O: SchemeOracle + ?Sized>(oracle: &O, sid: &str) -> Option<Arc<Self>> {
        oracle.person(sid)
    }
}

/// Typed lookup: `get_scheme::<TacticalActScheme, _>(&catalog, "punch")`.
pub fn get_scheme<T, O>(oracle: &O, sid: &str) -> Result<Arc<T>, SchemeError>
where
    T: SchemeKind,
    O: SchemeOracle + ?Sized,
{
    T::lookup(oracle, sid).ok_or_else(|| SchemeError::NotFound {
        kind: T::KIND,
        sid: sid.to_owned(),
    })
}

/// In-memory scheme store. Every scheme is validated on insert.
#[derive(Clone, Debug, Default)]
pub struct SchemeCatalog {
    acts: BTreeMap<String, Arc<TacticalActScheme>>,
    perks: BTreeMap<String, Arc<PerkScheme>>,
    props: BTreeMap<String, Arc<PropScheme>>,
    persons: BTreeMap<String, Arc<PersonScheme>>,
}

fn insert_unique<T>(
    map: &mut BTreeMap<String, Arc<T>>,
    sid: &str,
    scheme: T,
) -> Result<(), SchemeError> {
    if map.contains_key(sid) {
        return Err(SchemeError::DuplicateSid {
            sid: sid.to_owned(),
        });
    }
    map.insert(sid.to_owned(), Arc::new(scheme));
    Ok(())
}

impl SchemeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_act(&mut self, scheme: TacticalActScheme) -> Result<(), SchemeError> {
        scheme.validate()?;
        let sid = scheme.sid.clone();
        insert_unique(&mut self.acts, &sid, scheme)
    }

    pub fn insert_perk(&mut self, scheme: PerkScheme) -> Result<(), SchemeError> {
        scheme.validate()?;
        let sid = scheme.sid.clone();
        insert_unique(&mut self.perks, &sid, scheme)
    }

    pub fn insert_prop(&mut self, scheme: PropScheme) -> Result<(), SchemeError> {
        scheme.validate()?;
        let sid = scheme.sid.clone();
        insert_unique(&mut self.props, &sid, scheme)
    }

    pub fn insert_person(&mut self, scheme: PersonScheme) -> Result<(), SchemeError> {
        scheme.validate()?;
        let sid = scheme.sid.clone();
        insert_unique(&mut self.persons, &sid, scheme)
    }

    /// Checks that every act referenced by a person or an equipment prop exists.
    ///
    /// Run once after all tables are inserted; insert order is free.
    pub fn check_references(&self) -> Result<(), SchemeError> {
        let person_acts = self
            .persons
            .values()
            .flat_map(|person| person.acts.iter().map(move |act| (&person.sid, act)));
        let equip_acts = self.props.values().flat_map(|prop| {
            prop.equip
                .iter()
                .flat_map(move |equip| equip.acts.iter().map(move |act| (&prop.sid, act)))
        });

        for (owner, act) in person_acts.chain(equip_acts) {
            if !self.acts.contains_key(act) {
                return Err(SchemeError::UnknownAct {
                    owner: owner.clone(),
                    act: act.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn act_count(&self) -> usize {
        self.acts.len()
    }

    pub fn prop_count(&self) -> usize {
        self.props.len()
    }

    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    pub fn perk_count(&self) -> usize {
        self.perks.len()
    }
}

impl SchemeOracle for SchemeCatalog {
    fn act(&self, sid: &str) -> Option<Arc<TacticalActScheme>> {
        self.acts.get(sid).cloned()
    }

    fn perk(&self, sid: &str) -> Option<Arc<PerkScheme>> {
        self.perks.get(sid).cloned()
    }

    fn perks(&self) -> Vec<Arc<PerkScheme>> {
        self.perks.values().cloned().collect()
    }

    fn prop(&self, sid: &str) -> Option<Arc<PropScheme>> {
        self.props.get(sid).cloned()
    }

    fn person(&self, sid: &str) -> Option<Arc<PersonScheme>> {
        self.persons.get(sid).cloned()
    }
}
