//! Scheme (rule table) loader.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tactics_core::SchemeCatalog;
use tactics_core::schemes::{PerkScheme, PersonScheme, PropScheme, TacticalActScheme};

use crate::loaders::{LoadResult, read_file};

/// Scheme file structure for RON files.
///
/// Every section is optional, so one file may hold a single table or all
/// of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemeFile {
    #[serde(default)]
    pub acts: Vec<TacticalActScheme>,
    #[serde(default)]
    pub perks: Vec<PerkScheme>,
    #[serde(default)]
    pub props: Vec<PropScheme>,
    #[serde(default)]
    pub persons: Vec<PersonScheme>,
}

impl SchemeFile {
    pub fn is_empty(&self) -> bool {
        self.acts.is_empty()
            && self.perks.is_empty()
            && self.props.is_empty()
            && self.persons.is_empty()
    }
}

/// Loader for scheme tables from RON files.
pub struct SchemeLoader;

impl SchemeLoader {
    /// Load a scheme file without validating it.
    pub fn load(path: &Path) -> LoadResult<SchemeFile> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Failed to load schemes {}", path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<SchemeFile> {
        let file: SchemeFile = ron::from_str(content).context("Failed to parse scheme RON")?;
        Ok(file)
    }

    /// Adds every scheme of a file to a catalog, validating each one.
    ///
    /// Cross-table references are not checked here; call
    /// [`SchemeCatalog::check_references`] once all files are merged.
    pub fn merge_into(file: SchemeFile, catalog: &mut SchemeCatalog) -> LoadResult<()> {
        for act in file.acts {
            let sid = act.sid.clone();
            catalog
                .insert_act(act)
                .with_context(|| format!("Invalid act '{sid}'"))?;
        }
        for perk in file.perks {
            let sid = perk.sid.clone();
            catalog
                .insert_perk(perk)
                .with_context(|| format!("Invalid perk '{sid}'"))?;
        }
        for prop in file.props {
            let sid = prop.sid.clone();
            catalog
                .insert_prop(prop)
                .with_context(|| format!("Invalid prop '{sid}'"))?;
        }
        for person in file.persons {
            let sid = person.sid.clone();
            catalog
                .insert_person(person)
                .with_context(|| format!("Invalid person '{sid}'"))?;
        }
        Ok(())
    }

    /// Parses several RON sources into one checked catalog.
    pub fn catalog_from_sources<'a>(
        sources: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> LoadResult<SchemeCatalog> {
        let mut catalog = SchemeCatalog::new();
        for (name, content) in sources {
            let file = Self::parse(content).with_context(|| format!("in {name}"))?;
            Self::merge_into(file, &mut catalog).with_context(|| format!("in {name}"))?;
        }
        catalog
            .check_references()
            .context("Scheme tables refer to unknown acts")?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::SchemeOracle;
    use tactics_core::schemes::{TacticalActConstrains, TacticalActTargets};

    const SHOT: &str = r#"(
        acts: [(
            sid: "shot",
            stats: (
                targets: "ENEMY | SELF",
                effect: Damage,
                offence: (offence_type: Tactical, impact: Kinetic, ap_rank: 4),
                range: (min: 1, max: 6),
            ),
            constrains: Some((prop_resource_type: "9mm", prop_resource_count: 2)),
            efficient: (dice: 6, count: 1),
        )],
    )"#;

    #[test]
    fn parses_act_with_defaults() {
        let file = SchemeLoader::parse(SHOT).unwrap();
        let act = &file.acts[0];

        assert_eq!(
            act.stats.targets,
            TacticalActTargets::ENEMY | TacticalActTargets::SELF
        );
        assert_eq!(
            act.constrains,
            Some(TacticalActConstrains {
                prop_resource_type: "9mm".into(),
                prop_resource_count: 2,
            })
        );
        assert_eq!(act.efficient.modifier, 0);
        assert_eq!(act.to_hit.dice, 6);
        assert!(file.perks.is_empty());
    }

    #[test]
    fn unknown_act_reference_is_reported() {
        let persons = r#"(persons: [(sid: "ghost", hp: 3, acts: ["wail"])])"#;
        let err = SchemeLoader::catalog_from_sources([("persons.ron", persons)]).unwrap_err();

        assert!(format!("{err:#}").contains("wail"));
    }

    #[test]
    fn invalid_scheme_names_its_sid() {
        let perks = r#"(perks: [(sid: "lazy", levels: [])])"#;
        let err = SchemeLoader::catalog_from_sources([("perks.ron", perks)]).unwrap_err();

        assert!(format!("{err:#}").contains("Invalid perk 'lazy'"));
    }

    #[test]
    fn sources_merge_into_one_catalog() {
        let persons = r#"(persons: [(sid: "gunner", hp: 5, acts: ["shot"])])"#;
        let catalog =
            SchemeLoader::catalog_from_sources([("acts.ron", SHOT), ("persons.ron", persons)])
                .unwrap();

        assert_eq!(catalog.person("gunner").unwrap().equipment_slots, 3);
        assert!(catalog.act("shot").is_some());
    }
}
