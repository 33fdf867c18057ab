//! To-hit and armour save tables.

use crate::schemes::{DefenceType, OffenseType, PersonDefenceItem, PersonRuleLevel};

/// Picks the defence a target uses against an offence.
///
/// Strongest level wins. On a tie a specific defence beats divine, then the
/// earlier entry wins.
pub fn preferred_defence(
    defences: &[PersonDefenceItem],
    offence: OffenseType,
) -> Option<PersonDefenceItem> {
    let mut best: Option<PersonDefenceItem> = None;
    for defence in defences
        .iter()
        .filter(|defence| defence.defence_type.counters(offence))
    {
        let replace = match best {
            None => true,
            Some(current) if defence.level != current.level => defence.level > current.level,
            Some(current) => {
                current.defence_type == DefenceType::DivineDefence
                    && defence.defence_type != DefenceType::DivineDefence
            }
        };
        if replace {
            best = Some(*defence);
        }
    }
    best
}

/// Minimum to-hit roll needed against the given defence.
pub fn success_to_hit(base: i32, defence: Option<&PersonDefenceItem>) -> i32 {
    base + defence.map_or(0, |defence| defence.level.rank())
}

/// Minimum armour save roll for a rank difference (act AP rank minus armour
/// rank). Covers every difference, so there is no failure case.
pub fn armor_save_threshold(rank_diff: i32) -> i32 {
    match rank_diff {
        i32::MIN..=-7 => 1,
        -6..=-4 => 2,
        -3..=-2 => 3,
        -1..=1 => 4,
        2..=3 => 5,
        4..=6 => 6,
        7..=i32::MAX => 7,
    }
}

/// Damage points removed by a successful armour save.
pub fn absorption(level: PersonRuleLevel) -> i32 {
    match level {
        PersonRuleLevel::None => 0,
        PersonRuleLevel::Lesser => 1,
        PersonRuleLevel::Normal => 2,
        PersonRuleLevel::Grand => 5,
        PersonRuleLevel::Absolute => 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strongest_defence_wins() {
        let defences = [
            PersonDefenceItem::new(DefenceType::TacticalDefence, PersonRuleLevel::Lesser),
            PersonDefenceItem::new(DefenceType::TacticalDefence, PersonRuleLevel::Grand),
        ];
        let chosen = preferred_defence(&defences, OffenseType::Tactical).unwrap();
        assert_eq!(chosen.level, PersonRuleLevel::Grand);
    }

    #[test]
    fn specific_defence_beats_divine_on_tie() {
        let defences = [
            PersonDefenceItem::new(DefenceType::DivineDefence, PersonRuleLevel::Normal),
            PersonDefenceItem::new(DefenceType::FuryDefence, PersonRuleLevel::Normal),
        ];
        let chosen = preferred_defence(&defences, OffenseType::Fury).unwrap();
        assert_eq!(chosen.defence_type, DefenceType::FuryDefence);
    }

    #[test]
    fn unrelated_defence_is_ignored() {
        let defences = [PersonDefenceItem::new(
            DefenceType::ShadowDefence,
            PersonRuleLevel::Absolute,
        )];
        assert_eq!(preferred_defence(&defences, OffenseType::Tactical), None);
        assert_eq!(success_to_hit(2, None), 2);
    }

    #[test]
    fn divine_counters_anything() {
        let defences = [PersonDefenceItem::new(
            DefenceType::DivineDefence,
            PersonRuleLevel::Lesser,
        )];
        let chosen = preferred_defence(&defences, OffenseType::Shadow);
        assert_eq!(success_to_hit(2, chosen.as_ref()), 3);
    }

    #[test]
    fn save_table_edges() {
        let expected = [
            (-8, 1),
            (-7, 1),
            (-6, 2),
            (-4, 2),
            (-3, 3),
            (-2, 3),
            (-1, 4),
            (0, 4),
            (1, 4),
            (2, 5),
            (3, 5),
            (4, 6),
            (6, 6),
            (7, 7),
            (9, 7),
        ];
        for (diff, threshold) in expected {
            assert_eq!(armor_save_threshold(diff), threshold, "diff {diff}");
        }
    }
}
