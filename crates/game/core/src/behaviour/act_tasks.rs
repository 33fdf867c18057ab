use crate::persons::{PropUsage, TacticalAct};
use crate::sector::SectorState;
use crate::tactics::{ActorId, AttackTarget, TacticalActUsageService, UsageReport, UsedTacticalActs};

use super::{ActorTask, TaskError, TaskState};

/// Fires a set of acts at a target once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttackTask {
    actor: ActorId,
    target: AttackTarget,
    acts: UsedTacticalActs,
    state: TaskState,
    report: Option<UsageReport>,
}

impl AttackTask {
    pub fn new(actor: ActorId, target: AttackTarget, acts: UsedTacticalActs) -> Self {
        Self {
            actor,
            target,
            acts,
            state: TaskState::Pending,
            report: None,
        }
    }

    pub fn with_act(actor: ActorId, target: impl Into<AttackTarget>, act: TacticalAct) -> Self {
        Self::new(actor, target.into(), UsedTacticalActs::primary(act))
    }

    pub fn target(&self) -> AttackTarget {
        self.target
    }

    pub fn report(&self) -> Option<&UsageReport> {
        self.report.as_ref()
    }
}

impl ActorTask for AttackTask {
    fn actor(&self) -> ActorId {
        self.actor
    }

    fn state(&self) -> TaskState {
        self.state
    }

    fn name(&self) -> &'static str {
        "attack"
    }

    fn execute(
        &mut self,
        state: &mut SectorState,
        usage: &mut TacticalActUsageService,
    ) -> Result<(), TaskError> {
        // An attack is attempted once, whatever the result.
        self.state = TaskState::Complete;
        let report = usage.use_on(state, self.actor, self.target, &self.acts)?;
        self.report = Some(report);
        Ok(())
    }
}

/// Uses (eats, drinks, applies) a carried prop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsePropTask {
    actor: ActorId,
    sid: String,
    state: TaskState,
    usage: Option<PropUsage>,
}

impl UsePropTask {
    pub fn new(actor: ActorId, sid: impl Into<String>) -> Self {
        Self {
            actor,
            sid: sid.into(),
            state: TaskState::Pending,
            usage: None,
        }
    }

    pub fn sid(&self) -> &str {
        &self.sid
    }

    pub fn usage(&self) -> Option<&PropUsage> {
        self.usage.as_ref()
    }
}

impl ActorTask for UsePropTask {
    fn actor(&self) -> ActorId {
        self.actor
    }

    fn state(&self) -> TaskState {
        self.state
    }

    fn name(&self) -> &'static str {
        "use_prop"
    }

    fn execute(
        &mut self,
        state: &mut SectorState,
        _usage: &mut TacticalActUsageService,
    ) -> Result<(), TaskError> {
        self.state = TaskState::Complete;
        let actor = state
            .actors
            .get_mut(self.actor)
            .ok_or(TaskError::ActorNotFound(self.actor))?;
        self.usage = Some(actor.use_prop(&self.sid)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SchemeOracle;
    use crate::map::{HexMap, OffsetCoords};
    use crate::persons::{PersonError, SurvivalStatType};
    use crate::test_utils::{fixed_usage, fixture_catalog, sector_with_human};

    #[test]
    fn use_prop_task_consumes_ration() {
        let map = HexMap::grid(3, 3);
        let start = map.node_at(OffsetCoords::new(1, 1)).unwrap();
        let (mut state, actor) = sector_with_human(map, start);
        let catalog = fixture_catalog();
        state
            .actors
            .get_mut(actor)
            .unwrap()
            .person_mut()
            .inventory_mut()
            .add_resource(catalog.prop("ration").unwrap(), 1);
        let mut usage = fixed_usage();

        let mut task = UsePropTask::new(actor, "ration");
        task.execute(&mut state, &mut usage).unwrap();

        assert!(task.is_complete());
        let person = state.actors.get(actor).unwrap().person();
        assert_eq!(person.inventory().resource_count("ration"), 0);
        assert_eq!(
            task.usage().unwrap().changes,
            vec![(SurvivalStatType::Satiety, 25)]
        );
    }

    #[test]
    fn missing_prop_fails_but_completes() {
        let map = HexMap::grid(3, 3);
        let start = map.node_at(OffsetCoords::new(1, 1)).unwrap();
        let (mut state, actor) = sector_with_human(map, start);
        let mut usage = fixed_usage();

        let mut task = UsePropTask::new(actor, "ration");
        let err = task.execute(&mut state, &mut usage).unwrap_err();

        assert!(matches!(err, TaskError::Person(PersonError::PropNotFound { .. })));
        assert!(task.is_complete());
    }
}
