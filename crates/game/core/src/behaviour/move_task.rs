use std::collections::VecDeque;

use crate::map::{HexMap, NodeId};
use crate::pathfinding::find_path;
use crate::sector::SectorState;
use crate::tactics::{Actor, ActorId, TacticalActUsageService};

use super::{ActorTask, TaskError, TaskState};

/// Walks an actor to a fixed node, one step per execution.
///
/// The path is computed once, when the task is created. It is not checked
/// again if the map changes later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveTask {
    actor: ActorId,
    target: NodeId,
    path: VecDeque<NodeId>,
    state: TaskState,
}

impl MoveTask {
    /// Plans a move from the actor's current node. Without a path the task
    /// is created stalled.
    pub fn new(actor: &Actor, target: NodeId, map: &HexMap) -> Self {
        let start = actor.node();
        let (path, state) = if start == target {
            (VecDeque::new(), TaskState::Complete)
        } else {
            match find_path(map, start, target) {
                Some(path) => (path.into_iter().skip(1).collect(), TaskState::Pending),
                None => {
                    tracing::debug!(actor = %actor.id(), ?start, ?target, "no path, move stalled");
                    (VecDeque::new(), TaskState::Stalled)
                }
            }
        };

        Self {
            actor: actor.id(),
            target,
            path,
            state,
        }
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Steps left to the target.
    pub fn remaining(&self) -> usize {
        self.path.len()
    }
}

impl ActorTask for MoveTask {
    fn actor(&self) -> ActorId {
        self.actor
    }

    fn state(&self) -> TaskState {
        self.state
    }

    fn name(&self) -> &'static str {
        "move"
    }

    fn execute(
        &mut self,
        state: &mut SectorState,
        _usage: &mut TacticalActUsageService,
    ) -> Result<(), TaskError> {
        if matches!(self.state, TaskState::Complete | TaskState::Stalled) {
            return Ok(());
        }

        let actor = state
            .actors
            .get_mut(self.actor)
            .ok_or(TaskError::ActorNotFound(self.actor))?;

        let Some(next) = self.path.pop_front() else {
            self.state = TaskState::Complete;
            return Ok(());
        };
        actor.move_to(next);

        self.state = if next == self.target {
            TaskState::Complete
        } else {
            TaskState::Executing
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::OffsetCoords;
    use crate::test_utils::{fixed_usage, sector_with_human};

    fn node(map: &HexMap, x: i32, y: i32) -> NodeId {
        map.node_at(OffsetCoords::new(x, y)).unwrap()
    }

    #[test]
    fn walks_one_step_per_execution() {
        let map = HexMap::grid(10, 10);
        let start = node(&map, 3, 3);
        let finish = node(&map, 1, 5);
        let expected = [node(&map, 2, 3), node(&map, 2, 4), finish];
        let (mut state, actor) = sector_with_human(map, start);
        let mut usage = fixed_usage();

        let mut task = MoveTask::new(state.actors.get(actor).unwrap(), finish, &state.map);
        assert_eq!(task.state(), TaskState::Pending);

        for (step, expected_node) in expected.iter().enumerate() {
            task.execute(&mut state, &mut usage).unwrap();
            assert_eq!(state.actors.get(actor).unwrap().node(), *expected_node);
            assert_eq!(task.is_complete(), step == expected.len() - 1);
        }
    }

    #[test]
    fn walks_around_impassable_cells() {
        let mut map = HexMap::grid(10, 10);
        let wall_a = node(&map, 3, 4);
        let wall_b = node(&map, 2, 4);
        map.set_passable(wall_a, false).unwrap();
        map.set_passable(wall_b, false).unwrap();
        let start = node(&map, 4, 4);
        let finish = node(&map, 1, 5);
        let expected = [node(&map, 3, 5), node(&map, 2, 5), finish];
        let (mut state, actor) = sector_with_human(map, start);
        let mut usage = fixed_usage();

        let mut task = MoveTask::new(state.actors.get(actor).unwrap(), finish, &state.map);
        for expected_node in expected {
            task.execute(&mut state, &mut usage).unwrap();
            assert_eq!(state.actors.get(actor).unwrap().node(), expected_node);
        }
        assert!(task.is_complete());
    }

    #[test]
    fn unreachable_target_stalls_without_moving() {
        let mut map = HexMap::grid(5, 5);
        let start = node(&map, 0, 0);
        let finish = node(&map, 4, 4);
        for neighbor in map.neighbors(finish) {
            map.set_passable(neighbor, false).unwrap();
        }
        let (mut state, actor) = sector_with_human(map, start);
        let mut usage = fixed_usage();

        let mut task = MoveTask::new(state.actors.get(actor).unwrap(), finish, &state.map);
        assert!(task.is_stalled());

        task.execute(&mut state, &mut usage).unwrap();
        assert_eq!(state.actors.get(actor).unwrap().node(), start);
        assert!(task.is_stalled());
    }

    #[test]
    fn cached_path_is_not_revalidated() {
        let map = HexMap::grid(10, 10);
        let start = node(&map, 3, 3);
        let finish = node(&map, 1, 5);
        let (mut state, actor) = sector_with_human(map, start);
        let mut usage = fixed_usage();

        let mut task = MoveTask::new(state.actors.get(actor).unwrap(), finish, &state.map);
        let blocked = node(&state.map, 2, 3);
        state.map.set_passable(blocked, false).unwrap();

        task.execute(&mut state, &mut usage).unwrap();
        assert_eq!(state.actors.get(actor).unwrap().node(), blocked);
    }
}
