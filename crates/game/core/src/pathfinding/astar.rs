use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use crate::map::{HexMap, NodeId};

/// Progress of an incremental search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AStarState {
    InProgress,
    GoalFound,
    GoalNotFound,
}

/// Entry in the open set.
///
/// Ordered for a max-heap so that the lowest `f` pops first, then the lowest
/// heuristic, then the earliest pushed entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenEntry {
    f: u32,
    h: u32,
    seq: u64,
    node: NodeId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Incremental A* over a [`HexMap`] with uniform step cost.
///
/// Each [`AStar::step`] expands one node. The map is only borrowed, never
/// changed.
#[derive(Debug)]
pub struct AStar<'a> {
    map: &'a HexMap,
    start: NodeId,
    goal: NodeId,
    open: BinaryHeap<OpenEntry>,
    closed: BTreeSet<NodeId>,
    g_scores: BTreeMap<NodeId, u32>,
    came_from: BTreeMap<NodeId, NodeId>,
    seq: u64,
    state: AStarState,
}

impl<'a> AStar<'a> {
    pub fn new(map: &'a HexMap, start: NodeId, goal: NodeId) -> Self {
        let mut search = Self {
            map,
            start,
            goal,
            open: BinaryHeap::new(),
            closed: BTreeSet::new(),
            g_scores: BTreeMap::new(),
            came_from: BTreeMap::new(),
            seq: 0,
            state: AStarState::InProgress,
        };

        if map.node(start).is_none() || map.node(goal).is_none() {
            search.state = AStarState::GoalNotFound;
        } else if start == goal {
            search.state = AStarState::GoalFound;
        } else if !map.is_passable(goal) {
            search.state = AStarState::GoalNotFound;
        } else {
            search.g_scores.insert(start, 0);
            search.push(start, 0);
        }
        search
    }

    pub fn state(&self) -> AStarState {
        self.state
    }

    /// Expands the best open node.
    pub fn step(&mut self) -> AStarState {
        if self.state != AStarState::InProgress {
            return self.state;
        }

        let current = loop {
            match self.open.pop() {
                Some(entry) if self.closed.contains(&entry.node) => continue,
                Some(entry) => break entry.node,
                None => {
                    self.state = AStarState::GoalNotFound;
                    return self.state;
                }
            }
        };

        if current == self.goal {
            self.state = AStarState::GoalFound;
            return self.state;
        }

        self.closed.insert(current);
        let current_g = self.g_scores.get(&current).copied().unwrap_or(0);

        for neighbor in self.map.neighbors(current) {
            if self.closed.contains(&neighbor) || !self.map.is_passable(neighbor) {
                continue;
            }

            let tentative = current_g + 1;
            let known = self.g_scores.get(&neighbor).copied().unwrap_or(u32::MAX);
            if tentative < known {
                self.g_scores.insert(neighbor, tentative);
                self.came_from.insert(neighbor, current);
                self.push(neighbor, tentative);
            }
        }

        AStarState::InProgress
    }

    /// Steps until the search finishes.
    pub fn run(&mut self) -> AStarState {
        while self.step() == AStarState::InProgress {}
        self.state
    }

    /// Nodes from start to goal inclusive. Empty unless the goal was found.
    pub fn path(&self) -> Vec<NodeId> {
        if self.state != AStarState::GoalFound {
            return Vec::new();
        }

        let mut path = vec![self.goal];
        let mut current = self.goal;
        while current != self.start {
            match self.came_from.get(&current) {
                Some(&prev) => {
                    path.push(prev);
                    current = prev;
                }
                None => break,
            }
        }
        path.reverse();
        path
    }

    fn heuristic(&self, node: NodeId) -> u32 {
        self.map.distance(node, self.goal).unwrap_or(0)
    }

    fn push(&mut self, node: NodeId, g: u32) {
        let h = self.heuristic(node);
        self.open.push(OpenEntry {
            f: g + h,
            h,
            seq: self.seq,
            node,
        });
        self.seq += 1;
    }
}

/// Synchronous search. Returns the full path or `None`, never a partial one.
pub fn find_path(map: &HexMap, start: NodeId, goal: NodeId) -> Option<Vec<NodeId>> {
    let mut search = AStar::new(map, start, goal);
    let state = search.run();
    tracing::trace!(?start, ?goal, ?state, "path search finished");
    match state {
        AStarState::GoalFound => Some(search.path()),
        _ => None,
    }
}
