use std::collections::{BTreeMap, BTreeSet};

use arrayvec::ArrayVec;

use super::{CubeCoords, MapError, OffsetCoords};
use crate::config::GameConfig;

/// Index of a node inside its [`HexMap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexNode {
    pub id: NodeId,
    pub coords: OffsetCoords,
    pub cube: CubeCoords,
    pub passable: bool,
}

/// Undirected connection, stored with the smaller id first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge(NodeId, NodeId);

impl Edge {
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }

    pub fn nodes(self) -> (NodeId, NodeId) {
        (self.0, self.1)
    }
}

/// Hex-grid graph of a sector.
///
/// Nodes are never removed once placed. Walls are modelled by missing edges
/// or impassable nodes. The map is only read during a turn.
#[derive(Clone, Debug, Default)]
pub struct HexMap {
    nodes: Vec<HexNode>,
    by_coords: BTreeMap<OffsetCoords, NodeId>,
    edges: BTreeSet<Edge>,
}

impl HexMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rectangular grid of `width` x `height` passable nodes, each linked to
    /// all of its existing neighbours.
    pub fn grid(width: u32, height: u32) -> Self {
        let mut map = Self::new();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let added = map.add_node(OffsetCoords::new(x, y));
                debug_assert!(added.is_ok(), "grid cells are unique: {added:?}");
            }
        }
        map.connect_all_neighbors();
        map
    }

    /// Places a passable node. Fails if the cell is already taken or node ids
    /// run out.
    pub fn add_node(&mut self, coords: OffsetCoords) -> Result<NodeId, MapError> {
        if self.by_coords.contains_key(&coords) {
            return Err(MapError::DuplicateCoords(coords));
        }
        let id = u32::try_from(self.nodes.len())
            .map(NodeId)
            .map_err(|_| MapError::TooManyNodes)?;
        self.nodes.push(HexNode {
            id,
            coords,
            cube: coords.to_cube(),
            passable: true,
        });
        self.by_coords.insert(coords, id);
        Ok(id)
    }

    /// Links every pair of adjacent nodes.
    pub fn connect_all_neighbors(&mut self) {
        let mut edges = Vec::new();
        for node in &self.nodes {
            for cube in node.cube.neighbors() {
                if let Some(&other) = self.by_coords.get(&cube.to_offset()) {
                    edges.push(Edge::new(node.id, other));
                }
            }
        }
        self.edges.extend(edges);
    }

    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), MapError> {
        let cube_a = self.node(a).ok_or(MapError::NodeNotFound(a))?.cube;
        let cube_b = self.node(b).ok_or(MapError::NodeNotFound(b))?.cube;
        if !cube_a.is_adjacent(cube_b) {
            return Err(MapError::NotAdjacent { a, b });
        }
        self.edges.insert(Edge::new(a, b));
        Ok(())
    }

    /// Removes a connection. Returns false if there was none.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        self.edges.remove(&Edge::new(a, b))
    }

    pub fn set_passable(&mut self, id: NodeId, passable: bool) -> Result<(), MapError> {
        let node = self
            .nodes
            .get_mut(id.index())
            .ok_or(MapError::NodeNotFound(id))?;
        node.passable = passable;
        Ok(())
    }

    pub fn node(&self, id: NodeId) -> Option<&HexNode> {
        self.nodes.get(id.index())
    }

    pub fn node_at(&self, coords: OffsetCoords) -> Option<NodeId> {
        self.by_coords.get(&coords).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &HexNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_passable(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|node| node.passable)
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edges.contains(&Edge::new(a, b))
    }

    /// Connected neighbours in clockwise order, starting from the left one.
    pub fn neighbors(&self, id: NodeId) -> ArrayVec<NodeId, { GameConfig::MAX_NEIGHBORS }> {
        let mut result = ArrayVec::new();
        let Some(node) = self.node(id) else {
            return result;
        };
        for cube in node.cube.neighbors() {
            if let Some(&other) = self.by_coords.get(&cube.to_offset())
                && self.has_edge(id, other)
            {
                result.push(other);
            }
        }
        result
    }

    /// Hex distance between two nodes.
    pub fn distance(&self, a: NodeId, b: NodeId) -> Result<u32, MapError> {
        let cube_a = self.node(a).ok_or(MapError::NodeNotFound(a))?.cube;
        let cube_b = self.node(b).ok_or(MapError::NodeNotFound(b))?.cube;
        Ok(cube_a.distance_to(cube_b))
    }

    /// Line-of-sight test between two nodes.
    ///
    /// The straight hex line from `from` to `to` must consist of existing
    /// nodes joined by edges, and every cell strictly between the ends must
    /// be passable.
    pub fn target_is_on_line(&self, from: NodeId, to: NodeId) -> Result<bool, MapError> {
        let start = self.node(from).ok_or(MapError::NodeNotFound(from))?.cube;
        let end = self.node(to).ok_or(MapError::NodeNotFound(to))?.cube;

        let line = start.line_to(end);
        let last = line.len().saturating_sub(1);

        let mut previous: Option<NodeId> = None;
        for (index, cube) in line.into_iter().enumerate() {
            let Some(current) = self.node_at(cube.to_offset()) else {
                return Ok(false);
            };
            if index != 0 && index != last && !self.is_passable(current) {
                return Ok(false);
            }
            if let Some(prev) = previous
                && !self.has_edge(prev, current)
            {
                return Ok(false);
            }
            previous = Some(current);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, GameError};

    fn at(map: &HexMap, x: i32, y: i32) -> NodeId {
        map.node_at(OffsetCoords::new(x, y)).unwrap()
    }

    #[test]
    fn grid_links_neighbors_clockwise_from_left() {
        let map = HexMap::grid(5, 5);
        let center = at(&map, 2, 2);

        let coords: Vec<_> = map
            .neighbors(center)
            .iter()
            .map(|id| map.node(*id).unwrap().coords)
            .collect();

        assert_eq!(
            coords,
            vec![
                OffsetCoords::new(1, 2),
                OffsetCoords::new(1, 3),
                OffsetCoords::new(2, 3),
                OffsetCoords::new(3, 2),
                OffsetCoords::new(2, 1),
                OffsetCoords::new(1, 1),
            ]
        );
    }

    #[test]
    fn corner_has_fewer_neighbors() {
        let map = HexMap::grid(3, 3);
        assert_eq!(map.neighbors(at(&map, 0, 0)).len(), 2);
    }

    #[test]
    fn removed_edge_is_not_a_neighbor() {
        let mut map = HexMap::grid(3, 3);
        let a = at(&map, 1, 1);
        let b = at(&map, 0, 1);

        assert!(map.remove_edge(a, b));
        assert!(!map.neighbors(a).contains(&b));
        assert!(!map.remove_edge(b, a));
    }

    #[test]
    fn edge_requires_adjacency() {
        let mut map = HexMap::grid(4, 1);
        let a = at(&map, 0, 0);
        let c = at(&map, 2, 0);
        assert_eq!(map.add_edge(a, c), Err(MapError::NotAdjacent { a, b: c }));
    }

    #[test]
    fn duplicate_node_is_rejected() {
        let mut map = HexMap::grid(2, 2);
        assert_eq!(
            map.add_node(OffsetCoords::new(1, 1)),
            Err(MapError::DuplicateCoords(OffsetCoords::new(1, 1)))
        );
    }

    #[test]
    fn node_ids_follow_insertion_order() {
        let mut map = HexMap::new();
        assert_eq!(map.add_node(OffsetCoords::new(3, 0)), Ok(NodeId(0)));
        assert_eq!(map.add_node(OffsetCoords::new(0, 0)), Ok(NodeId(1)));
        assert_eq!(MapError::TooManyNodes.error_code(), "MAP_TOO_MANY_NODES");
        assert_eq!(MapError::TooManyNodes.severity(), ErrorSeverity::Internal);
    }

    #[test]
    fn line_of_sight_is_blocked_by_impassable_cell() {
        let mut map = HexMap::grid(6, 1);
        let from = at(&map, 0, 0);
        let to = at(&map, 4, 0);
        assert_eq!(map.target_is_on_line(from, to), Ok(true));

        map.set_passable(at(&map, 2, 0), false).unwrap();
        assert_eq!(map.target_is_on_line(from, to), Ok(false));
    }

    #[test]
    fn line_of_sight_is_blocked_by_missing_edge() {
        let mut map = HexMap::grid(6, 1);
        let from = at(&map, 0, 0);
        let to = at(&map, 3, 0);
        map.remove_edge(at(&map, 1, 0), at(&map, 2, 0));
        assert_eq!(map.target_is_on_line(from, to), Ok(false));
    }

    #[test]
    fn impassable_end_points_do_not_block() {
        let mut map = HexMap::grid(3, 1);
        let from = at(&map, 0, 0);
        let to = at(&map, 2, 0);
        map.set_passable(to, false).unwrap();
        assert_eq!(map.target_is_on_line(from, to), Ok(true));
    }

    #[test]
    fn unknown_node_is_an_error() {
        let map = HexMap::grid(2, 2);
        assert_eq!(
            map.target_is_on_line(NodeId(0), NodeId(99)),
            Err(MapError::NodeNotFound(NodeId(99)))
        );
    }
}
