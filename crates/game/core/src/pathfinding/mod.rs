//! Shortest-path search over the sector map.
mod astar;

pub use astar::{AStar, AStarState, find_path};
