//! Hex-grid map of a sector: nodes, edges, neighbourhood and line of sight.
mod graph;
mod hex;

pub use graph::{Edge, HexMap, HexNode, NodeId};
pub use hex::{CLOCKWISE_OFFSETS, CubeCoords, OffsetCoords};

use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    #[error("node {0:?} is not on the map")]
    NodeNotFound(NodeId),

    #[error("cell {0:?} already holds a node")]
    DuplicateCoords(OffsetCoords),

    #[error("nodes {a:?} and {b:?} are not adjacent")]
    NotAdjacent { a: NodeId, b: NodeId },

    #[error("map is full: node ids are exhausted")]
    TooManyNodes,
}

impl GameError for MapError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MapError::NodeNotFound(_) => ErrorSeverity::Validation,
            MapError::DuplicateCoords(_)
            | MapError::NotAdjacent { .. }
            | MapError::TooManyNodes => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MapError::NodeNotFound(_) => "MAP_NODE_NOT_FOUND",
            MapError::DuplicateCoords(_) => "MAP_DUPLICATE_COORDS",
            MapError::NotAdjacent { .. } => "MAP_NOT_ADJACENT",
            MapError::TooManyNodes => "MAP_TOO_MANY_NODES",
        }
    }
}
