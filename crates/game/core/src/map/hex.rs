//! Hex coordinate systems.
//!
//! Nodes are addressed by offset coordinates (`x` = column, `y` = row, odd
//! rows shifted right). Distance, neighbourhood and line drawing work in cube
//! coordinates where `z` is the row and `x + y + z == 0`.

use core::ops::{Add, Sub};

/// Column/row address of a hex node (odd rows shifted).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetCoords {
    pub x: i32,
    pub y: i32,
}

impl OffsetCoords {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn to_cube(self) -> CubeCoords {
        let x = self.x - (self.y - (self.y & 1)) / 2;
        let z = self.y;
        CubeCoords::new(x, -x - z, z)
    }
}

/// Cube coordinate of a hex (`x + y + z == 0`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubeCoords {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Neighbour offsets starting from the left neighbour and proceeding clockwise.
///
/// Pathfinding visits neighbours in exactly this order, which decides
/// tie-breaks between equally short paths.
pub const CLOCKWISE_OFFSETS: [CubeCoords; 6] = [
    CubeCoords::new(-1, 1, 0),
    CubeCoords::new(-1, 0, 1),
    CubeCoords::new(0, -1, 1),
    CubeCoords::new(1, -1, 0),
    CubeCoords::new(1, 0, -1),
    CubeCoords::new(0, 1, -1),
];

impl CubeCoords {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn to_offset(self) -> OffsetCoords {
        let x = self.x + (self.z - (self.z & 1)) / 2;
        OffsetCoords::new(x, self.z)
    }

    /// Number of hex steps between two cells.
    pub fn distance_to(self, other: CubeCoords) -> u32 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        let dz = (self.z - other.z).unsigned_abs();
        dx.max(dy).max(dz)
    }

    /// Neighbouring cells in clockwise order, starting from the left one.
    pub fn neighbors(self) -> [CubeCoords; 6] {
        CLOCKWISE_OFFSETS.map(|offset| self + offset)
    }

    pub fn is_adjacent(self, other: CubeCoords) -> bool {
        self.distance_to(other) == 1
    }

    /// Cells crossed by a straight line from `self` to `other`, both inclusive.
    ///
    /// The start point is nudged by a tiny epsilon so that lines running
    /// exactly along a cell border resolve to the same side every time.
    pub fn line_to(self, other: CubeCoords) -> Vec<CubeCoords> {
        let steps = self.distance_to(other);
        if steps == 0 {
            return vec![self];
        }

        let (ax, ay, az) = (
            self.x as f64 + 1e-6,
            self.y as f64 + 2e-6,
            self.z as f64 - 3e-6,
        );
        let (bx, by, bz) = (other.x as f64, other.y as f64, other.z as f64);

        (0..=steps)
            .map(|i| {
                let t = i as f64 / steps as f64;
                Self::round(
                    ax + (bx - ax) * t,
                    ay + (by - ay) * t,
                    az + (bz - az) * t,
                )
            })
            .collect()
    }

    fn round(x: f64, y: f64, z: f64) -> Self {
        let mut rx = x.round();
        let mut ry = y.round();
        let mut rz = z.round();

        let x_diff = (rx - x).abs();
        let y_diff = (ry - y).abs();
        let z_diff = (rz - z).abs();

        if x_diff > y_diff && x_diff > z_diff {
            rx = -ry - rz;
        } else if y_diff > z_diff {
            ry = -rx - rz;
        } else {
            rz = -rx - ry;
        }

        Self::new(rx as i32, ry as i32, rz as i32)
    }
}

impl Add for CubeCoords {
    type Output = CubeCoords;

    fn add(self, rhs: CubeCoords) -> CubeCoords {
        CubeCoords::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for CubeCoords {
    type Output = CubeCoords;

    fn sub(self, rhs: CubeCoords) -> CubeCoords {
        CubeCoords::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
