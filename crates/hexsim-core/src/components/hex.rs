//! Hex Coordinates
//!
//! Axial coordinates for the hex grid. A cell is addressed by `(row, col)`;
//! its six neighbors differ by one of the offsets in [`NEIGHBOR_OFFSETS`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Neighbor offsets `(drow, dcol)`, in the order `move_toward` tries them.
///
/// The first neighbor that strictly minimizes the distance to the goal wins,
/// so this order fixes the shape of every path.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 6] = [
    (0, 1),
    (-1, 1),
    (-1, 0),
    (0, -1),
    (1, -1),
    (1, 0),
];

/// A cell in the hex grid, in axial coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Hex {
    row: i32,
    col: i32,
}

impl Hex {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    /// Number of single-step moves between two cells
    pub fn distance(&self, other: Hex) -> u32 {
        let dr = other.row - self.row;
        let dc = other.col - self.col;
        dr.unsigned_abs()
            .max(dc.unsigned_abs())
            .max((dr + dc).unsigned_abs())
    }

    /// The six adjacent cells, in [`NEIGHBOR_OFFSETS`] order
    pub fn neighbors(&self) -> [Hex; 6] {
        NEIGHBOR_OFFSETS.map(|(dr, dc)| Hex::new(self.row + dr, self.col + dc))
    }

    pub fn is_adjacent(&self, other: Hex) -> bool {
        self.distance(other) == 1
    }

    /// Step to the neighbor closest to `goal`. No-op once there.
    ///
    /// Every step taken lowers the distance by exactly one and keeps both axes
    /// between their start and goal values, so a walk between two in-bounds
    /// cells never leaves the grid.
    pub fn move_toward(&mut self, goal: Hex) {
        if *self == goal {
            return;
        }

        let mut best = *self;
        let mut best_distance = self.distance(goal);
        for neighbor in self.neighbors() {
            let d = neighbor.distance(goal);
            if d < best_distance {
                best = neighbor;
                best_distance = d;
            }
        }
        *self = best;
    }

    /// Centre of the cell on a pointy-top layout where neighbors are one unit apart
    pub fn cartesian(&self) -> (f64, f64) {
        let x = f64::from(self.col) + f64::from(self.row) / 2.0;
        let y = f64::from(self.row) * 3f64.sqrt() / 2.0;
        (x, y)
    }
}

impl From<(i32, i32)> for Hex {
    fn from((row, col): (i32, i32)) -> Self {
        Hex::new(row, col)
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
