//! World Components
//!
//! Grid bounds and the tick clock.

use bevy_ecs::prelude::*;
use rand::Rng;

use super::hex::Hex;
use crate::error::EcosystemError;

/// Resource: Bounds of the hex grid
///
/// The grid is a `size` x `size` rhombus in axial coordinates:
/// `0 <= row < size` and `0 <= col < size`.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexGrid {
    size: i32,
}

impl HexGrid {
    pub fn new(size: i32) -> Result<Self, EcosystemError> {
        if size <= 0 {
            return Err(EcosystemError::InvalidSize { size });
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        let side = self.size as usize;
        side * side
    }

    pub fn contains(&self, hex: Hex) -> bool {
        (0..self.size).contains(&hex.row()) && (0..self.size).contains(&hex.col())
    }

    /// Whether the cell lies on the outer ring
    pub fn is_border(&self, hex: Hex) -> bool {
        let last = self.size - 1;
        self.contains(hex)
            && (hex.row() == 0 || hex.col() == 0 || hex.row() == last || hex.col() == last)
    }

    pub fn border_len(&self) -> usize {
        if self.size == 1 {
            1
        } else {
            4 * (self.size as usize - 1)
        }
    }

    /// Uniformly random cell of the grid
    pub fn random_cell(&self, rng: &mut impl Rng) -> Hex {
        Hex::new(rng.gen_range(0..self.size), rng.gen_range(0..self.size))
    }

    /// Uniformly random cell of the outer ring
    pub fn random_border_cell(&self, rng: &mut impl Rng) -> Hex {
        let index = rng.gen_range(0..self.border_len());
        self.border_cell(index)
    }

    /// Walks the ring clockwise from `(0, 0)`: top row, right column,
    /// bottom row, left column, each side `size - 1` cells long.
    fn border_cell(&self, index: usize) -> Hex {
        let last = self.size - 1;
        if last == 0 {
            return Hex::new(0, 0);
        }
        let side = last as usize;
        let offset = (index % side) as i32;
        match index / side {
            0 => Hex::new(0, offset),
            1 => Hex::new(offset, last),
            2 => Hex::new(last, last - offset),
            _ => Hex::new(last - offset, 0),
        }
    }

    /// Every cell of the outer ring, in walk order
    pub fn border_cells(&self) -> Vec<Hex> {
        (0..self.border_len()).map(|i| self.border_cell(i)).collect()
    }
}

/// Resource: Current simulation tick
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct Clock {
    pub current_tick: u64,
}

impl Clock {
    pub fn advance_tick(&mut self) {
        self.current_tick += 1;
    }
}
