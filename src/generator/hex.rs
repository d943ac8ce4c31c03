/*
hex.rs

Copyright 2025 The Hexpath authors

This file is part of Hexpath.

Hexpath is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hexpath is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hexpath. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Axial coordinates of the hexagonal board.
//!
//! A cell is addressed by the `(q, r)` pair. The six neighbors of a cell are
//! reached with fixed unit offsets, in the following order, which gives the
//! direction index used everywhere in the game (edge weights, terminal input):
//!
//! | index | offset    | on screen  |
//! |-------|-----------|------------|
//! | 0     | `(+1, 0)` | south-east |
//! | 1     | `(0, +1)` | south      |
//! | 2     | `(-1, +1)`| south-west |
//! | 3     | `(-1, 0)` | north-west |
//! | 4     | `(0, -1)` | north      |
//! | 5     | `(+1, -1)`| north-east |
//!
//! Opposite directions differ by three.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, FromRepr};

/// Direction of travel between two adjacent cells.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr, Display)]
#[strum(serialize_all = "kebab-case")]
#[repr(usize)]
pub enum Direction {
    SouthEast = 0,
    South = 1,
    SouthWest = 2,
    NorthWest = 3,
    North = 4,
    NorthEast = 5,
}

impl Direction {
    /// All the directions, in index order.
    pub const ALL: [Direction; 6] = [
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    /// Index of the direction, in `0..6`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Axial offset `(dq, dr)` of the direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::SouthEast => (1, 0),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::NorthWest => (-1, 0),
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
        }
    }

    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % 6]
    }
}

/// Cell address in axial coordinates.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct Coord {
    pub q: i32,
    pub r: i32,
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

impl Coord {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Return the adjacent cell in the given direction.
    pub fn neighbor(self, direction: Direction) -> Self {
        let (dq, dr) = direction.offset();
        Self::new(self.q + dq, self.r + dr)
    }

    /// Return the six adjacent cells, in direction order.
    ///
    /// Some of them might be outside the board.
    pub fn neighbors(self) -> [Coord; 6] {
        Direction::ALL.map(|d| self.neighbor(d))
    }

    /// Return the direction to travel from this cell to `to`, or `None` if `to` is not one step
    /// away.
    pub fn direction_to(self, to: Coord) -> Option<Direction> {
        match (to.q - self.q, to.r - self.r) {
            (1, 0) => Some(Direction::SouthEast),
            (0, 1) => Some(Direction::South),
            (-1, 1) => Some(Direction::SouthWest),
            (-1, 0) => Some(Direction::NorthWest),
            (0, -1) => Some(Direction::North),
            (1, -1) => Some(Direction::NorthEast),
            _ => None,
        }
    }

    /// Sum of the absolute differences of the two axial components.
    ///
    /// This overestimates the number of steps between cells on a diagonal, but the path
    /// synthesizer relies on this estimate to spread the goal value along its walk.
    pub fn manhattan_distance(self, other: Coord) -> i32 {
        (self.q - other.q).abs() + (self.r - other.r).abs()
    }
}
