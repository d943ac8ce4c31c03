/*
grid.rs

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

//! Cells of the hexagonal board.

use std::collections::HashMap;

use super::hex::{Coord, Direction};

/// Board cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Cell address. It is fixed when the board is built.
    coord: Coord,

    /// Value gained when entering the cell.
    ///
    /// `weights[d]` applies when the player comes from the neighbor that lies in direction `d`
    /// of this cell. In other words, a move that travels in direction `t` uses the
    /// `weights[t.opposite()]` slot of the destination cell.
    pub weights: [i32; 6],
}

impl Cell {
    /// Create a [`Cell`] object with all its weights set to zero.
    fn new(coord: Coord) -> Self {
        Self {
            coord,
            weights: [0; 6],
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// Value gained when entering the cell by travelling in the given direction.
    pub fn entry_weight(&self, travel: Direction) -> i32 {
        self.weights[travel.opposite().index()]
    }

    /// Set the value gained when entering the cell by travelling in the given direction.
    pub fn set_entry_weight(&mut self, travel: Direction, weight: i32) {
        self.weights[travel.opposite().index()] = weight;
    }
}

/// Hexagonal board.
///
/// The board holds the cells `(q, r)` with `|q| < radius`, `|r| < radius`, and
/// `|q + r| < radius`. Its shape never changes after creation; only the cell weights do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    radius: i32,

    /// Cells, ordered by `q` and then by `r`.
    cells: Vec<Cell>,

    /// Position of each cell in [`Grid::cells`].
    index: HashMap<Coord, usize>,
}

impl Grid {
    /// Create a [`Grid`] object with all the weights set to zero.
    pub fn new(radius: i32) -> Self {
        let mut cells: Vec<Cell> = Vec::new();
        let mut index: HashMap<Coord, usize> = HashMap::new();
        for q in (-radius + 1)..radius {
            for r in (-radius + 1)..radius {
                if (q + r).abs() < radius {
                    let coord = Coord::new(q, r);
                    index.insert(coord, cells.len());
                    cells.push(Cell::new(coord));
                }
            }
        }
        Self {
            radius,
            cells,
            index,
        }
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Number of cells in the board.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Starting cell of the player.
    pub fn start(&self) -> Coord {
        Coord::new(0, self.radius - 1)
    }

    /// Cell the player must reach.
    pub fn goal(&self) -> Coord {
        Coord::new(0, -(self.radius - 1))
    }

    /// Whether the coordinate belongs to the board.
    pub fn contains(&self, coord: Coord) -> bool {
        self.index.contains_key(&coord)
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.index.get(&coord).map(|i| &self.cells[*i])
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        match self.index.get(&coord) {
            Some(i) => Some(&mut self.cells[*i]),
            None => None,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Return the neighbors of the given cell that belong to the board, with the direction to
    /// reach them, in direction order.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord)> + '_ {
        Direction::ALL
            .into_iter()
            .map(move |d| (d, coord.neighbor(d)))
            .filter(|(_, c)| self.contains(*c))
    }

    /// Value gained when moving from `from` to the adjacent cell `to`.
    ///
    /// Return `None` if the cells are not adjacent or if `to` is not in the board.
    pub fn move_weight(&self, from: Coord, to: Coord) -> Option<i32> {
        let direction: Direction = from.direction_to(to)?;
        self.get(to).map(|cell| cell.entry_weight(direction))
    }

    /// Set all the weights to zero.
    pub fn clear_weights(&mut self) {
        for cell in &mut self.cells {
            cell.weights = [0; 6];
        }
    }
}
