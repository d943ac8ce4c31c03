/*
puzzle.rs

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

//! Build a playable board.

use log::{debug, warn};

use super::grid::Grid;
use super::hex::Coord;
use super::path::Path;
use super::prng::RandomSource;
use super::random_path::{RandomPath, RandomPathError};
use crate::config::{MAX_SYNTHESIS_ATTEMPTS, MAX_WEIGHT, MIN_WEIGHT};

/// Generated board with its solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Puzzle {
    /// Board with all its weights.
    pub grid: Grid,

    /// Walk from the starting cell to the goal that adds up to the goal value.
    pub path: Path,

    /// Value the player must hold when reaching the goal.
    pub goal_value: i32,

    /// Number of walks that the generator tried.
    pub attempts: usize,
}

impl Puzzle {
    /// Generate a board of the given radius.
    ///
    /// The generator first lays out a solvable path, and then fills the cells that are neither
    /// on the path nor the goal with random weights.
    /// The same random sequence always produces the same board.
    pub fn generate<R: RandomSource>(radius: i32, rng: &mut R) -> Self {
        let mut grid: Grid = Grid::new(radius);
        let mut random_path: RandomPath = RandomPath::new();
        let mut attempts: usize = 0;

        let path: Path = loop {
            attempts += 1;
            match random_path.generate(&mut grid, rng) {
                Ok(p) => break p,
                Err(RandomPathError::DeadEnd(p)) => {
                    if attempts >= MAX_SYNTHESIS_ATTEMPTS {
                        // Keep the incomplete walk. The board might not be solvable.
                        warn!(
                            "No path to the goal after {attempts} attempts, keeping an incomplete walk of {} cells",
                            p.len()
                        );
                        break p;
                    }
                    debug!("Attempt {attempts}: walk trapped after {} cells", p.len());
                    grid.clear_weights();
                }
            }
        };

        let goal: Coord = grid.goal();
        for cell in grid.cells_mut() {
            if path.contains(cell.coord()) || cell.coord() == goal {
                continue;
            }
            for w in cell.weights.iter_mut() {
                *w = rng.range_inclusive(MIN_WEIGHT, MAX_WEIGHT);
            }
        }

        debug!(
            "Board generated in {attempts} attempt(s): goal value = {}  path length = {}  exact = {}",
            random_path.goal_value,
            path.len(),
            path.is_exact(goal, random_path.goal_value)
        );

        Self {
            grid,
            path,
            goal_value: random_path.goal_value,
            attempts,
        }
    }

    /// Whether the solution path reaches the goal with exactly the goal value.
    pub fn is_exact(&self) -> bool {
        self.path.is_exact(self.grid.goal(), self.goal_value)
    }
}
