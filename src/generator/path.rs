/*
path.rs

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

//! Walk from the starting cell to the goal.

use std::collections::HashSet;

use super::hex::Coord;

/// Path object.
#[derive(Debug, Default, Clone)]
pub struct Path {
    /// Path as an ordered list of cells.
    path: Vec<Coord>,

    /// Value gained by each step: `weights[i]` is the weight of the edge that enters
    /// `path[i + 1]`.
    weights: Vec<i32>,

    /// Stores the visited status of the cells.
    /// Instead of looking for the cell in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    visited: HashSet<Coord>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.weights == other.weights
    }
}

impl Path {
    /// Create a [`Path`] object that starts at the given cell.
    pub fn new(start: Coord) -> Self {
        Self {
            path: vec![start],
            weights: Vec::new(),
            visited: HashSet::from([start]),
        }
    }

    /// Add a step to the path.
    pub fn push(&mut self, coord: Coord, weight: i32) {
        self.path.push(coord);
        self.weights.push(weight);
        self.visited.insert(coord);
    }

    /// Get the number of cells in the path, including the starting cell.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, coord: Coord) -> bool {
        self.visited.contains(&coord)
    }

    /// Return a reference to the path vector.
    pub fn get(&self) -> &Vec<Coord> {
        &self.path
    }

    /// Return the weights of the steps.
    pub fn weights(&self) -> &[i32] {
        &self.weights
    }

    /// Return the first cell in the path.
    pub fn get_first(&self) -> Option<Coord> {
        self.path.first().copied()
    }

    /// Return the last cell in the path.
    pub fn get_last(&self) -> Option<Coord> {
        self.path.last().copied()
    }

    /// Return the last step as the previous cell, the last cell, and the step weight.
    pub fn last_step(&self) -> Option<(Coord, Coord, i32)> {
        let l: usize = self.path.len();
        if l < 2 {
            return None;
        }
        Some((self.path[l - 2], self.path[l - 1], self.weights[l - 2]))
    }

    /// Replace the weight of the last step.
    pub fn set_last_weight(&mut self, weight: i32) {
        if let Some(w) = self.weights.last_mut() {
            *w = weight;
        }
    }

    /// Sum of the step weights.
    pub fn weight_sum(&self) -> i32 {
        self.weights.iter().sum()
    }

    /// Whether the path ends on the given cell.
    pub fn reaches(&self, goal: Coord) -> bool {
        self.get_last() == Some(goal)
    }

    /// Whether the path ends on the goal and its steps add up to the goal value.
    pub fn is_exact(&self, goal: Coord, goal_value: i32) -> bool {
        self.reaches(goal) && self.weight_sum() == goal_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_records_cells_and_weights() {
        let mut path = Path::new(Coord::new(0, 2));
        path.push(Coord::new(0, 1), 2);
        path.push(Coord::new(0, 0), -1);
        assert_eq!(path.len(), 3);
        assert!(path.contains(Coord::new(0, 1)));
        assert!(!path.contains(Coord::new(1, 1)));
        assert_eq!(path.weight_sum(), 1);
        assert_eq!(path.get_first(), Some(Coord::new(0, 2)));
        assert_eq!(
            path.last_step(),
            Some((Coord::new(0, 1), Coord::new(0, 0), -1))
        );
    }

    #[test]
    fn single_cell_path_has_no_step() {
        let mut path = Path::new(Coord::new(0, 0));
        assert_eq!(path.last_step(), None);
        path.set_last_weight(3);
        assert_eq!(path.weight_sum(), 0);
        assert!(path.is_exact(Coord::new(0, 0), 0));
    }
}
