/*
random_path.rs

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

//! Generate a random solvable path.
//!
//! The walk starts on the starting cell and moves to a random, not yet walked, neighbor until it
//! reaches the goal. Each step gets a weight that keeps the running sum close to the share of
//! the goal value that "should" be collected at this point of the walk. The weight is written in
//! the board, in the slot of the destination cell that matches the direction of travel.
//!
//! When the walk reaches the goal, the difference between the goal value and the sum of the
//! weights is added to the last step, and that weight is clamped back into the allowed range.
//! Most of the time the difference is small and the path adds up exactly to the goal value.
//! Otherwise the path is slightly off target, which [`path::Path::is_exact`] reports.

use log::debug;
use std::fmt;

use super::grid::Grid;
use super::hex::{Coord, Direction};
use super::path;
use super::prng::RandomSource;
use crate::config::{GOAL_VALUE_MAX, MAX_WEIGHT, MIN_WEIGHT};

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum RandomPathError {
    /// The walk ran out of unvisited neighbors before reaching the goal.
    ///
    /// The incomplete walk is provided. Its weights are already written in the board.
    DeadEnd(path::Path),
}

impl fmt::Display for RandomPathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RandomPathError::DeadEnd(p) => {
                write!(f, "walk trapped after {} cells", p.len())
            }
        }
    }
}

impl std::error::Error for RandomPathError {}

/// [`RandomPath`] object.
#[derive(Debug, Default)]
pub struct RandomPath {
    /// Goal value drawn for the last generated path.
    pub goal_value: i32,

    /// Number of steps in the last generated path.
    pub iteration: usize,
}

impl RandomPath {
    /// Create the object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a goal value, generate a random path from the starting cell to the goal of the
    /// board, and write the weights of its steps in the board.
    ///
    /// # Errors
    ///
    /// The method returns [`RandomPathError::DeadEnd`] when the walk gets trapped. The weights of
    /// the incomplete walk stay in the board.
    pub fn generate<R: RandomSource>(
        &mut self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> Result<path::Path, RandomPathError> {
        let start: Coord = grid.start();
        let goal: Coord = grid.goal();

        self.goal_value = rng.below(GOAL_VALUE_MAX as usize) as i32 + 1;
        self.iteration = 0;
        debug!("Goal value = {}  From {start} to {goal}", self.goal_value);

        let mut path: path::Path = path::Path::new(start);
        let mut current: Coord = start;
        let mut sum: i32 = 0;

        while current != goal {
            let candidates: Vec<(Direction, Coord)> = grid
                .neighbors(current)
                .filter(|(_, c)| !path.contains(*c))
                .collect();
            if candidates.is_empty() {
                debug!("    Dead end at {current} after {} steps", self.iteration);
                return Err(RandomPathError::DeadEnd(path));
            }

            let (direction, next) = candidates[rng.below(candidates.len())];
            let remaining: i32 = next.manhattan_distance(goal);
            let weight: i32 = self.step_weight(path.len(), sum, remaining, rng);

            if let Some(cell) = grid.get_mut(next) {
                cell.set_entry_weight(direction, weight);
            }
            debug!("    Step to {next}: weight = {weight}  remaining = {remaining}");

            sum += weight;
            path.push(next, weight);
            current = next;
            self.iteration += 1;
        }

        self.correct_last_step(grid, &mut path);
        Ok(path)
    }

    /// Draw the weight of the next step.
    ///
    /// `len` is the number of cells already in the walk, `sum` the value collected so far, and
    /// `remaining` the estimated number of steps from the next cell to the goal.
    fn step_weight<R: RandomSource>(
        &self,
        len: usize,
        sum: i32,
        remaining: i32,
        rng: &mut R,
    ) -> i32 {
        let len: f64 = len as f64;
        let target_sum: f64 = self.goal_value as f64 * (len / (len + remaining as f64));
        let ideal: f64 = target_sum - sum as f64;

        let low: i32 = ((ideal - 1.0).floor() as i32).max(MIN_WEIGHT);
        let high: i32 = ((ideal + 1.0).ceil() as i32).min(MAX_WEIGHT);

        if low > high {
            // The ideal value is out of reach. Consume the draw anyway so that the sequence of
            // the generator does not depend on this case.
            rng.next_f64();
            return if ideal > 0.0 { MAX_WEIGHT } else { MIN_WEIGHT };
        }
        rng.range_inclusive(low, high)
    }

    /// Add the remaining difference to the weight of the step that enters the goal.
    fn correct_last_step(&self, grid: &mut Grid, path: &mut path::Path) {
        let Some((previous, last, weight)) = path.last_step() else {
            return;
        };
        let Some(direction) = previous.direction_to(last) else {
            return;
        };

        let corrected: i32 =
            (weight + self.goal_value - path.weight_sum()).clamp(MIN_WEIGHT, MAX_WEIGHT);
        debug!(
            "Last step {previous} -> {last}: weight {weight} corrected to {corrected} (sum {} / goal {})",
            path.weight_sum(),
            self.goal_value
        );
        if let Some(cell) = grid.get_mut(last) {
            cell.set_entry_weight(direction, corrected);
        }
        path.set_last_weight(corrected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::prng::SeededRandom;
    use std::collections::HashSet;

    /// Run the generator on several seeds and return the successful paths.
    fn complete_paths(radius: i32, seeds: std::ops::Range<u32>) -> Vec<(Grid, path::Path, i32)> {
        let mut ret = Vec::new();
        for seed in seeds {
            let mut grid = Grid::new(radius);
            let mut rng = SeededRandom::new(seed as f64);
            let mut random_path = RandomPath::new();
            if let Ok(p) = random_path.generate(&mut grid, &mut rng) {
                ret.push((grid, p, random_path.goal_value));
            }
        }
        ret
    }

    #[test]
    fn walk_never_revisits_a_cell() {
        for seed in 0..200 {
            let mut grid = Grid::new(5);
            let mut rng = SeededRandom::new(seed as f64);
            let p = match RandomPath::new().generate(&mut grid, &mut rng) {
                Ok(p) => p,
                Err(RandomPathError::DeadEnd(p)) => p,
            };
            let unique: HashSet<Coord> = p.get().iter().copied().collect();
            assert_eq!(unique.len(), p.len(), "seed {seed}: {:?}", p.get());
        }
    }

    #[test]
    fn walk_is_made_of_adjacent_board_cells() {
        for (grid, p, _) in complete_paths(5, 0..100) {
            assert_eq!(p.get_first(), Some(grid.start()));
            assert_eq!(p.get_last(), Some(grid.goal()));
            for pair in p.get().windows(2) {
                assert!(grid.contains(pair[1]));
                assert!(pair[0].direction_to(pair[1]).is_some());
            }
        }
    }

    #[test]
    fn some_walks_reach_the_goal() {
        assert!(!complete_paths(5, 0..100).is_empty());
    }

    #[test]
    fn goal_value_in_range() {
        for seed in 0..200 {
            let mut grid = Grid::new(5);
            let mut rng = SeededRandom::new(seed as f64 * 3.7);
            let mut random_path = RandomPath::new();
            let _ = random_path.generate(&mut grid, &mut rng);
            assert!((1..=GOAL_VALUE_MAX).contains(&random_path.goal_value));
        }
    }

    #[test]
    fn weights_are_written_on_the_board() {
        for (grid, p, _) in complete_paths(5, 0..100) {
            for (i, pair) in p.get().windows(2).enumerate() {
                assert_eq!(grid.move_weight(pair[0], pair[1]), Some(p.weights()[i]));
                assert!((MIN_WEIGHT..=MAX_WEIGHT).contains(&p.weights()[i]));
            }
        }
    }

    #[test]
    fn corrected_path_adds_up_to_the_goal_value() {
        let mut exact: usize = 0;
        for (grid, p, goal_value) in complete_paths(5, 0..300) {
            let (_, _, last) = p.last_step().unwrap();
            let before: i32 = p.weight_sum() - last;
            // The correction fits in the weight range: the sum is exact
            if (MIN_WEIGHT..=MAX_WEIGHT).contains(&(goal_value - before)) {
                assert!(p.is_exact(grid.goal(), goal_value));
                exact += 1;
            } else {
                assert_ne!(p.weight_sum(), goal_value);
            }
        }
        assert!(exact > 0);
    }

    #[test]
    fn step_weight_stays_near_the_ideal_value() {
        let random_path = RandomPath {
            goal_value: 10,
            iteration: 0,
        };
        let mut rng = SeededRandom::new(1.0);
        for _ in 0..1000 {
            // len 1, remaining 4: target 2, ideal 2 -> window [1, 3]
            let w = random_path.step_weight(1, 0, 4, &mut rng);
            assert!((1..=3).contains(&w), "weight {w}");
        }
    }

    #[test]
    fn step_weight_saturates_when_out_of_reach() {
        let random_path = RandomPath {
            goal_value: 20,
            iteration: 0,
        };
        let mut rng = SeededRandom::new(1.0);
        // len 10, remaining 0: target 20, ideal 20
        assert_eq!(random_path.step_weight(10, 0, 0, &mut rng), MAX_WEIGHT);
        assert_eq!(rng.seed(), 2.0);
        // ideal -20
        assert_eq!(random_path.step_weight(10, 40, 0, &mut rng), MIN_WEIGHT);
    }

    /// Always draw 0: pick the first candidate and the lowest weight of the window.
    struct FirstChoice;

    impl RandomSource for FirstChoice {
        fn next_f64(&mut self) -> f64 {
            0.0
        }
    }

    #[test]
    fn first_candidate_walk_on_small_board() {
        let mut grid = Grid::new(2);
        let mut random_path = RandomPath::new();
        let p = random_path.generate(&mut grid, &mut FirstChoice).unwrap();
        assert_eq!(random_path.goal_value, 1);
        assert_eq!(
            p.get(),
            &vec![
                Coord::new(0, 1),
                Coord::new(-1, 1),
                Coord::new(-1, 0),
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(1, -1),
                Coord::new(0, -1),
            ]
        );
        assert_eq!(random_path.iteration, 6);
        assert!(p.is_exact(grid.goal(), 1));
    }

    #[test]
    fn start_on_goal_yields_single_cell_path() {
        let mut grid = Grid::new(1);
        let mut rng = SeededRandom::new(3.0);
        let p = RandomPath::new().generate(&mut grid, &mut rng).unwrap();
        assert_eq!(p.len(), 1);
        assert_eq!(p.weight_sum(), 0);
    }
}
