/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The [`Game`] object holds the board, the player position, the cells already visited, and the
//! value collected so far. [`Game::attempt_move`] is the only way to change the position.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use strum_macros::Display;

use crate::config::INITIAL_VALUE;
use crate::generator::grid::Grid;
use crate::generator::hex::{Coord, Direction};
use crate::generator::puzzle::Puzzle;

/// Why the player lost.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum LossReason {
    #[strum(to_string = "You reached the goal but with the wrong value.")]
    WrongValue,

    #[strum(to_string = "Your value reached zero or below.")]
    Exhausted,

    #[strum(to_string = "No more valid moves.")]
    DeadEnd,
}

/// Status of the game.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost(LossReason),
}

impl GameStatus {
    /// Whether the game is over.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Message for the end of the game.
    pub fn message(self) -> String {
        match self {
            GameStatus::InProgress => String::new(),
            GameStatus::Won => {
                "Congratulations! You reached the goal with the correct value!".to_string()
            }
            GameStatus::Lost(reason) => format!("Game Over! {reason}"),
        }
    }
}

/// Result of an accepted move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player moved and can keep on playing.
    Moved { gained: i32 },

    /// The move ended the game.
    Finished(GameStatus),
}

/// Reason why a move is rejected. The game is left untouched.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The game is already won or lost.
    GameOver,

    /// The target is not a cell of the board.
    OutsideGrid(Coord),

    /// The target is not next to the player.
    NotAdjacent(Coord),

    /// The player already went through the target.
    AlreadyVisited(Coord),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "the game is over"),
            MoveError::OutsideGrid(c) => write!(f, "cell {c} is not on the board"),
            MoveError::NotAdjacent(c) => write!(f, "cell {c} is not adjacent to the player"),
            MoveError::AlreadyVisited(c) => write!(f, "cell {c} is already visited"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Move that the player can make from the current position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AvailableMove {
    pub direction: Direction,
    pub coord: Coord,

    /// Value gained by the move. The goal step does not change the value, so this is `None` for
    /// the goal.
    pub gain: Option<i32>,
}

/// Manage the status of the game in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    /// Board.
    grid: Grid,

    /// Value that the player must hold when entering the goal.
    goal_value: i32,

    /// Value collected so far.
    current_value: i32,

    /// Cell where the player stands.
    position: Coord,

    /// Cells the player went through, including the starting cell.
    visited: BTreeSet<Coord>,

    status: GameStatus,
}

impl Game {
    /// Create a [`Game`] object for a new game on the given board.
    pub fn new(grid: Grid, goal_value: i32) -> Self {
        let start: Coord = grid.start();
        Self {
            grid,
            goal_value,
            current_value: INITIAL_VALUE,
            position: start,
            visited: BTreeSet::from([start]),
            status: GameStatus::InProgress,
        }
    }

    /// Create a [`Game`] object for a generated board.
    pub fn from_puzzle(puzzle: Puzzle) -> Self {
        Self::new(puzzle.grid, puzzle.goal_value)
    }

    /// Create a [`Game`] object from restored values. The caller checks their consistency.
    pub(crate) fn from_parts(
        grid: Grid,
        goal_value: i32,
        current_value: i32,
        position: Coord,
        visited: BTreeSet<Coord>,
        status: GameStatus,
    ) -> Self {
        Self {
            grid,
            goal_value,
            current_value,
            position,
            visited,
            status,
        }
    }

    /// Restart the game on the same board.
    pub fn reset(&mut self) {
        let start: Coord = self.grid.start();
        self.current_value = INITIAL_VALUE;
        self.position = start;
        self.visited.clear();
        self.visited.insert(start);
        self.status = GameStatus::InProgress;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn goal_value(&self) -> i32 {
        self.goal_value
    }

    pub fn current_value(&self) -> i32 {
        self.current_value
    }

    pub fn position(&self) -> Coord {
        self.position
    }

    pub fn goal(&self) -> Coord {
        self.grid.goal()
    }

    pub fn visited(&self) -> &BTreeSet<Coord> {
        &self.visited
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self.visited.contains(&coord)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Return the cells next to the given cell that the player has not visited yet.
    ///
    /// The goal is never visited, so it is part of the list when it is adjacent.
    pub fn unvisited_neighbors(&self, coord: Coord) -> Vec<(Direction, Coord)> {
        self.grid
            .neighbors(coord)
            .filter(|(_, c)| !self.visited.contains(c))
            .collect()
    }

    /// Return the moves the player can make.
    pub fn available_moves(&self) -> Vec<AvailableMove> {
        if self.is_over() {
            return Vec::new();
        }
        let goal: Coord = self.goal();
        self.unvisited_neighbors(self.position)
            .into_iter()
            .map(|(direction, coord)| AvailableMove {
                direction,
                coord,
                gain: if coord == goal {
                    None
                } else {
                    self.grid.get(coord).map(|c| c.entry_weight(direction))
                },
            })
            .collect()
    }

    /// Verify that the player can move to the given cell and return the direction of travel.
    pub fn check_move(&self, target: Coord) -> Result<Direction, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.grid.contains(target) {
            return Err(MoveError::OutsideGrid(target));
        }
        let direction: Direction = self
            .position
            .direction_to(target)
            .ok_or(MoveError::NotAdjacent(target))?;
        if self.visited.contains(&target) {
            return Err(MoveError::AlreadyVisited(target));
        }
        Ok(direction)
    }

    /// Move the player to the given cell.
    ///
    /// Entering the goal ends the game: the player wins if the current value is the goal value.
    /// The weight of that last step is not added.
    /// Entering any other cell adds the cell's entry weight to the current value. The player
    /// loses when the value drops to zero or below, or when the new cell has no unvisited
    /// neighbor left.
    ///
    /// # Errors
    ///
    /// The move is rejected, and the game is not modified, when the game is over or when the
    /// target is not an unvisited neighbor of the current position.
    pub fn attempt_move(&mut self, target: Coord) -> Result<MoveOutcome, MoveError> {
        let direction: Direction = self.check_move(target)?;

        if target == self.goal() {
            self.status = if self.current_value == self.goal_value {
                GameStatus::Won
            } else {
                GameStatus::Lost(LossReason::WrongValue)
            };
            debug!(
                "Goal reached with {} (goal value {}): {:?}",
                self.current_value, self.goal_value, self.status
            );
            return Ok(MoveOutcome::Finished(self.status));
        }

        let gained: i32 = self
            .grid
            .get(target)
            .map(|c| c.entry_weight(direction))
            .unwrap_or_default();
        self.current_value = self.current_value.saturating_add(gained);
        self.position = target;
        self.visited.insert(target);
        debug!(
            "Moved {direction:?} to {target}: {gained:+} -> {}",
            self.current_value
        );

        if self.current_value <= 0 {
            self.status = GameStatus::Lost(LossReason::Exhausted);
        } else if self.unvisited_neighbors(target).is_empty() {
            self.status = GameStatus::Lost(LossReason::DeadEnd);
        }

        if self.is_over() {
            Ok(MoveOutcome::Finished(self.status))
        } else {
            Ok(MoveOutcome::Moved { gained })
        }
    }

    /// Move the player in the given direction.
    pub fn attempt_direction(&mut self, direction: Direction) -> Result<MoveOutcome, MoveError> {
        self.attempt_move(self.position.neighbor(direction))
    }
}
