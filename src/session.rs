/*
session.rs

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

//! Snapshot of a game, for saving and restoring.
//!
//! A [`SessionState`] stores the player value, position, and visited cells, as well as the
//! weights of every cell. When restoring, the board shape is rebuilt from the radius and the
//! saved weights replace the generated ones.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::config::{GOAL_VALUE_MAX, MAX_WEIGHT, MIN_WEIGHT};
use crate::game::{Game, GameStatus};
use crate::generator::grid::Grid;
use crate::generator::hex::Coord;

/// Weights of a cell.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CellRecord {
    pub q: i32,
    pub r: i32,
    pub values: [i32; 6],
}

/// Saved game.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub current_value: i32,
    pub current_position: Coord,

    /// Visited cells, in coordinate order.
    pub visited: BTreeSet<Coord>,

    pub grid: Vec<CellRecord>,
    pub goal_value: i32,

    /// Older saves do not have the status. The game is then considered in progress.
    #[serde(default)]
    pub status: GameStatus,
}

/// Reason why a saved game cannot be restored.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RestoreError {
    /// A saved cell is outside the board.
    OutsideGrid(Coord),

    /// The starting cell is not in the visited set.
    StartNotVisited,

    /// The player position is not in the visited set.
    PositionNotVisited(Coord),

    /// The goal is the player position or is in the visited set. The goal is never entered
    /// that way: reaching it ends the game without moving the player.
    GoalVisited,

    /// A saved weight is outside the weight range.
    InvalidWeight(Coord, i32),

    /// The goal value cannot be produced by the generator.
    InvalidGoalValue(i32),
}

impl fmt::Display for RestoreError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RestoreError::OutsideGrid(c) => write!(f, "saved cell {c} is not on the board"),
            RestoreError::StartNotVisited => write!(f, "the starting cell is not visited"),
            RestoreError::PositionNotVisited(c) => {
                write!(f, "the player position {c} is not visited")
            }
            RestoreError::GoalVisited => write!(f, "the goal is marked as visited"),
            RestoreError::InvalidWeight(c, w) => {
                write!(f, "weight {w} of cell {c} is out of range")
            }
            RestoreError::InvalidGoalValue(v) => write!(f, "goal value {v} is out of range"),
        }
    }
}

impl std::error::Error for RestoreError {}

impl SessionState {
    /// Create a [`SessionState`] object for the provided [`Game`] object.
    pub fn new(game: &Game) -> Self {
        Self {
            current_value: game.current_value(),
            current_position: game.position(),
            visited: game.visited().clone(),
            grid: game
                .grid()
                .cells()
                .iter()
                .map(|c| CellRecord {
                    q: c.coord().q,
                    r: c.coord().r,
                    values: c.weights,
                })
                .collect(),
            goal_value: game.goal_value(),
            status: game.status(),
        }
    }

    /// Rebuild the game on the given board.
    ///
    /// The saved weights replace the weights of the board. Saved cells that do not belong to
    /// the board are ignored; cells of the board that are not saved keep their weights.
    ///
    /// # Errors
    ///
    /// The method returns an error when the player position or a visited cell is not on the
    /// board, when the visited set is not consistent, or when a saved weight or the goal value
    /// is out of range.
    pub fn restore(&self, mut grid: Grid) -> Result<Game, RestoreError> {
        if !grid.contains(self.current_position) {
            return Err(RestoreError::OutsideGrid(self.current_position));
        }
        if let Some(c) = self.visited.iter().find(|c| !grid.contains(**c)) {
            return Err(RestoreError::OutsideGrid(*c));
        }
        if !self.visited.contains(&grid.start()) {
            return Err(RestoreError::StartNotVisited);
        }
        if !self.visited.contains(&self.current_position) {
            return Err(RestoreError::PositionNotVisited(self.current_position));
        }
        if self.visited.contains(&grid.goal()) {
            return Err(RestoreError::GoalVisited);
        }
        if !(1..=GOAL_VALUE_MAX).contains(&self.goal_value) {
            return Err(RestoreError::InvalidGoalValue(self.goal_value));
        }
        for record in &self.grid {
            if let Some(w) = record
                .values
                .iter()
                .find(|w| !(MIN_WEIGHT..=MAX_WEIGHT).contains(*w))
            {
                return Err(RestoreError::InvalidWeight(
                    Coord::new(record.q, record.r),
                    *w,
                ));
            }
        }

        for record in &self.grid {
            if let Some(cell) = grid.get_mut(Coord::new(record.q, record.r)) {
                cell.weights = record.values;
            }
        }

        Ok(Game::from_parts(
            grid,
            self.goal_value,
            self.current_value,
            self.current_position,
            self.visited.clone(),
            self.status,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::LossReason;
    use crate::generator::prng::SeededRandom;
    use crate::generator::puzzle::Puzzle;

    fn played_game() -> Game {
        let puzzle = Puzzle::generate(5, &mut SeededRandom::new(20261015.0));
        let mut game = Game::from_puzzle(puzzle);
        // Play the first available move twice, whatever the board
        for _ in 0..2 {
            if let Some(m) = game.available_moves().first() {
                let _ = game.attempt_move(m.coord);
            }
        }
        game
    }

    #[test]
    fn round_trip_restores_the_same_game() {
        let game = played_game();
        let state = SessionState::new(&game);
        let restored = state.restore(Grid::new(5)).unwrap();
        assert_eq!(restored, game);
        assert_eq!(SessionState::new(&restored), state);
    }

    #[test]
    fn json_round_trip() {
        let state = SessionState::new(&played_game());
        let json = serde_json::to_string(&state).unwrap();
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn json_layout_uses_camel_case_keys() {
        let game = Game::new(Grid::new(2), 7);
        let value = serde_json::to_value(SessionState::new(&game)).unwrap();
        assert_eq!(value["currentValue"], 3);
        assert_eq!(value["goalValue"], 7);
        assert_eq!(value["currentPosition"]["q"], 0);
        assert_eq!(value["currentPosition"]["r"], 1);
        assert_eq!(value["visited"].as_array().unwrap().len(), 1);
        assert_eq!(value["grid"].as_array().unwrap().len(), 7);
        assert_eq!(value["status"], "InProgress");
    }

    #[test]
    fn missing_status_means_in_progress() {
        let json = r#"{
            "currentValue": 5,
            "currentPosition": {"q": 0, "r": 1},
            "visited": [{"q": 0, "r": 1}],
            "grid": [{"q": 0, "r": 0, "values": [1, 2, 3, -1, -2, -3]}],
            "goalValue": 9
        }"#;
        let state: SessionState = serde_json::from_str(json).unwrap();
        assert_eq!(state.status, GameStatus::InProgress);
        let game = state.restore(Grid::new(2)).unwrap();
        assert_eq!(game.current_value(), 5);
        assert_eq!(game.goal_value(), 9);
        assert_eq!(
            game.grid().get(Coord::new(0, 0)).unwrap().weights,
            [1, 2, 3, -1, -2, -3]
        );
    }

    #[test]
    fn saved_weights_take_precedence() {
        let mut state = SessionState::new(&Game::new(Grid::new(3), 4));
        state.grid[0].values = [-3, 0, 0, 0, 0, 2];
        state.status = GameStatus::Lost(LossReason::DeadEnd);
        let coord = Coord::new(state.grid[0].q, state.grid[0].r);

        let mut grid = Grid::new(3);
        grid.get_mut(coord).unwrap().weights = [1; 6];
        let game = state.restore(grid).unwrap();
        assert_eq!(game.grid().get(coord).unwrap().weights, [-3, 0, 0, 0, 0, 2]);
        assert_eq!(game.status(), GameStatus::Lost(LossReason::DeadEnd));
    }

    #[test]
    fn inconsistent_states_are_rejected() {
        let game = Game::new(Grid::new(3), 4);

        let mut state = SessionState::new(&game);
        state.current_position = Coord::new(5, 5);
        assert_eq!(
            state.restore(Grid::new(3)),
            Err(RestoreError::OutsideGrid(Coord::new(5, 5)))
        );

        let mut state = SessionState::new(&game);
        state.visited.clear();
        state.visited.insert(Coord::new(0, 0));
        state.current_position = Coord::new(0, 0);
        assert_eq!(
            state.restore(Grid::new(3)),
            Err(RestoreError::StartNotVisited)
        );

        let mut state = SessionState::new(&game);
        state.current_position = Coord::new(0, 1);
        assert_eq!(
            state.restore(Grid::new(3)),
            Err(RestoreError::PositionNotVisited(Coord::new(0, 1)))
        );

        // Position on the goal
        let mut state = SessionState::new(&game);
        state.current_position = Coord::new(0, -2);
        state.visited.insert(Coord::new(0, -2));
        assert_eq!(
            state.restore(Grid::new(3)),
            Err(RestoreError::GoalVisited)
        );

        let mut state = SessionState::new(&game);
        state.visited.insert(Coord::new(0, -2));
        assert_eq!(
            state.restore(Grid::new(3)),
            Err(RestoreError::GoalVisited)
        );

        // A save for a larger board
        let state = SessionState::new(&Game::new(Grid::new(5), 4));
        assert!(state.restore(Grid::new(3)).is_err());
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let game = Game::new(Grid::new(3), 4);

        let mut state = SessionState::new(&game);
        state.grid[2].values[4] = i32::MAX;
        let coord = Coord::new(state.grid[2].q, state.grid[2].r);
        assert_eq!(
            state.restore(Grid::new(3)),
            Err(RestoreError::InvalidWeight(coord, i32::MAX))
        );

        let mut state = SessionState::new(&game);
        state.grid[0].values[0] = MIN_WEIGHT - 1;
        assert!(matches!(
            state.restore(Grid::new(3)),
            Err(RestoreError::InvalidWeight(_, -4))
        ));

        let mut state = SessionState::new(&game);
        state.goal_value = 0;
        assert_eq!(
            state.restore(Grid::new(3)),
            Err(RestoreError::InvalidGoalValue(0))
        );
        state.goal_value = GOAL_VALUE_MAX + 1;
        assert!(state.restore(Grid::new(3)).is_err());

        // Any current value is accepted, the game handles large values
        let mut state = SessionState::new(&game);
        state.current_value = i32::MAX;
        assert_eq!(state.restore(Grid::new(3)).unwrap().current_value(), i32::MAX);
    }
}
