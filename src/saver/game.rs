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

//! Save and restore the daily game.
//!
//! After each move of a daily game, the game status is saved so that the player can continue the
//! puzzle later that day.
//! The saved object is a serialization of the [`SessionState`] object in JSON format by using
//! [`serde`], stored with the date of the game, its completion flag, and the streak counter.

use chrono::NaiveDate;
use log::debug;
use std::error::Error;
use std::path::PathBuf;

use super::storage::Storage;
use crate::daily::date_key;
use crate::game::Game;
use crate::generator::grid::Grid;
use crate::session::SessionState;
use crate::streak::Streak;

/// Key of the saved daily game.
pub const KEY_STATE: &str = "dailyGameState";

/// Key of the date of the saved daily game.
pub const KEY_DATE: &str = "dailyGameDate";

/// Key of the completion flag of the daily game (`true` or `false`).
pub const KEY_COMPLETED: &str = "dailyGameCompleted";

/// Key of the number of daily games won in a row.
pub const KEY_STREAK: &str = "streak";

/// Object to save and restore the daily game.
#[derive(Debug)]
pub struct SaverGame {
    storage: Storage,
}

impl SaverGame {
    /// Create a [`SaverGame`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the game must be saved.
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            storage: Storage::new(data_dir),
        }
    }

    /// Return the date of the saved daily game.
    pub fn get_date(&self) -> Option<NaiveDate> {
        self.storage
            .get(KEY_DATE)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
    }

    /// Whether the daily game of the given day is completed.
    pub fn is_completed(&self, today: NaiveDate) -> bool {
        self.get_date() == Some(today) && self.storage.get(KEY_COMPLETED) == Some("true")
    }

    /// Retrieve the [`Game`] object saved for the given day, rebuilt on the provided board.
    ///
    /// Return None if there is no saved game for that day.
    pub fn get_game(&self, today: NaiveDate, grid: Grid) -> Result<Option<Game>, Box<dyn Error>> {
        if self.get_date() != Some(today) {
            debug!("No saved game for {today}");
            return Ok(None);
        }
        let Some(json) = self.storage.get(KEY_STATE) else {
            return Ok(None);
        };
        let state: SessionState = serde_json::from_str(json)?;
        let game: Game = state.restore(grid)?;
        Ok(Some(game))
    }

    /// Save the provided [`Game`] object as the game of the given day.
    pub fn save_game(&mut self, game: &Game, today: NaiveDate) -> Result<(), Box<dyn Error>> {
        let json: String = serde_json::to_string(&SessionState::new(game))?;
        self.storage.set(KEY_STATE, &json)?;
        self.storage.set(KEY_DATE, &date_key(today))
    }

    /// Set the completion flag of the daily game of the given day.
    pub fn set_completed(&mut self, completed: bool, today: NaiveDate) -> Result<(), Box<dyn Error>> {
        self.storage
            .set(KEY_COMPLETED, if completed { "true" } else { "false" })?;
        self.storage.set(KEY_DATE, &date_key(today))
    }

    /// Retrieve the streak. A missing or invalid value gives an empty streak.
    pub fn get_streak(&self) -> Streak {
        Streak::new(
            self.storage
                .get(KEY_STREAK)
                .and_then(|s| s.parse::<u32>().ok())
                .unwrap_or(0),
        )
    }

    /// Save the provided [`Streak`] object.
    pub fn save_streak(&mut self, streak: &Streak) -> Result<(), Box<dyn Error>> {
        self.storage.set(KEY_STREAK, &streak.count().to_string())
    }

    /// Delete the saved daily game, but keep the streak.
    pub fn delete_game(&mut self) {
        let _ = self.storage.remove(KEY_STATE);
        let _ = self.storage.remove(KEY_COMPLETED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::hex::Coord;
    use crate::saver::storage::tests::test_dir;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn saved_game_is_restored_the_same_day() {
        let dir = test_dir("saver-same-day");
        let mut saver = SaverGame::new(dir.clone());
        let mut game = Game::new(Grid::new(3), 6);
        game.attempt_move(Coord::new(0, 1)).unwrap();
        saver.save_game(&game, day(15)).unwrap();

        let saver = SaverGame::new(dir.clone());
        let restored = saver.get_game(day(15), Grid::new(3)).unwrap();
        assert_eq!(restored, Some(game));
        assert_eq!(saver.get_game(day(16), Grid::new(3)).unwrap(), None);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn corrupt_state_is_an_error() {
        let dir = test_dir("saver-corrupt");
        let mut saver = SaverGame::new(dir.clone());
        saver.set_completed(false, day(15)).unwrap();
        saver.storage.set(KEY_STATE, "[1, 2").unwrap();
        assert!(saver.get_game(day(15), Grid::new(3)).is_err());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn completion_is_tied_to_the_date() {
        let dir = test_dir("saver-completed");
        let mut saver = SaverGame::new(dir.clone());
        assert!(!saver.is_completed(day(15)));
        saver.set_completed(true, day(15)).unwrap();
        assert!(saver.is_completed(day(15)));
        assert!(!saver.is_completed(day(16)));
        assert_eq!(saver.get_date(), Some(day(15)));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn streak_round_trip() {
        let dir = test_dir("saver-streak");
        let mut saver = SaverGame::new(dir.clone());
        assert_eq!(saver.get_streak().count(), 0);
        saver.save_streak(&Streak::new(3)).unwrap();
        saver.delete_game();
        let saver = SaverGame::new(dir.clone());
        assert_eq!(saver.get_streak().count(), 3);
        let _ = std::fs::remove_dir_all(dir);
    }
}
