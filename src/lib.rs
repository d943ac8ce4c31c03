/*
lib.rs

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

//! Hexpath: reach the goal of a hexagonal board with exactly the right value.
//!
//! The player starts at the bottom of the board with a value of three. Every move to an adjacent
//! cell adds the weight of the crossed edge to the value. The game is won when the player enters
//! the goal, at the top of the board, holding exactly the goal value.
//!
//! * [`generator`] builds random boards that have at least one winning path.
//! * [`game`] applies the moves and decides the outcome.
//! * [`session`] and [`saver`] save the daily game between sessions.
//! * [`application`] runs the game in a terminal.

pub mod application;
pub mod cli_options;
pub mod config;
pub mod daily;
pub mod draw;
pub mod game;
pub mod generator;
pub mod layout;
pub mod player_input;
pub mod saver;
pub mod session;
pub mod streak;
