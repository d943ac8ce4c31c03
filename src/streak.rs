/*
streak.rs

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

//! Count the daily challenges won in a row.
//!
//! The [`Streak`] object is saved after each daily game and is restored when Hexpath starts.
//! See the [`crate::saver::game`] module that saves and restores it.

/// Number of consecutive daily games won.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Streak {
    count: u32,
}

impl Streak {
    pub fn new(count: u32) -> Self {
        Self { count }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Record the result of a daily game and return the new streak.
    ///
    /// A win extends the streak; a loss resets it.
    pub fn record(&mut self, won: bool) -> u32 {
        self.count = if won { self.count + 1 } else { 0 };
        self.count
    }
}
