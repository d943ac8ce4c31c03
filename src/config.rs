/*
config.rs

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

//! Build-time settings and game constants.

use std::env;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 The Hexpath authors
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Radius of the board. A cell `(q, r)` belongs to the board when `|q|`, `|r|`, and `|q + r|`
/// are all lower than this value.
pub const GRID_RADIUS: i32 = 5;

/// Smallest and largest board radius accepted on the command line.
pub const MIN_GRID_RADIUS: i32 = 2;
pub const MAX_GRID_RADIUS: i32 = 8;

/// Value of the player when a game starts.
pub const INITIAL_VALUE: i32 = 3;

/// The goal value is drawn in `1..=GOAL_VALUE_MAX`.
pub const GOAL_VALUE_MAX: i32 = 20;

/// Range of the generated edge weights.
pub const MIN_WEIGHT: i32 = -3;
pub const MAX_WEIGHT: i32 = 3;

/// Number of times the generator restarts a trapped walk before giving up.
pub const MAX_SYNTHESIS_ATTEMPTS: usize = 64;

/// Duration of the move animation, in milliseconds.
pub const ANIMATION_DURATION_MS: u64 = 300;
pub const TOUCH_ANIMATION_DURATION_MS: u64 = 150;

/// A tap that follows the previous one within this delay is ignored.
pub const DOUBLE_TAP_MS: u64 = 500;

/// Directory where the game state is stored.
///
/// Use `$XDG_DATA_HOME/hexpath`, and then `$HOME/.local/share/hexpath`.
pub fn user_data_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os("XDG_DATA_HOME").filter(|d| !d.is_empty()) {
        let mut path = PathBuf::from(dir);
        path.push("hexpath");
        return Some(path);
    }
    env::var_os("HOME").filter(|d| !d.is_empty()).map(|home| {
        let mut path = PathBuf::from(home);
        path.push(".local");
        path.push("share");
        path.push("hexpath");
        path
    })
}
