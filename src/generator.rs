/*
generator.rs

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

//! Generate random solvable boards.
//!
//! A board is a [`grid::Grid`] of hexagonal cells addressed by axial [`hex::Coord`] coordinates.
//! Every cell carries six edge weights: the value that the player gains when entering the cell
//! from each of its neighbors.
//!
//! To play, a random board must be created with [`puzzle::Puzzle::generate`]:
//!
//! * A goal value and a random walk from the starting cell to the goal are drawn by
//!   [`random_path::RandomPath::generate`]. The weights of the walk add up to the goal value.
//!   When the walk gets trapped, the generator tries again.
//!
//! * All the other cells, except the goal, receive random weights.
//!
//! All the draws come from a [`prng::RandomSource`]. The daily board uses a
//! [`prng::SeededRandom`] generator seeded from the date so that all the players get the same
//! board.

pub mod grid;
pub mod hex;
pub mod path;
pub mod prng;
pub mod puzzle;
pub mod random_path;
