/*
layout.rs

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

//! Position the board cells on a drawing surface.
//!
//! Renderers draw flat-top hexagons. The cell radius is derived from the smallest side of the
//! surface, and the central cell `(0, 0)` is drawn at the center of the surface.
//!
//! [`Layout::cell_at`] converts a pointer position into a cell, and [`Layout::view`] returns
//! everything a renderer needs to draw the board: position, weights, and [`CellClass`] of each
//! cell. The terminal renderer only uses [`Layout::view`]. [`Layout::cell_at`] is the entry point
//! of pointer-based front ends, which pass the resulting cell to [`MoveController::request`].
//!
//! [`MoveController::request`]: crate::player_input::MoveController::request

use std::collections::HashMap;
use strum_macros::Display;

use crate::game::Game;
use crate::generator::grid::Grid;
use crate::generator::hex::Coord;

const SQRT_3: f64 = 1.732_050_807_568_877_2_f64;

/// Color scheme.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Display)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Switch between the light and the dark schemes.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// How a cell must be drawn.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CellClass {
    /// The player went through the cell. Its weights are hidden.
    Visited,

    /// The goal. Its label replaces the weights.
    Goal,

    /// The player can move to the cell.
    Adjacent,

    Plain,
}

/// Classify the given cell for the renderer.
pub fn classify(game: &Game, coord: Coord) -> CellClass {
    if game.is_visited(coord) {
        CellClass::Visited
    } else if coord == game.goal() {
        CellClass::Goal
    } else if game.position().direction_to(coord).is_some() {
        CellClass::Adjacent
    } else {
        CellClass::Plain
    }
}

/// Everything needed to draw a cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellView {
    pub coord: Coord,

    /// Center of the cell on the surface.
    pub x: f64,
    pub y: f64,

    pub weights: [i32; 6],
    pub class: CellClass,
}

/// Cell positions on a drawing surface.
#[derive(Debug, Clone)]
pub struct Layout {
    /// Distance between the center of a cell and its corners.
    cell_radius: f64,

    /// Center of each cell.
    centers: HashMap<Coord, (f64, f64)>,
}

impl Layout {
    /// Create a [`Layout`] object for a surface of the given size.
    pub fn new(grid: &Grid, width: f64, height: f64) -> Self {
        let cell_radius: f64 = (width.min(height) / (grid.radius() as f64 * 2.5)) * 0.75;
        let cell_height: f64 = cell_radius * SQRT_3;
        let offset_x: f64 = width / 2.0;
        let offset_y: f64 = height / 2.0;

        let centers: HashMap<Coord, (f64, f64)> = grid
            .cells()
            .iter()
            .map(|c| {
                let q: f64 = c.coord().q as f64;
                let r: f64 = c.coord().r as f64;
                (
                    c.coord(),
                    (
                        offset_x + cell_radius * 1.5 * q,
                        offset_y + cell_height * (r + q / 2.0),
                    ),
                )
            })
            .collect();

        Self {
            cell_radius,
            centers,
        }
    }

    pub fn cell_radius(&self) -> f64 {
        self.cell_radius
    }

    /// Center of the given cell, or `None` if the cell is not on the board.
    pub fn center(&self, coord: Coord) -> Option<(f64, f64)> {
        self.centers.get(&coord).copied()
    }

    /// Return the cell under the given point.
    ///
    /// The cell is the one with the nearest center, provided that center is no further than
    /// one cell radius.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<Coord> {
        let max: f64 = self.cell_radius * self.cell_radius;
        self.centers
            .iter()
            .map(|(coord, (cx, cy))| (*coord, (x - cx) * (x - cx) + (y - cy) * (y - cy)))
            .filter(|(_, d)| *d <= max)
            .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))
            .map(|(coord, _)| coord)
    }

    /// Return the drawing details of all the cells, in board order.
    pub fn view(&self, game: &Game) -> Vec<CellView> {
        game.grid()
            .cells()
            .iter()
            .filter_map(|c| {
                let (x, y) = self.center(c.coord())?;
                Some(CellView {
                    coord: c.coord(),
                    x,
                    y,
                    weights: c.weights,
                    class: classify(game, c.coord()),
                })
            })
            .collect()
    }
}
