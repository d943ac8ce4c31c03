/*
draw.rs

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

//! Draw the board in a terminal.
//!
//! Cells are printed on a character grid that mimics the flat-top hexagons of the graphical
//! layout: the cell `(q, r)` is printed on line `2r + q` and in column `q`, so that the starting
//! cell is at the bottom and the goal at the top.
//!
//! Each cell is drawn with a short label:
//!
//! * `@` the player.
//! * `.` a visited cell.
//! * `GOAL` the goal, prefixed with the direction index when the player can enter it.
//! * `d:+w` a cell next to the player, with the direction index to type and the weight gained
//!   by moving there.
//! * `o` any other cell.
//!
//! When the solution is displayed, the cells of the solution path get a trailing `*`.
//!
//! The cell classes come from the [`Layout::view`] snapshot, as for any other renderer.

use log::debug;

use crate::game::Game;
use crate::generator::hex::Coord;
use crate::generator::path::Path;
use crate::layout::{CellClass, CellView, Layout, Theme};

/// Number of characters between two consecutive columns of cells.
const COLUMN_WIDTH: usize = 6;

/// Space reserved for a cell label. Labels are centered in that space.
const LABEL_WIDTH: usize = 10;

const RESET: &str = "\x1b[0m";

/// ANSI color of each kind of cell.
struct Palette {
    player: &'static str,
    visited: &'static str,
    goal: &'static str,
    adjacent: &'static str,
    plain: &'static str,
}

const LIGHT: Palette = Palette {
    player: "\x1b[1;34m",
    visited: "\x1b[90m",
    goal: "\x1b[36m",
    adjacent: "\x1b[33m",
    plain: "\x1b[31m",
};

const DARK: Palette = Palette {
    player: "\x1b[1;94m",
    visited: "\x1b[37m",
    goal: "\x1b[96m",
    adjacent: "\x1b[93m",
    plain: "\x1b[91m",
};

impl Palette {
    fn for_theme(theme: Theme) -> &'static Palette {
        match theme {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

/// Label of a cell, ready to be placed on its line.
#[derive(Debug)]
struct Label {
    column: usize,
    text: String,
    color: &'static str,
}

/// Draw object that renders the game as text.
#[derive(Debug, Clone)]
pub struct Draw {
    theme: Theme,

    /// Whether to use ANSI color sequences.
    color: bool,
}

impl Draw {
    /// Create a [`Draw`] object.
    pub fn new(theme: Theme, color: bool) -> Self {
        Self { theme, color }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        debug!("Theme set to {theme}");
        self.theme = theme;
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.color {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Text of the label of the given cell.
    fn label(game: &Game, view: &CellView, on_solution: bool) -> String {
        let mark: &str = if on_solution { "*" } else { "" };
        if view.coord == game.position() {
            return "@".to_string();
        }
        let direction = game.position().direction_to(view.coord);
        match (view.class, direction) {
            (CellClass::Visited, _) => ".".to_string(),
            (CellClass::Goal, Some(d)) if !game.is_over() => format!("{}:GOAL", d.index()),
            (CellClass::Goal, _) => "GOAL".to_string(),
            (CellClass::Adjacent, Some(d)) => {
                format!("{}:{:+}{mark}", d.index(), view.weights[d.opposite().index()])
            }
            (CellClass::Adjacent | CellClass::Plain, _) => format!("o{mark}"),
        }
    }

    /// Render the board.
    ///
    /// When `solution` is provided, the cells of that path are marked.
    pub fn board(&self, game: &Game, layout: &Layout, solution: Option<&Path>) -> String {
        let palette: &Palette = Palette::for_theme(self.theme);
        let radius: i32 = game.grid().radius();
        let span: i32 = 2 * (radius - 1);
        let mut lines: Vec<Vec<Label>> = (0..=2 * span).map(|_| Vec::new()).collect();

        for view in layout.view(game) {
            let c: Coord = view.coord;
            let line: usize = (2 * c.r + c.q + span) as usize;
            let column: usize = (c.q + radius - 1) as usize * COLUMN_WIDTH;
            let on_solution: bool = solution.is_some_and(|p| p.contains(c));
            let color: &'static str = if c == game.position() {
                palette.player
            } else {
                match view.class {
                    CellClass::Visited => palette.visited,
                    CellClass::Goal => palette.goal,
                    CellClass::Adjacent => palette.adjacent,
                    CellClass::Plain => palette.plain,
                }
            };
            if let Some(labels) = lines.get_mut(line) {
                labels.push(Label {
                    column,
                    text: Self::label(game, &view, on_solution),
                    color,
                });
            }
        }

        let mut out: String = String::new();
        for mut labels in lines {
            labels.sort_by_key(|l| l.column);
            let mut row: String = String::new();
            let mut width: usize = 0;
            for label in labels {
                let len: usize = label.text.chars().count();
                let start: usize = label.column + LABEL_WIDTH.saturating_sub(len) / 2;
                row.push_str(&" ".repeat(start.saturating_sub(width)));
                row.push_str(&self.paint(&label.text, label.color));
                width = start.max(width) + len;
            }
            out.push_str(row.trim_end());
            out.push('\n');
        }
        out
    }

    /// Render the value line, followed by the end of game message when the game is over.
    pub fn status(&self, game: &Game) -> String {
        let mut out: String = format!(
            "Value: {}    Goal: {}",
            game.current_value(),
            game.goal_value()
        );
        if game.is_over() {
            out.push('\n');
            out.push_str(&game.status().message());
        }
        out
    }

    /// Render the list of the moves the player can make.
    pub fn moves(&self, game: &Game) -> String {
        game.available_moves()
            .iter()
            .map(|m| {
                let gain: String = match m.gain {
                    Some(w) => format!("{w:+}"),
                    None => "goal".to_string(),
                };
                format!(
                    "  {} {:<11} {:<8} {gain}\n",
                    m.direction.index(),
                    m.direction.to_string(),
                    m.coord.to_string()
                )
            })
            .collect()
    }
}
