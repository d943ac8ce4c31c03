/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Play the daily board:
//!
//! ```text
//! $ hexpath
//! ```
//!
//! Play unlimited boards on a smaller grid, starting from a fixed seed, and mark the generated
//! path on the board:
//!
//! ```text
//! $ hexpath --unlimited --radius 4 --seed 1234 --solution
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::application::Options;
use crate::config::{COPYRIGHT_NOTICE, GRID_RADIUS, MAX_GRID_RADIUS, MIN_GRID_RADIUS};
use crate::daily::Mode;
use crate::layout::Theme;

/// Reach the goal of a hexagonal board with exactly the right value.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Play random boards instead of the daily board
    #[arg(short, long, default_value_t = false)]
    unlimited: bool,

    /// Seed of the first unlimited board
    #[arg(short, long)]
    seed: Option<f64>,

    /// Number of cells from the center to the border of the board, center included
    #[arg(short, long, default_value_t = GRID_RADIUS,
          value_parser = clap::value_parser!(i32).range(MIN_GRID_RADIUS as i64..=MAX_GRID_RADIUS as i64))]
    radius: i32,

    /// Directory where the daily game is saved
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Mark the generated path on the board
    #[arg(long, default_value_t = false)]
    solution: bool,

    /// Use the dark color scheme
    #[arg(long, default_value_t = false)]
    dark: bool,

    /// Do not use colors
    #[arg(long, default_value_t = false)]
    no_color: bool,

    /// Apply the moves without animation delay
    #[arg(long, default_value_t = false)]
    no_animation: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse the command-line options and initialize the logger.
pub fn parse() -> Options {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();
    debug!("{args:?}");

    options_from(args)
}

fn options_from(args: Args) -> Options {
    let default: Options = Options::default();
    Options {
        mode: if args.unlimited {
            Mode::Unlimited
        } else {
            Mode::Daily
        },
        seed: args.seed,
        radius: args.radius,
        data_dir: args.data_dir,
        show_solution: args.solution,
        theme: if args.dark { Theme::Dark } else { Theme::Light },
        color: !args.no_color,
        animation: if args.no_animation {
            Duration::ZERO
        } else {
            default.animation
        },
        today: None,
    }
}
