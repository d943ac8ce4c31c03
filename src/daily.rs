/*
daily.rs

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

//! Daily challenge.
//!
//! In daily mode, the board is generated from a seed derived from the local date, so that all
//! the players get the same board on a given day. The unlimited mode draws a new board for
//! every game.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone};
use strum_macros::Display;

use crate::generator::prng::SeededRandom;

/// Game mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Display)]
pub enum Mode {
    #[default]
    Daily,
    Unlimited,
}

impl Mode {
    /// Switch between the daily and the unlimited modes.
    pub fn toggle(self) -> Self {
        match self {
            Mode::Daily => Mode::Unlimited,
            Mode::Unlimited => Mode::Daily,
        }
    }
}

/// Seed of the daily board: `year * 10000 + month * 100 + day`.
pub fn daily_seed(date: NaiveDate) -> i64 {
    date.year() as i64 * 10000 + date.month() as i64 * 100 + date.day() as i64
}

/// Random generator for the board of the given day.
pub fn daily_random(date: NaiveDate) -> SeededRandom {
    SeededRandom::new(daily_seed(date) as f64)
}

/// Local date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Representation of a date in the storage.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Time left before the next daily board.
pub fn time_until_next_daily<Tz: TimeZone>(now: &DateTime<Tz>) -> Duration {
    let tomorrow: Option<DateTime<Tz>> = now
        .date_naive()
        .succ_opt()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .and_then(|midnight| now.timezone().from_local_datetime(&midnight).earliest());
    match tomorrow {
        Some(t) => t.signed_duration_since(now),
        None => Duration::zero(),
    }
}

/// Format a duration as `HH:MM:SS`.
pub fn format_countdown(duration: Duration) -> String {
    let secs: i64 = duration.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
