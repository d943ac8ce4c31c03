/*
main.rs

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

use log::{error, info};
use std::io;
use std::process::ExitCode;

use hexpath::application::HexpathApplication;
use hexpath::cli_options;
use hexpath::config::VERSION;

fn main() -> ExitCode {
    // Also initializes the logger
    let options = cli_options::parse();
    info!("Hexpath {VERSION}");

    let mut app: HexpathApplication = HexpathApplication::new(options);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    match app.run(stdin.lock(), &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Terminal error: {e}");
            ExitCode::FAILURE
        }
    }
}
