/*
application.rs

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

//! Run the game in a terminal.
//!
//! [`HexpathApplication`] owns the game in progress and everything around it: the game mode, the
//! daily bookkeeping (saved game, completion flag, and streak), and the rendering.
//! [`HexpathApplication::run`] reads the player commands line by line and prints the board after
//! each command.

use chrono::NaiveDate;
use log::{debug, info, warn};
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::thread;
use std::time::{Duration, Instant};

use crate::config::{self, ANIMATION_DURATION_MS, GRID_RADIUS};
use crate::daily::{self, Mode};
use crate::draw::Draw;
use crate::game::{Game, GameStatus, MoveError, MoveOutcome};
use crate::generator::grid::Grid;
use crate::generator::hex::{Coord, Direction};
use crate::generator::path::Path;
use crate::generator::prng::SeededRandom;
use crate::generator::puzzle::Puzzle;
use crate::layout::{Layout, Theme};
use crate::player_input::MoveController;
use crate::saver::game::SaverGame;
use crate::streak::Streak;

/// Size of the virtual surface the marker animation runs on.
const SURFACE_SIZE: f64 = 1040.0;

/// Delay between two animation frames.
const FRAME: Duration = Duration::from_millis(16);

const HELP: &str = "\
Commands:
  0-5        move in the direction with that index
  q r        move to the cell (q, r)
  n, new     new board (unlimited mode)
  m, mode    switch between the daily and the unlimited modes
  t, theme   switch between the light and the dark themes
  h, help    this help
  x, quit    leave the game";

/// Options of the application.
#[derive(Debug, Clone)]
pub struct Options {
    pub mode: Mode,

    /// Seed of the first unlimited board, instead of a random seed. The daily board always
    /// derives from the date.
    pub seed: Option<f64>,

    pub radius: i32,

    /// Directory for the saved daily game. `None` selects the user data directory.
    pub data_dir: Option<PathBuf>,

    /// Mark the generated path on the board.
    pub show_solution: bool,

    pub theme: Theme,
    pub color: bool,

    /// Duration of the marker animation.
    pub animation: Duration,

    /// Date of the daily board. `None` selects the local date.
    pub today: Option<NaiveDate>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: Mode::Daily,
            seed: None,
            radius: GRID_RADIUS,
            data_dir: None,
            show_solution: false,
            theme: Theme::Light,
            color: true,
            animation: Duration::from_millis(ANIMATION_DURATION_MS),
            today: None,
        }
    }
}

/// Player command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    MoveTo(Coord),
    NewGame,
    ToggleMode,
    ToggleTheme,
    Help,
    Quit,
}

/// The command line cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Unknown command '{}'. Type 'h' for help.", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line: String = s.trim().to_lowercase();
        match line.as_str() {
            "x" | "quit" | "exit" => return Ok(Command::Quit),
            "n" | "new" => return Ok(Command::NewGame),
            "m" | "mode" => return Ok(Command::ToggleMode),
            "t" | "theme" => return Ok(Command::ToggleTheme),
            "h" | "help" | "?" => return Ok(Command::Help),
            _ => (),
        }

        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();
        match fields.as_slice() {
            [d] => d
                .parse::<usize>()
                .ok()
                .and_then(Direction::from_repr)
                .map(Command::Move),
            [q, r] => match (q.parse::<i32>(), r.parse::<i32>()) {
                (Ok(q), Ok(r)) => Some(Command::MoveTo(Coord::new(q, r))),
                _ => None,
            },
            _ => None,
        }
        .ok_or_else(|| UnknownCommand(s.trim().to_string()))
    }
}

/// Terminal application.
#[derive(Debug)]
pub struct HexpathApplication {
    options: Options,
    mode: Mode,

    /// Saved daily game. `None` when no data directory is available.
    saver: Option<SaverGame>,

    streak: Streak,
    game: Game,

    /// Path the generator laid out for the current board.
    solution: Option<Path>,

    daily_completed: bool,
    today: NaiveDate,

    draw: Draw,
    layout: Layout,
    controller: MoveController,
}

impl HexpathApplication {
    /// Create a [`HexpathApplication`] object and load or generate the first board.
    pub fn new(options: Options) -> Self {
        let today: NaiveDate = options.today.unwrap_or_else(daily::today);
        let saver: Option<SaverGame> = options
            .data_dir
            .clone()
            .or_else(config::user_data_dir)
            .map(SaverGame::new);
        if saver.is_none() {
            warn!("No data directory: the daily game is not saved");
        }
        let streak: Streak = saver.as_ref().map(|s| s.get_streak()).unwrap_or_default();
        let game: Game = Game::new(Grid::new(options.radius), 0);
        let layout: Layout = Layout::new(game.grid(), SURFACE_SIZE, SURFACE_SIZE);

        let mut app: Self = Self {
            mode: options.mode,
            saver,
            streak,
            game,
            solution: None,
            daily_completed: false,
            today,
            draw: Draw::new(options.theme, options.color),
            layout,
            controller: MoveController::new(options.animation),
            options,
        };
        app.start();
        app
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn streak(&self) -> u32 {
        self.streak.count()
    }

    pub fn is_daily_completed(&self) -> bool {
        self.daily_completed
    }

    /// Random generator for the next board.
    fn next_random(&mut self) -> SeededRandom {
        match self.mode {
            Mode::Daily => daily::daily_random(self.today),
            Mode::Unlimited => match self.options.seed.take() {
                Some(seed) => SeededRandom::new(seed),
                None => SeededRandom::unlimited(),
            },
        }
    }

    fn set_puzzle(&mut self, puzzle: Puzzle) {
        self.solution = Some(puzzle.path.clone());
        self.game = Game::from_puzzle(puzzle);
        self.layout = Layout::new(self.game.grid(), SURFACE_SIZE, SURFACE_SIZE);
        self.controller = MoveController::new(self.options.animation);
    }

    /// Load the board of the current mode.
    ///
    /// In daily mode, the game saved earlier the same day is resumed, with its completion flag.
    /// Otherwise, a new board is generated.
    pub fn start(&mut self) {
        if self.mode == Mode::Unlimited {
            self.reset();
            return;
        }

        let mut rng: SeededRandom = self.next_random();
        let puzzle: Puzzle = Puzzle::generate(self.options.radius, &mut rng);
        let restored: Option<Game> = match &mut self.saver {
            Some(saver) => match saver.get_game(self.today, puzzle.grid.clone()) {
                Ok(game) => game,
                Err(e) => {
                    warn!("Cannot restore the daily game: {e}");
                    saver.delete_game();
                    None
                }
            },
            None => None,
        };

        match restored {
            Some(game) => {
                info!("Resuming the daily game of {}", self.today);
                self.daily_completed = self
                    .saver
                    .as_ref()
                    .is_some_and(|s| s.is_completed(self.today));
                self.set_puzzle(puzzle);
                self.game = game;
            }
            None => {
                self.set_puzzle(puzzle);
                self.daily_completed = false;
                self.save_daily(false);
            }
        }
    }

    /// Generate a new board for the current mode.
    pub fn reset(&mut self) {
        let mut rng: SeededRandom = self.next_random();
        let seed: f64 = rng.seed();
        let puzzle: Puzzle = Puzzle::generate(self.options.radius, &mut rng);
        info!(
            "New {} board from seed {seed}: goal value {}, {} attempt(s)",
            self.mode, puzzle.goal_value, puzzle.attempts
        );
        self.set_puzzle(puzzle);
        self.daily_completed = false;
        if self.mode == Mode::Daily {
            self.save_daily(false);
        }
    }

    /// Save the daily game and its completion flag.
    fn save_daily(&mut self, completed: bool) {
        if self.mode != Mode::Daily {
            return;
        }
        let Some(saver) = &mut self.saver else {
            return;
        };
        if let Err(e) = saver.set_completed(completed, self.today) {
            warn!("Cannot save the completion flag: {e}");
        }
        if let Err(e) = saver.save_game(&self.game, self.today) {
            warn!("Cannot save the daily game: {e}");
        }
    }

    /// Message for the completed daily challenge.
    fn completed_message(&self) -> String {
        let countdown: String =
            daily::format_countdown(daily::time_until_next_daily(&chrono::Local::now()));
        format!(
            "Daily challenge completed! Streak: {}. Next board in {countdown}.",
            self.streak.count()
        )
    }

    /// Move the player to the given cell.
    ///
    /// The move is applied at the end of the marker animation. Return the message to display,
    /// if any.
    pub fn play_move(&mut self, target: Coord) -> Option<String> {
        if self.mode == Mode::Daily && self.daily_completed {
            return Some(self.completed_message());
        }
        if let Err(e) = self.game.check_move(target) {
            return match e {
                MoveError::GameOver => Some("The game is over. Type 'n' or 'm'.".to_string()),
                _ => Some(format!("Cannot move: {e}.")),
            };
        }
        if !self
            .controller
            .request(&self.game, &self.layout, target, Instant::now())
        {
            return None;
        }

        let result: Result<MoveOutcome, MoveError> = loop {
            match self.controller.poll(&mut self.game, Instant::now()) {
                Some(r) => break r,
                None => thread::sleep(FRAME),
            }
        };

        match result {
            Ok(MoveOutcome::Moved { gained }) => {
                debug!("Gained {gained}");
                self.save_daily(false);
                None
            }
            Ok(MoveOutcome::Finished(status)) => Some(self.end_game(status)),
            Err(e) => Some(format!("Cannot move: {e}.")),
        }
    }

    /// Move the player in the given direction.
    pub fn play_direction(&mut self, direction: Direction) -> Option<String> {
        self.play_move(self.game.position().neighbor(direction))
    }

    /// Record the end of the game and return the message to display.
    fn end_game(&mut self, status: GameStatus) -> String {
        let message: String = status.message();
        match self.mode {
            Mode::Daily => {
                self.daily_completed = true;
                let count: u32 = self.streak.record(status == GameStatus::Won);
                self.save_daily(true);
                if let Some(saver) = &mut self.saver {
                    if let Err(e) = saver.save_streak(&self.streak) {
                        warn!("Cannot save the streak: {e}");
                    }
                }
                format!("{message}\nStreak: {count}")
            }
            Mode::Unlimited => format!("{message}\nType 'n' to play again."),
        }
    }

    /// Start a new unlimited game.
    pub fn play_again(&mut self) -> Option<String> {
        match self.mode {
            Mode::Unlimited => {
                self.reset();
                None
            }
            Mode::Daily => Some(
                "The daily board is the same for the whole day. Type 'm' for unlimited games."
                    .to_string(),
            ),
        }
    }

    /// Switch between the daily and the unlimited modes and load the board of the new mode.
    pub fn toggle_mode(&mut self) -> Option<String> {
        self.mode = self.mode.toggle();
        info!("Switching to {} mode", self.mode);
        self.start();
        if self.mode == Mode::Daily && self.daily_completed {
            Some(self.completed_message())
        } else {
            None
        }
    }

    pub fn toggle_theme(&mut self) {
        self.draw.set_theme(self.draw.theme().toggle());
    }

    /// Render the board, the value line, and the available moves.
    pub fn render(&self) -> String {
        let solution: Option<&Path> = if self.options.show_solution {
            self.solution.as_ref()
        } else {
            None
        };
        format!(
            "{} mode\n\n{}\n{}\n{}",
            self.mode,
            self.draw.board(&self.game, &self.layout, solution),
            self.draw.status(&self.game),
            self.draw.moves(&self.game)
        )
    }

    /// Apply a command. Return the message to display, if any.
    pub fn execute(&mut self, command: Command) -> Option<String> {
        match command {
            Command::Move(d) => self.play_direction(d),
            Command::MoveTo(c) => self.play_move(c),
            Command::NewGame => self.play_again(),
            Command::ToggleMode => self.toggle_mode(),
            Command::ToggleTheme => {
                self.toggle_theme();
                None
            }
            Command::Help => Some(HELP.to_string()),
            Command::Quit => None,
        }
    }

    /// Read the commands from `input` and print the game to `output`, until the player quits or
    /// the input is exhausted.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        if self.mode == Mode::Daily && self.daily_completed {
            writeln!(output, "{}", self.completed_message())?;
        }
        write!(output, "{}> ", self.render())?;
        output.flush()?;

        for line in input.lines() {
            let line: String = line?;
            if line.trim().is_empty() {
                write!(output, "> ")?;
                output.flush()?;
                continue;
            }
            let message: Option<String> = match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => {
                    writeln!(output, "{HELP}")?;
                    write!(output, "> ")?;
                    output.flush()?;
                    continue;
                }
                Ok(command) => self.execute(command),
                Err(e) => Some(e.to_string()),
            };
            writeln!(output)?;
            if let Some(m) = message {
                writeln!(output, "{m}\n")?;
            }
            write!(output, "{}> ", self.render())?;
            output.flush()?;
        }
        writeln!(output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::saver::storage::tests::test_dir;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
    }

    fn options(data_dir: PathBuf) -> Options {
        Options {
            data_dir: Some(data_dir),
            color: false,
            animation: Duration::ZERO,
            today: Some(day()),
            ..Options::default()
        }
    }

    /// Walk the generated path. Return the last message.
    fn follow_solution(app: &mut HexpathApplication) -> Option<String> {
        let path: Vec<Coord> = app.solution.as_ref().unwrap().get().clone();
        let mut message = None;
        for c in path.into_iter().skip(1) {
            message = app.play_move(c);
            if app.game().is_over() {
                break;
            }
        }
        message
    }

    #[test]
    fn commands_are_parsed() {
        assert_eq!("4".parse::<Command>(), Ok(Command::Move(Direction::North)));
        assert_eq!(" 0 ".parse::<Command>(), Ok(Command::Move(Direction::SouthEast)));
        assert_eq!("1 -2".parse::<Command>(), Ok(Command::MoveTo(Coord::new(1, -2))));
        assert_eq!("-1,3".parse::<Command>(), Ok(Command::MoveTo(Coord::new(-1, 3))));
        assert_eq!("NEW".parse::<Command>(), Ok(Command::NewGame));
        assert_eq!("x".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("m".parse::<Command>(), Ok(Command::ToggleMode));
        assert_eq!("t".parse::<Command>(), Ok(Command::ToggleTheme));
        assert_eq!(
            "6".parse::<Command>(),
            Err(UnknownCommand("6".to_string()))
        );
        assert!("go north".parse::<Command>().is_err());
    }

    #[test]
    fn daily_board_is_the_board_of_the_day() {
        let dir = test_dir("app-daily-board");
        let app = HexpathApplication::new(options(dir.clone()));
        let puzzle = Puzzle::generate(GRID_RADIUS, &mut daily::daily_random(day()));
        assert_eq!(app.game(), &Game::from_puzzle(puzzle));
        assert!(!app.is_daily_completed());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn seed_does_not_replace_the_daily_board() {
        let dir = test_dir("app-daily-seed");
        let expected = Game::from_puzzle(Puzzle::generate(
            GRID_RADIUS,
            &mut daily::daily_random(day()),
        ));
        let mut app = HexpathApplication::new(Options {
            seed: Some(42.0),
            ..options(dir.clone())
        });
        assert_eq!(app.game(), &expected);

        // The seed is kept for the first unlimited board
        app.toggle_mode();
        let seeded = Puzzle::generate(GRID_RADIUS, &mut SeededRandom::new(42.0));
        assert_eq!(app.game(), &Game::from_puzzle(seeded));

        let app = HexpathApplication::new(options(dir.clone()));
        assert_eq!(app.game(), &expected);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn daily_game_is_resumed_the_same_day() {
        let dir = test_dir("app-daily-resume");
        let mut app = HexpathApplication::new(options(dir.clone()));
        let target: Coord = app.game().available_moves()[0].coord;
        assert_eq!(app.play_move(target), None);
        let game: Game = app.game().clone();

        let app = HexpathApplication::new(options(dir.clone()));
        assert_eq!(app.game(), &game);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn completed_daily_game_is_locked() {
        let dir = test_dir("app-daily-completed");
        let mut app = HexpathApplication::new(options(dir.clone()));
        let message = follow_solution(&mut app);
        assert!(app.game().is_over());
        assert!(app.is_daily_completed());
        assert!(message.unwrap().contains("Streak:"));

        let mut app = HexpathApplication::new(options(dir.clone()));
        assert!(app.is_daily_completed());
        let target: Coord = app.game().position().neighbor(Direction::North);
        let message = app.play_move(target).unwrap();
        assert!(message.starts_with("Daily challenge completed!"));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn unlimited_games_are_not_saved() {
        let dir = test_dir("app-unlimited");
        let mut app = HexpathApplication::new(Options {
            mode: Mode::Unlimited,
            seed: Some(42.0),
            ..options(dir.clone())
        });
        let expected = Puzzle::generate(GRID_RADIUS, &mut SeededRandom::new(42.0));
        assert_eq!(app.game(), &Game::from_puzzle(expected));
        let target: Coord = app.game().available_moves()[0].coord;
        app.play_move(target);
        assert_eq!(SaverGame::new(dir.clone()).get_date(), None);

        let first: Game = app.game().clone();
        assert_eq!(app.play_again(), None);
        assert_ne!(app.game(), &first);
        assert!(!app.game().is_over());
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn mode_switch_loads_the_other_board() {
        let dir = test_dir("app-mode");
        let mut app = HexpathApplication::new(options(dir.clone()));
        let daily: Game = app.game().clone();
        assert!(app.play_again().is_some());
        assert_eq!(app.game(), &daily);

        app.toggle_mode();
        assert_eq!(app.mode(), Mode::Unlimited);
        app.toggle_mode();
        assert_eq!(app.mode(), Mode::Daily);
        assert_eq!(app.game(), &daily);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn run_reads_commands_until_quit() {
        let dir = test_dir("app-run");
        let mut app = HexpathApplication::new(options(dir.clone()));
        let input: &[u8] = b"h\nbogus\nt\nx\n4\n";
        let mut output: Vec<u8> = Vec::new();
        app.run(input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Daily mode"));
        assert!(text.contains("Commands:"));
        assert!(text.contains("Unknown command 'bogus'"));
        // Nothing is read after the quit command
        assert_eq!(app.game().visited().len(), 1);
        let _ = std::fs::remove_dir_all(dir);
    }
}
