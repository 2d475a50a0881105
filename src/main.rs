// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Video Catalog Shell.
//!
//! An in-memory video library with playlists, playback state and search,
//! driven by commands typed at a prompt.
//!
//! ## Architecture
//!
//! * The **catalog** is loaded once at startup and never changes.
//! * The **[`App`]** context owns the session state (player and playlists)
//!   and is passed explicitly to the command dispatcher.
//! * The **shell loop** reads a line, parses it into a command, runs it and
//!   renders the outcome, until `EXIT` or the end of input.
//!
//! Diagnostics are written to a log file so they never mix with the shell's
//! own output.

mod actions;
mod commander;
mod config;
mod error;
mod logging;
mod model;
mod player;
mod render;
mod theme;

use anyhow::{Context, Result};
use std::{
    env,
    io::{self, BufRead, IsTerminal, Write},
    path::Path,
};
use tracing::info;

use crate::{
    actions::commands::{Flow, handle_command},
    config::AppConfig,
    model::{catalog::VideoCatalog, registry::PlaylistRegistry},
    player::PlaybackState,
    render::Console,
    theme::Theme,
};

const WELCOME: &str = "Hello and welcome to the video player, what would you like to do?
Enter HELP for list of available commands or EXIT to terminate.";

const PROMPT: &str = "> ";

/// Application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,

    pub(crate) catalog: VideoCatalog,

    pub(crate) player: PlaybackState,
    pub(crate) playlists: PlaylistRegistry,
}

impl App {
    /// Create a new session over a loaded catalog.
    pub(crate) fn new(config: AppConfig, catalog: VideoCatalog) -> Self {
        Self {
            config,
            catalog,
            player: PlaybackState::new(),
            playlists: PlaylistRegistry::new(),
        }
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging, loads the catalog named by the
/// first command-line argument (or the configured catalog file) and hands
/// control to the shell loop.
fn main() -> Result<()> {
    let mut config = config::load_config();
    if let Some(catalog_file) = env::args().nth(1) {
        config.catalog_file = catalog_file;
    }

    if let Err(e) = logging::init_logging(Path::new(&config.log_dir), &config.log_level) {
        eprintln!("Logging disabled: {e:#}");
    }

    let catalog_path = Path::new(&config.catalog_file);
    let catalog = VideoCatalog::load(catalog_path)
        .with_context(|| format!("Failed to load video catalog {}", catalog_path.display()))?;

    let mut app = App::new(config, catalog);

    let stdout = io::stdout();
    let colour = app.config.colour && stdout.is_terminal();
    let mut console = Console::new(stdout.lock(), Theme::default(), colour);

    let res = run(&mut app, &mut io::stdin().lock(), &mut console);
    info!("session finished");

    res.context("Application error occurred")
}

/// Reads commands from `input` until `EXIT` or the end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
fn run<R: BufRead, W: Write>(app: &mut App, input: &mut R, console: &mut Console<W>) -> Result<()> {
    console.line(WELCOME)?;

    let mut buffer = String::new();
    loop {
        console.prompt(PROMPT)?;

        buffer.clear();
        if input.read_line(&mut buffer).context("Failed to read command")? == 0 {
            break;
        }

        let Some(command) = commander::parse_command(&buffer) else {
            continue;
        };

        if handle_command(app, command, input, console)? == Flow::Exit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn session(script: &str) -> (App, String) {
        let catalog = VideoCatalog::parse("Funny Dogs | funny_dogs_video_id | #dog").unwrap();
        let mut app = App::new(AppConfig::default(), catalog);
        let mut console = Console::new(Vec::new(), Theme::default(), false);

        run(&mut app, &mut Cursor::new(script.as_bytes()), &mut console).unwrap();

        (app, String::from_utf8(console.into_inner()).unwrap())
    }

    #[test]
    fn greets_and_ends_at_end_of_input() {
        let (_, out) = session("");

        assert_eq!(out, format!("{WELCOME}\n{PROMPT}"));
    }

    #[test]
    fn stops_reading_after_exit() {
        let (app, out) = session("EXIT\nPLAY funny_dogs_video_id\n");

        assert!(out.contains("Thank you and goodbye!"));
        assert!(!out.contains("Playing video"));
        assert!(app.player.current().is_err());
    }

    #[test]
    fn skips_blank_lines() {
        let (app, out) = session("\n   \nPLAY funny_dogs_video_id\n");

        assert_eq!(
            out,
            format!("{WELCOME}\n{PROMPT}{PROMPT}{PROMPT}Playing video: Funny Dogs\n{PROMPT}")
        );
        assert!(app.player.current().is_ok());
    }
}
