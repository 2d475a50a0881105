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

//! Application command processing.
//!
//! This module implements the command pattern used by the shell. Each
//! [`AppCommand`] is run against the [`App`] context, and the structured
//! result of the core operation is rendered as text on the [`Console`].
//! Failures of the core are reported as warnings and never end the session.

use std::{
    io::{BufRead, Write},
    rc::Rc,
};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::{
    App,
    error::{PlaybackError, PlaylistError},
    model::search::{SearchEngine, SearchResults, TagTerm, sort_by_title},
    player::PlaybackEvent,
    render::Console,
};

const HELP_TEXT: &str = "\
Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist
    CLEAR_PLAYLIST <playlist_name> - Removes all video from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_WITH_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    HELP - Displays help.
    EXIT - Terminates the program execution.";

const PLAY_CHOICE_PROMPT: [&str; 2] = [
    "Would you like to play any of the above? If yes, specify the number of the video.",
    "If your answer is not a valid number, we will assume it's a no.",
];

pub(crate) const FAREWELL: &str =
    "Video player has now terminated its execution. Thank you and goodbye!";

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppCommand {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    Stop,
    PlayRandom,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    ShowAllPlaylists,
    ShowPlaylist(String),
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    SearchVideos(String),
    SearchVideosWithTag(String),
    Help,
    ExitApplication,
    Usage {
        command: &'static str,
        arguments: &'static str,
    },
    Unknown(String),
}

/// Whether the shell should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

/// Runs a single command and renders its outcome.
///
/// Search commands read the answer to their follow-up prompt from `input`.
///
/// # Errors
///
/// Returns an error only when reading `input` or writing to the console fails;
/// rejected operations are rendered as warnings.
pub(crate) fn handle_command<R: BufRead, W: Write>(
    app: &mut App,
    command: AppCommand,
    input: &mut R,
    console: &mut Console<W>,
) -> Result<Flow> {
    debug!(?command, "handling command");

    match command {
        AppCommand::NumberOfVideos => {
            console.line(format!("{} videos in the library", app.catalog.len()))?;
        }
        AppCommand::ShowAllVideos => {
            if app.catalog.is_empty() {
                console.line("No videos available")?;
            } else {
                let mut videos = app.catalog.all_videos().to_vec();
                sort_by_title(&mut videos);

                console.line("Here's a list of all available videos:")?;
                console.videos(&videos)?;
            }
        }

        AppCommand::Play(video_id) => match app.player.play(&app.catalog, &video_id) {
            Ok(events) => render_playback(console, &events)?,
            Err(e) => console.warn(format!("Cannot play video: {e}"))?,
        },
        AppCommand::Stop => match app.player.stop() {
            Ok(event) => render_playback(console, &[event])?,
            Err(e) => console.warn(format!("Cannot stop video: {e}"))?,
        },
        AppCommand::PlayRandom => match app.player.play_random(&app.catalog) {
            Ok(events) => render_playback(console, &events)?,
            Err(e) => console.warn(e.to_string())?,
        },
        AppCommand::Pause => match app.player.pause() {
            Ok(event) => render_playback(console, &[event])?,
            Err(e @ PlaybackError::AlreadyPaused(_)) => console.warn(e.to_string())?,
            Err(e) => console.warn(format!("Cannot pause video: {e}"))?,
        },
        AppCommand::Continue => match app.player.resume() {
            Ok(event) => render_playback(console, &[event])?,
            Err(e) => console.warn(format!("Cannot continue video: {e}"))?,
        },
        AppCommand::ShowPlaying => match app.player.current() {
            Ok(now) => {
                let paused = if now.paused { " - PAUSED" } else { "" };
                console.line(format!("Currently playing: {}{}", now.video, paused))?;
            }
            Err(e) => console.line(e.to_string())?,
        },

        AppCommand::CreatePlaylist(name) => match app.playlists.create(&name) {
            Ok(_) => console.line(format!("Successfully created new playlist: {name}"))?,
            Err(e) => console.warn(format!("Cannot create playlist: {e}"))?,
        },
        AppCommand::AddToPlaylist { playlist, video_id } => {
            add_to_playlist(app, console, &playlist, &video_id)?;
        }
        AppCommand::ShowAllPlaylists => {
            if app.playlists.is_empty() {
                console.line("No playlists exist yet")?;
            } else {
                console.line("Showing all playlists:")?;
                for playlist in app.playlists.list_all() {
                    console.line(playlist.name())?;
                }
            }
        }
        AppCommand::ShowPlaylist(name) => match app.playlists.get(&name) {
            Ok(playlist) => {
                console.line(format!("Showing playlist: {name}"))?;
                if playlist.is_empty() {
                    console.line("No videos here yet")?;
                } else {
                    console.videos(playlist.list())?;
                }
            }
            Err(e) => console.warn(format!("Cannot show playlist {name}: {e}"))?,
        },
        AppCommand::RemoveFromPlaylist { playlist, video_id } => {
            remove_from_playlist(app, console, &playlist, &video_id)?;
        }
        AppCommand::ClearPlaylist(name) => match app.playlists.get_mut(&name) {
            Ok(playlist) => {
                playlist.clear();
                console.line(format!("Successfully removed all videos from {name}"))?;
            }
            Err(e) => console.warn(format!("Cannot clear playlist {name}: {e}"))?,
        },
        AppCommand::DeletePlaylist(name) => match app.playlists.delete(&name) {
            Ok(_) => console.line(format!("Deleted playlist: {name}"))?,
            Err(e) => console.warn(format!("Cannot delete playlist {name}: {e}"))?,
        },

        AppCommand::SearchVideos(term) => {
            let matches = SearchEngine::new(&app.catalog).by_title(&term);
            present_results(app, &term, SearchResults::new(matches), input, console)?;
        }
        AppCommand::SearchVideosWithTag(term) => {
            let matches = TagTerm::parse(&term)
                .map(|tag| SearchEngine::new(&app.catalog).by_tag(&tag))
                .unwrap_or_default();
            present_results(app, &term, SearchResults::new(matches), input, console)?;
        }

        AppCommand::Help => console.line(HELP_TEXT)?,
        AppCommand::ExitApplication => {
            console.line(FAREWELL)?;
            return Ok(Flow::Exit);
        }
        AppCommand::Usage { command, arguments } => {
            console.warn(format!(
                "Please enter {command} command followed by {arguments}."
            ))?;
        }
        AppCommand::Unknown(line) => {
            warn!(line = %line, "unknown command");
            console.warn(
                "Please enter a valid command, type HELP for a list of available commands.",
            )?;
        }
    }

    debug!(state = ?app.player.state(), "command handled");
    Ok(Flow::Continue)
}

fn render_playback<W: Write>(console: &mut Console<W>, events: &[PlaybackEvent]) -> Result<()> {
    for event in events {
        let line = match event {
            PlaybackEvent::Stopping(video, reason) => {
                debug!(video_id = %video.id, ?reason, "stopping");
                format!("Stopping video: {}", video.title)
            }
            PlaybackEvent::Playing(video) => format!("Playing video: {}", video.title),
            PlaybackEvent::Pausing(video) => format!("Pausing video: {}", video.title),
            PlaybackEvent::Continuing(video) => format!("Continuing video: {}", video.title),
        };
        console.line(line)?;
    }
    Ok(())
}

/// Adds a catalog video to a playlist.
///
/// The playlist is checked before the video, so a missing playlist is
/// reported even when the video is missing too.
fn add_to_playlist<W: Write>(
    app: &mut App,
    console: &mut Console<W>,
    name: &str,
    video_id: &str,
) -> Result<()> {
    let playlist = match app.playlists.get_mut(name) {
        Ok(playlist) => playlist,
        Err(e) => return console.warn(format!("Cannot add video to {name}: {e}")),
    };
    let Some(video) = app.catalog.video_by_id(video_id) else {
        let e = PlaylistError::VideoNotFound;
        return console.warn(format!("Cannot add video to {name}: {e}"));
    };

    match playlist.add_video(Rc::clone(video)) {
        Ok(()) => {
            debug!(playlist = name, videos = playlist.len(), "video added to playlist");
            console.line(format!("Added video to {name}: {}", video.title))
        }
        Err(e) => console.warn(format!("Cannot add {} to {name}: {e}", video.title)),
    }
}

/// Removes a video from a playlist.
///
/// Checks run in the order playlist, catalog video, playlist membership.
fn remove_from_playlist<W: Write>(
    app: &mut App,
    console: &mut Console<W>,
    name: &str,
    video_id: &str,
) -> Result<()> {
    let result = app.playlists.get_mut(name).and_then(|playlist| {
        if app.catalog.video_by_id(video_id).is_none() {
            return Err(PlaylistError::VideoNotFound);
        }
        playlist.remove_video(video_id)
    });

    match result {
        Ok(video) => console.line(format!("Removed video from {name}: {}", video.title)),
        Err(e) => console.warn(format!("Cannot remove video from {name}: {e}")),
    }
}

/// Shows search results and offers to play one of them.
fn present_results<R: BufRead, W: Write>(
    app: &mut App,
    term: &str,
    results: SearchResults,
    input: &mut R,
    console: &mut Console<W>,
) -> Result<()> {
    if results.is_empty() {
        return console.line(format!("No search results for {term}"));
    }

    console.line(format!("Here are the results for {term}:"))?;
    console.numbered_videos(results.videos())?;
    for line in PLAY_CHOICE_PROMPT {
        console.line(line)?;
    }

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read search result choice")?;

    match results.resolve_choice(&answer) {
        Some(video) => {
            let events = app.player.play_video(Rc::clone(video));
            render_playback(console, &events)?;
        }
        None => debug!(answer = answer.trim(), "no search result chosen"),
    }

    Ok(())
}
