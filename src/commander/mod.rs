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

//! Command-line input parsing.
//!
//! This module turns a line typed at the shell prompt into an [`AppCommand`].
//! Command names are matched ignoring case; arguments are separated by
//! whitespace and passed through as typed.

use crate::actions::commands::AppCommand;

/// Parses a line of input.
///
/// Returns `None` for a blank line. Known commands with the wrong number of
/// arguments parse to [`AppCommand::Usage`], anything else to
/// [`AppCommand::Unknown`].
pub(crate) fn parse_command(buffer: &str) -> Option<AppCommand> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();
    let (name, args) = parts.split_first()?;
    let name = name.to_uppercase();

    let command = match (name.as_str(), args) {
        ("NUMBER_OF_VIDEOS", []) => AppCommand::NumberOfVideos,
        ("SHOW_ALL_VIDEOS", []) => AppCommand::ShowAllVideos,

        ("PLAY", [video_id]) => AppCommand::Play(video_id.to_string()),
        ("PLAY", _) => usage("PLAY", "video_id"),
        ("STOP", []) => AppCommand::Stop,
        ("PLAY_RANDOM", []) => AppCommand::PlayRandom,
        ("PAUSE", []) => AppCommand::Pause,
        ("CONTINUE", []) => AppCommand::Continue,
        ("SHOW_PLAYING", []) => AppCommand::ShowPlaying,

        ("CREATE_PLAYLIST", [playlist]) => AppCommand::CreatePlaylist(playlist.to_string()),
        ("CREATE_PLAYLIST", _) => usage("CREATE_PLAYLIST", "playlist_name"),
        ("ADD_TO_PLAYLIST", [playlist, video_id]) => AppCommand::AddToPlaylist {
            playlist: playlist.to_string(),
            video_id: video_id.to_string(),
        },
        ("ADD_TO_PLAYLIST", _) => usage("ADD_TO_PLAYLIST", "playlist_name and video_id"),
        ("SHOW_ALL_PLAYLISTS", []) => AppCommand::ShowAllPlaylists,
        ("SHOW_PLAYLIST", [playlist]) => AppCommand::ShowPlaylist(playlist.to_string()),
        ("SHOW_PLAYLIST", _) => usage("SHOW_PLAYLIST", "playlist_name"),
        ("REMOVE_FROM_PLAYLIST", [playlist, video_id]) => AppCommand::RemoveFromPlaylist {
            playlist: playlist.to_string(),
            video_id: video_id.to_string(),
        },
        ("REMOVE_FROM_PLAYLIST", _) => {
            usage("REMOVE_FROM_PLAYLIST", "playlist_name and video_id")
        }
        ("CLEAR_PLAYLIST", [playlist]) => AppCommand::ClearPlaylist(playlist.to_string()),
        ("CLEAR_PLAYLIST", _) => usage("CLEAR_PLAYLIST", "playlist_name"),
        ("DELETE_PLAYLIST", [playlist]) => AppCommand::DeletePlaylist(playlist.to_string()),
        ("DELETE_PLAYLIST", _) => usage("DELETE_PLAYLIST", "playlist_name"),

        ("SEARCH_VIDEOS", [_, ..]) => AppCommand::SearchVideos(args.join(" ")),
        ("SEARCH_VIDEOS", []) => usage("SEARCH_VIDEOS", "search_term"),
        ("SEARCH_VIDEOS_WITH_TAG", [tag]) => AppCommand::SearchVideosWithTag(tag.to_string()),
        ("SEARCH_VIDEOS_WITH_TAG", _) => usage("SEARCH_VIDEOS_WITH_TAG", "video_tag"),

        ("HELP", _) => AppCommand::Help,
        ("EXIT", _) => AppCommand::ExitApplication,

        _ => AppCommand::Unknown(buffer.trim().to_string()),
    };

    Some(command)
}

fn usage(command: &'static str, arguments: &'static str) -> AppCommand {
    AppCommand::Usage { command, arguments }
}
