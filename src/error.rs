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

//! Typed failures of the catalog, player and playlist operations.
//!
//! Every failure leaves the state it was raised against unmodified. The
//! messages are the reasons shown to the user after the command prefix, for
//! example `Cannot play video: Video does not exist`.

use std::{path::PathBuf, rc::Rc};

use thiserror::Error;

use crate::model::Video;

#[derive(Debug, Error, PartialEq)]
pub(crate) enum PlaybackError {
    #[error("Video does not exist")]
    NotFound,

    #[error("No video is currently playing")]
    NoneCurrent,

    #[error("Video already paused: {}", .0.title)]
    AlreadyPaused(Rc<Video>),

    #[error("Video is not paused")]
    NotPaused,

    #[error("No videos available")]
    EmptyCatalog,
}

#[derive(Debug, Error, PartialEq)]
pub(crate) enum PlaylistError {
    #[error("Playlist does not exist")]
    NotFound,

    #[error("A playlist with the same name already exists")]
    NameTaken,

    #[error("Video already exists in the playlist")]
    Duplicate,

    #[error("Video is not in playlist")]
    NotInPlaylist,

    #[error("Video does not exist")]
    VideoNotFound,
}

#[derive(Debug, Error)]
pub(crate) enum CatalogError {
    #[error("Failed to read catalog file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog entry on line {line}: {reason}")]
    Malformed { line: usize, reason: &'static str },

    #[error("Duplicate video id '{id}' on line {line}")]
    DuplicateId { line: usize, id: String },
}
