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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, the videos of
//! the catalog and the playlists that reference them, together with the
//! search logic that runs over the catalog.

pub(crate) mod catalog;
pub(crate) mod playlist;
pub(crate) mod registry;
pub(crate) mod search;

use std::fmt;

/// A single entry of the video catalog.
///
/// Videos are immutable once the catalog has been loaded and are shared by
/// reference between the catalog, playlists, search results and the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Video {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) tags: Vec<String>,
}

impl Video {
    pub(crate) fn new(id: impl Into<String>, title: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            tags,
        }
    }
}

impl fmt::Display for Video {
    /// Formats a video as `title (id) [tag1 tag2]`, with empty brackets when
    /// the video has no tags.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) [{}]", self.title, self.id, self.tags.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_title_id_and_tags() {
        let video = Video::new(
            "amazing_cats_video_id",
            "Amazing Cats",
            vec!["#cat".to_string(), "#animal".to_string()],
        );

        assert_eq!(
            video.to_string(),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );
    }

    #[test]
    fn displays_empty_brackets_without_tags() {
        let video = Video::new("nothing_video_id", "Video about nothing", vec![]);

        assert_eq!(video.to_string(), "Video about nothing (nothing_video_id) []");
    }
}
