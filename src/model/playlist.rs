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

//! User playlists.
//!
//! A playlist is a named, ordered list of references to catalog videos. A
//! video may appear at most once in a playlist; membership is decided by video
//! id alone.

use std::rc::Rc;

use crate::{error::PlaylistError, model::Video};

#[derive(Debug)]
pub(crate) struct Playlist {
    name: String,
    videos: Vec<Rc<Video>>,
}

impl Playlist {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            videos: vec![],
        }
    }

    /// The name as it was entered when the playlist was created.
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Appends a video to the end of the playlist.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::Duplicate`] if a video with the same id is
    /// already in the playlist; the playlist is left unchanged.
    pub(crate) fn add_video(&mut self, video: Rc<Video>) -> Result<(), PlaylistError> {
        if self.contains(&video.id) {
            return Err(PlaylistError::Duplicate);
        }

        self.videos.push(video);
        Ok(())
    }

    /// Removes a video, keeping the remaining entries in order.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::NotInPlaylist`] if no video with this id is in
    /// the playlist.
    pub(crate) fn remove_video(&mut self, video_id: &str) -> Result<Rc<Video>, PlaylistError> {
        let idx = self
            .videos
            .iter()
            .position(|v| v.id == video_id)
            .ok_or(PlaylistError::NotInPlaylist)?;

        Ok(self.videos.remove(idx))
    }

    pub(crate) fn clear(&mut self) {
        self.videos.clear();
    }

    pub(crate) fn list(&self) -> &[Rc<Video>] {
        &self.videos
    }

    pub(crate) fn contains(&self, video_id: &str) -> bool {
        self.videos.iter().any(|v| v.id == video_id)
    }

    pub(crate) fn len(&self) -> usize {
        self.videos.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
