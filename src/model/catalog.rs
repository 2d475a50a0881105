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

//! Video catalog.
//!
//! This module provides the read-only library of videos. The catalog is loaded
//! once at startup from a text file with one video per line:
//!
//! ```text
//! Funny Dogs | funny_dogs_video_id | #dog , #animal
//! Video about nothing | nothing_video_id |
//! ```
//!
//! The order of the file is the catalog order, which is also the order used
//! to break ties when sorting videos by title.

use std::{collections::HashMap, fs, path::Path, rc::Rc};

use tracing::info;

use crate::{error::CatalogError, model::Video};

const FIELD_SEPARATOR: char = '|';
const TAG_SEPARATOR: char = ',';

#[derive(Debug, Default)]
pub(crate) struct VideoCatalog {
    videos: Vec<Rc<Video>>,
    index: HashMap<String, usize>,
}

impl VideoCatalog {
    /// Builds a catalog from videos already in catalog order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two videos share an id, the
    /// line number being the 1-based position of the second one.
    pub(crate) fn from_videos(videos: Vec<Video>) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();
        for (idx, video) in videos.into_iter().enumerate() {
            catalog.insert(idx + 1, video)?;
        }
        Ok(catalog)
    }

    /// Loads the catalog from a file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if any of its lines is
    /// not a valid catalog entry.
    pub(crate) fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::parse(&contents)?;
        info!(path = %path.display(), videos = catalog.len(), "catalog loaded");

        Ok(catalog)
    }

    /// Parses catalog entries of the form `title | id | tag, tag`.
    ///
    /// Blank lines are skipped. The tag field may be empty or missing
    /// altogether.
    pub(crate) fn parse(contents: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::default();

        for (idx, line) in contents.lines().enumerate() {
            let line_number = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            let mut fields = line.split(FIELD_SEPARATOR).map(str::trim);

            let title = fields.next().unwrap_or_default();
            let Some(id) = fields.next() else {
                return Err(CatalogError::Malformed {
                    line: line_number,
                    reason: "expected 'title | id | tags'",
                });
            };
            if id.is_empty() {
                return Err(CatalogError::Malformed {
                    line: line_number,
                    reason: "empty video id",
                });
            }

            let tags: Vec<String> = fields
                .next()
                .map(|tags| {
                    tags.split(TAG_SEPARATOR)
                        .map(str::trim)
                        .filter(|tag| !tag.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default();

            catalog.insert(line_number, Video::new(id, title, tags))?;
        }

        Ok(catalog)
    }

    fn insert(&mut self, line: usize, video: Video) -> Result<(), CatalogError> {
        if self.index.contains_key(&video.id) {
            return Err(CatalogError::DuplicateId { line, id: video.id });
        }

        self.index.insert(video.id.clone(), self.videos.len());
        self.videos.push(Rc::new(video));
        Ok(())
    }

    /// All videos, in catalog order.
    pub(crate) fn all_videos(&self) -> &[Rc<Video>] {
        &self.videos
    }

    pub(crate) fn video_by_id(&self, id: &str) -> Option<&Rc<Video>> {
        self.index.get(id).map(|&idx| &self.videos[idx])
    }

    pub(crate) fn len(&self) -> usize {
        self.videos.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = "\
Funny Dogs | funny_dogs_video_id | #dog , #animal
Amazing Cats | amazing_cats_video_id | #cat , #animal

Video about nothing | nothing_video_id |
Life at Google | life_at_google_video_id
";

    #[test]
    fn parses_entries_in_file_order() {
        let catalog = VideoCatalog::parse(CATALOG).unwrap();

        let ids: Vec<&str> = catalog.all_videos().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "funny_dogs_video_id",
                "amazing_cats_video_id",
                "nothing_video_id",
                "life_at_google_video_id"
            ]
        );
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn trims_fields_and_tags() {
        let catalog = VideoCatalog::parse(CATALOG).unwrap();

        let cats = catalog.video_by_id("amazing_cats_video_id").unwrap();
        assert_eq!(cats.title, "Amazing Cats");
        assert_eq!(cats.tags, ["#cat", "#animal"]);
    }

    #[test]
    fn empty_or_missing_tag_field_gives_no_tags() {
        let catalog = VideoCatalog::parse(CATALOG).unwrap();

        assert!(catalog.video_by_id("nothing_video_id").unwrap().tags.is_empty());
        assert!(catalog.video_by_id("life_at_google_video_id").unwrap().tags.is_empty());
    }

    #[test]
    fn unknown_id_is_not_found() {
        let catalog = VideoCatalog::parse(CATALOG).unwrap();

        assert!(catalog.video_by_id("does_not_exist").is_none());
    }

    #[test]
    fn rejects_line_without_id() {
        let err = VideoCatalog::parse("Funny Dogs | funny_dogs_video_id\nno separator\n").unwrap_err();

        assert!(matches!(err, CatalogError::Malformed { line: 2, .. }));
    }

    #[test]
    fn rejects_empty_id() {
        let err = VideoCatalog::parse("Funny Dogs |  | #dog\n").unwrap_err();

        assert!(matches!(err, CatalogError::Malformed { line: 1, .. }));
    }

    #[test]
    fn rejects_duplicate_id() {
        let err = VideoCatalog::parse("A | a |\nB | a |\n").unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateId { line: 2, ref id } if id == "a"));
    }

    #[test]
    fn empty_contents_give_empty_catalog() {
        let catalog = VideoCatalog::parse("").unwrap();

        assert!(catalog.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = VideoCatalog::load(Path::new("/nonexistent/vidshelf/videos.txt")).unwrap_err();

        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
