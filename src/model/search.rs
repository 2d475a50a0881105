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

//! Media search.
//!
//! This module filters the catalog by title or tag and orders the matches for
//! presentation. A search is followed by an interactive choice, where the user
//! may pick one of the numbered results to play.

use std::rc::Rc;

use crate::model::{Video, catalog::VideoCatalog};

/// A search term known to be shaped like a tag.
///
/// Tag searches only make sense for terms that start with the tag marker, so
/// the check is made once, when the term is constructed, rather than by every
/// caller of [`SearchEngine::by_tag`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TagTerm(String);

impl TagTerm {
    pub(crate) const MARKER: char = '#';

    /// Returns `None` unless `term` starts with [`TagTerm::MARKER`].
    ///
    /// The term is lowercased but deliberately not trimmed.
    pub(crate) fn parse(term: &str) -> Option<Self> {
        term.starts_with(Self::MARKER)
            .then(|| Self(term.to_lowercase()))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

pub(crate) struct SearchEngine<'a> {
    catalog: &'a VideoCatalog,
}

impl<'a> SearchEngine<'a> {
    pub(crate) fn new(catalog: &'a VideoCatalog) -> Self {
        Self { catalog }
    }

    /// Videos whose title contains `term`, ignoring case and the whitespace
    /// around `term`, in catalog order.
    pub(crate) fn by_title(&self, term: &str) -> Vec<Rc<Video>> {
        let needle = term.trim().to_lowercase();

        self.catalog
            .all_videos()
            .iter()
            .filter(|v| v.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Videos with at least one tag containing `tag`, ignoring case, in
    /// catalog order.
    pub(crate) fn by_tag(&self, tag: &TagTerm) -> Vec<Rc<Video>> {
        self.catalog
            .all_videos()
            .iter()
            .filter(|v| {
                v.tags
                    .iter()
                    .any(|t| t.to_lowercase().contains(tag.as_str()))
            })
            .cloned()
            .collect()
    }
}

/// Sorts videos by title ignoring case.
///
/// The sort is stable, so videos with equal titles keep their catalog order.
pub(crate) fn sort_by_title(videos: &mut [Rc<Video>]) {
    videos.sort_by_cached_key(|v| v.title.to_lowercase());
}

/// The ordered matches of a search, ready for presentation.
#[derive(Debug)]
pub(crate) struct SearchResults {
    videos: Vec<Rc<Video>>,
}

impl SearchResults {
    pub(crate) fn new(mut videos: Vec<Rc<Video>>) -> Self {
        sort_by_title(&mut videos);
        Self { videos }
    }

    pub(crate) fn videos(&self) -> &[Rc<Video>] {
        &self.videos
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Resolves the user's answer to the "play one of these" prompt.
    ///
    /// The answer is a 1-based position in the results. Anything that is not
    /// a number in range means no selection was made.
    pub(crate) fn resolve_choice(&self, input: &str) -> Option<&Rc<Video>> {
        let choice: usize = input.trim().parse().ok()?;
        choice.checked_sub(1).and_then(|idx| self.videos.get(idx))
    }
}
