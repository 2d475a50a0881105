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

//! Playlist registry.
//!
//! Owns every playlist of the session. Playlist names are unique under case
//! folding: the registry is keyed by the lowercased name while each playlist
//! keeps the casing it was created with for display.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{error::PlaylistError, model::playlist::Playlist};

#[derive(Debug, Default)]
pub(crate) struct PlaylistRegistry {
    playlists: BTreeMap<String, Playlist>,
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}

impl PlaylistRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Creates a new, empty playlist.
    ///
    /// # Errors
    ///
    /// Returns [`PlaylistError::NameTaken`] if a playlist with the same name,
    /// ignoring case, already exists.
    pub(crate) fn create(&mut self, name: &str) -> Result<&Playlist, PlaylistError> {
        let key = fold(name);
        if self.playlists.contains_key(&key) {
            return Err(PlaylistError::NameTaken);
        }

        debug!(name, "playlist created");
        Ok(&*self.playlists.entry(key).or_insert_with(|| Playlist::new(name)))
    }

    pub(crate) fn get(&self, name: &str) -> Result<&Playlist, PlaylistError> {
        self.playlists.get(&fold(name)).ok_or(PlaylistError::NotFound)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Result<&mut Playlist, PlaylistError> {
        self.playlists
            .get_mut(&fold(name))
            .ok_or(PlaylistError::NotFound)
    }

    /// Deletes a playlist, returning it.
    pub(crate) fn delete(&mut self, name: &str) -> Result<Playlist, PlaylistError> {
        let playlist = self
            .playlists
            .remove(&fold(name))
            .ok_or(PlaylistError::NotFound)?;

        debug!(name = playlist.name(), "playlist deleted");
        Ok(playlist)
    }

    /// All playlists, ordered by name ignoring case.
    pub(crate) fn list_all(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(registry: &PlaylistRegistry) -> Vec<&str> {
        registry.list_all().map(Playlist::name).collect()
    }

    #[test]
    fn create_keeps_original_casing() {
        let mut registry = PlaylistRegistry::new();

        let playlist = registry.create("My_Cool_PLAYLIST").unwrap();

        assert_eq!(playlist.name(), "My_Cool_PLAYLIST");
        assert!(playlist.is_empty());
    }

    #[test]
    fn names_are_unique_ignoring_case() {
        let mut registry = PlaylistRegistry::new();
        registry.create("Foo").unwrap();

        assert_eq!(registry.create("fOO").unwrap_err(), PlaylistError::NameTaken);
        assert_eq!(names(&registry), ["Foo"]);
    }

    #[test]
    fn lookup_ignores_case() {
        let mut registry = PlaylistRegistry::new();
        registry.create("Foo").unwrap();

        assert_eq!(registry.get("FOO").unwrap().name(), "Foo");
        assert_eq!(registry.get_mut("foo").unwrap().name(), "Foo");
        assert_eq!(registry.get("bar").unwrap_err(), PlaylistError::NotFound);
    }

    #[test]
    fn delete_removes_playlist() {
        let mut registry = PlaylistRegistry::new();
        registry.create("Foo").unwrap();

        let deleted = registry.delete("foo").unwrap();

        assert_eq!(deleted.name(), "Foo");
        assert!(registry.is_empty());
        assert_eq!(registry.delete("foo").unwrap_err(), PlaylistError::NotFound);
    }

    #[test]
    fn deleted_name_can_be_reused() {
        let mut registry = PlaylistRegistry::new();
        registry.create("Foo").unwrap();
        registry.delete("FOO").unwrap();

        assert_eq!(registry.create("fOo").unwrap().name(), "fOo");
    }

    #[test]
    fn list_all_sorts_ignoring_case() {
        let mut registry = PlaylistRegistry::new();
        for name in ["charlie", "Bravo", "alpha", "Delta"] {
            registry.create(name).unwrap();
        }

        assert_eq!(names(&registry), ["alpha", "Bravo", "charlie", "Delta"]);
    }
}
