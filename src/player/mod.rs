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

//! Video playback state.
//!
//! This module provides the [`PlaybackState`] machine used by the command
//! layer to track which video is loaded and whether it is paused. No media is
//! decoded here; every transition reports what happened as a list of
//! [`PlaybackEvent`]s for the caller to render.
//!
//! # States
//!
//! * [`PlayerState::Stopped`] - nothing loaded, the initial state.
//! * [`PlayerState::Playing`] - a video is loaded and running.
//! * [`PlayerState::Paused`] - a video is loaded and paused.
//!
//! Playing a video while another one is loaded stops the old one first, so a
//! single `play` may report both a [`PlaybackEvent::Stopping`] and a
//! [`PlaybackEvent::Playing`].

use std::rc::Rc;

use rand::seq::IndexedRandom;
use tracing::debug;

use crate::{
    error::PlaybackError,
    model::{Video, catalog::VideoCatalog},
};

/// Represents the current playback status.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

/// Why a video stopped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum StopReason {
    /// The user asked for playback to stop.
    Requested,
    /// Another video was started in its place.
    Replaced,
}

/// Notifications emitted by playback transitions, in the order they happened.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum PlaybackEvent {
    Stopping(Rc<Video>, StopReason),
    Playing(Rc<Video>),
    Pausing(Rc<Video>),
    Continuing(Rc<Video>),
}

/// The loaded video and whether it is paused.
#[derive(Debug, PartialEq)]
pub(crate) struct NowPlaying<'a> {
    pub(crate) video: &'a Rc<Video>,
    pub(crate) paused: bool,
}

#[derive(Debug, Default)]
pub(crate) struct PlaybackState {
    current: Option<Rc<Video>>,
    paused: bool,
}

impl PlaybackState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn state(&self) -> PlayerState {
        match (&self.current, self.paused) {
            (None, _) => PlayerState::Stopped,
            (Some(_), true) => PlayerState::Paused,
            (Some(_), false) => PlayerState::Playing,
        }
    }

    /// Plays the catalog video with the given id.
    ///
    /// Any video already loaded, paused or not, is stopped first, even when it
    /// is the same video.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::NotFound`] if the catalog has no such video,
    /// in which case the current video keeps playing.
    pub(crate) fn play(
        &mut self,
        catalog: &VideoCatalog,
        video_id: &str,
    ) -> Result<Vec<PlaybackEvent>, PlaybackError> {
        let video = catalog
            .video_by_id(video_id)
            .ok_or(PlaybackError::NotFound)?;

        Ok(self.load(Rc::clone(video)))
    }

    /// Plays a video picked uniformly at random from the whole catalog.
    pub(crate) fn play_random(
        &mut self,
        catalog: &VideoCatalog,
    ) -> Result<Vec<PlaybackEvent>, PlaybackError> {
        let video = catalog
            .all_videos()
            .choose(&mut rand::rng())
            .ok_or(PlaybackError::EmptyCatalog)?;

        Ok(self.load(Rc::clone(video)))
    }

    /// Plays a video the caller already holds, such as a search result.
    pub(crate) fn play_video(&mut self, video: Rc<Video>) -> Vec<PlaybackEvent> {
        self.load(video)
    }

    fn load(&mut self, video: Rc<Video>) -> Vec<PlaybackEvent> {
        let mut events = Vec::with_capacity(2);

        if let Some(previous) = self.current.take() {
            debug!(video_id = %previous.id, "stopping video before playing another");
            events.push(PlaybackEvent::Stopping(previous, StopReason::Replaced));
        }

        debug!(video_id = %video.id, "playing video");
        self.current = Some(Rc::clone(&video));
        self.paused = false;
        events.push(PlaybackEvent::Playing(video));

        events
    }

    pub(crate) fn stop(&mut self) -> Result<PlaybackEvent, PlaybackError> {
        let video = self.current.take().ok_or(PlaybackError::NoneCurrent)?;
        self.paused = false;

        debug!(video_id = %video.id, "video stopped");
        Ok(PlaybackEvent::Stopping(video, StopReason::Requested))
    }

    /// Pauses the loaded video.
    ///
    /// # Errors
    ///
    /// * [`PlaybackError::NoneCurrent`] if nothing is loaded.
    /// * [`PlaybackError::AlreadyPaused`] if the video is already paused.
    pub(crate) fn pause(&mut self) -> Result<PlaybackEvent, PlaybackError> {
        let video = self.current.as_ref().ok_or(PlaybackError::NoneCurrent)?;
        if self.paused {
            return Err(PlaybackError::AlreadyPaused(Rc::clone(video)));
        }

        debug!(video_id = %video.id, "video paused");
        self.paused = true;
        Ok(PlaybackEvent::Pausing(Rc::clone(video)))
    }

    /// Continues the loaded video after a pause.
    ///
    /// # Errors
    ///
    /// * [`PlaybackError::NoneCurrent`] if nothing is loaded.
    /// * [`PlaybackError::NotPaused`] if the video is playing already.
    pub(crate) fn resume(&mut self) -> Result<PlaybackEvent, PlaybackError> {
        let video = self.current.as_ref().ok_or(PlaybackError::NoneCurrent)?;
        if !self.paused {
            return Err(PlaybackError::NotPaused);
        }

        debug!(video_id = %video.id, "video continued");
        self.paused = false;
        Ok(PlaybackEvent::Continuing(Rc::clone(video)))
    }

    pub(crate) fn current(&self) -> Result<NowPlaying<'_>, PlaybackError> {
        self.current
            .as_ref()
            .map(|video| NowPlaying {
                video,
                paused: self.paused,
            })
            .ok_or(PlaybackError::NoneCurrent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> VideoCatalog {
        VideoCatalog::from_videos(vec![
            Video::new("a", "Alpha", vec![]),
            Video::new("b", "Bravo", vec!["#b".to_string()]),
        ])
        .unwrap()
    }

    fn current_id(player: &PlaybackState) -> Option<&str> {
        player.current().ok().map(|now| now.video.id.as_str())
    }

    #[test]
    fn starts_stopped() {
        let player = PlaybackState::new();

        assert_eq!(player.state(), PlayerState::Stopped);
        assert_eq!(player.current().unwrap_err(), PlaybackError::NoneCurrent);
    }

    #[test]
    fn play_unknown_video_leaves_state_unchanged() {
        let catalog = catalog();
        let mut player = PlaybackState::new();

        assert_eq!(player.play(&catalog, "zzz").unwrap_err(), PlaybackError::NotFound);
        assert_eq!(player.state(), PlayerState::Stopped);

        player.play(&catalog, "a").unwrap();
        player.pause().unwrap();

        assert_eq!(player.play(&catalog, "zzz").unwrap_err(), PlaybackError::NotFound);
        assert_eq!(current_id(&player), Some("a"));
        assert_eq!(player.state(), PlayerState::Paused);
    }

    #[test]
    fn play_from_idle_only_reports_playing() {
        let catalog = catalog();
        let mut player = PlaybackState::new();

        let events = player.play(&catalog, "a").unwrap();

        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], PlaybackEvent::Playing(v) if v.id == "a"));
        assert_eq!(player.state(), PlayerState::Playing);
    }

    #[test]
    fn play_over_another_video_stops_it_first() {
        let catalog = catalog();
        let mut player = PlaybackState::new();
        player.play(&catalog, "a").unwrap();

        let events = player.play(&catalog, "b").unwrap();

        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], PlaybackEvent::Stopping(v, StopReason::Replaced) if v.id == "a"));
        assert!(matches!(&events[1], PlaybackEvent::Playing(v) if v.id == "b"));
        assert_eq!(current_id(&player), Some("b"));
        assert!(!player.current().unwrap().paused);
    }

    #[test]
    fn play_while_paused_restarts_unpaused() {
        let catalog = catalog();
        let mut player = PlaybackState::new();
        player.play(&catalog, "a").unwrap();
        player.pause().unwrap();

        let events = player.play(&catalog, "a").unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(player.state(), PlayerState::Playing);
    }

    #[test]
    fn stop_clears_current_video() {
        let catalog = catalog();
        let mut player = PlaybackState::new();
        player.play(&catalog, "a").unwrap();
        player.pause().unwrap();

        let event = player.stop().unwrap();

        assert!(matches!(event, PlaybackEvent::Stopping(v, StopReason::Requested) if v.id == "a"));
        assert_eq!(player.state(), PlayerState::Stopped);
        assert_eq!(player.stop().unwrap_err(), PlaybackError::NoneCurrent);
    }

    #[test]
    fn second_pause_is_rejected() {
        let catalog = catalog();
        let mut player = PlaybackState::new();
        player.play(&catalog, "a").unwrap();

        assert!(matches!(player.pause().unwrap(), PlaybackEvent::Pausing(_)));
        assert!(matches!(
            player.pause().unwrap_err(),
            PlaybackError::AlreadyPaused(v) if v.id == "a"
        ));
        assert_eq!(player.state(), PlayerState::Paused);
    }

    #[test]
    fn pause_and_resume_need_a_video() {
        let mut player = PlaybackState::new();

        assert_eq!(player.pause().unwrap_err(), PlaybackError::NoneCurrent);
        assert_eq!(player.resume().unwrap_err(), PlaybackError::NoneCurrent);
    }

    #[test]
    fn resume_requires_pause() {
        let catalog = catalog();
        let mut player = PlaybackState::new();
        player.play(&catalog, "a").unwrap();

        assert_eq!(player.resume().unwrap_err(), PlaybackError::NotPaused);

        player.pause().unwrap();
        assert!(matches!(player.resume().unwrap(), PlaybackEvent::Continuing(_)));
        assert_eq!(player.state(), PlayerState::Playing);
    }

    #[test]
    fn random_play_on_empty_catalog_fails() {
        let catalog = VideoCatalog::default();
        let mut player = PlaybackState::new();

        assert_eq!(
            player.play_random(&catalog).unwrap_err(),
            PlaybackError::EmptyCatalog
        );
    }

    #[test]
    fn random_play_picks_a_catalog_video() {
        let catalog = catalog();
        let mut player = PlaybackState::new();
        player.play(&catalog, "a").unwrap();

        let events = player.play_random(&catalog).unwrap();

        assert!(matches!(events[0], PlaybackEvent::Stopping(_, StopReason::Replaced)));
        let id = current_id(&player).unwrap();
        assert!(catalog.video_by_id(id).is_some());
    }

    #[test]
    fn random_play_reaches_every_video() {
        let catalog = catalog();
        let mut player = PlaybackState::new();

        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            player.play_random(&catalog).unwrap();
            seen.insert(current_id(&player).unwrap().to_string());
        }

        assert_eq!(seen.len(), 2);
    }
}
