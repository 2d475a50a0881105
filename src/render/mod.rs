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

//! Text rendering for the command shell.
//!
//! The [`Console`] wraps the shell's output stream. Regular lines are written
//! as they are; warnings are coloured with the [`Theme`] when colour output is
//! enabled. Helpers in this module format the lists shared by several
//! commands.

use std::{io::Write, rc::Rc};

use anyhow::Result;
use crossterm::style::{Stylize, style};

use crate::{model::Video, theme::Theme};

pub(crate) struct Console<W: Write> {
    out: W,
    theme: Theme,
    colour: bool,
}

impl<W: Write> Console<W> {
    pub(crate) fn new(out: W, theme: Theme, colour: bool) -> Self {
        Self { out, theme, colour }
    }

    pub(crate) fn line(&mut self, text: impl AsRef<str>) -> Result<()> {
        writeln!(self.out, "{}", text.as_ref())?;
        Ok(())
    }

    pub(crate) fn warn(&mut self, text: impl AsRef<str>) -> Result<()> {
        let text = text.as_ref();
        if self.colour {
            writeln!(self.out, "{}", style(text).with(self.theme.warning_colour))?;
        } else {
            writeln!(self.out, "{}", text)?;
        }
        Ok(())
    }

    /// Writes the prompt without a line break, so the answer follows it.
    pub(crate) fn prompt(&mut self, text: &str) -> Result<()> {
        if self.colour {
            write!(self.out, "{}", style(text).with(self.theme.prompt_colour))?;
        } else {
            write!(self.out, "{}", text)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Writes one line per video.
    pub(crate) fn videos(&mut self, videos: &[Rc<Video>]) -> Result<()> {
        for video in videos {
            self.line(video.to_string())?;
        }
        Ok(())
    }

    /// Writes one `  n) video` line per video, numbered from 1.
    pub(crate) fn numbered_videos(&mut self, videos: &[Rc<Video>]) -> Result<()> {
        for (idx, video) in videos.iter().enumerate() {
            self.line(format!("  {}) {}", idx + 1, video))?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> Console<Vec<u8>> {
        Console::new(Vec::new(), Theme::default(), false)
    }

    #[test]
    fn plain_warning_is_unstyled() {
        let mut console = plain();
        console.warn("Cannot stop video: No video is currently playing").unwrap();

        assert_eq!(
            String::from_utf8(console.into_inner()).unwrap(),
            "Cannot stop video: No video is currently playing\n"
        );
    }

    #[test]
    fn coloured_warning_keeps_text() {
        let mut console = Console::new(Vec::new(), Theme::default(), true);
        console.warn("careful").unwrap();

        let out = String::from_utf8(console.into_inner()).unwrap();
        assert!(out.contains("careful"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn numbers_videos_from_one() {
        let videos = vec![
            Rc::new(Video::new("a", "Alpha", vec!["#x".to_string()])),
            Rc::new(Video::new("b", "Bravo", vec![])),
        ];
        let mut console = plain();
        console.numbered_videos(&videos).unwrap();

        assert_eq!(
            String::from_utf8(console.into_inner()).unwrap(),
            "  1) Alpha (a) [#x]\n  2) Bravo (b) []\n"
        );
    }
}
