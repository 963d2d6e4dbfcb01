//! Proportional scrollbar rendering for the scroll frame.
//!
//! A [`Scrollbar`] draws a one-cell-wide (vertical) or one-cell-tall
//! (horizontal) track with a proportional thumb reflecting the viewport's
//! position inside the scroll region. It is a pure view: the scroll frame
//! owns the offset and passes it in at render time.

use crate::scrollframe::Orientation;
use lipgloss_extras::prelude::*;

/// A scrollbar bound to one orientation.
#[derive(Debug, Clone)]
pub struct Scrollbar {
    /// The axis this scrollbar reflects.
    pub orientation: Orientation,
    /// Glyph used for thumb cells.
    pub thumb: String,
    /// Glyph used for track cells.
    pub track: String,
    /// Style applied to thumb cells.
    pub thumb_style: Style,
    /// Style applied to track cells.
    pub track_style: Style,
}

impl Scrollbar {
    /// Creates a scrollbar with the default glyphs for the orientation.
    pub fn new(orientation: Orientation) -> Self {
        let (thumb, track) = match orientation {
            Orientation::Vertical => ("┃", "│"),
            Orientation::Horizontal => ("━", "─"),
        };
        Self {
            orientation,
            thumb: thumb.to_string(),
            track: track.to_string(),
            thumb_style: Style::new(),
            track_style: Style::new(),
        }
    }

    /// Applies one style to both thumb and track cells.
    pub fn with_style(mut self, style: Style) -> Self {
        self.thumb_style = style.clone();
        self.track_style = style;
        self
    }

    /// Renders the bar.
    ///
    /// `len` is the track length in cells, which is also the viewport extent
    /// along the scroll axis. `content_len` is the scroll region extent along
    /// that axis, and `offset` the current scroll position. When the content
    /// fits in the viewport the thumb fills the whole track.
    pub fn view(&self, len: usize, content_len: usize, offset: usize) -> String {
        if len == 0 {
            return String::new();
        }

        let (thumb_len, thumb_pos) = if content_len <= len {
            (len, 0)
        } else {
            let thumb_len = (len * len / content_len).max(1).min(len);
            let max_offset = content_len - len;
            let offset = offset.min(max_offset);
            // Rounded so the thumb reaches the far end exactly at max offset.
            let thumb_pos = (offset * (len - thumb_len) + max_offset / 2) / max_offset;
            (thumb_len, thumb_pos)
        };

        let mut cells = Vec::with_capacity(len);
        for i in 0..len {
            if i >= thumb_pos && i < thumb_pos + thumb_len {
                cells.push(self.thumb_style.clone().inline(true).render(&self.thumb));
            } else {
                cells.push(self.track_style.clone().inline(true).render(&self.track));
            }
        }

        match self.orientation {
            Orientation::Vertical => cells.join("\n"),
            Orientation::Horizontal => cells.concat(),
        }
    }
}
