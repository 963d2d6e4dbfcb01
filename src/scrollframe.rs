//! Scrollable container widget.
//!
//! This module provides [`Model`], a composite container that owns a
//! viewport, an inner [`ContentFrame`] for user widgets, and an optional
//! [`Scrollbar`]. The three are kept in sync as children are added, removed,
//! or resized: content changes schedule a short debounce tick, and the
//! geometry recompute runs once when the burst settles.
//!
//! # Quick start
//!
//! ```rust
//! use bubbletea_scrollframe::{Orientation, ScrollableFrame};
//!
//! let mut frame = ScrollableFrame::new(30, 8).with_scrollbar(true);
//!
//! // Attach children (whatever their `view()` rendered).
//! for i in 1..=20 {
//!     let _cmd = frame.push_child(format!("button {}", i));
//! }
//!
//! // Scroll and render.
//! frame.scroll_forward(3);
//! let output = frame.view();
//! assert!(!output.is_empty());
//!
//! // Flip the scroll axis at runtime.
//! frame.set_orientation(Orientation::Horizontal);
//! ```
//!
//! # Integration with Bubble Tea
//!
//! The widget follows the sub-component pattern: forward messages from your
//! application's `update()` and call [`Model::view`] from `view()`. Mouse
//! events go through [`Model::mouse`]; wheel input only scrolls while the
//! pointer is over the widget rectangle (see [`Model::set_position`]).

use crate::frame::ContentFrame;
use crate::key::{self, KeyMap as KeyMapTrait};
use crate::scrollbar::Scrollbar;
use bubbletea_rs::{tick, Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, MouseEvent, MouseEventKind};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use unicode_width::UnicodeWidthChar;

// --- Internal ID Management ---
// Ensures recompute messages are only received by the frame that sent them.
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Delay used to coalesce bursts of content changes into one recompute.
const RESIZE_DEBOUNCE: Duration = Duration::from_millis(10);

/// Number of cells a wheel notch scrolls by default.
const DEFAULT_WHEEL_DELTA: usize = 3;

/// The axis a scroll frame scrolls along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Content scrolls up and down; the cross axis is the width.
    Vertical,
    /// Content scrolls left and right; the cross axis is the height.
    Horizontal,
}

impl Orientation {
    /// Returns `true` for [`Orientation::Vertical`].
    pub fn is_vertical(self) -> bool {
        matches!(self, Orientation::Vertical)
    }
}

// --- Messages ---

/// Message scheduled by the resize debounce timer.
///
/// Each content change bumps the frame's sequence number and schedules one
/// of these; only the message carrying the latest sequence triggers a
/// geometry recompute, so a burst of changes settles into a single update.
#[derive(Debug, Clone)]
pub struct RecomputeMsg {
    /// Identifier of the frame instance this message targets.
    pub id: i64,
    /// Sequence tag; stale tags are ignored.
    pub seq: usize,
}

// --- Key bindings ---

/// Keyboard bindings for scroll navigation.
///
/// Only the bindings for the active axis have an effect: up/down (and
/// paging) in vertical orientation, left/right (and paging) in horizontal
/// orientation.
#[derive(Debug, Clone)]
pub struct ScrollFrameKeyMap {
    /// Scroll up one line. Defaults: `↑`, `k`.
    pub up: key::Binding,
    /// Scroll down one line. Defaults: `↓`, `j`.
    pub down: key::Binding,
    /// Scroll left one column. Defaults: `←`, `h`.
    pub left: key::Binding,
    /// Scroll right one column. Defaults: `→`, `l`.
    pub right: key::Binding,
    /// Scroll back one page. Defaults: `PgUp`, `b`.
    pub page_up: key::Binding,
    /// Scroll forward one page. Defaults: `PgDn`, `f`, space.
    pub page_down: key::Binding,
}

impl Default for ScrollFrameKeyMap {
    fn default() -> Self {
        Self {
            up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
            down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            left: key::Binding::new(vec![KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "left"),
            right: key::Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
                .with_help("→/l", "right"),
            page_up: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Char('b')])
                .with_help("b/pgup", "page back"),
            page_down: key::Binding::new(vec![
                KeyCode::PageDown,
                KeyCode::Char('f'),
                KeyCode::Char(' '),
            ])
            .with_help("f/pgdn", "page forward"),
        }
    }
}

impl KeyMapTrait for ScrollFrameKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.up, &self.down, &self.left, &self.right]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.up, &self.down],
            vec![&self.left, &self.right],
            vec![&self.page_up, &self.page_down],
        ]
    }
}

// --- Model ---

/// A scrollable container widget.
///
/// The frame owns three pieces: the viewport (its outer `width` × `height`
/// footprint and the scroll offset), the inner content frame children are
/// attached to, and at most one scrollbar matching the current orientation.
/// The scroll region always equals the content's natural bounding box, or
/// the viewport size when the frame is empty.
#[derive(Debug, Clone)]
pub struct Model {
    /// Lipgloss style applied around the rendered frame (pass-through
    /// styling; borders and padding shrink the content area).
    pub style: Style,
    /// Keyboard bindings for scrolling.
    pub keymap: ScrollFrameKeyMap,
    /// Whether wheel input scrolls the frame while hovered.
    pub wheel_enabled: bool,
    /// Cells scrolled per wheel notch.
    pub wheel_delta: usize,

    width: usize,
    height: usize,
    x: u16,
    y: u16,
    orientation: Orientation,
    show_scrollbar: bool,
    scrollbar: Option<Scrollbar>,
    scrollbar_style: Option<Style>,
    content: ContentFrame,
    offset: usize,
    region: (usize, usize),
    last_size: (usize, usize),
    hovered: bool,
    resize_seq: usize,
    id: i64,
}

impl Model {
    /// Creates a vertical scroll frame with the given outer dimensions and
    /// no scrollbar.
    pub fn new(width: usize, height: usize) -> Self {
        let mut model = Self {
            style: Style::new(),
            keymap: ScrollFrameKeyMap::default(),
            wheel_enabled: true,
            wheel_delta: DEFAULT_WHEEL_DELTA,
            width,
            height,
            x: 0,
            y: 0,
            orientation: Orientation::Vertical,
            show_scrollbar: false,
            scrollbar: None,
            scrollbar_style: None,
            content: ContentFrame::new(),
            offset: 0,
            region: (0, 0),
            last_size: (0, 0),
            hovered: false,
            resize_seq: 0,
            id: next_id(),
        };
        model.recompute_region();
        model
    }

    /// Builder: sets the scroll orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self.rebuild_scrollbar();
        self.recompute_region();
        self
    }

    /// Builder: shows or hides the scrollbar.
    pub fn with_scrollbar(mut self, show: bool) -> Self {
        self.show_scrollbar = show;
        self.rebuild_scrollbar();
        self.recompute_region();
        self
    }

    /// Builder: applies pass-through lipgloss styling to the frame.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self.recompute_region();
        self
    }

    /// Builder: overrides the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.style = self.style.clone().background(color);
        self
    }

    /// Builder: overrides the scrollbar colors. The override survives
    /// orientation switches.
    pub fn with_scrollbar_style(mut self, style: Style) -> Self {
        self.scrollbar_style = Some(style);
        self.rebuild_scrollbar();
        self
    }

    /// Builder: sets the blank gap between neighboring children.
    pub fn with_gap(mut self, gap: usize) -> Self {
        self.content = std::mem::take(&mut self.content).with_gap(gap);
        self
    }

    // --- Geometry ---

    /// Returns the content area width (outer width minus style frame and
    /// scrollbar lane).
    pub fn inner_width(&self) -> usize {
        let lane = (self.show_scrollbar && self.orientation.is_vertical()) as usize;
        self.width
            .saturating_sub(self.style.get_horizontal_frame_size() as usize + lane)
    }

    /// Returns the content area height (outer height minus style frame and
    /// scrollbar lane).
    pub fn inner_height(&self) -> usize {
        let lane = (self.show_scrollbar && !self.orientation.is_vertical()) as usize;
        self.height
            .saturating_sub(self.style.get_vertical_frame_size() as usize + lane)
    }

    /// Returns the current scroll region: the content's natural bounding
    /// box, or the content area size while the frame is empty.
    pub fn scroll_region(&self) -> (usize, usize) {
        self.region
    }

    fn max_offset(&self) -> usize {
        match self.orientation {
            Orientation::Vertical => self.region.1.saturating_sub(self.inner_height()),
            Orientation::Horizontal => self.region.0.saturating_sub(self.inner_width()),
        }
    }

    fn recompute_region(&mut self) {
        self.region = if self.content.is_empty() {
            (self.inner_width(), self.inner_height())
        } else {
            self.content.natural_size(self.orientation)
        };
        self.offset = self.offset.min(self.max_offset());
    }

    fn rebuild_scrollbar(&mut self) {
        self.scrollbar = if self.show_scrollbar {
            let mut bar = Scrollbar::new(self.orientation);
            if let Some(style) = &self.scrollbar_style {
                bar = bar.with_style(style.clone());
            }
            Some(bar)
        } else {
            None
        };
    }

    // --- Debounced resize handling ---

    /// Schedules the debounced recompute, invalidating any pending one.
    fn schedule_recompute(&mut self) -> Option<Cmd> {
        self.resize_seq += 1;
        let id = self.id;
        let seq = self.resize_seq;
        Some(tick(RESIZE_DEBOUNCE, move |_| {
            Box::new(RecomputeMsg { id, seq }) as Msg
        }))
    }

    /// Coalesces content mutations: schedules a recompute only when the
    /// content's natural size actually changed.
    fn content_changed(&mut self) -> Option<Cmd> {
        let size = self.content.natural_size(self.orientation);
        if size == self.last_size {
            return None;
        }
        self.last_size = size;
        self.schedule_recompute()
    }

    // --- Content attachment point ---

    /// Appends a child block to the content frame.
    ///
    /// Returns the debounce command to hand to the runtime, or `None` when
    /// the content size did not change.
    pub fn push_child(&mut self, child: impl Into<String>) -> Option<Cmd> {
        self.content.push(child);
        self.content_changed()
    }

    /// Inserts a child block at `index` (clamped to the end).
    pub fn insert_child(&mut self, index: usize, child: impl Into<String>) -> Option<Cmd> {
        self.content.insert(index, child);
        self.content_changed()
    }

    /// Removes the child at `index`; out-of-range indices are no-ops.
    pub fn remove_child(&mut self, index: usize) -> Option<Cmd> {
        self.content.remove(index);
        self.content_changed()
    }

    /// Replaces all children.
    pub fn set_children(&mut self, children: Vec<String>) -> Option<Cmd> {
        self.content.set_children(children);
        self.content_changed()
    }

    /// Removes all children.
    pub fn clear_children(&mut self) -> Option<Cmd> {
        self.content.clear();
        self.content_changed()
    }

    /// Returns the inner content frame.
    pub fn content(&self) -> &ContentFrame {
        &self.content
    }

    /// Returns the child blocks in order.
    pub fn children(&self) -> &[String] {
        self.content.children()
    }

    // --- Viewport ---

    /// Resizes the viewport. Returns the debounce command, or `None` when
    /// the size is unchanged.
    pub fn set_size(&mut self, width: usize, height: usize) -> Option<Cmd> {
        if (width, height) == (self.width, self.height) {
            return None;
        }
        self.width = width;
        self.height = height;
        self.schedule_recompute()
    }

    /// Sets the widget's on-screen origin, used to hit-test pointer events.
    pub fn set_position(&mut self, x: u16, y: u16) {
        self.x = x;
        self.y = y;
    }

    /// Returns the outer width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the outer height.
    pub fn height(&self) -> usize {
        self.height
    }

    // --- Orientation ---

    /// Returns the current orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the scrollbar, when one is shown.
    pub fn scrollbar(&self) -> Option<&Scrollbar> {
        self.scrollbar.as_ref()
    }

    /// Switches the scroll axis at runtime.
    ///
    /// Switching to the current orientation is a no-op. Otherwise the
    /// existing scrollbar is discarded, the matching one is installed if
    /// scrollbars are enabled, the offset is reset, any pending debounce is
    /// invalidated, and the geometry is recomputed immediately.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation == orientation {
            return;
        }
        self.orientation = orientation;
        self.offset = 0;
        self.rebuild_scrollbar();
        // Pending debounce ticks are now stale; recompute right away.
        self.resize_seq += 1;
        self.last_size = self.content.natural_size(self.orientation);
        self.recompute_region();
    }

    /// Boolean form of [`Model::set_orientation`]: `true` scrolls
    /// vertically, `false` horizontally.
    pub fn set_scroll_vertical(&mut self, vertical: bool) {
        self.set_orientation(if vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        });
    }

    // --- Scrolling ---

    /// Returns the scroll offset along the active axis.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Sets the offset, clamped to the scrollable range.
    pub fn set_offset(&mut self, offset: usize) {
        self.offset = offset.min(self.max_offset());
    }

    /// Scrolls forward (down or right) by `n` cells.
    pub fn scroll_forward(&mut self, n: usize) {
        self.set_offset(self.offset + n);
    }

    /// Scrolls back (up or left) by `n` cells.
    pub fn scroll_back(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    /// Returns whether the frame is scrolled to the start.
    pub fn at_start(&self) -> bool {
        self.offset == 0
    }

    /// Returns whether the frame is scrolled to the end.
    pub fn at_end(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// Scroll progress along the active axis, from 0.0 to 1.0. Returns 1.0
    /// when the content fits in the viewport.
    pub fn scroll_percent(&self) -> f64 {
        let max = self.max_offset();
        if max == 0 {
            return 1.0;
        }
        (self.offset as f64 / max as f64).clamp(0.0, 1.0)
    }

    /// Returns whether the pointer was last seen over the widget.
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && (column as usize) < self.x as usize + self.width
            && row >= self.y
            && (row as usize) < self.y as usize + self.height
    }

    /// Handles a mouse event.
    ///
    /// Every event refreshes the hover state by hit-testing its coordinates
    /// against the widget rectangle; wheel events only scroll while the
    /// pointer is inside. Vertical wheel notches always move along the
    /// active axis (matching how a mouse wheel drives a horizontal pane);
    /// horizontal notches are honored in horizontal orientation.
    pub fn mouse(&mut self, event: &MouseEvent) {
        self.hovered = self.contains(event.column, event.row);
        if !self.wheel_enabled || !self.hovered {
            return;
        }
        match event.kind {
            MouseEventKind::ScrollUp => self.scroll_back(self.wheel_delta),
            MouseEventKind::ScrollDown => self.scroll_forward(self.wheel_delta),
            MouseEventKind::ScrollLeft if !self.orientation.is_vertical() => {
                self.scroll_back(self.wheel_delta)
            }
            MouseEventKind::ScrollRight if !self.orientation.is_vertical() => {
                self.scroll_forward(self.wheel_delta)
            }
            _ => {}
        }
    }

    // --- Elm plumbing ---

    /// Update is the Bubble Tea update loop for the frame. This is the
    /// sub-component form; forward messages from the parent model's
    /// `update()`.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(recompute) = msg.downcast_ref::<RecomputeMsg>() {
            // Were we expecting this recompute? Stale tags are the
            // cancelled timers of the debounce.
            if recompute.id != self.id || recompute.seq != self.resize_seq {
                return None;
            }
            self.recompute_region();
            return None;
        }

        if let Some(mouse_event) = msg.downcast_ref::<MouseEvent>() {
            self.mouse(mouse_event);
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            match self.orientation {
                Orientation::Vertical => {
                    if self.keymap.up.matches(key_msg) {
                        self.scroll_back(1);
                    } else if self.keymap.down.matches(key_msg) {
                        self.scroll_forward(1);
                    } else if self.keymap.page_up.matches(key_msg) {
                        self.scroll_back(self.inner_height());
                    } else if self.keymap.page_down.matches(key_msg) {
                        self.scroll_forward(self.inner_height());
                    }
                }
                Orientation::Horizontal => {
                    if self.keymap.left.matches(key_msg) {
                        self.scroll_back(1);
                    } else if self.keymap.right.matches(key_msg) {
                        self.scroll_forward(1);
                    } else if self.keymap.page_up.matches(key_msg) {
                        self.scroll_back(self.inner_width());
                    } else if self.keymap.page_down.matches(key_msg) {
                        self.scroll_forward(self.inner_width());
                    }
                }
            }
        }

        None
    }

    /// Renders the frame: the visible window of the content, stretched to
    /// the viewport's cross-axis size, with the scrollbar joined alongside.
    pub fn view(&self) -> String {
        let w = self.inner_width();
        let h = self.inner_height();
        if w == 0 || h == 0 {
            return self.style.render("");
        }

        let block = self.content.render(self.orientation);
        let body = match self.orientation {
            Orientation::Vertical => {
                let all: Vec<&str> = block.lines().collect();
                let top = self.offset.min(all.len());
                let bottom = (top + h).min(all.len());
                let mut rows: Vec<String> = all[top..bottom]
                    .iter()
                    .map(|line| {
                        let row = if lipgloss::width_visible(line) > w {
                            cut_columns(line, 0, w)
                        } else {
                            (*line).to_string()
                        };
                        pad_to_width(&row, w)
                    })
                    .collect();
                while rows.len() < h {
                    rows.push(" ".repeat(w));
                }
                let body = rows.join("\n");
                match &self.scrollbar {
                    Some(bar) => {
                        let bar_view = bar.view(h, self.region.1, self.offset);
                        lipgloss::join_horizontal(
                            lipgloss::TOP,
                            &[body.as_str(), bar_view.as_str()],
                        )
                    }
                    None => body,
                }
            }
            Orientation::Horizontal => {
                let mut rows: Vec<String> = block
                    .lines()
                    .take(h)
                    .map(|line| {
                        let row = if self.offset > 0 || lipgloss::width_visible(line) > w {
                            cut_columns(line, self.offset, self.offset + w)
                        } else {
                            line.to_string()
                        };
                        pad_to_width(&row, w)
                    })
                    .collect();
                while rows.len() < h {
                    rows.push(" ".repeat(w));
                }
                let body = rows.join("\n");
                match &self.scrollbar {
                    Some(bar) => {
                        let bar_view = bar.view(w, self.region.0, self.offset);
                        lipgloss::join_vertical(
                            lipgloss::LEFT,
                            &[body.as_str(), bar_view.as_str()],
                        )
                    }
                    None => body,
                }
            }
        };

        self.style.render(&body)
    }
}

impl Default for Model {
    /// Creates a frame sized for a standard terminal (80×24).
    fn default() -> Self {
        Self::new(80, 24)
    }
}

// Standalone use; the frame is typically a sub-component of another model.
impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Self::default(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(&msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}

/// Pads `line` with spaces on the right up to `width` visible cells.
fn pad_to_width(line: &str, width: usize) -> String {
    let current = lipgloss::width_visible(line);
    if current >= width {
        line.to_string()
    } else {
        let mut padded = line.to_string();
        padded.push_str(&" ".repeat(width - current));
        padded
    }
}

/// Extracts the part of `s` between display columns `start` and `end`.
fn cut_columns(s: &str, start: usize, end: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    let total: usize = chars.iter().map(|ch| ch.width().unwrap_or(0)).sum();
    if start >= total {
        return String::new();
    }

    let mut current_width = 0;
    let mut start_idx = chars.len();
    let mut end_idx = chars.len();
    for (i, &ch) in chars.iter().enumerate() {
        if current_width >= start && start_idx == chars.len() {
            start_idx = i;
        }
        if current_width >= end {
            end_idx = i;
            break;
        }
        current_width += ch.width().unwrap_or(0);
    }

    chars[start_idx..end_idx].iter().collect()
}

/// Creates a new scroll frame. Equivalent to `Model::new(width, height)`.
pub fn new(width: usize, height: usize) -> Model {
    Model::new(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton};

    fn key_msg(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Drives the pending debounce to completion, as the runtime's timer
    /// would after the delay elapses.
    fn settle(frame: &mut Model) {
        let msg: Msg = Box::new(RecomputeMsg {
            id: frame.id,
            seq: frame.resize_seq,
        });
        frame.update(&msg);
    }

    #[test]
    fn test_empty_frame_region_falls_back_to_viewport() {
        let frame = Model::new(20, 5);
        assert_eq!(frame.scroll_region(), (20, 5));
    }

    #[test]
    fn test_region_equals_content_bbox_when_overflowing() {
        let mut frame = Model::new(20, 5);
        for i in 0..10 {
            frame.push_child(format!("row {}", i));
        }
        settle(&mut frame);
        // 10 one-line children, widest is "row 9" (5 cells).
        assert_eq!(frame.scroll_region(), (5, 10));
        assert_ne!(frame.scroll_region(), (20, 5));
    }

    #[test]
    fn test_clearing_children_restores_viewport_fallback() {
        let mut frame = Model::new(20, 5);
        for i in 0..10 {
            frame.push_child(format!("row {}", i));
        }
        settle(&mut frame);
        frame.clear_children();
        settle(&mut frame);
        assert_eq!(frame.scroll_region(), (20, 5));
    }

    #[test]
    fn test_debounce_coalesces_rapid_changes() {
        let mut frame = Model::new(20, 5);
        let id = frame.id;

        assert!(frame.push_child("a").is_some());
        assert!(frame.push_child("bb").is_some());
        assert!(frame.push_child("ccc").is_some());
        let latest = frame.resize_seq;

        // The two earlier timers fire but carry stale tags.
        for seq in 1..latest {
            let msg: Msg = Box::new(RecomputeMsg { id, seq });
            frame.update(&msg);
            assert_eq!(frame.scroll_region(), (20, 5), "stale tick must not recompute");
        }

        let msg: Msg = Box::new(RecomputeMsg { id, seq: latest });
        frame.update(&msg);
        assert_eq!(frame.scroll_region(), (3, 3));
    }

    #[test]
    fn test_recompute_for_other_frame_is_ignored() {
        let mut a = Model::new(20, 5);
        let b = Model::new(20, 5);
        a.push_child("content");
        let msg: Msg = Box::new(RecomputeMsg {
            id: b.id,
            seq: a.resize_seq,
        });
        a.update(&msg);
        assert_eq!(a.scroll_region(), (20, 5));
    }

    #[test]
    fn test_same_size_mutation_schedules_nothing() {
        let mut frame = Model::new(20, 5);
        assert!(frame.set_children(vec!["abc".to_string()]).is_some());
        settle(&mut frame);
        // Same bounding box, no geometry work to do.
        assert!(frame.set_children(vec!["xyz".to_string()]).is_none());
    }

    #[test]
    fn test_orientation_switch_swaps_scrollbar() {
        let mut frame = Model::new(20, 5).with_scrollbar(true);
        assert_eq!(
            frame.scrollbar().map(|b| b.orientation),
            Some(Orientation::Vertical)
        );

        frame.set_orientation(Orientation::Horizontal);
        assert_eq!(
            frame.scrollbar().map(|b| b.orientation),
            Some(Orientation::Horizontal)
        );

        frame.set_orientation(Orientation::Vertical);
        assert_eq!(
            frame.scrollbar().map(|b| b.orientation),
            Some(Orientation::Vertical)
        );
    }

    #[test]
    fn test_redundant_orientation_switch_is_noop() {
        let mut frame = Model::new(20, 5).with_scrollbar(true);
        // Mark the live scrollbar; a rebuild would reset the glyph.
        frame.scrollbar.as_mut().unwrap().thumb = "X".to_string();

        frame.set_orientation(Orientation::Vertical);
        assert_eq!(frame.scrollbar().unwrap().thumb, "X");

        frame.set_orientation(Orientation::Horizontal);
        assert_eq!(frame.scrollbar().unwrap().thumb, "━");
    }

    #[test]
    fn test_orientation_switch_recomputes_immediately() {
        let mut frame = Model::new(20, 5);
        let id = frame.id;
        frame.push_child("abcdefgh\nsecond");
        let pending = frame.resize_seq;

        frame.set_orientation(Orientation::Horizontal);
        // No debounce involved: the region is already the content bbox.
        assert_eq!(frame.scroll_region(), (8, 2));

        // The previously scheduled tick is now stale.
        let (before_seq, before_region) = (frame.resize_seq, frame.scroll_region());
        let msg: Msg = Box::new(RecomputeMsg { id, seq: pending });
        frame.update(&msg);
        assert_eq!(frame.resize_seq, before_seq);
        assert_eq!(frame.scroll_region(), before_region);
    }

    #[test]
    fn test_scrollbar_style_override_survives_switch() {
        let style = Style::new().foreground(Color::from("#ff00ff"));
        let mut frame = Model::new(20, 5)
            .with_scrollbar(true)
            .with_scrollbar_style(style.clone());
        frame.set_orientation(Orientation::Horizontal);
        let bar = frame.scrollbar().unwrap();
        assert_eq!(
            bar.thumb_style.clone().inline(true).render("x"),
            style.clone().inline(true).render("x")
        );
    }

    #[test]
    fn test_wheel_outside_viewport_is_ignored() {
        let mut frame = Model::new(20, 5);
        for i in 0..10 {
            frame.push_child(format!("row {}", i));
        }
        settle(&mut frame);

        frame.mouse(&mouse_event(MouseEventKind::ScrollDown, 30, 10));
        assert_eq!(frame.offset(), 0);
        assert!(!frame.hovered());
    }

    #[test]
    fn test_wheel_inside_viewport_scrolls() {
        let mut frame = Model::new(20, 5);
        for i in 0..10 {
            frame.push_child(format!("row {}", i));
        }
        settle(&mut frame);

        frame.mouse(&mouse_event(MouseEventKind::ScrollDown, 3, 2));
        assert!(frame.hovered());
        assert_eq!(frame.offset(), frame.wheel_delta);

        frame.mouse(&mouse_event(MouseEventKind::ScrollUp, 3, 2));
        assert_eq!(frame.offset(), 0);
    }

    #[test]
    fn test_wheel_respects_widget_origin() {
        let mut frame = Model::new(20, 5);
        frame.set_position(10, 10);
        for i in 0..10 {
            frame.push_child(format!("row {}", i));
        }
        settle(&mut frame);

        // Inside the old rectangle but outside the repositioned one.
        frame.mouse(&mouse_event(MouseEventKind::ScrollDown, 3, 2));
        assert_eq!(frame.offset(), 0);

        frame.mouse(&mouse_event(MouseEventKind::ScrollDown, 12, 12));
        assert_eq!(frame.offset(), frame.wheel_delta);
    }

    #[test]
    fn test_wheel_disabled() {
        let mut frame = Model::new(20, 5);
        frame.wheel_enabled = false;
        for i in 0..10 {
            frame.push_child(format!("row {}", i));
        }
        settle(&mut frame);

        frame.mouse(&mouse_event(MouseEventKind::ScrollDown, 3, 2));
        assert_eq!(frame.offset(), 0);
    }

    #[test]
    fn test_wheel_scrolls_active_axis_in_horizontal_mode() {
        let mut frame = Model::new(5, 3).with_orientation(Orientation::Horizontal);
        frame.push_child("abcdefghijklmnop");
        settle(&mut frame);

        frame.mouse(&mouse_event(MouseEventKind::ScrollDown, 2, 1));
        assert_eq!(frame.offset(), frame.wheel_delta);

        frame.mouse(&mouse_event(MouseEventKind::ScrollRight, 2, 1));
        assert_eq!(frame.offset(), frame.wheel_delta * 2);

        frame.mouse(&mouse_event(MouseEventKind::ScrollLeft, 2, 1));
        assert_eq!(frame.offset(), frame.wheel_delta);
    }

    #[test]
    fn test_non_wheel_mouse_events_do_not_scroll() {
        let mut frame = Model::new(20, 5);
        for i in 0..10 {
            frame.push_child(format!("row {}", i));
        }
        settle(&mut frame);

        frame.mouse(&mouse_event(
            MouseEventKind::Down(MouseButton::Left),
            3,
            2,
        ));
        assert_eq!(frame.offset(), 0);
        assert!(frame.hovered());
    }

    #[test]
    fn test_keyboard_scrolls_active_axis_only() {
        let mut frame = Model::new(20, 3);
        for i in 0..10 {
            frame.push_child(format!("row {}", i));
        }
        settle(&mut frame);

        frame.update(&key_msg(KeyCode::Char('h')));
        assert_eq!(frame.offset(), 0);
        frame.update(&key_msg(KeyCode::Char('j')));
        assert_eq!(frame.offset(), 1);
        frame.update(&key_msg(KeyCode::PageDown));
        assert_eq!(frame.offset(), 4);

        frame.set_orientation(Orientation::Horizontal);
        frame.update(&key_msg(KeyCode::Char('j')));
        assert_eq!(frame.offset(), 0);
    }

    #[test]
    fn test_offset_clamped_when_content_shrinks() {
        let mut frame = Model::new(20, 5);
        for i in 0..20 {
            frame.push_child(format!("row {}", i));
        }
        settle(&mut frame);
        frame.set_offset(frame.max_offset());
        assert!(frame.at_end());

        frame.set_children(vec!["row 0".to_string(), "row 1".to_string()]);
        settle(&mut frame);
        assert_eq!(frame.offset(), 0);
    }

    #[test]
    fn test_view_has_viewport_shape() {
        let mut frame = Model::new(12, 4);
        frame.push_child("a");
        frame.push_child("bb");
        settle(&mut frame);

        let view = frame.view();
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines.len(), 4);
        for line in &lines {
            assert_eq!(lipgloss::width_visible(line), 12);
        }
    }

    #[test]
    fn test_view_with_scrollbar_keeps_shape() {
        let mut frame = Model::new(12, 4).with_scrollbar(true);
        for i in 0..10 {
            frame.push_child(format!("row {}", i));
        }
        settle(&mut frame);

        let view = frame.view();
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines.len(), 4);
        for line in &lines {
            assert_eq!(lipgloss::width_visible(line), 12);
        }
        // Thumb starts at the top of the lane.
        assert!(lines[0].ends_with('┃'));
    }

    #[test]
    fn test_view_scrolls_content_window() {
        let mut frame = Model::new(8, 2);
        for i in 0..6 {
            frame.push_child(format!("row {}", i));
        }
        settle(&mut frame);

        assert!(frame.view().contains("row 0"));
        frame.scroll_forward(2);
        let view = frame.view();
        assert!(!view.contains("row 0"));
        assert!(view.contains("row 2"));
        assert!(view.contains("row 3"));
    }

    #[test]
    fn test_horizontal_view_cuts_columns() {
        let mut frame = Model::new(4, 2).with_orientation(Orientation::Horizontal);
        frame.push_child("abcdefgh");
        settle(&mut frame);

        assert!(frame.view().starts_with("abcd"));
        frame.scroll_forward(2);
        assert!(frame.view().starts_with("cdef"));
    }

    #[test]
    fn test_scroll_percent_bounds() {
        let mut frame = Model::new(20, 5);
        frame.push_child("short");
        settle(&mut frame);
        // Fits entirely; treated as fully scrolled.
        assert_eq!(frame.scroll_percent(), 1.0);

        for i in 0..15 {
            frame.push_child(format!("row {}", i));
        }
        settle(&mut frame);
        assert_eq!(frame.scroll_percent(), 0.0);
        frame.set_offset(frame.max_offset());
        assert_eq!(frame.scroll_percent(), 1.0);
    }

    #[test]
    fn test_cut_columns_wide_chars() {
        // Wide characters occupy two display columns.
        assert_eq!(cut_columns("ab世界cd", 0, 4), "ab世");
        assert_eq!(cut_columns("ab世界cd", 2, 6), "世界");
        assert_eq!(cut_columns("abc", 10, 12), "");
    }

    #[test]
    fn test_set_size_reschedules_and_coalesces() {
        let mut frame = Model::new(20, 5);
        assert!(frame.set_size(20, 5).is_none());
        assert!(frame.set_size(30, 8).is_some());
        settle(&mut frame);
        assert_eq!(frame.scroll_region(), (30, 8));
    }
}
