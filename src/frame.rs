//! The inner content frame of a scroll frame.
//!
//! A [`ContentFrame`] is the attachment point for user widgets: an ordered
//! list of child blocks, where each block is whatever a child's `view()`
//! produced (possibly multi-line, possibly ANSI-styled). The frame knows how
//! to lay its children out along either scroll axis and how to measure the
//! natural size of the result; the scroll frame queries that size to keep
//! its scroll region in sync.

use crate::scrollframe::Orientation;
use lipgloss_extras::lipgloss;

/// Measures a rendered block: widest visible line width and line count.
pub(crate) fn block_size(block: &str) -> (usize, usize) {
    let width = block.lines().map(lipgloss::width_visible).max().unwrap_or(0);
    let height = block.lines().count();
    (width, height)
}

/// Container for user-added child blocks.
///
/// Children are stacked top-to-bottom in vertical orientation and
/// left-to-right in horizontal orientation, with an optional `gap` of blank
/// cells between neighbors. The frame's natural size grows with its
/// children; the cross axis is stretched by the scroll frame at render time.
///
/// # Examples
///
/// ```rust
/// use bubbletea_scrollframe::{ContentFrame, Orientation};
///
/// let mut frame = ContentFrame::new();
/// frame.push("button 1");
/// frame.push("button 2");
/// assert_eq!(frame.natural_size(Orientation::Vertical), (8, 2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContentFrame {
    children: Vec<String>,
    gap: usize,
}

impl ContentFrame {
    /// Creates an empty content frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of blank cells between neighboring children.
    pub fn with_gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    /// Appends a child block.
    pub fn push(&mut self, child: impl Into<String>) {
        self.children.push(child.into());
    }

    /// Inserts a child block at `index`, clamped to the end.
    pub fn insert(&mut self, index: usize, child: impl Into<String>) {
        let index = index.min(self.children.len());
        self.children.insert(index, child.into());
    }

    /// Removes and returns the child at `index`, or `None` if out of range.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.children.len() {
            Some(self.children.remove(index))
        } else {
            None
        }
    }

    /// Replaces all children.
    pub fn set_children(&mut self, children: Vec<String>) {
        self.children = children;
    }

    /// Removes all children.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Returns the child blocks in order.
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Returns the number of children.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns whether the frame has no children.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the gap between neighboring children.
    pub fn gap(&self) -> usize {
        self.gap
    }

    /// Lays the children out along the given orientation.
    ///
    /// Vertical orientation stacks children with `gap` blank lines between
    /// them; horizontal orientation places them side by side with `gap`
    /// blank columns. The result is the frame at its natural size.
    pub fn render(&self, orientation: Orientation) -> String {
        if self.children.is_empty() {
            return String::new();
        }

        let mut parts: Vec<String> = Vec::new();
        for child in &self.children {
            if !parts.is_empty() && self.gap > 0 {
                match orientation {
                    Orientation::Vertical => {
                        // One empty part per blank line of separation.
                        for _ in 0..self.gap {
                            parts.push(String::new());
                        }
                    }
                    Orientation::Horizontal => parts.push(" ".repeat(self.gap)),
                }
            }
            parts.push(child.clone());
        }

        let refs: Vec<&str> = parts.iter().map(String::as_str).collect();
        match orientation {
            Orientation::Vertical => lipgloss::join_vertical(lipgloss::LEFT, &refs),
            Orientation::Horizontal => lipgloss::join_horizontal(lipgloss::TOP, &refs),
        }
    }

    /// Returns the frame's natural (width, height) for the orientation.
    ///
    /// An empty frame measures `(0, 0)`; the scroll frame substitutes its
    /// viewport size in that case.
    pub fn natural_size(&self, orientation: Orientation) -> (usize, usize) {
        if self.children.is_empty() {
            return (0, 0);
        }
        block_size(&self.render(orientation))
    }
}
