//! Data models for the frames store (documents, frames, cells).

use serde::{Deserialize, Serialize};

/// Default grid width for a new document.
pub const DEFAULT_COLUMNS: usize = 20;
/// Default grid height for a new document.
pub const DEFAULT_ROWS: usize = 20;

/// A cell value: empty string means transparent/unset, anything else is a
/// color string such as `#rrggbb`.
pub type Cell = String;

/// A single animation frame.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Frame {
    /// Flat row-major cell storage, length = columns * rows
    /// (index = row * columns + col).
    pub grid: Vec<Cell>,
    /// Cumulative percentage of the animation timeline at which this frame
    /// stops showing. The last frame of a document always holds exactly 100.
    pub interval: f64,
}

impl Frame {
    /// Create an all-transparent frame for the given dimensions.
    pub fn empty(columns: usize, rows: usize, interval: f64) -> Self {
        Self {
            grid: vec![Cell::new(); columns * rows],
            interval,
        }
    }
}

/// The frames document: the complete state owned by the frames store.
///
/// The reducer treats a `Document` as immutable - every transition returns a
/// new value and never exposes a partially updated one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Frames in display order; index 0 is shown first. Never empty.
    pub list: Vec<Frame>,
    /// Index into `list` of the frame currently being edited.
    pub active_index: usize,
    /// Grid width shared by every frame.
    pub columns: usize,
    /// Grid height shared by every frame.
    pub rows: usize,
}

impl Document {
    /// Create a document with a single all-transparent frame at 100%.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            list: vec![Frame::empty(columns, rows, 100.0)],
            active_index: 0,
            columns,
            rows,
        }
    }

    /// The frame currently being edited.
    pub fn active_frame(&self) -> Option<&Frame> {
        self.list.get(self.active_index)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMNS, DEFAULT_ROWS)
    }
}
