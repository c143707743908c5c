//! Actions dispatched at the frames store.
//!
//! Each variant carries exactly the payload its transition needs. Actions are
//! plain data: the dispatch layer builds them, the reducer interprets them.

use serde::{Deserialize, Serialize};

/// The drawing tool active when a cell is drawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DrawingTool {
    /// Paint a single cell with the palette color.
    Pencil,
    /// Clear a single cell back to transparent.
    Eraser,
    /// Flood-fill the region of same-colored cells around the target.
    Bucket,
    /// Pick the cell's color into the palette; touches no frame state.
    Eyedropper,
}

/// Which grid dimension a [`Action::ChangeDimensions`] adjusts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GridProperty {
    Columns,
    Rows,
}

/// Optional dimensions for [`Action::SetInitialState`]. Missing fields fall
/// back to the 20x20 defaults.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct InitOptions {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub columns: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rows: Option<usize>,
}

/// An action accepted by [`crate::reducer::reduce`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Replace the document with a fresh one of the given dimensions.
    SetInitialState {
        #[serde(default)]
        options: InitOptions,
    },
    /// Replace the document with a fresh default-sized one.
    NewProject,
    /// Apply the active drawing tool to one cell of the active frame.
    DrawCell {
        drawing_tool: DrawingTool,
        palette_color: String,
        /// Flat row-major cell index into the active frame's grid.
        id: usize,
    },
    /// Clear every cell of the active frame.
    ResetGrid,
    /// Select which frame is being edited.
    ChangeActiveFrame { index: usize },
    /// Append an all-transparent frame at the end of the list.
    CreateNewFrame,
    /// Remove the frame at `id`. Deleting the sole remaining frame is a no-op.
    DeleteFrame { id: usize },
    /// Insert a deep copy of the frame at `id` directly after it.
    DuplicateFrame { id: usize },
    /// Grow or shrink one grid dimension for the document and every frame.
    ChangeDimensions { property: GridProperty, delta: i32 },
    /// Manually override one frame's interval; other frames are untouched.
    ChangeFrameInterval { frame_index: usize, interval: f64 },
}
