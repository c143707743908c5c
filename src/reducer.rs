//! The frames reducer: pure state transitions over a [`Document`].
//!
//! `reduce` is a total function. Every action either produces a new document
//! or acts as identity; nothing here panics or performs I/O. Out-of-range
//! frame and cell indices are treated as no-ops.

use crate::actions::{Action, DrawingTool, GridProperty};
use crate::grid::PixelGrid;
use crate::models::{Document, Frame, DEFAULT_COLUMNS, DEFAULT_ROWS};

/// Apply one action to the document, producing the next document.
///
/// `None` stands for "no document yet" (first dispatch); it is replaced by
/// [`Document::default`] before the action is interpreted.
pub fn reduce(state: Option<Document>, action: &Action) -> Document {
    let state = state.unwrap_or_default();

    match action {
        Action::SetInitialState { options } => Document::new(
            options.columns.unwrap_or(DEFAULT_COLUMNS),
            options.rows.unwrap_or(DEFAULT_ROWS),
        ),
        Action::NewProject => Document::default(),
        Action::DrawCell {
            drawing_tool,
            palette_color,
            id,
        } => draw_cell(state, *drawing_tool, palette_color, *id),
        Action::ResetGrid => reset_grid(state),
        Action::ChangeActiveFrame { index } => change_active_frame(state, *index),
        Action::CreateNewFrame => create_new_frame(state),
        Action::DeleteFrame { id } => delete_frame(state, *id),
        Action::DuplicateFrame { id } => duplicate_frame(state, *id),
        Action::ChangeDimensions { property, delta } => {
            change_dimensions(state, *property, *delta)
        }
        Action::ChangeFrameInterval {
            frame_index,
            interval,
        } => change_frame_interval(state, *frame_index, *interval),
    }
}

/// Round a percentage to one decimal place.
fn round_percent(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Respace every frame's interval evenly across the timeline.
///
/// Frame i of n gets `100 * (i + 1) / n` rounded to one decimal; the last
/// frame is pinned to exactly 100. Runs whenever the frame count changes.
fn respace_intervals(frames: &mut [Frame]) {
    let count = frames.len();
    for (i, frame) in frames.iter_mut().enumerate() {
        frame.interval = if i + 1 == count {
            100.0
        } else {
            round_percent(100.0 * (i + 1) as f64 / count as f64)
        };
    }
}

/// Take a frame's cells, edit them as a [`PixelGrid`], and put them back.
fn with_grid(frame: &mut Frame, columns: usize, rows: usize, edit: impl FnOnce(&mut PixelGrid)) {
    let mut grid = PixelGrid::from_cells(std::mem::take(&mut frame.grid), columns, rows);
    edit(&mut grid);
    frame.grid = grid.into_cells();
}

fn draw_cell(mut state: Document, tool: DrawingTool, palette_color: &str, id: usize) -> Document {
    let (columns, rows, active) = (state.columns, state.rows, state.active_index);
    if let Some(frame) = state.list.get_mut(active) {
        with_grid(frame, columns, rows, |grid| match tool {
            DrawingTool::Pencil => {
                grid.set(id, palette_color);
            }
            DrawingTool::Eraser => {
                grid.erase(id);
            }
            DrawingTool::Bucket => {
                grid.flood_fill(id, palette_color);
            }
            // Picking a color mutates the palette, not the frames
            DrawingTool::Eyedropper => {}
        });
    }
    state
}

fn reset_grid(mut state: Document) -> Document {
    let (columns, rows, active) = (state.columns, state.rows, state.active_index);
    if let Some(frame) = state.list.get_mut(active) {
        with_grid(frame, columns, rows, PixelGrid::clear);
    }
    state
}

fn change_active_frame(mut state: Document, index: usize) -> Document {
    if index < state.list.len() {
        state.active_index = index;
    }
    state
}

fn create_new_frame(mut state: Document) -> Document {
    state
        .list
        .push(Frame::empty(state.columns, state.rows, 100.0));
    respace_intervals(&mut state.list);
    state
}

fn delete_frame(mut state: Document, id: usize) -> Document {
    // The last remaining frame can never be deleted
    if state.list.len() <= 1 || id >= state.list.len() {
        return state;
    }
    state.list.remove(id);
    respace_intervals(&mut state.list);
    state.active_index = state.active_index.min(state.list.len() - 1);
    state
}

fn duplicate_frame(mut state: Document, id: usize) -> Document {
    if id >= state.list.len() {
        return state;
    }
    let copy = state.list[id].clone();
    state.list.insert(id + 1, copy);
    respace_intervals(&mut state.list);
    state
}

fn change_dimensions(mut state: Document, property: GridProperty, delta: i32) -> Document {
    for _ in 0..delta.unsigned_abs() {
        if !step_dimension(&mut state, property, delta > 0) {
            break;
        }
    }
    state
}

/// Grow or shrink one dimension by a single step across every frame.
/// Returns `false` when shrinking would take the dimension below 1.
fn step_dimension(state: &mut Document, property: GridProperty, grow: bool) -> bool {
    let (columns, rows) = (state.columns, state.rows);
    match (property, grow) {
        (GridProperty::Columns, true) => {
            for frame in &mut state.list {
                with_grid(frame, columns, rows, PixelGrid::add_column);
            }
            state.columns += 1;
        }
        (GridProperty::Columns, false) => {
            if columns <= 1 {
                return false;
            }
            for frame in &mut state.list {
                with_grid(frame, columns, rows, |grid| {
                    grid.remove_column();
                });
            }
            state.columns -= 1;
        }
        (GridProperty::Rows, true) => {
            for frame in &mut state.list {
                with_grid(frame, columns, rows, PixelGrid::add_row);
            }
            state.rows += 1;
        }
        (GridProperty::Rows, false) => {
            if rows <= 1 {
                return false;
            }
            for frame in &mut state.list {
                with_grid(frame, columns, rows, |grid| {
                    grid.remove_row();
                });
            }
            state.rows -= 1;
        }
    }
    true
}

fn change_frame_interval(mut state: Document, frame_index: usize, interval: f64) -> Document {
    if let Some(frame) = state.list.get_mut(frame_index) {
        frame.interval = interval;
    }
    state
}
