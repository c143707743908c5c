//! Pixel grid editing primitives.
//!
//! A [`PixelGrid`] is a flat, row-major cell buffer with the dimensions it
//! was built against. The reducer takes a frame's cells, applies one edit,
//! and puts the cells back; the grid itself never signals errors - edits at
//! out-of-range indices leave the buffer untouched and report `false`.

use std::collections::VecDeque;

use crate::models::Cell;

/// A 2D cell grid stored as a flat row-major vector.
///
/// Index `id` addresses row `id / columns`, column `id % columns`. The empty
/// string is the transparent cell value.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    cells: Vec<Cell>,
    columns: usize,
    rows: usize,
}

impl PixelGrid {
    /// Wrap an existing cell buffer. `cells.len()` must equal
    /// `columns * rows`; the reducer maintains that invariant for every frame.
    pub fn from_cells(cells: Vec<Cell>, columns: usize, rows: usize) -> Self {
        debug_assert_eq!(cells.len(), columns * rows);
        Self { cells, columns, rows }
    }

    /// Create an all-transparent grid.
    pub fn empty(columns: usize, rows: usize) -> Self {
        Self {
            cells: vec![Cell::new(); columns * rows],
            columns,
            rows,
        }
    }

    /// Unwrap back into the flat cell buffer.
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Cell value at a flat index, if in range.
    pub fn get(&self, id: usize) -> Option<&str> {
        self.cells.get(id).map(String::as_str)
    }

    /// Set one cell to a color. Returns whether the grid changed.
    pub fn set(&mut self, id: usize, color: &str) -> bool {
        match self.cells.get_mut(id) {
            Some(cell) if cell != color => {
                *cell = color.to_string();
                true
            }
            _ => false,
        }
    }

    /// Clear one cell back to transparent. Returns whether the grid changed.
    pub fn erase(&mut self, id: usize) -> bool {
        match self.cells.get_mut(id) {
            Some(cell) if !cell.is_empty() => {
                cell.clear();
                true
            }
            _ => false,
        }
    }

    /// Clear every cell back to transparent.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Flood fill from a seed cell using iterative BFS.
    ///
    /// Repaints the seed and every cell reachable from it through
    /// 4-connected neighbors (no wraparound across row boundaries) sharing
    /// the seed's original color. Filling a region with its own color is a
    /// no-op. Returns whether the grid changed.
    pub fn flood_fill(&mut self, id: usize, color: &str) -> bool {
        if id >= self.cells.len() {
            return false;
        }

        let original = self.cells[id].clone();
        if original == color {
            return false;
        }

        let mut queue = VecDeque::new();
        queue.push_back(id);
        // Mark visited by repainting as we go - no separate visited set needed
        self.cells[id] = color.to_string();

        while let Some(current) = queue.pop_front() {
            for neighbor in self.neighbors(current) {
                if self.cells[neighbor] == original {
                    self.cells[neighbor] = color.to_string();
                    queue.push_back(neighbor);
                }
            }
        }

        true
    }

    /// 4-connected in-bounds neighbors of a flat index.
    fn neighbors(&self, id: usize) -> impl Iterator<Item = usize> {
        let row = id / self.columns;
        let col = id % self.columns;
        let mut out = Vec::with_capacity(4);
        if col > 0 {
            out.push(id - 1);
        }
        if col + 1 < self.columns {
            out.push(id + 1);
        }
        if row > 0 {
            out.push(id - self.columns);
        }
        if row + 1 < self.rows {
            out.push(id + self.columns);
        }
        out.into_iter()
    }

    /// Append one transparent cell at the end of every row.
    pub fn add_column(&mut self) {
        let mut next = Vec::with_capacity((self.columns + 1) * self.rows);
        for row in self.cells.chunks(self.columns) {
            next.extend_from_slice(row);
            next.push(Cell::new());
        }
        self.cells = next;
        self.columns += 1;
    }

    /// Drop the last cell of every row. Returns `false` when the grid is
    /// already a single column wide.
    pub fn remove_column(&mut self) -> bool {
        if self.columns <= 1 {
            return false;
        }
        let mut next = Vec::with_capacity((self.columns - 1) * self.rows);
        for row in self.cells.chunks(self.columns) {
            next.extend_from_slice(&row[..self.columns - 1]);
        }
        self.cells = next;
        self.columns -= 1;
        true
    }

    /// Append one all-transparent row at the bottom.
    pub fn add_row(&mut self) {
        self.cells
            .extend(std::iter::repeat_with(Cell::new).take(self.columns));
        self.rows += 1;
    }

    /// Drop the bottom row. Returns `false` when the grid is already a
    /// single row tall.
    pub fn remove_row(&mut self) -> bool {
        if self.rows <= 1 {
            return false;
        }
        self.rows -= 1;
        self.cells.truncate(self.columns * self.rows);
        true
    }
}
