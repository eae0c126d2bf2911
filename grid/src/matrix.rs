//! The form grid and its mutation operations.
//!
//! A [`FormMatrix`] is an ordered sequence of rows, each an ordered sequence
//! of [`FieldElement`]s (column order, left to right). Document order is
//! rendering order. Every mutation is a pure transformation: it borrows the
//! current matrix and returns a structurally copied successor, never aliasing
//! rows or elements the caller still holds, which is what keeps selection
//! tracking and undo/redo consistent.
//!
//! EDGE POLICY
//! ===========
//! Index-based operations treat out-of-range indices as no-ops rather than
//! panicking. The grid is always driven by UI state that is internally
//! consistent, so an out-of-range index is a stale event, not a bug to
//! surface. This is a deliberate leniency policy.

#[cfg(test)]
#[path = "matrix_test.rs"]
mod matrix_test;

use serde::{Deserialize, Serialize};

use crate::consts::{FULL_ROW_WIDTH, MIN_ELEMENT_WIDTH};
use crate::element::{FieldElement, FieldId};
use crate::registry;

/// Direction for the neighbor-swap reorder primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Swap with the element immediately to the left.
    Left,
    /// Swap with the element immediately to the right.
    Right,
}

/// The row/column grid of field elements.
///
/// Rows are never left empty: a delete that empties its row also removes the
/// row, shifting subsequent row indices down by one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormMatrix {
    rows: Vec<Vec<FieldElement>>,
}

impl FormMatrix {
    /// Create an empty matrix (zero rows).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a matrix from raw rows. Intended for tests and snapshot loads.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<FieldElement>>) -> Self {
        Self { rows }
    }

    /// The rows in document order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<FieldElement>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when the matrix has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The element at `(row, col)`, if both indices are in range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&FieldElement> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Look up an element anywhere in the matrix by id.
    #[must_use]
    pub fn find(&self, id: FieldId) -> Option<&FieldElement> {
        self.rows.iter().flatten().find(|e| e.id == id)
    }

    /// The `(row, col)` position of an element by id.
    #[must_use]
    pub fn position_of(&self, id: FieldId) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter().position(|e| e.id == id).map(|c| (r, c))
        })
    }

    /// Total number of elements across all rows.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    // ── Mutations ───────────────────────────────────────────────

    /// Insert a new row holding one placeholder element at `at`
    /// (`0..=row_count`, so `at == row_count` appends).
    ///
    /// Returns the successor matrix and the freshly created element so the
    /// caller can auto-select it. Out of range: no-op, no element.
    #[must_use]
    pub fn insert_row(&self, at: usize) -> (Self, Option<FieldElement>) {
        if at > self.rows.len() {
            return (self.clone(), None);
        }
        let element = registry::placeholder_element();
        let mut next = self.clone();
        next.rows.insert(at, vec![element.clone()]);
        (next, Some(element))
    }

    /// Insert one placeholder element into row `row` at column `at`
    /// (`0..=row_len`, so `at == row_len` appends).
    ///
    /// Returns the successor matrix and the new element. Out-of-range row or
    /// column: no-op, no element.
    #[must_use]
    pub fn insert_column(&self, row: usize, at: usize) -> (Self, Option<FieldElement>) {
        let Some(existing) = self.rows.get(row) else {
            return (self.clone(), None);
        };
        if at > existing.len() {
            return (self.clone(), None);
        }
        let element = registry::placeholder_element();
        let mut next = self.clone();
        next.rows[row].insert(at, element.clone());
        (next, Some(element))
    }

    /// Remove the element at `(row, col)`. If the row becomes empty it is
    /// removed as well. Out of range: no-op.
    #[must_use]
    pub fn delete_element(&self, row: usize, col: usize) -> Self {
        if self.get(row, col).is_none() {
            return self.clone();
        }
        let mut next = self.clone();
        next.rows[row].remove(col);
        if next.rows[row].is_empty() {
            next.rows.remove(row);
        }
        next
    }

    /// Swap the element at `(row, col)` with its immediate neighbor in the
    /// given direction. Already at the row edge, or out of range: no-op.
    ///
    /// This is the sole intra-row reordering primitive for keyboard and
    /// button controls; see [`FormMatrix::swap_elements`] for drag-and-drop.
    #[must_use]
    pub fn move_element(&self, row: usize, col: usize, direction: MoveDirection) -> Self {
        let Some(row_len) = self.rows.get(row).map(Vec::len) else {
            return self.clone();
        };
        if col >= row_len {
            return self.clone();
        }
        let neighbor = match direction {
            MoveDirection::Left if col > 0 => col - 1,
            MoveDirection::Right if col + 1 < row_len => col + 1,
            MoveDirection::Left | MoveDirection::Right => return self.clone(),
        };
        let mut next = self.clone();
        next.rows[row].swap(col, neighbor);
        next
    }

    /// Exchange the elements at two arbitrary positions, possibly in
    /// different rows. The drag-and-drop reordering primitive.
    ///
    /// A swap onto oneself is a no-op, and applying the same swap twice
    /// restores the original matrix. Out of range: no-op.
    #[must_use]
    pub fn swap_elements(
        &self,
        source_row: usize,
        source_col: usize,
        target_row: usize,
        target_col: usize,
    ) -> Self {
        if self.get(source_row, source_col).is_none() || self.get(target_row, target_col).is_none()
        {
            return self.clone();
        }
        if source_row == target_row && source_col == target_col {
            return self.clone();
        }
        let mut next = self.clone();
        if source_row == target_row {
            next.rows[source_row].swap(source_col, target_col);
        } else {
            let source = next.rows[source_row][source_col].clone();
            let target = std::mem::replace(&mut next.rows[target_row][target_col], source);
            next.rows[source_row][source_col] = target;
        }
        next
    }

    /// Replace the element whose id matches `updated`, preserving its
    /// position. Unknown id: no-op.
    #[must_use]
    pub fn update_element(&self, updated: &FieldElement) -> Self {
        let mut next = self.clone();
        for row in &mut next.rows {
            for element in row.iter_mut() {
                if element.id == updated.id {
                    *element = updated.clone();
                    return next;
                }
            }
        }
        self.clone()
    }

    /// Resize the element at `(row, col)` to `width` percent of the row,
    /// redistributing the remaining share across the row's other elements
    /// proportionally to their previous widths (equal split when those sum
    /// to zero). The target width is clamped to
    /// [`MIN_ELEMENT_WIDTH`]..=[`FULL_ROW_WIDTH`]. Out of range: no-op.
    #[must_use]
    pub fn resize_element(&self, row: usize, col: usize, width: f64) -> Self {
        if self.get(row, col).is_none() {
            return self.clone();
        }
        let mut next = self.clone();
        let cells = &mut next.rows[row];
        let width = width.clamp(MIN_ELEMENT_WIDTH, FULL_ROW_WIDTH);
        if cells.len() == 1 {
            cells[col].width = width;
            return next;
        }
        let remaining = (FULL_ROW_WIDTH - width).max(0.0);
        let prior_sum: f64 = cells
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != col)
            .map(|(_, e)| e.width)
            .sum();
        let sibling_count = cells.len() - 1;
        for (i, element) in cells.iter_mut().enumerate() {
            if i == col {
                element.width = width;
            } else if prior_sum > f64::EPSILON {
                element.width = remaining * (element.width / prior_sum);
            } else {
                element.width = remaining / sibling_count as f64;
            }
        }
        next
    }
}
