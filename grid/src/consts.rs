//! Shared constants for the grid crate.

// ── Element widths ──────────────────────────────────────────────

/// Column-width share (percent of row) given to a freshly created element.
pub const DEFAULT_ELEMENT_WIDTH: f64 = 50.0;

/// Smallest width share an element can be resized to.
pub const MIN_ELEMENT_WIDTH: f64 = 5.0;

/// Total width share available to one row.
pub const FULL_ROW_WIDTH: f64 = 100.0;

// ── List-type defaults ──────────────────────────────────────────

/// Seed options for the choice-like field types.
pub const SEEDED_OPTIONS: [&str; 3] = ["Choice A", "Choice B", "Choice C"];

/// Default allowed extensions for a fresh file-upload field.
pub const DEFAULT_FILE_TYPES: [&str; 1] = [".txt"];
