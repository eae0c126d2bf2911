//! Form document model and grid editing engine for the form builder.
//!
//! This crate owns the in-memory state of a form under construction: the
//! row/column matrix of typed field elements, the pure mutation operations
//! the builder UI invokes on it, the selection/edit session that buffers
//! property edits, and the per-field-type schema that tells every rendering
//! context (builder, fill, preview, viewer) which sub-controls to show.
//! It compiles to WebAssembly unchanged — nothing here touches the DOM or a
//! clock, and persistence is reached only through the [`repo::FormRepository`]
//! boundary trait.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`element`] | Field types, field elements, and their typed properties |
//! | [`registry`] | Per-type defaults: labels, properties, fresh elements |
//! | [`matrix`] | The row/column grid and its pure mutation operations |
//! | [`document`] | Form metadata, the full document, and the save snapshot |
//! | [`session`] | Selection and draft-edit state machine |
//! | [`editor`] | Editor controller: document + session + undo/redo + save |
//! | [`schema`] | Field type → sub-control dispatch shared by all renderers |
//! | [`repo`] | Repository boundary trait and the in-memory fake |
//! | [`consts`] | Shared numeric constants (widths, seeded options, etc.) |

pub mod consts;
pub mod document;
pub mod editor;
pub mod element;
pub mod matrix;
pub mod registry;
pub mod repo;
pub mod schema;
pub mod session;
