//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so individual components can depend on small
//! focused models: `editor` holds the open form's editing state, `forms`
//! holds the dashboard list. Both are provided as `RwSignal` contexts from
//! the app root.

pub mod editor;
pub mod forms;
