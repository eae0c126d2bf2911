//! Network layer: REST helpers for the external forms backend.

pub mod api;
