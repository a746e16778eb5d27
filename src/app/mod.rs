// Folio - app/mod.rs
//
// Application layer: state management and content loading.
// Dependencies: core layer.
// Must NOT depend on: ui rendering, platform specifics.

pub mod content_mgr;
pub mod state;
