// Folio - core/mod.rs
//
// Core layer: boot sequence logic and portfolio content model.
// Pure logic; accepts strings and injected clocks, never touches the
// filesystem. I/O is handled by the app layer which feeds content here.

pub mod boot;
pub mod content;
