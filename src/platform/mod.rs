// Folio - platform/mod.rs
//
// Platform layer: directory resolution and config.toml loading.
// Dependencies: util. Must NOT depend on: core, app, ui.

pub mod config;
