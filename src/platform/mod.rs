// CocosProject - platform/mod.rs
//
// Platform abstraction layer: host OS, filesystem probes, tool config paths.
// Dependencies: standard library, directories, regex, toml.
// Must NOT depend on: app.

pub mod config;
pub mod fs;
pub mod host;
