// CocosProject - core/mod.rs
//
// Core project model: marker file parsing, platform descriptors, and the
// available platform registry.
// Dependencies: platform layer (host detection, filesystem probes), util.
// Must NOT depend on: app.

pub mod model;
pub mod platform_cfg;
pub mod project;
pub mod registry;
