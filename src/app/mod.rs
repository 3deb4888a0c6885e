// CocosProject - app/mod.rs
//
// Application layer: orchestrates core + platform for the CLI.

pub mod inspect;
