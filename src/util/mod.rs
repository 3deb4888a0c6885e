// CocosProject - util/mod.rs
//
// Utility modules: error types, named constants, logging setup.

pub mod constants;
pub mod error;
pub mod logging;
