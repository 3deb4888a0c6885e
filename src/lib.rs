// CocosProject - lib.rs
//
// Library entry point. Locates a game project from any directory inside it
// and reports which target platforms can be built on this host.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;

pub use crate::core::model::{HostOs, Language, Platform};
pub use crate::core::platform_cfg::PlatformConfig;
pub use crate::core::project::Project;
pub use crate::core::registry::AvailablePlatforms;
