//! Configuration module
//!
//! Path resolution and the settings file. Both are constructed by the
//! process entry point and passed down.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::Settings;
