//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::FinsightPaths;
pub use settings::Settings;
