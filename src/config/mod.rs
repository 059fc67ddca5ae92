//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::DivvyPaths;
pub use settings::Settings;
