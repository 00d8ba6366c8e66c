pub mod ports;

pub mod candidates;
pub mod configuration;
pub mod environment_context;
pub mod failure;
pub mod raw_scan;

pub mod loader;
pub use loader::ConfigurationLoader;
