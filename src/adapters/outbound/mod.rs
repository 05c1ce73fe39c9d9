/// Outbound adapters - Infrastructure implementations of outbound ports
pub mod caching_source;
pub mod console;
pub mod filesystem;
pub mod network;
pub mod process;
pub mod renderers;

pub use caching_source::CachingSource;
