/// Process adapters for querying local package managers
mod apt_client;

pub use apt_client::AptClient;
