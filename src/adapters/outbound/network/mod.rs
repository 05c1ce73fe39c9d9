/// Network adapters for remote package registries
mod nuget_client;

pub use nuget_client::NuGetClient;
