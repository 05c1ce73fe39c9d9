/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod explore_request;
mod explore_response;
mod render_format;
mod source_mode;

pub use explore_request::ExploreRequest;
pub use explore_response::ExploreResponse;
pub use render_format::RenderFormat;
pub use source_mode::SourceMode;
