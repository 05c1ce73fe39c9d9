/// Filesystem adapters for file I/O operations
mod file_writer;
mod static_repo;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use static_repo::StaticRepoSource;
