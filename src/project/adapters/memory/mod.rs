//! In-memory project storage.

mod project;

pub use project::InMemoryProjectRepository;
