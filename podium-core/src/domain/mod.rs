pub mod dataset;
pub mod error;
pub mod profile;
pub mod rules;
pub mod scoring;
pub mod summary;

// Convenience re-exports to simplify imports elsewhere
pub use error::DomainError;
