// podium-core/src/ports/mod.rs

pub mod sink;
pub mod source;

pub use sink::SummarySink;
pub use source::DatasetSource;
