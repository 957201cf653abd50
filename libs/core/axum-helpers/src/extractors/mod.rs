//! Custom Axum extractors.

mod uuid_path;

pub use uuid_path::UuidPath;
