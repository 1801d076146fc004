//! Backup Index Library
//!
//! Maps local file paths to their logical storage keys within a backup
//! destination bucket, with YAML serialization for persistence.

pub mod errors;
pub mod index;
pub mod walker;

// Re-export commonly used types
pub use errors::IndexError;
pub use index::{Index, Sourcefile};
pub use walker::build_from_root;
pub type Result<T> = std::result::Result<T, IndexError>;
