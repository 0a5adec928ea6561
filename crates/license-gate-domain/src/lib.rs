//! License Gate Domain Layer
//!
//! This crate holds the value types and trait interfaces shared by the rest of
//! the workspace. It has ZERO external dependencies so that any host (a build
//! tool integration, the CLI, a test harness) can depend on it cheaply.
//!
//! ## Key Concepts
//!
//! - **PropertyValue**: a dynamically typed property entry (absent, boolean or text)
//! - **PropertyStore**: read-only key→value lookup with a root scope for fallbacks
//! - **ArtifactGav**: a dependency coordinate used as a deduplication key
//! - **ExcludeRule**: a group/artifact pair naming a transitive dependency to omit

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod artifact;
pub mod property;
pub mod traits;

// Re-exports for convenience
pub use artifact::{ArtifactGav, ExcludeRule};
pub use property::PropertyValue;
pub use traits::PropertyStore;
