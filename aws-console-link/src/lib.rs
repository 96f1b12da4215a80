//! This crate provides the core logic for aws-console-link:
//! - ARN tokenization (resolving the `type:id`, `type/id` and bare-id
//!   delimiter ambiguity with positional heuristics)
//! - Console link resolution through a static (service, resource type)
//!   template table
//!
//! Everything is synchronous and side-effect free: no I/O, no network,
//! no shared mutable state. The library never verifies that a resource
//! actually exists; it only knows how the console addresses it.

mod arn;
mod console;
mod error;
mod templates;

// Re-exports for a small, focused public API
pub use arn::Arn;
pub use error::{ArnError, ArnResult};
