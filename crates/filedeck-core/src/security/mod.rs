//! Path containment for file-management tools.
//!
//! All filesystem-touching operations go through [`PathGuard`], which checks
//! that a requested path resolves inside one of the allowed root directories
//! configured at process start. The guard applies uniformly to reads and
//! writes.

pub mod errors;
pub mod guard;
pub mod policy;

pub use errors::SecurityError;
pub use guard::{PathGuard, ValidatedPath};
pub use policy::AllowedRoots;
