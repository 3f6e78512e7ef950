//! # Host Project Layer
//!
//! This module defines the boundary between autofilter and the host project it
//! filters. The [`Project`] trait exposes exactly what the core needs:
//!
//! - a generic string-keyed **variable bag**, where named filter definitions live
//! - the set of **loaded layers**, each with a field list and a mutable subset
//!   expression
//!
//! Nothing in the core holds project state between calls. Every operation
//! re-reads what it needs through this trait, so edits made to the project by
//! anyone else are always observed.
//!
//! ## Implementations
//!
//! - [`fs::FileProject`]: A JSON project document on disk
//!   - Re-read on every call
//!   - Written with temp file + rename on every mutation
//!
//! - [`memory::InMemoryProject`]: In-memory project for testing and embedding
//!   - No persistence
//!
//! ## Project Document Format
//!
//! For `FileProject`:
//! ```text
//! {
//!   "variables": { "editing_filters": { ... }, ... },
//!   "layers": [
//!     { "id": "roads", "name": "Roads", "kind": "vector",
//!       "fields": ["a", "b"], "subset_string": "" }
//!   ]
//! }
//! ```

use crate::error::Result;
use crate::model::Layer;

pub mod fs;
pub mod memory;

/// The host project's variable bag.
pub type VariableMap = serde_json::Map<String, serde_json::Value>;

/// Abstract interface to the host project.
pub trait Project {
    /// Snapshot of all custom variables.
    fn custom_variables(&self) -> Result<VariableMap>;

    /// Replace the whole variable bag.
    fn set_custom_variables(&mut self, variables: VariableMap) -> Result<()>;

    /// All loaded layers, in project order, of every kind.
    fn layers(&self) -> Result<Vec<Layer>>;

    /// Overwrite the subset expression of one layer.
    fn set_subset_string(&mut self, layer_id: &str, expression: &str) -> Result<()>;
}
