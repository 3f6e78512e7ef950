use crate::error::Result;
use crate::project::Project;
use crate::store::FilterStore;

/// Names of all stored definitions, sorted.
pub fn run<P: Project + ?Sized>(project: &P, key: &str) -> Result<Vec<String>> {
    FilterStore::new(project, key).names()
}
