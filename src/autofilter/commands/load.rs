use crate::error::Result;
use crate::model::FilterDefinition;
use crate::project::Project;
use crate::store::FilterStore;

/// Fetches one definition for editing. A name that is not stored yields an
/// empty definition under that name.
pub fn run<P: Project + ?Sized>(project: &P, key: &str, name: &str) -> Result<FilterDefinition> {
    let definition = FilterStore::new(project, key).get(name)?;
    Ok(definition.unwrap_or_else(|| FilterDefinition::empty(name)))
}
