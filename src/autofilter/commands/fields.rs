use crate::catalog::FieldCatalog;
use crate::error::Result;
use crate::project::Project;

/// Every filterable field, sorted.
pub fn all<P: Project + ?Sized>(project: &P) -> Result<Vec<String>> {
    FieldCatalog::new(project).all_filterable_fields()
}

/// Filterable fields containing `query`. Empty query, empty result.
pub fn search<P: Project + ?Sized>(project: &P, query: &str) -> Result<Vec<String>> {
    FieldCatalog::new(project).search(query)
}
