use crate::error::Result;
use crate::model::Layer;
use crate::project::Project;
use std::collections::BTreeSet;

/// Field names visible across the project's tabular layers.
pub struct FieldCatalog<'a, P: Project + ?Sized> {
    project: &'a P,
}

impl<'a, P: Project + ?Sized> FieldCatalog<'a, P> {
    pub fn new(project: &'a P) -> Self {
        Self { project }
    }

    /// Loaded layers that can carry attribute filters, in project order.
    pub fn tabular_layers(&self) -> Result<Vec<Layer>> {
        Ok(self
            .project
            .layers()?
            .into_iter()
            .filter(Layer::is_tabular)
            .collect())
    }

    /// Sorted, deduplicated union of all tabular layers' fields.
    pub fn all_filterable_fields(&self) -> Result<Vec<String>> {
        let fields: BTreeSet<String> = self
            .tabular_layers()?
            .into_iter()
            .flat_map(|layer| layer.fields)
            .collect();
        Ok(fields.into_iter().collect())
    }

    /// Catalog entries containing `query` (case-sensitive), in catalog order.
    /// An empty query matches nothing.
    pub fn search(&self, query: &str) -> Result<Vec<String>> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self
            .all_filterable_fields()?
            .into_iter()
            .filter(|field| field.contains(query))
            .collect())
    }
}

/// The attribute names of one layer.
pub fn fields_of(layer: &Layer) -> BTreeSet<&str> {
    layer.fields.iter().map(String::as_str).collect()
}
