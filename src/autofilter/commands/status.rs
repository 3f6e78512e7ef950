use crate::catalog::FieldCatalog;
use crate::commands::LayerStatus;
use crate::composer;
use crate::error::Result;
use crate::project::Project;

/// Active filter names for every tabular layer, in project order.
pub fn run<P: Project + ?Sized>(project: &P) -> Result<Vec<LayerStatus>> {
    Ok(FieldCatalog::new(project)
        .tabular_layers()?
        .into_iter()
        .map(|layer| LayerStatus {
            active_filters: composer::active_tags(&layer.subset_string),
            layer_name: layer.display_name().to_string(),
            layer_id: layer.id,
        })
        .collect())
}
