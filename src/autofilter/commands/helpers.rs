use crate::catalog::FieldCatalog;
use crate::composer;
use crate::error::Result;
use crate::project::Project;

/// Removes every tagged fragment from every tabular layer. Layers with nothing
/// to strip are not rewritten. Returns the ids of the layers that changed.
pub fn strip_all_layers<P: Project + ?Sized>(project: &mut P) -> Result<Vec<String>> {
    let layers = FieldCatalog::new(&*project).tabular_layers()?;
    let mut changed = Vec::new();

    for layer in layers {
        let stripped = composer::strip(&layer.subset_string);
        if stripped != layer.subset_string {
            log::debug!("stripping autofilters from layer '{}'", layer.id);
            project.set_subset_string(&layer.id, &stripped)?;
            changed.push(layer.id);
        }
    }

    Ok(changed)
}
