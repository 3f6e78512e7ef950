use crate::catalog::{fields_of, FieldCatalog};
use crate::commands::helpers::strip_all_layers;
use crate::commands::{CmdMessage, CmdResult};
use crate::composer;
use crate::error::Result;
use crate::project::Project;
use crate::store::FilterStore;

/// Makes `names` the exact set of active filters on every tabular layer.
///
/// All existing tagged fragments are stripped first. Each definition is then
/// appended in the given order, and every layer rewrite is written back before
/// the next one is composed, so later filters chain onto earlier ones.
pub fn run<P: Project + ?Sized>(project: &mut P, key: &str, names: &[String]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    for layer_id in strip_all_layers(project)? {
        result.mark_affected(&layer_id);
    }

    let definitions = FilterStore::new(&*project, key).load()?;

    for name in names {
        let Some(definition) = definitions.get(name) else {
            result.add_message(CmdMessage::warning(format!("Filter not found: {}", name)));
            continue;
        };

        let layers = FieldCatalog::new(&*project).tabular_layers()?;
        let mut applied = 0;
        for layer in layers {
            let layer_fields = fields_of(&layer);
            let Some(expression) =
                composer::compose(&layer.subset_string, definition, &layer_fields)
            else {
                continue;
            };
            log::debug!("applying filter '{}' to layer '{}'", name, layer.id);
            project.set_subset_string(&layer.id, &expression)?;
            result.mark_affected(&layer.id);
            applied += 1;
        }

        if applied == 0 {
            result.add_message(CmdMessage::warning(format!(
                "Filter '{}' matches no field on any layer",
                name
            )));
        } else {
            result.add_message(CmdMessage::success(format!(
                "Filter applied: {} ({} layer{})",
                name,
                applied,
                if applied == 1 { "" } else { "s" }
            )));
        }
    }

    Ok(result)
}
