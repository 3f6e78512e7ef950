use crate::commands::helpers::strip_all_layers;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::project::Project;
use crate::store::FilterStore;
use std::collections::BTreeSet;

/// Deletes the named definitions.
///
/// Every active fragment on every layer is stripped first, whichever names
/// are being deleted.
pub fn run<P: Project + ?Sized>(
    project: &mut P,
    key: &str,
    names: &BTreeSet<String>,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    result.affected_layers = strip_all_layers(project)?;

    let removed = FilterStore::new(project, key).remove(names)?;
    log::info!("deleted {} filter(s)", removed.len());

    if removed.is_empty() {
        result.add_message(CmdMessage::info("No matching filters to delete"));
    }
    for name in removed {
        result.add_message(CmdMessage::success(format!("Filter deleted: {}", name)));
    }
    Ok(result)
}
