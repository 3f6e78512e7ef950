use crate::commands::helpers::strip_all_layers;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::project::Project;

/// Removes all active filters from every layer. Stored definitions are kept.
pub fn run<P: Project + ?Sized>(project: &mut P) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let changed = strip_all_layers(project)?;

    if changed.is_empty() {
        result.add_message(CmdMessage::info("No active filters"));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Filters cleared from {} layer{}",
            changed.len(),
            if changed.len() == 1 { "" } else { "s" }
        )));
    }
    result.affected_layers = changed;
    Ok(result)
}
