use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AutofilterError, Result};
use crate::model::FilterDefinition;
use crate::project::Project;
use crate::store::FilterStore;

/// Creates or overwrites a definition. No layer is touched.
pub fn run<P: Project + ?Sized>(
    project: &mut P,
    key: &str,
    name: &str,
    selected_fields: Vec<String>,
    query_condition: &str,
) -> Result<CmdResult> {
    validate_name(name)?;

    let definition = FilterDefinition::new(name, selected_fields, query_condition);
    let previous = FilterStore::new(project, key).upsert(definition)?;
    log::info!("saved filter '{}'", name);

    let mut result = CmdResult::default();
    if previous.is_some() {
        result.add_message(CmdMessage::success(format!("Filter updated: {}", name)));
    } else {
        result.add_message(CmdMessage::success(format!("Filter saved: {}", name)));
    }
    Ok(result)
}

/// Names become marker lines, so they must be non-empty and single-line.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(AutofilterError::InvalidName(
            "name cannot be empty".to_string(),
        ));
    }
    if name.contains(|c: char| c == '\n' || c == '\r') {
        return Err(AutofilterError::InvalidName(format!(
            "{:?} contains a line break",
            name
        )));
    }
    Ok(())
}
