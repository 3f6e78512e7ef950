//! # Expression Composer
//!
//! Builds, tags, merges and strips filter fragments inside a layer's subset
//! expression. Everything here is a pure string transform; reading and writing
//! the expression belongs to the caller.
//!
//! ## Tagged fragments
//!
//! Each applied filter contributes two lines:
//!
//! ```text
//! -- AUTOFILTER: <name>
//! AND ( "field_a" <condition> OR "field_b" <condition> )
//! ```
//!
//! The `AND` is omitted when the fragment is the first content of an
//! otherwise empty expression. Lines above the first marker are user content
//! and are never touched.
//!
//! ## Retraction
//!
//! [`strip`] drops the first marker and *everything after it*. Fragments are
//! chained, so they are only ever removed together. A full apply cycle is
//! therefore "strip once, then append each selected filter in order".

use crate::model::FilterDefinition;
use std::collections::BTreeSet;

/// Literal prefix of every marker line.
pub const TAG_PREFIX: &str = "-- AUTOFILTER: ";

/// The marker line for a filter name.
pub fn tag_line(name: &str) -> String {
    format!("{}{}", TAG_PREFIX, name)
}

fn is_tag_line(line: &str) -> bool {
    line.starts_with(TAG_PREFIX)
}

/// Removes every tagged fragment, keeping the lines before the first marker.
pub fn strip(expression: &str) -> String {
    expression
        .split('\n')
        .take_while(|line| !is_tag_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The parenthesised `OR` clause for the fields of `definition` that exist on
/// the layer, or `None` when none of them do.
///
/// Field names are wrapped in double quotes verbatim; embedded quotes are not
/// escaped. The condition is appended after a single space even when empty.
pub fn build_clause(definition: &FilterDefinition, layer_fields: &BTreeSet<&str>) -> Option<String> {
    let sub_queries: Vec<String> = definition
        .selected_fields
        .iter()
        .filter(|field| layer_fields.contains(field.as_str()))
        .map(|field| format!("\"{}\" {}", field, definition.query_condition))
        .collect();

    if sub_queries.is_empty() {
        return None;
    }
    Some(format!("( {} )", sub_queries.join(" OR ")))
}

/// Appends a tagged clause to `expression`.
pub fn append_fragment(expression: &str, name: &str, clause: &str) -> String {
    let mut lines: Vec<String> = expression.split('\n').map(str::to_string).collect();

    if lines.len() == 1 && lines[0].is_empty() {
        lines[0] = tag_line(name);
        lines.push(clause.to_string());
    } else {
        lines.push(tag_line(name));
        lines.push(format!("AND {}", clause));
    }

    lines.join("\n")
}

/// Applies one definition to one layer's expression. Returns `None` when the
/// definition has no field on this layer, in which case the expression must be
/// left exactly as it was.
pub fn compose(
    expression: &str,
    definition: &FilterDefinition,
    layer_fields: &BTreeSet<&str>,
) -> Option<String> {
    let clause = build_clause(definition, layer_fields)?;
    Some(append_fragment(expression, &definition.name, &clause))
}

/// Names of all markers present in `expression`, top to bottom.
pub fn active_tags(expression: &str) -> Vec<String> {
    expression
        .split('\n')
        .filter_map(|line| line.strip_prefix(TAG_PREFIX))
        .map(str::to_string)
        .collect()
}
