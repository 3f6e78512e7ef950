use autofilter::api::{CmdMessage, LayerStatus, MessageLevel};
use autofilter::config::AutofilterConfig;
use autofilter::model::FilterDefinition;
use colored::Colorize;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_filter_names(names: &[String]) {
    if names.is_empty() {
        println!("No filters found.");
        return;
    }
    for name in names {
        println!("{}", name);
    }
}

pub(super) fn print_definition(definition: &FilterDefinition) {
    println!("{}", definition.name.bold());
    println!("--------------------------------");
    if definition.selected_fields.is_empty() {
        println!("{}", "fields:    (none)".dimmed());
    } else {
        println!("fields:    {}", definition.selected_fields.join(", "));
    }
    println!("condition: {}", definition.query_condition);
}

pub(super) fn print_fields(fields: &[String]) {
    if fields.is_empty() {
        println!("No fields found.");
        return;
    }
    for field in fields {
        println!("{}", field);
    }
}

pub(super) fn print_status(statuses: &[LayerStatus]) {
    if statuses.is_empty() {
        println!("No layers found.");
        return;
    }
    for status in statuses {
        let filters = if status.active_filters.is_empty() {
            "-".dimmed().to_string()
        } else {
            status.active_filters.join(", ").yellow().to_string()
        };
        println!("{}  {}", status.layer_name.bold(), filters);
    }
}

pub(super) fn print_config(config: &AutofilterConfig) {
    println!("filters-variable = {}", config.filters_variable);
    println!("project-file = {}", config.project_file);
}
