use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "autofilter", bin_name = "autofilter", version)]
#[command(about = "Named, reusable attribute filters for project layers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Project document to operate on (defaults to the configured project-file)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List saved filters
    #[command(alias = "ls")]
    List,

    /// Save a filter, replacing any filter with the same name
    #[command(alias = "s")]
    Save {
        /// Name of the filter
        name: String,

        /// Field to filter on (repeatable; duplicates are ignored)
        #[arg(short = 'f', long = "field")]
        fields: Vec<String>,

        /// Condition following each field, e.g. "> 10" or "IS NOT NULL"
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        condition: String,
    },

    /// Show a saved filter
    Show {
        /// Name of the filter
        name: String,
    },

    /// Delete saved filters (clears all active filters from layers)
    #[command(alias = "rm")]
    Delete {
        /// Names of the filters
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,
    },

    /// Apply exactly these filters to every layer, replacing active ones
    #[command(alias = "a")]
    Apply {
        /// Names of the filters, in application order
        #[arg(num_args = 0..)]
        names: Vec<String>,
    },

    /// Remove all active filters from every layer
    Clear,

    /// List filterable fields, or those containing QUERY
    Fields {
        /// Substring to search for (case-sensitive)
        query: Option<String>,
    },

    /// Show active filters per layer
    Status,

    /// Get or set configuration
    Config {
        /// Configuration key (filters-variable, project-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
