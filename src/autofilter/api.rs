//! # API Facade
//!
//! [`FilterManager`] is the single entry point for every autofilter operation,
//! whatever the UI. It is a **thin facade**: each method dispatches to a
//! command in `commands/*.rs` with the project and the configured store key.
//!
//! ## Generic Over Project
//!
//! `FilterManager<P: Project>` is generic over the host project:
//! - Production: `FilterManager<FileProject>`
//! - Testing: `FilterManager<InMemoryProject>`
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O to the user**: Results come back as data and `CmdMessage`s
//!
//! API tests only check dispatch and return types; behaviour is tested in the
//! command modules.

use crate::commands;
use crate::config::AutofilterConfig;
use crate::error::Result;
use crate::model::FilterDefinition;
use crate::project::Project;
use std::collections::BTreeSet;

/// The main API facade for filter operations.
pub struct FilterManager<P: Project> {
    project: P,
    config: AutofilterConfig,
    paths: commands::AutofilterPaths,
}

impl<P: Project> FilterManager<P> {
    pub fn new(project: P, config: AutofilterConfig) -> Self {
        Self {
            project,
            config,
            paths: commands::AutofilterPaths { config_dir: None },
        }
    }

    pub fn with_paths(mut self, paths: commands::AutofilterPaths) -> Self {
        self.paths = paths;
        self
    }

    fn key(&self) -> &str {
        &self.config.filters_variable
    }

    pub fn list_definition_names(&self) -> Result<Vec<String>> {
        commands::list::run(&self.project, self.key())
    }

    pub fn save_filter(
        &mut self,
        name: &str,
        selected_fields: Vec<String>,
        query_condition: &str,
    ) -> Result<commands::CmdResult> {
        let key = self.config.filters_variable.as_str();
        commands::save::run(&mut self.project, key, name, selected_fields, query_condition)
    }

    pub fn load_for_edit(&self, name: &str) -> Result<FilterDefinition> {
        commands::load::run(&self.project, self.key(), name)
    }

    pub fn delete_filters<I: AsRef<str>>(&mut self, names: &[I]) -> Result<commands::CmdResult> {
        let names: BTreeSet<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
        let key = self.config.filters_variable.as_str();
        commands::delete::run(&mut self.project, key, &names)
    }

    pub fn apply_filters<I: AsRef<str>>(&mut self, names: &[I]) -> Result<commands::CmdResult> {
        let names: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
        let key = self.config.filters_variable.as_str();
        commands::apply::run(&mut self.project, key, &names)
    }

    pub fn clear_filters(&mut self) -> Result<commands::CmdResult> {
        commands::clear::run(&mut self.project)
    }

    pub fn all_filterable_fields(&self) -> Result<Vec<String>> {
        commands::fields::all(&self.project)
    }

    pub fn search(&self, query: &str) -> Result<Vec<String>> {
        commands::fields::search(&self.project, query)
    }

    pub fn status(&self) -> Result<Vec<commands::LayerStatus>> {
        commands::status::run(&self.project)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn project(&self) -> &P {
        &self.project
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{AutofilterPaths, CmdMessage, CmdResult, LayerStatus, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::memory::fixtures::ProjectFixture;
    use crate::project::memory::InMemoryProject;

    fn manager(project: InMemoryProject) -> FilterManager<InMemoryProject> {
        FilterManager::new(project, AutofilterConfig::default())
    }

    #[test]
    fn save_then_load_for_edit() {
        let mut api = manager(ProjectFixture::new().build());
        api.save_filter("f", vec!["a".into(), "c".into()], "> 5").unwrap();

        assert_eq!(api.list_definition_names().unwrap(), vec!["f"]);
        let loaded = api.load_for_edit("f").unwrap();
        assert_eq!(loaded.selected_fields, vec!["a", "c"]);
        assert_eq!(loaded.query_condition, "> 5");
    }

    #[test]
    fn apply_and_delete_dispatch_to_project() {
        let mut api = manager(ProjectFixture::new().with_filtered_layer("l", &["a", "b"], "x = 1").build());
        api.save_filter("f1", vec!["a".into(), "c".into()], "> 5").unwrap();

        let applied = api.apply_filters(&["f1"]).unwrap();
        assert_eq!(applied.affected_layers, vec!["l"]);
        assert_eq!(
            api.project().subset_string("l"),
            Some("x = 1\n-- AUTOFILTER: f1\nAND ( \"a\" > 5 )")
        );
        assert_eq!(api.status().unwrap()[0].active_filters, vec!["f1"]);

        api.delete_filters(&["f1"]).unwrap();
        assert_eq!(api.project().subset_string("l"), Some("x = 1"));
        assert!(api.list_definition_names().unwrap().is_empty());
    }

    #[test]
    fn clear_keeps_definitions() {
        let mut api = manager(ProjectFixture::new().with_layer("l", &["a"]).build());
        api.save_filter("f", vec!["a".into()], "IS NULL").unwrap();
        api.apply_filters(&["f"]).unwrap();

        api.clear_filters().unwrap();

        assert_eq!(api.project().subset_string("l"), Some(""));
        assert_eq!(api.list_definition_names().unwrap(), vec!["f"]);
    }

    #[test]
    fn field_catalog_queries() {
        let api = manager(
            ProjectFixture::new()
                .with_layer("l1", &["alpha", "beta"])
                .with_layer("l2", &["gamma", "alpha"])
                .build(),
        );
        assert_eq!(api.all_filterable_fields().unwrap(), vec!["alpha", "beta", "gamma"]);
        assert_eq!(api.search("mm").unwrap(), vec!["gamma"]);
        assert!(api.search("").unwrap().is_empty());
    }

    #[test]
    fn configured_key_is_used() {
        let mut config = AutofilterConfig::default();
        config.filters_variable = "team_filters".into();
        let mut api = FilterManager::new(InMemoryProject::new(), config);
        api.save_filter("f", vec![], "").unwrap();

        let variables = api.project().custom_variables().unwrap();
        assert!(variables.contains_key("team_filters"));
        assert!(!variables.contains_key("editing_filters"));
    }
}
