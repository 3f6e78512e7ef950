//! Named filter definitions, persisted in the project's variable bag.
//!
//! All definitions live under a single variable (by default
//! `editing_filters`) as a mapping from name to
//! `{ "selected_fields": [..], "query_condition": ".." }`. There is no cache:
//! every read goes back to the project, and every mutation rewrites the whole
//! entry in one `set_custom_variables` call.

use crate::error::Result;
use crate::model::FilterDefinition;
use crate::project::Project;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::ops::{Deref, DerefMut};

pub const DEFAULT_FILTERS_VARIABLE: &str = "editing_filters";

/// All definitions keyed by name.
pub type FilterMap = BTreeMap<String, FilterDefinition>;

/// On-disk shape of one definition. The name is the map key, not a field.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredFilter {
    #[serde(default, deserialize_with = "null_as_default")]
    selected_fields: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    query_condition: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl StoredFilter {
    fn decode(name: &str, raw: &Value) -> Option<FilterDefinition> {
        match StoredFilter::deserialize(raw) {
            Ok(stored) => Some(stored.into_definition(name.to_string())),
            Err(e) => {
                log::warn!("ignoring unreadable filter '{}': {}", name, e);
                None
            }
        }
    }

    fn into_definition(self, name: String) -> FilterDefinition {
        FilterDefinition {
            name,
            selected_fields: self.selected_fields,
            query_condition: self.query_condition,
        }
    }
}

impl From<&FilterDefinition> for StoredFilter {
    fn from(def: &FilterDefinition) -> Self {
        Self {
            selected_fields: def.selected_fields.clone(),
            query_condition: def.query_condition.clone(),
        }
    }
}

/// Access to the definitions stored in one project.
///
/// Built over `&P` for reads or `&mut P` for reads and writes.
pub struct FilterStore<T> {
    project: T,
    key: String,
}

impl<T> FilterStore<T>
where
    T: Deref,
    T::Target: Project,
{
    pub fn new(project: T, key: impl Into<String>) -> Self {
        Self {
            project,
            key: key.into(),
        }
    }

    /// The stored entry as raw JSON objects, one per name. A missing entry,
    /// or one that is not an object, reads as empty.
    fn raw_entries(&self) -> Result<Map<String, Value>> {
        let mut variables = self.project.custom_variables()?;
        match variables.remove(&self.key) {
            None => Ok(Map::new()),
            Some(Value::Object(entries)) => Ok(entries),
            Some(other) => {
                log::warn!("ignoring unreadable '{}' variable: {}", self.key, other);
                Ok(Map::new())
            }
        }
    }

    /// Reads every definition. Entries that do not decode are skipped, and
    /// the rest are still returned.
    pub fn load(&self) -> Result<FilterMap> {
        Ok(self
            .raw_entries()?
            .iter()
            .filter_map(|(name, raw)| {
                StoredFilter::decode(name, raw).map(|def| (name.clone(), def))
            })
            .collect())
    }

    pub fn get(&self, name: &str) -> Result<Option<FilterDefinition>> {
        Ok(self
            .raw_entries()?
            .get(name)
            .and_then(|raw| StoredFilter::decode(name, raw)))
    }

    pub fn names(&self) -> Result<Vec<String>> {
        Ok(self.load()?.into_keys().collect())
    }
}

impl<T> FilterStore<T>
where
    T: DerefMut,
    T::Target: Project,
{
    /// Replaces the stored entry with `all`, leaving every other variable as is.
    pub fn save(&mut self, all: &FilterMap) -> Result<()> {
        let mut entries = Map::new();
        for (name, def) in all {
            entries.insert(name.clone(), serde_json::to_value(StoredFilter::from(def))?);
        }
        self.write_entries(entries)
    }

    fn write_entries(&mut self, entries: Map<String, Value>) -> Result<()> {
        let mut variables = self.project.custom_variables()?;
        variables.insert(self.key.clone(), Value::Object(entries));
        self.project.set_custom_variables(variables)
    }

    /// Inserts or overwrites by name. Returns the definition it replaced.
    /// Other entries are written back as they were read, readable or not.
    pub fn upsert(&mut self, def: FilterDefinition) -> Result<Option<FilterDefinition>> {
        let mut entries = self.raw_entries()?;
        let stored = serde_json::to_value(StoredFilter::from(&def))?;
        let previous = entries
            .insert(def.name.clone(), stored)
            .and_then(|raw| StoredFilter::decode(&def.name, &raw));
        self.write_entries(entries)?;
        Ok(previous)
    }

    /// Removes the listed names, ignoring any that are not stored. Returns the
    /// names that were actually removed.
    pub fn remove(&mut self, names: &BTreeSet<String>) -> Result<Vec<String>> {
        let mut entries = self.raw_entries()?;
        let removed: Vec<String> = names
            .iter()
            .filter(|name| entries.remove(name.as_str()).is_some())
            .cloned()
            .collect();
        self.write_entries(entries)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::memory::InMemoryProject;
    use serde_json::json;

    const KEY: &str = DEFAULT_FILTERS_VARIABLE;

    fn def(name: &str, fields: &[&str], cond: &str) -> FilterDefinition {
        FilterDefinition::new(name, fields.iter().map(|f| f.to_string()).collect(), cond)
    }

    #[test]
    fn load_from_empty_project_is_empty() {
        let project = InMemoryProject::new();
        let store = FilterStore::new(&project, KEY);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn upsert_then_get_round_trips() {
        let mut project = InMemoryProject::new();
        let mut store = FilterStore::new(&mut project, KEY);
        store.upsert(def("big", &["a", "b"], "> 10")).unwrap();

        let loaded = store.get("big").unwrap().unwrap();
        assert_eq!(loaded, def("big", &["a", "b"], "> 10"));
    }

    #[test]
    fn upsert_overwrites_same_name() {
        let mut project = InMemoryProject::new();
        let mut store = FilterStore::new(&mut project, KEY);
        assert!(store.upsert(def("f", &["a"], "> 1")).unwrap().is_none());

        let previous = store.upsert(def("f", &["b"], "< 2")).unwrap();
        assert_eq!(previous, Some(def("f", &["a"], "> 1")));
        assert_eq!(store.names().unwrap(), vec!["f"]);
        assert_eq!(store.get("f").unwrap().unwrap().selected_fields, vec!["b"]);
    }

    #[test]
    fn duplicate_fields_are_stored_as_given() {
        let mut project = InMemoryProject::new();
        let mut store = FilterStore::new(&mut project, KEY);
        store.upsert(def("f", &["a", "a"], "= 1")).unwrap();
        assert_eq!(store.get("f").unwrap().unwrap().selected_fields, vec!["a", "a"]);
    }

    #[test]
    fn save_leaves_other_variables_untouched() {
        let mut project = InMemoryProject::new().with_variable("author", json!("someone"));
        FilterStore::new(&mut project, KEY)
            .upsert(def("f", &["a"], "IS NULL"))
            .unwrap();

        let variables = project.custom_variables().unwrap();
        assert_eq!(variables["author"], json!("someone"));
        assert_eq!(
            variables[KEY],
            json!({ "f": { "selected_fields": ["a"], "query_condition": "IS NULL" } })
        );
    }

    #[test]
    fn remove_ignores_absent_names_and_keeps_empty_entry() {
        let mut project = InMemoryProject::new();
        let mut store = FilterStore::new(&mut project, KEY);
        store.upsert(def("f", &["a"], "> 1")).unwrap();

        let names: BTreeSet<String> = ["f".to_string(), "ghost".to_string()].into();
        let removed = store.remove(&names).unwrap();
        assert_eq!(removed, vec!["f"]);
        assert!(store.load().unwrap().is_empty());

        let variables = project.custom_variables().unwrap();
        assert_eq!(variables[KEY], json!({}));
    }

    #[test]
    fn missing_sub_keys_default_to_empty() {
        let project = InMemoryProject::new().with_variable(KEY, json!({ "bare": {} }));
        let loaded = FilterStore::new(&project, KEY).get("bare").unwrap().unwrap();
        assert_eq!(loaded, FilterDefinition::empty("bare"));
    }

    #[test]
    fn corrupt_entry_degrades_to_empty() {
        let project = InMemoryProject::new().with_variable(KEY, json!("not a map"));
        assert!(FilterStore::new(&project, KEY).load().unwrap().is_empty());
    }

    #[test]
    fn null_sub_keys_default_to_empty() {
        let project = InMemoryProject::new().with_variable(
            KEY,
            json!({ "f": { "selected_fields": null, "query_condition": null } }),
        );
        let loaded = FilterStore::new(&project, KEY).get("f").unwrap().unwrap();
        assert_eq!(loaded, FilterDefinition::empty("f"));
    }

    #[test]
    fn one_unreadable_definition_does_not_hide_the_rest() {
        let project = InMemoryProject::new().with_variable(
            KEY,
            json!({
                "good": { "selected_fields": ["a"], "query_condition": "> 1" },
                "bad": { "selected_fields": "a" }
            }),
        );
        let store = FilterStore::new(&project, KEY);
        assert_eq!(store.names().unwrap(), vec!["good"]);
        assert!(store.get("bad").unwrap().is_none());
    }

    #[test]
    fn mutations_keep_unrelated_entries() {
        let mut project = InMemoryProject::new().with_variable(
            KEY,
            json!({
                "good1": { "selected_fields": ["a"], "query_condition": "> 1" },
                "good2": { "selected_fields": ["b"], "query_condition": "< 2" },
                "bad": { "selected_fields": 7 }
            }),
        );
        let mut store = FilterStore::new(&mut project, KEY);
        store.upsert(def("new", &["c"], "= 3")).unwrap();
        store.remove(&["good2".to_string()].into()).unwrap();

        assert_eq!(store.names().unwrap(), vec!["good1", "new"]);
        let variables = project.custom_variables().unwrap();
        assert_eq!(variables[KEY]["bad"], json!({ "selected_fields": 7 }));
        assert_eq!(
            variables[KEY]["good1"],
            json!({ "selected_fields": ["a"], "query_condition": "> 1" })
        );
    }

    #[test]
    fn reads_see_external_changes() {
        let mut project = InMemoryProject::new();
        FilterStore::new(&mut project, KEY)
            .upsert(def("f", &["a"], "> 1"))
            .unwrap();

        let mut variables = project.custom_variables().unwrap();
        variables.insert(
            KEY.to_string(),
            json!({ "g": { "selected_fields": ["b"], "query_condition": "< 3" } }),
        );
        project.set_custom_variables(variables).unwrap();

        let store = FilterStore::new(&project, KEY);
        assert_eq!(store.names().unwrap(), vec!["g"]);
    }

    #[test]
    fn custom_key_is_respected() {
        let mut project = InMemoryProject::new();
        FilterStore::new(&mut project, "my_filters")
            .upsert(def("f", &["a"], "> 1"))
            .unwrap();

        assert!(FilterStore::new(&project, KEY).load().unwrap().is_empty());
        assert_eq!(
            FilterStore::new(&project, "my_filters").names().unwrap(),
            vec!["f"]
        );
    }
}
