use super::{Project, VariableMap};
use crate::error::{AutofilterError, Result};
use crate::model::Layer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
struct ProjectDocument {
    #[serde(default)]
    variables: VariableMap,
    #[serde(default)]
    layers: Vec<Layer>,
    #[serde(flatten)]
    extra: VariableMap,
}

/// A project backed by a JSON document on disk.
///
/// The document is read on every call and never cached, so edits made by
/// other tools between two operations are picked up.
pub struct FileProject {
    path: PathBuf,
}

impl FileProject {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_document(&self) -> Result<ProjectDocument> {
        if !self.path.exists() {
            return Err(AutofilterError::Project(format!(
                "Project file not found: {}",
                self.path.display()
            )));
        }
        let content = fs::read_to_string(&self.path).map_err(AutofilterError::Io)?;
        let document = serde_json::from_str(&content).map_err(AutofilterError::Serialization)?;
        Ok(document)
    }

    /// Write to a sibling temp file, then rename over the original.
    fn save_document(&self, document: &ProjectDocument) -> Result<()> {
        let content =
            serde_json::to_string_pretty(document).map_err(AutofilterError::Serialization)?;
        let mut tmp_name = self.path.as_os_str().to_owned();
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);
        fs::write(&tmp_path, content).map_err(AutofilterError::Io)?;
        fs::rename(&tmp_path, &self.path).map_err(AutofilterError::Io)?;
        Ok(())
    }
}

impl Project for FileProject {
    fn custom_variables(&self) -> Result<VariableMap> {
        Ok(self.load_document()?.variables)
    }

    fn set_custom_variables(&mut self, variables: VariableMap) -> Result<()> {
        let mut document = self.load_document()?;
        document.variables = variables;
        self.save_document(&document)
    }

    fn layers(&self) -> Result<Vec<Layer>> {
        Ok(self.load_document()?.layers)
    }

    fn set_subset_string(&mut self, layer_id: &str, expression: &str) -> Result<()> {
        let mut document = self.load_document()?;
        let layer = document
            .layers
            .iter_mut()
            .find(|l| l.id == layer_id)
            .ok_or_else(|| AutofilterError::LayerNotFound(layer_id.to_string()))?;
        layer.subset_string = expression.to_string();
        self.save_document(&document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write_project(dir: &Path, value: serde_json::Value) -> PathBuf {
        let path = dir.join("project.json");
        fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();
        path
    }

    #[test]
    fn missing_project_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let project = FileProject::new(dir.path().join("nope.json"));
        assert!(matches!(
            project.layers(),
            Err(AutofilterError::Project(_))
        ));
    }

    #[test]
    fn reads_layers_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_project(
            dir.path(),
            json!({ "layers": [{ "id": "roads", "fields": ["a", "b"] }] }),
        );
        let project = FileProject::new(path);

        let layers = project.layers().unwrap();
        assert_eq!(layers.len(), 1);
        assert_eq!(layers[0].fields, vec!["a", "b"]);
        assert!(project.custom_variables().unwrap().is_empty());
    }

    #[test]
    fn subset_write_keeps_other_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_project(
            dir.path(),
            json!({
                "variables": { "author": "someone" },
                "layers": [
                    { "id": "roads", "fields": ["a"], "source": "roads.gpkg", "crs": "EPSG:4326" },
                    { "id": "rivers", "subset_string": "x = 1", "kind": "vectortile" }
                ],
                "title": "Survey"
            }),
        );
        let mut project = FileProject::new(&path);

        project.set_subset_string("roads", "y = 2").unwrap();

        let reopened = FileProject::new(&path);
        let layers = reopened.layers().unwrap();
        assert_eq!(layers[0].subset_string, "y = 2");
        assert_eq!(layers[1].subset_string, "x = 1");
        assert_eq!(reopened.custom_variables().unwrap()["author"], json!("someone"));
        assert!(!dir.path().join("project.json.tmp").exists());

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["layers"][0]["source"], "roads.gpkg");
        assert_eq!(raw["layers"][0]["crs"], "EPSG:4326");
        assert_eq!(raw["layers"][1]["kind"], "vectortile");
        assert_eq!(raw["title"], "Survey");
    }

    #[test]
    fn sees_external_edits_between_calls() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_project(dir.path(), json!({ "layers": [] }));
        let project = FileProject::new(&path);
        assert!(project.layers().unwrap().is_empty());

        write_project(dir.path(), json!({ "layers": [{ "id": "late" }] }));
        assert_eq!(project.layers().unwrap()[0].id, "late");
    }

    #[test]
    fn unknown_layer_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_project(dir.path(), json!({ "layers": [] }));
        let mut project = FileProject::new(path);
        assert!(matches!(
            project.set_subset_string("ghost", ""),
            Err(AutofilterError::LayerNotFound(_))
        ));
    }
}
