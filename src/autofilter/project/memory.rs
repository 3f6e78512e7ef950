use super::{Project, VariableMap};
use crate::error::{AutofilterError, Result};
use crate::model::Layer;

/// In-memory project for testing and embedding.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProject {
    variables: VariableMap,
    layers: Vec<Layer>,
}

impl InMemoryProject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.variables.insert(key.into(), value);
        self
    }

    pub fn add_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
    }

    /// Current subset expression of a layer, if the layer exists.
    pub fn subset_string(&self, layer_id: &str) -> Option<&str> {
        self.layers
            .iter()
            .find(|l| l.id == layer_id)
            .map(|l| l.subset_string.as_str())
    }
}

impl Project for InMemoryProject {
    fn custom_variables(&self) -> Result<VariableMap> {
        Ok(self.variables.clone())
    }

    fn set_custom_variables(&mut self, variables: VariableMap) -> Result<()> {
        self.variables = variables;
        Ok(())
    }

    fn layers(&self) -> Result<Vec<Layer>> {
        Ok(self.layers.clone())
    }

    fn set_subset_string(&mut self, layer_id: &str, expression: &str) -> Result<()> {
        let layer = self
            .layers
            .iter_mut()
            .find(|l| l.id == layer_id)
            .ok_or_else(|| AutofilterError::LayerNotFound(layer_id.to_string()))?;
        layer.subset_string = expression.to_string();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{FilterDefinition, LayerKind};
    use crate::store::FilterStore;

    pub const FILTERS_KEY: &str = crate::store::DEFAULT_FILTERS_VARIABLE;

    pub struct ProjectFixture {
        pub project: InMemoryProject,
    }

    impl Default for ProjectFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ProjectFixture {
        pub fn new() -> Self {
            Self {
                project: InMemoryProject::new(),
            }
        }

        pub fn with_layer(mut self, id: &str, fields: &[&str]) -> Self {
            self.project.add_layer(Layer::new(id, to_strings(fields)));
            self
        }

        pub fn with_filtered_layer(mut self, id: &str, fields: &[&str], subset: &str) -> Self {
            self.project
                .add_layer(Layer::new(id, to_strings(fields)).with_subset_string(subset));
            self
        }

        pub fn with_raster_layer(mut self, id: &str) -> Self {
            self.project
                .add_layer(Layer::new(id, vec![]).with_kind(LayerKind::Raster));
            self
        }

        pub fn with_filter(mut self, name: &str, fields: &[&str], condition: &str) -> Self {
            FilterStore::new(&mut self.project, FILTERS_KEY)
                .upsert(FilterDefinition::new(name, to_strings(fields), condition))
                .unwrap();
            self
        }

        pub fn build(self) -> InMemoryProject {
            self.project
        }
    }

    pub fn to_strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }
}
