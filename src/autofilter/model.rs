use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named, reusable filter rule.
///
/// `selected_fields` may name attributes that a given layer does not have;
/// applicability is decided per layer when the filter is applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterDefinition {
    pub name: String,
    pub selected_fields: Vec<String>,
    pub query_condition: String,
}

impl FilterDefinition {
    pub fn new(
        name: impl Into<String>,
        selected_fields: Vec<String>,
        query_condition: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            selected_fields,
            query_condition: query_condition.into(),
        }
    }

    /// A definition carrying only its name, used when a lookup misses.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Ordered field picks for a definition being edited.
///
/// Duplicates are dropped here, at selection time. The store keeps
/// whatever list it is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    fields: Vec<String>,
}

impl FieldSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field unless it is already selected. Returns whether it was added.
    pub fn add(&mut self, field: impl Into<String>) -> bool {
        let field = field.into();
        if self.fields.contains(&field) {
            return false;
        }
        self.fields.push(field);
        true
    }

    pub fn remove(&mut self, field: &str) -> bool {
        let before = self.fields.len();
        self.fields.retain(|f| f != field);
        self.fields.len() != before
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

impl<S: Into<String>> FromIterator<S> for FieldSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for field in iter {
            selection.add(field);
        }
        selection
    }
}

/// Kind of a layer. Kinds this crate does not know are kept by name so that
/// writing the project back does not change them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LayerKind {
    #[default]
    Vector,
    Raster,
    Other(String),
}

impl From<String> for LayerKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "vector" => LayerKind::Vector,
            "raster" => LayerKind::Raster,
            _ => LayerKind::Other(kind),
        }
    }
}

impl From<LayerKind> for String {
    fn from(kind: LayerKind) -> Self {
        match kind {
            LayerKind::Vector => "vector".to_string(),
            LayerKind::Raster => "raster".to_string(),
            LayerKind::Other(kind) => kind,
        }
    }
}

/// A data layer as seen through the host project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub kind: LayerKind,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub subset_string: String,
    /// Host-owned keys, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Layer {
    pub fn new(id: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            kind: LayerKind::Vector,
            fields,
            subset_string: String::new(),
            extra: Map::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_kind(mut self, kind: LayerKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_subset_string(mut self, expression: impl Into<String>) -> Self {
        self.subset_string = expression.into();
        self
    }

    /// The layer name, falling back to its id when unnamed.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    /// Only tabular layers carry attribute filters.
    pub fn is_tabular(&self) -> bool {
        self.kind == LayerKind::Vector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_suppresses_duplicates_and_keeps_order() {
        let mut selection = FieldSelection::new();
        assert!(selection.add("b"));
        assert!(selection.add("a"));
        assert!(!selection.add("b"));
        assert_eq!(selection.fields(), ["b", "a"]);
    }

    #[test]
    fn selection_remove_reports_presence() {
        let mut selection: FieldSelection = ["a", "b"].into_iter().collect();
        assert!(selection.remove("a"));
        assert!(!selection.remove("a"));
        assert_eq!(selection.into_fields(), vec!["b".to_string()]);
    }

    #[test]
    fn layer_defaults_when_deserialized() {
        let layer: Layer = serde_json::from_str(r#"{"id": "roads"}"#).unwrap();
        assert_eq!(layer.kind, LayerKind::Vector);
        assert!(layer.fields.is_empty());
        assert_eq!(layer.subset_string, "");
        assert_eq!(layer.display_name(), "roads");
    }

    #[test]
    fn unknown_kind_is_kept_and_not_tabular() {
        let layer: Layer = serde_json::from_str(r#"{"id": "m", "kind": "mesh"}"#).unwrap();
        assert_eq!(layer.kind, LayerKind::Other("mesh".into()));
        assert!(!layer.is_tabular());
        assert_eq!(serde_json::to_value(&layer).unwrap()["kind"], "mesh");
    }

    #[test]
    fn unknown_keys_survive_a_round_trip() {
        let layer: Layer =
            serde_json::from_str(r#"{"id": "roads", "source": "roads.gpkg", "crs": "EPSG:4326"}"#)
                .unwrap();
        assert_eq!(layer.extra["source"], "roads.gpkg");

        let value = serde_json::to_value(&layer.with_subset_string("x = 1")).unwrap();
        assert_eq!(value["source"], "roads.gpkg");
        assert_eq!(value["crs"], "EPSG:4326");
        assert_eq!(value["subset_string"], "x = 1");
    }

    #[test]
    fn raster_layers_are_not_tabular() {
        let layer = Layer::new("dem", vec![]).with_kind(LayerKind::Raster);
        assert!(!layer.is_tabular());
    }
}
