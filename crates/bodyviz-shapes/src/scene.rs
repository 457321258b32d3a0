// Imports
use crate::color::{ColorLookup, NamedColors};
use crate::shapes::{Descriptor, ShapeBehaviour, ShapeKind};
use anyhow::Context;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// A collection of descriptors, as loaded from a scene document.
///
/// Scene documents are JSON objects with a `shapes` array of descriptor entries,
/// see [Descriptor::from_value]. Serializing a scene yields the same layout with every entry
/// replaced by its data map.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename = "scene")]
pub struct Scene {
    /// The descriptors, in document order.
    #[serde(rename = "shapes")]
    pub shapes: Vec<Descriptor>,
}

impl Scene {
    /// Load a scene from the bytes of a JSON document, resolving colors with [NamedColors].
    pub fn load_from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        Self::load_from_bytes_w_lookup(bytes, &NamedColors)
    }

    /// Load a scene from the bytes of a JSON document.
    pub fn load_from_bytes_w_lookup(
        bytes: &[u8],
        lookup: &dyn ColorLookup,
    ) -> anyhow::Result<Self> {
        let value: Value =
            serde_json::from_slice(bytes).context("Parsing scene document as JSON failed.")?;
        Self::from_value_w_lookup(&value, lookup)
    }

    /// Build a scene from a JSON value, resolving colors with the given lookup.
    ///
    /// Fails on the first invalid entry.
    pub fn from_value_w_lookup(value: &Value, lookup: &dyn ColorLookup) -> anyhow::Result<Self> {
        let entries = value
            .get("shapes")
            .and_then(Value::as_array)
            .ok_or_else(|| anyhow::anyhow!("Scene document has no `shapes` array."))?;

        let shapes = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Descriptor::from_value_w_lookup(entry, lookup)
                    .with_context(|| format!("Invalid shape entry at index {i}."))
            })
            .collect::<anyhow::Result<Vec<Descriptor>>>()?;

        debug!("Loaded scene with {} shapes", shapes.len());
        Ok(Self { shapes })
    }

    /// The descriptors of the given kind.
    pub fn shapes_of_kind(&self, kind: ShapeKind) -> impl Iterator<Item = &Descriptor> {
        self.shapes.iter().filter(move |d| d.kind() == kind)
    }

    /// The exported scene as pretty printed JSON bytes.
    pub fn export_to_bytes(&self) -> anyhow::Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).context("Serializing scene failed.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Cube, Shape};
    use serde_json::json;

    #[test]
    fn load_scene() {
        let bytes = br#"{
            "shapes": [
                {},
                { "type": "Cube", "name": "b1", "color": "red", "length": 12 },
                { "type": "Cylinder", "name": "c1", "color": "blue" }
            ]
        }"#;
        let scene = Scene::load_from_bytes(bytes).unwrap();

        assert_eq!(scene.shapes.len(), 3);
        assert_eq!(scene.shapes[0], Descriptor::Shape(Shape::default()));
        assert_eq!(
            scene.shapes[1],
            Descriptor::Cube(Cube::new("b1", "red", 12.0).unwrap())
        );
        assert_eq!(scene.shapes_of_kind(ShapeKind::Cylinder).count(), 1);
    }

    #[test]
    fn invalid_documents() {
        assert!(Scene::load_from_bytes(b"not json").is_err());
        assert!(Scene::load_from_bytes(b"{}").is_err());
        assert!(Scene::load_from_bytes(br#"{ "shapes": {} }"#).is_err());

        let err = Scene::load_from_bytes(br#"{ "shapes": [{}, { "name": 5 }] }"#).unwrap_err();
        assert_eq!(err.to_string(), "Invalid shape entry at index 1.");
        assert!(err.root_cause().to_string().contains("`name`"));
    }

    #[test]
    fn export() {
        let scene = Scene {
            shapes: vec![Cube::new("b1", "red", 12.0).unwrap().into()],
        };
        let exported: Value = serde_json::from_slice(&scene.export_to_bytes().unwrap()).unwrap();

        assert_eq!(
            exported,
            json!({
                "shapes": [{
                    "name": "b1",
                    "color": [1.0, 0.0, 0.0],
                    "type": "Cube",
                    "length": 12.0,
                }]
            })
        );
    }
}
