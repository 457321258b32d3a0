// Imports
use super::{ShapeAttrs, ShapeBehaviour, ShapeKind};
use crate::color::ColorLookup;
use crate::ShapeError;
use serde::Serialize;
use serde_json::{Map, Value};

/// A plain shape with a name and a color.
///
/// Used on its own for particle visualizations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    attrs: ShapeAttrs,
}

impl Shape {
    /// A new shape.
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Result<Self, ShapeError> {
        Ok(Self {
            attrs: ShapeAttrs::new(name, color)?,
        })
    }

    /// A new shape, resolving the color with the given lookup.
    pub fn new_w_lookup(
        name: impl Into<String>,
        color: impl Into<String>,
        lookup: &dyn ColorLookup,
    ) -> Result<Self, ShapeError> {
        Ok(Self {
            attrs: ShapeAttrs::new_w_lookup(name, color, lookup)?,
        })
    }
}

impl ShapeBehaviour for Shape {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Shape
    }

    fn attrs(&self) -> &ShapeAttrs {
        &self.attrs
    }

    fn attrs_mut(&mut self) -> &mut ShapeAttrs {
        &mut self.attrs
    }

    fn set_field_w_lookup(
        &mut self,
        field: &str,
        value: &Value,
        lookup: &dyn ColorLookup,
    ) -> Result<(), ShapeError> {
        self.attrs
            .set_field_w_lookup(ShapeKind::Shape, field, value, lookup)
    }

    fn to_data_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        self.attrs.insert_data(ShapeKind::Shape, &mut map);
        map
    }
}

impl Serialize for Shape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_data_map().serialize(serializer)
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", ShapeKind::Shape, self.attrs)
    }
}
