// Imports
use super::{ShapeAttrs, ShapeBehaviour, ShapeKind, DEFAULT_LENGTH};
use crate::color::ColorLookup;
use crate::validate::{self, FIELD_LENGTH};
use crate::ShapeError;
use serde::Serialize;
use serde_json::{Map, Value};

/// A cube with the given side length.
#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    attrs: ShapeAttrs,
    length: f64,
}

impl Default for Cube {
    fn default() -> Self {
        Self {
            attrs: ShapeAttrs::default(),
            length: DEFAULT_LENGTH,
        }
    }
}

impl Cube {
    /// A new cube.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        length: f64,
    ) -> Result<Self, ShapeError> {
        Ok(Self {
            attrs: ShapeAttrs::new(name, color)?,
            length: validate::number(FIELD_LENGTH, length)?,
        })
    }

    /// A new cube, resolving the color with the given lookup.
    pub fn new_w_lookup(
        name: impl Into<String>,
        color: impl Into<String>,
        length: f64,
        lookup: &dyn ColorLookup,
    ) -> Result<Self, ShapeError> {
        Ok(Self {
            attrs: ShapeAttrs::new_w_lookup(name, color, lookup)?,
            length: validate::number(FIELD_LENGTH, length)?,
        })
    }

    /// The side length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Set the side length.
    pub fn set_length(&mut self, length: f64) -> Result<(), ShapeError> {
        self.length = validate::number(FIELD_LENGTH, length)?;
        Ok(())
    }
}

impl ShapeBehaviour for Cube {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Cube
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
        match field {
            FIELD_LENGTH => self.set_length(validate::number_value(field, value)?),
            _ => self
                .attrs
                .set_field_w_lookup(ShapeKind::Cube, field, value, lookup),
        }
    }

    fn to_data_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        self.attrs.insert_data(ShapeKind::Cube, &mut map);
        map.insert(FIELD_LENGTH.to_string(), Value::from(self.length));
        map
    }
}

impl Serialize for Cube {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_data_map().serialize(serializer)
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} length: {}",
            ShapeKind::Cube,
            self.attrs,
            self.length
        )
    }
}
