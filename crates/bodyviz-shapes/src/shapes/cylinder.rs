// Imports
use super::{ShapeAttrs, ShapeBehaviour, ShapeKind, DEFAULT_LENGTH, DEFAULT_RADIUS};
use crate::color::ColorLookup;
use crate::validate::{self, FIELD_LENGTH, FIELD_RADIUS};
use crate::ShapeError;
use serde::Serialize;
use serde_json::{Map, Value};

/// A cylinder with the given length and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    attrs: ShapeAttrs,
    length: f64,
    radius: f64,
}

impl Default for Cylinder {
    fn default() -> Self {
        Self {
            attrs: ShapeAttrs::default(),
            length: DEFAULT_LENGTH,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl Cylinder {
    /// A new cylinder.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        length: f64,
        radius: f64,
    ) -> Result<Self, ShapeError> {
        Ok(Self {
            attrs: ShapeAttrs::new(name, color)?,
            length: validate::number(FIELD_LENGTH, length)?,
            radius: validate::number(FIELD_RADIUS, radius)?,
        })
    }

    /// A new cylinder, resolving the color with the given lookup.
    pub fn new_w_lookup(
        name: impl Into<String>,
        color: impl Into<String>,
        length: f64,
        radius: f64,
        lookup: &dyn ColorLookup,
    ) -> Result<Self, ShapeError> {
        Ok(Self {
            attrs: ShapeAttrs::new_w_lookup(name, color, lookup)?,
            length: validate::number(FIELD_LENGTH, length)?,
            radius: validate::number(FIELD_RADIUS, radius)?,
        })
    }

    /// The length along the axis.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Set the length.
    pub fn set_length(&mut self, length: f64) -> Result<(), ShapeError> {
        self.length = validate::number(FIELD_LENGTH, length)?;
        Ok(())
    }

    /// The radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Set the radius.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), ShapeError> {
        self.radius = validate::number(FIELD_RADIUS, radius)?;
        Ok(())
    }
}

impl ShapeBehaviour for Cylinder {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Cylinder
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
            FIELD_RADIUS => self.set_radius(validate::number_value(field, value)?),
            _ => self
                .attrs
                .set_field_w_lookup(ShapeKind::Cylinder, field, value, lookup),
        }
    }

    fn to_data_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        self.attrs.insert_data(ShapeKind::Cylinder, &mut map);
        map.insert(FIELD_LENGTH.to_string(), Value::from(self.length));
        map.insert(FIELD_RADIUS.to_string(), Value::from(self.radius));
        map
    }
}

impl Serialize for Cylinder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_data_map().serialize(serializer)
    }
}

impl std::fmt::Display for Cylinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} length: {} radius: {}",
            ShapeKind::Cylinder,
            self.attrs,
            self.length,
            self.radius
        )
    }
}
