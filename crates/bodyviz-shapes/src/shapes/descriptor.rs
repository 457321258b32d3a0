// Imports
use super::{Cube, Cylinder, Shape, ShapeAttrs, ShapeBehaviour, ShapeKind};
use super::{DEFAULT_COLOR, DEFAULT_LENGTH, DEFAULT_NAME, DEFAULT_RADIUS};
use crate::color::{ColorLookup, NamedColors};
use crate::validate::{self, FIELD_COLOR, FIELD_NAME, FIELD_TYPE};
use crate::ShapeError;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

/// A descriptor of any kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Descriptor {
    /// A plain shape.
    Shape(Shape),
    /// A cube.
    Cube(Cube),
    /// A cylinder.
    Cylinder(Cylinder),
}

impl Default for Descriptor {
    fn default() -> Self {
        Self::Shape(Shape::default())
    }
}

impl From<Shape> for Descriptor {
    fn from(shape: Shape) -> Self {
        Self::Shape(shape)
    }
}

impl From<Cube> for Descriptor {
    fn from(cube: Cube) -> Self {
        Self::Cube(cube)
    }
}

impl From<Cylinder> for Descriptor {
    fn from(cylinder: Cylinder) -> Self {
        Self::Cylinder(cylinder)
    }
}

impl Descriptor {
    /// A default descriptor of the given kind.
    pub fn default_of_kind(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Shape => Self::Shape(Shape::default()),
            ShapeKind::Cube => Self::Cube(Cube::default()),
            ShapeKind::Cylinder => Self::Cylinder(Cylinder::default()),
        }
    }

    /// Build a descriptor from a loosely typed JSON object, resolving colors with [NamedColors].
    ///
    /// See [Descriptor::from_value_w_lookup].
    pub fn from_value(value: &Value) -> Result<Self, ShapeError> {
        Self::from_value_w_lookup(value, &NamedColors)
    }

    /// Build a descriptor from a loosely typed JSON object.
    ///
    /// The `type` entry selects the kind and defaults to `Shape`. Missing fields take their
    /// default values, entries the kind doesn't have are rejected.
    pub fn from_value_w_lookup(value: &Value, lookup: &dyn ColorLookup) -> Result<Self, ShapeError> {
        let object = value.as_object().ok_or_else(|| {
            ShapeError::invalid_argument("descriptor", "expected an object with shape fields")
        })?;

        let kind = object
            .get(FIELD_TYPE)
            .map(|v| validate::text_value(FIELD_TYPE, v)?.parse::<ShapeKind>())
            .transpose()?
            .unwrap_or_default();
        let name = object
            .get(FIELD_NAME)
            .map(|v| validate::text_value(FIELD_NAME, v))
            .transpose()?
            .unwrap_or(DEFAULT_NAME);
        let color = object
            .get(FIELD_COLOR)
            .map(|v| validate::text_value(FIELD_COLOR, v))
            .transpose()?
            .unwrap_or(DEFAULT_COLOR);

        let mut descriptor: Self = match kind {
            ShapeKind::Shape => Shape::new_w_lookup(name, color, lookup)?.into(),
            ShapeKind::Cube => Cube::new_w_lookup(name, color, DEFAULT_LENGTH, lookup)?.into(),
            ShapeKind::Cylinder => {
                Cylinder::new_w_lookup(name, color, DEFAULT_LENGTH, DEFAULT_RADIUS, lookup)?.into()
            }
        };

        for (field, v) in object
            .iter()
            .filter(|(field, _)| ![FIELD_TYPE, FIELD_NAME, FIELD_COLOR].contains(&field.as_str()))
        {
            descriptor.set_field_w_lookup(field, v, lookup)?;
        }

        debug!("Built descriptor `{descriptor}`");
        Ok(descriptor)
    }

    /// The side length of a cube or the length of a cylinder.
    pub fn length(&self) -> Option<f64> {
        match self {
            Self::Shape(_) => None,
            Self::Cube(cube) => Some(cube.length()),
            Self::Cylinder(cylinder) => Some(cylinder.length()),
        }
    }

    /// The radius of a cylinder.
    pub fn radius(&self) -> Option<f64> {
        match self {
            Self::Cylinder(cylinder) => Some(cylinder.radius()),
            _ => None,
        }
    }
}

impl ShapeBehaviour for Descriptor {
    fn kind(&self) -> ShapeKind {
        match self {
            Self::Shape(shape) => shape.kind(),
            Self::Cube(cube) => cube.kind(),
            Self::Cylinder(cylinder) => cylinder.kind(),
        }
    }

    fn attrs(&self) -> &ShapeAttrs {
        match self {
            Self::Shape(shape) => shape.attrs(),
            Self::Cube(cube) => cube.attrs(),
            Self::Cylinder(cylinder) => cylinder.attrs(),
        }
    }

    fn attrs_mut(&mut self) -> &mut ShapeAttrs {
        match self {
            Self::Shape(shape) => shape.attrs_mut(),
            Self::Cube(cube) => cube.attrs_mut(),
            Self::Cylinder(cylinder) => cylinder.attrs_mut(),
        }
    }

    fn set_field_w_lookup(
        &mut self,
        field: &str,
        value: &Value,
        lookup: &dyn ColorLookup,
    ) -> Result<(), ShapeError> {
        match self {
            Self::Shape(shape) => shape.set_field_w_lookup(field, value, lookup),
            Self::Cube(cube) => cube.set_field_w_lookup(field, value, lookup),
            Self::Cylinder(cylinder) => cylinder.set_field_w_lookup(field, value, lookup),
        }
    }

    fn to_data_map(&self) -> Map<String, Value> {
        match self {
            Self::Shape(shape) => shape.to_data_map(),
            Self::Cube(cube) => cube.to_data_map(),
            Self::Cylinder(cylinder) => cylinder.to_data_map(),
        }
    }
}

impl Serialize for Descriptor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_data_map().serialize(serializer)
    }
}

impl std::fmt::Display for Descriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shape(shape) => std::fmt::Display::fmt(shape, f),
            Self::Cube(cube) => std::fmt::Display::fmt(cube, f),
            Self::Cylinder(cylinder) => std::fmt::Display::fmt(cylinder, f),
        }
    }
}
