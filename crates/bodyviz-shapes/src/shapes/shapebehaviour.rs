// Imports
use super::{ShapeAttrs, ShapeKind};
use crate::color::{Color, ColorLookup, NamedColors};
use crate::ShapeError;
use serde_json::{Map, Value};

/// Behaviour shared by all shape descriptors.
pub trait ShapeBehaviour {
    /// The kind tag of the descriptor.
    fn kind(&self) -> ShapeKind;

    /// The common attributes.
    fn attrs(&self) -> &ShapeAttrs;

    /// The common attributes, mutable.
    fn attrs_mut(&mut self) -> &mut ShapeAttrs;

    /// Set a field from a loosely typed value, resolving colors with the given lookup.
    ///
    /// Fails with [ShapeError::InvalidArgument] when the value has the wrong type or the descriptor
    /// kind has no such field. The field keeps its previous value on failure.
    fn set_field_w_lookup(
        &mut self,
        field: &str,
        value: &Value,
        lookup: &dyn ColorLookup,
    ) -> Result<(), ShapeError>;

    /// The data map consumed by the visualization frame.
    ///
    /// Contains `name`, `color` as rgb triple and `type`, plus the dimensions of the kind.
    fn to_data_map(&self) -> Map<String, Value>;

    /// Set a field from a loosely typed value, resolving colors with [NamedColors].
    fn set_field(&mut self, field: &str, value: &Value) -> Result<(), ShapeError> {
        self.set_field_w_lookup(field, value, &NamedColors)
    }

    /// The name.
    fn name(&self) -> &str {
        self.attrs().name()
    }

    /// Set the name.
    fn set_name(&mut self, name: &str) {
        self.attrs_mut().set_name(name);
    }

    /// The color name.
    fn color(&self) -> &str {
        self.attrs().color()
    }

    /// Set the color name, resolving the rgb color with [NamedColors].
    fn set_color(&mut self, color: &str) -> Result<(), ShapeError> {
        self.attrs_mut().set_color(color)
    }

    /// Set the color name, resolving the rgb color with the given lookup.
    fn set_color_w_lookup(
        &mut self,
        color: &str,
        lookup: &dyn ColorLookup,
    ) -> Result<(), ShapeError> {
        self.attrs_mut().set_color_w_lookup(color, lookup)
    }

    /// The rgb color of the current color name.
    fn color_rgb(&self) -> Color {
        self.attrs().color_rgb()
    }
}
