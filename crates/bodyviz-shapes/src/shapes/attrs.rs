// Imports
use super::{ShapeKind, DEFAULT_COLOR, DEFAULT_COLOR_RGB, DEFAULT_NAME};
use crate::color::{Color, ColorLookup, NamedColors};
use crate::validate::{self, FIELD_COLOR, FIELD_NAME, FIELD_TYPE};
use crate::ShapeError;
use serde_json::{Map, Value};
use tracing::debug;

/// The attributes every descriptor kind has: a name and a color.
///
/// The rgb color is only ever set together with the color name, so the two can't diverge.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeAttrs {
    name: String,
    color: String,
    color_rgb: Color,
}

impl Default for ShapeAttrs {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            color: DEFAULT_COLOR.to_string(),
            color_rgb: DEFAULT_COLOR_RGB,
        }
    }
}

impl ShapeAttrs {
    /// New attributes, resolving the color with [NamedColors].
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Result<Self, ShapeError> {
        Self::new_w_lookup(name, color, &NamedColors)
    }

    /// New attributes, resolving the color with the given lookup.
    pub fn new_w_lookup(
        name: impl Into<String>,
        color: impl Into<String>,
        lookup: &dyn ColorLookup,
    ) -> Result<Self, ShapeError> {
        let color = color.into();
        let color_rgb = validate::resolve_color(lookup, &color)?;

        Ok(Self {
            name: name.into(),
            color,
            color_rgb,
        })
    }

    /// The name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The color name.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// The rgb color resolved from the current color name.
    pub fn color_rgb(&self) -> Color {
        self.color_rgb
    }

    /// Set the color name and re-resolve the rgb color with [NamedColors].
    pub fn set_color(&mut self, color: impl Into<String>) -> Result<(), ShapeError> {
        self.set_color_w_lookup(color, &NamedColors)
    }

    /// Set the color name and re-resolve the rgb color with the given lookup.
    ///
    /// Nothing changes when the color can't be resolved.
    pub fn set_color_w_lookup(
        &mut self,
        color: impl Into<String>,
        lookup: &dyn ColorLookup,
    ) -> Result<(), ShapeError> {
        let color = color.into();
        let color_rgb = validate::resolve_color(lookup, &color)?;
        debug!(
            "Changing color of `{}` from `{}` to `{color}`",
            self.name, self.color
        );
        self.color = color;
        self.color_rgb = color_rgb;
        Ok(())
    }

    /// Set one of the common fields from a loosely typed value.
    pub(crate) fn set_field_w_lookup(
        &mut self,
        kind: ShapeKind,
        field: &str,
        value: &Value,
        lookup: &dyn ColorLookup,
    ) -> Result<(), ShapeError> {
        match field {
            FIELD_NAME => {
                let name = validate::text_value(field, value)?;
                self.set_name(name);
                Ok(())
            }
            FIELD_COLOR => {
                let color = validate::text_value(field, value)?;
                self.set_color_w_lookup(color, lookup)
            }
            _ => Err(validate::unknown_field(kind.as_str(), field)),
        }
    }

    /// Insert the common entries into the data map.
    pub(crate) fn insert_data(&self, kind: ShapeKind, map: &mut Map<String, Value>) {
        map.insert(FIELD_NAME.to_string(), Value::from(self.name.as_str()));
        map.insert(
            FIELD_COLOR.to_string(),
            Value::from(<[f64; 3]>::from(self.color_rgb).to_vec()),
        );
        map.insert(FIELD_TYPE.to_string(), Value::from(kind.as_str()));
    }
}

impl std::fmt::Display for ShapeAttrs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} color:{}", self.name, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorLookupError;
    use serde_json::json;

    #[test]
    fn default_matches_lookup() {
        let attrs = ShapeAttrs::default();

        assert_eq!(attrs.name(), "UnNamed");
        assert_eq!(attrs.color(), "grey");
        assert_eq!(NamedColors.lookup(DEFAULT_COLOR), Ok(attrs.color_rgb()));
        assert_eq!(ShapeAttrs::new(DEFAULT_NAME, DEFAULT_COLOR), Ok(attrs));
    }

    #[test]
    fn failed_color_change_keeps_previous() {
        let mut attrs = ShapeAttrs::new("a", "red").unwrap();

        assert!(attrs.set_color("not-a-color").is_err());
        assert_eq!(attrs.color(), "red");
        assert_eq!(attrs.color_rgb(), Color::RED);

        attrs.set_color("blue").unwrap();
        assert_eq!(attrs.color(), "blue");
        assert_eq!(attrs.color_rgb(), Color::BLUE);
    }

    #[test]
    fn custom_lookup() {
        let lookup = |name: &str| match name {
            "house" => Ok(Color::new(0.1, 0.2, 0.3)),
            _ => Err(ColorLookupError::UnknownColor(name.to_string())),
        };

        let mut attrs = ShapeAttrs::new_w_lookup("a", "house", &lookup).unwrap();
        assert!(attrs.color_rgb().approx_eq(Color::new(0.1, 0.2, 0.3)));

        // "red" is unknown to the custom lookup
        assert!(attrs.set_color_w_lookup("red", &lookup).is_err());
        assert_eq!(attrs.color(), "house");
        assert!(ShapeAttrs::new_w_lookup("b", "red", &lookup).is_err());
    }

    #[test]
    fn set_common_fields() {
        let mut attrs = ShapeAttrs::default();

        attrs
            .set_field_w_lookup(ShapeKind::Shape, FIELD_NAME, &json!("p1"), &NamedColors)
            .unwrap();
        attrs
            .set_field_w_lookup(ShapeKind::Shape, FIELD_COLOR, &json!("red"), &NamedColors)
            .unwrap();
        assert_eq!(attrs.name(), "p1");
        assert_eq!(attrs.color_rgb(), Color::RED);

        let err = attrs
            .set_field_w_lookup(ShapeKind::Shape, FIELD_NAME, &json!(42), &NamedColors)
            .unwrap_err();
        assert_eq!(err.field(), FIELD_NAME);
        assert_eq!(attrs.name(), "p1");

        let err = attrs
            .set_field_w_lookup(ShapeKind::Shape, "length", &json!(3), &NamedColors)
            .unwrap_err();
        assert_eq!(err.field(), "length");
    }

    #[test]
    fn display() {
        let attrs = ShapeAttrs::new("s", "blue").unwrap();
        assert_eq!(attrs.to_string(), "s color:blue");
    }
}
