// Imports
use crate::validate::FIELD_TYPE;
use crate::ShapeError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The descriptor kind, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "clap-derive", derive(clap::ValueEnum))]
pub enum ShapeKind {
    #[default]
    /// The plain shape, used for particles.
    #[serde(rename = "Shape")]
    Shape,
    /// A cube.
    #[serde(rename = "Cube")]
    Cube,
    /// A cylinder.
    #[serde(rename = "Cylinder")]
    Cylinder,
}

impl ShapeKind {
    /// The kind tag, as it appears in the data map.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Shape => "Shape",
            Self::Cube => "Cube",
            Self::Cylinder => "Cylinder",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Shape, Self::Cube, Self::Cylinder]
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ShapeError::invalid_argument(FIELD_TYPE, format!("unknown shape type `{s}`"))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_kind() {
        assert_eq!("Cube".parse::<ShapeKind>(), Ok(ShapeKind::Cube));
        assert_eq!("cylinder".parse::<ShapeKind>(), Ok(ShapeKind::Cylinder));
        assert_eq!("Shape".parse::<ShapeKind>(), Ok(ShapeKind::Shape));

        let err = "Sphere".parse::<ShapeKind>().unwrap_err();
        assert_eq!(err.field(), FIELD_TYPE);
    }

    #[test]
    fn kind_tag() {
        assert_eq!(ShapeKind::Cylinder.to_string(), "Cylinder");
        assert_eq!(
            serde_json::to_value(ShapeKind::Cube).unwrap(),
            serde_json::json!("Cube")
        );
    }
}
