// Imports
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A rgb color, as resolved from a color name.
///
/// Serialized as a `[r, g, b]` triple.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "[f64; 3]", from = "[f64; 3]")]
pub struct Color {
    /// Red, ranging [0.0, 1.0].
    pub r: f64,
    /// Green, ranging [0.0, 1.0].
    pub g: f64,
    /// Blue, ranging [0.0, 1.0].
    pub b: f64,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Black color.
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// White color.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Red color.
    pub const RED: Self = Self {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };

    /// Green color.
    pub const GREEN: Self = Self {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };

    /// Blue color.
    pub const BLUE: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };

    /// A new color from rgb values. The components get clamped to [0.0, 1.0].
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// A gray color with all components set to `level`.
    pub fn gray(level: f64) -> Self {
        Self::new(level, level, level)
    }

    /// A new color from 8 bit rgb values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Approximate equality.
    pub fn approx_eq(self, other: Self) -> bool {
        approx::relative_eq!(self.r, other.r)
            && approx::relative_eq!(self.g, other.g)
            && approx::relative_eq!(self.b, other.b)
    }

    /// The components as a tuple.
    pub fn as_tuple(self) -> (f64, f64, f64) {
        self.into()
    }
}

impl From<(f64, f64, f64)> for Color {
    fn from(tuple: (f64, f64, f64)) -> Self {
        Self {
            r: tuple.0,
            g: tuple.1,
            b: tuple.2,
        }
    }
}

impl From<Color> for (f64, f64, f64) {
    fn from(color: Color) -> Self {
        (color.r, color.g, color.b)
    }
}

impl From<[f64; 3]> for Color {
    fn from(array: [f64; 3]) -> Self {
        Self {
            r: array[0],
            g: array[1],
            b: array[2],
        }
    }
}

impl From<Color> for [f64; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

impl From<palette::Srgb<u8>> for Color {
    fn from(srgb: palette::Srgb<u8>) -> Self {
        Self::from_rgb8(srgb.red, srgb.green, srgb.blue)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Error returned by a [ColorLookup] that can't resolve a color name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorLookupError {
    /// The name is not known to the lookup.
    #[error("unknown color `{0}`")]
    UnknownColor(String),
}

/// Resolves color names to rgb colors.
pub trait ColorLookup {
    /// Resolve the color name. Must be deterministic for a given name.
    fn lookup(&self, name: &str) -> Result<Color, ColorLookupError>;
}

impl<F> ColorLookup for F
where
    F: Fn(&str) -> Result<Color, ColorLookupError>,
{
    fn lookup(&self, name: &str) -> Result<Color, ColorLookupError> {
        self(name)
    }
}

/// The default color lookup.
///
/// Accepts, case-insensitively:
/// - the CSS / SVG named colors, e.g. `grey`, `red`, `steelblue`
/// - the single letter shorthands `b`, `g`, `r`, `c`, `m`, `y`, `k`, `w`
/// - hex strings in the form `#rrggbb` or `#rgb`
/// - gray levels as decimal strings in [0.0, 1.0], e.g. `0.25`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NamedColors;

impl NamedColors {
    fn shorthand(name: &str) -> Option<Color> {
        let color = match name {
            "b" => Color::BLUE,
            "g" => Color::new(0.0, 0.5, 0.0),
            "r" => Color::RED,
            "c" => Color::new(0.0, 0.75, 0.75),
            "m" => Color::new(0.75, 0.0, 0.75),
            "y" => Color::new(0.75, 0.75, 0.0),
            "k" => Color::BLACK,
            "w" => Color::WHITE,
            _ => return None,
        };
        Some(color)
    }
}

impl ColorLookup for NamedColors {
    fn lookup(&self, name: &str) -> Result<Color, ColorLookupError> {
        let key = name.trim().to_lowercase();

        if let Some(color) = Self::shorthand(&key) {
            return Ok(color);
        }
        if let Some(srgb) = palette::named::from_str(&key) {
            return Ok(Color::from(srgb));
        }
        if key.starts_with('#') {
            return key
                .parse::<palette::Srgb<u8>>()
                .map(Color::from)
                .map_err(|_| ColorLookupError::UnknownColor(name.to_string()));
        }
        // NaN and infinities fail the range check
        if let Ok(level) = key.parse::<f64>() {
            if (0.0..=1.0).contains(&level) {
                return Ok(Color::gray(level));
            }
        }

        Err(ColorLookupError::UnknownColor(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn named_colors() {
        let lookup = NamedColors;

        assert_eq!(lookup.lookup("red").unwrap(), Color::RED);
        assert_eq!(lookup.lookup("blue").unwrap(), Color::BLUE);
        assert_eq!(
            lookup.lookup("grey").unwrap().as_tuple(),
            (0.5019607843137255, 0.5019607843137255, 0.5019607843137255)
        );
        assert_eq!(lookup.lookup("gray").unwrap(), lookup.lookup("grey").unwrap());
        assert_eq!(lookup.lookup(" Red ").unwrap(), Color::RED);
    }

    #[test]
    fn shorthands_hex_and_gray_levels() {
        let lookup = NamedColors;

        assert_eq!(lookup.lookup("g").unwrap(), Color::new(0.0, 0.5, 0.0));
        assert_eq!(lookup.lookup("k").unwrap(), Color::BLACK);
        assert_eq!(lookup.lookup("#ff0000").unwrap(), Color::RED);
        assert_eq!(lookup.lookup("#00F").unwrap(), Color::BLUE);

        let gray = lookup.lookup("0.25").unwrap();
        assert_relative_eq!(gray.r, 0.25);
        assert_relative_eq!(gray.g, 0.25);
        assert_relative_eq!(gray.b, 0.25);
    }

    #[test]
    fn unknown_colors() {
        let lookup = NamedColors;

        for name in ["", "notacolor", "#12", "#gggggg", "1.5", "-0.1", "nan"] {
            assert_eq!(
                lookup.lookup(name),
                Err(ColorLookupError::UnknownColor(name.to_string())),
                "name: {name:?}"
            );
        }
    }

    #[test]
    fn closure_lookup() {
        let lookup = |name: &str| match name {
            "brand" => Ok(Color::new(0.2, 0.4, 0.6)),
            _ => Err(ColorLookupError::UnknownColor(name.to_string())),
        };

        assert!(lookup
            .lookup("brand")
            .unwrap()
            .approx_eq(Color::new(0.2, 0.4, 0.6)));
        assert!(lookup.lookup("red").is_err());
    }

    #[test]
    fn serializes_as_triple() {
        let json = serde_json::to_value(Color::RED).unwrap();
        assert_eq!(json, serde_json::json!([1.0, 0.0, 0.0]));

        let color: Color = serde_json::from_value(json).unwrap();
        assert_eq!(color, Color::RED);
    }
}
