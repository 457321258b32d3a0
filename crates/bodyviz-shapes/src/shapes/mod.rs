// Modules
mod attrs;
mod cube;
mod cylinder;
mod descriptor;
mod kind;
mod shape;
mod shapebehaviour;

// Re-exports
pub use attrs::ShapeAttrs;
pub use cube::Cube;
pub use cylinder::Cylinder;
pub use descriptor::Descriptor;
pub use kind::ShapeKind;
pub use shape::Shape;
pub use shapebehaviour::ShapeBehaviour;

// Imports
use crate::Color;

/// The name of descriptors that weren't given one.
pub const DEFAULT_NAME: &str = "UnNamed";
/// The default color name.
pub const DEFAULT_COLOR: &str = "grey";
/// The rgb color of [DEFAULT_COLOR].
pub const DEFAULT_COLOR_RGB: Color = Color {
    r: 128.0 / 255.0,
    g: 128.0 / 255.0,
    b: 128.0 / 255.0,
};
/// The default length of cubes and cylinders.
pub const DEFAULT_LENGTH: f64 = 10.0;
/// The default radius of cylinders.
pub const DEFAULT_RADIUS: f64 = 5.0;
