#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

//! the bodyviz-shapes crate provides the shape descriptors that annotate bodies in multibody
//! visualizations with a name, a color and their dimensions.

// Modules
/// colors and color name lookup
pub mod color;
/// errors
pub mod error;
/// scene documents
pub mod scene;
/// module for shape descriptors
pub mod shapes;
pub mod validate;

// Re-exports
pub use color::{Color, ColorLookup, ColorLookupError, NamedColors};
pub use error::ShapeError;
pub use scene::Scene;
pub use shapes::{Cube, Cylinder, Descriptor, Shape, ShapeBehaviour, ShapeKind};
