pub mod error;
pub mod geometry;
pub mod math;

pub use error::{Error, GeometryError, Result};
pub use geometry::Vector3D;
