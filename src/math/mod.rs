/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type used by the linear-algebra side of the crate.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Ratio of a circle's circumference to its diameter.
pub const PI: f64 = std::f64::consts::PI;

/// Global tolerance for floating-point comparisons.
pub const EPSILON: f64 = 1e-10;

/// Multiplier converting degrees to radians.
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// A location in 3D space that exposes its coordinates.
pub trait PointCoords {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn z(&self) -> f64;
}

impl PointCoords for Point3 {
    fn x(&self) -> f64 {
        self.coords.x
    }

    fn y(&self) -> f64 {
        self.coords.y
    }

    fn z(&self) -> f64 {
        self.coords.z
    }
}
