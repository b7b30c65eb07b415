use std::fmt;
use std::ops::{Add, Div, Mul};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::{GeometryError, Result};
use crate::math::{PointCoords, Vector3, DEG_TO_RAD, EPSILON};

/// A direction or displacement in 3D space, independent of any location.
///
/// `Vector3D` is a plain value: it is `Copy`, owns no resources, and every
/// in-place operation (`normalize`, the `rotate_around_*` family, the setters)
/// acts on an exclusively borrowed value.
///
/// Degenerate arithmetic is not intercepted. Normalizing a zero vector or
/// dividing by zero yields non-finite components; use
/// [`try_normalize`](Self::try_normalize) or [`ensure_finite`](Self::ensure_finite)
/// when a checked result is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vector3D {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3D {
    /// Creates a vector from all three components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates the zero vector.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Creates a vector along X; `y` and `z` are zero.
    #[must_use]
    pub const fn from_x(x: f64) -> Self {
        Self::new(x, 0.0, 0.0)
    }

    /// Creates a vector in the XY plane; `z` is zero.
    #[must_use]
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Creates the displacement from `first` to `second` (`second - first`).
    #[must_use]
    pub fn from_points<P: PointCoords>(first: &P, second: &P) -> Self {
        Self::new(
            second.x() - first.x(),
            second.y() - first.y(),
            second.z() - first.z(),
        )
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.z
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    pub fn set_z(&mut self, z: f64) {
        self.z = z;
    }

    /// Overwrites all three components.
    pub fn set(&mut self, x: f64, y: f64, z: f64) {
        *self = Self::new(x, y, z);
    }

    /// Euclidean norm of the vector.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Scales the vector to unit length in place.
    ///
    /// A zero vector has no direction: every component becomes NaN.
    pub fn normalize(&mut self) {
        let len = self.length();
        if len < EPSILON {
            tracing::debug!(vector = %self, len, "normalizing a near-zero vector");
        }

        self.x /= len;
        self.y /= len;
        self.z /= len;
    }

    /// Scales the vector to unit length in place, refusing degenerate input.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] if any component is NaN or
    /// infinite, or [`GeometryError::ZeroVector`] if the length is below
    /// [`EPSILON`]. The vector is left unchanged in both cases.
    pub fn try_normalize(&mut self) -> Result<()> {
        if let Err(err) = self.ensure_finite() {
            tracing::debug!(vector = %self, "refusing to normalize");
            return Err(err);
        }

        let len = self.length();
        if len < EPSILON {
            tracing::debug!(vector = %self, len, "refusing to normalize");
            return Err(GeometryError::ZeroVector.into());
        }

        if !len.is_finite() {
            // Squared components overflowed; bring the largest down to 1.
            let scale = self.x.abs().max(self.y.abs()).max(self.z.abs());
            *self = *self / scale;
        }
        self.normalize();
        Ok(())
    }

    /// Returns `true` if no component is NaN or infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Checks that every component is finite.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] naming the first offending
    /// component.
    pub fn ensure_finite(&self) -> Result<()> {
        for (component, value) in [('x', self.x), ('y', self.y), ('z', self.z)] {
            if !value.is_finite() {
                return Err(GeometryError::NonFinite { component, value }.into());
            }
        }
        Ok(())
    }

    /// Rotates the vector about the X axis by `degrees`. `x` is unchanged.
    pub fn rotate_around_x(&mut self, degrees: f64) {
        let (sin, cos) = (degrees * DEG_TO_RAD).sin_cos();
        let (y, z) = (self.y, self.z);

        self.y = y * cos - z * sin;
        self.z = y * sin + z * cos;
    }

    /// Rotates the vector about the Y axis by `degrees`. `y` is unchanged.
    pub fn rotate_around_y(&mut self, degrees: f64) {
        let (sin, cos) = (degrees * DEG_TO_RAD).sin_cos();
        let (x, z) = (self.x, self.z);

        self.x = z * sin + x * cos;
        self.z = z * cos - x * sin;
    }

    /// Rotates the vector about the Z axis by `degrees`. `z` is unchanged.
    pub fn rotate_around_z(&mut self, degrees: f64) {
        let (sin, cos) = (degrees * DEG_TO_RAD).sin_cos();
        let (x, y) = (self.x, self.y);

        self.x = x * cos - y * sin;
        self.y = x * sin + y * cos;
    }
}

/// Tolerant equality: every component differs by less than [`EPSILON`].
///
/// The comparison uses the absolute difference, so it is symmetric. It is
/// not transitive, and NaN components never compare equal.
impl PartialEq for Vector3D {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPSILON
            && (self.y - other.y).abs() < EPSILON
            && (self.z - other.z).abs() < EPSILON
    }
}

impl AbsDiffEq for Vector3D {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3D {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { x, y, z } = self;
        write!(f, "Vector({x:?}, {y:?}, {z:?})")
    }
}

impl Mul<f64> for Vector3D {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self::new(k * self.x, k * self.y, k * self.z)
    }
}

impl Div<f64> for Vector3D {
    type Output = Self;

    fn div(self, k: f64) -> Self {
        Self::new(self.x / k, self.y / k, self.z / k)
    }
}

impl Add for Vector3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl From<Vector3> for Vector3D {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3D> for Vector3 {
    fn from(v: Vector3D) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}
