use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Immutable 3D vector used for camera positions and directions.
///
/// Every operation returns a new value; nothing mutates its receiver or
/// argument. Componentwise addition is the `+` operator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vector3 {
    /// All components zero.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// Unit X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit Z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a vector from components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Componentwise difference.
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Scale every component by `scalar`.
    #[must_use]
    pub fn multiply(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Divide every component by `scalar`.
    ///
    /// Not guarded: dividing by zero yields IEEE infinities or NaN.
    #[must_use]
    pub fn divide(self, scalar: f32) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }

    /// Euclidean norm.
    #[must_use]
    pub fn length(self) -> f32 {
        Vec3::from(self).length()
    }

    /// Unit vector in the same direction, or [`Vector3::ZERO`] when the
    /// length is zero.
    #[must_use]
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            Self::ZERO
        } else {
            self.divide(len)
        }
    }

    /// Right-handed cross product.
    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Vec3::from(self).cross(Vec3::from(other)).into()
    }

    /// Dot product.
    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        Vec3::from(self).dot(Vec3::from(other))
    }

    /// Rotate about the Y axis by `angle` radians.
    ///
    /// Positive angles turn counter-clockwise when viewed from +Y looking
    /// toward the origin.
    #[must_use]
    pub fn rotate_y(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.x * cos - self.z * sin,
            self.y,
            self.x * sin + self.z * cos,
        )
    }

    /// Angle between two vectors in degrees.
    ///
    /// Returns `None` if either vector has zero length.
    #[must_use]
    pub fn angle_between(self, other: Self) -> Option<f32> {
        let lengths = self.length() * other.length();
        if lengths == 0.0 {
            return None;
        }
        let cos_theta = (self.dot(other) / lengths).clamp(-1.0, 1.0);
        Some(cos_theta.acos().to_degrees())
    }

    /// Area of the triangle spanned by two edge vectors.
    #[must_use]
    pub fn triangle_area(self, other: Self) -> f32 {
        self.cross(other).length() / 2.0
    }

    /// Whether every component is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Components as an array.
    #[must_use]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.multiply(rhs)
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;

    fn div(self, rhs: f32) -> Self {
        self.divide(rhs)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl From<Vec3> for Vector3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for Vec3 {
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: Vector3, b: Vector3, eps: f32) -> bool {
        (a - b).length() < eps
    }

    fn samples() -> Vec<Vector3> {
        vec![
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(-4.5, 0.25, 7.0),
            Vector3::new(0.0, -1.0, 0.0),
            Vector3::new(10.0, -20.0, 0.5),
            Vector3::new(0.001, 0.002, -0.003),
        ]
    }

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, -3.0, 9.0));
        assert_eq!(a - b, Vector3::new(-3.0, 7.0, -3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vector3::new(2.0, -2.5, 3.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        // receivers are untouched
        assert_eq!(a, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn divide_by_zero_is_not_guarded() {
        let v = Vector3::new(1.0, 0.0, -1.0).divide(0.0);
        assert!(v.x.is_infinite() && v.x > 0.0);
        assert!(v.y.is_nan());
        assert!(v.z.is_infinite() && v.z < 0.0);
        assert!(!v.is_finite());
    }

    #[test]
    fn length_of_pythagorean_triple() {
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).length(), 5.0);
        assert_eq!(Vector3::new(2.0, 3.0, 6.0).length(), 7.0);
    }

    #[test]
    fn normalize_yields_unit_length() {
        for v in samples() {
            let n = v.normalize();
            assert!((n.length() - 1.0).abs() < 1e-6, "{v} -> {n}");
        }
    }

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(Vector3::ZERO.normalize(), Vector3::ZERO);
    }

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        let vs = samples();
        for a in &vs {
            for b in &vs {
                let c = a.cross(*b);
                let scale = a.length() * b.length() * c.length().max(1.0);
                assert!(c.dot(*a).abs() <= 1e-4 * scale.max(1.0));
                assert!(c.dot(*b).abs() <= 1e-4 * scale.max(1.0));
            }
        }
    }

    #[test]
    fn cross_is_right_handed() {
        assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
        assert_eq!(Vector3::Y.cross(Vector3::Z), Vector3::X);
        assert_eq!(Vector3::Z.cross(Vector3::X), Vector3::Y);
    }

    #[test]
    fn products_match_component_formulas() {
        let a = Vector3::new(1.5, -2.0, 0.25);
        let b = Vector3::new(-3.0, 0.5, 4.0);
        assert_eq!(a.dot(b), 1.5 * -3.0 + -2.0 * 0.5 + 0.25 * 4.0);
        assert_eq!(
            a.cross(b),
            Vector3::new(
                -2.0 * 4.0 - 0.25 * 0.5,
                0.25 * -3.0 - 1.5 * 4.0,
                1.5 * 0.5 - -2.0 * -3.0,
            )
        );
    }

    #[test]
    fn rotate_y_preserves_length() {
        for v in samples() {
            for angle in [0.1, 1.0, -2.5, PI, 7.0] {
                let r = v.rotate_y(angle);
                assert!((r.length() - v.length()).abs() < 1e-4);
                assert_eq!(r.y, v.y);
            }
        }
    }

    #[test]
    fn rotate_y_round_trip() {
        for v in samples() {
            let r = v.rotate_y(0.7).rotate_y(-0.7);
            assert!(approx(r, v, 1e-4), "{v} -> {r}");
        }
    }

    #[test]
    fn rotate_y_quarter_turn() {
        // +X turns toward +Z for a positive angle
        let r = Vector3::X.rotate_y(FRAC_PI_2);
        assert!(approx(r, Vector3::Z, EPS));
        let r = Vector3::Z.rotate_y(FRAC_PI_2);
        assert!(approx(r, -Vector3::X, EPS));
    }

    #[test]
    fn angle_between_axes() {
        let angle = Vector3::X.angle_between(Vector3::Y);
        assert!(angle.is_some_and(|a| (a - 90.0).abs() < 1e-4));
        let angle = Vector3::X.angle_between(Vector3::X * 3.0);
        assert!(angle.is_some_and(|a| a.abs() < 1e-2));
        assert_eq!(Vector3::ZERO.angle_between(Vector3::X), None);
    }

    #[test]
    fn triangle_area_of_unit_legs() {
        assert_eq!(Vector3::X.triangle_area(Vector3::Y), 0.5);
        assert_eq!(Vector3::X.triangle_area(Vector3::X), 0.0);
    }

    #[test]
    fn display_uses_two_decimals() {
        let v = Vector3::new(0.0, -1.5, 1.234);
        assert_eq!(v.to_string(), "Vector(0.00, -1.50, 1.23)");
    }

    #[test]
    fn glam_conversion_round_trips() {
        let v = Vector3::new(1.0, -2.0, 3.5);
        let g: Vec3 = v.into();
        assert_eq!(g, Vec3::new(1.0, -2.0, 3.5));
        assert_eq!(Vector3::from(g), v);
        assert_eq!(Vector3::from([1.0, -2.0, 3.5]), v);
    }
}
