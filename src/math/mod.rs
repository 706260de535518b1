//! 3D vector arithmetic.
//!
//! [`Vector3`] is a small immutable value type. It converts to and from
//! [`glam::Vec3`] at the boundary where matrices are built.

mod vector;

pub use vector::Vector3;
