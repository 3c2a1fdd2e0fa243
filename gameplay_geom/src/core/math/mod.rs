//! Core/common math functions for working with angles, 2D space, distances, and containment.
mod angles;
mod base_math;
mod bounds;
mod containment;
mod polygon;
mod vector2;

pub use angles::*;
pub use base_math::*;
pub use bounds::Bounds2;
pub use containment::*;
pub use polygon::*;
pub use vector2::{Vector2, vec2};
