//! Stateless 2D gameplay geometry: angle/vector conversions, distance and
//! collision queries, polygon area/centroid computation, and point-in-shape
//! tests.
//!
//! Everything in this crate is a pure function over plain value types
//! ([`Vector2`], [`Bounds2`], and vertex slices). The crate holds no state of
//! any kind (no caching, no globals), so every operation is referentially
//! transparent, reentrant, and safe to call from any thread without locking.
//!
//! Angles are in degrees and follow a screen-space convention where 0° points
//! up, see [`core::math::SCREEN_ANGLE_OFFSET_DEGREES`].
//!
//! Missing inputs follow two distinct policies (kept deliberately separate):
//!
//! * Query functions such as [`dist`](core::math::dist),
//!   [`angle_between`](core::math::angle_between), and
//!   [`point_in_bounds`](core::math::point_in_bounds) accept `Option` inputs
//!   and propagate `None` so callers must handle the missing result.
//! * Collision tests such as [`circles_collided`](core::math::circles_collided)
//!   and [`bounds_collided`](core::math::bounds_collided) answer a plain
//!   `false` when any input is missing.
//!
//! Numeric singularities (normalizing a zero-length vector, centroid of a
//! degenerate polygon) fail explicitly with [`Error`] rather than leaking
//! `NaN`/`Inf` into downstream math.
#[macro_use]
mod macros;
mod errors;

pub mod core;

pub use crate::core::math::{Bounds2, Vector2};
pub use crate::errors::Error;
