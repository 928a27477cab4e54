//! Three-channel light quantities.
//!
//! Reflectance, radiance and emitted power share one representation and are
//! told apart only by unit convention. Values are not clamped here; the output
//! stage tone-maps them.

use crate::Vec3;

/// Linear RGB triple (reflectance, or any of the aliases below).
pub type Color = Vec3;

/// Radiance arriving at or leaving a point.
pub type Radiance = Color;

/// Total power emitted over the full sphere.
pub type Power = Color;
