/*
 * Vector Utilities Module
 *
 * Magnitude helpers used by the steering rules and the integrator.
 * Both helpers are total: a zero-length input never produces NaN.
 */

use nannou::prelude::Vec2;

// Below this length a vector has no usable direction
const EPSILON: f32 = f32::EPSILON;

/// Magnitude of `v`.
#[inline]
pub fn magnitude(v: Vec2) -> f32 {
    v.length()
}

/// Unit vector in the direction of `v`, or the zero vector when `v` has no direction.
#[inline]
pub fn unit(v: Vec2) -> Vec2 {
    let length = v.length();
    if length <= EPSILON {
        return Vec2::ZERO;
    }
    v / length
}

/// Returns a vector with the direction of `v` and a length of exactly `magnitude`.
///
/// A zero (or sub-epsilon) `v` has no direction, so the zero vector is returned.
#[inline]
pub fn set_magnitude(v: Vec2, magnitude: f32) -> Vec2 {
    unit(v) * magnitude
}

/// Returns `v` unchanged if it is no longer than `max_magnitude`, otherwise `v` rescaled to it.
#[inline]
pub fn limit_magnitude(v: Vec2, max_magnitude: f32) -> Vec2 {
    if v.length_squared() > max_magnitude * max_magnitude {
        set_magnitude(v, max_magnitude)
    } else {
        v
    }
}
