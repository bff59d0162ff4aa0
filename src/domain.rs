/*
 * Domain Module
 *
 * The toroidal rectangle boids live in. Coordinates run from the origin
 * to (half_width, half_height); a boid that drifts more than `margin`
 * past an edge re-enters from the opposite side.
 */

use nannou::prelude::Point2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub half_width: f32,
    pub half_height: f32,
    pub margin: f32,
}

impl Domain {
    pub fn new(half_width: f32, half_height: f32, margin: f32) -> Self {
        Self {
            half_width,
            half_height,
            margin,
        }
    }

    // Wrap a position that has crossed the margin on either axis
    pub fn wrap(&self, position: Point2) -> Point2 {
        let mut wrapped = position;
        wrapped.x = wrap_axis(position.x, self.half_width, self.margin);
        wrapped.y = wrap_axis(position.y, self.half_height, self.margin);
        wrapped
    }

    // Whether a position lies inside the wrapped region (edges included)
    pub fn contains(&self, position: Point2) -> bool {
        let in_axis = |v: f32, extent: f32| v >= -self.margin && v <= extent + self.margin;
        in_axis(position.x, self.half_width) && in_axis(position.y, self.half_height)
    }
}

#[inline]
fn wrap_axis(value: f32, extent: f32, margin: f32) -> f32 {
    if value > extent + margin {
        0.0
    } else if value < -margin {
        extent + margin
    } else {
        value
    }
}
