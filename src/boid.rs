/*
 * Boid Module
 *
 * This module defines the Boid struct: the state of a single agent and the
 * per-agent parts of a tick (boundary wrap, force accumulation, integration).
 * Steering itself lives in the rules module, since it needs the whole flock.
 */

use nannou::prelude::*;

use crate::domain::Domain;
use crate::vector::limit_magnitude;

#[derive(Clone, Debug, PartialEq)]
pub struct Boid {
    pub position: Point2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    pub max_speed: f32,
    pub max_force: f32,
}

impl Boid {
    pub fn new(position: Point2, velocity: Vec2, max_speed: f32, max_force: f32) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vec2::ZERO,
            max_speed,
            max_force,
        }
    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    // Euclidean distance between two boids
    pub fn distance(&self, other: &Boid) -> f32 {
        self.position.distance(other.position)
    }

    // Apply a force to the boid
    pub fn apply_force(&mut self, force: Vec2) {
        self.acceleration += force;
    }

    /// Advance one tick: move by the current velocity, then let the
    /// accumulated acceleration change the velocity for the next tick.
    pub fn update(&mut self) {
        self.position += self.velocity;
        self.velocity = limit_magnitude(self.velocity + self.acceleration, self.max_speed);
        self.acceleration = Vec2::ZERO;
    }

    // Wrap the boid around the domain edges
    pub fn wrap_edges(&mut self, domain: &Domain) {
        self.position = domain.wrap(self.position);
    }
}
