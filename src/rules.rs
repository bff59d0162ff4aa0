/*
 * Steering Rules Module
 *
 * The three classic flocking rules share one aggregation skeleton:
 * scan every other boid, fold the ones inside the perception radius into an
 * accumulator, then turn the accumulator into a bounded steering force.
 * 1. Alignment: steer towards the average heading of neighbors
 * 2. Cohesion: steer towards the average position of neighbors
 * 3. Separation: steer away from neighbors, harder the closer they are
 */

use nannou::prelude::Vec2;

use crate::boid::Boid;
use crate::vector::{limit_magnitude, set_magnitude};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    Alignment,
    Cohesion,
    /// Each neighbor pushes along `(self - neighbor) / distance²`, so repulsion
    /// falls off inversely with distance rather than having unit length per
    /// neighbor as the plain `(self - neighbor) / distance` form would.
    Separation,
}

impl Rule {
    pub const ALL: [Rule; 3] = [Rule::Alignment, Rule::Cohesion, Rule::Separation];

    pub fn name(self) -> &'static str {
        match self {
            Rule::Alignment => "alignment",
            Rule::Cohesion => "cohesion",
            Rule::Separation => "separation",
        }
    }

    /// Fold one neighbor found at `distance` into the accumulator.
    #[inline]
    pub fn contribute(self, me: &Boid, neighbor: &Boid, acc: Vec2, distance: f32) -> Vec2 {
        match self {
            Rule::Alignment => acc + neighbor.velocity,
            Rule::Cohesion => acc + neighbor.position,
            Rule::Separation => {
                // Coincident boids have no direction to push apart along
                if distance <= 0.0 {
                    return acc;
                }
                let away = (me.position - neighbor.position) / distance;
                acc + away / distance
            }
        }
    }

    /// Turn the accumulated neighbor sum into a steering force.
    ///
    /// Every rule averages, derives a desired velocity at full speed, and
    /// returns the difference from the current velocity capped at `max_force`.
    pub fn finalize(self, me: &Boid, acc: Vec2, count: usize) -> Vec2 {
        let average = acc / count as f32;
        let desired = match self {
            Rule::Alignment | Rule::Separation => set_magnitude(average, me.max_speed),
            Rule::Cohesion => set_magnitude(average - me.position, me.max_speed),
        };
        limit_magnitude(desired - me.velocity, me.max_force)
    }
}

/// Steering force from `rule` for the boid at `index`, scanning the whole flock.
///
/// The boid itself is skipped by index, so a neighbor with identical state still counts.
/// Returns the zero vector when nothing is within `perception_radius`.
pub fn steer(rule: Rule, index: usize, boids: &[Boid], perception_radius: f32) -> Vec2 {
    let me = &boids[index];
    let mut acc = Vec2::ZERO;
    let mut count = 0;

    for (other_index, other) in boids.iter().enumerate() {
        if other_index == index {
            continue;
        }

        let d = me.distance(other);
        if d <= perception_radius {
            acc = rule.contribute(me, other, acc, d);
            count += 1;
        }
    }

    if count == 0 {
        return Vec2::ZERO;
    }

    rule.finalize(me, acc, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::prelude::{pt2, vec2};

    const RADIUS: f32 = 50.0;

    fn boid(x: f32, y: f32, vx: f32, vy: f32) -> Boid {
        Boid::new(pt2(x, y), vec2(vx, vy), 5.0, 0.05)
    }

    #[test]
    fn isolated_boid_gets_no_steering() {
        let boids = vec![boid(0.0, 0.0, 1.0, 0.0), boid(100.0, 0.0, -1.0, 0.0)];
        for rule in Rule::ALL {
            assert_eq!(steer(rule, 0, &boids, RADIUS), Vec2::ZERO, "{}", rule.name());
        }
    }

    #[test]
    fn neighbor_on_radius_is_included() {
        let boids = vec![boid(0.0, 0.0, 0.0, 0.0), boid(50.0, 0.0, 0.0, 0.0)];
        assert_ne!(steer(Rule::Cohesion, 0, &boids, RADIUS), Vec2::ZERO);
    }

    #[test]
    fn cohesion_points_towards_neighbor() {
        let boids = vec![boid(100.0, 100.0, 0.0, 0.0), boid(110.0, 100.0, 0.0, 0.0)];
        let force = steer(Rule::Cohesion, 0, &boids, RADIUS);
        assert!(force.x > 0.0);
        assert!(force.y.abs() < 1e-6);
        assert!((force.length() - 0.05).abs() < 1e-6);
    }

    #[test]
    fn separation_points_away_from_neighbor() {
        let boids = vec![boid(100.0, 100.0, 0.0, 0.0), boid(110.0, 100.0, 0.0, 0.0)];
        let force = steer(Rule::Separation, 0, &boids, RADIUS);
        assert!(force.x < 0.0);
    }

    #[test]
    fn separation_weight_is_inverse_to_distance() {
        let me = boid(0.0, 0.0, 0.0, 0.0);
        let near = boid(5.0, 0.0, 0.0, 0.0);
        let far = boid(0.0, 50.0, 0.0, 0.0);

        let near_push = Rule::Separation.contribute(&me, &near, Vec2::ZERO, 5.0);
        let far_push = Rule::Separation.contribute(&me, &far, Vec2::ZERO, 50.0);

        let ratio = near_push.length() / far_push.length();
        assert!((ratio - 10.0).abs() < 1e-4, "ratio was {}", ratio);
        assert!(near_push.x < 0.0);
        assert!(far_push.y < 0.0);
    }

    #[test]
    fn coincident_boids_do_not_produce_nan() {
        let boids = vec![boid(10.0, 10.0, 1.0, 0.0), boid(10.0, 10.0, 1.0, 0.0)];
        for rule in Rule::ALL {
            let force = steer(rule, 0, &boids, RADIUS);
            assert!(force.x.is_finite() && force.y.is_finite(), "{}", rule.name());
        }
    }

    #[test]
    fn alignment_steers_towards_neighbor_heading() {
        let boids = vec![boid(0.0, 0.0, 1.0, 0.0), boid(10.0, 0.0, 0.0, 1.0)];
        let force = steer(Rule::Alignment, 0, &boids, RADIUS);
        // Desired is (0, 5); current is (1, 0)
        assert!(force.x < 0.0);
        assert!(force.y > 0.0);
    }

    #[test]
    fn every_rule_respects_max_force() {
        let boids = vec![
            boid(0.0, 0.0, 5.0, 0.0),
            boid(3.0, 1.0, -5.0, 0.0),
            boid(-20.0, 10.0, 0.0, -4.0),
            boid(30.0, -30.0, 2.0, 2.0),
        ];
        for index in 0..boids.len() {
            for rule in Rule::ALL {
                let force = steer(rule, index, &boids, RADIUS);
                assert!(force.length() <= 0.05 + 1e-6, "{} on {}", rule.name(), index);
            }
        }
    }
}
