/*
 * Physics Module
 *
 * This module advances the flock by one tick. Each boid is wrapped around the
 * domain, steered by the three flocking rules (alignment, cohesion,
 * separation) against the whole flock, and integrated.
 *
 * Two update orders are supported:
 * - Snapshot: wrap everyone, compute every acceleration from that state, then
 *   integrate. The steering pass can run on the rayon pool.
 * - Sequential: wrap, steer and integrate one boid at a time, in place.
 */

use nannou::prelude::*;
use rayon::prelude::*;
use tracing::trace;

use crate::boid::Boid;
use crate::flock::Flock;
use crate::params::{SimulationParams, UpdateMode};
use crate::rules::{steer, Rule};

/// Advance every boid in the flock by one tick.
pub fn step(flock: &mut Flock, params: &SimulationParams) {
    trace!(tick = flock.tick(), mode = ?params.update_mode, parallel = params.enable_parallel, "step");

    match params.update_mode {
        UpdateMode::Snapshot => update_snapshot(flock.boids_mut(), params),
        UpdateMode::Sequential => update_sequential(flock.boids_mut(), params),
    }

    flock.advance_tick();
}

/// Weighted sum of the three steering forces acting on the boid at `index`.
pub fn compute_acceleration(index: usize, boids: &[Boid], params: &SimulationParams) -> Vec2 {
    let radius = params.perception_radius;

    let alignment = steer(Rule::Alignment, index, boids, radius);
    let cohesion = steer(Rule::Cohesion, index, boids, radius);
    let separation = steer(Rule::Separation, index, boids, radius);

    alignment * params.weight(Rule::Alignment)
        + separation * params.weight(Rule::Separation)
        + cohesion * params.weight(Rule::Cohesion)
}

// Two-phase update: all reads see the wrapped tick-start state
fn update_snapshot(boids: &mut [Boid], params: &SimulationParams) {
    let domain = params.domain();
    for boid in boids.iter_mut() {
        boid.wrap_edges(&domain);
    }

    let accelerations: Vec<Vec2> = {
        let snapshot: &[Boid] = boids;
        if params.enable_parallel {
            (0..snapshot.len())
                .into_par_iter()
                .map(|i| compute_acceleration(i, snapshot, params))
                .collect()
        } else {
            (0..snapshot.len())
                .map(|i| compute_acceleration(i, snapshot, params))
                .collect()
        }
    };

    for (boid, acceleration) in boids.iter_mut().zip(accelerations) {
        boid.apply_force(acceleration);
        boid.update();
    }
}

// In-place update: boid i steers against boids 0..i already moved this tick
fn update_sequential(boids: &mut [Boid], params: &SimulationParams) {
    let domain = params.domain();
    for i in 0..boids.len() {
        boids[i].wrap_edges(&domain);

        let acceleration = compute_acceleration(i, boids, params);

        let boid = &mut boids[i];
        boid.apply_force(acceleration);
        boid.update();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(mode: UpdateMode) -> SimulationParams {
        SimulationParams::default().with_update_mode(mode)
    }

    fn resting(x: f32, y: f32) -> Boid {
        Boid::new(pt2(x, y), Vec2::ZERO, 5.0, 0.05)
    }

    #[test]
    fn isolated_boid_feels_no_acceleration() {
        let boids = vec![
            Boid::new(pt2(10.0, 10.0), vec2(1.0, 2.0), 5.0, 0.05),
            resting(200.0, 200.0),
        ];
        let p = params(UpdateMode::Snapshot);
        assert_eq!(compute_acceleration(0, &boids, &p), Vec2::ZERO);

        let mut flock = Flock::from_boids(boids);
        flock.step(&p);
        let boid = &flock.boids()[0];
        assert_eq!(boid.velocity, vec2(1.0, 2.0));
        assert_eq!(boid.position, pt2(11.0, 12.0));
        assert_eq!(flock.tick(), 1);
    }

    #[test]
    fn weights_scale_the_rule_forces() {
        let boids = vec![resting(100.0, 100.0), resting(110.0, 100.0)];
        let p = params(UpdateMode::Snapshot);

        // At rest: alignment is zero, cohesion pulls east, separation pushes west
        let acceleration = compute_acceleration(0, &boids, &p);
        let expected_x = 0.05 * 1.3 - 0.05 * 1.15;
        assert!((acceleration.x - expected_x).abs() < 1e-6);
        assert!(acceleration.y.abs() < 1e-6);
    }

    #[test]
    fn far_edge_wraps_to_origin_on_next_step() {
        for mode in [UpdateMode::Snapshot, UpdateMode::Sequential] {
            let mut flock = Flock::from_boids(vec![resting(320.0 + 5.0 + 1.0, 100.0)]);
            flock.step(&params(mode));
            assert_eq!(flock.boids()[0].position, pt2(0.0, 100.0));
        }
    }

    #[test]
    fn near_edge_wraps_to_far_edge_on_next_step() {
        let mut flock = Flock::from_boids(vec![resting(-5.0 - 1.0, 100.0)]);
        flock.step(&params(UpdateMode::Snapshot));
        assert_eq!(flock.boids()[0].position, pt2(325.0, 100.0));
    }

    #[test]
    fn wrap_happens_before_motion() {
        let mut flock = Flock::from_boids(vec![Boid::new(pt2(324.0, 100.0), vec2(4.0, 0.0), 5.0, 0.05)]);
        let p = params(UpdateMode::Snapshot);

        // Moves outside the domain during the tick, corrected on the next one
        flock.step(&p);
        assert_eq!(flock.boids()[0].position, pt2(328.0, 100.0));
        flock.step(&p);
        assert_eq!(flock.boids()[0].position, pt2(4.0, 100.0));
    }

    #[test]
    fn parallel_snapshot_matches_serial() {
        let boids: Vec<Boid> = (0..40)
            .map(|i| {
                let f = i as f32;
                Boid::new(pt2(f * 7.0 % 120.0, f * 13.0 % 90.0), vec2((f * 0.3).sin(), (f * 0.7).cos()), 5.0, 0.05)
            })
            .collect();

        let serial_params = params(UpdateMode::Snapshot);
        let parallel_params = params(UpdateMode::Snapshot).with_parallel(true);

        let mut serial = Flock::from_boids(boids.clone());
        let mut parallel = Flock::from_boids(boids);
        for _ in 0..20 {
            serial.step(&serial_params);
            parallel.step(&parallel_params);
        }
        assert_eq!(serial, parallel);
    }

    #[test]
    fn sequential_update_sees_moved_neighbors() {
        // Boid 1 reads boid 0 after boid 0 has already moved in sequential mode
        let boids = vec![
            Boid::new(pt2(100.0, 100.0), vec2(3.0, 0.0), 5.0, 0.05),
            Boid::new(pt2(120.0, 100.0), vec2(0.0, 3.0), 5.0, 0.05),
        ];

        let mut snapshot = Flock::from_boids(boids.clone());
        let mut sequential = Flock::from_boids(boids);
        snapshot.step(&params(UpdateMode::Snapshot));
        sequential.step(&params(UpdateMode::Sequential));

        // The first boid in order sees the same state either way
        assert_eq!(snapshot.boids()[0], sequential.boids()[0]);
        assert_ne!(snapshot.boids()[1].velocity, sequential.boids()[1].velocity);
    }
}
