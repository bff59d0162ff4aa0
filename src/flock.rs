/*
 * Flock Module
 *
 * The population: an ordered, fixed-size set of boids owned by the caller.
 * The order boids were created in is the order every tick visits them.
 */

use nannou::prelude::*;
use rand::Rng;
use tracing::info;

use crate::boid::Boid;
use crate::error::ParamsError;
use crate::params::SimulationParams;
use crate::physics;
use crate::vector::magnitude;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flock {
    boids: Vec<Boid>,
    tick: u64,
}

/// Summary numbers for the debug overlay and logs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlockStats {
    pub tick: u64,
    pub population: usize,
    pub mean_speed: f32,
    pub max_speed: f32,
    pub centroid: Point2,
}

impl Flock {
    pub fn from_boids(boids: Vec<Boid>) -> Self {
        Self { boids, tick: 0 }
    }

    /// Seed a new flock: positions uniform over the domain, each velocity
    /// component uniform in `[-initial_speed, initial_speed)`.
    pub fn seeded<R: Rng>(params: &SimulationParams, rng: &mut R) -> Result<Self, ParamsError> {
        params.validate()?;

        let mut boids = Vec::with_capacity(params.num_boids);
        for _ in 0..params.num_boids {
            boids.push(random_boid(params, rng));
        }

        info!(
            population = boids.len(),
            half_width = params.half_width,
            half_height = params.half_height,
            seed = ?params.seed,
            "seeded flock"
        );

        Ok(Self::from_boids(boids))
    }

    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    pub(crate) fn boids_mut(&mut self) -> &mut [Boid] {
        &mut self.boids
    }

    pub fn positions(&self) -> impl Iterator<Item = Point2> + '_ {
        self.boids.iter().map(Boid::position)
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    /// Number of ticks completed since the flock was created.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub(crate) fn advance_tick(&mut self) {
        self.tick += 1;
    }

    // Advance every boid by one tick
    pub fn step(&mut self, params: &SimulationParams) {
        physics::step(self, params);
    }

    // Push new speed and force limits onto every boid
    pub fn set_limits(&mut self, max_speed: f32, max_force: f32) {
        for boid in &mut self.boids {
            boid.max_speed = max_speed;
            boid.max_force = max_force;
        }
    }

    pub fn stats(&self) -> FlockStats {
        let population = self.boids.len();
        if population == 0 {
            return FlockStats {
                tick: self.tick,
                ..FlockStats::default()
            };
        }

        let mut speed_sum = 0.0;
        let mut max_speed: f32 = 0.0;
        let mut position_sum = Vec2::ZERO;
        for boid in &self.boids {
            let speed = magnitude(boid.velocity);
            speed_sum += speed;
            max_speed = max_speed.max(speed);
            position_sum += boid.position;
        }

        FlockStats {
            tick: self.tick,
            population,
            mean_speed: speed_sum / population as f32,
            max_speed,
            centroid: position_sum / population as f32,
        }
    }
}

fn random_boid<R: Rng>(params: &SimulationParams, rng: &mut R) -> Boid {
    let x = rng.gen_range(0.0..params.half_width);
    let y = rng.gen_range(0.0..params.half_height);

    // An empty band would make gen_range panic
    let velocity = if params.initial_speed > 0.0 {
        let band = -params.initial_speed..params.initial_speed;
        vec2(rng.gen_range(band.clone()), rng.gen_range(band))
    } else {
        Vec2::ZERO
    };

    Boid::new(pt2(x, y), velocity, params.max_speed, params.max_force)
}
