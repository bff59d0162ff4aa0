/*
 * Boid Flocking Simulation - Module Definitions
 *
 * The flocking core (vector, domain, boid, rules, flock, physics, params,
 * error) has no window or UI dependency beyond the nannou math types.
 * The viewer modules (app, renderer, ui, debug) drive and draw it.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use domain::Domain;
pub use error::ParamsError;
pub use flock::{Flock, FlockStats};
pub use params::{SimulationParams, UpdateMode};
pub use physics::step;
pub use rules::Rule;

// Define modules
pub mod vector;
pub mod domain;
pub mod boid;
pub mod rules;
pub mod flock;
pub mod physics;
pub mod params;
pub mod error;
pub mod debug;
pub mod app;
pub mod ui;
pub mod renderer;

// Constants
pub const BOID_RADIUS: f32 = 1.5;
pub const WINDOW_WIDTH: u32 = 640;
pub const WINDOW_HEIGHT: u32 = 480;
pub const MAX_TICKS_PER_FRAME: usize = 4;
