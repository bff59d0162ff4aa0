/*
 * Boid Flocking Simulation
 *
 * Opens a window and drives the flock at a fixed tick rate. Each boid follows
 * three rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Cohesion: Steer towards the average position of neighbors
 *
 * Set RUST_LOG to control log output and FLOCK_SEED for a reproducible flock.
 */

use tracing_subscriber::EnvFilter;

use flocking::app::{model, update};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    nannou::app(model).update(update).run();
}
