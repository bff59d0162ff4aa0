/*
 * Application Module
 *
 * This module defines the viewer's model and its update loop. The viewer
 * drives the flock at a fixed tick rate, independent of the render rate:
 * frame time is accumulated and whole ticks are run while enough time has
 * built up, with a cap so a slow frame cannot snowball.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::params::SimulationParams;
use crate::renderer::view;
use crate::ui;
use crate::{MAX_TICKS_PER_FRAME, WINDOW_HEIGHT, WINDOW_WIDTH};

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub rng: StdRng,
    // Fixed timestep variables
    pub tick_accumulator: Duration,
    pub tick_step_size: Duration,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let window_id = app
        .new_window()
        .title("Boids Algorithm")
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .view(view)
        .raw_event(raw_window_event)
        .build()
        .expect("failed to create the main window");

    let window = app.window(window_id).expect("main window was just created");
    let egui = Egui::from_window(&window);

    let params = load_params();
    let mut rng = match params.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let flock = Flock::seeded(&params, &mut rng).unwrap_or_else(|err| {
        warn!(%err, "could not seed flock, starting empty");
        Flock::default()
    });

    info!(
        boids = flock.len(),
        tick_rate = params.ticks_per_second,
        mode = ?params.update_mode,
        "viewer started"
    );

    Model {
        flock,
        tick_step_size: tick_step_size(&params),
        params,
        egui,
        debug_info: DebugInfo::default(),
        rng,
        tick_accumulator: Duration::ZERO,
    }
}

// Defaults, with an optional FLOCK_SEED for a reproducible starting flock
fn load_params() -> SimulationParams {
    let mut params = SimulationParams::default();

    if let Ok(raw) = std::env::var("FLOCK_SEED") {
        match raw.trim().parse::<u64>() {
            Ok(seed) => params.seed = Some(seed),
            Err(err) => warn!(%err, value = %raw, "ignoring FLOCK_SEED"),
        }
    }

    if let Err(err) = params.validate() {
        warn!(%err, "invalid parameters, falling back to defaults");
        return SimulationParams::default();
    }

    params
}

fn tick_step_size(params: &SimulationParams) -> Duration {
    Duration::from_secs_f64(1.0 / params.ticks_per_second.max(1) as f64)
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let response = ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    if response.changes.any_changed {
        debug!(changes = ?response.changes, "parameters changed");
    }

    if response.needs_reseed() {
        reset_flock(model);
    } else if response.changes.limits_changed {
        model.flock.set_limits(model.params.max_speed, model.params.max_force);
    }

    let ticks = if model.params.pause_simulation {
        model.tick_accumulator = Duration::ZERO;
        0
    } else {
        model.tick_accumulator += update.since_last;
        run_due_ticks(model)
    };

    model.debug_info.ticks_last_frame = ticks;
    model.debug_info.stats = model.flock.stats();
}

// Run every whole tick that has accumulated, up to the per-frame cap
fn run_due_ticks(model: &mut Model) -> usize {
    let mut ticks = 0;
    while model.tick_accumulator >= model.tick_step_size && ticks < MAX_TICKS_PER_FRAME {
        model.flock.step(&model.params);
        model.tick_accumulator -= model.tick_step_size;
        ticks += 1;
    }

    // Drop backlog we refused to simulate
    if ticks == MAX_TICKS_PER_FRAME && model.tick_accumulator >= model.tick_step_size {
        debug!(backlog = ?model.tick_accumulator, "dropping tick backlog");
        model.tick_accumulator = Duration::ZERO;
    }

    ticks
}

// Start a new run with the current parameters
fn reset_flock(model: &mut Model) {
    match Flock::seeded(&model.params, &mut model.rng) {
        Ok(flock) => {
            debug!(boids = flock.len(), "flock reset");
            model.flock = flock;
            model.tick_accumulator = Duration::ZERO;
        }
        Err(err) => warn!(%err, "keeping current flock"),
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
