/*
 * UI Module
 *
 * This module contains the control panel built with nannou_egui. It exposes
 * the flocking parameters as sliders and reports what changed so the app can
 * reseed the flock or push new limits onto the existing boids.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::params::{ParamChanges, SimulationParams, UpdateMode};

/// Result of one frame of the control panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiResponse {
    pub reset_requested: bool,
    pub changes: ParamChanges,
}

impl UiResponse {
    pub fn needs_reseed(&self) -> bool {
        self.reset_requested || self.changes.num_boids_changed
    }
}

// Update the UI and report what the user did this frame
pub fn update_ui(egui: &mut Egui, params: &mut SimulationParams, debug_info: &DebugInfo) -> UiResponse {
    let mut reset_requested = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Flock Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Population", |ui| {
                ui.add(egui::Slider::new(&mut params.num_boids, SimulationParams::get_num_boids_range()).text("Number of Boids"));

                if ui.button("Reset Boids").clicked() {
                    reset_requested = true;
                }

                ui.add(egui::Slider::new(&mut params.max_speed, SimulationParams::get_max_speed_range()).text("Max Speed"));
                ui.add(egui::Slider::new(&mut params.max_force, SimulationParams::get_max_force_range()).text("Max Force"));
            });

            ui.collapsing("Flocking Behavior", |ui| {
                ui.add(egui::Slider::new(&mut params.alignment_weight, SimulationParams::get_weight_range()).text("Alignment Weight"));
                ui.add(egui::Slider::new(&mut params.separation_weight, SimulationParams::get_weight_range()).text("Separation Weight"));
                ui.add(egui::Slider::new(&mut params.cohesion_weight, SimulationParams::get_weight_range()).text("Cohesion Weight"));
                ui.add(egui::Slider::new(&mut params.perception_radius, SimulationParams::get_radius_range()).text("Perception Radius"));
            });

            ui.collapsing("Update Order", |ui| {
                ui.radio_value(&mut params.update_mode, UpdateMode::Snapshot, "Snapshot (tick-start state)");
                ui.radio_value(&mut params.update_mode, UpdateMode::Sequential, "Sequential (in place)");
                ui.checkbox(&mut params.enable_parallel, "Parallel steering (snapshot only)");
            });

            ui.separator();
            ui.label(format!("Tick: {}", debug_info.stats.tick));
            ui.label(format!("FPS: {:.1}", debug_info.fps));

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    UiResponse {
        reset_requested,
        changes: params.detect_changes(),
    }
}
