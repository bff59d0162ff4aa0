/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * adjustable parameters for the flock. These parameters can be modified
 * through the UI. It also provides validation, the derived domain, and
 * change detection used by the control panel.
 */

use crate::domain::Domain;
use crate::error::ParamsError;
use crate::rules::Rule;

/// How a tick orders reads and writes across the flock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateMode {
    /// Every boid steers against the flock as it stood at the start of the tick.
    Snapshot,
    /// Boids are updated one after another in place; later boids see earlier
    /// boids' new state within the same tick.
    Sequential,
}

impl Default for UpdateMode {
    fn default() -> Self {
        UpdateMode::Snapshot
    }
}

// Parameters for the simulation that can be adjusted via UI
#[derive(Clone, Debug)]
pub struct SimulationParams {
    pub num_boids: usize,
    pub half_width: f32,
    pub half_height: f32,
    pub boundary_margin: f32,
    pub max_speed: f32,
    pub max_force: f32,
    pub initial_speed: f32,
    pub perception_radius: f32,
    pub alignment_weight: f32,
    pub separation_weight: f32,
    pub cohesion_weight: f32,
    pub update_mode: UpdateMode,
    pub enable_parallel: bool,
    pub ticks_per_second: u32,
    pub seed: Option<u64>,
    pub show_debug: bool,
    pub pause_simulation: bool,

    // Internal state for tracking changes
    previous_values: Option<ParamSnapshot>,
}

// A snapshot of parameter values used for change detection
#[derive(Clone, Debug, PartialEq)]
struct ParamSnapshot {
    num_boids: usize,
    max_speed: f32,
    max_force: f32,
    perception_radius: f32,
    alignment_weight: f32,
    separation_weight: f32,
    cohesion_weight: f32,
    update_mode: UpdateMode,
    enable_parallel: bool,
    show_debug: bool,
    pause_simulation: bool,
}

/// What changed in the control panel since the last snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParamChanges {
    pub num_boids_changed: bool,
    pub limits_changed: bool,
    pub any_changed: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_boids: 200,
            half_width: 320.0,
            half_height: 240.0,
            boundary_margin: 5.0,
            max_speed: 5.0,
            max_force: 0.05,
            initial_speed: 3.0,
            perception_radius: 50.0,
            alignment_weight: 0.1,
            separation_weight: 1.15,
            cohesion_weight: 1.3,
            update_mode: UpdateMode::Snapshot,
            enable_parallel: false,
            ticks_per_second: 60,
            seed: None,
            show_debug: false,
            pause_simulation: false,
            previous_values: None,
        }
    }
}

impl SimulationParams {
    pub fn with_num_boids(mut self, num_boids: usize) -> Self {
        self.num_boids = num_boids;
        self
    }

    pub fn with_update_mode(mut self, update_mode: UpdateMode) -> Self {
        self.update_mode = update_mode;
        self
    }

    pub fn with_parallel(mut self, enable_parallel: bool) -> Self {
        self.enable_parallel = enable_parallel;
        self
    }

    pub fn domain(&self) -> Domain {
        Domain::new(self.half_width, self.half_height, self.boundary_margin)
    }

    pub fn weight(&self, rule: Rule) -> f32 {
        match rule {
            Rule::Alignment => self.alignment_weight,
            Rule::Cohesion => self.cohesion_weight,
            Rule::Separation => self.separation_weight,
        }
    }

    pub fn validate(&self) -> Result<(), ParamsError> {
        // Infinite extents or speeds would pass the sign checks but break seeding
        let fields = [
            ("half width", self.half_width),
            ("half height", self.half_height),
            ("boundary margin", self.boundary_margin),
            ("max speed", self.max_speed),
            ("max force", self.max_force),
            ("initial speed", self.initial_speed),
            ("perception radius", self.perception_radius),
        ];
        for (field, value) in fields {
            if value.is_infinite() {
                return Err(ParamsError::NonFinite { field, value });
            }
        }

        if !(self.half_width > 0.0) {
            return Err(ParamsError::NonPositiveDimension { axis: "width", value: self.half_width });
        }
        if !(self.half_height > 0.0) {
            return Err(ParamsError::NonPositiveDimension { axis: "height", value: self.half_height });
        }
        if !(self.boundary_margin >= 0.0) {
            return Err(ParamsError::NegativeMargin(self.boundary_margin));
        }
        if !(self.max_speed > 0.0) {
            return Err(ParamsError::NonPositiveSpeed(self.max_speed));
        }
        if !(self.max_force > 0.0) {
            return Err(ParamsError::NonPositiveForce(self.max_force));
        }
        if !(self.initial_speed >= 0.0) {
            return Err(ParamsError::NegativeInitialSpeed(self.initial_speed));
        }
        if !(self.perception_radius > 0.0) {
            return Err(ParamsError::NonPositiveRadius(self.perception_radius));
        }
        for rule in Rule::ALL {
            let value = self.weight(rule);
            if !value.is_finite() {
                return Err(ParamsError::NonFiniteWeight { rule: rule.name(), value });
            }
        }
        if self.ticks_per_second == 0 {
            return Err(ParamsError::ZeroTickRate);
        }
        Ok(())
    }

    // Take a snapshot of current parameter values for change detection
    pub fn take_snapshot(&mut self) {
        self.previous_values = Some(self.current_values());
    }

    // Check if any parameters have changed since the last snapshot
    pub fn detect_changes(&self) -> ParamChanges {
        // If we don't have previous values, nothing has changed
        let prev = match &self.previous_values {
            Some(prev) => prev,
            None => return ParamChanges::default(),
        };

        let current = self.current_values();
        ParamChanges {
            num_boids_changed: current.num_boids != prev.num_boids,
            limits_changed: current.max_speed != prev.max_speed || current.max_force != prev.max_force,
            any_changed: current != *prev,
        }
    }

    fn current_values(&self) -> ParamSnapshot {
        ParamSnapshot {
            num_boids: self.num_boids,
            max_speed: self.max_speed,
            max_force: self.max_force,
            perception_radius: self.perception_radius,
            alignment_weight: self.alignment_weight,
            separation_weight: self.separation_weight,
            cohesion_weight: self.cohesion_weight,
            update_mode: self.update_mode,
            enable_parallel: self.enable_parallel,
            show_debug: self.show_debug,
            pause_simulation: self.pause_simulation,
        }
    }

    // Get parameter ranges for UI sliders
    pub fn get_num_boids_range() -> std::ops::RangeInclusive<usize> {
        10..=1000
    }

    pub fn get_max_speed_range() -> std::ops::RangeInclusive<f32> {
        0.5..=15.0
    }

    pub fn get_max_force_range() -> std::ops::RangeInclusive<f32> {
        0.005..=0.5
    }

    pub fn get_weight_range() -> std::ops::RangeInclusive<f32> {
        0.0..=3.0
    }

    pub fn get_radius_range() -> std::ops::RangeInclusive<f32> {
        10.0..=100.0
    }
}
