/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains frame timing and
 * flock statistics to be displayed in the UI.
 */

use std::time::Duration;

use crate::flock::FlockStats;

// Debug information to display
#[derive(Clone, Debug)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks_last_frame: usize,
    pub stats: FlockStats,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            ticks_last_frame: 0,
            stats: FlockStats::default(),
        }
    }
}

impl DebugInfo {
    // Lines shown in the overlay, top to bottom
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!("FPS: {:.1}", self.fps),
            format!("Frame time: {:.2} ms", self.frame_time.as_secs_f64() * 1000.0),
            format!("Ticks this frame: {}", self.ticks_last_frame),
            format!("Tick: {}", self.stats.tick),
            format!("Boids: {}", self.stats.population),
            format!("Speed: mean {:.2} / max {:.2}", self.stats.mean_speed, self.stats.max_speed),
        ]
    }
}
