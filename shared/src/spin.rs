use rand::Rng;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::constants::{FULL_TURNS, SPIN_DURATION_MS};
use crate::model::{Segment, WheelId};

// Easing function for smooth deceleration
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Angular span `[start, end)` of segment `index`, in radians, with the
/// layout origin shifted by `-π/2` so index 0 starts under the pointer.
pub fn segment_span(index: usize, count: usize, rotation: f64) -> (f64, f64) {
    let slice = TAU / count as f64;
    let start = index as f64 * slice + rotation - FRAC_PI_2;
    (start, start + slice)
}

/// Total rotation in degrees that brings the center of `winning_index`
/// under the pointer after `FULL_TURNS` full revolutions.
pub fn target_rotation_degrees(winning_index: usize, count: usize) -> f64 {
    let slice = 360.0 / count as f64;
    let stop_at = 360.0 - winning_index as f64 * slice - slice / 2.0;
    360.0 * FULL_TURNS + stop_at
}

/// In-flight spin, advanced once per animation frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinAnimation {
    pub wheel_id: WheelId,
    pub winning_index: usize,
    pub start_time: f64,
    pub duration_ms: f64,
    pub total_rotation_degrees: f64,
}

impl SpinAnimation {
    pub fn new(wheel_id: WheelId, winning_index: usize, segment_count: usize, start_time: f64) -> Self {
        Self {
            wheel_id,
            winning_index,
            start_time,
            duration_ms: SPIN_DURATION_MS,
            total_rotation_degrees: target_rotation_degrees(winning_index, segment_count),
        }
    }

    /// Draws the winner uniformly from `[0, segment_count)`.
    pub fn draw<R: Rng + ?Sized>(
        rng: &mut R,
        wheel_id: WheelId,
        segment_count: usize,
        start_time: f64,
    ) -> Self {
        let winning_index = rng.gen_range(0..segment_count);
        Self::new(wheel_id, winning_index, segment_count, start_time)
    }

    pub fn progress(&self, now: f64) -> f64 {
        ((now - self.start_time) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn rotation_at(&self, progress: f64) -> f64 {
        self.total_rotation_degrees * ease_out_cubic(progress) * PI / 180.0
    }
}

/// Result of advancing the animation by one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum SpinFrame {
    Idle,
    Turning { rotation: f64 },
    Settled(SpinOutcome),
}

/// What the winner overlay shows once a spin settles.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinOutcome {
    pub wheel_id: WheelId,
    pub winning_index: usize,
    pub text: String,
    pub color: String,
    pub emoji: String,
}

impl SpinOutcome {
    pub fn new(wheel_id: WheelId, winning_index: usize, winner: &Segment) -> Self {
        Self {
            wheel_id,
            winning_index,
            text: winner.text.clone(),
            color: winner.color.clone(),
            emoji: winner.emoji.clone(),
        }
    }
}
