//! Damage feedback timers (flash + shake)
//!
//! Presentation decides how to draw these; the simulation only runs the
//! countdowns.

use serde::{Deserialize, Serialize};

use crate::consts::{FLASH_DURATION, SHAKE_DURATION, SHAKE_POWER};

/// Countdown timers for hit feedback
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScreenEffects {
    /// Seconds of white flash remaining
    pub flash_timer: f32,
    /// Seconds of camera shake remaining
    pub shake_timer: f32,
    /// Shake displacement amplitude, in units
    pub shake_power: f32,
}

impl Default for ScreenEffects {
    fn default() -> Self {
        Self {
            flash_timer: 0.0,
            shake_timer: 0.0,
            shake_power: SHAKE_POWER,
        }
    }
}

impl ScreenEffects {
    pub fn start_flash(&mut self) {
        self.flash_timer = FLASH_DURATION;
    }

    pub fn start_shake(&mut self) {
        self.shake_timer = SHAKE_DURATION;
    }

    /// Tick the countdowns. A timer can dip just below zero on the frame it
    /// expires; renderers treat anything <= 0 as off.
    pub fn update(&mut self, dt: f32) {
        if self.flash_timer > 0.0 {
            self.flash_timer -= dt;
        }
        if self.shake_timer > 0.0 {
            self.shake_timer -= dt;
        }
    }

    #[inline]
    pub fn flash_active(&self) -> bool {
        self.flash_timer > 0.0
    }

    #[inline]
    pub fn shake_active(&self) -> bool {
        self.shake_timer > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timers_count_down_independently() {
        let mut effects = ScreenEffects::default();
        effects.start_flash();
        effects.start_shake();

        effects.update(0.2);

        // Flash (0.15s) has expired, shake (0.25s) is still running.
        assert!(!effects.flash_active());
        assert!(effects.shake_active());

        effects.update(0.2);
        assert!(!effects.shake_active());
    }

    #[test]
    fn test_expired_timers_stop_decrementing() {
        let mut effects = ScreenEffects::default();
        effects.start_flash();
        effects.update(0.2);

        let parked = effects.flash_timer;
        effects.update(10.0);

        assert_eq!(effects.flash_timer, parked);
    }
}
