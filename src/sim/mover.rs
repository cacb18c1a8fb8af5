//! Constant-speed destination seeking shared by the player and enemies

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Whether an entity is translating toward its destination; also selects the
/// idle/walk animation set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveState {
    #[default]
    Idle,
    Moving,
}

/// Position/destination pair stepped at a fixed speed
#[derive(Debug, Clone)]
pub struct Mover {
    pub pos: Vec2,
    pub dest: Vec2,
    pub speed: f32,
    pub state: MoveState,
}

impl Mover {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            dest: pos,
            speed,
            state: MoveState::Idle,
        }
    }

    /// Advance one frame toward the destination.
    ///
    /// Motion is linear and instantaneous-direction: `speed * dt` along the
    /// straight line, no steering, no overshoot capping. Returns true when
    /// the mover is within `arrive_radius` of the destination; it then goes
    /// Idle and does not move this frame.
    pub fn advance(&mut self, arrive_radius: f32, dt: f32) -> bool {
        let offset = self.dest - self.pos;
        let distance = offset.length();

        if distance <= arrive_radius {
            self.state = MoveState::Idle;
            return true;
        }

        self.state = MoveState::Moving;
        self.pos += offset / distance * self.speed * dt;
        false
    }
}
