//! The player avatar: click-to-move at a fixed speed

use glam::Vec2;

use super::mover::{MoveState, Mover};
use crate::consts::{PLAYER_ARRIVE_RADIUS, PLAYER_SPEED};

/// Click-to-move avatar
#[derive(Debug, Clone)]
pub struct Player {
    pub mover: Mover,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            mover: Mover::new(pos, PLAYER_SPEED),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.mover.pos
    }

    #[inline]
    pub fn state(&self) -> MoveState {
        self.mover.state
    }

    /// Head toward a new destination. Any point is accepted, including ones
    /// outside the arena.
    pub fn set_target(&mut self, target: Vec2) {
        self.mover.dest = target;
    }

    /// Snap to a point, cancelling any movement in progress
    pub fn respawn_at(&mut self, pos: Vec2) {
        self.mover.pos = pos;
        self.mover.dest = pos;
        self.mover.state = MoveState::Idle;
    }

    /// Advance one frame toward the current target
    pub fn update(&mut self, dt: f32) {
        self.mover.advance(PLAYER_ARRIVE_RADIUS, dt);
    }
}
