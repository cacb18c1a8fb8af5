//! Enemy archetypes
//!
//! All four archetypes share the same wander/step/clamp kinematics and differ
//! only in speed and destination policy, so they are a tagged enum dispatched
//! inside a single update function rather than a type per archetype.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::mover::{MoveState, Mover};
use super::rect::Rect;
use crate::consts::{ENEMY_ARRIVE_RADIUS, STALKER_SIGHT_RADIUS};

/// Enemy archetype; also selects the sprite set a frontend draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Fast territory patroller
    Scout,
    /// Wanders until the player comes into sight, then pursues
    Stalker,
    /// Pursues the player permanently, regardless of distance
    Hunter,
    /// Slow, heavy patroller
    Brute,
}

impl EnemyKind {
    /// Movement speed in units per second
    pub fn speed(&self) -> f32 {
        match self {
            EnemyKind::Scout => 210.0,
            EnemyKind::Stalker => 160.0,
            EnemyKind::Hunter => 170.0,
            EnemyKind::Brute => 85.0,
        }
    }
}

/// A territory-bound enemy
#[derive(Debug, Clone)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub territory: Rect,
    pub mover: Mover,
}

impl Enemy {
    /// Spawn at a fixed point with a random first waypoint
    pub fn new(kind: EnemyKind, pos: Vec2, territory: Rect, rng: &mut impl Rng) -> Self {
        let mut mover = Mover::new(pos, kind.speed());
        mover.dest = territory.random_waypoint(rng);
        Self {
            kind,
            territory,
            mover,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.mover.pos
    }

    #[inline]
    pub fn dest(&self) -> Vec2 {
        self.mover.dest
    }

    #[inline]
    pub fn state(&self) -> MoveState {
        self.mover.state
    }

    /// Scatter to a fresh random position and destination inside the
    /// territory (run start)
    pub fn respawn(&mut self, rng: &mut impl Rng) {
        self.mover.pos = self.territory.random_waypoint(rng);
        self.mover.dest = self.territory.random_waypoint(rng);
        self.mover.state = MoveState::Idle;
    }

    /// Advance one frame.
    ///
    /// Chasing kinds retarget first, then everyone steps toward the current
    /// destination, re-rolling a wander waypoint on arrival. After a step the
    /// position is clamped into the full territory bounds; waypoints are
    /// inset, so an enemy can briefly pin against an edge on its way to one.
    pub fn update(&mut self, dt: f32, player_pos: Vec2, rng: &mut impl Rng) {
        match self.kind {
            EnemyKind::Hunter => {
                self.mover.dest = self.territory.clamp_point(player_pos);
            }
            EnemyKind::Stalker => {
                if self.mover.pos.distance(player_pos) < STALKER_SIGHT_RADIUS {
                    self.mover.dest = self.territory.clamp_point(player_pos);
                }
            }
            EnemyKind::Scout | EnemyKind::Brute => {}
        }

        if self.mover.advance(ENEMY_ARRIVE_RADIUS, dt) {
            self.mover.dest = self.territory.random_waypoint(rng);
            return;
        }

        self.mover.pos = self.territory.clamp_point(self.mover.pos);
    }
}
