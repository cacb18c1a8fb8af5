//! Axis-aligned rectangles for territories, the goal region and UI hit tests
//!
//! Stored as (left, top, width, height) in screen coordinates, y growing
//! downward.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::WAYPOINT_INSET;

/// An axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Check if a point is inside the rectangle (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Clamp a point into the rectangle bounds
    pub fn clamp_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.left, self.right()),
            point.y.clamp(self.top, self.bottom()),
        )
    }

    /// Sample a wander waypoint, inset from every edge.
    ///
    /// Destinations stay off the border; position clamping elsewhere uses the
    /// full bounds, so an entity can pin against an edge while heading to an
    /// inset waypoint. Requires the rectangle to be at least twice the inset
    /// in each axis.
    pub fn random_waypoint(&self, rng: &mut impl Rng) -> Vec2 {
        Vec2::new(
            rng.random_range(self.left + WAYPOINT_INSET..=self.right() - WAYPOINT_INSET),
            rng.random_range(self.top + WAYPOINT_INSET..=self.bottom() - WAYPOINT_INSET),
        )
    }
}
