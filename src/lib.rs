//! Cyber Explorer: Neon Run - a click-to-move evasion arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, encounters, game state)
//! - `audio`: Sound-cue capability interface frontends implement
//! - `settings`: Music/SFX preferences
//! - `ui`: Minimal menu button surface

pub mod audio;
pub mod settings;
pub mod sim;
pub mod ui;

pub use audio::{AudioSink, LogAudio, NullAudio, SoundCue};
pub use settings::Settings;

/// Game tuning constants
pub mod consts {
    use glam::Vec2;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 900.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player movement speed (units per second)
    pub const PLAYER_SPEED: f32 = 220.0;
    /// Distance to the destination below which the player counts as arrived
    pub const PLAYER_ARRIVE_RADIUS: f32 = 6.0;
    /// Where the avatar spawns and respawns after a hit
    pub const PLAYER_SPAWN: Vec2 = Vec2::new(120.0, 420.0);

    /// Distance to the destination below which an enemy counts as arrived
    pub const ENEMY_ARRIVE_RADIUS: f32 = 4.0;
    /// Wander waypoints keep this far inside the territory edges
    pub const WAYPOINT_INSET: f32 = 5.0;
    /// Stalkers notice the player inside this radius
    pub const STALKER_SIGHT_RADIUS: f32 = 200.0;

    /// Player/enemy distance at or below this costs a life
    pub const CONTACT_RADIUS: f32 = 28.0;
    /// Seconds of immunity after taking a hit
    pub const DAMAGE_COOLDOWN: f32 = 1.0;
    /// Lives at the start of a run
    pub const STARTING_LIVES: u8 = 6;

    /// Hit-feedback flash duration (seconds)
    pub const FLASH_DURATION: f32 = 0.15;
    /// Hit-feedback shake duration (seconds)
    pub const SHAKE_DURATION: f32 = 0.25;
    /// Shake displacement amplitude (units)
    pub const SHAKE_POWER: f32 = 8.0;
}
