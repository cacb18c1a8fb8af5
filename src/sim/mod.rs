//! Deterministic simulation core
//!
//! All gameplay logic lives here. The module is pure and frame-driven:
//! - One synchronous update per rendered frame, fed a time delta
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies (sound goes through the
//!   `AudioSink` capability)

pub mod collision;
pub mod effects;
pub mod enemy;
pub mod mover;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::first_contact;
pub use effects::ScreenEffects;
pub use enemy::{Enemy, EnemyKind};
pub use mover::{MoveState, Mover};
pub use player::Player;
pub use rect::Rect;
pub use state::{EnemyView, GOAL_REGION, GamePhase, GameSession, PlayerView, Snapshot};
pub use tick::{FrameInput, tick};
