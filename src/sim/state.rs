//! Session state: phases, the enemy roster, and the render snapshot

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::ScreenEffects;
use super::enemy::{Enemy, EnemyKind};
use super::mover::MoveState;
use super::player::Player;
use super::rect::Rect;
use crate::consts::{PLAYER_SPAWN, STARTING_LIVES};

/// Current phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title menu; no simulation advances
    Menu,
    /// Active gameplay
    Playing,
    /// The player reached the goal
    Victory,
    /// The player ran out of lives
    GameOver,
}

/// Reaching this region wins the run
pub const GOAL_REGION: Rect = Rect::new(820.0, 40.0, 60.0, 60.0);

/// Enemy spawn table: kind, spawn point, territory. The order fixes the
/// contact-scan priority.
const ROSTER: [(EnemyKind, Vec2, Rect); 12] = [
    (
        EnemyKind::Scout,
        Vec2::new(200.0, 240.0),
        Rect::new(140.0, 200.0, 260.0, 230.0),
    ),
    (
        EnemyKind::Scout,
        Vec2::new(300.0, 260.0),
        Rect::new(220.0, 200.0, 240.0, 260.0),
    ),
    (
        EnemyKind::Scout,
        Vec2::new(260.0, 440.0),
        Rect::new(200.0, 380.0, 260.0, 200.0),
    ),
    (
        EnemyKind::Scout,
        Vec2::new(400.0, 150.0),
        Rect::new(340.0, 100.0, 260.0, 180.0),
    ),
    (
        EnemyKind::Stalker,
        Vec2::new(520.0, 360.0),
        Rect::new(450.0, 300.0, 260.0, 250.0),
    ),
    (
        EnemyKind::Stalker,
        Vec2::new(620.0, 260.0),
        Rect::new(580.0, 200.0, 200.0, 200.0),
    ),
    (
        EnemyKind::Stalker,
        Vec2::new(720.0, 380.0),
        Rect::new(660.0, 320.0, 200.0, 200.0),
    ),
    (
        EnemyKind::Stalker,
        Vec2::new(480.0, 210.0),
        Rect::new(420.0, 140.0, 240.0, 220.0),
    ),
    (
        EnemyKind::Brute,
        Vec2::new(340.0, 420.0),
        Rect::new(260.0, 360.0, 300.0, 240.0),
    ),
    (
        EnemyKind::Brute,
        Vec2::new(560.0, 160.0),
        Rect::new(480.0, 100.0, 300.0, 240.0),
    ),
    (
        EnemyKind::Hunter,
        Vec2::new(760.0, 210.0),
        Rect::new(700.0, 140.0, 180.0, 260.0),
    ),
    (
        EnemyKind::Hunter,
        Vec2::new(820.0, 360.0),
        Rect::new(760.0, 300.0, 180.0, 260.0),
    ),
];

/// One full game session: phase, counters, the avatar and the roster.
/// Exclusively owned by its driver; never persisted.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub phase: GamePhase,
    pub lives: u8,
    /// Seconds spent in the current run
    pub elapsed: f32,
    /// Seconds of post-hit immunity remaining (may dip below zero)
    pub damage_cooldown: f32,
    pub goal: Rect,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub effects: ScreenEffects,
    pub(crate) rng: Pcg32,
}

impl GameSession {
    /// Create a session on the menu, enemies at their spawn points
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let enemies = ROSTER
            .iter()
            .map(|&(kind, pos, territory)| Enemy::new(kind, pos, territory, &mut rng))
            .collect();

        Self {
            phase: GamePhase::Menu,
            lives: STARTING_LIVES,
            elapsed: 0.0,
            damage_cooldown: 0.0,
            goal: GOAL_REGION,
            player: Player::new(PLAYER_SPAWN),
            enemies,
            effects: ScreenEffects::default(),
            rng,
        }
    }

    /// Begin a run: fresh counters, player at spawn, enemies scattered
    pub fn start(&mut self) {
        self.phase = GamePhase::Playing;
        self.player = Player::new(PLAYER_SPAWN);
        self.lives = STARTING_LIVES;
        self.elapsed = 0.0;
        self.damage_cooldown = 0.0;
        for enemy in &mut self.enemies {
            enemy.respawn(&mut self.rng);
        }
        log::info!("run started");
    }

    /// Leave a victory/game-over screen back to the menu
    pub fn acknowledge(&mut self) {
        self.phase = GamePhase::Menu;
        self.lives = STARTING_LIVES;
        self.elapsed = 0.0;
        self.damage_cooldown = 0.0;
        log::info!("back to menu");
    }

    /// Whole seconds elapsed, for the HUD
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed as u64
    }

    /// Render-ready view of the current frame
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            lives: self.lives,
            elapsed_secs: self.elapsed_secs(),
            effects: self.effects,
            player: PlayerView {
                pos: self.player.pos(),
                state: self.player.state(),
            },
            enemies: self
                .enemies
                .iter()
                .map(|enemy| EnemyView {
                    pos: enemy.pos(),
                    state: enemy.state(),
                    kind: enemy.kind,
                })
                .collect(),
        }
    }
}

/// Player view for the renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub state: MoveState,
}

/// Enemy view for the renderer; `kind` selects the sprite set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub pos: Vec2,
    pub state: MoveState,
    pub kind: EnemyKind,
}

/// Everything a frontend needs to draw one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub lives: u8,
    pub elapsed_secs: u64,
    pub effects: ScreenEffects,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
}
