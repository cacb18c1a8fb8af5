//! Per-frame advance: input application, movement, encounters, transitions

use glam::Vec2;

use super::collision::first_contact;
use super::state::{GamePhase, GameSession};
use crate::audio::{AudioSink, SoundCue};
use crate::consts::{DAMAGE_COOLDOWN, PLAYER_SPAWN};

/// Input gathered by the frontend for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Pointer press position, if any
    pub pointer_down: Option<Vec2>,
    /// Menu Start action, routed from the UI layer
    pub start: bool,
}

/// Advance the session by one frame.
///
/// The menu phase only reacts to the start action (button hover lives in the
/// UI layer); playing advances the full simulation; the end screens wait for
/// a click to acknowledge. Feedback timers run in every phase.
pub fn tick(session: &mut GameSession, input: &FrameInput, dt: f32, audio: &mut impl AudioSink) {
    let dt = dt.max(0.0);

    session.effects.update(dt);

    match session.phase {
        GamePhase::Menu => {
            if input.start {
                session.start();
            }
        }
        GamePhase::Playing => {
            if let Some(target) = input.pointer_down {
                session.player.set_target(target);
                audio.play(SoundCue::Click);
            }

            session.elapsed += dt;
            session.player.update(dt);

            let player_pos = session.player.pos();
            for enemy in session.enemies.iter_mut() {
                enemy.update(dt, player_pos, &mut session.rng);
            }

            if session.damage_cooldown > 0.0 {
                session.damage_cooldown -= dt;
            }

            check_contact(session, audio);

            if session.phase == GamePhase::Playing && session.goal.contains(session.player.pos()) {
                session.phase = GamePhase::Victory;
                audio.stop_music();
                log::info!("goal reached after {}s", session.elapsed_secs());
            }
        }
        GamePhase::Victory | GamePhase::GameOver => {
            if input.pointer_down.is_some() {
                session.acknowledge();
                audio.start_music();
            }
        }
    }
}

/// Scan for a player/enemy contact and apply damage.
///
/// Only the first enemy in roster order is considered, and it ends the scan
/// even while the cooldown is blocking the damage itself.
fn check_contact(session: &mut GameSession, audio: &mut impl AudioSink) {
    let Some(hit) = first_contact(session.player.pos(), &session.enemies) else {
        return;
    };

    if session.damage_cooldown > 0.0 {
        return;
    }

    session.lives -= 1;
    session.damage_cooldown = DAMAGE_COOLDOWN;

    session.effects.start_flash();
    session.effects.start_shake();
    audio.play(SoundCue::Alert);

    // The forced respawn doubles as a re-target, click cue included.
    session.player.respawn_at(PLAYER_SPAWN);
    audio.play(SoundCue::Click);

    log::debug!(
        "hit by {:?}, {} lives left",
        session.enemies[hit].kind,
        session.lives
    );

    if session.lives == 0 {
        session.phase = GamePhase::GameOver;
        log::info!("game over");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{CONTACT_RADIUS, STARTING_LIVES};

    const DT: f32 = 1.0 / 60.0;

    /// Sink that records everything the simulation asks for
    #[derive(Default)]
    struct TestAudio {
        cues: Vec<SoundCue>,
        music_playing: bool,
    }

    impl AudioSink for TestAudio {
        fn play(&mut self, cue: SoundCue) {
            self.cues.push(cue);
        }

        fn start_music(&mut self) {
            self.music_playing = true;
        }

        fn stop_music(&mut self) {
            self.music_playing = false;
        }
    }

    fn playing_session() -> GameSession {
        let mut session = GameSession::new(2024);
        session.phase = GamePhase::Playing;
        session
    }

    #[test]
    fn test_menu_start_begins_run() {
        let mut session = GameSession::new(1);
        let mut audio = TestAudio::default();

        let input = FrameInput {
            start: true,
            ..Default::default()
        };
        tick(&mut session, &input, DT, &mut audio);

        assert_eq!(session.phase, GamePhase::Playing);
        assert_eq!(session.lives, STARTING_LIVES);
        assert_eq!(session.player.pos(), PLAYER_SPAWN);
    }

    #[test]
    fn test_menu_does_not_simulate() {
        let mut session = GameSession::new(1);
        let mut audio = TestAudio::default();
        let before: Vec<Vec2> = session.enemies.iter().map(|e| e.pos()).collect();

        let input = FrameInput {
            pointer_down: Some(Vec2::new(450.0, 300.0)),
            ..Default::default()
        };
        tick(&mut session, &input, DT, &mut audio);

        assert_eq!(session.phase, GamePhase::Menu);
        assert_eq!(session.elapsed, 0.0);
        let after: Vec<Vec2> = session.enemies.iter().map(|e| e.pos()).collect();
        assert_eq!(before, after);
        assert!(audio.cues.is_empty());
    }

    #[test]
    fn test_click_sets_target_and_plays_cue() {
        let mut session = playing_session();
        let mut audio = TestAudio::default();

        let input = FrameInput {
            pointer_down: Some(Vec2::new(300.0, 420.0)),
            ..Default::default()
        };
        tick(&mut session, &input, DT, &mut audio);

        assert_eq!(audio.cues, vec![SoundCue::Click]);
        assert!(session.player.pos().x > 120.0);
        assert!(session.elapsed > 0.0);
    }

    #[test]
    fn test_contact_scenario() {
        // Player at (100, 416), enemy at (100, 420): distance 4, in range.
        let mut session = playing_session();
        let mut audio = TestAudio::default();
        session.player.respawn_at(Vec2::new(100.0, 416.0));
        session.enemies[0].mover.pos = Vec2::new(100.0, 420.0);

        check_contact(&mut session, &mut audio);

        assert_eq!(session.lives, STARTING_LIVES - 1);
        assert_eq!(session.damage_cooldown, DAMAGE_COOLDOWN);
        assert_eq!(session.player.pos(), PLAYER_SPAWN);
        assert!(session.effects.flash_active());
        assert!(session.effects.shake_active());
        assert_eq!(audio.cues, vec![SoundCue::Alert, SoundCue::Click]);
    }

    #[test]
    fn test_cooldown_blocks_repeat_damage() {
        let mut session = playing_session();
        let mut audio = TestAudio::default();
        session.player.respawn_at(Vec2::new(100.0, 416.0));
        session.enemies[0].mover.pos = Vec2::new(100.0, 420.0);
        // A second enemy in range the same frame must not double-dip either.
        session.enemies[1].mover.pos = Vec2::new(100.0, 412.0);

        check_contact(&mut session, &mut audio);
        assert_eq!(session.lives, STARTING_LIVES - 1);

        // Still in contact on the next check, cooldown armed: no damage.
        session.player.respawn_at(Vec2::new(100.0, 416.0));
        check_contact(&mut session, &mut audio);
        assert_eq!(session.lives, STARTING_LIVES - 1);
    }

    #[test]
    fn test_lethal_contact_ends_run() {
        let mut session = playing_session();
        let mut audio = TestAudio::default();
        session.lives = 1;
        session.player.respawn_at(Vec2::new(100.0, 416.0));
        session.enemies[0].mover.pos = Vec2::new(100.0, 420.0);

        check_contact(&mut session, &mut audio);

        assert_eq!(session.lives, 0);
        assert_eq!(session.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_cooldown_counts_down_during_play() {
        let mut session = playing_session();
        let mut audio = TestAudio::default();
        session.damage_cooldown = 0.5;
        // Park the player away from the roster so nothing connects.
        session.player.respawn_at(Vec2::new(20.0, 20.0));

        tick(&mut session, &FrameInput::default(), DT, &mut audio);

        assert!((session.damage_cooldown - (0.5 - DT)).abs() < 1e-6);
    }

    #[test]
    fn test_goal_entry_wins() {
        let mut session = playing_session();
        let mut audio = TestAudio::default();
        audio.music_playing = true;
        // Inside the goal rect (820, 40, 60, 60); the roster spawns are all
        // well clear of it.
        session.player.respawn_at(Vec2::new(850.0, 70.0));

        tick(&mut session, &FrameInput::default(), DT, &mut audio);

        assert_eq!(session.phase, GamePhase::Victory);
        assert!(!audio.music_playing);
    }

    #[test]
    fn test_goal_edge_is_inclusive() {
        let mut session = playing_session();
        let mut audio = TestAudio::default();
        session.player.respawn_at(Vec2::new(820.0, 40.0));

        tick(&mut session, &FrameInput::default(), DT, &mut audio);

        assert_eq!(session.phase, GamePhase::Victory);
    }

    #[test]
    fn test_acknowledge_returns_to_menu() {
        let mut session = playing_session();
        let mut audio = TestAudio::default();
        session.phase = GamePhase::Victory;
        session.lives = 3;
        session.elapsed = 17.2;
        session.damage_cooldown = 0.4;

        let input = FrameInput {
            pointer_down: Some(Vec2::new(1.0, 1.0)),
            ..Default::default()
        };
        tick(&mut session, &input, DT, &mut audio);

        assert_eq!(session.phase, GamePhase::Menu);
        assert_eq!(session.lives, STARTING_LIVES);
        assert_eq!(session.elapsed, 0.0);
        assert_eq!(session.damage_cooldown, 0.0);
        assert!(audio.music_playing);
    }

    #[test]
    fn test_end_screens_wait_for_click() {
        let mut session = playing_session();
        let mut audio = TestAudio::default();
        session.phase = GamePhase::GameOver;

        tick(&mut session, &FrameInput::default(), DT, &mut audio);

        assert_eq!(session.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut session = playing_session();
        let mut audio = TestAudio::default();
        session.player.respawn_at(Vec2::new(20.0, 20.0));

        tick(&mut session, &FrameInput::default(), -1.0, &mut audio);

        assert_eq!(session.elapsed, 0.0);
    }

    #[test]
    fn test_contact_radius_matches_tuning() {
        // Keeps the scan radius and the scenario distances in sync.
        assert_eq!(CONTACT_RADIUS, 28.0);
    }
}
