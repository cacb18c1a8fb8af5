//! Neon Run headless demo
//!
//! Drives a scripted session at 60 Hz with a logging audio sink and dumps
//! the final frame snapshot as JSON. Rendering frontends consume the same
//! `tick`/`Snapshot` surface this binary exercises.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use neon_run::Settings;
use neon_run::audio::{AudioSink, LogAudio};
use neon_run::sim::{FrameInput, GamePhase, GameSession, tick};
use neon_run::ui::{Menu, MenuAction};

const FRAME_DT: f32 = 1.0 / 60.0;
const SETTINGS_FILE: &str = "neon-run-settings.json";

fn main() {
    env_logger::init();

    let settings = Settings::load(Path::new(SETTINGS_FILE));
    let mut audio = LogAudio::new(&settings);
    let mut menu = Menu::new(&settings);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut session = GameSession::new(seed);
    log::info!("session seeded with {seed}");

    // The menu loops its ambient track until a run ends it.
    audio.start_music();

    // Press Start the way a pointer-driven frontend would.
    let press = Vec2::new(450.0, 248.0);
    menu.update_hover(press);
    let start = matches!(menu.handle_click(press), Some(MenuAction::Start));
    tick(
        &mut session,
        &FrameInput {
            start,
            ..Default::default()
        },
        FRAME_DT,
        &mut audio,
    );

    // Head for the goal and let the roster react for up to ten simulated
    // seconds.
    let mut input = FrameInput {
        pointer_down: Some(Vec2::new(850.0, 70.0)),
        ..Default::default()
    };
    for _ in 0..600 {
        tick(&mut session, &input, FRAME_DT, &mut audio);
        input = FrameInput::default();
        if matches!(session.phase, GamePhase::Victory | GamePhase::GameOver) {
            break;
        }
    }

    match session.phase {
        GamePhase::Victory => log::info!("demo run won in {}s", session.elapsed_secs()),
        GamePhase::GameOver => log::info!("demo run lost after {}s", session.elapsed_secs()),
        _ => log::info!("demo run still going after {}s", session.elapsed_secs()),
    }

    match serde_json::to_string_pretty(&session.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("could not encode snapshot: {err}"),
    }

    settings.save(Path::new(SETTINGS_FILE));
}
