//! Menu surface: buttons and the actions they raise
//!
//! Layout numbers and hover/hit bookkeeping live here; drawing and the
//! consequences of an action stay frontend-side.

use glam::Vec2;

use crate::Settings;
use crate::consts::ARENA_WIDTH;
use crate::sim::Rect;

/// What a menu click asks the frontend to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Begin a run
    Start,
    /// Flip the ambient-music toggle
    ToggleMusic,
    /// Flip the sound-effects toggle
    ToggleSfx,
    /// Leave the game
    Exit,
}

/// A rectangular menu button
#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub hover: bool,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            rect,
            label: label.into(),
            hover: false,
        }
    }

    /// Hit test
    pub fn contains(&self, pos: Vec2) -> bool {
        self.rect.contains(pos)
    }

    /// Pointer-move bookkeeping
    pub fn update_hover(&mut self, pos: Vec2) {
        self.hover = self.contains(pos);
    }
}

const BUTTON_WIDTH: f32 = 220.0;
const BUTTON_HEIGHT: f32 = 56.0;

/// The title-menu button column
#[derive(Debug, Clone)]
pub struct Menu {
    pub start: Button,
    pub music: Button,
    pub sfx: Button,
    pub exit: Button,
}

impl Menu {
    pub fn new(settings: &Settings) -> Self {
        let x = ARENA_WIDTH / 2.0 - BUTTON_WIDTH / 2.0;
        let button =
            |y, label: &str| Button::new(Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT), label);

        let mut menu = Self {
            start: button(220.0, "Start"),
            music: button(300.0, ""),
            sfx: button(380.0, ""),
            exit: button(460.0, "Exit"),
        };
        menu.refresh_labels(settings);
        menu
    }

    /// Rewrite the toggle labels from the current settings
    pub fn refresh_labels(&mut self, settings: &Settings) {
        self.music.label = if settings.music_enabled {
            "Music: ON"
        } else {
            "Music: OFF"
        }
        .to_string();
        self.sfx.label = if settings.sfx_enabled {
            "SFX: ON"
        } else {
            "SFX: OFF"
        }
        .to_string();
    }

    /// Pointer-move bookkeeping for every button
    pub fn update_hover(&mut self, pos: Vec2) {
        self.start.update_hover(pos);
        self.music.update_hover(pos);
        self.sfx.update_hover(pos);
        self.exit.update_hover(pos);
    }

    /// Map a pointer press to a menu action
    pub fn handle_click(&self, pos: Vec2) -> Option<MenuAction> {
        if self.start.contains(pos) {
            Some(MenuAction::Start)
        } else if self.music.contains(pos) {
            Some(MenuAction::ToggleMusic)
        } else if self.sfx.contains(pos) {
            Some(MenuAction::ToggleSfx)
        } else if self.exit.contains(pos) {
            Some(MenuAction::Exit)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_maps_to_actions() {
        let menu = Menu::new(&Settings::default());

        assert_eq!(
            menu.handle_click(Vec2::new(450.0, 248.0)),
            Some(MenuAction::Start)
        );
        assert_eq!(
            menu.handle_click(Vec2::new(450.0, 328.0)),
            Some(MenuAction::ToggleMusic)
        );
        assert_eq!(
            menu.handle_click(Vec2::new(450.0, 408.0)),
            Some(MenuAction::ToggleSfx)
        );
        assert_eq!(
            menu.handle_click(Vec2::new(450.0, 488.0)),
            Some(MenuAction::Exit)
        );
        assert_eq!(menu.handle_click(Vec2::new(10.0, 10.0)), None);
    }

    #[test]
    fn test_hover_bookkeeping() {
        let mut menu = Menu::new(&Settings::default());

        menu.update_hover(Vec2::new(450.0, 248.0));
        assert!(menu.start.hover);
        assert!(!menu.music.hover);

        menu.update_hover(Vec2::new(450.0, 328.0));
        assert!(!menu.start.hover);
        assert!(menu.music.hover);
    }

    #[test]
    fn test_toggle_labels_track_settings() {
        let mut settings = Settings::default();
        let mut menu = Menu::new(&settings);
        assert_eq!(menu.music.label, "Music: ON");
        assert_eq!(menu.sfx.label, "SFX: ON");

        settings.music_enabled = false;
        menu.refresh_labels(&settings);
        assert_eq!(menu.music.label, "Music: OFF");
        assert_eq!(menu.sfx.label, "SFX: ON");
    }
}
